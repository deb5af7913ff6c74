#![allow(non_snake_case)]

use std::f64::consts::PI;
use ndarray as nd;
use proptest::prelude::*;
use lumispec::{
    dvr::{ dvr, dvr_default, hamiltonian, DvrConfig, Spacing },
    error::DvrError,
};

fn max_abs_dev_from_identity(m: &nd::Array2<f64>) -> f64 {
    m.indexed_iter()
        .map(|((i, j), x)| (x - if i == j { 1.0 } else { 0.0 }).abs())
        .fold(0.0, f64::max)
}

#[test]
fn three_point_free_particle() {
    let r = nd::array![0.0, 1.0, 2.0];
    let e = nd::array![0.0, 0.0, 0.0];
    let sol = dvr_default(&r, &e, 1.0).unwrap();
    assert_eq!(sol.get_dx(), 1.0);

    // 1 / (2 mu mp²) = 1/2
    let d = PI.powi(2) / 6.0;
    let H = hamiltonian(sol.get_dx(), 1.0, sol.get_e());
    let expected = nd::array![
        [   d, -1.0, 0.25],
        [-1.0,    d, -1.0],
        [0.25, -1.0,    d],
    ];
    assert!(H.iter().zip(&expected).all(|(h, x)| (h - x).abs() < 1e-14));

    let (r_out, e_out, c, ev) = sol.into_parts();
    assert_eq!(r_out, r);
    assert_eq!(e_out, e);
    assert_eq!(c.dim(), (3, 3));
    assert!(ev.iter().all(|x| x.is_finite()));
    assert!(ev[0] <= ev[1] && ev[1] <= ev[2]);
    for (ck, ek) in c.rows().into_iter().zip(&ev) {
        let resid = &H.dot(&ck) - &(&ck * *ek);
        assert!(resid.iter().all(|x| x.abs() < 1e-12));
    }
    // the trace is preserved
    assert!((ev.sum() - 3.0 * d).abs() < 1e-12);
}

#[test]
fn harmonic_oscillator_levels() {
    let (k, mu): (f64, f64) = (2.0, 3.0);
    let omega = (k / mu).sqrt();
    let r: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 301);
    let e = r.mapv(|rk| 0.5 * k * rk.powi(2));
    let sol = dvr_default(&r, &e, mu).unwrap();
    for n in 0..8 {
        let expected = (n as f64 + 0.5) * omega;
        let rel = (sol.get_ev()[n] - expected).abs() / expected;
        assert!(rel < 1e-6, "level {n}: {} vs {expected}", sol.get_ev()[n]);
    }
}

#[test]
fn harmonic_oscillator_coarse_grid() {
    // a deliberately coarse grid still lands within a few percent
    let r: nd::Array1<f64> = nd::Array1::linspace(-6.0, 6.0, 25);
    let e = r.mapv(|rk| 0.5 * rk.powi(2));
    let sol = dvr_default(&r, &e, 1.0).unwrap();
    for n in 0..4 {
        let expected = n as f64 + 0.5;
        assert!((sol.get_ev()[n] - expected).abs() / expected < 0.03);
    }
}

#[test]
fn coefficients_are_orthonormal() {
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 3.0, 60);
    let e = r.mapv(|rk| (3.0 * rk).sin() + 0.2 * rk);
    let sol = dvr_default(&r, &e, 12.0).unwrap();
    let c = sol.get_c();
    assert!(max_abs_dev_from_identity(&c.dot(&c.t())) < 1e-10);
    assert!(max_abs_dev_from_identity(&c.t().dot(c)) < 1e-10);
}

#[test]
fn interpolated_grid_has_500_points() {
    let r = nd::array![0.8, 1.1, 1.4, 1.7, 2.0, 2.3, 2.6];
    let e = r.mapv(|rk: f64| 0.17 * (1.0 - (-1.03 * (rk - 1.4)).exp()).powi(2));
    let sol = dvr(&r, &e, 918.0, DvrConfig::default().with_interp(true)).unwrap();
    assert_eq!(sol.get_r().len(), 500);
    assert_eq!(sol.get_e().len(), 500);
    assert_eq!(sol.get_ev().len(), 500);
    assert_eq!(sol.get_c().dim(), (500, 500));
    assert_eq!(sol.get_r()[0], 0.8);
    assert_eq!(sol.get_r()[499], 2.6);
    assert!((sol.get_dx() - 1.8 / 499.0).abs() < 1e-12);
    // the spline passes through the original samples
    assert!((sol.get_e()[0] - e[0]).abs() < 1e-12);
    assert!((sol.get_e()[499] - e[6]).abs() < 1e-12);
}

#[test]
fn interpolation_from_two_points() {
    let r = nd::array![0.0, 1.0];
    let e = nd::array![0.0, 1.0];
    let config = DvrConfig::default().with_interp(true).with_npts(40);
    let sol = dvr(&r, &e, 1.0, config).unwrap();
    assert_eq!(sol.get_r().len(), 40);
    // linear ramp
    for (rk, ek) in sol.get_r().iter().zip(sol.get_e()) {
        assert!((rk - ek).abs() < 1e-12);
    }
}

#[test]
fn interpolation_rejects_duplicates() {
    let r = nd::array![0.0, 0.5, 0.5, 1.0];
    let e = nd::array![0.0, 1.0, 1.0, 0.0];
    let res = dvr(&r, &e, 1.0, DvrConfig::default().with_interp(true));
    assert!(matches!(res, Err(DvrError::NotIncreasing(2))));
}

#[test]
fn morse_levels_from_coarse_surface() {
    // Morse oscillator: E_n = ω (n + 1/2) - [ω (n + 1/2)]² / (4 De)
    let (de, a, re, mu): (f64, f64, f64, f64) = (0.1744, 1.02764, 1.4, 918.6);
    let omega = a * (2.0 * de / mu).sqrt();
    let morse = |rk: f64| de * (1.0 - (-a * (rk - re)).exp()).powi(2);
    let r: nd::Array1<f64> = nd::Array1::linspace(0.5, 6.0, 40);
    let e = r.mapv(morse);
    let sol = dvr(&r, &e, mu, DvrConfig::default().with_interp(true)).unwrap();
    for n in 0..3 {
        let x = omega * (n as f64 + 0.5);
        let expected = x - x.powi(2) / (4.0 * de);
        let rel = (sol.get_ev()[n] - expected).abs() / expected;
        assert!(rel < 5e-3, "level {n}: {} vs {expected}", sol.get_ev()[n]);
    }
}

#[test]
fn span_spacing_rescales_free_levels() {
    let n = 20;
    let r: nd::Array1<f64> = nd::Array1::linspace(0.0, 4.0, n);
    let e: nd::Array1<f64> = nd::Array1::zeros(n);
    let adj = dvr_default(&r, &e, 1.0).unwrap();
    let span
        = dvr(&r, &e, 1.0, DvrConfig::default().with_spacing(Spacing::Span))
        .unwrap();
    let factor = (n as f64 / (n - 1) as f64).powi(2);
    for (ea, es) in adj.get_ev().iter().zip(span.get_ev()) {
        assert!((es - ea * factor).abs() < 1e-9 * ea.abs().max(1.0));
    }
}

#[test]
fn non_finite_potential_is_rejected() {
    let r: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 200);
    let mut e = r.mapv(|rk| 0.5 * rk.powi(2));
    e[50] = f64::NAN;
    assert!(matches!(dvr_default(&r, &e, 1.0), Err(DvrError::NonFinitePotential(50))));
    e[50] = f64::INFINITY;
    assert!(matches!(dvr_default(&r, &e, 1.0), Err(DvrError::NonFinitePotential(50))));
}

#[test]
fn non_finite_grid_is_rejected() {
    let e = nd::array![0.0, 0.0, 0.0];
    assert!(matches!(
        dvr_default(&nd::array![0.0, 1.0, f64::INFINITY], &e, 1.0),
        Err(DvrError::NonFiniteGrid(2)),
    ));
    assert!(matches!(
        dvr_default(&nd::array![0.0, f64::NAN, 2.0], &e, 1.0),
        Err(DvrError::NonFiniteGrid(1)),
    ));
}

#[test]
fn unevenly_spaced_grid_solves() {
    // Chebyshev-like clustering toward the center
    let n = 81;
    let r: nd::Array1<f64>
        = nd::Array1::from_shape_fn(n, |i| {
            let u = -1.0 + 2.0 * i as f64 / (n - 1) as f64;
            6.0 * (u + 0.1 * (PI * u).sin())
        });
    let e = r.mapv(|rk| 0.5 * rk.powi(2));
    let sol = dvr_default(&r, &e, 1.0).unwrap();
    assert_eq!(sol.len(), n);
    let ev = sol.get_ev();
    assert!(ev.iter().all(|x| x.is_finite()));
    assert!(ev.iter().zip(ev.iter().skip(1)).all(|(a, b)| a <= b));
    let c = sol.get_c();
    assert!(max_abs_dev_from_identity(&c.dot(&c.t())) < 1e-10);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn hamiltonian_symmetric(
        e in prop::collection::vec(-10.0f64..10.0, 2..40),
        dx in 0.01f64..1.0,
        mu in 0.1f64..2000.0,
    ) {
        let e = nd::Array1::from(e);
        let H = hamiltonian(dx, mu, &e);
        for ((i, j), hij) in H.indexed_iter() {
            prop_assert_eq!(*hij, H[[j, i]]);
        }
    }

    #[test]
    fn spectrum_sorted_and_orthonormal(
        e in prop::collection::vec(-5.0f64..5.0, 2..30),
        dx in 0.05f64..1.0,
        mu in 0.5f64..50.0,
    ) {
        let e = nd::Array1::from(e);
        let n = e.len();
        let r: nd::Array1<f64> = nd::Array1::from_shape_fn(n, |i| i as f64 * dx);
        let sol = dvr_default(&r, &e, mu).unwrap();
        let ev = sol.get_ev();
        prop_assert!(ev.iter().zip(ev.iter().skip(1)).all(|(a, b)| a <= b));
        let c = sol.get_c();
        prop_assert!(max_abs_dev_from_identity(&c.dot(&c.t())) < 1e-9);

        let H = hamiltonian(sol.get_dx(), mu, &e);
        let scale = ev.iter().fold(1.0_f64, |acc, x| acc.max(x.abs()));
        for (ck, ek) in c.rows().into_iter().zip(ev) {
            let resid = &H.dot(&ck) - &(&ck * *ek);
            let norm = resid.iter().map(|x| x.powi(2)).sum::<f64>().sqrt();
            prop_assert!(norm < 1e-8 * scale);
        }
    }
}
