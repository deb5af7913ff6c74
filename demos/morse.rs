use ndarray as nd;
use lumispec::{
    broadening::{ self, BroadeningConfig },
    dvr::{ self, DvrConfig },
    scattering,
    units,
};

// solve for vibrational levels of a Morse oscillator (H³⁵Cl parameters) from a
// coarsely sampled surface, then broaden the fundamental progression

const DE: f64 = 0.1697; // well depth; Eh
const A: f64 = 0.989; // range parameter; a0⁻¹
const RE: f64 = 2.409; // equilibrium separation; a0

fn main() {
    let mu = units::amu_to_au(units::reduced_mass(1.00782503, 34.96885268));
    let omega = A * (2.0 * DE / mu).sqrt();
    let e_exact = move |n: usize| {
        let x = omega * (n as f64 + 0.5);
        x - x.powi(2) / (4.0 * DE)
    };

    // coarse surface, as it would come out of an electronic structure scan
    let r: nd::Array1<f64> = nd::Array1::linspace(1.5, 7.0, 30);
    let e: nd::Array1<f64>
        = r.mapv(|rk| DE * (1.0 - (-A * (rk - RE)).exp()).powi(2));

    let sol = dvr::dvr(&r, &e, mu, DvrConfig::default().with_interp(true))
        .unwrap();
    println!("grid: {} points, dx = {:.4e} a0", sol.len(), sol.get_dx());
    println!("{:>3} {:>14} {:>14} {:>12}", "n", "computed/cm⁻¹", "exact/cm⁻¹", "tps/a0");
    for n in 0..6 {
        let tps = sol.turning_points(n).unwrap();
        println!(
            "{:>3} {:>14.3} {:>14.3} {:>5.3}..{:<5.3}",
            n,
            units::hartree_to_wavenumber(sol.get_ev()[n]),
            units::hartree_to_wavenumber(e_exact(n)),
            tps.first().copied().unwrap_or(f64::NAN),
            tps.last().copied().unwrap_or(f64::NAN),
        );
    }

    // stick spectrum of transitions out of the ground state, with intensities
    // falling off with the overtone order
    let de: nd::Array1<f64> = sol.transitions(0).slice(nd::s![..4]).to_owned();
    let f: nd::Array1<f64>
        = (0..de.len()).map(|j| 0.1_f64.powi(j as i32)).collect();
    let config = BroadeningConfig::default()
        .with_gamma(2e-4)
        .with_npts(4000);
    let (x, spectrum) = broadening::lorentz(&de, &f, &config).unwrap();
    let total = spectrum.sum_axis(nd::Axis(0));
    let imax = total.iter().enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    println!(
        "strongest band at {:.3} cm⁻¹",
        units::hartree_to_wavenumber(x[imax]),
    );

    // resonance profile through the first excited level
    let e_in: nd::Array1<f64> = nd::Array1::linspace(0.0, 2.0 * de[0], 9);
    let kh = scattering::kramers_heisenberg_scan(&e_in, de[0], 1e-3, 2e-3, 0.0);
    for (ek, ik) in e_in.iter().zip(&kh) {
        println!("{:>10.3} cm⁻¹ {:>10.4e}", units::hartree_to_wavenumber(*ek), ik);
    }
}
