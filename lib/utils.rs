//! Miscellaneous tools for grid-sampled functions.

use ndarray as nd;
use crate::Arr1;

/// Integrate using the trapezoidal rule.
///
/// *Panics if `y` has length less than 2*.
pub fn trapz<S>(y: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = y.len();
    (dx / 2.0) * (y[0] + 2.0 * y.slice(nd::s![1..n - 1]).sum() + y[n - 1])
}

/// Calculate the norm of a real wavefunction via the trapezoidal rule.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    trapz(&q.mapv(|qk| qk.powi(2)), dx)
}

/// Return the largest relative deviation of adjacent-point spacings in `x` from
/// `dx`.
///
/// Returns `0.0` for arrays shorter than 2.
pub fn spacing_deviation<S>(x: &Arr1<S>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    x.iter().zip(x.iter().skip(1))
        .map(|(xk, xkp1)| ((xkp1 - xk) - dx).abs() / dx.abs())
        .fold(0.0, f64::max)
}

/// Return an array of `npts` evenly spaced values covering `[x0, x1]`, with
/// both endpoints reproduced exactly.
///
/// *Panics if `npts` is less than 2*.
pub fn linspace_exact(x0: f64, x1: f64, npts: usize) -> nd::Array1<f64> {
    let mut x: nd::Array1<f64> = nd::Array1::linspace(x0, x1, npts);
    x[npts - 1] = x1;
    x
}
