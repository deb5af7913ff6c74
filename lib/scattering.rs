//! Kramers–Heisenberg intensity for inelastic scattering between two states.

use ndarray as nd;
use crate::{ Arr1, error::LengthError };

/// Evaluate the Kramers–Heisenberg resonance expression at incident energy
/// `e`, for an intermediate state at energy `e1` with intensities `f1`, `f2`
/// of the two transitions involved and momentum transfer `k`.
///
/// ```text
///                 f1 f2
/// --------------------------------
/// (e - e1 - k)² + (f1 + f2)²
/// ```
///
/// The final-state energy does not enter the expression.
pub fn kramers_heisenberg(e: f64, e1: f64, f1: f64, f2: f64, k: f64) -> f64 {
    (f1 * f2) / ((e - e1 - k).powi(2) + (f1 + f2).powi(2))
}

/// Vectorized form of [`kramers_heisenberg`] over equal-length arrays, with a
/// common momentum transfer `k`.
pub fn kramers_heisenberg_array<A, B, C, D>(
    e: &Arr1<A>,
    e1: &Arr1<B>,
    f1: &Arr1<C>,
    f2: &Arr1<D>,
    k: f64,
) -> Result<nd::Array1<f64>, LengthError>
where
    A: nd::Data<Elem = f64>,
    B: nd::Data<Elem = f64>,
    C: nd::Data<Elem = f64>,
    D: nd::Data<Elem = f64>,
{
    LengthError::check(e, e1)?;
    LengthError::check(e, f1)?;
    LengthError::check(e, f2)?;
    let res: nd::Array1<f64>
        = nd::Zip::from(e).and(e1).and(f1).and(f2)
        .map_collect(|&ei, &e1i, &f1i, &f2i| {
            kramers_heisenberg(ei, e1i, f1i, f2i, k)
        });
    Ok(res)
}

/// Scan the incident energy over `e` for a single pair of transitions.
pub fn kramers_heisenberg_scan<S>(
    e: &Arr1<S>,
    e1: f64,
    f1: f64,
    f2: f64,
    k: f64,
) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    e.mapv(|ei| kramers_heisenberg(ei, e1, f1, f2, k))
}
