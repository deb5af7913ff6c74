//! Collection of all error types.
//!
//! All errors derive [`thiserror::Error`], making them composable when allowed
//! and compatible with application code using [`anyhow`][anyhow].
//!
//! [anyhow]: https://crates.io/crates/anyhow

use std::cmp::Ordering;
use ndarray as nd;
#[cfg(feature = "lapack")]
use ndarray_linalg::error::LinalgError;
use thiserror::Error;

/// Returned when an operation requiring equal-length arrays encounters arrays
/// with unequal length.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("encountered arrays with incompatible lengths; got {0} and {1}")]
pub struct LengthError(pub usize, pub usize);

impl LengthError {
    pub(crate) fn check<S, A, T, B>(
        a: &nd::ArrayBase<S, nd::Ix1>,
        b: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = A>,
        T: nd::Data<Elem = B>,
    {
        let na = a.len();
        let nb = b.len();
        (na == nb).then_some(()).ok_or(Self(na, nb))
    }
}

/// Returned from a call to [`find_zeros`][crate::interp::find_zeros] when data
/// arrays are less than 5 elements long.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("coordinate arrays in interpolation must be longer than 4 elements; got {0}")]
pub struct LagrangeError(pub usize);

impl LagrangeError {
    pub(crate) fn check<S, A>(a: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = A>
    {
        let n = a.len();
        (n > 4).then_some(()).ok_or(Self(n))
    }
}

/// Returned when constructing a [`CubicSpline`][crate::interp::CubicSpline]
/// from unusable knots.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplineError {
    /// Fewer than two knots.
    #[error("cubic spline requires at least 2 knots; got {0}")]
    TooFew(usize),

    /// Knot `i` does not lie strictly to the right of knot `i - 1`.
    #[error("spline knots must be strictly increasing; violated at index {0}")]
    NotIncreasing(usize),
}

impl SplineError {
    pub(crate) fn check<S>(x: &nd::ArrayBase<S, nd::Ix1>) -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        let n = x.len();
        if n < 2 { return Err(Self::TooFew(n)); }
        match first_not_increasing(x) {
            Some(i) => Err(Self::NotIncreasing(i)),
            None => Ok(()),
        }
    }
}

// index of the first element that is not strictly greater than its predecessor
// (NaNs count as violations)
pub(crate) fn first_not_increasing<S>(x: &nd::ArrayBase<S, nd::Ix1>)
    -> Option<usize>
where S: nd::Data<Elem = f64>
{
    x.iter().zip(x.iter().skip(1))
        .position(|(xkm1, xk)| xk.partial_cmp(xkm1) != Some(Ordering::Greater))
        .map(|k| k + 1)
}

pub(crate) fn first_non_finite<S>(x: &nd::ArrayBase<S, nd::Ix1>)
    -> Option<usize>
where S: nd::Data<Elem = f64>
{
    x.iter().position(|xk| !xk.is_finite())
}

/// Returned from functions in [`interp`][crate::interp].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpError {
    /// [`LengthError`]
    #[error("length error: {0}")]
    Length(#[from] LengthError),

    /// [`LagrangeError`]
    #[error("lagrange error: {0}")]
    Lagrange(#[from] LagrangeError),

    /// [`SplineError`]
    #[error("spline error: {0}")]
    Spline(#[from] SplineError),

    /// Returned when a resampling grid of fewer than 2 points is requested.
    #[error("resampled grids must have at least 2 points; got {0}")]
    BadNpts(usize),
}

/// Returned from the dense symmetric eigensolver in [`eigen`][crate::eigen].
#[derive(Debug, Error)]
pub enum EigenError {
    /// The iterative decomposition of an `n`×`n` matrix did not converge.
    #[error("symmetric eigendecomposition of a {0}x{0} matrix failed to converge")]
    NoConvergence(usize),

    /// [`LinalgError`].
    #[cfg(feature = "lapack")]
    #[error("linalg error: {0}")]
    Linalg(#[from] LinalgError),
}

/// Returned from the DVR solver functions in [`dvr`][crate::dvr].
#[derive(Debug, Error)]
pub enum DvrError {
    /// Returned when fewer than 2 grid points are given.
    #[error("DVR grids must have at least 2 points; got {0}")]
    TooFewPoints(usize),

    /// Returned when the coordinate grid is not strictly increasing at the
    /// given index.
    #[error("coordinate grid must be strictly increasing; violated at index {0}")]
    NotIncreasing(usize),

    /// Returned when the coordinate grid holds a non-finite value at the given
    /// index.
    #[error("coordinate grid must be finite; got a non-finite value at index {0}")]
    NonFiniteGrid(usize),

    /// Returned when the potential holds a non-finite value at the given
    /// index.
    #[error("potential must be finite; got a non-finite value at index {0}")]
    NonFinitePotential(usize),

    /// Returned when a non-positive (or non-finite) reduced mass is
    /// encountered.
    #[error("reduced mass must be finite and greater than 0; got {0}")]
    BadMass(f64),

    /// Returned when the computed grid spacing is not finite and positive.
    #[error("grid spacing must be finite and greater than 0; got {0}")]
    BadSpacing(f64),

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),

    /// [`InterpError`].
    #[error("interpolation error: {0}")]
    Interp(#[from] InterpError),

    /// [`EigenError`].
    #[error("eigensolver error: {0}")]
    Eigen(#[from] EigenError),
}

impl DvrError {
    pub(crate) fn check_npoints(n: usize) -> Result<(), Self> {
        (n >= 2).then_some(()).ok_or(Self::TooFewPoints(n))
    }

    pub(crate) fn check_finite<S, T>(
        r: &nd::ArrayBase<S, nd::Ix1>,
        e: &nd::ArrayBase<T, nd::Ix1>,
    ) -> Result<(), Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        if let Some(i) = first_non_finite(r) {
            return Err(Self::NonFiniteGrid(i));
        }
        if let Some(i) = first_non_finite(e) {
            return Err(Self::NonFinitePotential(i));
        }
        Ok(())
    }

    pub(crate) fn check_increasing<S>(r: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match first_not_increasing(r) {
            Some(i) => Err(Self::NotIncreasing(i)),
            None => Ok(()),
        }
    }

    pub(crate) fn check_mass(mu: f64) -> Result<(), Self> {
        (mu.is_finite() && mu > 0.0).then_some(()).ok_or(Self::BadMass(mu))
    }

    pub(crate) fn check_spacing(dx: f64) -> Result<(), Self> {
        (dx.is_finite() && dx > 0.0).then_some(()).ok_or(Self::BadSpacing(dx))
    }
}

/// Returned from the lineshape functions in
/// [`broadening`][crate::broadening].
#[derive(Debug, Error, PartialEq)]
pub enum BroadeningError {
    /// Returned when a non-positive (or non-finite) broadening width is
    /// encountered.
    #[error("broadening width must be finite and greater than 0; got {0}")]
    BadGamma(f64),

    /// Returned when an energy axis of fewer than 2 points is requested.
    #[error("energy axis must have at least 2 points; got {0}")]
    BadNpts(usize),

    /// Returned when a line's time stamp is not finite.
    #[error("time stamps must be finite; got a non-finite value at index {0}")]
    NonFiniteTime(usize),

    /// Returned when no lines are given and no explicit bounds are set.
    #[error("cannot infer spectrum bounds from an empty set of lines")]
    Empty,

    /// [`LengthError`]
    #[error("array length error: {0}")]
    Length(#[from] LengthError),
}

impl BroadeningError {
    pub(crate) fn check_gamma(gamma: f64) -> Result<(), Self> {
        (gamma.is_finite() && gamma > 0.0)
            .then_some(()).ok_or(Self::BadGamma(gamma))
    }

    pub(crate) fn check_npts(npts: usize) -> Result<(), Self> {
        (npts >= 2).then_some(()).ok_or(Self::BadNpts(npts))
    }

    pub(crate) fn check_times<S>(t: &nd::ArrayBase<S, nd::Ix1>)
        -> Result<(), Self>
    where S: nd::Data<Elem = f64>
    {
        match first_non_finite(t) {
            Some(i) => Err(Self::NonFiniteTime(i)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increasing_check_reports_first_violation() {
        let x = nd::array![0.0, 1.0, 1.0, 0.5];
        assert_eq!(first_not_increasing(&x), Some(2));
        let x = nd::array![0.0, 1.0, 2.0];
        assert_eq!(first_not_increasing(&x), None);
        let x = nd::array![0.0, f64::NAN, 2.0];
        assert_eq!(first_not_increasing(&x), Some(1));
    }

    #[test]
    fn dvr_checks() {
        assert!(matches!(DvrError::check_npoints(1), Err(DvrError::TooFewPoints(1))));
        assert!(DvrError::check_npoints(2).is_ok());
        assert!(matches!(DvrError::check_mass(0.0), Err(DvrError::BadMass(_))));
        assert!(matches!(DvrError::check_mass(f64::NAN), Err(DvrError::BadMass(_))));
        assert!(DvrError::check_mass(1836.0).is_ok());
        assert!(matches!(DvrError::check_spacing(f64::INFINITY), Err(DvrError::BadSpacing(_))));
        let r = nd::array![0.0, 1.0, f64::INFINITY];
        let e = nd::array![0.0, f64::NAN, 0.0];
        assert!(matches!(
            DvrError::check_finite(&r, &nd::array![0.0, 0.0, 0.0]),
            Err(DvrError::NonFiniteGrid(2)),
        ));
        assert!(matches!(
            DvrError::check_finite(&nd::array![0.0, 1.0, 2.0], &e),
            Err(DvrError::NonFinitePotential(1)),
        ));
        assert!(matches!(
            BroadeningError::check_times(&nd::array![0.0, f64::NEG_INFINITY]),
            Err(BroadeningError::NonFiniteTime(1)),
        ));
    }

    #[test]
    fn spline_checks() {
        assert_eq!(SplineError::check(&nd::array![1.0]), Err(SplineError::TooFew(1)));
        assert_eq!(
            SplineError::check(&nd::array![0.0, 2.0, 1.0]),
            Err(SplineError::NotIncreasing(2)),
        );
        assert_eq!(SplineError::check(&nd::array![0.0, 1.0]), Ok(()));
    }

    #[test]
    fn errors_compose() {
        let err: DvrError = InterpError::from(LengthError(3, 4)).into();
        assert_eq!(
            err.to_string(),
            "interpolation error: length error: encountered arrays with \
            incompatible lengths; got 3 and 4"
        );
    }
}
