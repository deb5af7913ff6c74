//! Interpolation of array-sampled (continuous) functions: natural cubic splines
//! for grid refinement, and Lagrange interpolation for locating zeros.
//!
//! ```
//! use ndarray as nd;
//! use lumispec::interp::{ Zero, find_zeros };
//!
//! let x: nd::Array1<f64> = nd::Array::linspace(-5.0, 5.0, 1000);
//! let y = x.mapv(|xk| (xk + 3.0) * (xk - 0.5) * (xk - 2.0));
//! let zeros = find_zeros(&x, &y, Zero::All).unwrap();
//! assert!(
//!     [-3.0, 0.5, 2.0].into_iter()
//!         .zip(zeros)
//!         .all(|(expected, computed)| (computed - expected).abs() < 1e-6)
//! )
//! ```
//!
//! ```
//! use ndarray as nd;
//! use lumispec::interp::resample;
//!
//! let x = nd::array![0.0, 1.0, 2.0, 3.0];
//! let y = x.mapv(|xk: f64| 2.0 * xk - 1.0);
//! let (xx, yy) = resample(&x, &y, 7).unwrap();
//! assert_eq!(xx.len(), 7);
//! assert!((yy[3] - 2.0).abs() < 1e-12);
//! ```

use std::cmp;
use ndarray as nd;
use num_traits::Num;
use crate::{ Arr1, error::*, utils::linspace_exact };

pub type InterpResult<T> = Result<T, InterpError>;

/// Specifies a set of zeros to look for in [`find_zeros`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Zero {
    /// Points at which a function changes from positive to negative.
    Falling,
    /// Points at which a function changes from negative to positive.
    Rising,
    /// Either/both of the above.
    All,
}

impl Zero {
    fn matches<A>(&self, a: &A, b: &A) -> bool
    where A: PartialEq + PartialOrd
    {
        match self {
            Self::Falling if a > b => true,
            Self::Rising if a < b => true,
            Self::All if a != b => true,
            _ => false,
        }
    }
}

/// Compute the value of a sampled function via a Lagrange polynomial.
pub fn lagrange<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    x: A,
) -> InterpResult<A>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num + Copy
{
    LengthError::check(data_x, data_y)?;
    let res: A
        = data_x.iter().zip(data_y).enumerate()
        .map(|(j, (xj, yj))| {
            let xj = *xj;
            let inner
                = data_x.iter().enumerate()
                .filter(|(m, _)| *m != j)
                .map(|(_, xm)| (x - *xm) / (xj - *xm))
                .fold(A::one(), A::mul);
            *yj * inner
        })
        .fold(A::zero(), A::add);
    Ok(res)
}

/// Return a list of all zeros of a given kind in a sampled function.
///
/// The function must be locally invertible on the scale of a few grid points.
/// A sample that is exactly zero is reported once, at its own position.
pub fn find_zeros<S, T, A>(
    data_x: &nd::ArrayBase<S, nd::Ix1>,
    data_y: &nd::ArrayBase<T, nd::Ix1>,
    kind: Zero,
) -> InterpResult<Vec<A>>
where
    S: nd::Data<Elem = A>,
    T: nd::Data<Elem = A>,
    A: Num + PartialOrd + Copy,
{
    LengthError::check(data_x, data_y)?;
    LagrangeError::check(data_x)?;
    let n = data_x.len();
    let z = A::zero();
    // an exact zero on the first sample has no predecessor to give it a
    // direction
    let first: Option<A>
        = (data_y[0] == z && kind == Zero::All).then_some(data_x[0]);
    let crossings
        = data_x.iter().zip(data_y).skip(1)
        .zip(data_y)
        .enumerate()
        .filter_map(|(i, ((xi, yi), yim1))| {
            if *yi == z {
                kind.matches(yim1, yi).then_some(Ok(*xi))
            } else if *yim1 != z && *yi * *yim1 < z && kind.matches(yim1, yi) {
                let il = i.saturating_sub(2);
                let ir = cmp::min(n, i + 2);
                if ir - il < 4 {
                    log::warn!(
                        "interp::find_zeros: attempting to interpolate near an \
                        edge of the given data; some accuracy may be lost"
                    );
                }
                let interp
                    = lagrange(
                        &data_y.slice(nd::s![il..ir]),
                        &data_x.slice(nd::s![il..ir]),
                        z,
                    );
                Some(interp)
            } else {
                None
            }
        });
    let zeros: Vec<A>
        = first.map(Ok).into_iter()
        .chain(crossings)
        .collect::<InterpResult<_>>()?;
    Ok(zeros)
}

/// A natural cubic spline through a set of knots.
///
/// The interpolant is piecewise cubic with continuous first and second
/// derivatives, and its second derivative vanishes at both end knots. With only
/// two knots it reduces to the straight line between them.
#[derive(Clone, Debug)]
pub struct CubicSpline {
    // knot positions
    x: nd::Array1<f64>,
    // knot values
    y: nd::Array1<f64>,
    // second derivatives at the knots
    y2: nd::Array1<f64>,
}

impl CubicSpline {
    /// Fit a spline through `(x, y)`.
    ///
    /// `x` must be strictly increasing and at least 2 elements long.
    pub fn new<S, T>(x: &Arr1<S>, y: &Arr1<T>) -> InterpResult<Self>
    where
        S: nd::Data<Elem = f64>,
        T: nd::Data<Elem = f64>,
    {
        LengthError::check(x, y)?;
        SplineError::check(x)?;
        let n = x.len();
        let mut y2: nd::Array1<f64> = nd::Array1::zeros(n);
        let mut u: nd::Array1<f64> = nd::Array1::zeros(n);

        // forward sweep of the tridiagonal system; natural boundaries keep
        // y2[0] = u[0] = 0
        for i in 1..n - 1 {
            let sig = (x[i] - x[i - 1]) / (x[i + 1] - x[i - 1]);
            let p = sig * y2[i - 1] + 2.0;
            y2[i] = (sig - 1.0) / p;
            let slope_diff
                = (y[i + 1] - y[i]) / (x[i + 1] - x[i])
                - (y[i] - y[i - 1]) / (x[i] - x[i - 1]);
            u[i] = (6.0 * slope_diff / (x[i + 1] - x[i - 1]) - sig * u[i - 1])
                / p;
        }

        // back substitution; y2[n - 1] = 0
        y2[n - 1] = 0.0;
        for k in (0..n - 1).rev() {
            y2[k] = y2[k] * y2[k + 1] + u[k];
        }

        Ok(Self { x: x.to_owned(), y: y.to_owned(), y2 })
    }

    /// Get the number of knots.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.x.len() }

    /// Get the span `(x_min, x_max)` of the knots.
    pub fn span(&self) -> (f64, f64) { (self.x[0], self.x[self.x.len() - 1]) }

    // index `lo` of the interval [x[lo], x[lo + 1]] to use for `x0`; points
    // outside the knot range map to the first or last interval
    fn interval(&self, x0: f64) -> usize {
        let mut lo: usize = 0;
        let mut hi: usize = self.x.len() - 1;
        while hi - lo > 1 {
            let mid = (lo + hi) / 2;
            if self.x[mid] > x0 { hi = mid; } else { lo = mid; }
        }
        lo
    }

    /// Evaluate the spline at a single point.
    ///
    /// Points outside the knot range are extrapolated with the boundary
    /// cubic.
    pub fn eval(&self, x0: f64) -> f64 {
        let lo = self.interval(x0);
        let hi = lo + 1;
        let h = self.x[hi] - self.x[lo];
        let a = (self.x[hi] - x0) / h;
        let b = (x0 - self.x[lo]) / h;
        a * self.y[lo] + b * self.y[hi]
            + ((a.powi(3) - a) * self.y2[lo] + (b.powi(3) - b) * self.y2[hi])
            * h.powi(2) / 6.0
    }

    /// Evaluate the spline at every point of an array.
    pub fn eval_array<S>(&self, x: &Arr1<S>) -> nd::Array1<f64>
    where S: nd::Data<Elem = f64>
    {
        x.mapv(|xk| self.eval(xk))
    }
}

/// Resample a sampled function onto `npts` evenly spaced points spanning
/// exactly `[x[0], x[n - 1]]` via a natural cubic spline.
///
/// Returns the new coordinate and value arrays.
pub fn resample<S, T>(x: &Arr1<S>, y: &Arr1<T>, npts: usize)
    -> InterpResult<(nd::Array1<f64>, nd::Array1<f64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    if npts < 2 { return Err(InterpError::BadNpts(npts)); }
    let spline = CubicSpline::new(x, y)?;
    let (x0, x1) = spline.span();
    let x_new = linspace_exact(x0, x1, npts);
    let y_new = spline.eval_array(&x_new);
    Ok((x_new, y_new))
}
