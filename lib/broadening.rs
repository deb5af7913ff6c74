//! Broadening of discrete spectral lines into continuous spectra.
//!
//! Lines are given as parallel arrays of energies and intensities. Each
//! function here returns the energy axis it evaluated on together with one row
//! of spectrum per line, so that callers can sum (`spectrum.sum_axis(Axis(0))`)
//! or inspect individual contributions.
//!
//! ```
//! use ndarray as nd;
//! use lumispec::broadening::{ lorentz, BroadeningConfig };
//!
//! let e = nd::array![1.0, 2.5];
//! let f = nd::array![1.0, 0.5];
//! let config = BroadeningConfig::default().with_npts(2001);
//! let (x, spectrum) = lorentz(&e, &f, &config).unwrap();
//! assert_eq!(x.len(), 2001);
//! assert_eq!(spectrum.dim(), (2, 2001));
//! ```

use std::f64::consts::{ LN_2, PI };
use ndarray as nd;
use crate::{
    Arr1,
    DEF_GAMMA,
    DEF_NPTS,
    DEF_OFFSET_WIDTHS,
    error::{ BroadeningError, LengthError },
    utils::linspace_exact,
};

pub type BroadeningResult<T> = Result<T, BroadeningError>;

/// Options shared by the broadening functions.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BroadeningConfig {
    /// Full width at half maximum of the lineshape (default: `0.2`).
    pub gamma: f64,
    /// Overall multiplicative factor (default: `1.0`).
    pub scale: f64,
    /// `(min, max)` range of the energy axis before extension by `offset`
    /// (default: the smallest and largest line energies).
    pub bounds: Option<(f64, f64)>,
    /// Extension of the energy axis beyond `bounds` on either side (default:
    /// `4 * gamma`).
    pub offset: Option<f64>,
    /// Number of points on the energy axis (default: `10000`).
    pub npts: usize,
}

impl Default for BroadeningConfig {
    fn default() -> Self {
        Self {
            gamma: DEF_GAMMA,
            scale: 1.0,
            bounds: None,
            offset: None,
            npts: DEF_NPTS,
        }
    }
}

impl BroadeningConfig {
    /// Set the lineshape width.
    pub fn with_gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    /// Set the overall scaling factor.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Set explicit energy-axis bounds.
    pub fn with_bounds(mut self, bounds: (f64, f64)) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Set an explicit energy-axis extension.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the number of points on the energy axis.
    pub fn with_npts(mut self, npts: usize) -> Self {
        self.npts = npts;
        self
    }

    /// Get the energy-axis extension, falling back to `4 * gamma`.
    pub fn get_offset(&self) -> f64 {
        self.offset.unwrap_or(DEF_OFFSET_WIDTHS * self.gamma)
    }

    fn check(&self) -> BroadeningResult<()> {
        BroadeningError::check_gamma(self.gamma)?;
        BroadeningError::check_npts(self.npts)?;
        Ok(())
    }
}

/// Evaluate a single Lorentzian line of intensity `f` centered on `e0` with
/// full width at half maximum `gamma`, at `x`.
///
/// ```text
///                 gamma / 2π
/// scale * f * -------------------------
///             (gamma / 2)² + (x - e0)²
/// ```
pub fn lorentzian(x: f64, e0: f64, f: f64, gamma: f64, scale: f64) -> f64 {
    scale * f * (0.5 * gamma / PI) / (0.25 * gamma.powi(2) + (x - e0).powi(2))
}

/// Evaluate a single normalized Gaussian line of intensity `f` centered on `e0`
/// with full width at half maximum `gamma`, at `x`.
pub fn gaussian_line(x: f64, e0: f64, f: f64, gamma: f64, scale: f64) -> f64 {
    let sigma = gamma / (2.0 * (2.0 * LN_2).sqrt());
    scale * f * (-(x - e0).powi(2) / (2.0 * sigma.powi(2))).exp()
        / (sigma * (2.0 * PI).sqrt())
}

/// Construct the energy axis for lines at energies `e`.
///
/// The axis runs over `[b0 - s, b1 + s]` in `config.npts` points, where
/// `(b0, b1)` are `config.bounds` (or the extrema of `e`) and `s` is
/// [`config.get_offset()`][BroadeningConfig::get_offset].
pub fn energy_axis<S>(e: &Arr1<S>, config: &BroadeningConfig)
    -> BroadeningResult<nd::Array1<f64>>
where S: nd::Data<Elem = f64>
{
    config.check()?;
    let (b0, b1)
        = match config.bounds {
            Some(b) => b,
            None => {
                if e.is_empty() { return Err(BroadeningError::Empty); }
                e.iter().fold(
                    (f64::INFINITY, f64::NEG_INFINITY),
                    |(lo, hi), &ek| (lo.min(ek), hi.max(ek)),
                )
            },
        };
    let s = config.get_offset();
    Ok(linspace_exact(b0 - s, b1 + s, config.npts))
}

// evaluate `shape` for every line over a common energy axis
fn broaden<S, T, F>(
    e: &Arr1<S>,
    f: &Arr1<T>,
    config: &BroadeningConfig,
    shape: F,
) -> BroadeningResult<(nd::Array1<f64>, nd::Array2<f64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    F: Fn(f64, f64, f64, f64, f64) -> f64,
{
    LengthError::check(e, f)?;
    let x = energy_axis(e, config)?;
    let (gamma, scale) = (config.gamma, config.scale);
    let spectrum: nd::Array2<f64>
        = nd::Array2::from_shape_fn(
            (e.len(), x.len()),
            |(k, i)| shape(x[i], e[k], f[k], gamma, scale),
        );
    Ok((x, spectrum))
}

/// Broaden lines at energies `e` with intensities `f` by Lorentzians.
///
/// Returns the energy axis (see [`energy_axis`]) and an `e.len() × npts`
/// array whose `k`-th row is line `k` evaluated on the axis.
pub fn lorentz<S, T>(e: &Arr1<S>, f: &Arr1<T>, config: &BroadeningConfig)
    -> BroadeningResult<(nd::Array1<f64>, nd::Array2<f64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    broaden(e, f, config, lorentzian)
}

/// Broaden lines at energies `e` with intensities `f` by normalized Gaussians
/// of full width at half maximum `config.gamma`.
///
/// Same output layout as [`lorentz`].
pub fn gaussian<S, T>(e: &Arr1<S>, f: &Arr1<T>, config: &BroadeningConfig)
    -> BroadeningResult<(nd::Array1<f64>, nd::Array2<f64>)>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    broaden(e, f, config, gaussian_line)
}

/// Sum the Lorentzian lines at energies `e0` with intensities `f` on a
/// caller-supplied energy axis `x`.
pub fn lorentz_sum<S, T, U>(
    x: &Arr1<S>,
    e0: &Arr1<T>,
    f: &Arr1<U>,
    gamma: f64,
) -> BroadeningResult<nd::Array1<f64>>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
    U: nd::Data<Elem = f64>,
{
    LengthError::check(e0, f)?;
    BroadeningError::check_gamma(gamma)?;
    let mut acc: nd::Array1<f64> = nd::Array1::zeros(x.len());
    for (&e0k, &fk) in e0.iter().zip(f) {
        acc.zip_mut_with(x, |ai, &xi| *ai += lorentzian(xi, e0k, fk, gamma, 1.0));
    }
    Ok(acc)
}

/// Two-dimensional time–energy broadening.
///
/// Each line `k` carries a time stamp `t[k]` alongside its energy `e[k]` and
/// intensity `f[k]`. Returns the energy axis, the sorted list of distinct time
/// stamps, and an array whose row `a` is the sum of the Lorentzian-broadened
/// lines stamped with time `times[a]`.
pub fn tempo<R, S, T>(
    t: &Arr1<R>,
    e: &Arr1<S>,
    f: &Arr1<T>,
    config: &BroadeningConfig,
) -> BroadeningResult<(nd::Array1<f64>, nd::Array1<f64>, nd::Array2<f64>)>
where
    R: nd::Data<Elem = f64>,
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(t, e)?;
    BroadeningError::check_times(t)?;
    let (x, lines) = lorentz(e, f, config)?;
    // adding 0.0 maps -0.0 to 0.0 so both stamps share a row
    let stamps: Vec<f64> = t.iter().map(|tk| tk + 0.0).collect();
    let mut times: Vec<f64> = stamps.clone();
    times.sort_by(f64::total_cmp);
    times.dedup_by(|a, b| a.total_cmp(b).is_eq());
    let mut spectrum: nd::Array2<f64> = nd::Array2::zeros((times.len(), x.len()));
    for (tk, line) in stamps.iter().zip(lines.rows()) {
        // every stamp is present in `times` by construction
        let a = times.partition_point(|ta| ta.total_cmp(tk).is_lt());
        let mut row = spectrum.row_mut(a);
        row += &line;
    }
    Ok((x, nd::Array1::from(times), spectrum))
}
