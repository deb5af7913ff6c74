//! Bound states of a one-dimensional potential energy surface via the
//! sinc-function discrete variable representation (DVR).
//!
//! See [`docs`][crate::docs] for theoretical background.
//!
//! ```
//! use ndarray as nd;
//! use lumispec::dvr::{ dvr, DvrConfig };
//!
//! // harmonic oscillator with k = mu = 1, so ω = 1
//! let r: nd::Array1<f64> = nd::Array1::linspace(-10.0, 10.0, 201);
//! let e = r.mapv(|rk| 0.5 * rk.powi(2));
//! let sol = dvr(&r, &e, 1.0, DvrConfig::default()).unwrap();
//! for n in 0..5 {
//!     assert!((sol.get_ev()[n] - (n as f64 + 0.5)).abs() < 1e-6);
//! }
//! ```

use std::{ cmp, f64::consts::PI };
use ndarray as nd;
use crate::{
    Arr1,
    DEF_INTERP_NPTS,
    DEF_SPACING_TOL,
    eigen,
    error::{ DvrError, LengthError },
    interp::{ self, Zero },
    utils::spacing_deviation,
};

pub type DvrResult<T> = Result<T, DvrError>;

/// Convention used to derive the grid spacing from the coordinate array.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Spacing {
    /// Difference between the first two points, `r[1] - r[0]`.
    #[default]
    Adjacent,
    /// Total span divided by the number of points, `(r[N - 1] - r[0]) / N`.
    ///
    /// This is smaller than the true sample spacing by a factor `(N - 1) / N`,
    /// and is provided for agreement with results computed under that
    /// convention.
    Span,
}

impl Spacing {
    /// Compute the grid spacing of `r` under this convention.
    ///
    /// *Panics if `r` has length less than 2*.
    pub fn of<S>(&self, r: &Arr1<S>) -> f64
    where S: nd::Data<Elem = f64>
    {
        let n = r.len();
        match self {
            Self::Adjacent => r[1] - r[0],
            Self::Span => (r[n - 1] - r[0]) / n as f64,
        }
    }
}

/// Options for [`dvr`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DvrConfig {
    /// Resample the potential onto a refined, evenly spaced grid via a cubic
    /// spline before solving (default: `false`).
    pub interp: bool,
    /// Size of the refined grid when `interp` is set (default: `500`).
    pub npts: usize,
    /// Grid spacing convention (default: [`Spacing::Adjacent`]).
    pub spacing: Spacing,
}

impl Default for DvrConfig {
    fn default() -> Self {
        Self { interp: false, npts: DEF_INTERP_NPTS, spacing: Spacing::Adjacent }
    }
}

impl DvrConfig {
    /// Set `interp`.
    pub fn with_interp(mut self, interp: bool) -> Self {
        self.interp = interp;
        self
    }

    /// Set the size of the refined grid.
    pub fn with_npts(mut self, npts: usize) -> Self {
        self.npts = npts;
        self
    }

    /// Set the grid spacing convention.
    pub fn with_spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }
}

/// A single bound state: one energy level with its expansion coefficients.
#[derive(Clone, Debug)]
pub struct Level {
    /// Energy
    pub e: f64,
    /// DVR expansion coefficients (unit norm)
    pub c: nd::Array1<f64>,
    /// Wavefunction sampled on the grid
    pub wf: nd::Array1<f64>,
}

impl Level {
    /// Compare two `Level`s by their energy.
    pub fn cmp_energy(&self, other: &Self) -> Option<cmp::Ordering> {
        self.e.partial_cmp(&other.e)
    }

    /// Apply a scaling factor to the implicit length dimension associated with
    /// the wavefunction and energy.
    ///
    /// This performs the following:
    /// ```text
    /// wf → √a * wf
    /// e  → e / a²
    /// ```
    pub fn rescale(&mut self, a: f64) {
        self.e /= a.powi(2);
        self.wf *= a.sqrt();
    }

    /// Like [`Self::rescale`], but create a copy of `self` with the specified
    /// scaling factor.
    pub fn rescaled(&self, a: f64) -> Self {
        let mut new = self.clone();
        new.rescale(a);
        new
    }
}

/// Output of [`dvr`].
///
/// Holds the grid and potential the Hamiltonian was actually built from
/// (the refined ones if interpolation was requested), the coefficient matrix
/// whose row `i` is the eigenvector belonging to the `i`-th lowest energy, and
/// the energies themselves in ascending order.
#[derive(Clone, Debug)]
pub struct DvrSolution {
    r: nd::Array1<f64>,
    e: nd::Array1<f64>,
    dx: f64,
    c: nd::Array2<f64>,
    ev: nd::Array1<f64>,
}

impl DvrSolution {
    /// Get a reference to the coordinate grid.
    pub fn get_r(&self) -> &nd::Array1<f64> { &self.r }

    /// Get a reference to the potential samples.
    pub fn get_e(&self) -> &nd::Array1<f64> { &self.e }

    /// Get the grid spacing used to build the Hamiltonian.
    pub fn get_dx(&self) -> f64 { self.dx }

    /// Get a reference to the coefficient matrix (rows are eigenvectors).
    pub fn get_c(&self) -> &nd::Array2<f64> { &self.c }

    /// Get a reference to the energy levels, in ascending order.
    pub fn get_ev(&self) -> &nd::Array1<f64> { &self.ev }

    /// Get the number of levels (equal to the grid size).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.ev.len() }

    /// Unpack into `(r, e, c, ev)`.
    pub fn into_parts(self)
        -> (nd::Array1<f64>, nd::Array1<f64>, nd::Array2<f64>, nd::Array1<f64>)
    {
        (self.r, self.e, self.c, self.ev)
    }

    /// Return the wavefunction of level `k` sampled on the grid.
    ///
    /// Sinc-DVR basis functions take the value `1/√dx` at their own grid point
    /// and vanish at all others, so this is just the coefficient row scaled by
    /// `1/√dx`; its trapezoidal-rule norm is close to 1 for states that vanish
    /// at the grid edges.
    pub fn wavefunction(&self, k: usize) -> Option<nd::Array1<f64>> {
        (k < self.len())
            .then(|| self.c.row(k).mapv(|ck| ck / self.dx.sqrt()))
    }

    /// Return level `k`, if it exists.
    pub fn level(&self, k: usize) -> Option<Level> {
        let wf = self.wavefunction(k)?;
        Some(Level { e: self.ev[k], c: self.c.row(k).to_owned(), wf })
    }

    /// Return all levels in ascending order of energy.
    pub fn levels(&self) -> Vec<Level> {
        (0..self.len()).filter_map(|k| self.level(k)).collect()
    }

    /// Return the classical turning points of level `k`, i.e. all positions at
    /// which the potential crosses the level's energy, in increasing order.
    ///
    /// Returns an empty list if `k` is out of range.
    pub fn turning_points(&self, k: usize) -> DvrResult<Vec<f64>> {
        if k >= self.len() { return Ok(Vec::new()); }
        let ek = self.ev[k];
        let de = self.e.mapv(|ei| ei - ek);
        let tps = interp::find_zeros(&self.r, &de, Zero::All)?;
        Ok(tps)
    }

    /// Return the transition energies `ev[j] - ev[from]` to every level above
    /// `from`.
    pub fn transitions(&self, from: usize) -> nd::Array1<f64> {
        if from >= self.len() { return nd::Array1::zeros(0); }
        let e0 = self.ev[from];
        self.ev.slice(nd::s![from + 1..]).mapv(|ej| ej - e0)
    }
}

/// Construct the sinc-DVR Hamiltonian matrix for a potential `e` sampled with
/// spacing `dx`, for a particle of (reduced) mass `mu`.
///
/// ```text
/// H[i, i] = (π² / 3) / (2 mu dx²) + e[i]
/// H[i, j] = (-1)^(i - j) (2 / (i - j)²) / (2 mu dx²)
/// ```
///
/// Each off-diagonal element is computed once and written to both triangles,
/// so the result is exactly symmetric.
pub fn hamiltonian<S>(dx: f64, mu: f64, e: &Arr1<S>) -> nd::Array2<f64>
where S: nd::Data<Elem = f64>
{
    let n = e.len();
    let t = (2.0 * mu * dx.powi(2)).recip();
    let mut H: nd::Array2<f64> = nd::Array2::zeros((n, n));
    for (i, &ei) in e.iter().enumerate() {
        H[[i, i]] = t * PI.powi(2) / 3.0 + ei;
        for j in 0..i {
            let d = i - j;
            let sign = if d % 2 == 0 { 1.0 } else { -1.0 };
            let hij = sign * t * 2.0 / (d as f64).powi(2);
            H[[i, j]] = hij;
            H[[j, i]] = hij;
        }
    }
    H
}

// validate inputs common to all solving paths
fn check_inputs<S, T>(r: &Arr1<S>, e: &Arr1<T>, mu: f64) -> DvrResult<()>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    LengthError::check(r, e)?;
    DvrError::check_npoints(r.len())?;
    DvrError::check_finite(r, e)?;
    DvrError::check_increasing(r)?;
    DvrError::check_mass(mu)?;
    Ok(())
}

/// Compute the (grid resolution-limited) bound-state spectrum of the potential
/// `e` sampled at positions `r`, for a particle of (reduced) mass `mu`.
///
/// `r` must be strictly increasing and evenly spaced, with at least two points.
/// If `config.interp` is set, `(r, e)` is first resampled onto `config.npts`
/// evenly spaced points spanning exactly `[r[0], r[N - 1]]` via a natural cubic
/// spline. Grids that are not evenly spaced are solved anyway, with a logged
/// warning.
pub fn dvr<S, T>(r: &Arr1<S>, e: &Arr1<T>, mu: f64, config: DvrConfig)
    -> DvrResult<DvrSolution>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    check_inputs(r, e, mu)?;
    let (r, e): (nd::Array1<f64>, nd::Array1<f64>)
        = if config.interp {
            interp::resample(r, e, config.npts)?
        } else {
            (r.to_owned(), e.to_owned())
        };
    let n = r.len();
    let dx = config.spacing.of(&r);
    DvrError::check_spacing(dx)?;
    let step = (r[n - 1] - r[0]) / (n - 1) as f64;
    let dev = spacing_deviation(&r, step);
    if dev > DEF_SPACING_TOL {
        log::warn!(
            "dvr::dvr: coordinate grid is not evenly spaced (max relative \
            deviation {dev:.3e}); results may be inaccurate"
        );
    }

    log::debug!("dvr::dvr: diagonalizing {n}x{n} Hamiltonian (dx = {dx:.6e}, mu = {mu:.6e})");
    let H = hamiltonian(dx, mu, &e);
    let (ev, evecs) = eigen::eigh(H)?;
    let c = evecs.reversed_axes().as_standard_layout().into_owned();
    Ok(DvrSolution { r, e, dx, c, ev })
}

/// Thin interface to [`dvr`] with default options.
pub fn dvr_default<S, T>(r: &Arr1<S>, e: &Arr1<T>, mu: f64)
    -> DvrResult<DvrSolution>
where
    S: nd::Data<Elem = f64>,
    T: nd::Data<Elem = f64>,
{
    dvr(r, e, mu, DvrConfig::default())
}

/// Simple record to keep track of coordinate and potential arrays.
///
/// Arrays borrowed from this type are guaranteed to have the same length (at
/// least 2) and the coordinates to be strictly increasing.
#[derive(Clone, Debug)]
pub struct Surface {
    // coordinate array
    r: nd::Array1<f64>,
    // potential array
    e: nd::Array1<f64>,
}

impl Surface {
    /// Create a new `Surface`, generating the coordinate array from
    /// "linspace-style" arguments (start, inclusive end, and an array length)
    /// and sampling the potential function `V` on it.
    pub fn new_linspace<F>(rargs: (f64, f64, usize), V: F) -> DvrResult<Self>
    where F: FnMut(f64) -> f64
    {
        DvrError::check_npoints(rargs.2)?;
        let r: nd::Array1<f64>
            = nd::Array1::linspace(rargs.0, rargs.1, rargs.2);
        let e: nd::Array1<f64> = r.mapv(V);
        Self::new_arrays(r, e)
    }

    /// Create a new `Surface` from bare coordinate and potential arrays.
    pub fn new_arrays(r: nd::Array1<f64>, e: nd::Array1<f64>)
        -> DvrResult<Self>
    {
        LengthError::check(&r, &e)?;
        DvrError::check_npoints(r.len())?;
        DvrError::check_increasing(&r)?;
        Ok(Self { r, e })
    }

    /// Get a reference to the coordinate array.
    pub fn get_r(&self) -> &nd::Array1<f64> { &self.r }

    /// Get a reference to the potential array.
    pub fn get_e(&self) -> &nd::Array1<f64> { &self.e }

    /// Get the length of the coordinate and potential arrays.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize { self.r.len() }

    /// Thin interface to [`dvr`].
    pub fn solve(&self, mu: f64, config: DvrConfig) -> DvrResult<DvrSolution> {
        dvr(&self.r, &self.e, mu, config)
    }
}
