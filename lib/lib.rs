#![allow(non_snake_case)]

//! Provides functions to compute the bound-state spectrum of a one-dimensional
//! potential energy surface via the sinc-function discrete variable
//! representation (DVR), and to turn discrete transition data into continuous
//! spectra.
//!
//! Provides implementations for the following numerical routines:
//! - Bound states:
//!     - Sinc-DVR Hamiltonian construction and dense symmetric
//!       diagonalization[^1]
//!     - Optional natural cubic spline refinement of coarse surfaces
//!     - Classical turning points via Lagrange interpolation
//! - Spectra:
//!     - Lorentzian and Gaussian broadening
//!     - Two-dimensional time–energy broadening
//!     - Kramers–Heisenberg inelastic scattering intensity
//!
//! See [`docs`] for theoretical background.
//!
//! [^1]: D. T. Colbert and W. H. Miller, J. Chem. Phys. **96** 1982 (1992).

pub mod error;
pub mod interp;
pub mod eigen;
pub mod units;
pub mod dvr;
pub mod broadening;
pub mod scattering;
pub mod utils;

pub mod docs;

pub(crate) const DEF_INTERP_NPTS: usize = 500;
pub(crate) const DEF_SPACING_TOL: f64 = 1e-6;
pub(crate) const DEF_GAMMA: f64 = 0.2;
pub(crate) const DEF_NPTS: usize = 10000;
pub(crate) const DEF_OFFSET_WIDTHS: f64 = 4.0;

pub type Arr1<S> = ndarray::ArrayBase<S, ndarray::Ix1>;

pub use dvr::{ dvr, dvr_default, DvrConfig, DvrSolution, Spacing };
