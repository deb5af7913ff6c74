//! Theoretical background.
//!
//! # Contents
//! - [Background](#background)
//! - [Grid refinement](#grid-refinement)
//! - [Units](#units)
//! - [Lineshapes](#lineshapes)
//!
//! # Background
//! Vibrational motion of a diatomic molecule (or any other one-dimensional
//! bound system) is described by the time-independent Schrödinger equation
//! ```text
//!    ħ²  ∂²
//! - ---- --- ψ(r) + V(r) ψ(r) = E ψ(r)
//!   2 mu ∂r²
//! ```
//! with *mu* the reduced mass of the two bodies and *V*(*r*) the potential
//! energy surface. The discrete variable representation (DVR)[^1] expands *ψ*
//! in a set of basis functions, each localized on one point of a uniform grid
//! ```text
//! r[i] = r₀ + i δr, i ∊ {0, ..., N - 1}
//! ```
//! For the sinc basis
//! ```text
//!            1    sin(π (r - r[i]) / δr)
//! φ_i(r) = ---- ------------------------
//!           √δr     π (r - r[i]) / δr
//! ```
//! each function takes the value 1/√*δr* at its own grid point and vanishes at
//! every other one. Matrix elements of any local operator, in particular the
//! potential, are then (to quadrature accuracy) diagonal,
//! ```text
//! V[i, j] = δ[i, j] V(r[i])
//! ```
//! while the kinetic energy has a closed form on the infinite uniform grid:
//! ```text
//!                ħ²     ⎧ π² / 3,                   i = j
//! T[i, j] = ---------- ⎨
//!           2 mu δr²  ⎩ (-1)^(i - j) 2 / (i - j)², i ≠ j
//! ```
//! The Hamiltonian *H* = *T* + *V* is a dense, real symmetric *N*×*N* matrix
//! whose eigenvalues approximate the bound-state energies and whose
//! (orthonormal) eigenvectors are the expansion coefficients *c*<sub>*k*</sub>
//! of the corresponding states,
//! ```text
//! ψ_k(r) = Σ_i c_k[i] φ_i(r)   ⇒   ψ_k(r[i]) = c_k[i] / √δr
//! ```
//! Because the basis is complete up to the grid's Nyquist momentum π/*δr*,
//! convergence in *δr* is exponential for smooth potentials, and the states
//! that are well localized inside the grid are insensitive to its edges.
//!
//! # Grid refinement
//! Potential energy surfaces from electronic-structure calculations are often
//! known at only a few tens of points, too coarse for the DVR to resolve the
//! kinetic energy of higher vibrational states. The solver can therefore
//! resample the surface on a fine uniform grid (by default 500 points spanning
//! exactly the original range) through a natural cubic spline, i.e. the
//! piecewise cubic with continuous first and second derivatives whose second
//! derivative vanishes at the end points.
//!
//! # Units
//! The solver takes *ħ* = 1, so energies, positions and the reduced mass must
//! share a consistent unit system; atomic units (Hartrees, Bohr radii, electron
//! masses) are the natural choice. Items in [`units`][crate::units] convert
//! atomic masses, Ångströms and wavenumbers accordingly.
//!
//! # Lineshapes
//! Transition energies *e*<sub>*k*</sub> with intensities *f*<sub>*k*</sub> are
//! turned into continuous spectra by convolution with a normalized lineshape of
//! full width at half maximum *γ*. The Lorentzian
//! ```text
//!               γ / 2π
//! L(x) = f ------------------
//!          (γ/2)² + (x - e)²
//! ```
//! models lifetime broadening, the Gaussian
//! ```text
//!           f           (x - e)²
//! G(x) = ------- exp(- ---------),   σ = γ / (2 √(2 ln 2))
//!        σ √(2π)          2 σ²
//! ```
//! instrumental broadening. For inelastic scattering through an intermediate
//! state at *e*<sub>1</sub>, the Kramers–Heisenberg expression
//! ```text
//!                f1 f2
//! I(e) = ---------------------------
//!        (e - e1 - k)² + (f1 + f2)²
//! ```
//! gives the intensity as a function of incident energy *e* and momentum
//! transfer *k*.
//!
//! [^1]: D. T. Colbert and W. H. Miller, "A novel discrete variable
//! representation for quantum mechanical reactive scattering via the S-matrix
//! Kohn method." J. Chem. Phys. **96** 1982 (1992).
