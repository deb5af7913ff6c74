//! Dense eigendecomposition of real symmetric matrices.
//!
//! By default this uses [`nalgebra`]'s implicit-QR
//! [`SymmetricEigen`][nalgebra::SymmetricEigen], which needs no system
//! libraries. Enabling the `lapack` feature routes the decomposition through
//! LAPACK's `dsyev` family via [`ndarray_linalg`] instead.

use ndarray as nd;
use crate::error::EigenError;

pub type EigenResult<T> = Result<T, EigenError>;

/// Maximum number of implicit-QR sweeps before giving up.
pub const DEF_EIGEN_MAXITERS: usize = 100_000;

/// Compute all eigenvalues and eigenvectors of the real symmetric matrix `h`.
///
/// Eigenvalues are returned in ascending order; column `k` of the returned
/// matrix is the unit-norm eigenvector belonging to eigenvalue `k`. Only the
/// lower triangle of `h` is guaranteed to be read.
///
/// *Panics if `h` is not square*.
#[cfg(not(feature = "lapack"))]
pub fn eigh(h: nd::Array2<f64>) -> EigenResult<(nd::Array1<f64>, nd::Array2<f64>)>
{
    use nalgebra::{ DMatrix, SymmetricEigen };

    let n = h.nrows();
    assert_eq!(n, h.ncols(), "eigen::eigh: matrix must be square");
    if n == 0 {
        return Ok((nd::Array1::zeros(0), nd::Array2::zeros((0, 0))));
    }
    let m: DMatrix<f64>
        = DMatrix::from_fn(n, n, |i, j| if i >= j { h[[i, j]] } else { h[[j, i]] });
    let eigen = SymmetricEigen::try_new(m, f64::EPSILON, DEF_EIGEN_MAXITERS)
        .ok_or(EigenError::NoConvergence(n))?;

    // implicit QR leaves the spectrum unordered
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| eigen.eigenvalues[a].total_cmp(&eigen.eigenvalues[b]));
    let evals: nd::Array1<f64>
        = order.iter().map(|&k| eigen.eigenvalues[k]).collect();
    let evecs: nd::Array2<f64>
        = nd::Array2::from_shape_fn((n, n), |(i, k)| eigen.eigenvectors[(i, order[k])]);
    Ok((evals, evecs))
}

/// Compute all eigenvalues and eigenvectors of the real symmetric matrix `h`.
///
/// Eigenvalues are returned in ascending order; column `k` of the returned
/// matrix is the unit-norm eigenvector belonging to eigenvalue `k`. Only the
/// lower triangle of `h` is read.
#[cfg(feature = "lapack")]
pub fn eigh(h: nd::Array2<f64>) -> EigenResult<(nd::Array1<f64>, nd::Array2<f64>)>
{
    use ndarray_linalg::{ self as la, EighInto };

    let (evals, evecs): (nd::Array1<f64>, nd::Array2<f64>)
        = h.eigh_into(la::UPLO::Lower)?;
    Ok((evals, evecs))
}
