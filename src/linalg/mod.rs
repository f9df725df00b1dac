//! Dense linear algebra on the plain (non-rigorous) path.
//!
//! Only what the proof pipeline needs: LU with partial pivoting for the
//! Newton step and for the approximate inverse `A ≈ Df(x̄)⁻¹`. Interval
//! matrices are never factored.

pub(crate) mod lu;

pub use lu::{lu_in_place, lu_solve};

/// Errors from linear algebra operations.
///
/// ```
/// use radii::DynMatrix;
/// use radii::linalg::LinalgError;
///
/// let singular = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
/// assert_eq!(singular.lu().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular.
    #[error("matrix is singular")]
    Singular,
}
