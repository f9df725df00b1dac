use tracing::{debug, warn};

use crate::dynmatrix::{DynMatrix, DynVector};
use crate::field::VectorField;
use crate::interval::Interval;
use crate::traits::Scalar;

use super::{check_dim, ProofError};

/// The three radii polynomial coefficients, all measured in the field's norm.
///
/// - `y0 ≥ ‖A f(x̄)‖`
/// - `z0 ≥ ‖I − A Df(x̄)‖`
/// - `z2 ≥ ‖A D²f‖` on the problem's domain
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub y0: T,
    pub z0: T,
    pub z2: T,
}

impl Bounds<Interval> {
    /// Plain upper bounds: each interval's upper endpoint.
    pub fn upper(&self) -> Bounds<f64> {
        Bounds {
            y0: self.y0.upper_bound(),
            z0: self.z0.upper_bound(),
            z2: self.z2.upper_bound(),
        }
    }
}

impl Bounds<f64> {
    /// Degenerate intervals around plain values.
    pub fn lift(&self) -> Bounds<Interval> {
        Bounds {
            y0: Interval::point(self.y0),
            z0: Interval::point(self.z0),
            z2: Interval::point(self.z2),
        }
    }
}

/// Approximate inverse `A ≈ Df(x̄)⁻¹`, computed in plain floating point.
///
/// Rigor does not depend on how good `A` is, only the size of the resulting
/// bounds does. A badly conditioned `Df(x̄)` makes `Z0 < 1` hopeless, so the
/// condition estimate `‖Df(x̄)‖ · ‖A‖` in the field's norm is checked against
/// `max_condition` up front.
///
/// # Errors
///
/// - [`ProofError::DimensionMismatch`] if `x_bar` does not match the field.
/// - [`ProofError::NotFinite`] if `Df(x̄)` or `A` has non-finite entries.
/// - [`ProofError::SingularJacobian`] if `Df(x̄)` cannot be factored.
/// - [`ProofError::IllConditioned`] if the condition estimate exceeds
///   `max_condition`.
pub fn approximate_inverse<F: VectorField<f64>>(
    field: &F,
    x_bar: &DynVector<f64>,
    max_condition: f64,
) -> Result<DynMatrix<f64>, ProofError> {
    check_dim(field.dim(), x_bar.len())?;
    let df = field.jacobian(x_bar);
    if !df.is_finite() {
        return Err(ProofError::NotFinite);
    }
    let a = df.inverse()?;
    if !a.is_finite() {
        return Err(ProofError::NotFinite);
    }

    let norm = field.norm();
    let condition = norm.operator(&df) * norm.operator(&a);
    if !(condition <= max_condition) {
        warn!(condition, max_condition, "Jacobian is ill-conditioned");
        return Err(ProofError::IllConditioned { condition });
    }
    debug!(condition, "approximate inverse");
    Ok(a)
}

/// Radii polynomial bounds at `x̄` with approximate inverse `A`.
///
/// Generic over the numeric kind: with `f64` this is a quick estimate, with
/// [`Interval`] every entry encloses the true value and the bounds are
/// rigorous.
///
/// # Errors
///
/// [`ProofError::DimensionMismatch`] if `x_bar` or `a` does not match the
/// field.
///
/// # Example
///
/// ```
/// use radii::field::{Lorenz, VectorField};
/// use radii::proof::bounds;
/// use radii::DynVector;
///
/// // At the origin f vanishes and A = Df⁻¹ leaves only rounding in Z0.
/// let lorenz = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
/// let origin = DynVector::zeros(3, 0.0);
/// let a = lorenz.jacobian(&origin).inverse().unwrap();
/// let b = bounds(&lorenz, &origin, &a).unwrap();
/// assert_eq!(b.y0, 0.0);
/// assert!(b.z0 < 1e-14);
/// ```
pub fn bounds<T: Scalar, F: VectorField<T>>(
    field: &F,
    x_bar: &DynVector<T>,
    a: &DynMatrix<T>,
) -> Result<Bounds<T>, ProofError> {
    let dim = field.dim();
    check_dim(dim, x_bar.len())?;
    check_dim(dim, a.nrows())?;
    check_dim(dim, a.ncols())?;

    let norm = field.norm();
    let fx = field.eval(x_bar);
    let df = field.jacobian(x_bar);

    let y0 = norm.vector(&(a * &fx));
    let z0 = norm.operator(&(&DynMatrix::eye(dim, T::zero()) - &(a * &df)));
    let z2 = field.z2(a);

    debug!(?y0, ?z0, ?z2, "radii polynomial bounds");
    Ok(Bounds { y0, z0, z2 })
}

/// Rigorous bounds: lifts `x̄` and `A` to degenerate intervals and evaluates
/// the interval field.
pub fn rigorous_bounds<F: VectorField<Interval>>(
    field: &F,
    x_bar: &DynVector<f64>,
    a: &DynMatrix<f64>,
) -> Result<Bounds<Interval>, ProofError> {
    bounds(field, &x_bar.lift(), &a.lift())
}
