//! Vector fields whose zeros the proof pipeline certifies.
//!
//! A [`VectorField`] evaluates `f(x)` and `Df(x)` generically over the
//! numeric kind, so the same formulas serve the Newton solver (plain `f64`)
//! and the rigorous bound computation ([`Interval`]).
//!
//! - [`Lorenz`] — the three-dimensional Lorenz system.
//! - [`Fisher`] — the steady-state Fisher equation truncated to `N + 1`
//!   cosine (even Fourier) modes.
//!
//! # Example
//!
//! ```
//! use radii::field::{Lorenz, VectorField};
//! use radii::DynVector;
//!
//! let lorenz = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
//! let origin = DynVector::zeros(3, 0.0);
//! assert!(lorenz.eval(&origin).iter().all(|&v| v == 0.0));
//! ```

mod fisher;
mod lorenz;


pub use fisher::Fisher;
pub use lorenz::Lorenz;

use num_traits::Float;

use crate::dynmatrix::{DynMatrix, DynVector, Norm};
use crate::interval::Interval;
use crate::traits::Scalar;

/// A vector field `f: R^n → R^n` with its Jacobian and the problem-specific
/// pieces of the radii polynomial.
pub trait VectorField<T: Scalar> {
    /// Dimension `n` of the (truncated) phase space.
    fn dim(&self) -> usize;

    /// `f(x)`.
    ///
    /// Panics if `x.len() != self.dim()`.
    fn eval(&self, x: &DynVector<T>) -> DynVector<T>;

    /// `Df(x)`.
    ///
    /// Panics if `x.len() != self.dim()`.
    fn jacobian(&self, x: &DynVector<T>) -> DynMatrix<T>;

    /// Norm in which Y0, Z0 and Z2 are measured.
    fn norm(&self) -> Norm;

    /// Bound `Z2` on `‖A · D²f‖`, given the approximate inverse `A`.
    fn z2(&self, a: &DynMatrix<T>) -> T;
}

/// Conversion of a plain problem into its interval twin.
///
/// Parameters are lifted as degenerate intervals, so the resulting proof is
/// about the floating-point parameter values. Problems whose parameters are
/// not representable (`β = 8/3`) can be built directly over [`Interval`]
/// with enclosing parameters instead.
pub trait Lift {
    type Rigorous: VectorField<Interval>;

    fn lift(&self) -> Self::Rigorous;
}

pub(crate) fn assert_dim(x_len: usize, dim: usize) {
    assert_eq!(
        x_len, dim,
        "vector length {} does not match field dimension {}",
        x_len, dim
    );
}

/// Approximate the Jacobian of `f: R^n → R^m` using forward finite differences.
///
/// Uses step size `h_j = sqrt(ε) * max(|x_j|, 1)` for each component,
/// requiring `n + 1` function evaluations. Used to validate analytic
/// Jacobians before trusting any bound built on them.
///
/// # Example
///
/// ```
/// use radii::field::{finite_difference_jacobian, Lorenz, VectorField};
/// use radii::DynVector;
///
/// let lorenz = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
/// let x = DynVector::from_slice(&[1.0, -2.0, 3.0]);
/// let fd = finite_difference_jacobian(|v| lorenz.eval(v), &x);
/// let exact = lorenz.jacobian(&x);
/// for i in 0..3 {
///     for j in 0..3 {
///         assert!((fd[(i, j)] - exact[(i, j)]).abs() < 1e-5);
///     }
/// }
/// ```
pub fn finite_difference_jacobian(
    mut f: impl FnMut(&DynVector<f64>) -> DynVector<f64>,
    x: &DynVector<f64>,
) -> DynMatrix<f64> {
    let sqrt_eps = Float::sqrt(f64::EPSILON);
    let f0 = f(x);
    let m = f0.len();
    let n = x.len();
    let mut jac = DynMatrix::zeros(m, n, 0.0);

    for j in 0..n {
        let h = sqrt_eps * x[j].abs().max(1.0);
        let mut x_pert = x.clone();
        x_pert[j] += h;
        let f_pert = f(&x_pert);

        for i in 0..m {
            jac[(i, j)] = (f_pert[i] - f0[i]) / h;
        }
    }

    jac
}
