use tracing::debug;

use crate::dynmatrix::{DynVector, Norm};
use crate::field::VectorField;

use super::{check_dim, ProofError};

/// Settings for the Newton solver.
#[derive(Debug, Clone, Copy)]
pub struct NewtonSettings {
    /// Convergence tolerance on `‖f(x)‖`.
    pub tol: f64,
    /// Maximum number of Newton steps.
    pub max_iter: usize,
    /// Norm for the residual. Independent of the norm the bounds use.
    pub norm: Norm,
}

impl Default for NewtonSettings {
    fn default() -> Self {
        Self {
            tol: 1e-10,
            max_iter: 100,
            norm: Norm::Inf,
        }
    }
}

/// Result of a converged Newton iteration.
#[derive(Debug, Clone)]
pub struct NewtonResult {
    /// Approximate zero `x̄`.
    pub x: DynVector<f64>,
    /// `‖f(x̄)‖` in the residual norm.
    pub residual: f64,
    /// Number of Newton steps taken.
    pub iterations: usize,
}

/// Newton's method for `f(x) = 0`.
///
/// Each step solves `Df(x) u = f(x)` by LU and sets `x ← x − u`. The
/// residual is checked before every step, including at `x0`, so a guess that
/// already satisfies the tolerance returns after zero iterations.
///
/// # Errors
///
/// - [`ProofError::DimensionMismatch`] if `x0` does not match the field.
/// - [`ProofError::SingularJacobian`] if a linear solve fails.
/// - [`ProofError::NotFinite`] if an iterate or residual becomes NaN or infinite.
/// - [`ProofError::MaxIterations`] if the tolerance is not reached.
///
/// # Example
///
/// ```
/// use radii::field::Lorenz;
/// use radii::proof::{newton, NewtonSettings};
/// use radii::DynVector;
///
/// let lorenz = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
/// let x0 = DynVector::from_slice(&[8.0, 8.0, 27.0]);
/// let sol = newton(&lorenz, &x0, &NewtonSettings::default()).unwrap();
/// assert!((sol.x[0] - 72.0_f64.sqrt()).abs() < 1e-10);
/// assert!(sol.residual < 1e-10);
/// ```
pub fn newton<F: VectorField<f64>>(
    field: &F,
    x0: &DynVector<f64>,
    settings: &NewtonSettings,
) -> Result<NewtonResult, ProofError> {
    check_dim(field.dim(), x0.len())?;
    let norm = settings.norm;

    let measure = |fx: &DynVector<f64>| {
        if fx.is_finite() {
            Ok(norm.vector(fx))
        } else {
            Err(ProofError::NotFinite)
        }
    };

    let mut x = x0.clone();
    let mut fx = field.eval(&x);

    for iter in 0..settings.max_iter {
        let residual = measure(&fx)?;
        debug!(iteration = iter, residual, "newton");
        if residual < settings.tol {
            return Ok(NewtonResult {
                x,
                residual,
                iterations: iter,
            });
        }

        let step = field.jacobian(&x).solve(&fx)?;
        x = &x - &step;
        fx = field.eval(&x);
    }

    let residual = measure(&fx)?;
    debug!(iteration = settings.max_iter, residual, "newton");
    if residual < settings.tol {
        return Ok(NewtonResult {
            x,
            residual,
            iterations: settings.max_iter,
        });
    }
    Err(ProofError::MaxIterations {
        iterations: settings.max_iter,
        residual,
    })
}
