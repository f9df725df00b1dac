//! The radii polynomial proof pipeline.
//!
//! A proof runs in four stages, each usable on its own:
//!
//! - [`newton`] — plain Newton iteration to an approximate zero `x̄`
//! - [`approximate_inverse`] — plain `A ≈ Df(x̄)⁻¹` with a conditioning check
//! - [`rigorous_bounds`] — interval enclosures of `Y0`, `Z0`, `Z2`
//! - [`certify`] — roots of `p(r) = Z2 r² − (1 − Z0) r + Y0` and the
//!   interval test `p(r0) < 0`
//!
//! [`prove`] chains them. Numerical and shape problems are reported as
//! [`ProofError`]; a run that completes but cannot establish `p(r0) < 0` is a
//! normal [`ProofResult`] with [`ProofStatus::NotCertified`].
//!
//! # Example
//!
//! ```
//! use radii::field::Lorenz;
//! use radii::proof::{prove_with, ProofSettings};
//! use radii::DynVector;
//!
//! let plain = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
//! let rigorous = Lorenz::classical();
//! let x0 = DynVector::from_slice(&[8.0, 8.0, 27.0]);
//!
//! let proof = prove_with(&plain, &rigorous, &x0, &ProofSettings::default()).unwrap();
//! assert!(proof.result.is_certified());
//! ```

mod bounds;
mod certify;
mod newton;


pub use bounds::{approximate_inverse, bounds, rigorous_bounds, Bounds};
pub use certify::{certify, certify_bounds, Failure, ProofResult, ProofStatus, Witness};
pub use newton::{newton, NewtonResult, NewtonSettings};

use crate::dynmatrix::DynVector;
use crate::field::{Lift, VectorField};
use crate::interval::Interval;
use crate::linalg::LinalgError;

/// Errors that abort a proof run.
///
/// These signal a broken setup or a failed numerical stage, never a
/// negative verdict of the certifier.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ProofError {
    /// A vector or matrix does not match the problem dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// Newton did not reach the tolerance.
    #[error("Newton did not converge in {iterations} iterations (residual {residual:e})")]
    MaxIterations { iterations: usize, residual: f64 },
    /// `Df(x)` could not be factored.
    #[error("Jacobian is singular")]
    SingularJacobian,
    /// `‖Df(x̄)‖ · ‖A‖` exceeds the configured limit.
    #[error("Jacobian is ill-conditioned (condition estimate {condition:e})")]
    IllConditioned { condition: f64 },
    /// A computed value was NaN or infinity.
    #[error("computed value is NaN or infinity")]
    NotFinite,
}

impl From<LinalgError> for ProofError {
    fn from(_: LinalgError) -> Self {
        ProofError::SingularJacobian
    }
}

pub(crate) fn check_dim(expected: usize, got: usize) -> Result<(), ProofError> {
    if expected == got {
        Ok(())
    } else {
        Err(ProofError::DimensionMismatch { expected, got })
    }
}

/// Settings for a full proof run.
#[derive(Debug, Clone, Copy)]
pub struct ProofSettings {
    pub newton: NewtonSettings,
    pub witness: Witness,
    /// Upper limit on `‖Df(x̄)‖ · ‖A‖`.
    pub max_condition: f64,
}

impl Default for ProofSettings {
    fn default() -> Self {
        Self {
            newton: NewtonSettings::default(),
            witness: Witness::Midpoint,
            max_condition: 1e12,
        }
    }
}

/// A completed proof run.
#[derive(Debug, Clone)]
pub struct Proof {
    /// Approximate zero the bounds were computed at.
    pub x_bar: DynVector<f64>,
    /// Newton steps taken to reach `x̄`.
    pub iterations: usize,
    pub result: ProofResult,
}

/// Prove a zero of `problem` near `x0`, using its [`Lift`] for the rigorous
/// stage.
///
/// # Example
///
/// ```
/// use radii::field::Fisher;
/// use radii::proof::{prove, ProofSettings};
/// use radii::DynVector;
///
/// let fisher = Fisher::new(50.0, 20);
/// let mut x0 = DynVector::zeros(21, 0.0);
/// x0[0] = 0.9;
/// let proof = prove(&fisher, &x0, &ProofSettings::default()).unwrap();
/// assert!(proof.result.is_certified());
/// ```
pub fn prove<P>(
    problem: &P,
    x0: &DynVector<f64>,
    settings: &ProofSettings,
) -> Result<Proof, ProofError>
where
    P: VectorField<f64> + Lift,
{
    prove_with(problem, &problem.lift(), x0, settings)
}

/// Prove a zero using `plain` for Newton and the approximate inverse and
/// `rigorous` for the bounds.
///
/// `rigorous` should enclose the same problem; building it directly lets
/// parameters that are not floats (`β = 8/3`) be enclosed.
pub fn prove_with<P, R>(
    plain: &P,
    rigorous: &R,
    x0: &DynVector<f64>,
    settings: &ProofSettings,
) -> Result<Proof, ProofError>
where
    P: VectorField<f64>,
    R: VectorField<Interval>,
{
    check_dim(plain.dim(), rigorous.dim())?;
    let solution = newton(plain, x0, &settings.newton)?;
    let a = approximate_inverse(plain, &solution.x, settings.max_condition)?;
    let bounds = rigorous_bounds(rigorous, &solution.x, &a)?;
    let result = certify(&bounds, settings.witness);
    Ok(Proof {
        x_bar: solution.x,
        iterations: solution.iterations,
        result,
    })
}
