use crate::dynmatrix::{DynMatrix, DynVector, Norm};
use crate::interval::Interval;
use crate::traits::Scalar;

use super::{assert_dim, Lift, VectorField};

/// The Lorenz system
///
/// ```text
/// f(x) = [ σ(x₂ − x₁),  ρx₁ − x₂ − x₁x₃,  x₁x₂ − βx₃ ]
/// ```
///
/// measured in the infinity norm.
///
/// # Example
///
/// ```
/// use radii::field::{Lorenz, VectorField};
/// use radii::DynVector;
///
/// let lorenz = Lorenz::new(10.0, 28.0, 8.0 / 3.0);
/// let c = (lorenz.beta * (lorenz.rho - 1.0)).sqrt();
/// let eq = DynVector::from_slice(&[c, c, 27.0]);
/// assert!(lorenz.eval(&eq).iter().all(|v| v.abs() < 1e-12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lorenz<T> {
    pub sigma: T,
    pub rho: T,
    pub beta: T,
}

impl<T: Scalar> Lorenz<T> {
    pub fn new(sigma: T, rho: T, beta: T) -> Self {
        Self { sigma, rho, beta }
    }
}

impl Lorenz<Interval> {
    /// The classical parameters `σ = 10, ρ = 28, β = 8/3` with `β` enclosed
    /// rigorously.
    pub fn classical() -> Self {
        Self::new(
            Interval::point(10.0),
            Interval::point(28.0),
            Interval::point(8.0) / Interval::point(3.0),
        )
    }
}

impl<T: Scalar> VectorField<T> for Lorenz<T> {
    fn dim(&self) -> usize {
        3
    }

    fn eval(&self, x: &DynVector<T>) -> DynVector<T> {
        assert_dim(x.len(), 3);
        let (x1, x2, x3) = (x[0], x[1], x[2]);
        DynVector::from_slice(&[
            self.sigma * (x2 - x1),
            self.rho * x1 - x2 - x1 * x3,
            -self.beta * x3 + x1 * x2,
        ])
    }

    fn jacobian(&self, x: &DynVector<T>) -> DynMatrix<T> {
        assert_dim(x.len(), 3);
        let (x1, x2, x3) = (x[0], x[1], x[2]);
        let zero = T::zero();
        let one = T::one();
        DynMatrix::from_rows(
            3,
            3,
            &[
                -self.sigma, self.sigma, zero,
                self.rho - x3, -one, -x1,
                x2, x1, -self.beta,
            ],
        )
    }

    fn norm(&self) -> Norm {
        Norm::Inf
    }

    /// `D²f` only touches the `x₁x₃` and `x₁x₂` terms in rows two and three,
    /// so `‖A D²f(h, k)‖_∞ ≤ 2 max_i (|A_{i2}| + |A_{i3}|)` for unit `h, k`.
    fn z2(&self, a: &DynMatrix<T>) -> T {
        assert_dim(a.nrows(), 3);
        let mut max = T::zero();
        for i in 0..3 {
            max = max.max(a[(i, 1)].abs() + a[(i, 2)].abs());
        }
        T::from_f64(2.0) * max
    }
}

impl Lift for Lorenz<f64> {
    type Rigorous = Lorenz<Interval>;

    fn lift(&self) -> Lorenz<Interval> {
        Lorenz::new(
            Interval::point(self.sigma),
            Interval::point(self.rho),
            Interval::point(self.beta),
        )
    }
}
