use alloc::vec;

use crate::dynmatrix::{DynMatrix, DynVector, Norm};
use crate::interval::Interval;
use crate::traits::Scalar;

use super::{assert_dim, Lift, VectorField};

/// Steady states of the Fisher equation in `N + 1` cosine modes.
///
/// The unknowns `x_0..=x_N` are the even Fourier coefficients of a symmetric
/// profile, with the implicit reflection `x_{-k} = x_k`. Mode `k` satisfies
///
/// ```text
/// f_k(x) = (λ − k²) x_k − λ (x ∗ x)_k
/// ```
///
/// where `∗` is the symmetric discrete convolution truncated to `|k| ≤ N`.
/// Bounds are measured in the weighted ℓ¹ norm of cosine series
/// ([`Norm::SymmetricL1`] with `ν = 1`), which is a Banach algebra under `∗`.
/// [`Fisher::with_norm`] selects another convention, e.g. [`Norm::Entrywise`]
/// for plain ℓ¹ residuals with entrywise matrix sums.
///
/// # Example
///
/// ```
/// use radii::field::{Fisher, VectorField};
/// use radii::DynVector;
///
/// // The constant state u ≡ 1 is a zero.
/// let fisher = Fisher::new(50.0, 8);
/// let mut one = DynVector::zeros(fisher.dim(), 0.0);
/// one[0] = 1.0;
/// assert!(fisher.eval(&one).iter().all(|&v| v == 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fisher<T> {
    pub lambda: T,
    /// Truncation order `N`; the phase space has dimension `N + 1`.
    pub order: usize,
    /// Norm for Y0, Z0 and Z2.
    pub norm: Norm,
}

impl<T: Scalar> Fisher<T> {
    pub fn new(lambda: T, order: usize) -> Self {
        Self {
            lambda,
            order,
            norm: Norm::SymmetricL1 { nu: 1.0 },
        }
    }

    /// Same problem, bounds measured in `norm`.
    ///
    /// ```
    /// use radii::field::{Fisher, VectorField};
    /// use radii::Norm;
    ///
    /// let fisher = Fisher::new(50.0, 8).with_norm(Norm::Entrywise);
    /// assert_eq!(fisher.norm(), Norm::Entrywise);
    /// ```
    pub fn with_norm(self, norm: Norm) -> Self {
        Self { norm, ..self }
    }

    /// Symmetric convolution `(x ∗ x)_k = Σ_{k₁=−N}^{N} x_{|k₁|} x_{|k−k₁|}`,
    /// dropping every term whose index `|k − k₁|` exceeds `N`.
    ///
    /// Panics if `x.len() != N + 1`.
    pub fn convolution(&self, x: &DynVector<T>) -> DynVector<T> {
        let n = self.order as isize;
        assert_dim(x.len(), self.order + 1);
        let mut out = vec![T::zero(); self.order + 1];
        for (k, o) in out.iter_mut().enumerate() {
            let k = k as isize;
            // |k − k₁| ≤ N  ⇔  k − N ≤ k₁ ≤ k + N, intersected with [−N, N].
            let lo = (k - n).max(-n);
            let hi = (k + n).min(n);
            let mut sum = T::zero();
            for k1 in lo..=hi {
                sum = sum + x[k1.unsigned_abs()] * x[(k - k1).unsigned_abs()];
            }
            *o = sum;
        }
        DynVector::from_vec(out)
    }

    /// `λ − k²`, exact for the integer part.
    fn linear(&self, k: usize) -> T {
        self.lambda - T::from_f64((k * k) as f64)
    }
}

impl<T: Scalar> VectorField<T> for Fisher<T> {
    fn dim(&self) -> usize {
        self.order + 1
    }

    fn eval(&self, x: &DynVector<T>) -> DynVector<T> {
        assert_dim(x.len(), self.dim());
        let conv = self.convolution(x);
        let out = (0..self.dim())
            .map(|k| self.linear(k) * x[k] - self.lambda * conv[k])
            .collect();
        DynVector::from_vec(out)
    }

    /// `∂f_k/∂x_l = δ_{kl}(λ − k²) − 2λ x_{|k−l|} − [l > 0, k + l ≤ N] 2λ x_{k+l}`.
    ///
    /// Mode `l > 0` enters the convolution through both `x_l` and its
    /// reflection `x_{−l}`; the reflected copy only contributes while
    /// `k + l` stays inside the truncation. `x_0` has no reflected partner.
    fn jacobian(&self, x: &DynVector<T>) -> DynMatrix<T> {
        let dim = self.dim();
        assert_dim(x.len(), dim);
        let two_lambda = T::from_f64(2.0) * self.lambda;
        DynMatrix::from_fn(dim, dim, |k, l| {
            let mut entry = -(two_lambda * x[k.abs_diff(l)]);
            if l > 0 && k + l <= self.order {
                entry = entry - two_lambda * x[k + l];
            }
            if k == l {
                entry = entry + self.linear(k);
            }
            entry
        })
    }

    fn norm(&self) -> Norm {
        self.norm
    }

    /// `D²f(h, k) = −2λ (h ∗ k)`, so `Z2 = 2|λ| ‖A‖` with `‖A‖` in the
    /// field's norm.
    fn z2(&self, a: &DynMatrix<T>) -> T {
        assert_dim(a.nrows(), self.dim());
        T::from_f64(2.0) * self.lambda.abs() * self.norm().operator(a)
    }
}

impl Lift for Fisher<f64> {
    type Rigorous = Fisher<Interval>;

    fn lift(&self) -> Fisher<Interval> {
        Fisher::new(Interval::point(self.lambda), self.order).with_norm(self.norm)
    }
}
