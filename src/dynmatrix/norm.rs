use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

/// Norm on the truncated phase space, paired with its induced operator norm.
///
/// The radii polynomial bounds are only meaningful when Y0, Z0 and Z2 are
/// all measured with the same norm, so problems carry a `Norm` and every
/// bound goes through [`Norm::vector`] / [`Norm::operator`].
///
/// ```
/// use radii::{DynMatrix, DynVector, Norm};
///
/// let v = DynVector::from_slice(&[1.0_f64, -2.0, 3.0]);
/// assert_eq!(Norm::Inf.vector(&v), 3.0);
/// assert_eq!(Norm::L1.vector(&v), 6.0);
/// // Cosine-series weights 1, 2, 2, ...
/// assert_eq!(Norm::SymmetricL1 { nu: 1.0 }.vector(&v), 11.0);
///
/// let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
/// assert_eq!(Norm::Inf.operator(&m), 7.0);
/// assert_eq!(Norm::L1.operator(&m), 6.0);
/// assert_eq!(Norm::Entrywise.operator(&m), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Norm {
    /// Max absolute component; induced norm is the max absolute row sum.
    #[default]
    Inf,
    /// Sum of absolute components; induced norm is the max absolute column sum.
    L1,
    /// Weighted ℓ¹ for even Fourier coefficients: `|x_0| + 2 Σ_{k≥1} ν^k |x_k|`.
    ///
    /// Induced norm is `max_j (1/ω_j) Σ_i ω_i |A_ij|`.
    SymmetricL1 { nu: f64 },
    /// ℓ¹ on vectors; on matrices the entrywise sum `Σ_ij |A_ij|`.
    ///
    /// The entrywise sum dominates every column sum, so it over-estimates the
    /// induced ℓ¹ norm.
    Entrywise,
}

impl Norm {
    /// Weight `ω_k` of the `k`-th component.
    fn weight<T: Scalar>(&self, k: usize) -> T {
        match *self {
            Norm::Inf | Norm::L1 | Norm::Entrywise => T::one(),
            Norm::SymmetricL1 { nu } => {
                if k == 0 {
                    T::one()
                } else {
                    T::from_f64(2.0) * T::from_f64(nu).powi(k as i32)
                }
            }
        }
    }

    /// Vector norm.
    pub fn vector<T: Scalar>(&self, v: &DynVector<T>) -> T {
        match self {
            Norm::Inf => v.iter().fold(T::zero(), |acc, &x| acc.max(x.abs())),
            Norm::L1 | Norm::Entrywise => v.iter().fold(T::zero(), |acc, &x| acc + x.abs()),
            Norm::SymmetricL1 { .. } => v
                .iter()
                .enumerate()
                .fold(T::zero(), |acc, (k, &x)| acc + self.weight::<T>(k) * x.abs()),
        }
    }

    /// Induced operator norm of a square matrix.
    pub fn operator<T: Scalar>(&self, m: &DynMatrix<T>) -> T {
        match self {
            Norm::Inf => {
                let mut max = T::zero();
                for i in 0..m.nrows() {
                    let mut row_sum = T::zero();
                    for j in 0..m.ncols() {
                        row_sum = row_sum + m[(i, j)].abs();
                    }
                    max = max.max(row_sum);
                }
                max
            }
            Norm::L1 => {
                let mut max = T::zero();
                for j in 0..m.ncols() {
                    let mut col_sum = T::zero();
                    for i in 0..m.nrows() {
                        col_sum = col_sum + m[(i, j)].abs();
                    }
                    max = max.max(col_sum);
                }
                max
            }
            Norm::SymmetricL1 { .. } => {
                let weights: alloc::vec::Vec<T> =
                    (0..m.nrows().max(m.ncols())).map(|k| self.weight(k)).collect();
                let mut max = T::zero();
                for j in 0..m.ncols() {
                    let mut col_sum = T::zero();
                    for i in 0..m.nrows() {
                        col_sum = col_sum + weights[i] * m[(i, j)].abs();
                    }
                    max = max.max(col_sum / weights[j]);
                }
                max
            }
            Norm::Entrywise => m.as_slice().iter().fold(T::zero(), |acc, &x| acc + x.abs()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_norms() {
        let v = DynVector::from_slice(&[1.0_f64, -2.0, 3.0]);
        assert_eq!(Norm::Inf.vector(&v), 3.0);
        assert_eq!(Norm::L1.vector(&v), 6.0);
        assert_eq!(Norm::SymmetricL1 { nu: 1.0 }.vector(&v), 11.0);
        // 1 + 2*1.5*2 + 2*2.25*3
        assert_eq!(Norm::SymmetricL1 { nu: 1.5 }.vector(&v), 20.5);
    }

    #[test]
    fn operator_norms() {
        let m = DynMatrix::from_rows(2, 2, &[1.0_f64, -2.0, 3.0, 4.0]);
        assert_eq!(Norm::Inf.operator(&m), 7.0);
        assert_eq!(Norm::L1.operator(&m), 6.0);
        // col 0: (1 + 2*3)/1 = 7, col 1: (2 + 2*4)/2 = 5
        assert_eq!(Norm::SymmetricL1 { nu: 1.0 }.operator(&m), 7.0);
        assert_eq!(Norm::Entrywise.operator(&m), 10.0);
        assert_eq!(Norm::Entrywise.vector(&DynVector::from_slice(&[1.0, -2.0])), 3.0);
    }

    #[test]
    fn entrywise_dominates_induced_l1() {
        let a = DynMatrix::from_rows(3, 3, &[0.5, -1.0, 0.25, 2.0, 0.0, 1.0, -0.75, 0.5, 3.0]);
        assert_eq!(Norm::Entrywise.operator(&a), 9.0);
        assert!(Norm::Entrywise.operator(&a) >= Norm::L1.operator(&a));
        assert_eq!(Norm::Entrywise.operator(&DynMatrix::eye(4, 0.0_f64)), 4.0);
    }

    #[test]
    fn identity_has_unit_norm() {
        let id = DynMatrix::eye(4, 0.0_f64);
        for norm in [Norm::Inf, Norm::L1, Norm::SymmetricL1 { nu: 1.2 }] {
            assert!((norm.operator(&id) - 1.0).abs() < 1e-15, "{:?}", norm);
        }
    }

    #[test]
    fn operator_norm_is_induced() {
        // ‖A v‖ ≤ ‖A‖ ‖v‖ for the weighted norm.
        let norm = Norm::SymmetricL1 { nu: 1.0 };
        let a = DynMatrix::from_rows(3, 3, &[0.5, -1.0, 0.25, 2.0, 0.0, 1.0, -0.75, 0.5, 3.0]);
        let v = DynVector::from_slice(&[1.0, -0.5, 2.0]);
        let av = &a * &v;
        assert!(norm.vector(&av) <= norm.operator(&a) * norm.vector(&v) + 1e-12);
    }

    #[test]
    fn interval_norm_encloses_plain() {
        let m = DynMatrix::from_rows(2, 2, &[0.1_f64, -0.2, 0.3, 1.0 / 7.0]);
        for norm in [Norm::Inf, Norm::L1, Norm::SymmetricL1 { nu: 1.0 }, Norm::Entrywise] {
            let plain = norm.operator(&m);
            let rigorous = norm.operator(&m.lift());
            assert!(rigorous.contains(plain), "{:?}", norm);
            assert!(rigorous.sup() >= plain);
        }
    }
}
