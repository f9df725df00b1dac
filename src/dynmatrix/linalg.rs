use alloc::vec;
use alloc::vec::Vec;

use crate::linalg::LinalgError;
use crate::linalg::lu::{lu_in_place, lu_solve};
use crate::traits::FloatScalar;

use super::vector::DynVector;
use super::DynMatrix;

/// LU decomposition of a dynamically-sized square matrix.
///
/// Stores the packed L/U factors and permutation vector.
///
/// # Example
///
/// ```
/// use radii::{DynMatrix, DynVector};
///
/// let a = DynMatrix::from_rows(2, 2, &[2.0_f64, 1.0, 5.0, 3.0]);
/// let lu = a.lu().unwrap();
///
/// let b = DynVector::from_slice(&[4.0, 11.0]);
/// let x = lu.solve(&b);
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug)]
pub struct DynLu<T> {
    lu: DynMatrix<T>,
    perm: Vec<usize>,
}

impl<T: FloatScalar> DynLu<T> {
    /// Decompose a matrix. Returns an error if the matrix is singular.
    pub fn new(a: &DynMatrix<T>) -> Result<Self, LinalgError> {
        assert!(a.is_square(), "LU decomposition requires a square matrix");
        let n = a.nrows();
        let mut lu = a.clone();
        let mut perm = vec![0usize; n];
        lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm })
    }

    /// Solve Ax = b for x.
    pub fn solve(&self, b: &DynVector<T>) -> DynVector<T> {
        let n = self.lu.nrows();
        assert_eq!(b.len(), n, "rhs length mismatch");
        let mut x = vec![T::zero(); n];
        lu_solve(&self.lu, &self.perm, b.as_slice(), &mut x);
        DynVector::from_vec(x)
    }

    /// Compute the matrix inverse.
    pub fn inverse(&self) -> DynMatrix<T> {
        let n = self.lu.nrows();
        let mut inv = DynMatrix::zeros(n, n, T::zero());
        let mut e = vec![T::zero(); n];

        for col in 0..n {
            if col > 0 {
                e[col - 1] = T::zero();
            }
            e[col] = T::one();
            // Columns are contiguous in column-major storage.
            let out = &mut inv.as_mut_slice()[col * n..(col + 1) * n];
            lu_solve(&self.lu, &self.perm, &e, out);
        }

        inv
    }
}

impl<T: FloatScalar> DynMatrix<T> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<DynLu<T>, LinalgError> {
        DynLu::new(self)
    }

    /// Solve `self * x = b`.
    pub fn solve(&self, b: &DynVector<T>) -> Result<DynVector<T>, LinalgError> {
        Ok(self.lu()?.solve(b))
    }

    /// Matrix inverse.
    pub fn inverse(&self) -> Result<DynMatrix<T>, LinalgError> {
        Ok(self.lu()?.inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
        assert!((a - b).abs() < tol, "{}: {} vs {}", msg, a, b);
    }

    #[test]
    fn solve_3x3() {
        let a = DynMatrix::from_rows(3, 3, &[2.0_f64, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
        let b = DynVector::from_slice(&[8.0, -11.0, -3.0]);
        let x = a.solve(&b).unwrap();
        assert_near(x[0], 2.0, 1e-12, "x0");
        assert_near(x[1], 3.0, 1e-12, "x1");
        assert_near(x[2], -1.0, 1e-12, "x2");
    }

    #[test]
    fn inverse_times_matrix_is_identity() {
        let a = DynMatrix::from_rows(3, 3, &[-10.0_f64, 10.0, 0.0, 1.0, -1.0, -8.5, 8.5, 8.5, -8.0 / 3.0]);
        let inv = a.inverse().unwrap();
        let prod = &inv * &a;
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_near(prod[(i, j)], expected, 1e-12, "A⁻¹A");
            }
        }
    }

    #[test]
    fn small_entries_are_not_singular() {
        let a = DynMatrix::from_rows(2, 2, &[1e-17_f64, 0.0, 0.0, 1e-17]);
        let inv = a.inverse().unwrap();
        assert_near(inv[(0, 0)], 1e17, 1.0, "inv00");
        assert_near(inv[(1, 1)], 1e17, 1.0, "inv11");
        assert_eq!(inv[(0, 1)], 0.0);
    }

    #[test]
    fn singular_inverse() {
        let a = DynMatrix::from_rows(2, 2, &[1.0_f64, 2.0, 2.0, 4.0]);
        assert_eq!(a.inverse().unwrap_err(), LinalgError::Singular);
    }
}
