use alloc::vec;
use core::ops::{Mul, Neg, Sub};

use crate::traits::Scalar;

use super::vector::DynVector;
use super::DynMatrix;

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar> Sub<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn sub(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            (self.nrows, self.ncols),
            (rhs.nrows, rhs.ncols),
            "dimension mismatch: {}x{} - {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        DynMatrix {
            data: self.data.iter().zip(&rhs.data).map(|(&a, &b)| a - b).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        }
    }
}

impl<T: Scalar> Neg for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn neg(self) -> DynMatrix<T> {
        self.map(|&x| -x)
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar> Mul<&DynMatrix<T>> for &DynMatrix<T> {
    type Output = DynMatrix<T>;

    fn mul(self, rhs: &DynMatrix<T>) -> DynMatrix<T> {
        assert_eq!(
            self.ncols, rhs.nrows,
            "dimension mismatch: {}x{} * {}x{}",
            self.nrows, self.ncols, rhs.nrows, rhs.ncols,
        );
        let m = self.nrows;
        let n = self.ncols;
        let p = rhs.ncols;
        let mut data = vec![T::zero(); m * p];
        // Column-major: out[:, j] += lhs[:, k] * rhs[k, j]
        for j in 0..p {
            for k in 0..n {
                let r_kj = rhs.data[j * n + k];
                let col = &self.data[k * m..(k + 1) * m];
                let out = &mut data[j * m..(j + 1) * m];
                for (o, &a) in out.iter_mut().zip(col) {
                    *o = *o + a * r_kj;
                }
            }
        }
        DynMatrix {
            data,
            nrows: m,
            ncols: p,
        }
    }
}

// ── Matrix-vector product ───────────────────────────────────────────

impl<T: Scalar> Mul<&DynVector<T>> for &DynMatrix<T> {
    type Output = DynVector<T>;

    /// ```
    /// use radii::{DynMatrix, DynVector};
    /// let a = DynMatrix::from_rows(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    /// let v = DynVector::from_slice(&[1.0, -1.0]);
    /// assert_eq!((&a * &v).as_slice(), &[-1.0, -1.0]);
    /// ```
    fn mul(self, rhs: &DynVector<T>) -> DynVector<T> {
        assert_eq!(
            self.ncols,
            rhs.len(),
            "dimension mismatch: {}x{} * vector of length {}",
            self.nrows, self.ncols, rhs.len(),
        );
        let m = self.nrows;
        let mut out = vec![T::zero(); m];
        for (k, &x) in rhs.iter().enumerate() {
            let col = &self.data[k * m..(k + 1) * m];
            for (o, &a) in out.iter_mut().zip(col) {
                *o = *o + a * x;
            }
        }
        DynVector::from_vec(out)
    }
}

// ── Vector arithmetic ───────────────────────────────────────────────

impl<T: Scalar> Sub<&DynVector<T>> for &DynVector<T> {
    type Output = DynVector<T>;

    fn sub(self, rhs: &DynVector<T>) -> DynVector<T> {
        DynVector {
            inner: &self.inner - &rhs.inner,
        }
    }
}
