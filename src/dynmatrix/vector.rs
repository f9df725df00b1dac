use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::interval::Interval;
use crate::traits::Scalar;

use super::DynMatrix;

/// Dynamically-sized vector (wraps a 1×N `DynMatrix`).
///
/// Represents a point of the truncated phase space: length 3 for Lorenz,
/// `N + 1` Fourier coefficients for Fisher.
///
/// # Examples
///
/// ```
/// use radii::DynVector;
///
/// let v = DynVector::from_slice(&[1.0_f64, 2.0, 3.0]);
/// assert_eq!(v[0], 1.0);
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.iter().sum::<f64>(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DynVector<T> {
    pub(crate) inner: DynMatrix<T>,
}

impl<T: Scalar> DynVector<T> {
    /// Create a vector from a flat slice.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Create a vector from an owned `Vec`.
    ///
    /// ```
    /// use radii::DynVector;
    /// let v = DynVector::from_vec(vec![1.0, 2.0, 3.0]);
    /// assert_eq!(v[2], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>) -> Self {
        let n = data.len();
        Self {
            inner: DynMatrix::from_vec(1, n, data),
        }
    }

    /// Create a zero vector of length `n`.
    pub fn zeros(n: usize, _zero: T) -> Self {
        Self {
            inner: DynMatrix::zeros(1, n, T::zero()),
        }
    }
}

impl<T> DynVector<T> {
    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.ncols()
    }

    /// Whether the vector is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// View the vector data as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Apply `f` to every element.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> DynVector<U> {
        DynVector {
            inner: self.inner.map(f),
        }
    }
}

impl DynVector<f64> {
    /// Lift every entry into a degenerate interval.
    pub fn lift(&self) -> DynVector<Interval> {
        self.map(|&x| Interval::point(x))
    }

    /// Whether every entry is finite.
    pub fn is_finite(&self) -> bool {
        self.inner.is_finite()
    }
}

// ── Index ───────────────────────────────────────────────────────────

impl<T> Index<usize> for DynVector<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.inner[(0, i)]
    }
}

impl<T> IndexMut<usize> for DynVector<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.inner[(0, i)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slice() {
        let v = DynVector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[2], 3.0);
    }

    #[test]
    fn zeros_and_index_mut() {
        let mut v = DynVector::zeros(3, 0.0_f64);
        assert!(v.iter().all(|&x| x == 0.0));
        v[1] = 42.0;
        assert_eq!(v[1], 42.0);
    }

    #[test]
    fn lift_round_trip() {
        // Upper endpoints of the lifted vector give back the original exactly.
        let v = DynVector::from_slice(&[1.0e-17, -4.0, 8.485_3]);
        assert_eq!(v.lift().map(|x| x.sup()), v);
        assert!(v.is_finite());
        assert!(!DynVector::from_slice(&[f64::INFINITY]).is_finite());
    }
}
