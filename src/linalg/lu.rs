use num_traits::Float;

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
///
/// Fails with [`LinalgError::Singular`] when the largest available pivot is
/// not above `n · ε · max|a_ij|`, or is not finite. The threshold scales with
/// the matrix, so a well-conditioned matrix with tiny entries still factors.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let mut scale = T::zero();
    for j in 0..n {
        for i in 0..n {
            scale = Float::max(scale, Float::abs(*a.get(i, j)));
        }
    }
    let threshold = T::epsilon() * scale * T::from_f64(n as f64);

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: find row with largest magnitude in this column
        let mut max_row = col;
        let mut max_val = Float::abs(*a.get(col, col));
        for row in (col + 1)..n {
            let val = Float::abs(*a.get(row, col));
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        if !(max_val > threshold) || !Float::is_finite(max_val) {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = *a.get(col, j);
                *a.get_mut(col, j) = *a.get(max_row, j);
                *a.get_mut(max_row, j) = tmp;
            }
            even = !even;
        }

        let inv_pivot = T::one() / *a.get(col, col);

        // Scale sub-column: a[col+1:n, col] /= pivot
        for row in (col + 1)..n {
            let scaled = *a.get(row, col) * inv_pivot;
            *a.get_mut(row, col) = scaled;
        }

        // Rank-1 update: a[col+1:n, j] -= a[col, j] * a[col+1:n, col]
        for j in (col + 1)..n {
            let a_col_j = *a.get(col, j);
            if a_col_j == T::zero() {
                continue;
            }
            for row in (col + 1)..n {
                let updated = *a.get(row, j) - *a.get(row, col) * a_col_j;
                *a.get_mut(row, j) = updated;
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from `lu_in_place`.
/// `perm` is the row permutation from `lu_in_place`.
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: FloatScalar>(lu: &impl MatrixRef<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();
    assert_eq!(b.len(), n, "rhs length mismatch");
    assert_eq!(x.len(), n, "solution length mismatch");

    // Apply permutation and forward substitution (solve Ly = Pb)
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution (solve Ux = y)
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum / *lu.get(i, i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DynMatrix;

    #[test]
    fn lu_solve_3x3() {
        let mut a = DynMatrix::from_rows(3, 3, &[2.0_f64, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
        let mut perm = [0usize; 3];
        lu_in_place(&mut a, &mut perm).unwrap();
        let mut x = [0.0; 3];
        lu_solve(&a, &perm, &[8.0, -11.0, -3.0], &mut x);
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn pivoting_parity() {
        // Requires one row swap.
        let mut a = DynMatrix::from_rows(2, 2, &[0.0_f64, 1.0, 1.0, 0.0]);
        let mut perm = [0usize; 2];
        let even = lu_in_place(&mut a, &mut perm).unwrap();
        assert!(!even);
        assert_eq!(perm, [1, 0]);
    }

    #[test]
    fn singular_detected() {
        let mut a = DynMatrix::from_rows(3, 3, &[1.0_f64, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0]);
        let mut perm = [0usize; 3];
        assert_eq!(lu_in_place(&mut a, &mut perm), Err(LinalgError::Singular));
    }

    #[test]
    fn tiny_scaled_identity_factors() {
        let mut a = DynMatrix::from_rows(2, 2, &[1e-17_f64, 0.0, 0.0, 1e-17]);
        let mut perm = [0usize; 2];
        lu_in_place(&mut a, &mut perm).unwrap();
        let mut x = [0.0; 2];
        lu_solve(&a, &perm, &[1e-17, -2e-17], &mut x);
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] + 2.0).abs() < 1e-12);
    }

    #[test]
    fn zero_matrix_is_singular() {
        let mut a = DynMatrix::zeros(3, 3, 0.0_f64);
        let mut perm = [0usize; 3];
        assert_eq!(lu_in_place(&mut a, &mut perm), Err(LinalgError::Singular));
    }

    #[test]
    fn infinite_entry_is_singular() {
        let mut a = DynMatrix::from_rows(2, 2, &[f64::INFINITY, 1.0, 1.0, 1.0]);
        let mut perm = [0usize; 2];
        assert_eq!(lu_in_place(&mut a, &mut perm), Err(LinalgError::Singular));
    }

    #[test]
    fn nan_pivot_is_singular() {
        let mut a = DynMatrix::from_rows(2, 2, &[f64::NAN, 1.0, 1.0, 1.0]);
        let mut perm = [0usize; 2];
        // NaN never compares greater, so the NaN row stays as pivot and is rejected.
        assert_eq!(lu_in_place(&mut a, &mut perm), Err(LinalgError::Singular));
    }
}
