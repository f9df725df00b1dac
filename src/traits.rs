use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::float::FloatCore;
use num_traits::{Float, One, Zero};

/// Numeric kind flowing through every pipeline function.
///
/// Two implementations exist: plain `f64` for the non-rigorous path (Newton,
/// approximate inverse) and [`Interval`](crate::Interval) for the rigorous
/// path. Generic code only ever sees this capability set, so the same
/// evaluator and bound formulas run on both.
pub trait Scalar:
    Copy
    + Debug
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Embed an exactly-representable constant.
    fn from_f64(x: f64) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;

    /// Integer power.
    fn powi(self, n: i32) -> Self;

    /// Maximum (enclosure of the maximum for intervals).
    fn max(self, other: Self) -> Self;

    /// Upper bound as a plain float: the value itself, or an interval's
    /// upper endpoint.
    fn upper_bound(self) -> f64;

    /// Certain strict comparison: every value of `self` lies below every
    /// value of `other`.
    fn strictly_less(self, other: Self) -> bool;
}

impl Scalar for f64 {
    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }

    #[inline]
    fn abs(self) -> Self {
        FloatCore::abs(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        FloatCore::powi(self, n)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        FloatCore::max(self, other)
    }

    #[inline]
    fn upper_bound(self) -> f64 {
        self
    }

    #[inline]
    fn strictly_less(self, other: Self) -> bool {
        self < other
    }
}

/// Plain floating-point scalars.
///
/// Required by the LU kernels, which pivot on ordered magnitudes and are
/// only ever run on the non-rigorous path.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
///
/// Extends `MatrixRef` with mutable element access, enabling
/// in-place algorithms (LU) to work generically.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
