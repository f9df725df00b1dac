//! Closed intervals over `f64` with outward-rounded arithmetic.
//!
//! Every operation returns an interval guaranteed to contain the exact real
//! result for all real operands drawn from the inputs. Rounding direction is
//! recovered from error-free transformations (TwoSum for addition, fused
//! multiply-add residuals for products and quotients): when the rounded
//! result is exact the endpoint is kept, otherwise it is moved one ulp
//! outward with `next_up` / `next_down`.
//!
//! ```
//! use radii::Interval;
//!
//! let third = Interval::ONE / Interval::point(3.0);
//! assert!(third.contains(1.0 / 3.0));
//! assert!(third.inf() < third.sup());
//!
//! let x = Interval::point(2.5);
//! assert_eq!(x.sup(), 2.5);
//! ```

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::{Float, One, Zero};

use crate::traits::Scalar;

/// A closed interval `[lo, hi]` of reals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    lo: f64,
    hi: f64,
}

impl Interval {
    /// The degenerate interval `[0, 0]`.
    pub const ZERO: Self = Self { lo: 0.0, hi: 0.0 };

    /// The degenerate interval `[1, 1]`.
    pub const ONE: Self = Self { lo: 1.0, hi: 1.0 };

    /// The whole real line.
    pub const ENTIRE: Self = Self {
        lo: f64::NEG_INFINITY,
        hi: f64::INFINITY,
    };

    /// Create `[lo, hi]`.
    ///
    /// Panics if either endpoint is NaN or `lo > hi`.
    pub fn new(lo: f64, hi: f64) -> Self {
        assert!(
            lo <= hi,
            "invalid interval endpoints: [{}, {}]",
            lo,
            hi
        );
        Self { lo, hi }
    }

    /// Degenerate interval `[x, x]`.
    #[inline]
    pub fn point(x: f64) -> Self {
        Self { lo: x, hi: x }
    }

    /// Lower endpoint.
    #[inline]
    pub fn inf(self) -> f64 {
        self.lo
    }

    /// Upper endpoint.
    #[inline]
    pub fn sup(self) -> f64 {
        self.hi
    }

    /// Midpoint (rounded to nearest; not itself an enclosure).
    #[inline]
    pub fn mid(self) -> f64 {
        if self.lo == self.hi {
            self.lo
        } else {
            0.5 * self.lo + 0.5 * self.hi
        }
    }

    #[inline]
    pub fn is_point(self) -> bool {
        self.lo == self.hi
    }

    #[inline]
    pub fn contains(self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }

    /// Smallest interval containing both operands.
    pub fn hull(self, other: Self) -> Self {
        Self {
            lo: self.lo.min(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Absolute value.
    pub fn abs(self) -> Self {
        if self.lo >= 0.0 {
            self
        } else if self.hi <= 0.0 {
            Self {
                lo: -self.hi,
                hi: -self.lo,
            }
        } else {
            Self {
                lo: 0.0,
                hi: self.hi.max(-self.lo),
            }
        }
    }

    /// Enclosure of `max(x, y)` over both intervals.
    pub fn max(self, other: Self) -> Self {
        Self {
            lo: self.lo.max(other.lo),
            hi: self.hi.max(other.hi),
        }
    }

    /// Reciprocal. An interval containing zero maps to [`Interval::ENTIRE`].
    pub fn recip(self) -> Self {
        Self::ONE / self
    }

    /// Integer power. Even powers are computed on `|x|` so the result never
    /// dips below zero.
    pub fn powi(self, n: i32) -> Self {
        let p = self.powu(n.unsigned_abs());
        if n < 0 {
            p.recip()
        } else {
            p
        }
    }

    fn powu(self, n: u32) -> Self {
        if n == 0 {
            return Self::ONE;
        }
        if n % 2 == 0 {
            let a = self.abs();
            Self {
                lo: pow_down(a.lo, n),
                hi: pow_up(a.hi, n),
            }
        } else {
            // Odd powers are monotone.
            let lo = if self.lo >= 0.0 {
                pow_down(self.lo, n)
            } else {
                -pow_up(-self.lo, n)
            };
            let hi = if self.hi >= 0.0 {
                pow_up(self.hi, n)
            } else {
                -pow_down(-self.hi, n)
            };
            Self { lo, hi }
        }
    }

    /// Certain strict comparison: `self.hi < other.lo`.
    ///
    /// `false` means "not established", which includes overlapping
    /// intervals.
    #[inline]
    pub fn strictly_less(self, other: Self) -> bool {
        self.hi < other.lo
    }
}

// ── Directed rounding helpers ───────────────────────────────────────

/// Below this magnitude FMA residuals may be inexact (gradual underflow),
/// so results are widened unconditionally.
const TINY: f64 = 1.0e-290;

#[inline]
fn widen(x: f64) -> (f64, f64) {
    (x.next_down(), x.next_up())
}

#[inline]
fn overflow(x: f64) -> (f64, f64) {
    if x == f64::INFINITY {
        (f64::MAX, f64::INFINITY)
    } else if x == f64::NEG_INFINITY {
        (f64::NEG_INFINITY, -f64::MAX)
    } else {
        (x, x)
    }
}

/// Rounded-down and rounded-up `a + b`.
#[inline]
fn add_round(a: f64, b: f64) -> (f64, f64) {
    let s = a + b;
    if !s.is_finite() {
        return if a.is_finite() && b.is_finite() {
            overflow(s)
        } else {
            (s, s)
        };
    }
    // TwoSum: s + err == a + b exactly.
    let bb = s - a;
    let err = (a - (s - bb)) + (b - bb);
    if err > 0.0 {
        (s, s.next_up())
    } else if err < 0.0 {
        (s.next_down(), s)
    } else {
        (s, s)
    }
}

#[inline]
fn sub_round(a: f64, b: f64) -> (f64, f64) {
    add_round(a, -b)
}

/// Rounded-down and rounded-up `a * b`, with `0 * ±inf = 0`.
#[inline]
fn mul_round(a: f64, b: f64) -> (f64, f64) {
    if a == 0.0 || b == 0.0 {
        return (0.0, 0.0);
    }
    let p = a * b;
    if !p.is_finite() {
        return if a.is_finite() && b.is_finite() {
            overflow(p)
        } else {
            (p, p)
        };
    }
    if p.abs() < TINY {
        return widen(p);
    }
    let err = Float::mul_add(a, b, -p);
    if err > 0.0 {
        (p, p.next_up())
    } else if err < 0.0 {
        (p.next_down(), p)
    } else {
        (p, p)
    }
}

/// Rounded-down and rounded-up `a / b` for `b != 0`.
#[inline]
fn div_round(a: f64, b: f64) -> (f64, f64) {
    if a == 0.0 {
        return (0.0, 0.0);
    }
    let q = a / b;
    if !q.is_finite() {
        return if a.is_finite() {
            overflow(q)
        } else {
            (q, q)
        };
    }
    if q.abs() < TINY || b.is_infinite() {
        return widen(q);
    }
    // a - q*b is exact, and a/b - q has the sign of r/b.
    let r = Float::mul_add(-q, b, a);
    let dir = if b > 0.0 { r } else { -r };
    if dir > 0.0 {
        (q, q.next_up())
    } else if dir < 0.0 {
        (q.next_down(), q)
    } else {
        (q, q)
    }
}

/// Upper bound of `x^n` for `x >= 0`.
fn pow_up(x: f64, n: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..n {
        acc = mul_round(acc, x).1;
    }
    acc
}

/// Lower bound of `x^n` for `x >= 0`.
fn pow_down(x: f64, n: u32) -> f64 {
    let mut acc = 1.0;
    for _ in 0..n {
        acc = mul_round(acc, x).0;
    }
    acc
}

// ── Arithmetic ──────────────────────────────────────────────────────

impl Add for Interval {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            lo: add_round(self.lo, rhs.lo).0,
            hi: add_round(self.hi, rhs.hi).1,
        }
    }
}

impl Sub for Interval {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            lo: sub_round(self.lo, rhs.hi).0,
            hi: sub_round(self.hi, rhs.lo).1,
        }
    }
}

impl Mul for Interval {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        if self == Self::ZERO || rhs == Self::ZERO {
            return Self::ZERO;
        }
        let candidates = [
            mul_round(self.lo, rhs.lo),
            mul_round(self.lo, rhs.hi),
            mul_round(self.hi, rhs.lo),
            mul_round(self.hi, rhs.hi),
        ];
        let mut lo = candidates[0].0;
        let mut hi = candidates[0].1;
        for &(down, up) in &candidates[1..] {
            lo = lo.min(down);
            hi = hi.max(up);
        }
        Self { lo, hi }
    }
}

impl Div for Interval {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        if rhs.lo <= 0.0 && rhs.hi >= 0.0 {
            return Self::ENTIRE;
        }
        let candidates = [
            div_round(self.lo, rhs.lo),
            div_round(self.lo, rhs.hi),
            div_round(self.hi, rhs.lo),
            div_round(self.hi, rhs.hi),
        ];
        let mut lo = candidates[0].0;
        let mut hi = candidates[0].1;
        for &(down, up) in &candidates[1..] {
            lo = lo.min(down);
            hi = hi.max(up);
        }
        Self { lo, hi }
    }
}

impl Neg for Interval {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            lo: -self.hi,
            hi: -self.lo,
        }
    }
}

impl Zero for Interval {
    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl One for Interval {
    #[inline]
    fn one() -> Self {
        Self::ONE
    }
}

impl From<f64> for Interval {
    #[inline]
    fn from(x: f64) -> Self {
        Self::point(x)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:e}, {:e}]", self.lo, self.hi)
    }
}

impl Scalar for Interval {
    #[inline]
    fn from_f64(x: f64) -> Self {
        Self::point(x)
    }

    #[inline]
    fn abs(self) -> Self {
        Interval::abs(self)
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        Interval::powi(self, n)
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        Interval::max(self, other)
    }

    #[inline]
    fn upper_bound(self) -> f64 {
        self.hi
    }

    #[inline]
    fn strictly_less(self, other: Self) -> bool {
        Interval::strictly_less(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        for &x in &[0.0, 1.0, -2.5, 1.0e-300, 8.485_281_374_238_57, f64::MAX] {
            let iv = Interval::point(x);
            assert_eq!(iv.sup(), x);
            assert_eq!(iv.inf(), x);
            assert_eq!(Scalar::upper_bound(iv), x);
        }
    }

    #[test]
    #[should_panic(expected = "invalid interval")]
    fn reversed_endpoints() {
        let _ = Interval::new(2.0, 1.0);
    }

    #[test]
    fn exact_sums_stay_tight() {
        let s = Interval::point(1.0) + Interval::point(2.0);
        assert_eq!(s, Interval::point(3.0));
        let d = Interval::point(0.5) - Interval::point(0.25);
        assert_eq!(d, Interval::point(0.25));
    }

    #[test]
    fn inexact_sum_encloses() {
        // 0.1 + 0.2 is not representable.
        let s = Interval::point(0.1) + Interval::point(0.2);
        assert!(s.inf() < s.sup());
        assert!(s.contains(0.1 + 0.2));
        assert_eq!(s.sup().next_down(), s.inf());
    }

    #[test]
    fn one_third() {
        let t = Interval::ONE / Interval::point(3.0);
        assert!(t.inf() < t.sup());
        assert!(t.contains(1.0 / 3.0));
        // Three times the enclosure must contain one.
        let back = t * Interval::point(3.0);
        assert!(back.contains(1.0));
    }

    #[test]
    fn exact_products_stay_tight() {
        let p = Interval::point(3.0) * Interval::point(-4.0);
        assert_eq!(p, Interval::point(-12.0));
        let q = Interval::point(27.0) / Interval::point(3.0);
        assert_eq!(q, Interval::point(9.0));
    }

    #[test]
    fn mixed_sign_product() {
        let a = Interval::new(-1.0, 2.0);
        let b = Interval::new(-3.0, 4.0);
        let p = a * b;
        assert_eq!(p.inf(), -6.0);
        assert_eq!(p.sup(), 8.0);
    }

    #[test]
    fn zero_times_entire() {
        assert_eq!(Interval::ZERO * Interval::ENTIRE, Interval::ZERO);
        let p = Interval::new(0.0, 1.0) * Interval::new(2.0, f64::INFINITY);
        assert_eq!(p.inf(), 0.0);
        assert_eq!(p.sup(), f64::INFINITY);
    }

    #[test]
    fn division_by_zero_straddle() {
        let q = Interval::ONE / Interval::new(-1.0, 1.0);
        assert_eq!(q, Interval::ENTIRE);
    }

    #[test]
    fn negation_and_abs() {
        let a = Interval::new(-3.0, 1.0);
        assert_eq!(-a, Interval::new(-1.0, 3.0));
        assert_eq!(a.abs(), Interval::new(0.0, 3.0));
        assert_eq!(Interval::new(-3.0, -1.0).abs(), Interval::new(1.0, 3.0));
    }

    #[test]
    fn even_power_nonnegative() {
        let a = Interval::new(-2.0, 1.0);
        let sq = a.powi(2);
        assert_eq!(sq.inf(), 0.0);
        assert_eq!(sq.sup(), 4.0);
        // Naive multiplication would give [-2, 4].
        let naive = a * a;
        assert_eq!(naive.inf(), -2.0);
    }

    #[test]
    fn odd_and_negative_powers() {
        let a = Interval::new(-2.0, 3.0);
        assert_eq!(a.powi(3), Interval::new(-8.0, 27.0));
        let inv = Interval::point(4.0).powi(-1);
        assert_eq!(inv, Interval::point(0.25));
        assert_eq!(a.powi(0), Interval::ONE);
    }

    #[test]
    fn certain_comparison() {
        let a = Interval::new(-2.0, -1.0);
        let b = Interval::new(0.0, 1.0);
        assert!(a.strictly_less(b));
        assert!(!b.strictly_less(a));
        // Overlap is never "certainly less".
        let c = Interval::new(-1.5, 0.5);
        assert!(!a.strictly_less(c));
        assert!(!c.strictly_less(b));
    }

    #[test]
    fn max_and_hull() {
        let a = Interval::new(-1.0, 2.0);
        let b = Interval::new(0.0, 1.0);
        assert_eq!(a.max(b), Interval::new(0.0, 2.0));
        assert_eq!(a.hull(Interval::point(5.0)), Interval::new(-1.0, 5.0));
    }

    #[test]
    fn overflow_keeps_finite_lower_bound() {
        let s = Interval::point(f64::MAX) + Interval::point(f64::MAX);
        assert_eq!(s.inf(), f64::MAX);
        assert_eq!(s.sup(), f64::INFINITY);
    }

    #[test]
    fn accumulated_sum_encloses_exact_value() {
        // Sum of ten copies of 0.1 encloses the exact real sum 10 * fl(0.1).
        let tenth = Interval::point(0.1);
        let mut acc = Interval::ZERO;
        for _ in 0..10 {
            acc = acc + tenth;
        }
        let exact = Interval::point(0.1) * Interval::point(10.0);
        assert!(acc.inf() <= exact.sup() && exact.inf() <= acc.sup());
    }

    #[test]
    fn display() {
        let s = alloc::format!("{}", Interval::new(-1.0, 2.0));
        assert_eq!(s, "[-1e0, 2e0]");
    }
}
