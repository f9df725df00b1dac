use core::fmt;

use num_traits::Float;
use tracing::info;

use crate::interval::Interval;

use super::bounds::Bounds;

/// Choice of the radius at which `p` is checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Witness {
    /// The midpoint `(r1 + r2) / 2` of the root interval.
    #[default]
    Midpoint,
    /// A band `[lo, hi]` strictly inside `(r1, r2)`.
    ///
    /// Certifies existence within `lo` and uniqueness within `hi`.
    Band { lo: f64, hi: f64 },
}

/// Why a proof attempt did not certify.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Failure {
    /// `Z0 ≥ 1`: `A Df(x̄)` is too far from the identity.
    NotContracting,
    /// `(1 − Z0)² − 4 Z2 Y0 < 0`: `p` has no real roots.
    NegativeDiscriminant,
    /// `r1 ≥ r2`: no radius strictly between the roots.
    NoInterior,
    /// The requested band does not lie strictly inside `(r1, r2)`.
    WitnessOutside,
    /// The enclosure of `p(r0)` is not strictly negative.
    NotNegative,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Failure::NotContracting => write!(f, "Z0 is not below 1"),
            Failure::NegativeDiscriminant => write!(f, "radii polynomial has no real roots"),
            Failure::NoInterior => write!(f, "radii polynomial has no negative interior"),
            Failure::WitnessOutside => write!(f, "witness band is not inside the root interval"),
            Failure::NotNegative => write!(f, "p(r0) is not strictly negative"),
        }
    }
}

/// Verdict of the certifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProofStatus {
    /// A unique zero exists in the ball of radius `r0` around `x̄`.
    Certified,
    NotCertified(Failure),
}

/// Outcome of [`certify`], with every witness needed to recheck it by hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProofResult {
    pub status: ProofStatus,
    /// Plain upper bounds `(Y0, Z0, Z2)` the roots were computed from.
    pub bounds: Bounds<f64>,
    /// Roots `r1 ≤ r2` of `p`, when real. `r2` is `+∞` when `Z2 = 0`.
    pub roots: Option<(f64, f64)>,
    /// Witness radius: a point for [`Witness::Midpoint`], the band otherwise.
    pub r0: Option<Interval>,
    /// Enclosure of `p(r0)`.
    pub p_r0: Option<Interval>,
}

impl ProofResult {
    pub fn is_certified(&self) -> bool {
        self.status == ProofStatus::Certified
    }

    /// Existence radius as a plain float: the midpoint witness itself, or the
    /// lower edge of a band. `None` when no witness was reached.
    ///
    /// ```
    /// use radii::proof::certify_bounds;
    ///
    /// let result = certify_bounds(1e-3, 0.5, 0.0);
    /// assert_eq!(result.radius(), Some(result.r0.unwrap().inf()));
    /// ```
    pub fn radius(&self) -> Option<f64> {
        self.r0.map(|r0| r0.inf())
    }

    fn failed(bounds: Bounds<f64>, failure: Failure) -> Self {
        Self {
            status: ProofStatus::NotCertified(failure),
            bounds,
            roots: None,
            r0: None,
            p_r0: None,
        }
    }
}

impl fmt::Display for ProofResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            ProofStatus::Certified => match self.r0 {
                Some(r0) if r0.is_point() => writeln!(
                    f,
                    "certified: a zero exists within r0 = {:e} of x̄ and is unique there",
                    r0.sup()
                )?,
                Some(r0) => writeln!(
                    f,
                    "certified: a zero exists within {:e} of x̄ and is unique within {:e}",
                    r0.inf(),
                    r0.sup()
                )?,
                None => writeln!(f, "certified")?,
            },
            ProofStatus::NotCertified(failure) => writeln!(f, "not certified: {}", failure)?,
        }
        write!(
            f,
            "  Y0 = {:e}, Z0 = {:e}, Z2 = {:e}",
            self.bounds.y0, self.bounds.z0, self.bounds.z2
        )?;
        if let Some((r1, r2)) = self.roots {
            write!(f, "\n  roots r1 = {:e}, r2 = {:e}", r1, r2)?;
        }
        if let Some(r0) = self.r0 {
            write!(f, "\n  r0 = {}", r0)?;
        }
        if let Some(p_r0) = self.p_r0 {
            write!(f, "\n  p(r0) ⊆ {}", p_r0)?;
        }
        Ok(())
    }
}

/// Radii polynomial `p(r) = Z2 r² − (1 − Z0) r + Y0` in interval arithmetic.
fn radii_polynomial(bounds: &Bounds<Interval>, r: Interval) -> Interval {
    bounds.z2 * r.powi(2) - (Interval::ONE - bounds.z0) * r + bounds.y0
}

/// Roots of `p` from plain coefficients, `r1 ≤ r2`.
///
/// With `b = 1 − Z0 > 0` and `D = b² − 4 Z2 Y0`, uses `q = (b + √D) / 2`,
/// `r2 = q / Z2`, `r1 = Y0 / q`, which avoids the cancellation of the
/// textbook formula when `Z2 Y0 ≪ b²`. Returns `None` when `D < 0`.
fn roots(upper: &Bounds<f64>) -> Option<(f64, f64)> {
    let b = 1.0 - upper.z0;
    let disc = b * b - 4.0 * upper.z2 * upper.y0;
    if !(disc >= 0.0) {
        return None;
    }
    let q = 0.5 * (b + Float::sqrt(disc));
    let r1 = upper.y0 / q;
    let r2 = if upper.z2 > 0.0 { q / upper.z2 } else { f64::INFINITY };
    Some((r1, r2))
}

/// Run the radii polynomial test on rigorous bounds.
///
/// Roots are located with the plain upper bounds; the final check evaluates
/// `p(r0)` with the interval-valued bounds and requires the whole enclosure
/// to lie strictly below zero. For a band, `p` is evaluated at both ends:
/// `p` is convex because `Z2 ≥ 0`, so it is negative on the whole band
/// exactly when it is negative at both ends, and `p_r0` is the hull of the
/// two enclosures.
///
/// Failure to certify is a normal outcome reported through
/// [`ProofStatus::NotCertified`].
///
/// # Example
///
/// ```
/// use radii::proof::{certify, Bounds, Witness};
/// use radii::Interval;
///
/// let bounds = Bounds {
///     y0: Interval::point(1e-6),
///     z0: Interval::point(0.1),
///     z2: Interval::point(2.0),
/// };
/// let result = certify(&bounds, Witness::Midpoint);
/// assert!(result.is_certified());
/// ```
pub fn certify(bounds: &Bounds<Interval>, witness: Witness) -> ProofResult {
    let upper = bounds.upper();
    let result = certify_inner(bounds, upper, witness);
    match result.status {
        ProofStatus::Certified => info!(
            y0 = upper.y0,
            z0 = upper.z0,
            z2 = upper.z2,
            r0 = ?result.r0,
            "radii polynomial certified"
        ),
        ProofStatus::NotCertified(failure) => info!(
            y0 = upper.y0,
            z0 = upper.z0,
            z2 = upper.z2,
            ?failure,
            "radii polynomial not certified"
        ),
    }
    result
}

fn certify_inner(bounds: &Bounds<Interval>, upper: Bounds<f64>, witness: Witness) -> ProofResult {
    if !(upper.z0 < 1.0) {
        return ProofResult::failed(upper, Failure::NotContracting);
    }
    let Some((r1, r2)) = roots(&upper) else {
        return ProofResult::failed(upper, Failure::NegativeDiscriminant);
    };
    let with_roots = |failure| ProofResult {
        roots: Some((r1, r2)),
        ..ProofResult::failed(upper, failure)
    };
    if !(r1 < r2) {
        return with_roots(Failure::NoInterior);
    }

    let (r0, p_r0) = match witness {
        Witness::Midpoint => {
            let mid = if r2.is_finite() { r1 + 0.5 * (r2 - r1) } else { 2.0 * r1 };
            let r0 = Interval::point(mid);
            (r0, radii_polynomial(bounds, r0))
        }
        Witness::Band { lo, hi } => {
            if !(r1 < lo && lo <= hi && hi < r2) {
                return with_roots(Failure::WitnessOutside);
            }
            let at_lo = radii_polynomial(bounds, Interval::point(lo));
            let at_hi = radii_polynomial(bounds, Interval::point(hi));
            (Interval::new(lo, hi), at_lo.hull(at_hi))
        }
    };

    let status = if p_r0.strictly_less(Interval::ZERO) {
        ProofStatus::Certified
    } else {
        ProofStatus::NotCertified(Failure::NotNegative)
    };
    ProofResult {
        status,
        bounds: upper,
        roots: Some((r1, r2)),
        r0: Some(r0),
        p_r0: Some(p_r0),
    }
}

/// [`certify`] at the midpoint witness, from plain bounds taken as exact.
///
/// # Example
///
/// ```
/// use radii::proof::certify_bounds;
///
/// let result = certify_bounds(1.8625740988093325e-5, 0.0, 0.23570174301438956);
/// assert!(result.is_certified());
/// let (r1, r2) = result.roots.unwrap();
/// assert!((r1 - 1.8625822758042162e-5).abs() < 1e-14);
/// assert!((r2 - 4.2426313741772415).abs() < 1e-12);
/// ```
pub fn certify_bounds(y0: f64, z0: f64, z2: f64) -> ProofResult {
    certify(&Bounds { y0, z0, z2 }.lift(), Witness::Midpoint)
}
