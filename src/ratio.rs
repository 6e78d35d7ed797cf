use std::cmp::Ordering;
use std::fmt;

use num_traits::ToPrimitive;

use crate::error::{RatioError, RatioErrorKind};

/// 2^63 as a float: the first magnitude that no longer fits an `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

// ============================================================================
// Ratio Type
// ============================================================================

/// Immutable exact rational number.
///
/// Always stored in lowest terms: the denominator is positive, the sign lives
/// on the numerator, and zero is represented as `0/1`. Because the
/// representation is canonical, structural equality is numeric equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: i64,
    denominator: i64,
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ZERO
    }
}

// ============================================================================
// Utility Functions
// ============================================================================

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}

fn is_integral(x: f64) -> bool {
    // Infinities count as integral here; they are rejected by the range check.
    x.trunc() == x
}

fn f64_to_i64(x: f64) -> Option<i64> {
    if (-TWO_POW_63..TWO_POW_63).contains(&x) {
        Some(x as i64)
    } else {
        None
    }
}

// ============================================================================
// Construction & Normalization
// ============================================================================

impl Ratio {
    pub const ZERO: Ratio = Ratio {
        numerator: 0,
        denominator: 1,
    };

    pub const ONE: Ratio = Ratio {
        numerator: 1,
        denominator: 1,
    };

    /// Create a ratio in reduced form.
    ///
    /// ```
    /// use ratio::Ratio;
    ///
    /// let r = Ratio::new(3, -6).unwrap();
    /// assert_eq!((r.numerator(), r.denominator()), (-1, 2));
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> Result<Ratio, RatioError> {
        if denominator == 0 {
            return Err(RatioError::denominator_zero());
        }
        Self::reduce(i128::from(numerator), i128::from(denominator))
    }

    /// Create a ratio from floating point operands that must hold integers.
    ///
    /// NaN and fractional operands are rejected (both operands are reported
    /// together when both are bad) before the zero denominator check.
    /// Integral operands outside the `i64` range fail with
    /// [`RatioErrorKind::Overflow`].
    pub fn from_f64_parts(numerator: f64, denominator: f64) -> Result<Ratio, RatioError> {
        let kind = match (numerator.is_nan(), denominator.is_nan()) {
            (true, true) => Some(RatioErrorKind::ArgumentsNaN),
            (true, false) => Some(RatioErrorKind::NumeratorNaN),
            (false, true) => Some(RatioErrorKind::DenominatorNaN),
            (false, false) => match (is_integral(numerator), is_integral(denominator)) {
                (false, false) => Some(RatioErrorKind::ArgumentsNotInteger),
                (false, true) => Some(RatioErrorKind::NumeratorNotInteger),
                (true, false) => Some(RatioErrorKind::DenominatorNotInteger),
                (true, true) if denominator == 0.0 => Some(RatioErrorKind::DenominatorZero),
                (true, true) => None,
            },
        };
        if let Some(kind) = kind {
            return Err(kind.into());
        }

        let numerator = f64_to_i64(numerator).ok_or_else(RatioError::overflow)?;
        let denominator = f64_to_i64(denominator).ok_or_else(RatioError::overflow)?;
        Self::reduce(i128::from(numerator), i128::from(denominator))
    }

    /// Normalize a fraction whose operands are already known to be valid
    /// integers with a nonzero denominator.
    fn reduce(numerator: i128, denominator: i128) -> Result<Ratio, RatioError> {
        if numerator == 0 {
            return Ok(Ratio::ZERO);
        }

        let positive = (numerator > 0) == (denominator > 0);
        let g = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        let num = numerator.unsigned_abs() / g;
        let den = denominator.unsigned_abs() / g;

        let num = i128::try_from(num).map_err(|_| RatioError::overflow())?;
        let num = if positive { num } else { -num };

        Ok(Ratio {
            numerator: i64::try_from(num).map_err(|_| RatioError::overflow())?,
            denominator: i64::try_from(den).map_err(|_| RatioError::overflow())?,
        })
    }

    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Check if ratio is zero
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Check if ratio has no fractional part
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Ratio {
            numerator: n,
            denominator: 1,
        }
    }
}

impl TryFrom<(i64, i64)> for Ratio {
    type Error = RatioError;

    fn try_from((numerator, denominator): (i64, i64)) -> Result<Self, Self::Error> {
        Ratio::new(numerator, denominator)
    }
}

// ============================================================================
// Arithmetic Operations
// ============================================================================

// Intermediates are widened to i128: with positive denominators below 2^63,
// every product is below 2^126 and every sum of two products below 2^127.
impl Ratio {
    /// Addition: a/b + c/d = (ad + cb) / bd
    pub fn add(&self, other: &Ratio) -> Result<Ratio, RatioError> {
        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();

        if d1 == d2 {
            Self::reduce(n1 + n2, d1)
        } else {
            Self::reduce(n1 * d2 + n2 * d1, d1 * d2)
        }
    }

    /// Subtraction: a/b - c/d = (ad - cb) / bd
    pub fn sub(&self, other: &Ratio) -> Result<Ratio, RatioError> {
        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();

        if d1 == d2 {
            Self::reduce(n1 - n2, d1)
        } else {
            Self::reduce(n1 * d2 - n2 * d1, d1 * d2)
        }
    }

    /// Negation. Fails only for a numerator of `i64::MIN`.
    pub fn neg(&self) -> Result<Ratio, RatioError> {
        let (n, d) = self.wide();
        Self::reduce(-n, d)
    }

    /// Multiplication: a/b * c/d = ac / bd
    pub fn mul(&self, other: &Ratio) -> Result<Ratio, RatioError> {
        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();
        Self::reduce(n1 * n2, d1 * d2)
    }

    /// Division: (a/b) / (c/d) = ad / bc
    pub fn div(&self, other: &Ratio) -> Result<Ratio, RatioError> {
        if other.is_zero() {
            return Err(RatioError::division_by_zero());
        }

        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();
        Self::reduce(n1 * d2, d1 * n2)
    }

    fn wide(&self) -> (i128, i128) {
        (i128::from(self.numerator), i128::from(self.denominator))
    }
}

// ============================================================================
// Conversion & Decomposition
// ============================================================================

impl Ratio {
    /// Convert to float (may lose precision)
    pub fn to_float(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    /// Integer part, truncated toward zero.
    pub fn to_integer(&self) -> i64 {
        self.numerator / self.denominator
    }

    /// Integral part as a ratio.
    pub fn trunc(&self) -> Ratio {
        Ratio::from(self.to_integer())
    }

    /// Fractional part, carrying the sign of `self`.
    ///
    /// `r.trunc().add(&r.fract())` is always `r`.
    pub fn fract(&self) -> Ratio {
        // gcd(n % d, d) == gcd(n, d) == 1, so the remainder is already reduced.
        let rem = self.numerator % self.denominator;
        if rem == 0 {
            Ratio::ZERO
        } else {
            Ratio {
                numerator: rem,
                denominator: self.denominator,
            }
        }
    }
}

impl ToPrimitive for Ratio {
    fn to_i64(&self) -> Option<i64> {
        Some(self.to_integer())
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_integer().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float())
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let Ratio {
            numerator,
            denominator,
        } = self;

        if *numerator == 0 {
            write!(f, "Ratio (0)")
        } else if *denominator == 1 {
            write!(f, "Ratio ({numerator})")
        } else {
            write!(f, "Ratio ({numerator}/{denominator})")
        }
    }
}

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Ratio {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.denominator == other.denominator {
            return self.numerator.cmp(&other.numerator);
        }

        // a/b < c/d iff ad < cb (denominators are positive)
        let (n1, d1) = self.wide();
        let (n2, d2) = other.wide();
        (n1 * d2).cmp(&(n2 * d1))
    }
}

impl PartialOrd for Ratio {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq<f64> for Ratio {
    fn eq(&self, other: &f64) -> bool {
        self.to_float() == *other
    }
}

impl PartialOrd<f64> for Ratio {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.to_float().partial_cmp(other)
    }
}
