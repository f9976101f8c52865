//! Exact rational arithmetic with validation and canonicalization.
//!
//! `Fraction` is a plain value: every operation consumes copies and returns a
//! fresh, already-simplified value or a [`MathError`]. After construction the
//! denominator is always positive and the numerator carries the sign;
//! `is_negative` mirrors the sign of the *inputs* for display purposes only.

use std::fmt;
use serde::{Deserialize, Serialize};

use crate::question_engine::arithmetic::{
    self, gcd, lcm, MathError, MathResult, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: i64,
    pub denominator: i64,
    pub is_negative: bool,
}

/// A fraction split into its whole and proper parts, sign on the whole part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedNumber {
    pub whole: i64,
    pub numerator: i64,
    pub denominator: i64,
    pub is_negative: bool,
}

fn validate_range(n: i64, what: &str) -> MathResult<()> {
    if !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) {
        return Err(MathError::InvalidInput(format!(
            "{} {} is outside the safe integer range",
            what, n
        )));
    }
    Ok(())
}

impl Fraction {
    /// Build a fraction, normalizing the denominator positive.
    pub fn new(numerator: i64, denominator: i64) -> MathResult<Fraction> {
        validate_range(numerator, "numerator")?;
        validate_range(denominator, "denominator")?;
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }

        let is_negative = (numerator < 0) != (denominator < 0);
        let (numerator, denominator) = if denominator < 0 {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        Ok(Fraction {
            numerator,
            denominator,
            is_negative,
        })
    }

    /// A fraction with the same magnitude and opposite sign.
    fn negated(self) -> Fraction {
        Fraction {
            numerator: -self.numerator,
            denominator: self.denominator,
            is_negative: self.numerator > 0,
        }
    }

    /// The struct fields are public, so a hand-built value may carry a zero
    /// denominator; operations reject it here.
    fn check_well_formed(self, which: &str) -> MathResult<()> {
        if self.denominator == 0 {
            return Err(MathError::InvalidInput(format!(
                "{} fraction has a zero denominator",
                which
            )));
        }
        Ok(())
    }

    /// Reduce to lowest terms. Zero canonicalizes to 0/1.
    pub fn simplify(self) -> MathResult<Fraction> {
        self.check_well_formed("the")?;

        if self.numerator == 0 {
            return Ok(Fraction {
                numerator: 0,
                denominator: 1,
                is_negative: false,
            });
        }

        let divisor = gcd(self.numerator, self.denominator);
        let is_negative = (self.numerator < 0) != (self.denominator < 0);
        let mut numerator = (self.numerator / divisor).abs();
        let denominator = (self.denominator / divisor).abs();
        if is_negative {
            numerator = -numerator;
        }

        Ok(Fraction {
            numerator,
            denominator,
            is_negative,
        })
    }

    /// Add via the least common denominator; the result is simplified.
    pub fn add(self, other: Fraction) -> MathResult<Fraction> {
        self.check_well_formed("the first")?;
        other.check_well_formed("the second")?;

        // A zero operand cannot change the value.
        if self.numerator == 0 {
            return other.simplify();
        }
        if other.numerator == 0 {
            return self.simplify();
        }

        let common = lcm(self.denominator, other.denominator)?;
        let scaled1 = arithmetic::multiply(&[self.numerator, common / self.denominator])?;
        let scaled2 = arithmetic::multiply(&[other.numerator, common / other.denominator])?;
        let sum = arithmetic::add(&[scaled1, scaled2])?;

        Fraction::new(sum, common)?.simplify()
    }

    /// Subtract `other` by adding its negation.
    pub fn sub(self, other: Fraction) -> MathResult<Fraction> {
        self.check_well_formed("the first")?;
        other.check_well_formed("the second")?;
        self.add(other.negated())
    }

    /// Multiply numerators and denominators directly; simplified.
    pub fn mul(self, other: Fraction) -> MathResult<Fraction> {
        self.check_well_formed("the first")?;
        other.check_well_formed("the second")?;

        let numerator = arithmetic::multiply(&[self.numerator, other.numerator])?;
        let denominator = arithmetic::multiply(&[self.denominator, other.denominator])?;

        Fraction::new(numerator, denominator)?.simplify()
    }

    /// Divide by multiplying with the reciprocal of `other`.
    pub fn div(self, other: Fraction) -> MathResult<Fraction> {
        self.check_well_formed("the first")?;
        other.check_well_formed("the second")?;

        if other.numerator == 0 {
            return Err(MathError::DivisionByZero);
        }

        let reciprocal = Fraction::new(other.denominator, other.numerator)?;
        self.mul(reciprocal)
    }

    /// Split into whole and proper parts; the sign lands on the whole part.
    pub fn to_mixed(self) -> MathResult<MixedNumber> {
        self.check_well_formed("the")?;

        let num = self.numerator.abs();
        let den = self.denominator.abs();
        let mut whole = num / den;
        let remainder = num % den;
        let is_negative = (self.numerator < 0) != (self.denominator < 0);
        if is_negative {
            whole = -whole;
        }

        Ok(MixedNumber {
            whole,
            numerator: remainder,
            denominator: den,
            is_negative,
        })
    }

    /// Rebuild an improper fraction from a mixed number. The whole part's
    /// sign governs the result.
    pub fn from_mixed(whole: i64, numerator: i64, denominator: i64) -> MathResult<Fraction> {
        validate_range(whole, "whole part")?;
        validate_range(numerator, "numerator")?;
        validate_range(denominator, "denominator")?;
        if denominator == 0 {
            return Err(MathError::DivisionByZero);
        }

        let magnitude = arithmetic::add(&[
            arithmetic::multiply(&[whole.abs(), denominator.abs()])?,
            numerator.abs(),
        ])?;
        let signed = if whole < 0 { -magnitude } else { magnitude };

        Fraction::new(signed, denominator)
    }
}

/// Format for display: `"0"`, a bare integer when the denominator is 1, a
/// mixed number (`"1 3/4"`) for improper fractions, plain `"N/D"` otherwise.
/// A malformed zero-denominator value prints as `"Invalid fraction"`.
impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 0 {
            return write!(f, "Invalid fraction");
        }
        if self.numerator == 0 {
            return write!(f, "0");
        }
        if self.denominator == 1 {
            return write!(f, "{}", self.numerator);
        }
        if self.numerator.abs() > self.denominator.abs() {
            let whole = self.numerator / self.denominator;
            let remainder = (self.numerator % self.denominator).abs();
            if remainder == 0 {
                return write!(f, "{}", whole);
            }
            return write!(f, "{} {}/{}", whole, remainder, self.denominator.abs());
        }
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Least common denominator across any number of fractions; 1 for none.
pub fn common_denominator(fractions: &[Fraction]) -> MathResult<i64> {
    let mut common = 1i64;
    for fraction in fractions {
        fraction.check_well_formed("a")?;
        common = lcm(common, fraction.denominator)?;
    }
    Ok(common)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frac(n: i64, d: i64) -> Fraction {
        Fraction::new(n, d).unwrap()
    }

    #[test]
    fn new_normalizes_the_denominator_positive() {
        let f = frac(3, -4);
        assert_eq!((f.numerator, f.denominator), (-3, 4));
        assert!(f.is_negative);

        let f = frac(-3, -4);
        assert_eq!((f.numerator, f.denominator), (3, 4));
        assert!(!f.is_negative);
    }

    #[test]
    fn new_rejects_a_zero_denominator() {
        for n in [-3, 0, 3] {
            assert_eq!(Fraction::new(n, 0), Err(MathError::DivisionByZero));
        }
    }

    #[test]
    fn simplify_reduces_to_lowest_terms() {
        assert_eq!(frac(6, 8).simplify().unwrap(), frac(3, 4));
        assert_eq!(frac(-6, 8).simplify().unwrap(), frac(-3, 4));
        assert_eq!(frac(12, 4).simplify().unwrap(), frac(3, 1));
    }

    #[test]
    fn simplify_canonicalizes_zero() {
        let zero = frac(0, 17).simplify().unwrap();
        assert_eq!((zero.numerator, zero.denominator), (0, 1));
        assert!(!zero.is_negative);
    }

    #[test]
    fn simplify_is_idempotent() {
        for f in [frac(6, 8), frac(-9, 12), frac(0, 5), frac(7, 3)] {
            let once = f.simplify().unwrap();
            assert_eq!(once.simplify().unwrap(), once);
        }
    }

    #[test]
    fn add_uses_the_least_common_denominator() {
        // 3/4 + 1/4 = 1
        let sum = frac(3, 4).add(frac(1, 4)).unwrap();
        assert_eq!((sum.numerator, sum.denominator), (1, 1));
        assert_eq!(sum.to_string(), "1");

        // 1/2 + 1/3 = 5/6
        assert_eq!(frac(1, 2).add(frac(1, 3)).unwrap(), frac(5, 6));
    }

    #[test]
    fn add_is_commutative() {
        let pairs = [
            (frac(1, 2), frac(1, 3)),
            (frac(-3, 4), frac(5, 6)),
            (frac(2, 7), frac(2, 7)),
        ];
        for (a, b) in pairs {
            assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
        }
    }

    #[test]
    fn sub_of_self_is_zero() {
        for f in [frac(1, 2), frac(-3, 4), frac(7, 5)] {
            let diff = f.sub(f).unwrap();
            assert_eq!((diff.numerator, diff.denominator), (0, 1));
        }
    }

    #[test]
    fn mul_simplifies_the_product() {
        // 2/3 × 3/4 = 1/2
        let product = frac(2, 3).mul(frac(3, 4)).unwrap();
        assert_eq!(product, frac(1, 2));
        assert_eq!(product.to_string(), "1/2");
    }

    #[test]
    fn div_then_mul_round_trips() {
        let pairs = [
            (frac(1, 2), frac(1, 3)),
            (frac(-3, 4), frac(5, 6)),
            (frac(7, 5), frac(7, 5)),
        ];
        for (f1, f2) in pairs {
            let quotient = f1.div(f2).unwrap();
            assert_eq!(quotient.mul(f2).unwrap(), f1.simplify().unwrap());
        }
    }

    #[test]
    fn div_by_a_zero_fraction_fails() {
        assert_eq!(
            frac(1, 2).div(frac(0, 5)),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn operations_reject_hand_built_zero_denominators() {
        let bad = Fraction {
            numerator: 1,
            denominator: 0,
            is_negative: false,
        };
        assert!(matches!(bad.simplify(), Err(MathError::InvalidInput(_))));
        assert!(matches!(frac(1, 2).add(bad), Err(MathError::InvalidInput(_))));
        assert!(matches!(bad.sub(frac(1, 2)), Err(MathError::InvalidInput(_))));
    }

    #[test]
    fn to_mixed_splits_whole_and_remainder() {
        let m = frac(7, 2).to_mixed().unwrap();
        assert_eq!((m.whole, m.numerator, m.denominator), (3, 1, 2));
        assert!(!m.is_negative);

        let m = frac(-7, 2).to_mixed().unwrap();
        assert_eq!((m.whole, m.numerator, m.denominator), (-3, 1, 2));
        assert!(m.is_negative);
    }

    #[test]
    fn from_mixed_rebuilds_the_improper_fraction() {
        assert_eq!(Fraction::from_mixed(3, 1, 2).unwrap(), frac(7, 2));
        assert_eq!(Fraction::from_mixed(-3, 1, 2).unwrap(), frac(-7, 2));
        assert_eq!(
            Fraction::from_mixed(1, 0, 0),
            Err(MathError::DivisionByZero)
        );
    }

    #[test]
    fn display_formats_by_shape() {
        assert_eq!(frac(0, 9).to_string(), "0");
        assert_eq!(frac(5, 1).to_string(), "5");
        assert_eq!(frac(3, 4).to_string(), "3/4");
        assert_eq!(frac(7, 4).to_string(), "1 3/4");
        assert_eq!(frac(8, 4).to_string(), "2");
        assert_eq!(frac(-7, 2).to_string(), "-3 1/2");
        let bad = Fraction {
            numerator: 1,
            denominator: 0,
            is_negative: false,
        };
        assert_eq!(bad.to_string(), "Invalid fraction");
    }

    #[test]
    fn common_denominator_folds_lcm() {
        let fractions = [frac(1, 2), frac(1, 3), frac(1, 4)];
        assert_eq!(common_denominator(&fractions), Ok(12));
        assert_eq!(common_denominator(&[]), Ok(1));
    }
}
