//! Checked integer arithmetic over the safe range.
//!
//! Every operation returns a [`MathResult`] instead of panicking or silently
//! wrapping. The bound is ±(2^53 − 1): the largest magnitude the browser
//! client's default numeric type represents exactly, so a value that survives
//! these checks round-trips through the UI without losing precision.

use thiserror::Error;

/// Largest magnitude guaranteed exactly representable on the client side.
pub const MAX_SAFE_INTEGER: i64 = (1 << 53) - 1;
pub const MIN_SAFE_INTEGER: i64 = -MAX_SAFE_INTEGER;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MathError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("division by zero is not allowed")]
    DivisionByZero,
    #[error("overflow: result would be too large")]
    Overflow,
    #[error("underflow: result would be too small")]
    Underflow,
}

pub type MathResult<T> = Result<T, MathError>;

/// Reject operands the client could not represent exactly.
fn validate(nums: &[i64]) -> MathResult<()> {
    for &n in nums {
        if !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&n) {
            return Err(MathError::InvalidInput(format!(
                "{} is outside the safe integer range",
                n
            )));
        }
    }
    Ok(())
}

/// Sum all operands. Empty input sums to 0.
///
/// The bound is checked before each addition, so a crossing is reported
/// rather than produced.
pub fn add(nums: &[i64]) -> MathResult<i64> {
    validate(nums)?;

    let mut sum: i64 = 0;
    for &num in nums {
        if sum > 0 && num > MAX_SAFE_INTEGER - sum {
            return Err(MathError::Overflow);
        }
        if sum < 0 && num < MIN_SAFE_INTEGER - sum {
            return Err(MathError::Underflow);
        }
        sum += num;
    }
    Ok(sum)
}

/// Subtract the remaining operands from the first, left to right.
///
/// A single operand comes back unchanged — it is NOT negated. Documented
/// behavior, kept as-is; see the matching test.
pub fn subtract(nums: &[i64]) -> MathResult<i64> {
    validate(nums)?;

    let (&first, rest) = nums.split_first().ok_or_else(|| {
        MathError::InvalidInput("subtraction requires at least one number".into())
    })?;

    let mut result = first;
    for &num in rest {
        if num > 0 && result < MIN_SAFE_INTEGER + num {
            return Err(MathError::Underflow);
        }
        if num < 0 && result > MAX_SAFE_INTEGER + num {
            return Err(MathError::Overflow);
        }
        result -= num;
    }
    Ok(result)
}

/// Multiply all operands. Empty input is the multiplicative identity.
///
/// Any zero operand short-circuits to 0 with no further bound checks.
pub fn multiply(nums: &[i64]) -> MathResult<i64> {
    validate(nums)?;

    if nums.contains(&0) {
        return Ok(0);
    }

    let mut product: i64 = 1;
    for &num in nums {
        if num == 1 {
            continue;
        }
        if product.abs() > MAX_SAFE_INTEGER / num.abs() {
            return Err(MathError::Overflow);
        }
        product *= num;
    }
    Ok(product)
}

/// Divide the first operand by each of the rest, left to right.
///
/// Quotients are not generally integral, so the result is `f64`. A single
/// operand comes back as itself.
pub fn divide(nums: &[i64]) -> MathResult<f64> {
    validate(nums)?;

    let (&first, rest) = nums.split_first().ok_or_else(|| {
        MathError::InvalidInput("division requires at least one number".into())
    })?;

    let mut result = first as f64;
    for &num in rest {
        if num == 0 {
            return Err(MathError::DivisionByZero);
        }
        result /= num as f64;
    }
    Ok(result)
}

/// Greatest common divisor of the absolute values (Euclid).
pub fn gcd(a: i64, b: i64) -> i64 {
    let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a as i64
}

/// Least common multiple of the absolute values; 0 if either operand is 0.
///
/// |a·b| can exceed the safe range, so the multiply is checked.
pub fn lcm(a: i64, b: i64) -> MathResult<i64> {
    if a == 0 || b == 0 {
        return Ok(0);
    }
    let g = gcd(a, b);
    let result = (a / g)
        .checked_mul(b)
        .map(i64::abs)
        .ok_or(MathError::Overflow)?;
    if result > MAX_SAFE_INTEGER {
        return Err(MathError::Overflow);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_sums_operands() {
        assert_eq!(add(&[2, 3, 4]), Ok(9));
        assert_eq!(add(&[]), Ok(0));
        assert_eq!(add(&[-5, 5]), Ok(0));
    }

    #[test]
    fn add_detects_overflow_at_the_bound() {
        assert_eq!(add(&[MAX_SAFE_INTEGER, 1]), Err(MathError::Overflow));
        assert_eq!(add(&[MIN_SAFE_INTEGER, -1]), Err(MathError::Underflow));
        // Exactly at the bound is fine.
        assert_eq!(add(&[MAX_SAFE_INTEGER, 0]), Ok(MAX_SAFE_INTEGER));
        assert_eq!(add(&[MAX_SAFE_INTEGER - 1, 1]), Ok(MAX_SAFE_INTEGER));
    }

    #[test]
    fn subtract_runs_left_to_right() {
        assert_eq!(subtract(&[10, 3, 2]), Ok(5));
        assert_eq!(subtract(&[5, 10]), Ok(-5));
    }

    #[test]
    fn subtract_requires_an_operand() {
        assert!(matches!(subtract(&[]), Err(MathError::InvalidInput(_))));
    }

    #[test]
    fn subtract_with_single_value_returns_it_unchanged() {
        // Documented, possibly unintended: a lone operand is returned as-is,
        // not negated.
        assert_eq!(subtract(&[7]), Ok(7));
        assert_eq!(subtract(&[-7]), Ok(-7));
    }

    #[test]
    fn subtract_detects_bound_crossings() {
        assert_eq!(subtract(&[MIN_SAFE_INTEGER, 1]), Err(MathError::Underflow));
        assert_eq!(subtract(&[MAX_SAFE_INTEGER, -1]), Err(MathError::Overflow));
    }

    #[test]
    fn multiply_products_and_identity() {
        assert_eq!(multiply(&[3, 4]), Ok(12));
        assert_eq!(multiply(&[]), Ok(1));
        assert_eq!(multiply(&[-3, 4]), Ok(-12));
    }

    #[test]
    fn multiply_zero_short_circuits() {
        // No overflow check fires once a zero is present.
        assert_eq!(multiply(&[0, 999_999_999_999]), Ok(0));
        assert_eq!(multiply(&[MAX_SAFE_INTEGER, 0, MAX_SAFE_INTEGER]), Ok(0));
    }

    #[test]
    fn multiply_detects_overflow() {
        assert_eq!(
            multiply(&[MAX_SAFE_INTEGER, 2]),
            Err(MathError::Overflow)
        );
    }

    #[test]
    fn divide_runs_left_to_right() {
        assert_eq!(divide(&[100, 5, 2]), Ok(10.0));
        assert_eq!(divide(&[7, 2]), Ok(3.5));
        assert_eq!(divide(&[7]), Ok(7.0));
    }

    #[test]
    fn divide_rejects_zero_divisor() {
        assert_eq!(divide(&[10, 0]), Err(MathError::DivisionByZero));
        assert_eq!(divide(&[10, 5, 0]), Err(MathError::DivisionByZero));
    }

    #[test]
    fn divide_requires_an_operand() {
        assert!(matches!(divide(&[]), Err(MathError::InvalidInput(_))));
    }

    #[test]
    fn multiply_then_divide_round_trips() {
        for (a, b) in [(6i64, 7i64), (-12, 5), (100, -4), (0, 3)] {
            let product = multiply(&[a, b]).unwrap();
            if b != 0 {
                assert_eq!(divide(&[product, b]).unwrap(), a as f64);
            }
        }
    }

    #[test]
    fn out_of_range_operands_are_invalid() {
        assert!(matches!(
            add(&[MAX_SAFE_INTEGER + 1]),
            Err(MathError::InvalidInput(_))
        ));
    }

    #[test]
    fn gcd_and_lcm() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(-12, 18), 6);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(lcm(4, 6), Ok(12));
        assert_eq!(lcm(0, 9), Ok(0));
        assert_eq!(lcm(9, 0), Ok(0));
        assert_eq!(lcm(-4, 6), Ok(12));
    }

    #[test]
    fn lcm_detects_overflow() {
        assert_eq!(
            lcm(MAX_SAFE_INTEGER, MAX_SAFE_INTEGER - 2),
            Err(MathError::Overflow)
        );
    }
}
