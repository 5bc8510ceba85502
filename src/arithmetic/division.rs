//!
//! Long division
//!

use crate::*;
use crate::bigdigit::{BigDigit, DigitVec, Radix};
use super::compare_magnitudes;
use super::addition::add_magnitudes;
use super::multiplication::multiply_by_digit;
use super::subtraction::sub_assign_magnitudes;

use stdlib::cmp::Ordering;


/// Method used to find each quotient digit during long division
///
/// Both methods produce identical quotients; binary search needs
/// O(log radix) digit multiplications per step where repeated
/// subtraction needs up to `radix - 1` subtractions.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum QuotientDigitSearch {
    /// Binary search over `[0, radix-1]` for the largest `q`
    /// with `divisor * q <= remainder`
    #[default]
    Binary,

    /// Subtract the divisor from the remainder until it is smaller
    /// than the divisor, counting subtractions
    Linear,
}


/// Divide magnitudes, returning (quotient, remainder)
///
/// Digits of the dividend are brought down into a running remainder
/// one at a time, most significant first. Each step produces one
/// quotient digit.
///
pub(crate) fn div_rem_magnitudes(
    dividend: &[BigDigit],
    divisor: &[BigDigit],
    radix: Radix,
    search: QuotientDigitSearch,
) -> (DigitVec, DigitVec) {
    debug_assert!(divisor.iter().any(|&d| d != 0));

    if compare_magnitudes(dividend, divisor) == Ordering::Less {
        return (DigitVec::zero(), DigitVec::from_vec(dividend.to_vec()));
    }

    let mut quotient = DigitVec::from_zero_count(dividend.len());
    let mut remainder = DigitVec::with_capacity(divisor.len() + 1);
    remainder.push_significant_digit(0);

    for (idx, &digit) in dividend.iter().enumerate().rev() {
        remainder.shift_in_insignificant_digit(digit);

        quotient.digits[idx] = match search {
            QuotientDigitSearch::Binary => {
                let (q, product) = find_quotient_digit(divisor, &remainder, radix);
                sub_assign_magnitudes(&mut remainder, &product, radix);
                q
            }
            QuotientDigitSearch::Linear => {
                subtract_while_not_less(&mut remainder, divisor, radix)
            }
        };
        debug_assert_eq!(compare_magnitudes(&remainder, divisor), Ordering::Less);
    }

    quotient.remove_significant_zeros();
    (quotient, remainder)
}

/// Binary search for the largest q with `divisor * q <= remainder`
///
/// Returns q and the product `divisor * q`.
///
fn find_quotient_digit(divisor: &[BigDigit], remainder: &[BigDigit], radix: Radix) -> (BigDigit, DigitVec) {
    let mut best = (0, DigitVec::zero());
    let mut low = 0;
    let mut high = radix.max_digit();

    while low <= high {
        let mid = low + (high - low) / 2;
        let product = multiply_by_digit(divisor, mid, radix);

        if compare_magnitudes(&product, remainder) == Ordering::Greater {
            // product of zero is never greater, so mid > 0
            high = mid - 1;
        } else {
            best = (mid, product);
            low = mid + 1;
        }
    }

    best
}

/// Subtract divisor from remainder while remainder >= divisor,
/// returning number of subtractions
fn subtract_while_not_less(remainder: &mut DigitVec, divisor: &[BigDigit], radix: Radix) -> BigDigit {
    let mut count = 0;
    while compare_magnitudes(remainder, divisor) != Ordering::Less {
        sub_assign_magnitudes(remainder, divisor, radix);
        count += 1;
    }
    count
}

/// Truncating division of BigInts, returning (quotient, remainder)
///
/// The quotient is rounded towards zero and the remainder takes the
/// sign of the dividend.
///
pub(crate) fn div_rem_trunc_bigints(
    lhs: &BigInt,
    rhs: &BigInt,
    search: QuotientDigitSearch,
) -> Result<(BigInt, BigInt), BigIntError> {
    let ctx = lhs.merged_context(rhs)?;
    if rhs.is_zero() {
        return Err(BigIntError::DivisionByZero);
    }

    let (q, r) = div_rem_magnitudes(&lhs.digits, &rhs.digits, ctx.bigdigit_radix(), search);
    let quotient = BigInt::from_digit_vec(lhs.sign() * rhs.sign(), q, ctx)?;
    let remainder = BigInt::from_digit_vec(lhs.sign(), r, ctx)?;
    Ok((quotient, remainder))
}

/// Floor division of BigInts
///
/// When the operand signs differ and the division is inexact, the
/// truncated quotient is one greater than the floor, so one is added
/// to its magnitude (the quotient is negative).
///
pub(crate) fn div_floor_bigints(
    lhs: &BigInt,
    rhs: &BigInt,
    search: QuotientDigitSearch,
) -> Result<BigInt, BigIntError> {
    let (quotient, remainder) = div_rem_trunc_bigints(lhs, rhs, search)?;
    if lhs.sign() == rhs.sign() || remainder.is_zero() {
        return Ok(quotient);
    }

    let ctx = quotient.context;
    let digits = add_magnitudes(&quotient.digits, &[1], ctx.bigdigit_radix(), ctx.max_digits())?;
    BigInt::from_digit_vec(Sign::Negative, digits, ctx)
}



#[cfg(test)]
mod test_quotient_digit_search {
    use super::*;

    #[test]
    fn binary_and_linear_agree_radix_36() {
        let radix = Radix::new(36).unwrap();
        let divisor: &[BigDigit] = &[7, 3];
        for top in 0..36 {
            for low in 0..36 {
                let dividend = DigitVec::from_vec(vec![low, 5, top]);
                let mut dividend = dividend;
                dividend.remove_significant_zeros();
                let binary = div_rem_magnitudes(&dividend, divisor, radix, QuotientDigitSearch::Binary);
                let linear = div_rem_magnitudes(&dividend, divisor, radix, QuotientDigitSearch::Linear);
                assert_eq!(binary, linear);
            }
        }
    }
}
