//!
//! Addition algorithms
//!

use crate::*;
use crate::bigdigit::{BigDigit, DigitVec, Radix};
use super::{check_digit_count, compare_magnitudes};
use super::subtraction::sub_magnitudes;

use stdlib::cmp::Ordering;


/// Add two magnitudes
#[inline]
pub(crate) fn add_magnitudes(
    a: &[BigDigit],
    b: &[BigDigit],
    radix: Radix,
    max_digits: usize,
) -> Result<DigitVec, BigIntError> {
    let mut result = DigitVec::with_capacity(a.len().max(b.len()) + 1);
    add_magnitudes_into(a, b, radix, max_digits, &mut result)?;
    Ok(result)
}

/// Fill DigitVec with sum of magnitudes
///
/// Fails with Overflow if the final carry would push the sum past
/// `max_digits` digits.
///
pub(crate) fn add_magnitudes_into(
    a: &[BigDigit],
    b: &[BigDigit],
    radix: Radix,
    max_digits: usize,
    v: &mut DigitVec,
) -> Result<(), BigIntError> {
    // a is longer of the slices
    let (a, b) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    v.clear_and_reserve(a.len() + 1);

    let mut b_digits = b.iter();
    let mut carry = 0;
    for &a_digit in a.iter() {
        let b_digit = b_digits.next().copied().unwrap_or(0);
        let sum = radix.carrying_add(a_digit, b_digit, &mut carry);
        v.push_significant_digit(sum);
    }

    if carry != 0 {
        check_digit_count(v.len() + 1, max_digits)?;
        v.push_significant_digit(carry);
    }

    v.remove_significant_zeros();
    check_digit_count(v.len(), max_digits)
}

/// Add two signed magnitudes, returning sign and magnitude of the sum
///
/// Signs are combined the usual way: equal signs add magnitudes,
/// differing signs subtract the smaller magnitude from the larger
/// and take the sign of the larger. A zero sum is always NonNegative.
///
pub(crate) fn add_signed_magnitudes(
    a_sign: Sign,
    a: &[BigDigit],
    b_sign: Sign,
    b: &[BigDigit],
    radix: Radix,
    max_digits: usize,
) -> Result<(Sign, DigitVec), BigIntError> {
    if a_sign == b_sign {
        let sum = add_magnitudes(a, b, radix, max_digits)?;
        let sign = if sum.is_zero() { Sign::NonNegative } else { a_sign };
        return Ok((sign, sum));
    }

    let (sign, diff) = match compare_magnitudes(a, b) {
        Ordering::Equal => return Ok((Sign::NonNegative, DigitVec::zero())),
        Ordering::Greater => (a_sign, sub_magnitudes(a, b, radix)),
        Ordering::Less => (b_sign, sub_magnitudes(b, a, radix)),
    };
    check_digit_count(diff.len(), max_digits)?;
    Ok((sign, diff))
}

/// Sum of two BigInts of the same radix
pub(crate) fn add_bigints(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, BigIntError> {
    let ctx = lhs.merged_context(rhs)?;
    let (sign, digits) = add_signed_magnitudes(
        lhs.sign(), &lhs.digits, rhs.sign(), &rhs.digits, ctx.bigdigit_radix(), ctx.max_digits()
    )?;
    BigInt::from_digit_vec(sign, digits, ctx)
}
