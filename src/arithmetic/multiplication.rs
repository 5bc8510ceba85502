//!
//! Schoolbook multiplication
//!

use crate::*;
use crate::bigdigit::{BigDigit, DigitVec, Radix};
use super::check_digit_count;
use super::addition::add_magnitudes_into;

use stdlib::mem;


/// Fill DigitVec with `a * n`, shifted `shift` digits towards significance
pub(crate) fn multiply_by_digit_into(
    a: &[BigDigit],
    n: BigDigit,
    shift: usize,
    radix: Radix,
    v: &mut DigitVec,
) {
    v.clear_and_reserve(shift + a.len() + 1);
    v.resize(shift);

    let mut carry = 0;
    for &digit in a.iter() {
        let prod = radix.carrying_mul(digit, n, &mut carry);
        v.push_significant_digit(prod);
    }
    if carry != 0 {
        v.push_significant_digit(carry);
    }

    v.remove_significant_zeros();
}

/// Return `a * n` for a single digit n
pub(crate) fn multiply_by_digit(a: &[BigDigit], n: BigDigit, radix: Radix) -> DigitVec {
    let mut result = DigitVec::with_capacity(a.len() + 1);
    multiply_by_digit_into(a, n, 0, radix, &mut result);
    result
}

/// Multiply two magnitudes
///
/// Each digit of `a` produces a partial product of `b`, shifted by the
/// digit's position, which is accumulated into the running total.
/// Fails with Overflow as soon as any partial product or the running
/// total needs more than `max_digits` digits.
///
pub(crate) fn multiply_magnitudes(
    a: &[BigDigit],
    b: &[BigDigit],
    radix: Radix,
    max_digits: usize,
) -> Result<DigitVec, BigIntError> {
    let mut total = DigitVec::zero();
    let mut partial = DigitVec::with_capacity(a.len() + b.len());
    let mut scratch = DigitVec::with_capacity(a.len() + b.len());

    for (shift, &digit) in a.iter().enumerate() {
        if digit == 0 {
            continue;
        }

        multiply_by_digit_into(b, digit, shift, radix, &mut partial);
        check_digit_count(partial.len(), max_digits)?;

        add_magnitudes_into(&total, &partial, radix, max_digits, &mut scratch)?;
        mem::swap(&mut total, &mut scratch);
    }

    Ok(total)
}

/// Product of two BigInts of the same radix
pub(crate) fn multiply_bigints(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, BigIntError> {
    let ctx = lhs.merged_context(rhs)?;
    if lhs.is_zero() || rhs.is_zero() {
        return Ok(BigInt::zero(&ctx));
    }

    let digits = multiply_magnitudes(&lhs.digits, &rhs.digits, ctx.bigdigit_radix(), ctx.max_digits())?;
    BigInt::from_digit_vec(lhs.sign() * rhs.sign(), digits, ctx)
}


#[cfg(test)]
mod test_multiply_magnitudes {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $radix:literal ~ [$($a:literal),*] * [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let radix = Radix::new($radix).unwrap();
                let a: &[BigDigit] = &[$($a),*];
                let b: &[BigDigit] = &[$($b),*];
                let expected: &[BigDigit] = &[$($c),*];

                let prod = multiply_magnitudes(a, b, radix, 100).unwrap();
                assert_eq!(prod.as_ref(), expected);

                let commutes = multiply_magnitudes(b, a, radix, 100).unwrap();
                assert_eq!(commutes.as_ref(), expected);
            }
        };
    }

    impl_case!(case_0_0: 10 ~ [0] * [0] == [0]);
    impl_case!(case_5_5: 10 ~ [5] * [5] == [5, 2]);
    impl_case!(case_123_45: 10 ~ [3, 2, 1] * [5, 4] == [5, 3, 5, 5]);
    impl_case!(case_999_2: 10 ~ [9, 9, 9] * [2] == [8, 9, 9, 1]);
    impl_case!(case_1000_0: 10 ~ [0, 0, 0, 1] * [0] == [0]);
    impl_case!(case_xa1f_x2b: 16 ~ [15, 1, 10] * [11, 2] == [5, 3, 3, 11, 1]);
    impl_case!(case_b1111_b101: 2 ~ [1, 1, 1, 1] * [1, 0, 1] == [1, 1, 0, 1, 0, 0, 1]);
    impl_case!(case_xff_x2: 16 ~ [15, 15] * [2] == [14, 15, 1]);

    #[test]
    fn multiply_by_digit_shifted() {
        let radix = Radix::new(10).unwrap();
        let mut v = DigitVec::new();
        multiply_by_digit_into(&[3, 2, 1], 4, 2, radix, &mut v);
        assert_eq!(v.as_ref(), &[0, 0, 2, 9, 4]);

        multiply_by_digit_into(&[3, 2, 1], 0, 2, radix, &mut v);
        assert_eq!(v.as_ref(), &[0]);
    }

    #[test]
    fn product_at_max_digits() {
        let radix = Radix::new(10).unwrap();
        // 99 * 99 = 9801
        let prod = multiply_magnitudes(&[9, 9], &[9, 9], radix, 4).unwrap();
        assert_eq!(prod.as_ref(), &[1, 0, 8, 9]);
    }

    #[test]
    fn partial_product_overflow() {
        let radix = Radix::new(10).unwrap();
        // 100 * 100: the shifted partial product needs 5 digits
        let result = multiply_magnitudes(&[0, 0, 1], &[0, 0, 1], radix, 4);
        assert_eq!(result, Err(BigIntError::Overflow { max_digits: 4 }));
    }

    #[test]
    fn running_total_overflow() {
        let radix = Radix::new(10).unwrap();
        // 99 * 11 = 1089; partial products 99 and 990 fit in 3 digits
        let result = multiply_magnitudes(&[1, 1], &[9, 9], radix, 3);
        assert_eq!(result, Err(BigIntError::Overflow { max_digits: 3 }));
    }
}
