//!
//! Subtraction algorithms
//!

use crate::*;
use crate::bigdigit::{BigDigit, DigitVec, Radix};
use super::compare_magnitudes;
use super::addition::add_signed_magnitudes;

use stdlib::cmp::Ordering;


/// Subtract magnitude b from a, where |a| >= |b|
pub(crate) fn sub_magnitudes(a: &[BigDigit], b: &[BigDigit], radix: Radix) -> DigitVec {
    let mut result = DigitVec::with_capacity(a.len());
    sub_magnitudes_into(a, b, radix, &mut result);
    result
}

/// Fill DigitVec with difference of magnitudes, |a| >= |b|
pub(crate) fn sub_magnitudes_into(a: &[BigDigit], b: &[BigDigit], radix: Radix, v: &mut DigitVec) {
    debug_assert_ne!(compare_magnitudes(a, b), Ordering::Less);
    v.clear_and_reserve(a.len());

    let mut b_digits = b.iter();
    let mut borrow = 0;
    for &a_digit in a.iter() {
        let b_digit = b_digits.next().copied().unwrap_or(0);
        let diff = radix.borrowing_sub(a_digit, b_digit, &mut borrow);
        v.push_significant_digit(diff);
    }
    debug_assert_eq!(borrow, 0);

    v.remove_significant_zeros();
}

/// Subtract magnitude b from DigitVec in place, |v| >= |b|
pub(crate) fn sub_assign_magnitudes(v: &mut DigitVec, b: &[BigDigit], radix: Radix) {
    debug_assert_ne!(compare_magnitudes(v, b), Ordering::Less);

    let mut borrow = 0;
    let mut b_digits = b.iter();
    for d in v.digits.iter_mut() {
        let b_digit = b_digits.next().copied().unwrap_or(0);
        if b_digit == 0 && borrow == 0 && b_digits.len() == 0 {
            break;
        }
        *d = radix.borrowing_sub(*d, b_digit, &mut borrow);
    }
    debug_assert_eq!(borrow, 0);

    v.remove_significant_zeros();
}

/// Difference of two BigInts of the same radix
///
/// Computed as lhs + (-rhs) without negating a copy of rhs.
pub(crate) fn sub_bigints(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, BigIntError> {
    let ctx = lhs.merged_context(rhs)?;
    let (sign, digits) = add_signed_magnitudes(
        lhs.sign(), &lhs.digits, -rhs.sign(), &rhs.digits, ctx.bigdigit_radix(), ctx.max_digits()
    )?;
    BigInt::from_digit_vec(sign, digits, ctx)
}


#[cfg(test)]
mod test_sub_magnitudes {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $radix:literal ~ [$($a:literal),*] - [$($b:literal),*] == [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let radix = Radix::new($radix).unwrap();
                let a: &[BigDigit] = &[$($a),*];
                let b: &[BigDigit] = &[$($b),*];
                let expected: &[BigDigit] = &[$($c),*];

                let diff = sub_magnitudes(a, b, radix);
                assert_eq!(diff.as_ref(), expected);

                let mut v = DigitVec::from_vec(a.to_vec());
                sub_assign_magnitudes(&mut v, b, radix);
                assert_eq!(v.as_ref(), expected);
            }
        };
    }

    impl_case!(case_0_0: 10 ~ [0] - [0] == [0]);
    impl_case!(case_123_45: 10 ~ [3, 2, 1] - [5, 4] == [8, 7]);
    impl_case!(case_1000_1: 10 ~ [0, 0, 0, 1] - [1] == [9, 9, 9]);
    impl_case!(case_equal: 10 ~ [4, 3, 2] - [4, 3, 2] == [0]);
    impl_case!(case_xa1f_x2b: 16 ~ [15, 1, 10] - [11, 2] == [4, 15, 9]);
    impl_case!(case_b10001_b110: 2 ~ [1, 0, 0, 0, 1] - [0, 1, 1] == [1, 1, 0, 1]);
    impl_case!(case_borrow_chain_radix_7: 7 ~ [0, 0, 0, 0, 1] - [6] == [1, 6, 6, 6]);
    impl_case!(case_unchanged_high_digits: 10 ~ [5, 0, 0, 7] - [3] == [2, 0, 0, 7]);
}
