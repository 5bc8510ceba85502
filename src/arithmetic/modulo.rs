//!
//! Floor modulo
//!

use crate::*;
use super::addition::add_signed_magnitudes;
use super::division::{div_floor_bigints, QuotientDigitSearch};
use super::multiplication::multiply_magnitudes;


/// Floor modulo of BigInts, returning (quotient, modulo)
///
/// The modulo is derived from the floor quotient as
/// `lhs - quotient * rhs`, so `quotient * rhs + modulo == lhs` holds
/// exactly. Its sign follows the divisor.
///
/// The intermediate product may need one digit more than the context
/// allows (e.g. -999 mod 2 with three digits, where the product is
/// -1000), so it is computed with one digit of headroom; only the
/// final modulo is held to `max_digits`.
///
pub(crate) fn div_mod_floor_bigints(
    lhs: &BigInt,
    rhs: &BigInt,
    search: QuotientDigitSearch,
) -> Result<(BigInt, BigInt), BigIntError> {
    let quotient = div_floor_bigints(lhs, rhs, search)?;
    let ctx = quotient.context;
    let radix = ctx.bigdigit_radix();
    let scratch_max_digits = ctx.max_digits() + 1;

    if quotient.is_zero() {
        return Ok((quotient, BigInt::from_digit_vec(lhs.sign(), lhs.digits.clone(), ctx)?));
    }

    let product = multiply_magnitudes(&quotient.digits, &rhs.digits, radix, scratch_max_digits)?;
    let product_sign = quotient.sign() * rhs.sign();

    let (sign, digits) = add_signed_magnitudes(
        lhs.sign(), &lhs.digits, -product_sign, &product, radix, scratch_max_digits
    )?;
    let modulo = BigInt::from_digit_vec(sign, digits, ctx)?;
    Ok((quotient, modulo))
}

/// Floor modulo of BigInts
pub(crate) fn mod_floor_bigints(lhs: &BigInt, rhs: &BigInt) -> Result<BigInt, BigIntError> {
    div_mod_floor_bigints(lhs, rhs, QuotientDigitSearch::default()).map(|(_, m)| m)
}


#[cfg(test)]
mod test {
    use super::*;

    fn ctx(max_digits: usize) -> Context {
        Context::new(10, max_digits).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $a:literal mod $b:literal == $q:literal, $m:literal) => {
            impl_case!($name: $a mod $b == $q, $m; max=100);
        };
        ($name:ident: $a:literal mod $b:literal == $q:literal, $m:literal; max=$max:literal) => {
            #[test]
            fn $name() {
                let ctx = ctx($max);
                let a = BigInt::parse_with_context($a, &ctx).unwrap();
                let b = BigInt::parse_with_context($b, &ctx).unwrap();
                let (q, m) = div_mod_floor_bigints(&a, &b, QuotientDigitSearch::Binary).unwrap();
                assert_eq!(q, BigInt::parse_with_context($q, &ctx).unwrap());
                assert_eq!(m, BigInt::parse_with_context($m, &ctx).unwrap());
                assert_eq!(mod_floor_bigints(&a, &b).unwrap(), m);
            }
        };
    }

    impl_case!(case_123_45: "123" mod "45" == "2", "33");
    impl_case!(case_n7_2: "-7" mod "2" == "-4", "1");
    impl_case!(case_7_n2: "7" mod "-2" == "-4", "-1");
    impl_case!(case_n7_n2: "-7" mod "-2" == "3", "-1");
    impl_case!(case_n1_2: "-1" mod "2" == "-1", "1");
    impl_case!(case_n6_2: "-6" mod "2" == "-3", "0");
    impl_case!(case_3_n7: "3" mod "-7" == "-1", "-4");
    impl_case!(case_0_n7: "0" mod "-7" == "0", "0");
    impl_case!(case_n999_2: "-999" mod "2" == "-500", "1"; max=3);
    impl_case!(case_999_n1000: "999" mod "-1000" == "-1", "-1"; max=4);

    #[test]
    fn modulo_by_zero() {
        let ctx = ctx(10);
        let a = BigInt::parse_with_context("12", &ctx).unwrap();
        let zero = BigInt::zero(&ctx);
        assert_eq!(mod_floor_bigints(&a, &zero), Err(BigIntError::DivisionByZero));
    }
}
