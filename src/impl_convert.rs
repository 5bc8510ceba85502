//! Conversions between BigInt and native or num_bigint integers

use crate::*;
use crate::bigdigit::{BigDigit, DigitVec};
use num_bigint::BigUint;
use num_integer::Integer;
use stdlib::convert::TryFrom;


impl BigInt {
    /// Exact conversion of an i128 in the given context
    ///
    /// Fails with Overflow if the value needs more than `max_digits`
    /// digits.
    ///
    /// ```
    /// use radix_bigint::{BigInt, Context};
    ///
    /// let ctx = Context::new(16, 4).unwrap();
    /// let n = BigInt::from_i128(-0xbeef, &ctx).unwrap();
    /// assert_eq!(n.to_string(), "-beef");
    /// assert!(BigInt::from_i128(0x10000, &ctx).is_err());
    /// ```
    pub fn from_i128(n: i128, ctx: &Context) -> Result<BigInt, BigIntError> {
        let sign = Sign::from_negative(n < 0);
        let digits = magnitude_to_digits(n.unsigned_abs(), ctx)?;
        BigInt::from_digit_vec(sign, digits, *ctx)
    }

    /// Exact conversion of a u128 in the given context
    pub fn from_u128(n: u128, ctx: &Context) -> Result<BigInt, BigIntError> {
        let digits = magnitude_to_digits(n, ctx)?;
        BigInt::from_digit_vec(Sign::NonNegative, digits, *ctx)
    }

    /// Exact conversion of a num_bigint::BigInt in the given context
    pub fn from_num_bigint(n: &num_bigint::BigInt, ctx: &Context) -> Result<BigInt, BigIntError> {
        let radix = BigUint::from(ctx.radix());
        let max_digits = ctx.max_digits();

        let mut digits = DigitVec::new();
        let mut remaining = n.magnitude().clone();
        loop {
            let (q, r) = remaining.div_rem(&radix);
            // r < radix, which fits in a digit
            let digit = r.iter_u32_digits().next().unwrap_or(0);
            digits.push_significant_digit(digit);
            arithmetic::check_digit_count(digits.len(), max_digits)?;

            if q.bits() == 0 {
                break;
            }
            remaining = q;
        }

        let sign = Sign::from_negative(n.sign() == num_bigint::Sign::Minus);
        BigInt::from_digit_vec(sign, digits, *ctx)
    }

    /// Exact conversion to num_bigint::BigInt
    pub fn to_num_bigint(&self) -> num_bigint::BigInt {
        let radix = BigUint::from(self.radix());
        let magnitude = self.digits().fold(BigUint::from(0u32), |acc, d| {
            acc * &radix + BigUint::from(d)
        });
        let sign = match self.sign {
            Sign::Negative => num_bigint::Sign::Minus,
            Sign::NonNegative if self.is_zero() => num_bigint::Sign::NoSign,
            Sign::NonNegative => num_bigint::Sign::Plus,
        };
        num_bigint::BigInt::from_biguint(sign, magnitude)
    }

    /// Exact conversion to i128, None if out of range
    pub(crate) fn checked_to_i128(&self) -> Option<i128> {
        let magnitude = self.checked_magnitude_u128()?;
        if self.is_negative() {
            // allows |i128::MIN|, which wraps to itself
            if magnitude > i128::MAX as u128 + 1 {
                return None;
            }
            Some((magnitude as i128).wrapping_neg())
        } else {
            i128::try_from(magnitude).ok()
        }
    }

    /// Exact conversion to u128, None if negative or out of range
    pub(crate) fn checked_to_u128(&self) -> Option<u128> {
        if self.is_negative() {
            return None;
        }
        self.checked_magnitude_u128()
    }

    fn checked_magnitude_u128(&self) -> Option<u128> {
        let radix = u128::from(self.radix());
        self.digits().try_fold(0u128, |acc, d| {
            acc.checked_mul(radix)?.checked_add(u128::from(d))
        })
    }
}

/// Digits of n in the context's radix, least significant first
fn magnitude_to_digits(mut n: u128, ctx: &Context) -> Result<DigitVec, BigIntError> {
    let radix = u128::from(ctx.radix());
    let mut digits = DigitVec::new();
    loop {
        let (q, r) = n.div_rem(&radix);
        digits.push_significant_digit(r as BigDigit);
        arithmetic::check_digit_count(digits.len(), ctx.max_digits())?;
        if q == 0 {
            break;
        }
        n = q;
    }
    Ok(digits)
}


macro_rules! impl_try_from_int_primitive {
    ($t:ty) => {
        impl TryFrom<$t> for BigInt {
            type Error = BigIntError;

            /// Convert in the default context
            fn try_from(n: $t) -> Result<Self, BigIntError> {
                BigInt::from_i128(n.into(), &Context::default())
            }
        }
    };
}

impl_try_from_int_primitive!(u8);
impl_try_from_int_primitive!(u16);
impl_try_from_int_primitive!(u32);
impl_try_from_int_primitive!(u64);
impl_try_from_int_primitive!(i8);
impl_try_from_int_primitive!(i16);
impl_try_from_int_primitive!(i32);
impl_try_from_int_primitive!(i64);
impl_try_from_int_primitive!(i128);

impl TryFrom<u128> for BigInt {
    type Error = BigIntError;

    fn try_from(n: u128) -> Result<Self, BigIntError> {
        BigInt::from_u128(n, &Context::default())
    }
}

impl From<&BigInt> for num_bigint::BigInt {
    fn from(n: &BigInt) -> Self {
        n.to_num_bigint()
    }
}

impl From<BigInt> for num_bigint::BigInt {
    fn from(n: BigInt) -> Self {
        n.to_num_bigint()
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;

    macro_rules! impl_case {
        ($name:ident: $n:literal ~ $radix:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value: i128 = $n;
                let ctx = Context::new($radix, 50).unwrap();
                let n = BigInt::from_i128(value, &ctx).unwrap();
                assert_eq!(n.to_string(), $expected);
                assert_eq!(n.checked_to_i128(), Some(value));

                let oracle = num_bigint::BigInt::from(value);
                assert_eq!(n.to_num_bigint(), oracle);
                assert_eq!(BigInt::from_num_bigint(&oracle, &ctx).unwrap(), n);
            }
        };
    }

    impl_case!(case_0: 0 ~ 10 => "0");
    impl_case!(case_n1: -1 ~ 10 => "-1");
    impl_case!(case_2591: 2591 ~ 16 => "a1f");
    impl_case!(case_11_base_2: 11 ~ 2 => "1011");
    impl_case!(case_n1295: -1295 ~ 36 => "-zz");
    impl_case!(case_1000999_base_1000: 1000999 ~ 1000 => "1|0|999");
    impl_case!(case_i128_max: 170141183460469231731687303715884105727 ~ 10 => "170141183460469231731687303715884105727");

    #[test]
    fn from_i128_min() {
        let ctx = Context::new(10, 50).unwrap();
        let n = BigInt::from_i128(i128::MIN, &ctx).unwrap();
        assert_eq!(n.to_string(), "-170141183460469231731687303715884105728");
        assert_eq!(n.checked_to_i128(), Some(i128::MIN));
        assert_eq!(n.to_num_bigint(), num_bigint::BigInt::from(i128::MIN));
    }

    #[test]
    fn from_u128_max() {
        let ctx = Context::new(16, 32).unwrap();
        let n = BigInt::from_u128(u128::MAX, &ctx).unwrap();
        assert_eq!(n.digit_count(), 32);
        assert!(n.digits().all(|d| d == 15));
        assert_eq!(n.checked_to_u128(), Some(u128::MAX));
        assert_eq!(n.checked_to_i128(), None);
    }

    #[test]
    fn from_i128_overflow() {
        let ctx = Context::new(10, 3).unwrap();
        assert!(BigInt::from_i128(-999, &ctx).is_ok());
        assert_eq!(BigInt::from_i128(1000, &ctx), Err(BigIntError::Overflow { max_digits: 3 }));
    }

    #[test]
    fn from_num_bigint_overflow() {
        let ctx = Context::new(2, 8).unwrap();
        let n = num_bigint::BigInt::from(256);
        assert_eq!(BigInt::from_num_bigint(&n, &ctx), Err(BigIntError::Overflow { max_digits: 8 }));
        let n = num_bigint::BigInt::from(-255);
        assert_eq!(BigInt::from_num_bigint(&n, &ctx).unwrap().to_string(), "-11111111");
    }

    #[test]
    fn negative_to_u128() {
        let ctx = Context::default();
        let n = BigInt::from_i128(-5, &ctx).unwrap();
        assert_eq!(n.checked_to_u128(), None);
    }

    #[test]
    fn try_from_primitives() {
        let n = BigInt::try_from(-42i8).unwrap();
        assert_eq!(n.radix(), DEFAULT_RADIX);
        assert_eq!(n.to_string(), "-42");
        assert_eq!(BigInt::try_from(u64::MAX).unwrap().to_string(), "18446744073709551615");
        assert_eq!(num_bigint::BigInt::from(&n), num_bigint::BigInt::from(-42));
    }
}
