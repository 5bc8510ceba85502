//! Code for num_traits

use num_traits::{Num, FromPrimitive, ToPrimitive, Zero, One, Signed};

use crate::*;
use stdlib::convert::TryFrom;


impl Zero for BigInt {
    /// Zero in the default context
    #[inline]
    fn zero() -> BigInt {
        BigInt::zero(&Context::default())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        BigInt::is_zero(self)
    }
}

impl One for BigInt {
    /// One in the default context
    #[inline]
    fn one() -> BigInt {
        BigInt::one(&Context::default())
    }
}

impl Num for BigInt {
    type FromStrRadixErr = BigIntError;

    /// Parse alphabet digits in the given radix, with the default
    /// digit limit
    #[inline]
    fn from_str_radix(s: &str, radix: u32) -> Result<BigInt, BigIntError> {
        BigInt::from_str_radix(s, radix, Context::default().max_digits())
    }
}

impl Signed for BigInt {
    #[inline]
    fn abs(&self) -> BigInt {
        BigInt::abs(self)
    }

    fn abs_sub(&self, other: &BigInt) -> BigInt {
        if self <= other {
            BigInt::zero(&self.context)
        } else {
            self - other
        }
    }

    /// -1, 0 or 1 in the context of self
    fn signum(&self) -> BigInt {
        let one = BigInt::one(&self.context);
        match self.sign {
            _ if self.is_zero() => BigInt::zero(&self.context),
            Sign::Negative => -one,
            Sign::NonNegative => one,
        }
    }

    #[inline]
    fn is_positive(&self) -> bool {
        !self.is_negative() && !self.is_zero()
    }

    #[inline]
    fn is_negative(&self) -> bool {
        BigInt::is_negative(self)
    }
}

impl ToPrimitive for BigInt {
    fn to_i64(&self) -> Option<i64> {
        self.checked_to_i128().and_then(|n| i64::try_from(n).ok())
    }

    fn to_u64(&self) -> Option<u64> {
        self.checked_to_u128().and_then(|n| u64::try_from(n).ok())
    }

    fn to_i128(&self) -> Option<i128> {
        self.checked_to_i128()
    }

    fn to_u128(&self) -> Option<u128> {
        self.checked_to_u128()
    }
}

impl FromPrimitive for BigInt {
    #[inline]
    fn from_i64(n: i64) -> Option<Self> {
        BigInt::from_i128(n.into(), &Context::default()).ok()
    }

    #[inline]
    fn from_u64(n: u64) -> Option<Self> {
        BigInt::from_u128(n.into(), &Context::default()).ok()
    }

    #[inline]
    fn from_i128(n: i128) -> Option<Self> {
        BigInt::from_i128(n, &Context::default()).ok()
    }

    #[inline]
    fn from_u128(n: u128) -> Option<Self> {
        BigInt::from_u128(n, &Context::default()).ok()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    fn hex(s: &str) -> BigInt {
        BigInt::from_str_radix(s, 16, 40).unwrap()
    }

    #[test]
    fn num_from_str_radix() {
        let n = <BigInt as Num>::from_str_radix("-zz", 36).unwrap();
        assert_eq!(n.to_machine_integer(), -1295);
        assert_eq!(n.max_digits(), Context::default().max_digits());
        assert_eq!(<BigInt as Num>::from_str_radix("zz", 37), Err(BigIntError::InvalidBase(37)));
    }

    #[test]
    fn zero_and_one() {
        let z = <BigInt as Zero>::zero();
        assert!(Zero::is_zero(&z));
        assert_eq!(z.radix(), DEFAULT_RADIX);
        assert_eq!(<BigInt as One>::one().to_i64(), Some(1));
    }

    #[test]
    fn signed() {
        let a = hex("-a1f");
        assert_eq!(Signed::abs(&a), hex("a1f"));
        assert_eq!(Signed::signum(&a), hex("-1"));
        assert_eq!(Signed::signum(&hex("0")), hex("0"));
        assert_eq!(Signed::signum(&hex("2b")), hex("1"));
        assert!(Signed::is_negative(&a));
        assert!(!Signed::is_positive(&a));
        assert!(!Signed::is_positive(&hex("0")));
        assert_eq!(Signed::abs_sub(&hex("a1f"), &hex("2b")), hex("9f4"));
        assert_eq!(Signed::abs_sub(&hex("2b"), &hex("a1f")), hex("0"));
    }

    #[test]
    fn to_primitive() {
        assert_eq!(hex("-a1f").to_i64(), Some(-2591));
        assert_eq!(hex("-a1f").to_u64(), None);
        assert_eq!(hex("7fffffffffffffff").to_i64(), Some(i64::MAX));
        assert_eq!(hex("8000000000000000").to_i64(), None);
        assert_eq!(hex("-8000000000000000").to_i64(), Some(i64::MIN));
        assert_eq!(hex("8000000000000000").to_u64(), Some(1 << 63));
        assert_eq!(hex("100000000000000000000000000000000").to_u128(), None);
    }

    #[test]
    fn from_primitive() {
        let n = BigInt::from_i64(-2591).unwrap();
        assert_eq!(n.radix(), DEFAULT_RADIX);
        assert_eq!(n.to_i64(), Some(-2591));
        assert_eq!(<BigInt as FromPrimitive>::from_u128(u128::MAX).and_then(|n| n.to_u128()), Some(u128::MAX));
    }
}
