//! Implementation of comparison operations
//!
//! Values of different radix are never equal and have no ordering.
//! The named `try_*` methods report the radix mismatch as an error
//! instead. The digit limit takes no part in comparison or hashing.
//!

use crate::*;

use stdlib::cmp::Ordering;
use stdlib::hash::{Hash, Hasher};


impl BigInt {
    /// Compare with a value of the same radix
    ///
    /// ```
    /// use radix_bigint::BigInt;
    /// use std::cmp::Ordering;
    ///
    /// let a = BigInt::from_str_radix("-a1f", 16, 10).unwrap();
    /// let b = BigInt::from_str_radix("2b", 16, 10).unwrap();
    /// assert_eq!(a.try_cmp(&b), Ok(Ordering::Less));
    ///
    /// let c = BigInt::from_str_radix("2b", 36, 10).unwrap();
    /// assert!(b.try_cmp(&c).is_err());
    /// ```
    pub fn try_cmp(&self, other: &BigInt) -> Result<Ordering, BigIntError> {
        if self.context.radix() != other.context.radix() {
            return Err(BigIntError::BaseMismatch(self.radix(), other.radix()));
        }
        Ok(cmp_same_radix(self, other))
    }

    /// Equality with a value of the same radix
    pub fn try_eq(&self, other: &BigInt) -> Result<bool, BigIntError> {
        self.try_cmp(other).map(|ord| ord == Ordering::Equal)
    }

    /// True if self is less than a value of the same radix
    pub fn try_lt(&self, other: &BigInt) -> Result<bool, BigIntError> {
        self.try_cmp(other).map(|ord| ord == Ordering::Less)
    }
}

/// Order of two values with equal radix
fn cmp_same_radix(lhs: &BigInt, rhs: &BigInt) -> Ordering {
    match (lhs.sign, rhs.sign) {
        (Sign::Negative, Sign::NonNegative) => Ordering::Less,
        (Sign::NonNegative, Sign::Negative) => Ordering::Greater,
        (Sign::NonNegative, Sign::NonNegative) => {
            arithmetic::compare_magnitudes(&lhs.digits, &rhs.digits)
        }
        (Sign::Negative, Sign::Negative) => {
            arithmetic::compare_magnitudes(&lhs.digits, &rhs.digits).reverse()
        }
    }
}

impl PartialEq for BigInt {
    #[inline]
    fn eq(&self, rhs: &BigInt) -> bool {
        self.context.radix() == rhs.context.radix()
            && self.sign == rhs.sign
            && self.digits == rhs.digits
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    #[inline]
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        self.try_cmp(other).ok()
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.context.radix().hash(state);
        self.sign.hash(state);
        self.digits.hash(state);
    }
}
