//! Radix definition
//!
//! The radix of a BigInt is chosen at runtime, so unlike fixed-width
//! bigdigit types all the carry arithmetic is parameterized by a
//! `Radix` value carried alongside the digits.
//!

use crate::stdlib::fmt;
use crate::BigIntError;

use super::{BigDigit, BigDigitDouble};


/// Largest radix which may be written with the digit alphabet `0-9a-z`
pub const MAX_ALPHABET_RADIX: u32 = 36;


/// Radix of a positional digit system, at least 2
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub(crate) struct Radix(BigDigit);

impl fmt::Debug for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Radix({})", self.0)
    }
}

impl Radix {
    /// Validate radix value
    pub fn new(radix: u32) -> Result<Self, BigIntError> {
        if radix < 2 {
            return Err(BigIntError::InvalidBase(radix));
        }
        Ok(Self(radix))
    }

    /// Radix from a known-valid constant
    pub(crate) const fn from_const(radix: u32) -> Self {
        assert!(radix >= 2);
        Self(radix)
    }

    /// Value of the radix
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Value of the radix, in the double-wide type
    #[inline]
    pub fn wide(self) -> BigDigitDouble {
        self.0.into()
    }

    /// Largest digit of this radix
    #[inline]
    pub fn max_digit(self) -> BigDigit {
        self.0 - 1
    }

    /// True if digits of this radix can be written with the alphabet
    pub fn fits_alphabet(self) -> bool {
        self.0 <= MAX_ALPHABET_RADIX
    }

    /// Return the first digit not less than the radix, if any
    pub fn find_invalid_digit<'a, I: IntoIterator<Item=&'a BigDigit>>(self, i: I) -> Option<BigDigit> {
        i.into_iter().copied().find(|&d| d >= self.0)
    }

    /// Split double-wide number into (high, low) digits
    #[inline]
    pub fn split_wide_digit(self, n: BigDigitDouble) -> (BigDigit, BigDigit) {
        let (hi, lo) = num_integer::div_rem(n, self.wide());
        debug_assert!(hi < self.wide());
        (hi as BigDigit, lo as BigDigit)
    }

    /// Return a + b + carry, storing overflow in carry
    #[inline]
    pub fn carrying_add(self, a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
        let sum = BigDigitDouble::from(a) + BigDigitDouble::from(b) + BigDigitDouble::from(*carry);
        let (hi, lo) = self.split_wide_digit(sum);
        *carry = hi;
        lo
    }

    /// Return a - b - borrow, setting borrow to 1 if the difference
    /// went below zero (and was wrapped by the radix)
    #[inline]
    pub fn borrowing_sub(self, a: BigDigit, b: BigDigit, borrow: &mut BigDigit) -> BigDigit {
        let a = BigDigitDouble::from(a);
        let subtrahend = BigDigitDouble::from(b) + BigDigitDouble::from(*borrow);
        if a >= subtrahend {
            *borrow = 0;
            (a - subtrahend) as BigDigit
        } else {
            *borrow = 1;
            (a + self.wide() - subtrahend) as BigDigit
        }
    }

    /// Return a * b + carry, storing overflow in carry
    #[inline]
    pub fn carrying_mul(self, a: BigDigit, b: BigDigit, carry: &mut BigDigit) -> BigDigit {
        let prod = BigDigitDouble::from(a) * BigDigitDouble::from(b) + BigDigitDouble::from(*carry);
        let (hi, lo) = self.split_wide_digit(prod);
        *carry = hi;
        lo
    }

    /// Character representing digit `d` in the alphabet `0-9a-z`
    pub fn digit_to_char(self, d: BigDigit) -> Option<char> {
        debug_assert!(d < self.0);
        if self.fits_alphabet() {
            crate::stdlib::char::from_digit(d, MAX_ALPHABET_RADIX)
        } else {
            None
        }
    }
}
