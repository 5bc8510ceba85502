// Copyright 2026 The radix-bigint Developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Big integers in any radix
//!
//! `BigInt` stores a signed integer as a vector of digits in a radix
//! chosen at runtime (2 through 36 when written with the alphabet
//! `0-9a-z`, any radix fitting in a `u32` when built from digits).
//!
//! Every value carries a digit limit. Operations whose result would
//! need more digits than the limit fail with [`BigIntError::Overflow`]
//! instead of growing, so the cost of every operation is bounded by
//! the limit chosen by the caller.
//!
//! Division and modulo round towards negative infinity (floor), so
//! `(a / b) * b + a % b == a` always holds and the modulo takes the
//! sign of the divisor.
//!
//! # Example
//!
//! ```
//! use radix_bigint::BigInt;
//!
//! let a = BigInt::from_str_radix("a1f", 16, 100).unwrap();
//! let b = BigInt::from_str_radix("2b", 16, 100).unwrap();
//!
//! assert_eq!(a.checked_add(&b).unwrap().to_string(), "a4a");
//! assert_eq!(a.checked_sub(&b).unwrap().to_string(), "9f4");
//! assert_eq!(a.checked_div_floor(&b).unwrap().to_string(), "3c");
//!
//! // operators panic where the checked methods return errors
//! assert_eq!((&a * &b).to_string(), "1b335");
//! assert_eq!(format!("{:#}", &a - &b), "9f4 (base 16)");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::suspicious_arithmetic_impl)]
#![allow(clippy::suspicious_op_assign_impl)]
#![allow(clippy::redundant_field_names)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::ops::{Mul, Neg};
use self::stdlib::string::String;

#[cfg(test)]
extern crate paste;

mod bigdigit;
use bigdigit::DigitVec;

mod arithmetic;
pub use arithmetic::division::QuotientDigitSearch;

// From<T>, To<T>, TryFrom<T> impls
mod impl_convert;
// Add<T>, Sub<T>, etc...
#[macro_use]
mod impl_ops;
mod impl_ops_add;
mod impl_ops_sub;
mod impl_ops_mul;
mod impl_ops_div;
mod impl_ops_rem;

// PartialEq, PartialOrd, Hash
mod impl_cmp;

// Display, Debug
mod impl_fmt;

// Implementations of num_traits
mod impl_num;

mod parsing;
mod impl_trait_from_str;

#[cfg(feature = "serde")]
mod impl_serde;

// Radix and digit limits
mod context;
pub use context::{Context, DEFAULT_MAX_DIGITS, DEFAULT_RADIX, MAX_DIGITS_CEILING};
pub use bigdigit::radix::MAX_ALPHABET_RADIX;


/// Sign of a BigInt
///
/// Zero is always `NonNegative`.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sign {
    Negative,
    NonNegative,
}

impl Sign {
    /// Sign from a "negative" flag
    pub fn from_negative(negative: bool) -> Sign {
        if negative { Sign::Negative } else { Sign::NonNegative }
    }

    pub fn is_negative(self) -> bool {
        self == Sign::Negative
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::NonNegative,
            Sign::NonNegative => Sign::Negative,
        }
    }
}

/// Sign of a product or quotient: negative iff exactly one operand is
impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs { Sign::NonNegative } else { Sign::Negative }
    }
}


/// Errors of BigInt construction and arithmetic
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BigIntError {
    /// Radix below 2, or above the alphabet size when parsing
    /// alphabet digits
    InvalidBase(u32),
    /// Digit limit below 1 or above `MAX_DIGITS_CEILING`
    InvalidDigitCount(usize),
    /// Digit not in `[0, radix-1]`
    DigitOutOfRange { digit: u64, radix: u32 },
    /// More digits supplied than the digit limit allows
    TooManyDigits { count: usize, max_digits: usize },
    /// Operands of different radix
    BaseMismatch(u32, u32),
    /// Result would need more digits than the digit limit allows
    Overflow { max_digits: usize },
    DivisionByZero,
    /// No digits in string
    Empty,
    /// Character which is not a digit of any radix
    InvalidCharacter(char),
    /// Radix suffix with a value too large for `u32`
    RadixOutOfRange(String),
}

impl fmt::Display for BigIntError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use BigIntError::*;

        match *self {
            InvalidBase(radix) => {
                write!(f, "invalid radix {} (supported radixes: 2 - {} for alphabet digits, 2 - {} otherwise)",
                       radix, MAX_ALPHABET_RADIX, u32::MAX)
            }
            InvalidDigitCount(n) => {
                write!(f, "invalid digit limit {} (must be within 1 - {})", n, MAX_DIGITS_CEILING)
            }
            DigitOutOfRange { digit, radix } => {
                write!(f, "digit {} is not valid in radix {}", digit, radix)
            }
            TooManyDigits { count, max_digits } => {
                write!(f, "{} digits exceeds the digit limit {}", count, max_digits)
            }
            BaseMismatch(a, b) => write!(f, "radix mismatch: {} | {}", a, b),
            Overflow { max_digits } => write!(f, "result exceeds the digit limit {}", max_digits),
            DivisionByZero => f.write_str("division by zero"),
            Empty => f.write_str("failed to parse empty string"),
            InvalidCharacter(c) => write!(f, "invalid digit character {:?}", c),
            RadixOutOfRange(ref radix) => write!(f, "radix {} is out of range (maximum {})", radix, u32::MAX),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BigIntError {}


/// An arbitrary precision integer in arbitrary radix
///
/// Digits are stored least significant first and never have
/// significant zeros; zero is the single digit `[0]` with
/// NonNegative sign. Values are immutable: every operation returns a
/// new BigInt.
///
#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    digits: DigitVec,
    context: Context,
}

impl BigInt {
    /// Zero in the given context
    pub fn zero(ctx: &Context) -> BigInt {
        BigInt {
            sign: Sign::NonNegative,
            digits: DigitVec::zero(),
            context: *ctx,
        }
    }

    /// One in the given context
    pub fn one(ctx: &Context) -> BigInt {
        BigInt {
            sign: Sign::NonNegative,
            digits: DigitVec::from_vec(vec![1]),
            context: *ctx,
        }
    }

    /// Build from digits ordered most-significant first
    ///
    /// Every digit must be less than the context's radix, and there may
    /// be at most `max_digits` of them (leading zeros included).
    /// A negative sign on zero is dropped.
    ///
    /// ```
    /// use radix_bigint::{BigInt, Context, Sign};
    ///
    /// let ctx = Context::new(2, 100).unwrap();
    /// let eleven = BigInt::from_digits(Sign::NonNegative, &[1, 0, 1, 1], &ctx).unwrap();
    /// let six = BigInt::from_digits(Sign::NonNegative, &[1, 1, 0], &ctx).unwrap();
    /// let sum = eleven.checked_add(&six).unwrap();
    /// assert_eq!(sum.digits().collect::<Vec<_>>(), vec![1, 0, 0, 0, 1]);
    /// ```
    pub fn from_digits(sign: Sign, digits: &[u32], ctx: &Context) -> Result<BigInt, BigIntError> {
        let radix = ctx.bigdigit_radix();
        if let Some(digit) = radix.find_invalid_digit(digits) {
            return Err(BigIntError::DigitOutOfRange { digit: digit.into(), radix: radix.value() });
        }
        if digits.len() > ctx.max_digits() {
            return Err(BigIntError::TooManyDigits { count: digits.len(), max_digits: ctx.max_digits() });
        }

        let digits = DigitVec::from_big_endian_slice(digits);
        BigInt::from_digit_vec(sign, digits, *ctx)
    }

    /// Build from digits ordered most-significant first, creating the
    /// context from radix and digit limit
    pub fn from_digits_radix(
        radix: u32,
        max_digits: usize,
        negative: bool,
        digits: &[u32],
    ) -> Result<BigInt, BigIntError> {
        let ctx = Context::new(radix, max_digits)?;
        BigInt::from_digits(Sign::from_negative(negative), digits, &ctx)
    }

    /// Parse string of alphabet digits `0-9a-z` with optional leading `-`
    ///
    /// Radix must be within 2 - 36.
    ///
    /// ```
    /// use radix_bigint::BigInt;
    ///
    /// let n = BigInt::from_str_radix("-zz", 36, 4).unwrap();
    /// assert_eq!(n.to_machine_integer(), -1295);
    /// assert!(BigInt::from_str_radix("12345", 10, 4).is_err());
    /// ```
    pub fn from_str_radix(s: &str, radix: u32, max_digits: usize) -> Result<BigInt, BigIntError> {
        let ctx = Context::new(radix, max_digits)?;
        if !ctx.bigdigit_radix().fits_alphabet() {
            return Err(BigIntError::InvalidBase(radix));
        }
        parsing::parse_bigint(s, &ctx)
    }

    /// Parse string of digits in the radix of the given context
    ///
    /// Digits are either alphabet characters `0-9a-z` (radix up to 36)
    /// or decimal digit values separated by `|` (any radix).
    pub fn parse_with_context(s: &str, ctx: &Context) -> Result<BigInt, BigIntError> {
        parsing::parse_bigint(s, ctx)
    }

    /// Construct from parts, removing significant zeros and checking
    /// the digit limit
    pub(crate) fn from_digit_vec(sign: Sign, mut digits: DigitVec, ctx: Context) -> Result<BigInt, BigIntError> {
        digits.remove_significant_zeros();
        arithmetic::check_digit_count(digits.len(), ctx.max_digits())?;
        let sign = if digits.is_zero() { Sign::NonNegative } else { sign };
        Ok(BigInt {
            sign: sign,
            digits: digits,
            context: ctx,
        })
    }

    /// Context of a binary operation between self and other
    pub(crate) fn merged_context(&self, other: &BigInt) -> Result<Context, BigIntError> {
        Context::merge(&self.context, &other.context)
    }

    /// Radix of the digits
    #[inline]
    pub fn radix(&self) -> u32 {
        self.context.radix()
    }

    /// Maximum number of digits this value (and results computed from
    /// it) may hold
    #[inline]
    pub fn max_digits(&self) -> usize {
        self.context.max_digits()
    }

    #[inline]
    pub fn context(&self) -> &Context {
        &self.context
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits.len() == 1 && self.digits[0] == 0
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign.is_negative()
    }

    /// Number of digits (zero has one digit)
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.digits.len()
    }

    /// Iterate over digits, most significant first
    pub fn digits(&self) -> impl DoubleEndedIterator<Item=u32> + ExactSizeIterator + '_ {
        self.digits.iter_significant()
    }

    /// Absolute value
    pub fn abs(&self) -> BigInt {
        BigInt {
            sign: Sign::NonNegative,
            ..self.clone()
        }
    }

    /// Copy of value with a different digit limit
    ///
    /// Fails with TooManyDigits if the value does not fit in the new limit.
    pub fn with_max_digits(&self, max_digits: usize) -> Result<BigInt, BigIntError> {
        let ctx = self.context.with_max_digits(max_digits)?;
        if self.digit_count() > max_digits {
            return Err(BigIntError::TooManyDigits { count: self.digit_count(), max_digits });
        }
        Ok(BigInt {
            context: ctx,
            ..self.clone()
        })
    }

    /// Sum of self and rhs
    pub fn checked_add(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        arithmetic::addition::add_bigints(self, rhs)
    }

    /// Difference of self and rhs
    pub fn checked_sub(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        arithmetic::subtraction::sub_bigints(self, rhs)
    }

    /// Product of self and rhs
    pub fn checked_mul(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        arithmetic::multiplication::multiply_bigints(self, rhs)
    }

    /// Quotient of self and rhs, rounded towards negative infinity
    ///
    /// ```
    /// use radix_bigint::BigInt;
    ///
    /// let a = BigInt::from_str_radix("-7", 10, 10).unwrap();
    /// let b = BigInt::from_str_radix("2", 10, 10).unwrap();
    /// assert_eq!(a.checked_div_floor(&b).unwrap().to_string(), "-4");
    /// assert_eq!(a.checked_mod_floor(&b).unwrap().to_string(), "1");
    /// ```
    pub fn checked_div_floor(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        arithmetic::division::div_floor_bigints(self, rhs, QuotientDigitSearch::default())
    }

    /// Floor modulo: `self - self.div_floor(rhs) * rhs`, with the sign
    /// of rhs
    pub fn checked_mod_floor(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        arithmetic::modulo::mod_floor_bigints(self, rhs)
    }

    /// Floor quotient and modulo in one operation
    pub fn div_mod_floor(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        arithmetic::modulo::div_mod_floor_bigints(self, rhs, QuotientDigitSearch::default())
    }

    /// Quotient of self and rhs, rounded towards zero
    pub fn checked_div_trunc(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem_trunc(rhs).map(|(q, _)| q)
    }

    /// Remainder of truncating division, with the sign of self
    pub fn checked_rem_trunc(&self, rhs: &BigInt) -> Result<BigInt, BigIntError> {
        self.div_rem_trunc(rhs).map(|(_, r)| r)
    }

    /// Truncating quotient and remainder in one operation
    pub fn div_rem_trunc(&self, rhs: &BigInt) -> Result<(BigInt, BigInt), BigIntError> {
        self.div_rem_trunc_using(rhs, QuotientDigitSearch::default())
    }

    /// Truncating quotient and remainder, choosing how quotient digits
    /// are searched for
    pub fn div_rem_trunc_using(
        &self,
        rhs: &BigInt,
        search: QuotientDigitSearch,
    ) -> Result<(BigInt, BigInt), BigIntError> {
        arithmetic::division::div_rem_trunc_bigints(self, rhs, search)
    }

    /// Convert to i64, wrapping on overflow
    ///
    /// This is lossy for values outside the range of `i64`; use
    /// `ToPrimitive::to_i64` or [`BigInt::to_num_bigint`] for exact
    /// conversions.
    pub fn to_machine_integer(&self) -> i64 {
        let radix = i64::from(self.radix());
        let magnitude = self.digits().fold(0i64, |acc, d| {
            acc.wrapping_mul(radix).wrapping_add(i64::from(d))
        });
        if self.is_negative() { magnitude.wrapping_neg() } else { magnitude }
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod bigint_tests {
    use super::*;
    use crate::stdlib::string::ToString;
    use paste::paste;

    include!("lib.tests.rs");
}
