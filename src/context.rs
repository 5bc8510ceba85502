// \file src/context.rs

//! A `Context` object is the set of parameters shared by every BigInt
//! taking part in an operation: the radix of the digits, and the
//! maximum number of digits a value may hold.
//!
//! Each BigInt carries its own context; binary operations require equal
//! radixes and follow the more 'restricted' digit limit of the two.

use crate::stdlib::cmp;
use crate::bigdigit::Radix;
use crate::BigIntError;


// pub const DEFAULT_MAX_DIGITS: usize = ${RUST_RADIX_BIGINT_DEFAULT_MAX_DIGITS} or 100;
include!(concat!(env!("OUT_DIR"), "/default_max_digits.rs"));

// pub const MAX_DIGITS_CEILING: usize = ${RUST_RADIX_BIGINT_MAX_DIGITS_CEILING} or 750;
include!(concat!(env!("OUT_DIR"), "/max_digits_ceiling.rs"));

/// Radix used when none is specified
pub const DEFAULT_RADIX: u32 = 10;


/// Radix and digit limit of BigInt values
///
/// ```
/// use radix_bigint::Context;
///
/// let ctx = Context::new(16, 32).unwrap();
/// assert_eq!(ctx.radix(), 16);
/// assert_eq!(ctx.max_digits(), 32);
///
/// assert!(Context::new(1, 32).is_err());
/// assert!(Context::new(16, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    radix: Radix,
    max_digits: usize,
}

impl Default for Context {
    fn default() -> Context {
        Context {
            radix: Radix::from_const(DEFAULT_RADIX),
            max_digits: default_max_digits(),
        }
    }
}

impl Context {
    /// Create context with given radix and digit limit
    ///
    /// The radix must be at least 2, the digit limit must be within
    /// `1..=MAX_DIGITS_CEILING`.
    pub fn new(radix: u32, max_digits: usize) -> Result<Context, BigIntError> {
        Ok(Context {
            radix: Radix::new(radix)?,
            max_digits: validate_max_digits(max_digits)?,
        })
    }

    /// Return copy of context with new radix
    pub fn with_radix(self, radix: u32) -> Result<Context, BigIntError> {
        Ok(Context {
            radix: Radix::new(radix)?,
            ..self
        })
    }

    /// Return copy of context with new digit limit
    pub fn with_max_digits(self, max_digits: usize) -> Result<Context, BigIntError> {
        Ok(Context {
            max_digits: validate_max_digits(max_digits)?,
            ..self
        })
    }

    /// Radix of the digits
    pub fn radix(&self) -> u32 {
        self.radix.value()
    }

    /// Maximum number of digits a value may hold
    pub fn max_digits(&self) -> usize {
        self.max_digits
    }

    pub(crate) fn bigdigit_radix(&self) -> Radix {
        self.radix
    }

    /// Context of the result of a binary operation
    ///
    /// Radixes must match; the smaller digit limit is used.
    pub fn merge(lhs: &Context, rhs: &Context) -> Result<Context, BigIntError> {
        if lhs.radix != rhs.radix {
            return Err(BigIntError::BaseMismatch(lhs.radix(), rhs.radix()));
        }
        Ok(Context {
            radix: lhs.radix,
            max_digits: cmp::min(lhs.max_digits, rhs.max_digits),
        })
    }
}

fn validate_max_digits(max_digits: usize) -> Result<usize, BigIntError> {
    if max_digits < 1 || max_digits > MAX_DIGITS_CEILING {
        return Err(BigIntError::InvalidDigitCount(max_digits));
    }
    Ok(max_digits)
}

/// Default digit limit, clamped to the ceiling
fn default_max_digits() -> usize {
    cmp::min(DEFAULT_MAX_DIGITS, MAX_DIGITS_CEILING)
}
