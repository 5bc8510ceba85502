//! Radix-dependant bigdigits
//!
//! A bigdigit is a single positional digit of a BigInt, stored in
//! a machine integer wide enough to hold any digit of a supported
//! radix. Products of two bigdigits (plus carries) fit in the
//! double-wide type.
//!

pub(crate) mod radix;
pub(crate) mod digitvec;

pub(crate) use self::radix::Radix;
pub(crate) use self::digitvec::DigitVec;

/// Storage type of a single digit
pub(crate) type BigDigit = u32;

/// Double wide unsigned type (capable of storing product of two BigDigits
/// plus two carries)
pub(crate) type BigDigitDouble = u64;
