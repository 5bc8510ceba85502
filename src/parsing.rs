//! Routines for parsing strings into BigInts

use crate::*;
use crate::bigdigit::{BigDigit, Radix};
use stdlib::Vec;


/// Separator between digit values written in decimal
pub(crate) const DIGIT_SEPARATOR: char = '|';

/// Text preceding the radix in the radix suffix " (base 16)"
pub(crate) const RADIX_SUFFIX_PREFIX: &str = " (base ";


/// Parse optionally negative string of digits in the radix of `ctx`
///
/// Digits are alphabet characters (radix up to 36), or decimal values
/// separated by `|` (any radix). Above radix 36 a string without
/// separators is a single digit value.
///
pub(crate) fn parse_bigint(s: &str, ctx: &Context) -> Result<BigInt, BigIntError> {
    let (sign, digit_str) = match s.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::NonNegative, s),
    };

    if digit_str.is_empty() {
        return Err(BigIntError::Empty);
    }

    let radix = ctx.bigdigit_radix();
    let digits = if radix.fits_alphabet() && !digit_str.contains(DIGIT_SEPARATOR) {
        parse_alphabet_digits(digit_str, radix)?
    } else {
        parse_separated_digits(digit_str, radix)?
    };

    BigInt::from_digits(sign, &digits, ctx)
}

/// Convert alphabet characters to digits, most significant first
fn parse_alphabet_digits(s: &str, radix: Radix) -> Result<Vec<BigDigit>, BigIntError> {
    debug_assert!(radix.fits_alphabet());

    s.chars()
     .map(|c| {
         match c.to_digit(MAX_ALPHABET_RADIX) {
             None => Err(BigIntError::InvalidCharacter(c)),
             Some(d) if d >= radix.value() => {
                 Err(BigIntError::DigitOutOfRange { digit: d.into(), radix: radix.value() })
             }
             Some(d) => Ok(d),
         }
     })
     .collect()
}

/// Convert `|`-separated decimal values to digits, most significant first
fn parse_separated_digits(s: &str, radix: Radix) -> Result<Vec<BigDigit>, BigIntError> {
    s.split(DIGIT_SEPARATOR)
     .map(|field| parse_digit_value(field, radix))
     .collect()
}

fn parse_digit_value(field: &str, radix: Radix) -> Result<BigDigit, BigIntError> {
    if field.is_empty() {
        return Err(BigIntError::InvalidCharacter(DIGIT_SEPARATOR));
    }
    if let Some(c) = field.chars().find(|c| !c.is_ascii_digit()) {
        return Err(BigIntError::InvalidCharacter(c));
    }

    // only decimal characters remain: a parse failure is an overflow of u64
    let value = field.parse::<u64>().unwrap_or(u64::MAX);
    if value >= radix.wide() {
        return Err(BigIntError::DigitOutOfRange { digit: value, radix: radix.value() });
    }
    Ok(value as BigDigit)
}

/// Split a trailing radix suffix " (base B)" from the string
///
/// Returns the remaining string and the radix, if there was a suffix.
///
pub(crate) fn split_radix_suffix(s: &str) -> Result<(&str, Option<u32>), BigIntError> {
    let body = match s.strip_suffix(')') {
        Some(body) => body,
        None => return Ok((s, None)),
    };

    let loc = body.rfind(RADIX_SUFFIX_PREFIX).ok_or(BigIntError::InvalidCharacter(')'))?;
    let radix_str = &body[loc + RADIX_SUFFIX_PREFIX.len()..];

    if let Some(c) = radix_str.chars().find(|c| !c.is_ascii_digit()) {
        return Err(BigIntError::InvalidCharacter(c));
    }
    if radix_str.is_empty() {
        return Err(BigIntError::InvalidCharacter(')'));
    }
    let radix = radix_str.parse::<u32>().map_err(|_| BigIntError::RadixOutOfRange(radix_str.into()))?;

    Ok((&body[..loc], Some(radix)))
}
