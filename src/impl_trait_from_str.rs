use crate::*;
use stdlib::str::FromStr;

impl FromStr for BigInt {
    type Err = BigIntError;

    /// Parse `["-"] digits [" (base " B ")"]`
    ///
    /// Without a radix suffix the default radix is used. The string
    /// carries no digit limit, so the value is read with the ceiling
    /// `MAX_DIGITS_CEILING`.
    #[inline]
    fn from_str(s: &str) -> Result<BigInt, BigIntError> {
        let (digits, radix) = parsing::split_radix_suffix(s)?;
        let ctx = Context::default().with_max_digits(MAX_DIGITS_CEILING)?;
        let ctx = match radix {
            Some(radix) => ctx.with_radix(radix)?,
            None => ctx,
        };
        parsing::parse_bigint(digits, &ctx)
    }
}






#[cfg(test)]
mod test_digit_limit {
    use super::*;
    use stdlib::iter;
    use stdlib::string::String;
    use stdlib::Vec;

    #[test]
    fn parsed_value_reads_up_to_ceiling() {
        let s: String = iter::repeat('7').take(MAX_DIGITS_CEILING).collect();
        let n = BigInt::from_str(&s).unwrap();
        assert_eq!(n.digit_count(), MAX_DIGITS_CEILING);
        assert_eq!(n.context().max_digits(), MAX_DIGITS_CEILING);
    }

    #[test]
    fn parsed_value_above_ceiling() {
        let s: String = iter::repeat('7').take(MAX_DIGITS_CEILING + 1).collect();
        assert_eq!(
            BigInt::from_str(&s).unwrap_err(),
            BigIntError::TooManyDigits { count: MAX_DIGITS_CEILING + 1, max_digits: MAX_DIGITS_CEILING }
        );
    }

    #[test]
    fn radix_string_of_i128_max_in_radix_2() {
        let ctx = Context::new(2, 200).unwrap();
        let n = BigInt::from_i128(i128::MAX, &ctx).unwrap();
        assert_eq!(n.digit_count(), 127);

        let parsed: BigInt = n.to_radix_string().parse().unwrap();
        assert_eq!(parsed.radix(), 2);
        assert_eq!(parsed, n);
    }

    #[test]
    fn radix_string_of_300_digits() {
        let ctx = Context::new(10, 300).unwrap();
        let digits: Vec<u32> = (0..300).map(|i| (i * 7 + 1) % 10).collect();
        let n = BigInt::from_digits(Sign::Negative, &digits, &ctx).unwrap();

        let parsed: BigInt = n.to_radix_string().parse().unwrap();
        assert_eq!(parsed, n);
        assert_eq!(parsed.to_string(), n.to_string());
    }
}
