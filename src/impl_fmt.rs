//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use crate::parsing::{DIGIT_SEPARATOR, RADIX_SUFFIX_PREFIX};
use stdlib::fmt::Write;
use stdlib::string::String;


impl fmt::Display for BigInt {
    /// Digits most significant first, `0-9a-z` up to radix 36 and
    /// `|`-separated decimal values above
    ///
    /// The alternate flag (`{:#}`) appends the radix: `"a1f (base 16)"`.
    ///
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut buf = String::with_capacity(self.digit_count() + 12);
        write_magnitude(self, &mut buf)?;
        if f.alternate() {
            write_radix_suffix(self.radix(), &mut buf)?;
        }
        f.pad_integral(!self.is_negative(), "", &buf)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt(\"{:#}\")", self)
    }
}

impl BigInt {
    /// String with radix suffix, parsable by `FromStr`
    ///
    /// ```
    /// use radix_bigint::BigInt;
    ///
    /// let n = BigInt::from_str_radix("-a1f", 16, 10).unwrap();
    /// assert_eq!(n.to_radix_string(), "-a1f (base 16)");
    /// assert_eq!(n.to_radix_string().parse::<BigInt>().unwrap(), n);
    /// ```
    pub fn to_radix_string(&self) -> String {
        format!("{:#}", self)
    }
}


/// Write unsigned digits of n
fn write_magnitude<W: Write>(n: &BigInt, w: &mut W) -> fmt::Result {
    let radix = n.context.bigdigit_radix();

    if radix.fits_alphabet() {
        for d in n.digits() {
            w.write_char(radix.digit_to_char(d).ok_or(fmt::Error)?)?;
        }
        return Ok(());
    }

    let mut digits = n.digits();
    if let Some(d) = digits.next() {
        write!(w, "{}", d)?;
    }
    for d in digits {
        write!(w, "{}{}", DIGIT_SEPARATOR, d)?;
    }
    Ok(())
}

#[inline]
fn write_radix_suffix<W: Write>(radix: u32, w: &mut W) -> fmt::Result {
    write!(w, "{}{})", RADIX_SUFFIX_PREFIX, radix)
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::string::ToString;
    use paste::paste;

    fn parse(s: &str, radix: u32) -> BigInt {
        let ctx = Context::new(radix, 30).unwrap();
        BigInt::parse_with_context(s, &ctx).unwrap()
    }

    macro_rules! impl_case {
        ($name:ident: $input:literal ~ $radix:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< $name _display >]() {
                    let radix: u32 = $radix;
                    let n = parse($input, radix);
                    assert_eq!(n.to_string(), $expected);
                    assert_eq!(format!("{:#}", n), format!("{} (base {})", $expected, radix));
                }
            }
        };
        ($name:ident: $input:literal ~ $radix:literal; $fmt:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< $name _fmt >]() {
                    let n = parse($input, $radix);
                    assert_eq!(format!($fmt, n), $expected);
                }
            }
        };
    }

    impl_case!(case_0: "0" ~ 10 => "0");
    impl_case!(case_n0: "-0" ~ 10 => "0");
    impl_case!(case_00123: "00123" ~ 10 => "123");
    impl_case!(case_n78: "-78" ~ 10 => "-78");
    impl_case!(case_a1f: "A1F" ~ 16 => "a1f");
    impl_case!(case_nzz: "-zz" ~ 36 => "-zz");
    impl_case!(case_b10001: "10001" ~ 2 => "10001");
    impl_case!(case_radix_1000: "-12|0|999" ~ 1000 => "-12|0|999");
    impl_case!(case_radix_37_single: "36" ~ 37 => "36");
    impl_case!(case_radix_u32_max: "4294967294|0" ~ 4294967295u32 => "4294967294|0");

    impl_case!(case_width: "a1f" ~ 16; "{:>6}" => "   a1f");
    impl_case!(case_zero_pad: "-a1f" ~ 16; "{:06}" => "-00a1f");
    impl_case!(case_plus: "123" ~ 10; "{:+}" => "+123");
    impl_case!(case_alt_width: "-5" ~ 7; "{:<#12}|" => "-5 (base 7) |");

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", parse("-a1f", 16)), "BigInt(\"-a1f (base 16)\")");
        assert_eq!(format!("{:?}", parse("1|2", 60)), "BigInt(\"1|2 (base 60)\")");
    }

    #[test]
    fn radix_string_round_trip() {
        for &(s, radix) in [("-a1f", 16), ("0", 2), ("1|0|999", 1000), ("zz", 36)].iter() {
            let n = parse(s, radix);
            let parsed: BigInt = n.to_radix_string().parse().unwrap();
            assert_eq!(parsed, n);
            assert_eq!(parsed.radix(), radix);
        }
    }
}
