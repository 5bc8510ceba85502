// Tests of BigInt methods, included by lib.rs

fn parse(s: &str, radix: u32) -> BigInt {
    let ctx = Context::new(radix, 100).unwrap();
    BigInt::parse_with_context(s, &ctx).unwrap()
}


mod construction {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $radix:literal, $neg:literal, [$($d:literal),*] => $expected:literal) => {
            #[test]
            fn $name() {
                let n = BigInt::from_digits_radix($radix, 10, $neg, &[$($d),*]).unwrap();
                assert_eq!(n.to_string(), $expected);
            }
        };
        ($name:ident: $radix:literal, $neg:literal, [$($d:literal),*] => Err($err:expr)) => {
            #[test]
            fn $name() {
                let result = BigInt::from_digits_radix($radix, 4, $neg, &[$($d),*]);
                assert_eq!(result.unwrap_err(), $err);
            }
        };
    }

    impl_case!(case_b1011: 2, false, [1, 0, 1, 1] => "1011");
    impl_case!(case_leading_zeros: 10, false, [0, 0, 1, 2] => "12");
    impl_case!(case_all_zeros: 10, true, [0, 0, 0] => "0");
    impl_case!(case_empty_is_zero: 10, true, [] => "0");
    impl_case!(case_n_xa1f: 16, true, [10, 1, 15] => "-a1f");
    impl_case!(case_radix_1000: 1000, false, [1, 0, 999] => "1|0|999");

    impl_case!(case_radix_1: 1, false, [0] => Err(BigIntError::InvalidBase(1)));
    impl_case!(case_radix_0: 0, false, [0] => Err(BigIntError::InvalidBase(0)));
    impl_case!(case_digit_out_of_range: 10, false, [1, 10] => Err(BigIntError::DigitOutOfRange { digit: 10, radix: 10 }));
    impl_case!(case_too_many_digits: 10, false, [1, 2, 3, 4, 5] => Err(BigIntError::TooManyDigits { count: 5, max_digits: 4 }));
    impl_case!(case_too_many_with_zeros: 10, false, [0, 0, 0, 0, 5] => Err(BigIntError::TooManyDigits { count: 5, max_digits: 4 }));

    #[test]
    fn invalid_digit_count() {
        assert_eq!(
            BigInt::from_digits_radix(10, 0, false, &[1]).unwrap_err(),
            BigIntError::InvalidDigitCount(0)
        );
        assert_eq!(
            BigInt::from_str_radix("1", 10, MAX_DIGITS_CEILING + 1).unwrap_err(),
            BigIntError::InvalidDigitCount(MAX_DIGITS_CEILING + 1)
        );
    }

    #[test]
    fn from_str_radix_above_alphabet() {
        assert_eq!(BigInt::from_str_radix("1", 37, 10).unwrap_err(), BigIntError::InvalidBase(37));
    }

    #[test]
    fn normalization() {
        let n = parse("-000", 10);
        assert!(n.is_zero());
        assert!(!n.is_negative());
        assert_eq!(n.digit_count(), 1);
        assert_eq!(n.digits().collect::<Vec<_>>(), vec![0]);

        let n = parse("000120", 10);
        assert_eq!(n.digits().collect::<Vec<_>>(), vec![1, 2, 0]);
    }

    #[test]
    fn zero_and_one() {
        let ctx = Context::new(7, 3).unwrap();
        assert_eq!(BigInt::zero(&ctx).to_radix_string(), "0 (base 7)");
        assert_eq!(BigInt::one(&ctx).to_radix_string(), "1 (base 7)");
        assert_eq!(BigInt::one(&ctx).max_digits(), 3);
    }

    #[test]
    fn with_max_digits() {
        let n = parse("-1234", 10);
        assert_eq!(n.with_max_digits(4).unwrap().max_digits(), 4);
        assert_eq!(n.with_max_digits(3).unwrap_err(), BigIntError::TooManyDigits { count: 4, max_digits: 3 });
        assert_eq!(n.with_max_digits(0).unwrap_err(), BigIntError::InvalidDigitCount(0));
    }

    #[test]
    fn abs() {
        assert_eq!(parse("-a1f", 16).abs(), parse("a1f", 16));
        assert_eq!(parse("a1f", 16).abs(), parse("a1f", 16));
    }
}


mod scenarios {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $radix:literal ~ $a:literal $op:tt $b:literal => $expected:literal) => {
            paste! {
                #[test]
                fn [< $name _ $radix >]() {
                    let a = parse($a, $radix);
                    let b = parse($b, $radix);
                    let result = impl_case!(@op a $op b).unwrap();
                    assert_eq!(result.to_string(), $expected);
                }
            }
        };
        (@op $a:ident + $b:ident) => { $a.checked_add(&$b) };
        (@op $a:ident - $b:ident) => { $a.checked_sub(&$b) };
        (@op $a:ident * $b:ident) => { $a.checked_mul(&$b) };
        (@op $a:ident / $b:ident) => { $a.checked_div_floor(&$b) };
        (@op $a:ident % $b:ident) => { $a.checked_mod_floor(&$b) };
    }

    impl_case!(add: 10 ~ "123" + "45" => "168");
    impl_case!(sub: 10 ~ "123" - "45" => "78");
    impl_case!(sub_negative: 10 ~ "45" - "123" => "-78");
    impl_case!(mul: 10 ~ "123" * "45" => "5535");
    impl_case!(div: 10 ~ "123" / "45" => "2");
    impl_case!(modulo: 10 ~ "123" % "45" => "33");

    impl_case!(add: 16 ~ "a1f" + "2b" => "a4a");
    impl_case!(sub: 16 ~ "a1f" - "2b" => "9f4");
    impl_case!(mul: 16 ~ "a1f" * "2b" => "1b335");
    impl_case!(div: 16 ~ "a1f" / "2b" => "3c");

    impl_case!(add: 2 ~ "1011" + "110" => "10001");

    impl_case!(div_negative: 10 ~ "-7" / "2" => "-4");
    impl_case!(mod_negative: 10 ~ "-7" % "2" => "1");

    #[test]
    fn base_2_digits() {
        let ctx = Context::new(2, 100).unwrap();
        let a = BigInt::from_digits(Sign::NonNegative, &[1, 0, 1, 1], &ctx).unwrap();
        let b = BigInt::from_digits(Sign::NonNegative, &[1, 1, 0], &ctx).unwrap();
        let sum = a.checked_add(&b).unwrap();
        assert_eq!(sum.digits().collect::<Vec<_>>(), vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn div_mod_floor() {
        let (q, m) = parse("-7", 10).div_mod_floor(&parse("2", 10)).unwrap();
        assert_eq!((q.to_string(), m.to_string()), ("-4".to_string(), "1".to_string()));
    }

    #[test]
    fn div_rem_trunc() {
        let (q, r) = parse("-7", 10).div_rem_trunc(&parse("2", 10)).unwrap();
        assert_eq!((q.to_string(), r.to_string()), ("-3".to_string(), "-1".to_string()));
        assert_eq!(parse("7", 10).checked_div_trunc(&parse("-2", 10)).unwrap(), parse("-3", 10));
        assert_eq!(parse("7", 10).checked_rem_trunc(&parse("-2", 10)).unwrap(), parse("1", 10));
    }

    #[test]
    fn div_rem_trunc_linear_search() {
        let a = parse("-a1f", 16);
        let b = parse("2b", 16);
        let binary = a.div_rem_trunc_using(&b, QuotientDigitSearch::Binary).unwrap();
        let linear = a.div_rem_trunc_using(&b, QuotientDigitSearch::Linear).unwrap();
        assert_eq!(binary, linear);
        assert_eq!(binary.0, parse("-3c", 16));
        assert_eq!(binary.1, parse("-b", 16));
    }
}


mod errors {
    use super::*;

    fn with_max(s: &str, max_digits: usize) -> BigInt {
        BigInt::from_str_radix(s, 10, max_digits).unwrap()
    }

    #[test]
    fn division_by_zero() {
        let a = parse("12", 10);
        let zero = parse("0", 10);
        assert_eq!(a.checked_div_floor(&zero), Err(BigIntError::DivisionByZero));
        assert_eq!(a.checked_mod_floor(&zero), Err(BigIntError::DivisionByZero));
        assert_eq!(a.div_rem_trunc(&zero), Err(BigIntError::DivisionByZero));
        assert_eq!(zero.checked_div_floor(&zero), Err(BigIntError::DivisionByZero));
    }

    #[test]
    fn overflow_add() {
        let a = with_max("999", 3);
        let one = with_max("1", 3);
        assert_eq!(a.checked_add(&one), Err(BigIntError::Overflow { max_digits: 3 }));
        assert_eq!(a.checked_sub(&one).unwrap().to_string(), "998");
        assert_eq!((-&a).checked_sub(&one), Err(BigIntError::Overflow { max_digits: 3 }));
    }

    #[test]
    fn exactly_max_digits() {
        let a = with_max("998", 3);
        let one = with_max("1", 3);
        assert_eq!(a.checked_add(&one).unwrap().to_string(), "999");
        assert_eq!(with_max("31", 3).checked_mul(&with_max("32", 3)).unwrap().to_string(), "992");
        assert_eq!(with_max("32", 3).checked_mul(&with_max("32", 3)), Err(BigIntError::Overflow { max_digits: 3 }));
    }

    #[test]
    fn merged_digit_limit() {
        let a = with_max("999", 4);
        let b = with_max("1", 3);
        assert_eq!(a.checked_add(&b), Err(BigIntError::Overflow { max_digits: 3 }));
        assert_eq!(a.checked_sub(&b).unwrap().max_digits(), 3);
    }

    #[test]
    fn base_mismatch() {
        let a = parse("10", 10);
        let b = parse("10", 16);
        let expected = Err(BigIntError::BaseMismatch(10, 16));
        assert_eq!(a.checked_add(&b), expected);
        assert_eq!(a.checked_sub(&b), expected);
        assert_eq!(a.checked_mul(&b), expected);
        assert_eq!(a.checked_div_floor(&b), expected);
        assert_eq!(a.checked_mod_floor(&b), expected);
        assert_eq!(a.try_cmp(&b), Err(BigIntError::BaseMismatch(10, 16)));
    }

    #[test]
    fn error_display() {
        assert_eq!(BigIntError::Overflow { max_digits: 3 }.to_string(), "result exceeds the digit limit 3");
        assert_eq!(BigIntError::BaseMismatch(10, 16).to_string(), "radix mismatch: 10 | 16");
        assert_eq!(BigIntError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            BigIntError::DigitOutOfRange { digit: 10, radix: 2 }.to_string(),
            "digit 10 is not valid in radix 2"
        );
    }
}


mod to_machine_integer {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal ~ $radix:literal => $expected:expr) => {
            #[test]
            fn $name() {
                assert_eq!(parse($input, $radix).to_machine_integer(), $expected);
            }
        };
    }

    impl_case!(case_0: "0" ~ 10 => 0);
    impl_case!(case_n78: "-78" ~ 10 => -78);
    impl_case!(case_a1f: "a1f" ~ 16 => 2591);
    impl_case!(case_b1011: "1011" ~ 2 => 11);
    impl_case!(case_i64_max: "9223372036854775807" ~ 10 => i64::MAX);
    impl_case!(case_i64_min: "-9223372036854775808" ~ 10 => i64::MIN);
    // wraps
    impl_case!(case_2_pow_64: "10000000000000000" ~ 16 => 0);
    impl_case!(case_i64_max_plus_1: "9223372036854775808" ~ 10 => i64::MIN);
}


mod round_trip {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal ~ $radix:literal) => {
            #[test]
            fn $name() {
                let n = parse($input, $radix);
                let s = n.to_radix_string();
                let parsed: BigInt = s.parse().unwrap();
                assert_eq!(parsed, n);
                assert_eq!(parsed.radix(), $radix);
                assert_eq!(parsed.to_radix_string(), s);
            }
        };
    }

    impl_case!(case_0: "0" ~ 10);
    impl_case!(case_n123: "-123" ~ 10);
    impl_case!(case_a1f: "a1f" ~ 16);
    impl_case!(case_b1011: "-1011" ~ 2);
    impl_case!(case_zz: "zz" ~ 36);
    impl_case!(case_radix_37: "36|0" ~ 37);
    impl_case!(case_radix_1000: "-1|0|999" ~ 1000);
}
