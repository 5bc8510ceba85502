// Property tests to be included by lib.rs (if enabled)
//
// Results are checked against num_bigint::BigInt.

fn in_context(n: i128, radix: u32) -> BigInt {
    let ctx = Context::new(radix, 200).unwrap();
    BigInt::from_i128(n, &ctx).unwrap()
}

fn oracle(n: i128) -> num_bigint::BigInt {
    num_bigint::BigInt::from(n)
}


mod arithmetic {
    use super::*;

    proptest! {
        #[test]
        fn add_matches_oracle(a: i64, b: i64, radix in 2u32..=1000) {
            let x = in_context(a.into(), radix);
            let y = in_context(b.into(), radix);
            let sum = x.checked_add(&y).unwrap();
            prop_assert_eq!(sum.to_num_bigint(), oracle(a.into()) + oracle(b.into()));
            prop_assert_eq!(&sum, &y.checked_add(&x).unwrap());
        }

        #[test]
        fn sub_matches_oracle(a: i64, b: i64, radix in 2u32..=1000) {
            let x = in_context(a.into(), radix);
            let y = in_context(b.into(), radix);
            let diff = x.checked_sub(&y).unwrap();
            prop_assert_eq!(diff.to_num_bigint(), oracle(a.into()) - oracle(b.into()));
            prop_assert!(x.checked_sub(&x).unwrap().is_zero());
        }

        #[test]
        fn mul_matches_oracle(a: i64, b: i64, radix in 2u32..=1000) {
            let x = in_context(a.into(), radix);
            let y = in_context(b.into(), radix);
            let prod = x.checked_mul(&y).unwrap();
            prop_assert_eq!(prod.to_num_bigint(), oracle(a.into()) * oracle(b.into()));
            prop_assert_eq!(&prod, &y.checked_mul(&x).unwrap());
        }

        #[test]
        fn div_mod_floor_matches_oracle(a: i128, b: i64, radix in 2u32..=1000) {
            prop_assume!(b != 0);
            let x = in_context(a, radix);
            let y = in_context(b.into(), radix);
            let (q, m) = x.div_mod_floor(&y).unwrap();

            let (oa, ob) = (oracle(a), oracle(b.into()));
            prop_assert_eq!(q.to_num_bigint(), oa.div_floor(&ob));
            prop_assert_eq!(m.to_num_bigint(), oa.mod_floor(&ob));

            // (a div b) * b + (a mod b) == a
            let restored = q.checked_mul(&y).unwrap().checked_add(&m).unwrap();
            prop_assert_eq!(restored, x);
        }

        #[test]
        fn div_rem_trunc_matches_oracle(a: i128, b: i64, radix in 2u32..=1000) {
            prop_assume!(b != 0);
            let x = in_context(a, radix);
            let y = in_context(b.into(), radix);
            let (q, r) = x.div_rem_trunc(&y).unwrap();

            let (oq, or) = oracle(a).div_rem(&oracle(b.into()));
            prop_assert_eq!(q.to_num_bigint(), oq);
            prop_assert_eq!(r.to_num_bigint(), or);
        }

        #[test]
        fn quotient_digit_search_agrees(a: i64, b: i32, radix in 2u32..=300) {
            prop_assume!(b != 0);
            let x = in_context(a.into(), radix);
            let y = in_context(b.into(), radix);
            let binary = x.div_rem_trunc_using(&y, QuotientDigitSearch::Binary).unwrap();
            let linear = x.div_rem_trunc_using(&y, QuotientDigitSearch::Linear).unwrap();
            prop_assert_eq!(binary, linear);
        }

        #[test]
        fn operators_match_checked(a: i64, b: i64) {
            prop_assume!(b != 0);
            let x = in_context(a.into(), 10);
            let y = in_context(b.into(), 10);
            prop_assert_eq!(&x + &y, x.checked_add(&y).unwrap());
            prop_assert_eq!(&x - &y, x.checked_sub(&y).unwrap());
            prop_assert_eq!(&x * &y, x.checked_mul(&y).unwrap());
            prop_assert_eq!(&x / &y, x.checked_div_floor(&y).unwrap());
            prop_assert_eq!(&x % &y, x.checked_mod_floor(&y).unwrap());
        }
    }
}


mod ordering {
    use super::*;

    proptest! {
        #[test]
        fn cmp_matches_oracle(a: i128, b: i128, radix in 2u32..=1000) {
            let x = in_context(a, radix);
            let y = in_context(b, radix);
            prop_assert_eq!(x.try_cmp(&y).unwrap(), a.cmp(&b));
            prop_assert_eq!(x.partial_cmp(&y), Some(a.cmp(&b)));
            prop_assert_eq!(x == y, a == b);
        }
    }
}


mod conversion {
    use super::*;

    proptest! {
        #[test]
        fn radix_string_round_trip(n: i128, radix in 2u32..=5000) {
            let x = in_context(n, radix);
            let parsed: BigInt = x.to_radix_string().parse().unwrap();
            prop_assert_eq!(parsed.radix(), radix);
            prop_assert_eq!(&parsed, &x);
        }

        #[test]
        fn alphabet_string_matches_oracle(n: i128, radix in 2u32..=36) {
            let x = in_context(n, radix);
            prop_assert_eq!(x.to_string(), oracle(n).to_str_radix(radix));
        }

        #[test]
        fn num_bigint_round_trip(n: i128, radix in 2u32..=u32::MAX) {
            let x = in_context(n, radix);
            prop_assert_eq!(x.to_num_bigint(), oracle(n));
            let ctx = Context::new(radix, 200).unwrap();
            prop_assert_eq!(BigInt::from_num_bigint(&oracle(n), &ctx).unwrap(), x);
        }

        #[test]
        fn machine_integer(n: i64, radix in 2u32..=1000) {
            prop_assert_eq!(in_context(n.into(), radix).to_machine_integer(), n);
        }
    }
}


mod long_operands {
    use super::*;
    use crate::stdlib::Vec;

    /// Radix, digit limit, and two digit vectors no longer than the limit
    fn operands(max_digits: usize) -> impl Strategy<Value=(u32, usize, Vec<u32>, Vec<u32>)> {
        (2u32..=1000, 1usize..=max_digits).prop_flat_map(|(radix, max_digits)| {
            let a = prop::collection::vec(0..radix, 1..=max_digits);
            let b = prop::collection::vec(0..radix, 1..=max_digits);
            (Just(radix), Just(max_digits), a, b)
        })
    }

    fn from_digit_values(negative: bool, digits: &[u32], ctx: &Context) -> BigInt {
        BigInt::from_digits(Sign::from_negative(negative), digits, ctx).unwrap()
    }

    fn digits_oracle(negative: bool, digits: &[u32], radix: u32) -> num_bigint::BigInt {
        let magnitude = digits.iter().fold(num_bigint::BigInt::from(0u8), |acc, &d| acc * radix + d);
        if negative { -magnitude } else { magnitude }
    }

    /// Number of radix digits in the magnitude of n
    fn oracle_digit_count(n: &num_bigint::BigInt, radix: u32) -> usize {
        let radix = num_bigint::BigUint::from(radix);
        let mut m = n.magnitude().clone();
        let mut count = 1;
        while m >= radix {
            m /= &radix;
            count += 1;
        }
        count
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 64, ..Default::default() })]

        #[test]
        fn add_overflows_past_max_digits(
            (radix, max_digits, a, b) in operands(MAX_DIGITS_CEILING),
            a_neg in any::<bool>(),
            b_neg in any::<bool>()
        ) {
            let ctx = Context::new(radix, max_digits).unwrap();
            let x = from_digit_values(a_neg, &a, &ctx);
            let y = from_digit_values(b_neg, &b, &ctx);
            let expected = digits_oracle(a_neg, &a, radix) + digits_oracle(b_neg, &b, radix);

            match x.checked_add(&y) {
                Ok(sum) => {
                    prop_assert!(oracle_digit_count(&expected, radix) <= max_digits);
                    prop_assert_eq!(sum.to_num_bigint(), expected);
                }
                Err(err) => {
                    prop_assert!(oracle_digit_count(&expected, radix) > max_digits);
                    prop_assert_eq!(err, BigIntError::Overflow { max_digits });
                }
            }
        }

        #[test]
        fn mul_overflows_past_max_digits(
            (radix, max_digits, a, b) in operands(300),
            a_neg in any::<bool>(),
            b_neg in any::<bool>()
        ) {
            let ctx = Context::new(radix, max_digits).unwrap();
            let x = from_digit_values(a_neg, &a, &ctx);
            let y = from_digit_values(b_neg, &b, &ctx);
            let expected = digits_oracle(a_neg, &a, radix) * digits_oracle(b_neg, &b, radix);

            match x.checked_mul(&y) {
                Ok(prod) => {
                    prop_assert!(oracle_digit_count(&expected, radix) <= max_digits);
                    prop_assert_eq!(prod.to_num_bigint(), expected);
                }
                Err(err) => {
                    prop_assert!(oracle_digit_count(&expected, radix) > max_digits);
                    prop_assert_eq!(err, BigIntError::Overflow { max_digits });
                }
            }
        }

        #[test]
        fn div_mod_floor_matches_oracle(
            (radix, max_digits, a, b) in operands(300),
            a_neg in any::<bool>(),
            b_neg in any::<bool>()
        ) {
            prop_assume!(b.iter().any(|&d| d != 0));
            let ctx = Context::new(radix, max_digits).unwrap();
            let x = from_digit_values(a_neg, &a, &ctx);
            let y = from_digit_values(b_neg, &b, &ctx);
            let (q, m) = x.div_mod_floor(&y).unwrap();

            let (oa, ob) = (digits_oracle(a_neg, &a, radix), digits_oracle(b_neg, &b, radix));
            prop_assert_eq!(q.to_num_bigint(), oa.div_floor(&ob));
            prop_assert_eq!(m.to_num_bigint(), oa.mod_floor(&ob));

            // (a div b) * b + (a mod b) == a, with room for the product
            let widen = |n: &BigInt| n.with_max_digits(MAX_DIGITS_CEILING).unwrap();
            let restored = widen(&q).checked_mul(&widen(&y)).unwrap()
                                    .checked_add(&widen(&m)).unwrap();
            prop_assert_eq!(restored, x);
        }

        #[test]
        fn radix_string_round_trip(
            (radix, max_digits, a, _b) in operands(MAX_DIGITS_CEILING),
            negative in any::<bool>()
        ) {
            let ctx = Context::new(radix, max_digits).unwrap();
            let x = from_digit_values(negative, &a, &ctx);
            let parsed: BigInt = x.to_radix_string().parse().unwrap();
            prop_assert_eq!(parsed.radix(), radix);
            prop_assert_eq!(&parsed, &x);
        }
    }
}
