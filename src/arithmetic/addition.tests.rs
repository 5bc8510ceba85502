// Tests of magnitude addition, included by addition.rs

macro_rules! impl_case {
    ($name:ident: $radix:literal ~ [$($a:literal),*] + [$($b:literal),*] == [$($c:literal),*]) => {
        impl_case!($name: $radix ~ [$($a),*] + [$($b),*] == [$($c),*]; max=100);
    };
    ($name:ident: $radix:literal ~ [$($a:literal),*] + [$($b:literal),*] == [$($c:literal),*]; max=$max:literal) => {
        #[test]
        fn $name() {
            let radix = Radix::new($radix).unwrap();
            let a: &[BigDigit] = &[$($a),*];
            let b: &[BigDigit] = &[$($b),*];
            let expected: &[BigDigit] = &[$($c),*];

            let sum = add_magnitudes(a, b, radix, $max).unwrap();
            assert_eq!(sum.as_ref(), expected);

            let commutes = add_magnitudes(b, a, radix, $max).unwrap();
            assert_eq!(commutes.as_ref(), expected);
        }
    };
}

impl_case!(case_0_0: 10 ~ [0] + [0] == [0]);
impl_case!(case_10_1: 10 ~ [0, 1] + [1] == [1, 1]);
impl_case!(case_999_1: 10 ~ [9, 9, 9] + [1] == [0, 0, 0, 1]);
impl_case!(case_123_45: 10 ~ [3, 2, 1] + [5, 4] == [8, 6, 1]);
impl_case!(case_b1011_b110: 2 ~ [1, 1, 0, 1] + [0, 1, 1] == [1, 0, 0, 0, 1]);
impl_case!(case_xa1f_x2b: 16 ~ [15, 1, 10] + [11, 2] == [10, 4, 10]);
impl_case!(case_xff_x1: 16 ~ [15, 15] + [1] == [0, 0, 1]);
impl_case!(case_exactly_max_digits: 10 ~ [9, 9, 8] + [1] == [0, 0, 9]; max=3);
impl_case!(case_radix_1000: 1000 ~ [999, 999] + [1] == [0, 0, 1]);

#[test]
fn carry_past_max_digits_overflows() {
    let radix = Radix::new(10).unwrap();
    let result = add_magnitudes(&[9, 9, 9], &[1], radix, 3);
    assert_eq!(result, Err(BigIntError::Overflow { max_digits: 3 }));
}

mod signed {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $a_sign:ident [$($a:literal),*] + $b_sign:ident [$($b:literal),*] == $c_sign:ident [$($c:literal),*]) => {
            #[test]
            fn $name() {
                let radix = Radix::new(10).unwrap();
                let a: &[BigDigit] = &[$($a),*];
                let b: &[BigDigit] = &[$($b),*];
                let expected: &[BigDigit] = &[$($c),*];

                let (sign, sum) = add_signed_magnitudes(Sign::$a_sign, a, Sign::$b_sign, b, radix, 100).unwrap();
                assert_eq!(sign, Sign::$c_sign);
                assert_eq!(sum.as_ref(), expected);

                let (sign, sum) = add_signed_magnitudes(Sign::$b_sign, b, Sign::$a_sign, a, radix, 100).unwrap();
                assert_eq!(sign, Sign::$c_sign);
                assert_eq!(sum.as_ref(), expected);
            }
        };
    }

    impl_case!(case_n50_30: Negative [0, 5] + NonNegative [0, 3] == Negative [0, 2]);
    impl_case!(case_50_n30: NonNegative [0, 5] + Negative [0, 3] == NonNegative [0, 2]);
    impl_case!(case_n5_n7: Negative [5] + Negative [7] == Negative [2, 1]);
    impl_case!(case_n78_78: Negative [8, 7] + NonNegative [8, 7] == NonNegative [0]);
    impl_case!(case_n1000_1: Negative [0, 0, 0, 1] + NonNegative [1] == Negative [9, 9, 9]);
}
