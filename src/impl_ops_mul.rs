//! Multiplication operator trait implementation
//!

use crate::*;
use stdlib::ops::{Mul, MulAssign};


impl_bigint_op!(Mul, mul, MulAssign, mul_assign, checked_mul);
impl_bigint_op_for_primitive!(Mul, mul, MulAssign, mul_assign, checked_mul; u8, u16, u32, u64, i8, i16, i32, i64, i128);


#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    macro_rules! impl_case {
        ( $name:ident: $a:literal * $b:literal => $c:literal ) => {
            impl_case!($name: $a * $b => $c; base=10);
        };
        ( $name:ident: $a:literal * $b:literal => $c:literal; base=$radix:literal ) => {
            #[test]
            fn $name() {
                let ctx = Context::new($radix, 40).unwrap();
                let a = BigInt::parse_with_context($a, &ctx).unwrap();
                let b = BigInt::parse_with_context($b, &ctx).unwrap();
                let c = BigInt::parse_with_context($c, &ctx).unwrap();

                assert_eq!(c, a.clone() * b.clone());
                assert_eq!(c, a.clone() * &b);
                assert_eq!(c, &a * b.clone());
                assert_eq!(c, &a * &b);

                // Reversed

                assert_eq!(c, b.clone() * a.clone());
                assert_eq!(c, &b * &a);

                let mut n = a.clone();
                n *= b.clone();
                assert_eq!(c, n);

                let mut n = a.clone();
                n *= &b;
                assert_eq!(c, n);
            }
        };
        ( $name:ident: $a:literal * (prim $b:literal) => $c:literal ) => {
            paste! {
                #[test]
                fn [< $name _primitive >]() {
                    let a: BigInt = $a.parse().unwrap();
                    let c: BigInt = $c.parse().unwrap();

                    assert_eq!(c, a.clone() * $b);
                    assert_eq!(c, &a * $b);
                    assert_eq!(c, $b * a.clone());
                    assert_eq!(c, $b * &a);

                    let mut n = a.clone();
                    n *= $b;
                    assert_eq!(c, n);
                }
            }
        };
    }

    impl_case!(case_123_45: "123" * "45" => "5535");
    impl_case!(case_n123_45: "-123" * "45" => "-5535");
    impl_case!(case_n123_n45: "-123" * "-45" => "5535");
    impl_case!(case_n123_0: "-123" * "0" => "0");
    impl_case!(case_xa1f_x2b: "a1f" * "2b" => "1b335"; base=16);
    impl_case!(case_b1111_b101: "1111" * "101" => "1001011"; base=2);
    impl_case!(case_radix_1000: "1|0" * "999" => "999|0"; base=1000);
    impl_case!(case_12_n3: "12" * (prim -3i8) => "-36");
    impl_case!(case_n12_0: "-12" * (prim 0u16) => "0");

    #[test]
    #[should_panic(expected = "result exceeds the digit limit 4")]
    fn mul_overflow_panics() {
        let ctx = Context::new(10, 4).unwrap();
        let a = BigInt::parse_with_context("100", &ctx).unwrap();
        let _ = &a * &a;
    }
}
