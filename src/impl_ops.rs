//! Implement math operations: Add,Sub, etc
//!
//! Operators call the checked methods and panic with the error
//! message on failure, as primitive integers do on overflow and
//! division by zero. Primitive operands are converted into the
//! context of the BigInt operand.

use crate::*;
use stdlib::ops::Neg;


/// Unwrap result of an operator, panicking with the error message
#[inline]
pub(crate) fn unwrap_op_result(result: Result<BigInt, BigIntError>) -> BigInt {
    match result {
        Ok(n) => n,
        Err(err) => panic!("{}", err),
    }
}

/// Primitive operand in the context of a BigInt operand
#[inline]
pub(crate) fn primitive_in_context(n: i128, ctx: &Context) -> BigInt {
    unwrap_op_result(BigInt::from_i128(n, ctx))
}


/// Implement operator and assign-operator traits for all owned and
/// borrowed combinations of BigInt, using the given checked method
macro_rules! impl_bigint_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident) => {
        impl $Op<&BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: &BigInt) -> BigInt {
                $crate::impl_ops::unwrap_op_result(self.$checked(rhs))
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: BigInt) -> BigInt {
                $crate::impl_ops::unwrap_op_result(self.$checked(&rhs))
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: &BigInt) -> BigInt {
                $crate::impl_ops::unwrap_op_result(self.$checked(rhs))
            }
        }

        impl $Op<BigInt> for BigInt {
            type Output = BigInt;

            #[inline]
            fn $op(self, rhs: BigInt) -> BigInt {
                $crate::impl_ops::unwrap_op_result(self.$checked(&rhs))
            }
        }

        impl $OpAssign<&BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, rhs: &BigInt) {
                *self = $crate::impl_ops::unwrap_op_result(self.$checked(rhs));
            }
        }

        impl $OpAssign<BigInt> for BigInt {
            #[inline]
            fn $op_assign(&mut self, rhs: BigInt) {
                *self = $crate::impl_ops::unwrap_op_result(self.$checked(&rhs));
            }
        }
    };
}

/// Implement operators between BigInt and primitive integers
macro_rules! impl_bigint_op_for_primitive {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $checked:ident; $($t:ty),*) => {
        $(
            impl $Op<$t> for &BigInt {
                type Output = BigInt;

                fn $op(self, rhs: $t) -> BigInt {
                    let rhs = $crate::impl_ops::primitive_in_context(rhs.into(), &self.context);
                    $crate::impl_ops::unwrap_op_result(self.$checked(&rhs))
                }
            }

            impl $Op<$t> for BigInt {
                type Output = BigInt;

                fn $op(self, rhs: $t) -> BigInt {
                    let rhs = $crate::impl_ops::primitive_in_context(rhs.into(), &self.context);
                    $crate::impl_ops::unwrap_op_result(self.$checked(&rhs))
                }
            }

            impl $Op<&BigInt> for $t {
                type Output = BigInt;

                fn $op(self, rhs: &BigInt) -> BigInt {
                    let lhs = $crate::impl_ops::primitive_in_context(self.into(), &rhs.context);
                    $crate::impl_ops::unwrap_op_result(lhs.$checked(rhs))
                }
            }

            impl $Op<BigInt> for $t {
                type Output = BigInt;

                fn $op(self, rhs: BigInt) -> BigInt {
                    let lhs = $crate::impl_ops::primitive_in_context(self.into(), &rhs.context);
                    $crate::impl_ops::unwrap_op_result(lhs.$checked(&rhs))
                }
            }

            impl $OpAssign<$t> for BigInt {
                fn $op_assign(&mut self, rhs: $t) {
                    let rhs = $crate::impl_ops::primitive_in_context(rhs.into(), &self.context);
                    *self = $crate::impl_ops::unwrap_op_result(self.$checked(&rhs));
                }
            }
        )*
    };
}


impl Neg for BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(mut self) -> BigInt {
        if !self.is_zero() {
            self.sign = -self.sign;
        }
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    #[inline]
    fn neg(self) -> BigInt {
        -self.clone()
    }
}


#[cfg(test)]
mod test_neg {
    use super::*;

    #[test]
    fn neg() {
        let ctx = Context::new(16, 8).unwrap();
        let a = BigInt::parse_with_context("a1f", &ctx).unwrap();
        let n = -&a;
        assert!(n.is_negative());
        assert_eq!(-n, a);
    }

    #[test]
    fn neg_zero_is_nonnegative() {
        let z = -BigInt::zero(&Context::default());
        assert_eq!(z.sign(), Sign::NonNegative);
    }

    #[test]
    #[should_panic(expected = "division by zero")]
    fn unwrap_panics_with_message() {
        unwrap_op_result(Err(BigIntError::DivisionByZero));
    }
}
