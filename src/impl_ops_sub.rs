//! Subtraction operator trait implementation
//!

use crate::*;
use stdlib::ops::{Sub, SubAssign};


impl_bigint_op!(Sub, sub, SubAssign, sub_assign, checked_sub);
impl_bigint_op_for_primitive!(Sub, sub, SubAssign, sub_assign, checked_sub; u8, u16, u32, u64, i8, i16, i32, i64, i128);
