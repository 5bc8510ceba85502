//! Addition operator trait implementation
//!

use crate::*;
use stdlib::ops::{Add, AddAssign};


impl_bigint_op!(Add, add, AddAssign, add_assign, checked_add);
impl_bigint_op_for_primitive!(Add, add, AddAssign, add_assign, checked_add; u8, u16, u32, u64, i8, i16, i32, i64, i128);
