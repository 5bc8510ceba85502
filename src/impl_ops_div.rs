//! Division operator trait implementation
//!
//! `/` rounds towards negative infinity, matching `%`.

use crate::*;
use stdlib::ops::{Div, DivAssign};


impl_bigint_op!(Div, div, DivAssign, div_assign, checked_div_floor);
impl_bigint_op_for_primitive!(Div, div, DivAssign, div_assign, checked_div_floor; u8, u16, u32, u64, i8, i16, i32, i64, i128);
