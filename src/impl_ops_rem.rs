//! Remainder operator trait implementation
//!
//! `%` is the floor modulo, taking the sign of the divisor.

use crate::*;
use stdlib::ops::{Rem, RemAssign};


impl_bigint_op!(Rem, rem, RemAssign, rem_assign, checked_mod_floor);
impl_bigint_op_for_primitive!(Rem, rem, RemAssign, rem_assign, checked_mod_floor; u8, u16, u32, u64, i8, i16, i32, i64, i128);
