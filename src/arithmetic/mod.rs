//! arithmetic routines
//!
//! Algorithms here operate on little-endian digit slices which are
//! normalized (no significant zeros, zero is `[0]`). Results are
//! returned in freshly allocated DigitVecs.
//!

use crate::*;
use crate::bigdigit::BigDigit;
use stdlib::cmp::Ordering;

pub(crate) mod addition;
pub(crate) mod subtraction;
pub(crate) mod multiplication;
pub(crate) mod division;
pub(crate) mod modulo;


/// Compare the absolute values of two normalized digit slices
///
/// As there are no significant zeros, a longer slice is always larger
/// in magnitude; slices of equal length are compared digit by digit
/// starting from the most significant.
///
pub(crate) fn compare_magnitudes(a: &[BigDigit], b: &[BigDigit]) -> Ordering {
    debug_assert!(a.len() <= 1 || a.last() != Some(&0));
    debug_assert!(b.len() <= 1 || b.last() != Some(&0));

    a.len().cmp(&b.len()).then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Fail with Overflow if `len` digits do not fit in `max_digits`
#[inline]
pub(crate) fn check_digit_count(len: usize, max_digits: usize) -> Result<(), BigIntError> {
    if len > max_digits {
        Err(BigIntError::Overflow { max_digits })
    } else {
        Ok(())
    }
}


#[cfg(test)]
mod test_compare_magnitudes {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($a:literal),*] $ord:ident [$($b:literal),*]) => {
            #[test]
            fn $name() {
                let a: &[BigDigit] = &[$($a),*];
                let b: &[BigDigit] = &[$($b),*];
                assert_eq!(compare_magnitudes(a, b), Ordering::$ord);
                assert_eq!(compare_magnitudes(b, a), Ordering::$ord.reverse());
            }
        };
    }

    impl_case!(case_0_0: [0] Equal [0]);
    impl_case!(case_1_0: [1] Greater [0]);
    impl_case!(case_longer: [0, 0, 1] Greater [9, 9]);
    impl_case!(case_msd_decides: [9, 9, 1] Less [0, 0, 2]);
    impl_case!(case_lsd_decides: [3, 5, 7] Less [4, 5, 7]);
    impl_case!(case_equal: [3, 5, 7] Equal [3, 5, 7]);
}
