//! Little-endian digit vectors of runtime radix

use crate::stdlib::Vec;
use crate::stdlib::ops::Deref;

use super::BigDigit;


/// Vector of digits, least significant digit first
///
/// The radix is not stored here; callers pair a DigitVec with the
/// Radix of the BigInt (or algorithm) that owns it.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct DigitVec {
    pub digits: Vec<BigDigit>,
}

impl DigitVec {
    /// Create new empty vector
    pub fn new() -> Self {
        Self::from_vec(Vec::new())
    }

    /// Create new vector with capacity
    pub fn with_capacity(n: usize) -> Self {
        Self::from_vec(Vec::with_capacity(n))
    }

    /// Construct from vector of little-endian digits
    pub fn from_vec(v: Vec<BigDigit>) -> Self {
        Self {
            digits: v,
        }
    }

    /// Construct from slice of digits ordered most-significant first
    pub fn from_big_endian_slice(digits: &[BigDigit]) -> Self {
        Self::from_vec(digits.iter().rev().copied().collect())
    }

    /// The normalized representation of zero: `[0]`
    pub fn zero() -> Self {
        Self::from_vec(vec![0])
    }

    /// Allocate with n digits and fill with zeros
    pub fn from_zero_count(n: usize) -> Self {
        Self::from_vec(vec![0; n])
    }

    /// Number of digits in the vector
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// True if every digit is zero
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Remove all digits and reserve space for n more
    pub fn clear_and_reserve(&mut self, n: usize) {
        self.digits.clear();
        self.digits.reserve(n);
    }

    /// Resize inner vector, filling new values with zero
    pub fn resize(&mut self, n: usize) {
        self.digits.resize(n, 0)
    }

    /// Push digit to the most significant end
    pub fn push_significant_digit(&mut self, d: BigDigit) {
        self.digits.push(d);
    }

    /// Multiply by the radix and add `d`
    ///
    /// Inserts `d` at the least significant end, keeping the vector
    /// normalized.
    pub fn shift_in_insignificant_digit(&mut self, d: BigDigit) {
        if self.is_zero() {
            self.digits.clear();
            self.digits.push(d);
        } else {
            self.digits.insert(0, d);
        }
    }

    /// Remove zeros from the most significant end
    ///
    /// Zero is left as the single digit `[0]`.
    pub fn remove_significant_zeros(&mut self) {
        let len = self.digits.iter().rposition(|&d| d != 0).map_or(1, |idx| idx + 1);
        self.digits.truncate(len);
        if self.digits.is_empty() {
            self.digits.push(0);
        }
    }

    /// Iterate over digits, most significant first
    pub fn iter_significant(&self) -> impl DoubleEndedIterator<Item=BigDigit> + ExactSizeIterator + '_ {
        self.digits.iter().rev().copied()
    }
}

impl Deref for DigitVec {
    type Target = [BigDigit];

    fn deref(&self) -> &[BigDigit] {
        &self.digits
    }
}

impl AsRef<[BigDigit]> for DigitVec {
    fn as_ref(&self) -> &[BigDigit] {
        &self.digits
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: [$($input:literal),*] => [$($expected:literal),*]) => {
            #[test]
            fn $name() {
                let mut v = DigitVec::from_vec(vec![$($input),*]);
                v.remove_significant_zeros();
                let expected: &[BigDigit] = &[$($expected),*];
                assert_eq!(v.as_ref(), expected);
            }
        };
    }

    mod remove_significant_zeros {
        use super::*;

        impl_case!(case_empty: [] => [0]);
        impl_case!(case_0: [0] => [0]);
        impl_case!(case_000: [0, 0, 0] => [0]);
        impl_case!(case_1: [1] => [1]);
        impl_case!(case_0100: [0, 0, 1, 0] => [0, 0, 1]);
        impl_case!(case_9_8_7: [9, 8, 7] => [9, 8, 7]);
    }

    #[test]
    fn from_big_endian_slice() {
        let v = DigitVec::from_big_endian_slice(&[1, 2, 3]);
        assert_eq!(v.as_ref(), &[3, 2, 1]);
        assert_eq!(v.iter_significant().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn shift_in_insignificant_digit() {
        let mut v = DigitVec::zero();
        v.shift_in_insignificant_digit(0);
        assert_eq!(v.as_ref(), &[0]);

        v.shift_in_insignificant_digit(4);
        assert_eq!(v.as_ref(), &[4]);

        v.shift_in_insignificant_digit(0);
        v.shift_in_insignificant_digit(2);
        assert_eq!(v.as_ref(), &[2, 0, 4]);
    }
}
