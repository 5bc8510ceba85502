//! common routines to be included by benches

use radix_bigint::{BigInt, Context, Sign};


/// Generate n random BigInts with `digit_count` digits in the radix
/// of `ctx`
pub fn random_bigints(ctx: &Context, digit_count: usize, n: usize, seed: u64) -> Vec<BigInt> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..n).map(|_| random_bigint(&mut rng, ctx, digit_count)).collect()
}

/// Random BigInt with a non-zero leading digit
pub fn random_bigint(rng: &mut oorandom::Rand32, ctx: &Context, digit_count: usize) -> BigInt {
    let radix = ctx.radix();
    let mut digits: Vec<u32> = (0..digit_count).map(|_| rng.rand_range(0..radix)).collect();
    if let Some(first) = digits.first_mut() {
        *first = rng.rand_range(1..radix);
    }
    let sign = Sign::from_negative(rng.rand_u32() % 2 == 1);
    BigInt::from_digits(sign, &digits, ctx).unwrap()
}


/// Randomly iterates through items in vector
pub struct RandomIterator<'a, T> {
    v: &'a [T],
    rng: oorandom::Rand32,
}

impl<'a, T> RandomIterator<'a, T> {
    pub fn new_with_seed(v: &'a [T], seed: u64) -> Self {
        Self {
            v: v,
            rng: oorandom::Rand32::new(seed),
        }
    }

    pub fn next(&mut self) -> &'a T {
        let idx = self.rng.rand_u32() as usize % self.v.len();
        &self.v[idx]
    }
}
