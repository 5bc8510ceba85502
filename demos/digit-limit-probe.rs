//! Find the dividend length at which a single division takes longer
//! than a threshold
//!
//! Usage: digit-limit-probe [THRESHOLD_SECONDS] [SEED]
//!
//! Grows a decimal dividend one random digit at a time and divides it
//! by 5, stopping when a division takes longer than the threshold
//! (default 1 second) or the digit ceiling is reached.

extern crate radix_bigint;
extern crate oorandom;

use std::env;
use std::time::{Duration, Instant};

use radix_bigint::{BigInt, BigIntError, Context, Sign, MAX_DIGITS_CEILING};


fn main() -> Result<(), BigIntError> {
    let mut args = env::args().skip(1);
    let threshold = args
        .next()
        .and_then(|arg| arg.parse::<f64>().ok())
        .filter(|secs| secs.is_finite() && *secs >= 0.0)
        .map(Duration::from_secs_f64)
        .unwrap_or_else(|| Duration::from_secs(1));
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(0x5eed);

    let ctx = Context::new(10, MAX_DIGITS_CEILING)?;
    let divisor = BigInt::from_digits(Sign::NonNegative, &[5], &ctx)?;

    let mut rng = oorandom::Rand32::new(seed);
    let mut digits = vec![1];
    let mut elapsed = Duration::default();

    while digits.len() <= MAX_DIGITS_CEILING {
        let dividend = BigInt::from_digits(Sign::NonNegative, &digits, &ctx)?;

        let start = Instant::now();
        let quotient = dividend.checked_div_floor(&divisor)?;
        elapsed = start.elapsed();
        std::hint::black_box(quotient);

        println!("{} {:?}", digits.len(), elapsed);
        if elapsed > threshold {
            println!("Division of a {}-digit number took {:?}", digits.len(), elapsed);
            return Ok(());
        }

        digits.push(rng.rand_range(0..10));
    }

    println!(
        "Reached the digit ceiling {} without exceeding {:?} (last division took {:?})",
        MAX_DIGITS_CEILING, threshold, elapsed
    );
    Ok(())
}
