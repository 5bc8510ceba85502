extern crate radix_bigint;
use radix_bigint::*;

/// Print every operation between two values built from digits
fn show_operations(title: &str, radix: u32, a_digits: &[u32], b_digits: &[u32]) {
    println!("\n{}", "=".repeat(60));
    println!("{} (radix {})", title, radix);
    println!("{}", "=".repeat(60));

    let a = BigInt::from_digits_radix(radix, 100, false, a_digits).unwrap();
    let b = BigInt::from_digits_radix(radix, 100, false, b_digits).unwrap();
    println!("a: {:#}", a);
    println!("b: {:#}", b);
    println!();

    let results = [
        ("+", a.checked_add(&b)),
        ("-", a.checked_sub(&b)),
        ("*", a.checked_mul(&b)),
        ("//", a.checked_div_floor(&b)),
        ("%", a.checked_mod_floor(&b)),
    ];
    for (op, result) in results.iter() {
        match result {
            Ok(n) => println!("{} {} {} = {}", a, op, b, n),
            Err(err) => println!("{} {} {} failed: {}", a, op, b, err),
        }
    }
}

fn main() {
    println!("Hello, Radix BigInts!");

    show_operations("Binary", 2, &[1, 0, 1, 1], &[1, 1, 0]);

    let bin1 = BigInt::from_str_radix("1111", 2, 100).unwrap();
    let bin2 = BigInt::from_str_radix("101", 2, 100).unwrap();
    println!("1111 + 101 = {}", &bin1 + &bin2);
    println!("1111 * 101 = {}", &bin1 * &bin2);

    show_operations("Decimal", 10, &[1, 2, 3], &[4, 5]);

    let dec = BigInt::from_str_radix("999", 10, 100).unwrap();
    println!("999 + 1 = {}", &dec + 1);
    println!("999 * 2 = {}", &dec * 2);

    let neg: BigInt = "-50".parse().unwrap();
    let pos: BigInt = "30".parse().unwrap();
    println!("{} + {} = {}", neg, pos, &neg + &pos);
    println!("{} * {} = {}", neg, pos, &neg * &pos);
    println!("{} // {} = {}", neg, pos, &neg / &pos);
    println!("{} % {} = {}", neg, pos, &neg % &pos);

    show_operations("Hexadecimal", 16, &[10, 11, 12], &[5, 15]);

    let hex: BigInt = "ff (base 16)".parse().unwrap();
    println!("ff + 1 = {}", &hex + 1);
    println!("ff * 2 = {}", &hex * 2);

    show_operations("Radix 1000", 1000, &[12, 0, 999], &[7]);

    let small = Context::new(10, 3).unwrap();
    let limit = BigInt::parse_with_context("999", &small).unwrap();
    let one = BigInt::one(&small);
    match limit.checked_add(&one) {
        Ok(n) => println!("999 + 1 = {}", n),
        Err(err) => println!("999 + 1 with 3 digits: {}", err),
    }
}
