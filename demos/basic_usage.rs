// ============================================================================
// Basic Usage Example
// ============================================================================

use num_bigint::BigInt;
use num_rational::BigRational;
use radix_rational::prelude::*;
use radix_rational::utils::init_logging;
use rust_decimal::Decimal;

fn render(radix: &Radix) -> String {
    let digits = |part: &[Digit]| {
        part.iter()
            .map(|&d| char::from_digit(d, 36).unwrap_or('?'))
            .collect::<String>()
    };

    let sign = if radix.sign() == Sign::Negative { "-" } else { "" };
    let integer = if radix.integer_part().is_empty() {
        "0".to_string()
    } else {
        digits(radix.integer_part())
    };
    let mut text = format!("{}{}", sign, integer);
    if !radix.non_repeating_part().is_empty() || !radix.repeating_part().is_empty() {
        text.push('.');
        text.push_str(&digits(radix.non_repeating_part()));
    }
    if !radix.repeating_part().is_empty() {
        text.push_str(&format!("({})", digits(radix.repeating_part())));
    }
    format!("{} (base {})", text, radix.base())
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    init_logging()?;

    println!("=== Radix Rational Example ===\n");

    // Exact expansions in a few bases
    let value = BigRational::new(BigInt::from(-22), BigInt::from(7));
    println!("Value: {}", value);
    for base in [2u32, 7, 10, 16] {
        let (radix, _) = from_rational(&value, base, None, RoundingMethod::Down)?;
        println!("  {}", render(&radix));
    }

    // Every rounding method at three places
    println!("\n=== Rounding to 3 places ===");
    let (radix, _) = from_rational(&value, 10, None, RoundingMethod::Down)?;
    for method in RoundingMethod::METHODS {
        let (rounded, relation) = radix.rounded(3, method);
        println!("  {:<32} {}  {:?}", method.to_string(), render(&rounded), relation);
    }

    // A configured converter fed with decimals
    println!("\n=== Converter ===");
    let converter = RadixConverterBuilder::binary()
        .with_precision(8)
        .half_even()
        .build()?;
    for decimal in [Decimal::new(1, 1), Decimal::new(-3125, 4), Decimal::new(42, 0)] {
        let (radix, relation) = converter.convert(&decimal)?;
        println!("  {:>8} -> {}  {:?}", decimal, render(&radix), relation);
    }

    // Integers
    println!("\n=== Integers ===");
    let (int, relation) = converter.round_to_int(&value);
    println!("  {} -> {}  {:?}", value, int, relation);

    Ok(())
}
