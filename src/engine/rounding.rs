// ============================================================================
// Rounding Engine
// Rounds a canonical radix to a fixed number of fractional digits
// ============================================================================

use crate::domain::rounding_method::relation_of;
use crate::domain::{Radix, RoundingMethod, Sign};
use crate::numeric::{carry_in, is_odd, Digit};
use num_bigint::BigInt;
use num_rational::BigRational;
use std::cmp::Ordering;

/// Round `value` to exactly `precision` fractional digits.
///
/// The kept digits are the first `precision` digits of the fractional
/// stream (non-repeating part, then the cycle forever), zero padded if the
/// stream ends. The result never has a repeating part.
///
/// Returns the rounded radix and its relation to `value`.
pub fn rounded(value: &Radix, precision: usize, method: RoundingMethod) -> (Radix, Ordering) {
    let base = value.base();
    let sign = value.sign();
    if sign == Sign::Zero {
        return (Radix::zero(base, precision), Ordering::Equal);
    }

    let non_repeating = value.non_repeating_part();
    let repeating = value.repeating_part();

    let mut stream = non_repeating
        .iter()
        .chain(repeating.iter().cycle())
        .copied();
    let mut kept: Vec<Digit> = stream.by_ref().take(precision).collect();
    kept.resize(precision, 0);

    let tail = non_repeating.get(precision..).unwrap_or(&[]);
    if repeating.is_empty() && tail.iter().all(|&d| d == 0) {
        return (truncated(value, kept), Ordering::Equal);
    }

    let increment = match method.directed_increment(sign) {
        Some(increment) => increment,
        None => {
            // stream is positioned just past the kept digits
            let remainder_repeating: Vec<Digit> = if tail.is_empty() {
                stream.take(repeating.len()).collect()
            } else {
                repeating.to_vec()
            };
            let remainder =
                Radix::new_unchecked(1, Vec::new(), tail.to_vec(), remainder_repeating, base, true);
            let half = BigRational::new(BigInt::from(1), BigInt::from(2));
            let position = remainder.as_rational().cmp(&half);

            if position == Ordering::Equal {
                tracing::trace!(%method, precision, "rounding tie");
            }

            let odd = is_odd(value.integer_part().iter().chain(kept.iter()), base);
            method.increments(sign, position, odd)
        },
    };

    let result = if increment {
        incremented(value, kept)
    } else {
        truncated(value, kept)
    };
    (result, relation_of(sign, increment))
}

fn truncated(value: &Radix, kept: Vec<Digit>) -> Radix {
    Radix::new_unchecked(
        value.sign().as_i8(),
        value.integer_part().to_vec(),
        kept,
        Vec::new(),
        value.base(),
        true,
    )
}

/// Add one unit in the last kept place, carrying into the integer part and
/// growing it by one digit if the carry escapes.
fn incremented(value: &Radix, kept: Vec<Digit>) -> Radix {
    let base = value.base();
    let (carry, fraction) = carry_in(&kept, 1, base);
    let (carry, mut integer) = carry_in(value.integer_part(), carry, base);
    if carry != 0 {
        integer.insert(0, carry);
    }
    Radix::new_unchecked(value.sign().as_i8(), integer, fraction, Vec::new(), base, false)
}
