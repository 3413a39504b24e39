// ============================================================================
// Natural Digits
// Conversion between naturals and base-b digit sequences
// ============================================================================
//
// Digit sequences are most significant digit first. Zero is the empty
// sequence; no function here produces a leading zero digit except
// `carry_in`, which preserves the length of its input.

use super::errors::{Digit, RadixError, RadixResult};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::Zero;

#[inline]
fn check_base(base: u32) -> RadixResult<()> {
    if base < 2 {
        Err(RadixError::InvalidBase(base))
    } else {
        Ok(())
    }
}

/// Encode `value` as digits in `base`, without leading zeros.
///
/// # Errors
/// Returns `InvalidBase` if `base` is less than 2.
pub fn from_int(value: &BigUint, base: u32) -> RadixResult<Vec<Digit>> {
    check_base(base)?;

    let radix = BigUint::from(base);
    let mut digits = Vec::new();
    let mut rest = value.clone();
    while !rest.is_zero() {
        let (quotient, remainder) = rest.div_rem(&radix);
        digits.push(remainder.iter_u32_digits().next().unwrap_or(0));
        rest = quotient;
    }
    digits.reverse();
    Ok(digits)
}

/// The natural denoted by `digits` in `base`.
pub fn to_int(digits: &[Digit], base: u32) -> BigUint {
    digits
        .iter()
        .fold(BigUint::zero(), |acc, &digit| acc * base + digit)
}

/// Re-encode `digits` from `from_base` into `to_base`.
///
/// # Errors
/// Returns `InvalidBase` if either base is less than 2.
pub fn convert(digits: &[Digit], from_base: u32, to_base: u32) -> RadixResult<Vec<Digit>> {
    check_base(from_base)?;
    from_int(&to_int(digits, from_base), to_base)
}

/// Add `carry` to the least significant digit of `digits`.
///
/// The returned sequence has the same length as the input; whatever
/// overflows the most significant position comes back as the carry out.
/// Prepending it is the caller's decision.
pub fn carry_in(digits: &[Digit], carry: Digit, base: u32) -> (Digit, Vec<Digit>) {
    let base = u64::from(base);
    let mut carry = u64::from(carry);
    let mut result = digits.to_vec();

    for digit in result.iter_mut().rev() {
        if carry == 0 {
            break;
        }
        let sum = u64::from(*digit) + carry;
        *digit = (sum % base) as Digit;
        carry = sum / base;
    }

    (carry as Digit, result)
}

/// Parity of the natural denoted by `digits` in `base`.
///
/// In an even base only the last digit matters; in an odd base every power
/// of the base is odd, so parity is the parity of the digit sum.
pub fn is_odd<'a, I>(digits: I, base: u32) -> bool
where
    I: IntoIterator<Item = &'a Digit>,
    I::IntoIter: DoubleEndedIterator,
{
    let mut digits = digits.into_iter();
    if base % 2 == 0 {
        digits.next_back().is_some_and(|d| d % 2 == 1)
    } else {
        digits.fold(false, |odd, d| odd ^ (d % 2 == 1))
    }
}
