// ============================================================================
// Natural Division
// Long division of digit sequences with repeating-cycle detection
// ============================================================================

use super::digits::{carry_in, from_int, is_odd, to_int};
use super::errors::{Digit, RadixError, RadixResult};
use crate::domain::radix::Sign;
use crate::domain::rounding_method::{relation_of, RoundingMethod};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Result of dividing two naturals in some base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quotient {
    pub integer_part: Vec<Digit>,
    pub non_repeating_part: Vec<Digit>,
    pub repeating_part: Vec<Digit>,
    /// Produced value compared with the exact quotient
    pub relation: Ordering,
}

/// Divide `dividend` by `divisor`, both digit sequences in `base`.
///
/// Without a precision the exact expansion is returned: the fractional
/// digits up to the first recurring remainder, and the cycle from there.
/// Relation is always `Equal` in that case.
///
/// With a precision, at most that many fractional digits are produced and
/// no cycle is reported. A non-zero final remainder is resolved by
/// `method` as for a positive value.
///
/// # Errors
/// - `InvalidBase` if `base` is less than 2
/// - `DivisionByZero` if `divisor` denotes zero
pub fn division(
    divisor: &[Digit],
    dividend: &[Digit],
    base: u32,
    precision: Option<usize>,
    method: RoundingMethod,
) -> RadixResult<Quotient> {
    if base < 2 {
        return Err(RadixError::InvalidBase(base));
    }

    let divisor = to_int(divisor, base);
    if divisor.is_zero() {
        return Err(RadixError::DivisionByZero);
    }

    let (integer, mut remainder) = to_int(dividend, base).div_rem(&divisor);
    let integer_part = from_int(&integer, base)?;

    let mut fraction = Vec::new();
    // remainder -> index of the digit it produces
    let mut seen: HashMap<BigUint, usize> = HashMap::new();
    let mut cycle_start = None;

    while !remainder.is_zero() {
        match precision {
            Some(limit) if fraction.len() >= limit => break,
            Some(_) => {},
            None => {
                if let Some(&start) = seen.get(&remainder) {
                    cycle_start = Some(start);
                    break;
                }
                seen.insert(remainder.clone(), fraction.len());
            },
        }

        let (digit, rest) = (remainder * base).div_rem(&divisor);
        fraction.push(digit.iter_u32_digits().next().unwrap_or(0));
        remainder = rest;
    }

    if let Some(start) = cycle_start {
        let repeating_part = fraction.split_off(start);
        return Ok(Quotient {
            integer_part,
            non_repeating_part: fraction,
            repeating_part,
            relation: Ordering::Equal,
        });
    }

    if remainder.is_zero() {
        return Ok(Quotient {
            integer_part,
            non_repeating_part: fraction,
            repeating_part: Vec::new(),
            relation: Ordering::Equal,
        });
    }

    let half = (remainder * 2u32).cmp(&divisor);
    let odd = is_odd(integer_part.iter().chain(fraction.iter()), base);
    let increment = method.increments(Sign::Positive, half, odd);

    let (integer_part, non_repeating_part) = if increment {
        let (carry, fraction) = carry_in(&fraction, 1, base);
        let (carry, mut integer_part) = carry_in(&integer_part, carry, base);
        if carry != 0 {
            integer_part.insert(0, carry);
        }
        (integer_part, fraction)
    } else {
        (integer_part, fraction)
    };

    Ok(Quotient {
        integer_part,
        non_repeating_part,
        repeating_part: Vec::new(),
        relation: relation_of(Sign::Positive, increment),
    })
}

/// Reconstruct a fraction from its positional expansion.
///
/// Returns `(denominator, numerator)` digit sequences in `base`. The result
/// is not necessarily in lowest terms, but the numerator has no leading zero
/// and the denominator is never zero.
///
/// # Errors
/// Returns `InvalidBase` if `base` is less than 2.
pub fn undivision(
    integer_part: &[Digit],
    non_repeating_part: &[Digit],
    repeating_part: &[Digit],
    base: u32,
) -> RadixResult<(Vec<Digit>, Vec<Digit>)> {
    if base < 2 {
        return Err(RadixError::InvalidBase(base));
    }
    let (denominator, numerator) =
        undivide(integer_part, non_repeating_part, repeating_part, base);
    Ok((from_int(&denominator, base)?, from_int(&numerator, base)?))
}

/// `undivision` without the final encoding; `base` must be at least 2.
///
/// value = integer + (N - P) / (base^k * (base^r - 1)), where `N` is the
/// value of the non-repeating digits followed by the cycle, `P` the value
/// of the non-repeating digits alone, and `k`, `r` their lengths.
pub(crate) fn undivide(
    integer_part: &[Digit],
    non_repeating_part: &[Digit],
    repeating_part: &[Digit],
    base: u32,
) -> (BigUint, BigUint) {
    let integer = to_int(integer_part, base);
    let radix = BigUint::from(base);
    let prefix = to_int(non_repeating_part, base);
    let shift = num_traits::pow(radix.clone(), non_repeating_part.len());

    if repeating_part.is_empty() {
        let numerator = integer * &shift + prefix;
        return (shift, numerator);
    }

    let cycle = num_traits::pow(radix, repeating_part.len()) - BigUint::one();
    let denominator = shift * cycle;
    let whole = to_int(&[non_repeating_part, repeating_part].concat(), base);
    let numerator = integer * &denominator + (whole - prefix);
    (denominator, numerator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_rational::BigRational;
    use num_bigint::BigInt;
    use proptest::prelude::*;

    fn digits(value: u64, base: u32) -> Vec<Digit> {
        from_int(&BigUint::from(value), base).unwrap()
    }

    fn ratio(denominator: &[Digit], numerator: &[Digit], base: u32) -> BigRational {
        BigRational::new(
            BigInt::from(to_int(numerator, base)),
            BigInt::from(to_int(denominator, base)),
        )
    }

    #[test]
    fn test_one_third() {
        let q = division(&[3], &[1], 10, None, RoundingMethod::Down).unwrap();
        assert_eq!(q.integer_part, Vec::<Digit>::new());
        assert_eq!(q.non_repeating_part, Vec::<Digit>::new());
        assert_eq!(q.repeating_part, vec![3]);
        assert_eq!(q.relation, Ordering::Equal);
    }

    #[test]
    fn test_mixed_expansion() {
        // 37 / 6 = 6.1(6)
        let q = division(&[6], &[3, 7], 10, None, RoundingMethod::Down).unwrap();
        assert_eq!(q.integer_part, vec![6]);
        assert_eq!(q.non_repeating_part, vec![1]);
        assert_eq!(q.repeating_part, vec![6]);
    }

    #[test]
    fn test_terminating() {
        let q = division(&[8], &[1], 10, None, RoundingMethod::Down).unwrap();
        assert_eq!(q.non_repeating_part, vec![1, 2, 5]);
        assert!(q.repeating_part.is_empty());
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            division(&[], &[1], 10, None, RoundingMethod::Down),
            Err(RadixError::DivisionByZero)
        );
        assert_eq!(
            division(&[0, 0], &[1], 10, None, RoundingMethod::Down),
            Err(RadixError::DivisionByZero)
        );
        assert_eq!(
            division(&[1], &[1], 1, None, RoundingMethod::Down),
            Err(RadixError::InvalidBase(1))
        );
    }

    #[test]
    fn test_bounded_truncates_and_rounds() {
        // 2/3 = 0.666...
        let down = division(&[3], &[2], 10, Some(2), RoundingMethod::Down).unwrap();
        assert_eq!(down.non_repeating_part, vec![6, 6]);
        assert!(down.repeating_part.is_empty());
        assert_eq!(down.relation, Ordering::Less);

        let up = division(&[3], &[2], 10, Some(2), RoundingMethod::HalfUp).unwrap();
        assert_eq!(up.non_repeating_part, vec![6, 7]);
        assert_eq!(up.relation, Ordering::Greater);
    }

    #[test]
    fn test_bounded_carry_into_integer() {
        // 199/100 at one digit, rounded up
        let q = division(&[1, 0, 0], &[1, 9, 9], 10, Some(1), RoundingMethod::Up).unwrap();
        assert_eq!(q.integer_part, vec![2]);
        assert_eq!(q.non_repeating_part, vec![0]);

        // 99/100 at one digit, rounded up, grows the integer part
        let q = division(&[1, 0, 0], &[9, 9], 10, Some(1), RoundingMethod::Up).unwrap();
        assert_eq!(q.integer_part, vec![1]);
        assert_eq!(q.non_repeating_part, vec![0]);
    }

    #[test]
    fn test_bounded_exact_stops_early() {
        let q = division(&[2], &[1], 10, Some(5), RoundingMethod::Up).unwrap();
        assert_eq!(q.non_repeating_part, vec![5]);
        assert_eq!(q.relation, Ordering::Equal);
    }

    #[test]
    fn test_bounded_half_even() {
        // 1/4 = 0.25, ties at one digit go to 0.2
        let q = division(&[4], &[1], 10, Some(1), RoundingMethod::HalfEven).unwrap();
        assert_eq!(q.non_repeating_part, vec![2]);
        assert_eq!(q.relation, Ordering::Less);

        // 3/4 = 0.75, ties at one digit go to 0.8
        let q = division(&[4], &[3], 10, Some(1), RoundingMethod::HalfEven).unwrap();
        assert_eq!(q.non_repeating_part, vec![8]);
        assert_eq!(q.relation, Ordering::Greater);
    }

    #[test]
    fn test_undivision_integer() {
        let (denominator, numerator) = undivision(&[4, 2], &[], &[], 10).unwrap();
        assert_eq!(denominator, vec![1]);
        assert_eq!(numerator, vec![4, 2]);

        let (denominator, numerator) = undivision(&[], &[], &[], 10).unwrap();
        assert_eq!(denominator, vec![1]);
        assert_eq!(numerator, Vec::<Digit>::new());
    }

    #[test]
    fn test_undivision_repeating() {
        // 6.1(6) = 37/6
        let (denominator, numerator) = undivision(&[6], &[1], &[6], 10).unwrap();
        assert_eq!(
            ratio(&denominator, &numerator, 10),
            BigRational::new(BigInt::from(37), BigInt::from(6))
        );
    }

    proptest! {
        #[test]
        fn prop_division_inverts(
            divisor in 1u64..5_000,
            dividend in 0u64..1_000_000,
            base in 2u32..40,
        ) {
            let q = division(
                &digits(divisor, base),
                &digits(dividend, base),
                base,
                None,
                RoundingMethod::Down,
            ).unwrap();
            prop_assert_eq!(q.relation, Ordering::Equal);

            let (denominator, numerator) = undivision(
                &q.integer_part,
                &q.non_repeating_part,
                &q.repeating_part,
                base,
            ).unwrap();
            prop_assert!(numerator.first() != Some(&0));
            prop_assert!(denominator.first().is_some_and(|&d| d != 0));
            prop_assert_eq!(
                ratio(&denominator, &numerator, base),
                BigRational::new(BigInt::from(dividend), BigInt::from(divisor))
            );
        }

        #[test]
        fn prop_bounded_is_prefix(
            divisor in 1u64..5_000,
            dividend in 0u64..1_000_000,
            base in 2u32..40,
            precision in 0usize..32,
        ) {
            let exact = division(
                &digits(divisor, base),
                &digits(dividend, base),
                base,
                None,
                RoundingMethod::Down,
            ).unwrap();
            let bounded = division(
                &digits(divisor, base),
                &digits(dividend, base),
                base,
                Some(precision),
                RoundingMethod::TowardZero,
            ).unwrap();

            prop_assert_eq!(&bounded.integer_part, &exact.integer_part);
            prop_assert!(bounded.repeating_part.is_empty());
            prop_assert!(bounded.non_repeating_part.len() <= precision);

            let stream: Vec<Digit> = exact
                .non_repeating_part
                .iter()
                .chain(exact.repeating_part.iter().cycle())
                .take(bounded.non_repeating_part.len())
                .copied()
                .collect();
            prop_assert_eq!(&bounded.non_repeating_part, &stream);
        }
    }
}
