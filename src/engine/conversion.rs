// ============================================================================
// Rational Conversion
// Entry points from exact rationals to radices and integers
// ============================================================================

use crate::domain::{MagnitudeRounding, Radix, RoundingMethod, Sign};
use crate::numeric::{division, from_int, RadixError, RadixResult};
use num_bigint::{BigInt, Sign as BigSign};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::Signed;
use std::cmp::Ordering;

fn sign_of(value: &BigRational) -> Sign {
    match value.numer().sign() {
        BigSign::Minus => Sign::Negative,
        BigSign::NoSign => Sign::Zero,
        BigSign::Plus => Sign::Positive,
    }
}

/// Convert `value` to a radix in `to_base`.
///
/// Without a precision the conversion is exact and the relation is `Equal`.
/// With a precision the result has exactly that many fractional digits,
/// rounded by `method`, and the relation compares it with `value`.
///
/// # Errors
/// Returns `InvalidBase` if `to_base` is less than 2.
///
/// # Example
/// ```
/// use num_bigint::BigInt;
/// use num_rational::BigRational;
/// use radix_rational::prelude::*;
///
/// let third = BigRational::new(BigInt::from(1), BigInt::from(3));
/// let (radix, relation) = from_rational(&third, 10, None, RoundingMethod::Down).unwrap();
/// assert_eq!(radix.repeating_part(), &[3]);
/// assert_eq!(relation, std::cmp::Ordering::Equal);
/// ```
pub fn from_rational(
    value: &BigRational,
    to_base: u32,
    precision: Option<usize>,
    method: RoundingMethod,
) -> RadixResult<(Radix, Ordering)> {
    if to_base < 2 {
        return Err(RadixError::InvalidBase(to_base));
    }

    tracing::debug!(base = to_base, ?precision, %method, "converting rational to radix");

    let sign = sign_of(value);
    if sign == Sign::Zero {
        return Ok((
            Radix::zero(to_base, precision.unwrap_or(0)),
            Ordering::Equal,
        ));
    }

    let flip = MagnitudeRounding::new(sign, method);
    let magnitude = value.abs();
    let numerator = from_int(magnitude.numer().magnitude(), to_base)?;
    let denominator = from_int(magnitude.denom().magnitude(), to_base)?;

    let quotient = division(
        &denominator,
        &numerator,
        to_base,
        precision,
        flip.magnitude_method(),
    )?;
    let positive = Radix::new_unchecked(
        1,
        quotient.integer_part,
        quotient.non_repeating_part,
        quotient.repeating_part,
        to_base,
        true,
    );
    let (result, relation) = flip.restore((positive, quotient.relation));

    match precision {
        Some(precision) => {
            let (result, second) = result.rounded(precision, method);
            let relation = if second == Ordering::Equal {
                relation
            } else {
                second
            };
            Ok((result, relation))
        },
        None => Ok((result, relation)),
    }
}

/// Round `value` to an integer by `method`.
///
/// Returns the integer and its relation to `value`.
pub fn round_to_int(value: &BigRational, method: RoundingMethod) -> (BigInt, Ordering) {
    if value.is_integer() {
        return (value.to_integer(), Ordering::Equal);
    }

    let sign = sign_of(value);
    let flip = MagnitudeRounding::new(sign, method);
    let magnitude = value.abs();

    let lower = magnitude.floor().to_integer();
    let fraction = &magnitude - BigRational::from_integer(lower.clone());
    let half = BigRational::new(BigInt::from(1), BigInt::from(2));
    let increment = flip.magnitude_method().increments(
        Sign::Positive,
        fraction.cmp(&half),
        lower.is_odd(),
    );

    let rounded = if increment {
        (lower + 1, Ordering::Greater)
    } else {
        (lower, Ordering::Less)
    };
    flip.restore(rounded)
}
