// ============================================================================
// Radix
// Canonical signed positional representation of an exact rational
// ============================================================================

use super::canonical::{canonicalize, Magnitude};
use super::rounding_method::RoundingMethod;
use crate::engine::{from_rational, rounded};
use crate::numeric::division::undivide;
use crate::numeric::{to_int, Digit, DigitPart, RadixError, RadixResult};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::One;
use std::cmp::Ordering;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sign of a radix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

impl Sign {
    /// -1, 0 or 1.
    #[inline]
    pub const fn as_i8(self) -> i8 {
        match self {
            Sign::Negative => -1,
            Sign::Zero => 0,
            Sign::Positive => 1,
        }
    }

    /// Express a magnitude comparison in the frame of a value with this sign.
    #[inline]
    pub fn orient(self, magnitude: Ordering) -> Ordering {
        match self {
            Sign::Negative => magnitude.reverse(),
            Sign::Zero => Ordering::Equal,
            Sign::Positive => magnitude,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Negative => Sign::Positive,
            Sign::Zero => Sign::Zero,
            Sign::Positive => Sign::Negative,
        }
    }
}

/// Sign tied to its magnitude. A zero only remembers how many zero
/// fractional digits it carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Signed {
    Zero(Vec<Digit>),
    Negative(Magnitude),
    Positive(Magnitude),
}

/// Exact rational written in positional notation in some base.
///
/// The value is `sign × (integer_part . non_repeating_part (repeating_part)*)`
/// with every digit in `[0, base)`. Every instance produced by this crate is
/// canonical:
///
/// - the integer part has no leading zero
/// - the repeating part is its own minimal period, is not all zeros and is
///   not all `base - 1`
/// - no suffix of the non-repeating part duplicates a rotation of the cycle
/// - the sign is zero exactly when every digit is zero
///
/// Radices compare for structural equality only. There is deliberately no
/// ordering; convert with [`Radix::as_rational`] to compare values.
///
/// ```compile_fail
/// use radix_rational::Radix;
///
/// let a = Radix::new(1, vec![1], vec![], vec![], 10).unwrap();
/// let b = Radix::new(1, vec![2], vec![], vec![], 10).unwrap();
/// let _ = a < b;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Radix {
    value: Signed,
    base: u32,
}

impl Radix {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Validate and canonicalize a radix from its raw parts.
    ///
    /// # Errors
    /// - `InvalidBase` if `base` is less than 2
    /// - `InvalidDigit` if any digit is not in `[0, base)`
    /// - `InvalidSign` if `sign` is not -1, 0 or 1, or is 0 while some digit
    ///   is not
    pub fn new(
        sign: i8,
        integer_part: Vec<Digit>,
        non_repeating_part: Vec<Digit>,
        repeating_part: Vec<Digit>,
        base: u32,
    ) -> RadixResult<Self> {
        let magnitude = Magnitude::new(integer_part, non_repeating_part, repeating_part);
        validate(sign, &magnitude, base)?;
        Ok(Self::from_magnitude(sign, magnitude, base, true))
    }

    /// Build a radix without validation.
    ///
    /// The caller guarantees that `base >= 2`, every digit is below `base`,
    /// and `sign` is consistent with the digits. With `canonicalize` false
    /// the parts must additionally already be in canonical form.
    pub fn new_unchecked(
        sign: i8,
        integer_part: Vec<Digit>,
        non_repeating_part: Vec<Digit>,
        repeating_part: Vec<Digit>,
        base: u32,
        canonicalize: bool,
    ) -> Self {
        let magnitude = Magnitude::new(integer_part, non_repeating_part, repeating_part);
        Self::from_magnitude(sign, magnitude, base, canonicalize)
    }

    /// Zero with `precision` zero fractional digits.
    pub fn zero(base: u32, precision: usize) -> Self {
        Self {
            value: Signed::Zero(vec![0; precision]),
            base,
        }
    }

    pub(crate) fn from_magnitude(
        sign: i8,
        magnitude: Magnitude,
        base: u32,
        canonical: bool,
    ) -> Self {
        let magnitude = if canonical {
            canonicalize(magnitude, base)
        } else {
            magnitude
        };

        let value = if sign == 0 || (canonical && magnitude.is_zero()) {
            Signed::Zero(magnitude.non_repeating_part)
        } else if sign < 0 {
            Signed::Negative(magnitude)
        } else {
            Signed::Positive(magnitude)
        };

        Self { value, base }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn sign(&self) -> Sign {
        match self.value {
            Signed::Zero(_) => Sign::Zero,
            Signed::Negative(_) => Sign::Negative,
            Signed::Positive(_) => Sign::Positive,
        }
    }

    pub fn base(&self) -> u32 {
        self.base
    }

    /// Digits left of the radix point.
    pub fn integer_part(&self) -> &[Digit] {
        match &self.value {
            Signed::Zero(_) => &[],
            Signed::Negative(m) | Signed::Positive(m) => &m.integer_part,
        }
    }

    /// Fractional digits before the cycle starts.
    pub fn non_repeating_part(&self) -> &[Digit] {
        match &self.value {
            Signed::Zero(zeros) => zeros,
            Signed::Negative(m) | Signed::Positive(m) => &m.non_repeating_part,
        }
    }

    /// The cycle; empty for a terminating value.
    pub fn repeating_part(&self) -> &[Digit] {
        match &self.value {
            Signed::Zero(_) => &[],
            Signed::Negative(m) | Signed::Positive(m) => &m.repeating_part,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self.value, Signed::Zero(_))
    }

    /// Whether there are no non-zero fractional digits.
    pub fn is_integer(&self) -> bool {
        self.repeating_part().is_empty() && self.non_repeating_part().iter().all(|&d| d == 0)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// The exact value.
    pub fn as_rational(&self) -> BigRational {
        let (denominator, numerator) = undivide(
            self.integer_part(),
            self.non_repeating_part(),
            self.repeating_part(),
            self.base,
        );

        let value = BigRational::new(BigInt::from(numerator), BigInt::from(denominator));
        match self.sign() {
            Sign::Negative => -value,
            _ => value,
        }
    }

    /// This value rounded to an integer by `method`.
    ///
    /// Returns the integer and its relation to this value.
    pub fn as_int(&self, method: RoundingMethod) -> (BigInt, Ordering) {
        let (integral, relation) = self.rounded(0, method);
        let magnitude = BigInt::from(to_int(integral.integer_part(), integral.base));
        let value = match integral.sign() {
            Sign::Negative => -magnitude,
            _ => magnitude,
        };
        (value, relation)
    }

    /// This value with exactly `precision` fractional digits, rounded by
    /// `method`, and the relation of the result to this value.
    pub fn rounded(&self, precision: usize, method: RoundingMethod) -> (Radix, Ordering) {
        rounded(self, precision, method)
    }

    /// The same value in `base`.
    ///
    /// Conversion goes through the exact rational, so nothing is lost.
    ///
    /// # Errors
    /// Returns `InvalidBase` if `base` is less than 2.
    pub fn in_base(&self, base: u32) -> RadixResult<Radix> {
        if base == self.base {
            return Ok(self.clone());
        }
        let (result, _) = from_rational(&self.as_rational(), base, None, RoundingMethod::Down)?;
        Ok(result)
    }

    /// Unit of least precision: `1 / base^len(non_repeating_part)`.
    ///
    /// `None` for a repeating value.
    pub fn ulp(&self) -> Option<BigRational> {
        if !self.repeating_part().is_empty() {
            return None;
        }
        let scale = num_traits::pow(BigUint::from(self.base), self.non_repeating_part().len());
        Some(BigRational::new(BigInt::one(), BigInt::from(scale)))
    }
}

impl Neg for Radix {
    type Output = Radix;

    fn neg(self) -> Radix {
        let value = match self.value {
            Signed::Zero(zeros) => Signed::Zero(zeros),
            Signed::Negative(m) => Signed::Positive(m),
            Signed::Positive(m) => Signed::Negative(m),
        };
        Radix {
            value,
            base: self.base,
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

fn validate(sign: i8, magnitude: &Magnitude, base: u32) -> RadixResult<()> {
    if base < 2 {
        return Err(RadixError::InvalidBase(base));
    }

    let parts = [
        (DigitPart::Integer, &magnitude.integer_part),
        (DigitPart::NonRepeating, &magnitude.non_repeating_part),
        (DigitPart::Repeating, &magnitude.repeating_part),
    ];
    for (part, digits) in parts {
        if let Some(&digit) = digits.iter().find(|&&d| d >= base) {
            return Err(RadixError::InvalidDigit { part, digit, base });
        }
    }

    if !(-1..=1).contains(&sign) {
        return Err(RadixError::InvalidSign {
            sign,
            reason: "must be an int between -1 and 1",
        });
    }

    if sign == 0 && !magnitude.is_zero() {
        return Err(RadixError::InvalidSign {
            sign,
            reason: "can not be 0 unless number is also zero",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(sign: i8, integer: &[Digit], non_repeating: &[Digit], repeating: &[Digit]) -> Radix {
        Radix::new(
            sign,
            integer.to_vec(),
            non_repeating.to_vec(),
            repeating.to_vec(),
            10,
        )
        .unwrap()
    }

    fn ratio(numerator: i64, denominator: i64) -> BigRational {
        BigRational::new(BigInt::from(numerator), BigInt::from(denominator))
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(
            Radix::new(1, vec![1], vec![], vec![], 1),
            Err(RadixError::InvalidBase(1))
        );
        assert_eq!(
            Radix::new(1, vec![1], vec![10], vec![], 10),
            Err(RadixError::InvalidDigit {
                part: DigitPart::NonRepeating,
                digit: 10,
                base: 10,
            })
        );
        assert!(matches!(
            Radix::new(2, vec![1], vec![], vec![], 10),
            Err(RadixError::InvalidSign { sign: 2, .. })
        ));
        assert!(matches!(
            Radix::new(0, vec![1], vec![], vec![], 10),
            Err(RadixError::InvalidSign { sign: 0, .. })
        ));
    }

    #[test]
    fn test_zero_forms() {
        let zero = radix(0, &[0, 0], &[0, 0], &[]);
        assert_eq!(zero.sign(), Sign::Zero);
        assert_eq!(zero.integer_part(), &[] as &[Digit]);
        assert_eq!(zero.non_repeating_part(), &[0, 0]);
        assert_eq!(zero.repeating_part(), &[] as &[Digit]);

        // Trailing zeros are copies of a zero cycle and fold away with it
        let folded = radix(0, &[], &[0, 0], &[0]);
        assert_eq!(folded, Radix::zero(10, 0));

        // A signed zero magnitude collapses to zero
        let signed = radix(-1, &[], &[0], &[]);
        assert_eq!(signed, Radix::zero(10, 1));
        assert!(signed.is_zero());
    }

    #[test]
    fn test_canonical_collapse() {
        let one = radix(1, &[], &[], &[9]);
        assert_eq!(one.integer_part(), &[1]);
        assert_eq!(one.non_repeating_part(), &[] as &[Digit]);
        assert_eq!(one.repeating_part(), &[] as &[Digit]);
        assert_eq!(one.as_rational(), ratio(1, 1));

        // -9.9(99) = -10
        let negative = radix(-1, &[9], &[9], &[9, 9]);
        assert_eq!(negative.integer_part(), &[1, 0]);
        assert_eq!(negative.non_repeating_part(), &[] as &[Digit]);
        assert_eq!(negative.sign(), Sign::Negative);
    }

    #[test]
    fn test_canonical_fold() {
        let value = radix(1, &[0, 3], &[6, 2, 1, 2], &[1, 2, 1, 2]);
        assert_eq!(value.integer_part(), &[3]);
        assert_eq!(value.non_repeating_part(), &[6]);
        assert_eq!(value.repeating_part(), &[2, 1]);
        // 3.6(21) = 3 + 615/990
        assert_eq!(value.as_rational(), ratio(3, 1) + ratio(615, 990));
    }

    #[test]
    fn test_as_rational() {
        assert_eq!(radix(1, &[], &[], &[3]).as_rational(), ratio(1, 3));
        assert_eq!(radix(-1, &[1, 2], &[5], &[]).as_rational(), ratio(-25, 2));
        assert_eq!(radix(1, &[6], &[1], &[6]).as_rational(), ratio(37, 6));
        assert_eq!(Radix::zero(10, 3).as_rational(), ratio(0, 1));
    }

    #[test]
    fn test_as_int() {
        let value = radix(-1, &[2], &[5], &[]);
        assert_eq!(
            value.as_int(RoundingMethod::HalfUp),
            (BigInt::from(-2), Ordering::Greater)
        );
        assert_eq!(
            value.as_int(RoundingMethod::HalfDown),
            (BigInt::from(-3), Ordering::Less)
        );
        assert_eq!(
            value.as_int(RoundingMethod::TowardZero),
            (BigInt::from(-2), Ordering::Greater)
        );
        assert_eq!(
            radix(1, &[7], &[], &[]).as_int(RoundingMethod::Up),
            (BigInt::from(7), Ordering::Equal)
        );
    }

    #[test]
    fn test_in_base() {
        let third = radix(1, &[], &[], &[3]);
        let ternary = third.in_base(3).unwrap();
        assert_eq!(ternary.non_repeating_part(), &[1]);
        assert_eq!(ternary.repeating_part(), &[] as &[Digit]);
        assert_eq!(ternary.in_base(10).unwrap(), third);

        assert_eq!(third.in_base(10).unwrap(), third);
        assert_eq!(third.in_base(1), Err(RadixError::InvalidBase(1)));
    }

    #[test]
    fn test_ulp() {
        assert_eq!(radix(1, &[], &[], &[3]).ulp(), None);
        assert_eq!(radix(1, &[4], &[2, 5], &[]).ulp(), Some(ratio(1, 100)));
        assert_eq!(radix(1, &[4], &[], &[]).ulp(), Some(ratio(1, 1)));
    }

    #[test]
    fn test_negation() {
        let value = radix(1, &[1], &[], &[6]);
        let negated = -value.clone();
        assert_eq!(negated.sign(), Sign::Negative);
        assert_eq!(negated.as_rational(), -value.as_rational());
        assert_eq!(-Radix::zero(10, 2), Radix::zero(10, 2));
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(radix(1, &[1], &[], &[]), radix(1, &[0, 1], &[], &[]));
        // Same value, different fractional length
        assert_ne!(radix(1, &[1], &[], &[]), radix(1, &[1], &[0], &[]));
        assert_ne!(
            radix(1, &[1], &[], &[]),
            Radix::new(1, vec![1], vec![], vec![], 16).unwrap()
        );
    }

    #[test]
    fn test_sign_helpers() {
        assert_eq!(Sign::Negative.as_i8(), -1);
        assert_eq!(-Sign::Positive, Sign::Negative);
        assert_eq!(Sign::Negative.orient(Ordering::Less), Ordering::Greater);
        assert_eq!(Sign::Zero.orient(Ordering::Less), Ordering::Equal);
    }
}
