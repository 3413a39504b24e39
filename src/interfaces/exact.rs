// ============================================================================
// Exact Value Interface
// Defines the contract for inputs that denote an exact rational
// ============================================================================

use crate::domain::Radix;
use num_bigint::BigInt;
use num_rational::{BigRational, Ratio};
use rust_decimal::Decimal;

/// A value that can be viewed as an exact rational without loss.
/// Implementations: big and machine rationals, integers, decimals, radices.
pub trait ExactValue {
    /// The exact rational this value denotes
    fn to_rational(&self) -> BigRational;
}

impl ExactValue for BigRational {
    fn to_rational(&self) -> BigRational {
        self.clone()
    }
}

impl ExactValue for Ratio<i64> {
    fn to_rational(&self) -> BigRational {
        BigRational::new(BigInt::from(*self.numer()), BigInt::from(*self.denom()))
    }
}

impl ExactValue for BigInt {
    fn to_rational(&self) -> BigRational {
        BigRational::from_integer(self.clone())
    }
}

impl ExactValue for i64 {
    fn to_rational(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(*self))
    }
}

impl ExactValue for u64 {
    fn to_rational(&self) -> BigRational {
        BigRational::from_integer(BigInt::from(*self))
    }
}

/// `mantissa / 10^scale`
impl ExactValue for Decimal {
    fn to_rational(&self) -> BigRational {
        let denominator = num_traits::pow(BigInt::from(10), self.scale() as usize);
        BigRational::new(BigInt::from(self.mantissa()), denominator)
    }
}

impl ExactValue for Radix {
    fn to_rational(&self) -> BigRational {
        self.as_rational()
    }
}

impl<T: ExactValue + ?Sized> ExactValue for &T {
    fn to_rational(&self) -> BigRational {
        (**self).to_rational()
    }
}
