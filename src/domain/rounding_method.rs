// ============================================================================
// Rounding Methods
// Rounding policy table shared by division, radix rounding and integers
// ============================================================================

use super::radix::Sign;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Neg;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a discarded fractional remainder is resolved into the kept digits.
///
/// Directed methods ignore the size of the remainder. Half methods round
/// to the nearest neighbour and only differ in how an exact tie is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMethod {
    /// Toward negative infinity
    Down,
    /// Toward positive infinity
    Up,
    /// Toward zero (truncation)
    TowardZero,
    /// Nearest; ties toward negative infinity
    HalfDown,
    /// Nearest; ties toward positive infinity
    HalfUp,
    /// Nearest; ties toward zero
    HalfTowardZero,
    /// Nearest; ties away from zero
    HalfAwayFromZero,
    /// Nearest; ties to the neighbour whose last kept place is even
    HalfEven,
}

impl RoundingMethod {
    /// Every rounding method.
    pub const METHODS: [RoundingMethod; 8] = [
        RoundingMethod::Down,
        RoundingMethod::Up,
        RoundingMethod::TowardZero,
        RoundingMethod::HalfDown,
        RoundingMethod::HalfUp,
        RoundingMethod::HalfTowardZero,
        RoundingMethod::HalfAwayFromZero,
        RoundingMethod::HalfEven,
    ];

    /// Methods whose outcome depends on how the remainder compares to one half.
    pub const CONDITIONAL: [RoundingMethod; 5] = [
        RoundingMethod::HalfDown,
        RoundingMethod::HalfUp,
        RoundingMethod::HalfTowardZero,
        RoundingMethod::HalfAwayFromZero,
        RoundingMethod::HalfEven,
    ];

    /// The method that rounds `-x` the way `self` rounds `x`, up to negation.
    ///
    /// This is an involution: `m.reverse().reverse() == m`.
    pub const fn reverse(self) -> Self {
        match self {
            RoundingMethod::Down => RoundingMethod::Up,
            RoundingMethod::Up => RoundingMethod::Down,
            RoundingMethod::HalfDown => RoundingMethod::HalfUp,
            RoundingMethod::HalfUp => RoundingMethod::HalfDown,
            other => other,
        }
    }

    /// Whether this is one of the half (round-to-nearest) methods.
    pub const fn is_conditional(self) -> bool {
        !matches!(
            self,
            RoundingMethod::Down | RoundingMethod::Up | RoundingMethod::TowardZero
        )
    }

    /// For directed methods, whether a value of `sign` grows in magnitude.
    /// `None` for half methods, which need the remainder.
    pub(crate) fn directed_increment(self, sign: Sign) -> Option<bool> {
        match self {
            RoundingMethod::TowardZero => Some(false),
            RoundingMethod::Down => Some(sign == Sign::Negative),
            RoundingMethod::Up => Some(sign == Sign::Positive),
            _ => None,
        }
    }

    /// Whether an exact tie moves a value of `sign` away from zero.
    fn tie_increments(self, sign: Sign, truncated_is_odd: bool) -> bool {
        match self {
            RoundingMethod::HalfTowardZero => false,
            RoundingMethod::HalfDown => sign == Sign::Negative,
            RoundingMethod::HalfUp => sign == Sign::Positive,
            RoundingMethod::HalfEven => truncated_is_odd,
            _ => true,
        }
    }

    /// Whether rounding a non-exact value of `sign` increments its magnitude.
    ///
    /// `remainder` is the discarded fraction compared with one half and
    /// `truncated_is_odd` the parity of the truncated magnitude scaled to an
    /// integer; both are only consulted by half methods.
    pub(crate) fn increments(
        self,
        sign: Sign,
        remainder: Ordering,
        truncated_is_odd: bool,
    ) -> bool {
        if let Some(increment) = self.directed_increment(sign) {
            return increment;
        }
        match remainder {
            Ordering::Less => false,
            Ordering::Greater => true,
            Ordering::Equal => self.tie_increments(sign, truncated_is_odd),
        }
    }
}

impl fmt::Display for RoundingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingMethod::Down => "down toward -infinity",
            RoundingMethod::Up => "up toward +infinity",
            RoundingMethod::TowardZero => "toward zero",
            RoundingMethod::HalfDown => "nearest, ties toward -infinity",
            RoundingMethod::HalfUp => "nearest, ties toward +infinity",
            RoundingMethod::HalfTowardZero => "nearest, ties toward zero",
            RoundingMethod::HalfAwayFromZero => "nearest, ties away from zero",
            RoundingMethod::HalfEven => "nearest, ties to even",
        };
        f.write_str(name)
    }
}

/// Relation of an incremented or truncated magnitude to the exact value.
#[inline]
pub(crate) fn relation_of(sign: Sign, incremented: bool) -> Ordering {
    let magnitude = if incremented {
        Ordering::Greater
    } else {
        Ordering::Less
    };
    sign.orient(magnitude)
}

// ============================================================================
// Sign Flip
// ============================================================================

/// Rounds a signed value by rounding its magnitude.
///
/// For a negative value the magnitude is rounded with the reversed method,
/// then both the result and its relation are negated. This gives the same
/// answer as rounding the signed value directly.
#[derive(Debug, Clone, Copy)]
pub struct MagnitudeRounding {
    sign: Sign,
    method: RoundingMethod,
}

impl MagnitudeRounding {
    pub fn new(sign: Sign, method: RoundingMethod) -> Self {
        Self { sign, method }
    }

    /// Method to apply to the absolute value.
    pub fn magnitude_method(&self) -> RoundingMethod {
        if self.sign == Sign::Negative {
            self.method.reverse()
        } else {
            self.method
        }
    }

    /// Re-express a rounded magnitude and its relation in the signed frame.
    pub fn restore<T>(&self, (value, relation): (T, Ordering)) -> (T, Ordering)
    where
        T: Neg<Output = T>,
    {
        if self.sign == Sign::Negative {
            (-value, relation.reverse())
        } else {
            (value, relation)
        }
    }
}
