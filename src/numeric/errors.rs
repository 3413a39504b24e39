// ============================================================================
// Radix Errors
// Error types for digit validation and radix conversion
// ============================================================================

use std::fmt;

/// Digit type shared by every digit sequence in the crate.
///
/// A digit is valid for base `b` when it lies in `[0, b)`.
pub type Digit = u32;

/// The component of a radix a rejected digit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigitPart {
    Integer,
    NonRepeating,
    Repeating,
}

impl fmt::Display for DigitPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DigitPart::Integer => write!(f, "integer part"),
            DigitPart::NonRepeating => write!(f, "non-repeating part"),
            DigitPart::Repeating => write!(f, "repeating part"),
        }
    }
}

/// Errors raised by radix construction and conversion.
///
/// All of these are caller errors detected before any result is produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RadixError {
    /// Base is less than 2
    InvalidBase(u32),
    /// Precision is negative
    InvalidPrecision(i64),
    /// A digit lies outside `[0, base)`
    InvalidDigit {
        part: DigitPart,
        digit: Digit,
        base: u32,
    },
    /// Sign is not -1, 0 or 1, or is 0 while the magnitude is not
    InvalidSign { sign: i8, reason: &'static str },
    /// Divisor digits denote zero
    DivisionByZero,
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::InvalidBase(base) => {
                write!(f, "invalid base {}: must be at least 2", base)
            },
            RadixError::InvalidPrecision(precision) => {
                write!(f, "invalid precision {}: must be at least 0", precision)
            },
            RadixError::InvalidDigit { part, digit, base } => write!(
                f,
                "invalid digit {} in {}: values must be between 0 and {}",
                digit, part, base
            ),
            RadixError::InvalidSign { sign, reason } => {
                write!(f, "invalid sign {}: {}", sign, reason)
            },
            RadixError::DivisionByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for RadixError {}

/// Result type alias for radix operations
pub type RadixResult<T> = Result<T, RadixError>;
