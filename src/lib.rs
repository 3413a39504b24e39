// ============================================================================
// Radix Rational Library
// Exact rationals in positional notation with repeating cycles
// ============================================================================

//! # Radix Rational
//!
//! Exact conversion between rational numbers and positional digit notation
//! in any base of 2 or more.
//!
//! ## Features
//!
//! - **Lossless expansions** with the repeating cycle detected and minimised
//! - **Canonical form** so that equal values in one base compare equal
//! - **Eight rounding methods**, each reporting how the result relates to the
//!   exact value
//! - **Base conversion** through exact rationals
//!
//! ## Example
//!
//! ```rust
//! use radix_rational::prelude::*;
//! use num_bigint::BigInt;
//! use num_rational::BigRational;
//! use std::cmp::Ordering;
//!
//! // 37/6 = 6.1(6)
//! let value = BigRational::new(BigInt::from(37), BigInt::from(6));
//! let (radix, relation) = from_rational(&value, 10, None, RoundingMethod::Down).unwrap();
//! assert_eq!(radix.integer_part(), &[6]);
//! assert_eq!(radix.non_repeating_part(), &[1]);
//! assert_eq!(radix.repeating_part(), &[6]);
//! assert_eq!(relation, Ordering::Equal);
//!
//! // Two digits, nearest
//! let (rounded, relation) = radix.rounded(2, RoundingMethod::HalfUp);
//! assert_eq!(rounded.non_repeating_part(), &[1, 7]);
//! assert_eq!(relation, Ordering::Greater);
//!
//! // Same value in base 6 terminates: 10.1
//! let senary = radix.in_base(6).unwrap();
//! assert_eq!(senary.integer_part(), &[1, 0]);
//! assert_eq!(senary.non_repeating_part(), &[1]);
//! assert_eq!(senary.as_rational(), value);
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod utils;

pub use domain::{Radix, RoundingMethod, Sign};
pub use numeric::{RadixError, RadixResult};

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{MagnitudeRounding, Radix, RadixConfig, RoundingMethod, Sign};
    pub use crate::engine::{from_rational, round_to_int, RadixConverter, RadixConverterBuilder};
    pub use crate::interfaces::ExactValue;
    pub use crate::numeric::{Digit, RadixError, RadixResult};
}
