// ============================================================================
// Numeric Module
// Natural-number digit arithmetic in arbitrary bases
// ============================================================================
//
// This module provides:
// - Digit sequences: encoding and decoding naturals in a base
// - Division: long division with cycle detection, and its inverse
// - RadixError: error type shared by the whole crate
//
// Digit sequences are most significant digit first and backed by BigUint,
// so no operation here overflows.

mod digits;
mod errors;

pub mod division;

pub use digits::{carry_in, convert, from_int, is_odd, to_int};
pub use division::{division, undivision, Quotient};
pub use errors::{Digit, DigitPart, RadixError, RadixResult};
