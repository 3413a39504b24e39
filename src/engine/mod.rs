// ============================================================================
// Engine Module
// Rounding and conversion algorithms over radices and rationals
// ============================================================================

mod conversion;
mod rounding;

pub mod factory;

pub use conversion::{from_rational, round_to_int};
pub use factory::{RadixConverter, RadixConverterBuilder};
pub use rounding::rounded;
