// ============================================================================
// Domain Models Module
// Contains the radix value object, its canonical form and rounding policy
// ============================================================================

pub mod canonical;
pub mod config;
pub mod radix;
pub mod rounding_method;

pub use canonical::Magnitude;
pub use config::RadixConfig;
pub use radix::{Radix, Sign};
pub use rounding_method::{MagnitudeRounding, RoundingMethod};
