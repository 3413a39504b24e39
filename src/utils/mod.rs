// ============================================================================
// Utilities Module
// Helpers for binaries and demos built on this crate
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
