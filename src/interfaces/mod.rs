// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod exact;

pub use exact::ExactValue;
