// ============================================================================
// Logging
// Subscriber setup for binaries; the library itself only emits events
// ============================================================================

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::prelude::*;

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Falls back to `radix_rational=debug` when `RUST_LOG` is unset. Returns an
/// error if a global subscriber is already installed.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("radix_rational=debug"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
