// ============================================================================
// Conversion Configuration
// Target base, fractional precision and rounding method for a converter
// ============================================================================

use super::rounding_method::RoundingMethod;
use crate::numeric::{RadixError, RadixResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings shared by every conversion a [`RadixConverter`] performs.
///
/// `precision` is kept signed so that configuration read from outside can be
/// rejected by [`RadixConfig::validate`] instead of failing to parse.
///
/// [`RadixConverter`]: crate::engine::RadixConverter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadixConfig {
    /// Target base, at least 2
    pub base: u32,

    /// Number of fractional digits to keep
    /// None means the exact expansion, repeating part included
    pub precision: Option<i64>,

    /// How discarded digits are resolved when a precision is set
    pub method: RoundingMethod,
}

impl RadixConfig {
    /// Exact conversion into `base`, rounding down if a precision is set later.
    pub fn new(base: u32) -> Self {
        Self {
            base,
            precision: None,
            method: RoundingMethod::Down,
        }
    }

    /// Builder method: Keep `precision` fractional digits
    pub fn with_precision(mut self, precision: i64) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Builder method: Set the rounding method
    pub fn with_method(mut self, method: RoundingMethod) -> Self {
        self.method = method;
        self
    }

    /// Validate the configuration
    ///
    /// # Errors
    /// - `InvalidBase` if `base` is less than 2
    /// - `InvalidPrecision` if `precision` is negative
    pub fn validate(&self) -> RadixResult<()> {
        if self.base < 2 {
            return Err(RadixError::InvalidBase(self.base));
        }

        if let Some(precision) = self.precision {
            if precision < 0 {
                return Err(RadixError::InvalidPrecision(precision));
            }
        }

        Ok(())
    }

    /// Precision as the core API takes it.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` if `precision` is negative or does not fit
    /// in `usize`.
    pub fn precision(&self) -> RadixResult<Option<usize>> {
        self.precision
            .map(|p| usize::try_from(p).map_err(|_| RadixError::InvalidPrecision(p)))
            .transpose()
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl RadixConfig {
    /// Exact base 10
    pub fn decimal() -> Self {
        Self::new(10)
    }

    /// Exact base 2
    pub fn binary() -> Self {
        Self::new(2)
    }

    /// Exact base 16
    pub fn hexadecimal() -> Self {
        Self::new(16)
    }
}

impl Default for RadixConfig {
    fn default() -> Self {
        Self::decimal()
    }
}
