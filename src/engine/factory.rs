// ============================================================================
// Converter Factory
// Creates radix converters with validated configuration
// ============================================================================

use crate::domain::{Radix, RadixConfig, RoundingMethod};
use crate::engine::{from_rational, round_to_int};
use crate::interfaces::ExactValue;
use crate::numeric::RadixResult;
use num_bigint::BigInt;
use std::cmp::Ordering;

// ============================================================================
// Converter
// ============================================================================

/// Converts exact values into radices under one fixed configuration.
///
/// # Example
/// ```
/// use radix_rational::prelude::*;
/// use rust_decimal::Decimal;
///
/// let config = RadixConfig::binary().with_precision(4).with_method(RoundingMethod::HalfEven);
/// let converter = RadixConverter::from_config(config).unwrap();
///
/// let (radix, relation) = converter.convert(&Decimal::new(3, 1)).unwrap();
/// assert_eq!(radix.non_repeating_part(), &[0, 1, 0, 1]);
/// assert_eq!(relation, std::cmp::Ordering::Greater);
/// ```
#[derive(Debug, Clone)]
pub struct RadixConverter {
    config: RadixConfig,
    precision: Option<usize>,
}

impl RadixConverter {
    /// Creates a converter from configuration
    ///
    /// # Errors
    /// `InvalidBase` or `InvalidPrecision` if the configuration is invalid.
    pub fn from_config(config: RadixConfig) -> RadixResult<Self> {
        config.validate()?;
        let precision = config.precision()?;
        Ok(Self { config, precision })
    }

    /// Convert `value` into the configured base and precision.
    pub fn convert<V: ExactValue + ?Sized>(&self, value: &V) -> RadixResult<(Radix, Ordering)> {
        from_rational(
            &value.to_rational(),
            self.config.base,
            self.precision,
            self.config.method,
        )
    }

    /// Re-express `radix` in the configured base, then apply the configured
    /// rounding.
    pub fn convert_radix(&self, radix: &Radix) -> RadixResult<(Radix, Ordering)> {
        tracing::debug!(
            from = radix.base(),
            to = self.config.base,
            "converting radix between bases"
        );

        let converted = radix.in_base(self.config.base)?;
        match self.precision {
            Some(precision) => Ok(converted.rounded(precision, self.config.method)),
            None => Ok((converted, Ordering::Equal)),
        }
    }

    /// Round `value` to an integer with the configured method.
    pub fn round_to_int<V: ExactValue + ?Sized>(&self, value: &V) -> (BigInt, Ordering) {
        round_to_int(&value.to_rational(), self.config.method)
    }

    /// Get the configuration (for inspection)
    pub fn config(&self) -> &RadixConfig {
        &self.config
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating converters with fluent API
///
/// # Example
/// ```
/// use radix_rational::prelude::*;
///
/// let converter = RadixConverterBuilder::new(3)
///     .with_precision(2)
///     .half_up()
///     .build()
///     .unwrap();
/// let (radix, _) = converter.convert(&1i64).unwrap();
/// assert_eq!(radix.integer_part(), &[1]);
/// assert_eq!(radix.non_repeating_part(), &[0, 0]);
/// ```
pub struct RadixConverterBuilder {
    config: RadixConfig,
}

impl RadixConverterBuilder {
    /// Create a new builder for the target base
    pub fn new(base: u32) -> Self {
        Self {
            config: RadixConfig::new(base),
        }
    }

    /// Keep `precision` fractional digits
    pub fn with_precision(mut self, precision: i64) -> Self {
        self.config.precision = Some(precision);
        self
    }

    /// Produce exact expansions (default)
    pub fn unbounded(mut self) -> Self {
        self.config.precision = None;
        self
    }

    pub fn with_method(mut self, method: RoundingMethod) -> Self {
        self.config.method = method;
        self
    }

    pub fn half_up(self) -> Self {
        self.with_method(RoundingMethod::HalfUp)
    }

    pub fn half_even(self) -> Self {
        self.with_method(RoundingMethod::HalfEven)
    }

    pub fn toward_zero(self) -> Self {
        self.with_method(RoundingMethod::TowardZero)
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    pub fn decimal() -> Self {
        Self {
            config: RadixConfig::decimal(),
        }
    }

    pub fn binary() -> Self {
        Self {
            config: RadixConfig::binary(),
        }
    }

    pub fn hexadecimal() -> Self {
        Self {
            config: RadixConfig::hexadecimal(),
        }
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self) -> RadixResult<RadixConverter> {
        RadixConverter::from_config(self.config)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &RadixConfig {
        &self.config
    }
}
