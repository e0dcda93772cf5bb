//! Converter configuration
//!
//! The range policy is chosen once, when a [`Converter`](crate::Converter)
//! is built, and then applies to every conversion it performs. Desktop
//! tooling can load the configuration from JSON or TOML with the `serde`
//! feature:
//!
//! ```json
//! { "range_policy": "reject", "warn_out_of_range": false }
//! ```

use crate::domain::RangePolicy;

/// Construction-time settings for a converter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ConverterConfig {
    /// Treatment of inputs outside the documented range
    pub range_policy: RangePolicy,

    /// Log a warning whenever an input is extrapolated or clamped
    pub warn_out_of_range: bool,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            // Matches the reference functions: always return a number
            range_policy: RangePolicy::Extrapolate,
            warn_out_of_range: true,
        }
    }
}

impl ConverterConfig {
    /// Reject anything the standard does not certify
    pub const fn strict() -> Self {
        Self {
            range_policy: RangePolicy::Reject,
            warn_out_of_range: true,
        }
    }

    /// Pin out-of-range inputs to the nearest bound
    pub const fn clamping() -> Self {
        Self {
            range_policy: RangePolicy::Clamp,
            warn_out_of_range: true,
        }
    }

    /// Replace the range policy
    pub const fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    /// Disable out-of-range warnings (e.g. for sweeps past the range ends)
    pub const fn quiet(mut self) -> Self {
        self.warn_out_of_range = false;
        self
    }
}
