//! Detector configuration
//!
//! With the `serde` feature the configuration can be loaded from TOML; every
//! key is optional and falls back to the defaults below.
//!
//! ```toml
//! width = 8
//! budget_factor = 2
//! verification_probes = 1
//! exhausted_verdict = "structured"
//! ```

use qfeistel_api::Classification;
use qfeistel_params::construction::DEFAULT_HALF_BITS;
use qfeistel_params::detection::{BUDGET_FACTOR, VERIFICATION_PROBES};
use qfeistel_params::encoding::MAX_PACKED_WIDTH;

use crate::error::{DetectError, Result};

/// Parameters of one detection attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct DetectorConfig {
    /// Number of unknowns `W`; must match the oracle's width
    pub width: usize,
    /// Accepted-round budget is `budget_factor * width`
    pub budget_factor: usize,
    /// Number of `f(u) == f(u ^ s)` checks after solving
    pub verification_probes: usize,
    /// Verdict reported when the budget runs out before full rank
    pub exhausted_verdict: Classification,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_HALF_BITS,
            budget_factor: BUDGET_FACTOR,
            verification_probes: VERIFICATION_PROBES,
            exhausted_verdict: Classification::Structured,
        }
    }
}

// Builder methods
impl DetectorConfig {
    /// Set the number of unknowns
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the budget multiplier
    pub fn with_budget_factor(mut self, factor: usize) -> Self {
        self.budget_factor = factor;
        self
    }

    /// Set the number of verification probes
    pub fn with_verification_probes(mut self, probes: usize) -> Self {
        self.verification_probes = probes;
        self
    }

    /// Set the verdict used when the budget is exhausted
    pub fn with_exhausted_verdict(mut self, verdict: Classification) -> Self {
        self.exhausted_verdict = verdict;
        self
    }
}

impl DetectorConfig {
    /// Defaults for a permutation on `2 * half_bits`-bit blocks
    pub fn for_half_bits(half_bits: usize) -> Self {
        Self::default().with_width(half_bits)
    }

    /// Total number of accepted rounds before giving up
    pub fn budget(&self) -> usize {
        self.budget_factor.saturating_mul(self.width)
    }

    /// Check every field is in range
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.width > MAX_PACKED_WIDTH {
            return Err(DetectError::Config(format!(
                "width must be in 1..={}, got {}",
                MAX_PACKED_WIDTH, self.width
            )));
        }
        if self.budget_factor == 0 {
            return Err(DetectError::config("budget_factor must be at least 1"));
        }
        if self.verification_probes == 0 {
            return Err(DetectError::config("verification_probes must be at least 1"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| DetectError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Render as a TOML document
    #[cfg(feature = "serde")]
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| DetectError::Config(e.to_string()))
    }
}
