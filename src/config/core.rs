use crate::projection::BenefitRealizationFactors;
use serde::{Deserialize, Serialize};

/// Root of `.roimap.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoimapConfig {
    #[serde(default)]
    pub guardrails: GuardrailConfig,

    /// Fallbacks for scenario advanced settings left unset
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuardrailConfig {
    /// Flag ROI below 100%. ROI above 300% blocks regardless.
    #[serde(default = "default_true")]
    pub roi_band_enabled: bool,

    /// Block instead of warn when ROI is below 100%
    #[serde(default)]
    pub block_mode: bool,

    #[serde(default = "default_true")]
    pub override_guard_enabled: bool,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            roi_band_enabled: true,
            block_mode: false,
            override_guard_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Percent
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,

    #[serde(default)]
    pub realization: BenefitRealizationFactors,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            discount_rate: default_discount_rate(),
            realization: BenefitRealizationFactors::default(),
        }
    }
}

impl DefaultsConfig {
    /// Realization factors must be non-negative and finite.
    pub fn validate(&self) -> Result<(), String> {
        let invalid = self
            .realization
            .as_array()
            .iter()
            .any(|f| !f.is_finite() || *f < 0.0);
        if invalid {
            return Err(format!(
                "realization factors must be non-negative, got {:?}",
                self.realization.as_array()
            ));
        }
        if !self.discount_rate.is_finite() {
            return Err("discount_rate must be a finite number".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `terminal`, `json` or `markdown`
    #[serde(default)]
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

fn default_true() -> bool {
    true
}

fn default_discount_rate() -> f64 {
    10.0
}
