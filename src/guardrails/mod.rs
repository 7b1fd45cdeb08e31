//! Policy checks over computed results and raw inputs.
//!
//! Each evaluator is a pure function returning a [`GuardrailResult`]
//! verdict. Nothing here enforces a block; callers (export, `--strict`)
//! inspect the verdicts and decide.

pub mod export;
pub mod manual_override;
pub mod report;
pub mod roi;
pub mod sanity;

pub use export::{check_export_readiness, ExportReadiness};
pub use manual_override::check_manual_override_allowed;
pub use report::{DataCompleteness, GuardrailReport};
pub use roi::{check_roi_export_threshold, check_roi_guardrail, ROI_EXPORT_LIMIT, ROI_LOW_WATERMARK};
pub use sanity::{
    check_benefit_realization_factors, check_payback_period, validate_calculation_inputs,
    PlausibilityInputs,
};

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(s)
    }
}

/// Verdict of a single guardrail. Recomputed on every evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardrailResult {
    pub allowed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub severity: Severity,
}

impl GuardrailResult {
    pub fn pass() -> Self {
        Self {
            allowed: true,
            warning: None,
            error: None,
            severity: Severity::Info,
        }
    }

    /// Advisory only; `allowed` stays true.
    pub fn warn(message: impl Into<String>) -> Self {
        Self {
            allowed: true,
            warning: Some(message.into()),
            error: None,
            severity: Severity::Warning,
        }
    }

    pub fn block(message: impl Into<String>) -> Self {
        Self {
            allowed: false,
            warning: None,
            error: Some(message.into()),
            severity: Severity::Error,
        }
    }

    pub fn is_blocking(&self) -> bool {
        !self.allowed
    }

    /// The error text if present, otherwise the warning.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().or(self.warning.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_severity() {
        assert_eq!(GuardrailResult::pass().severity, Severity::Info);
        assert!(GuardrailResult::warn("x").allowed);
        assert!(GuardrailResult::block("x").is_blocking());
    }

    #[test]
    fn test_pass_serializes_without_messages() {
        let json = serde_json::to_string(&GuardrailResult::pass()).unwrap();
        assert_eq!(json, r#"{"allowed":true,"severity":"info"}"#);
    }

    #[test]
    fn test_message_prefers_error() {
        let mut result = GuardrailResult::block("hard");
        result.warning = Some("soft".into());
        assert_eq!(result.message(), Some("hard"));
        assert_eq!(GuardrailResult::warn("soft").message(), Some("soft"));
        assert_eq!(GuardrailResult::pass().message(), None);
    }

    #[test]
    fn test_severity_orders_by_seriousness() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }
}
