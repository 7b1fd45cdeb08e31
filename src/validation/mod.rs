//! Input validation: numeric sanitation, per-field schema checks, and the
//! section completeness checks that feed export readiness.

pub mod completeness;
pub mod field;

pub use completeness::{
    assess_completeness, validate_agent_data, validate_maturity, validate_opportunity_data,
    validate_pricing_data,
};
pub use field::{
    parse_numeric_input, sanitize_numeric_input, validate_custom_maturity_value, validate_field,
    validate_non_negative, validate_override_inputs, validate_percentage, validate_range,
    FieldIssue,
};

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}
