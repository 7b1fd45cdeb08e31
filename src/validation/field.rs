//! Numeric input sanitation and per-field schema checks.

use super::ValidationResult;
use crate::catalog::{ComponentDefinition, FieldKind, InputField};
use crate::formulas::ComponentInputs;
use serde::Serialize;

/// Keep digits, `.` and `,`; drop commas; fold any decimal points after
/// the first into the fractional part.
pub fn sanitize_numeric_input(text: &str) -> String {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    match digits.split_once('.') {
        Some((whole, fraction)) => format!("{whole}.{}", fraction.replace('.', "")),
        None => digits,
    }
}

/// Leading-number parse of the sanitized text; anything unparseable is 0.
pub fn parse_numeric_input(text: &str) -> f64 {
    let sanitized = sanitize_numeric_input(text);
    // "." and "" are the only non-numeric shapes sanitation can produce.
    sanitized.parse::<f64>().unwrap_or(0.0)
}

pub fn validate_non_negative(value: f64) -> ValidationResult {
    if value < 0.0 {
        ValidationResult::invalid("Value cannot be negative")
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_percentage(value: f64, min: f64, max: f64) -> ValidationResult {
    if value < min || value > max {
        ValidationResult::invalid(format!("Percentage must be between {min}% and {max}%"))
    } else {
        ValidationResult::valid()
    }
}

pub fn validate_range(value: f64, min: Option<f64>, max: Option<f64>) -> ValidationResult {
    if let Some(min) = min.filter(|m| value < *m) {
        return ValidationResult::invalid(format!("Value must be at least {min}"));
    }
    if let Some(max) = max.filter(|m| value > *m) {
        return ValidationResult::invalid(format!("Value must be no more than {max}"));
    }
    ValidationResult::valid()
}

/// Check one value against its field schema. A missing or zero value fails
/// a required field and passes an optional one.
pub fn validate_field(value: Option<f64>, field: &InputField) -> ValidationResult {
    let value = match value {
        Some(v) if v != 0.0 && !v.is_nan() => v,
        _ if field.required => return ValidationResult::invalid("This field is required"),
        _ => return ValidationResult::valid(),
    };

    let checks = [
        validate_non_negative(value),
        if field.kind == FieldKind::Percent {
            validate_percentage(value, field.min.unwrap_or(0.0), field.max.unwrap_or(100.0))
        } else {
            ValidationResult::valid()
        },
        validate_range(value, field.min, field.max),
    ];
    checks
        .into_iter()
        .find(|c| !c.is_valid)
        .unwrap_or_else(ValidationResult::valid)
}

/// A failed field check within one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldIssue {
    pub field_id: String,
    pub label: String,
    pub message: String,
}

/// Schema checks for explicit override values only. Inputs filled from
/// presets or volumes may legitimately be zero (e.g. a High maturity level).
pub fn validate_override_inputs(
    definition: &ComponentDefinition,
    overrides: &ComponentInputs,
) -> Vec<FieldIssue> {
    overrides
        .iter()
        .filter_map(|(field_id, value)| {
            let field = definition.field(field_id)?;
            let message = validate_field(Some(*value), field).error?;
            Some(FieldIssue {
                field_id: field.id.to_string(),
                label: field.label.to_string(),
                message,
            })
        })
        .collect()
}

/// Check a custom ("Other") maturity value against the component's range.
pub fn validate_custom_maturity_value(
    definition: &ComponentDefinition,
    value: f64,
) -> ValidationResult {
    match definition.other_range {
        Some(range) if range.contains(value) => ValidationResult::valid(),
        Some(range) => ValidationResult::invalid(format!(
            "Must be between {}% and {}%",
            range.min, range.max
        )),
        None => ValidationResult::invalid(format!(
            "{} does not accept a custom maturity value",
            definition.name
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{get_component, ComponentId};

    fn percent_field() -> InputField {
        InputField {
            id: "percentEliminated",
            label: "% Eliminated",
            kind: FieldKind::Percent,
            required: true,
            min: Some(0.0),
            max: Some(100.0),
            default_value: None,
            tooltip: None,
        }
    }

    #[test]
    fn test_sanitize_strips_symbols_and_commas() {
        assert_eq!(sanitize_numeric_input("$1,234.50"), "1234.50");
        assert_eq!(sanitize_numeric_input("-42"), "42");
        assert_eq!(sanitize_numeric_input("abc"), "");
    }

    #[test]
    fn test_sanitize_collapses_extra_decimal_points() {
        assert_eq!(sanitize_numeric_input("1.2.3"), "1.23");
        assert_eq!(sanitize_numeric_input("..5"), ".5");
    }

    #[test]
    fn test_parse_numeric_input() {
        assert_eq!(parse_numeric_input("60,000"), 60_000.0);
        assert_eq!(parse_numeric_input("7.5%"), 7.5);
        assert_eq!(parse_numeric_input("n/a"), 0.0);
        assert_eq!(parse_numeric_input("."), 0.0);
    }

    #[test]
    fn test_required_field_rejects_missing_and_zero() {
        let field = percent_field();
        assert!(!validate_field(None, &field).is_valid);
        assert!(!validate_field(Some(0.0), &field).is_valid);
        assert!(validate_field(Some(12.0), &field).is_valid);
    }

    #[test]
    fn test_optional_field_accepts_empty() {
        let field = InputField {
            required: false,
            ..percent_field()
        };
        assert!(validate_field(None, &field).is_valid);
        assert!(validate_field(Some(0.0), &field).is_valid);
    }

    #[test]
    fn test_negative_value_reported_first() {
        let result = validate_field(Some(-5.0), &percent_field());
        assert_eq!(result.error.as_deref(), Some("Value cannot be negative"));
    }

    #[test]
    fn test_percent_above_bounds() {
        let result = validate_field(Some(120.0), &percent_field());
        assert_eq!(
            result.error.as_deref(),
            Some("Percentage must be between 0% and 100%")
        );
    }

    #[test]
    fn test_override_inputs_report_each_bad_field() {
        let def = get_component(ComponentId::KnowledgeBase);
        let inputs: ComponentInputs = [
            ("numberOfTickets".to_string(), 10_000.0),
            ("percentEliminated".to_string(), 150.0),
            ("timeSavedMinutes".to_string(), -5.0),
            ("notAField".to_string(), -1.0),
        ]
        .into_iter()
        .collect();
        let issues = validate_override_inputs(def, &inputs);
        let ids: Vec<_> = issues.iter().map(|i| i.field_id.as_str()).collect();
        assert_eq!(ids, vec!["percentEliminated", "timeSavedMinutes"]);
    }

    #[test]
    fn test_fields_without_override_are_not_checked() {
        let def = get_component(ComponentId::KnowledgeBase);
        assert!(validate_override_inputs(def, &ComponentInputs::new()).is_empty());
    }

    #[test]
    fn test_custom_maturity_value_range() {
        let def = get_component(ComponentId::KnowledgeBase);
        let range = def.other_range.unwrap();
        assert!(validate_custom_maturity_value(def, range.max).is_valid);
        assert!(!validate_custom_maturity_value(def, range.max + 1.0).is_valid);

        let no_maturity = get_component(ComponentId::LicenseConsolidation);
        assert!(!validate_custom_maturity_value(no_maturity, 5.0).is_valid);
    }
}
