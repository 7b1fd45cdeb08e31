use super::{validate_custom_maturity_value, ValidationResult};
use crate::catalog::{get_component_by_id, get_visible_components, MaturityLevel};
use crate::guardrails::DataCompleteness;
use crate::scenario::{AgentData, Opportunity, Pricing, Scenario};

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map(str::trim).unwrap_or("").is_empty()
}

/// Stops at the first missing field.
pub fn validate_opportunity_data(opportunity: &Opportunity) -> ValidationResult {
    if is_blank(&opportunity.product) {
        return ValidationResult::invalid("Product is required");
    }
    if is_blank(&opportunity.engagement) {
        return ValidationResult::invalid("Engagement type is required");
    }
    if opportunity.plan.is_none() {
        return ValidationResult::invalid("Plan is required");
    }
    if is_blank(&opportunity.currency) {
        return ValidationResult::invalid("Local currency is required");
    }
    ValidationResult::valid()
}

pub fn validate_agent_data(agent_data: &AgentData) -> ValidationResult {
    let fields = [
        ("agent_count", agent_data.agent_count),
        ("annual_incidents", agent_data.annual_incidents),
        ("annual_service_requests", agent_data.annual_service_requests),
        ("individual_agent_expense", agent_data.individual_agent_expense),
        ("current_licensing", agent_data.current_licensing),
        ("current_maintenance", agent_data.current_maintenance),
    ];
    match fields
        .iter()
        .find(|(_, value)| !value.is_finite() || *value <= 0.0)
    {
        Some((name, _)) => {
            ValidationResult::invalid(format!("{name} is required and must be greater than 0"))
        }
        None => ValidationResult::valid(),
    }
}

/// Unset prices fall back to the plan's list and implementation prices
/// before being checked.
pub fn validate_pricing_data(pricing: &Pricing, opportunity: &Opportunity) -> ValidationResult {
    if is_blank(&pricing.pricing_type) {
        return ValidationResult::invalid("Pricing type is required");
    }
    let unit_price = pricing.effective_unit_price(opportunity.plan);
    if !unit_price.is_finite() || unit_price <= 0.0 {
        return ValidationResult::invalid("Unit price is required and must be greater than 0");
    }
    let implementation = pricing
        .implementation_price
        .or_else(|| opportunity.plan.map(|p| p.default_implementation_price()));
    match implementation {
        Some(price) if price >= 0.0 => ValidationResult::valid(),
        _ => ValidationResult::invalid("Implementation price is required"),
    }
}

/// Every visible maturity-capable component needs a level, and custom
/// `Other` values must sit inside the component's allowed range.
pub fn validate_maturity(scenario: &Scenario) -> ValidationResult {
    let Some(plan) = scenario.opportunity.plan else {
        return ValidationResult::invalid("Plan is required to assess maturity");
    };

    let visible = get_visible_components(
        plan,
        scenario.opportunity.esm,
        scenario.opportunity.freddy_copilot,
    );
    let missing: Vec<&str> = visible
        .iter()
        .filter(|def| def.supports_maturity && !scenario.maturity.contains_key(def.id.as_str()))
        .map(|def| def.name)
        .collect();
    if !missing.is_empty() {
        return ValidationResult::invalid(format!(
            "Select a maturity level for: {}",
            missing.join(", ")
        ));
    }

    for (id, selection) in &scenario.maturity {
        if selection.level != MaturityLevel::Other {
            continue;
        }
        let (Some(def), Some(value)) = (get_component_by_id(id), selection.custom_value) else {
            continue;
        };
        let result = validate_custom_maturity_value(def, value);
        if !result.is_valid {
            return ValidationResult::invalid(format!(
                "{}: {}",
                def.name,
                result.error.unwrap_or_default()
            ));
        }
    }

    ValidationResult::valid()
}

/// Section completeness flags for export readiness.
pub fn assess_completeness(scenario: &Scenario) -> DataCompleteness {
    DataCompleteness {
        opportunity: validate_opportunity_data(&scenario.opportunity).is_valid,
        agent_data: validate_agent_data(&scenario.agent_data).is_valid,
        pricing: validate_pricing_data(&scenario.pricing, &scenario.opportunity).is_valid,
        maturity: validate_maturity(scenario).is_valid,
    }
}
