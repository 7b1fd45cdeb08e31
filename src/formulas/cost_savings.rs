//! Cost savings formulas. All but copilot savings ignore the hourly rate.

use super::{input, minutes_to_hours, percent_to_decimal, ComponentInputs};

pub fn license_consolidation(inputs: &ComponentInputs) -> f64 {
    input(inputs, "numberOfToolsEliminated") * input(inputs, "costPerToolEliminated")
}

/// Clamped at zero: a more expensive target footprint is no benefit, not a cost.
pub fn infrastructure_savings(inputs: &ComponentInputs) -> f64 {
    (input(inputs, "annualInfraCostBefore") - input(inputs, "annualInfraCostAfter")).max(0.0)
}

pub fn vendor_spend_reduction(inputs: &ComponentInputs) -> f64 {
    input(inputs, "currentVendorSpend") * percent_to_decimal(input(inputs, "percentReduction"))
}

pub fn esm_shared_services(inputs: &ComponentInputs) -> f64 {
    let total_budget = input(inputs, "hrBudget")
        + input(inputs, "facilitiesBudget")
        + input(inputs, "legalBudget")
        + input(inputs, "financeBudget");
    total_budget * percent_to_decimal(input(inputs, "percentSaved"))
}

/// `interactions × (pctHandled/100) × (minsSaved/60) × hourlyRate`
pub fn freddy_copilot_savings(inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    let assisted = input(inputs, "numberOfInteractions")
        * percent_to_decimal(input(inputs, "percentHandledByAI"));
    assisted * minutes_to_hours(input(inputs, "timeSavedMinutes")) * hourly_rate
}
