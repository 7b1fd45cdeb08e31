//! Advisory sanity checks. Only the discount-rate check can block.

use super::GuardrailResult;
use crate::projection::BenefitRealizationFactors;

const MAX_PAYBACK_MONTHS: f64 = 36.0;
const MIN_PAYBACK_MONTHS: f64 = 1.0;
const HOURLY_RATE_RANGE: (f64, f64) = (10.0, 500.0);
const DISCOUNT_RATE_RANGE: (f64, f64) = (0.0, 50.0);
const MAX_BENEFIT_COST_RATIO: f64 = 10.0;

/// Warns on implausibly fast or slow payback. An infinite payback is
/// over 36 months and warns like any other long payback.
pub fn check_payback_period(payback_months: f64) -> GuardrailResult {
    if payback_months < MIN_PAYBACK_MONTHS {
        GuardrailResult::warn(
            "Payback period under 1 month is unusually fast. Please verify your inputs.",
        )
    } else if payback_months > MAX_PAYBACK_MONTHS {
        GuardrailResult::warn(
            "Payback period over 3 years may indicate limited short-term value. Consider reviewing assumptions.",
        )
    } else {
        GuardrailResult::pass()
    }
}

pub fn check_benefit_realization_factors(factors: &BenefitRealizationFactors) -> GuardrailResult {
    if factors.year1 > factors.year2 || factors.year2 > factors.year3 {
        return GuardrailResult::warn(
            "Benefit realization typically increases over time. Your factors decrease - is this intentional?",
        );
    }
    if factors.year1 >= 1.0 {
        return GuardrailResult::warn(
            "Year 1 benefit realization at 100% assumes immediate full adoption - is this realistic?",
        );
    }
    GuardrailResult::pass()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlausibilityInputs {
    pub hourly_rate: f64,
    pub total_costs: f64,
    pub total_benefits: f64,
    pub discount_rate: f64,
}

/// Returns only the checks that fired; an empty list means plausible.
pub fn validate_calculation_inputs(inputs: &PlausibilityInputs) -> Vec<GuardrailResult> {
    let mut results = Vec::new();

    let (min_rate, max_rate) = HOURLY_RATE_RANGE;
    if inputs.hourly_rate < min_rate || inputs.hourly_rate > max_rate {
        results.push(GuardrailResult::warn(format!(
            "Hourly rate of ${:.2} seems unusual. Typical range is $25-$150/hour.",
            inputs.hourly_rate
        )));
    }

    if inputs.total_benefits > 0.0 && inputs.total_costs > 0.0 {
        let ratio = inputs.total_benefits / inputs.total_costs;
        if ratio > MAX_BENEFIT_COST_RATIO {
            results.push(GuardrailResult::warn(
                "Benefits are more than 10x costs - please verify calculations are correct.",
            ));
        }
    }

    let (min_discount, max_discount) = DISCOUNT_RATE_RANGE;
    if inputs.discount_rate < min_discount || inputs.discount_rate > max_discount {
        results.push(GuardrailResult::block(
            "Discount rate should be between 0% and 50%",
        ));
    }

    results
}
