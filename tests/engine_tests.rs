use indoc::indoc;
use pretty_assertions::assert_eq;
use roimap::{
    build_calculation_inputs, calculate_roi_results, BenefitRealizationFactors, CalculationInputs,
    ComponentData, ComponentId, CostSchedule, Scenario,
};
use std::collections::BTreeMap;

fn approx(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

fn knowledge_base_inputs() -> CalculationInputs {
    let inputs = [
        ("numberOfTickets", 100_000.0),
        ("percentEliminated", 7.5),
        ("timeSavedMinutes", 5.0),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), *v))
    .collect();

    let mut component_data = BTreeMap::new();
    component_data.insert("knowledgeBase".to_string(), ComponentData::enabled(inputs));

    CalculationInputs {
        hourly_rate: 28.85,
        component_data,
        costs: CostSchedule::default(),
        benefit_realization_factors: BenefitRealizationFactors::default(),
        discount_rate: 10.0,
    }
}

#[test]
fn test_knowledge_base_three_year_projection() {
    let results = calculate_roi_results(&knowledge_base_inputs());
    let kb = &results.component_results[0];

    assert_eq!(kb.component_id, ComponentId::KnowledgeBase);
    approx(kb.annual_benefit, 18_031.25, 1e-6);
    approx(kb.year1, 9_015.625, 1e-6);
    approx(kb.year2, 13_523.4375, 1e-6);
    approx(kb.year3, 18_031.25, 1e-6);
    approx(kb.total, 40_570.3125, 1e-6);
}

#[test]
fn test_zero_costs_give_zero_roi_and_zero_payback() {
    let results = calculate_roi_results(&knowledge_base_inputs());
    assert_eq!(results.analysis_results.total_costs_3yr, 0.0);
    assert_eq!(results.analysis_results.roi, 0.0);
    assert_eq!(results.analysis_results.payback_period, 0.0);
}

#[test]
fn test_implementation_cost_only_in_year_one() {
    let mut calc = knowledge_base_inputs();
    calc.costs = CostSchedule::flat(10_000.0, 1_000.0, 5_000.0);
    let results = calculate_roi_results(&calc);

    assert_eq!(results.yearly_data[0].costs, 16_000.0);
    assert_eq!(results.yearly_data[1].costs, 11_000.0);
    assert_eq!(results.yearly_data[2].costs, 11_000.0);
    assert_eq!(results.analysis_results.total_costs_3yr, 38_000.0);
    for year in &results.yearly_data {
        approx(year.net_cash_flow, year.benefits - year.costs, 1e-9);
    }
}

#[test]
fn test_no_year_one_benefit_means_infinite_payback() {
    let mut calc = knowledge_base_inputs();
    calc.costs = CostSchedule::flat(10_000.0, 0.0, 0.0);
    calc.benefit_realization_factors = BenefitRealizationFactors::new(0.0, 0.75, 1.0);
    let results = calculate_roi_results(&calc);

    assert!(results.analysis_results.payback_period.is_infinite());
    assert!(!results.analysis_results.has_payback());

    let json = serde_json::to_value(&results).unwrap();
    assert!(json["analysisResults"]["paybackPeriod"].is_null());
}

#[test]
fn test_recalculation_is_idempotent() {
    let mut calc = knowledge_base_inputs();
    calc.costs = CostSchedule::flat(12_000.0, 0.0, 3_000.0);
    let first = calculate_roi_results(&calc);
    let second = calculate_roi_results(&calc);
    assert_eq!(first, second);
}

#[test]
fn test_scenario_file_license_consolidation_roi() {
    let scenario = Scenario::from_toml_str(indoc! {r#"
        [opportunity]
        product = "Acme Service Desk"
        engagement = "New Logo"
        plan = "Pro"
        currency = "USD"

        [agent_data]
        agent_count = 100
        annual_incidents = 20000
        annual_service_requests = 10000
        individual_agent_expense = 60008
        current_licensing = 50000
        current_maintenance = 10000

        [pricing]
        pricing_type = "Standard"
        unit_price = 100
        implementation_price = 0

        [components.licenseConsolidation]
        inputs = { numberOfToolsEliminated = 3, costPerToolEliminated = 10000 }
    "#})
    .unwrap();

    let inputs = build_calculation_inputs(&scenario);
    approx(inputs.hourly_rate, 28.85, 1e-9);
    assert_eq!(inputs.component_data.len(), 1);

    let results = calculate_roi_results(&inputs);
    let summary = results.analysis_results;
    assert_eq!(summary.total_benefits_3yr, 67_500.0);
    assert_eq!(summary.total_costs_3yr, 30_000.0);
    assert_eq!(summary.roi, 125.0);
    approx(summary.payback_period, 24.0, 1e-9);
}
