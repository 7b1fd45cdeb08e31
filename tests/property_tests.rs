use proptest::prelude::*;
use roimap::catalog::get_component;
use roimap::formulas::{component_benefit, ComponentInputs};
use roimap::metrics::calculate_roi;
use roimap::{
    calculate_roi_results, BenefitRealizationFactors, CalculationInputs, ComponentData,
    ComponentId, CostSchedule,
};
use std::collections::BTreeMap;

fn inputs(pairs: &[(&str, f64)]) -> ComponentInputs {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn non_negative() -> impl Strategy<Value = f64> {
    0.0f64..1_000_000.0
}

fn percent() -> impl Strategy<Value = f64> {
    0.0f64..100.0
}

proptest! {
    #[test]
    fn ticket_elimination_is_monotonic_in_tickets(
        tickets in non_negative(),
        extra in non_negative(),
        pct in percent(),
        minutes in 0.0f64..240.0,
        rate in 10.0f64..200.0,
    ) {
        let low = component_benefit(
            ComponentId::KnowledgeBase,
            &inputs(&[("numberOfTickets", tickets), ("percentEliminated", pct), ("timeSavedMinutes", minutes)]),
            rate,
        );
        let high = component_benefit(
            ComponentId::KnowledgeBase,
            &inputs(&[("numberOfTickets", tickets + extra), ("percentEliminated", pct), ("timeSavedMinutes", minutes)]),
            rate,
        );
        prop_assert!(high >= low);
    }

    #[test]
    fn productivity_is_monotonic_in_hourly_rate(
        remaining in non_negative(),
        minutes in 0.0f64..240.0,
        rate in 0.0f64..200.0,
        raise in 0.0f64..200.0,
    ) {
        let data = inputs(&[("ticketsRemaining", remaining), ("timeSavedMinutes", minutes)]);
        let low = component_benefit(ComponentId::IncidentManagement, &data, rate);
        let high = component_benefit(ComponentId::IncidentManagement, &data, rate + raise);
        prop_assert!(high >= low);
    }

    #[test]
    fn every_formula_is_monotonic_in_each_input(
        base in prop::collection::vec(0.0f64..10_000.0, 8),
        bump in 0.0f64..10_000.0,
        rate in 0.0f64..200.0,
        raise in 0.0f64..200.0,
    ) {
        for id in ComponentId::ALL {
            let fields = &get_component(id).input_fields;
            let data: ComponentInputs = fields
                .iter()
                .enumerate()
                .map(|(i, field)| (field.id.to_string(), base[i % base.len()]))
                .collect();
            let low = component_benefit(id, &data, rate);

            // Raising the "after" cost lowers infrastructure savings.
            for field in fields.iter().filter(|f| f.id != "annualInfraCostAfter") {
                let mut raised = data.clone();
                *raised.entry(field.id.to_string()).or_default() += bump;
                let high = component_benefit(id, &raised, rate);
                prop_assert!(high >= low, "{}.{}: {} < {}", id, field.id, high, low);
            }

            let high = component_benefit(id, &data, rate + raise);
            prop_assert!(high >= low, "{} with hourly rate {}: {} < {}", id, rate + raise, high, low);
        }
    }

    #[test]
    fn infrastructure_savings_never_negative(before in non_negative(), after in non_negative()) {
        let data = inputs(&[("annualInfraCostBefore", before), ("annualInfraCostAfter", after)]);
        prop_assert!(component_benefit(ComponentId::InfrastructureSavings, &data, 0.0) >= 0.0);
    }

    #[test]
    fn component_total_equals_sum_of_years(
        tools in 0.0f64..50.0,
        cost in non_negative(),
        y1 in 0.0f64..1.0,
        y2 in 0.0f64..1.0,
        y3 in 0.0f64..1.0,
        license in non_negative(),
    ) {
        let mut component_data = BTreeMap::new();
        component_data.insert(
            "licenseConsolidation".to_string(),
            ComponentData::enabled(inputs(&[
                ("numberOfToolsEliminated", tools),
                ("costPerToolEliminated", cost),
            ])),
        );
        let results = calculate_roi_results(&CalculationInputs {
            hourly_rate: 30.0,
            component_data,
            costs: CostSchedule::flat(license, 0.0, 0.0),
            benefit_realization_factors: BenefitRealizationFactors::new(y1, y2, y3),
            discount_rate: 10.0,
        });

        let result = &results.component_results[0];
        let sum = result.year1 + result.year2 + result.year3;
        prop_assert!((result.total - sum).abs() <= 1e-6 * sum.abs().max(1.0));

        let yearly_benefits: f64 = results.yearly_data.iter().map(|y| y.benefits).sum();
        let tolerance = 1e-6 * yearly_benefits.abs().max(1.0);
        prop_assert!((results.analysis_results.total_benefits_3yr - result.total).abs() <= tolerance);
        prop_assert!(results.analysis_results.roi.is_finite());
    }

    #[test]
    fn roi_with_zero_costs_is_zero(net in -1_000_000.0f64..1_000_000.0) {
        prop_assert_eq!(calculate_roi(net, 0.0), 0.0);
    }
}
