//! Assemble [`CalculationInputs`] from a [`Scenario`].
//!
//! Component inputs are layered, later layers winning: catalog field
//! defaults, volumes derived from agent data, ESM department placeholders,
//! the maturity preset, and finally explicit overrides.

use super::types::{AgentData, MaturitySelection, Scenario};
use crate::catalog::{
    get_component_by_id, get_visible_components, ComponentDefinition, ComponentId, MaturityLevel,
};
use crate::config::DefaultsConfig;
use crate::engine::{CalculationInputs, ComponentData};
use crate::formulas::{hourly_rate, ComponentInputs};
use crate::projection::CostSchedule;
use std::collections::BTreeMap;

/// Annual Freddy Copilot add-on price per agent.
pub const FREDDY_COPILOT_PRICE_PER_AGENT: f64 = 348.0;

/// Department volumes used for the ESM components until agent data carries
/// per-department figures. These are stand-ins, not customer data.
pub const PLACEHOLDER_ESM_TICKETS: [(&str, f64); 4] = [
    ("hrTickets", 5000.0),
    ("facilitiesTickets", 3000.0),
    ("legalTickets", 1000.0),
    ("financeTickets", 2000.0),
];
pub const PLACEHOLDER_ESM_REMAINING: [(&str, f64); 4] = [
    ("hrTicketsRemaining", 4000.0),
    ("facilitiesTicketsRemaining", 2500.0),
    ("legalTicketsRemaining", 800.0),
    ("financeTicketsRemaining", 1600.0),
];

pub fn build_calculation_inputs(scenario: &Scenario) -> CalculationInputs {
    build_calculation_inputs_with_defaults(scenario, &DefaultsConfig::default())
}

pub fn build_calculation_inputs_with_defaults(
    scenario: &Scenario,
    defaults: &DefaultsConfig,
) -> CalculationInputs {
    warn_unknown_ids(scenario);

    let opportunity = &scenario.opportunity;
    let candidates = match opportunity.plan {
        Some(plan) => get_visible_components(plan, opportunity.esm, opportunity.freddy_copilot),
        None => {
            log::warn!("Scenario has no plan; no components are visible");
            Vec::new()
        }
    };

    let component_data: BTreeMap<String, ComponentData> = candidates
        .into_iter()
        .filter(|def| is_enabled(scenario, def.id))
        .map(|def| {
            let inputs = component_inputs(scenario, def);
            (def.id.to_string(), ComponentData::enabled(inputs))
        })
        .collect();

    CalculationInputs {
        hourly_rate: hourly_rate(scenario.agent_data.individual_agent_expense),
        component_data,
        costs: cost_schedule(scenario),
        benefit_realization_factors: scenario
            .advanced
            .benefit_realization_factors
            .unwrap_or(defaults.realization),
        discount_rate: scenario
            .advanced
            .discount_rate
            .unwrap_or(defaults.discount_rate),
    }
}

/// Enabled by a maturity selection or an override; an override with
/// `enabled = false` wins over a maturity selection.
fn is_enabled(scenario: &Scenario, id: ComponentId) -> bool {
    match scenario.components.get(id.as_str()) {
        Some(component_override) => component_override.enabled,
        None => scenario.maturity.contains_key(id.as_str()),
    }
}

fn warn_unknown_ids(scenario: &Scenario) {
    let ids = scenario.maturity.keys().chain(scenario.components.keys());
    for id in ids {
        if get_component_by_id(id).is_none() {
            log::warn!("Ignoring scenario entry for unknown component ID: {id}");
        }
    }
}

/// Merged inputs for one component, without the enabled check.
pub fn component_inputs(scenario: &Scenario, def: &ComponentDefinition) -> ComponentInputs {
    let mut inputs = def.default_inputs();
    inputs.extend(agent_volumes(def.id, &scenario.agent_data));
    inputs.extend(placeholder_esm_volumes(def.id));

    if let Some(selection) = scenario.maturity.get(def.id.as_str()) {
        apply_maturity(&mut inputs, def, selection);
    }
    if let Some(component_override) = scenario.components.get(def.id.as_str()) {
        inputs.extend(
            component_override
                .inputs
                .iter()
                .map(|(k, v)| (k.clone(), *v)),
        );
    }
    inputs
}

fn agent_volumes(id: ComponentId, agent: &AgentData) -> Vec<(String, f64)> {
    let volume = |field: &str, value: f64| vec![(field.to_string(), value)];
    match id {
        ComponentId::KnowledgeBase | ComponentId::FreddyAiAgent => {
            volume("numberOfTickets", agent.total_tickets())
        }
        ComponentId::AutomationServiceRequests => {
            volume("numberOfTickets", agent.annual_service_requests)
        }
        ComponentId::ProactiveProblemManagement => {
            volume("numberOfTickets", agent.annual_incidents)
        }
        ComponentId::IncidentManagement => volume("ticketsRemaining", agent.annual_incidents),
        ComponentId::ServiceRequestManagement => {
            volume("requestsRemaining", agent.annual_service_requests)
        }
        ComponentId::FreddyCopilotSavings => {
            volume("numberOfInteractions", agent.total_tickets())
        }
        _ => Vec::new(),
    }
}

fn placeholder_esm_volumes(id: ComponentId) -> Vec<(String, f64)> {
    let table: &[(&str, f64)] = match id {
        ComponentId::EsmTicketElimination => &PLACEHOLDER_ESM_TICKETS,
        ComponentId::EsmAgentProductivity => &PLACEHOLDER_ESM_REMAINING,
        _ => return Vec::new(),
    };
    log::warn!(
        "{id}: using placeholder ESM department volumes; set them under [components.{id}.inputs] for real figures"
    );
    table.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn apply_maturity(
    inputs: &mut ComponentInputs,
    def: &ComponentDefinition,
    selection: &MaturitySelection,
) {
    if !def.supports_maturity {
        log::warn!("{}: maturity selection ignored, component has no maturity levels", def.id);
        return;
    }

    if selection.level == MaturityLevel::Other {
        if let (Some(parameter), Some(value)) = (def.custom_parameter, selection.custom_value) {
            inputs.insert(parameter.to_string(), value);
        }
        if let Some(minutes) = selection.custom_time_saved {
            inputs.insert("timeSavedMinutes".to_string(), minutes);
        }
        return;
    }

    let preset = def
        .maturity_defaults
        .as_ref()
        .and_then(|defaults| defaults.for_level(selection.level));
    if let Some(preset) = preset {
        inputs.extend(preset.iter().map(|(k, v)| (k.to_string(), *v)));
    }
}

fn cost_schedule(scenario: &Scenario) -> CostSchedule {
    let plan = scenario.opportunity.plan;
    let pricing = &scenario.pricing;
    let agents = scenario.agent_data.agent_count;

    let license = pricing.effective_unit_price(plan) * agents
        + pricing.premium_support_price.unwrap_or(0.0);
    let freddy = if scenario.opportunity.freddy_copilot {
        FREDDY_COPILOT_PRICE_PER_AGENT * agents
    } else {
        0.0
    };
    let implementation = pricing.effective_implementation_price(plan) + pricing.other_costs;

    CostSchedule::flat(license, freddy, implementation)
}
