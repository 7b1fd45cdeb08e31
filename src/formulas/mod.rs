//! Per-component annual benefit formulas.
//!
//! Every formula is a pure function of the component's inputs and the
//! blended hourly labour rate. Missing inputs read as zero. Dispatch is an
//! exhaustive match over [`ComponentId`]; the string router
//! [`calculate_component_benefit`] keeps a logged zero fallback for ids the
//! engine does not know yet.

pub mod cost_savings;
pub mod productivity;
pub mod ticket_elimination;

use crate::catalog::{get_component, ComponentId};
use serde::Serialize;
use std::collections::BTreeMap;

/// Field id to numeric value, as entered for one component.
pub type ComponentInputs = BTreeMap<String, f64>;

/// 40 hours × 52 weeks.
pub const HOURS_PER_YEAR: f64 = 2080.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Blended hourly rate from a fully loaded annual agent expense.
pub fn hourly_rate(annual_agent_expense: f64) -> f64 {
    annual_agent_expense / HOURS_PER_YEAR
}

pub(crate) fn minutes_to_hours(minutes: f64) -> f64 {
    minutes / MINUTES_PER_HOUR
}

pub(crate) fn percent_to_decimal(percent: f64) -> f64 {
    percent / 100.0
}

/// Read an input, treating absent or NaN values as zero. Negative values
/// clamp to zero so no benefit can go below zero.
pub(crate) fn input(inputs: &ComponentInputs, key: &str) -> f64 {
    inputs
        .get(key)
        .copied()
        .filter(|v| !v.is_nan())
        .map_or(0.0, |v| v.max(0.0))
}

/// Formula family shared by one or more components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormulaFamily {
    TicketElimination,
    EsmTicketElimination,
    AgentProductivity,
    EsmAgentProductivity,
    ChangeManagement,
    TimeBasedProductivity,
    LicenseConsolidation,
    InfrastructureSavings,
    VendorSpendReduction,
    EsmSharedServices,
    FreddyCopilotSavings,
}

impl FormulaFamily {
    pub fn expression(&self) -> &'static str {
        match self {
            Self::TicketElimination => {
                "tickets × (percentEliminated / 100) × (timeSavedMinutes / 60) × hourlyRate"
            }
            Self::EsmTicketElimination => {
                "(hr + facilities + legal + finance tickets) × (percentEliminated / 100) × (timeSavedMinutes / 60) × hourlyRate"
            }
            Self::AgentProductivity => "ticketsRemaining × (timeSavedMinutes / 60) × hourlyRate",
            Self::EsmAgentProductivity => {
                "(hr + facilities + legal + finance remaining) × (timeSavedMinutes / 60) × hourlyRate"
            }
            Self::ChangeManagement => {
                "changes × (avgPercentFailed / 100) × (percentReduction / 100) × (timeSavedMinutes / 60) × hourlyRate"
            }
            Self::TimeBasedProductivity => {
                "(weeklyHours × 52) × (percentTimeSaved / 100) × hourlyRate"
            }
            Self::LicenseConsolidation => "toolsEliminated × costPerTool",
            Self::InfrastructureSavings => "max(0, costBefore − costAfter)",
            Self::VendorSpendReduction => "currentVendorSpend × (percentReduction / 100)",
            Self::EsmSharedServices => {
                "(hr + facilities + legal + finance budgets) × (percentSaved / 100)"
            }
            Self::FreddyCopilotSavings => {
                "interactions × (percentHandledByAI / 100) × (timeSavedMinutes / 60) × hourlyRate"
            }
        }
    }

    pub fn uses_hourly_rate(&self) -> bool {
        !matches!(
            self,
            Self::LicenseConsolidation
                | Self::InfrastructureSavings
                | Self::VendorSpendReduction
                | Self::EsmSharedServices
        )
    }
}

impl ComponentId {
    pub fn formula_family(&self) -> FormulaFamily {
        use ComponentId::*;
        match self {
            KnowledgeBase | AutomationServiceRequests | FreddyAiAgent
            | ProactiveProblemManagement => FormulaFamily::TicketElimination,
            EsmTicketElimination => FormulaFamily::EsmTicketElimination,
            IncidentManagement | ServiceRequestManagement | ProblemManagement
            | ServiceCatalogExpansion => FormulaFamily::AgentProductivity,
            EsmAgentProductivity => FormulaFamily::EsmAgentProductivity,
            ChangeManagement => FormulaFamily::ChangeManagement,
            ProjectManagement | AssetManagement | Cmdb => FormulaFamily::TimeBasedProductivity,
            LicenseConsolidation => FormulaFamily::LicenseConsolidation,
            InfrastructureSavings => FormulaFamily::InfrastructureSavings,
            VendorSpendReduction => FormulaFamily::VendorSpendReduction,
            EsmSharedServices => FormulaFamily::EsmSharedServices,
            FreddyCopilotSavings => FormulaFamily::FreddyCopilotSavings,
        }
    }
}

/// Unrealized annual benefit for a known component.
pub fn component_benefit(id: ComponentId, inputs: &ComponentInputs, hourly_rate: f64) -> f64 {
    use ComponentId::*;
    match id {
        KnowledgeBase | AutomationServiceRequests | FreddyAiAgent
        | ProactiveProblemManagement => ticket_elimination::single_pool(inputs, hourly_rate),
        EsmTicketElimination => ticket_elimination::esm_ticket_elimination(inputs, hourly_rate),
        IncidentManagement => productivity::standard(inputs, "ticketsRemaining", hourly_rate),
        ServiceRequestManagement => {
            productivity::standard(inputs, "requestsRemaining", hourly_rate)
        }
        ProblemManagement => productivity::standard(inputs, "numberOfProblems", hourly_rate),
        ServiceCatalogExpansion => {
            productivity::standard(inputs, "additionalCatalogRequests", hourly_rate)
        }
        EsmAgentProductivity => productivity::esm_agent_productivity(inputs, hourly_rate),
        ChangeManagement => productivity::change_management(inputs, hourly_rate),
        ProjectManagement | AssetManagement | Cmdb => {
            productivity::time_based(inputs, hourly_rate)
        }
        LicenseConsolidation => cost_savings::license_consolidation(inputs),
        InfrastructureSavings => cost_savings::infrastructure_savings(inputs),
        VendorSpendReduction => cost_savings::vendor_spend_reduction(inputs),
        EsmSharedServices => cost_savings::esm_shared_services(inputs),
        FreddyCopilotSavings => cost_savings::freddy_copilot_savings(inputs, hourly_rate),
    }
}

/// String-keyed router. An unrecognized id contributes zero and logs a
/// warning so one bad entry cannot abort a whole calculation.
pub fn calculate_component_benefit(
    component_id: &str,
    inputs: &ComponentInputs,
    hourly_rate: f64,
) -> f64 {
    match component_id.parse::<ComponentId>() {
        Ok(id) => component_benefit(id, inputs, hourly_rate),
        Err(_) => {
            log::warn!("Unknown component ID: {component_id}; contributing 0 benefit");
            0.0
        }
    }
}

/// One named operand of a formula evaluation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceOperand {
    pub name: String,
    pub value: f64,
}

/// Formula, operands and result for one component, for verbose output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormulaTrace {
    pub component_id: ComponentId,
    pub family: FormulaFamily,
    pub expression: &'static str,
    pub operands: Vec<TraceOperand>,
    pub result: f64,
}

pub fn explain(id: ComponentId, inputs: &ComponentInputs, hourly_rate: f64) -> FormulaTrace {
    let family = id.formula_family();
    let mut operands: Vec<TraceOperand> = get_component(id)
        .input_fields
        .iter()
        .map(|field| TraceOperand {
            name: field.id.to_string(),
            value: input(inputs, field.id),
        })
        .collect();
    if family.uses_hourly_rate() {
        operands.push(TraceOperand {
            name: "hourlyRate".to_string(),
            value: hourly_rate,
        });
    }

    FormulaTrace {
        component_id: id,
        family,
        expression: family.expression(),
        operands,
        result: component_benefit(id, inputs, hourly_rate),
    }
}
