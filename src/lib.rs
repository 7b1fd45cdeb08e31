// Export modules for library usage
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod errors;
pub mod formatting;
pub mod formulas;
pub mod guardrails;
pub mod io;
pub mod metrics;
pub mod projection;
pub mod scenario;
pub mod validation;

// Re-export commonly used types
pub use crate::catalog::{
    get_component_by_id, get_components_by_category, get_visible_components, ComponentCategory,
    ComponentDefinition, ComponentId, Plan,
};

pub use crate::engine::{calculate_roi_results, CalculationInputs, ComponentData, ResultsData};

pub use crate::formulas::{calculate_component_benefit, ComponentInputs};

pub use crate::guardrails::{
    check_export_readiness, check_manual_override_allowed, check_roi_guardrail, GuardrailReport,
    GuardrailResult, Severity,
};

pub use crate::metrics::{calculate_payback_period, calculate_roi, AnalysisResults};

pub use crate::projection::{BenefitRealizationFactors, ComponentResult, CostSchedule, YearlyData};

pub use crate::scenario::{build_calculation_inputs, Scenario};

pub use crate::errors::RoimapError;

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
