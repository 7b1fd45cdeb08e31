use crate::catalog::ComponentId;
use crate::config::RoimapConfig;
use crate::engine::{calculate_roi_results, CalculationInputs};
use crate::formatting::FormattingConfig;
use crate::formulas::explain;
use crate::guardrails::GuardrailReport;
use crate::io::{self, create_writer, CalculationReport, OutputFormat};
use crate::scenario::{build_calculation_inputs_with_defaults, Scenario};
use crate::validation::assess_completeness;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct CalculateConfig {
    pub scenario: PathBuf,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    /// Fail when export is blocked or any guardrail reports an error
    pub strict: bool,
    /// Any `-v` includes formula traces in the report
    pub verbosity: u8,
    pub formatting: FormattingConfig,
    pub config: RoimapConfig,
}

/// Load, calculate and evaluate without writing anything.
pub fn build_report(config: &CalculateConfig) -> Result<CalculationReport> {
    let scenario = Scenario::load(&config.scenario)?;
    let inputs = build_calculation_inputs_with_defaults(&scenario, &config.config.defaults);
    let results = calculate_roi_results(&inputs);
    let completeness = assess_completeness(&scenario);
    log::info!(
        "{} components enabled, ROI {:.1}%",
        results.component_results.len(),
        results.analysis_results.roi
    );

    let guardrails = GuardrailReport::evaluate(
        &results,
        inputs.hourly_rate,
        &config.config.guardrails,
        &completeness,
    );
    let traces = if config.verbosity >= 1 {
        formula_traces(&inputs)
    } else {
        Vec::new()
    };

    Ok(CalculationReport {
        title: scenario.opportunity.product.clone(),
        currency_symbol: currency_symbol(scenario.opportunity.currency.as_deref())
            .unwrap_or(&config.formatting.currency_symbol)
            .to_string(),
        hourly_rate: inputs.hourly_rate,
        results,
        guardrails,
        traces,
    })
}

fn formula_traces(inputs: &CalculationInputs) -> Vec<crate::formulas::FormulaTrace> {
    ComponentId::ALL
        .iter()
        .filter_map(|id| {
            let data = inputs.component_data.get(id.as_str())?;
            data.enabled
                .then(|| explain(*id, &data.inputs, inputs.hourly_rate))
        })
        .collect()
}

/// Symbol for the common currency codes; other labels are used verbatim.
fn currency_symbol(label: Option<&str>) -> Option<&str> {
    let label = label?.trim();
    let symbol = match label.to_ascii_uppercase().as_str() {
        "USD" | "AUD" | "CAD" | "NZD" | "SGD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "INR" => "₹",
        "JPY" => "¥",
        "" => return None,
        _ => return Some(label),
    };
    Some(symbol)
}

pub fn handle_calculate(config: CalculateConfig) -> Result<()> {
    let report = build_report(&config)
        .with_context(|| format!("Failed to calculate {}", config.scenario.display()))?;

    let out = io::open_output(config.output.as_deref())?;
    let styler = if config.output.is_some() {
        FormattingConfig::plain().styler()
    } else {
        config.formatting.styler()
    };
    let mut writer = create_writer(config.format, out, styler);
    writer.write_report(&report)?;

    if config.strict && report.guardrails.is_blocked() {
        anyhow::bail!(
            "Guardrails blocked this result: {}",
            report.guardrails.errors().join("; ")
        );
    }
    Ok(())
}
