use crate::catalog::get_component_by_id;
use crate::config::RoimapConfig;
use crate::formatting::{FormattingConfig, Styler};
use crate::guardrails::{check_manual_override_allowed, GuardrailResult, Severity};
use crate::scenario::{build_calculation_inputs_with_defaults, component_inputs, Scenario};
use crate::validation::{
    validate_agent_data, validate_maturity, validate_override_inputs, validate_opportunity_data,
    validate_pricing_data, FieldIssue, ValidationResult,
};
use anyhow::Result;
use std::path::PathBuf;

pub struct ValidateConfig {
    pub scenario: PathBuf,
    pub formatting: FormattingConfig,
    pub config: RoimapConfig,
}

/// Verdict on one manually overridden input.
#[derive(Debug, Clone, PartialEq)]
pub struct OverrideCheck {
    pub component_id: String,
    pub field_id: String,
    pub original: f64,
    pub value: f64,
    pub verdict: GuardrailResult,
}

#[derive(Debug, Clone, Default)]
pub struct ScenarioValidation {
    pub sections: Vec<(&'static str, ValidationResult)>,
    pub field_issues: Vec<(String, FieldIssue)>,
    pub overrides: Vec<OverrideCheck>,
}

impl ScenarioValidation {
    pub fn passed(&self) -> bool {
        self.sections.iter().all(|(_, result)| result.is_valid)
            && self.field_issues.is_empty()
            && !self.overrides.iter().any(|check| check.verdict.is_blocking())
    }
}

pub fn check_scenario(scenario: &Scenario, config: &RoimapConfig) -> ScenarioValidation {
    let sections = vec![
        ("Opportunity", validate_opportunity_data(&scenario.opportunity)),
        ("Agent data", validate_agent_data(&scenario.agent_data)),
        (
            "Pricing",
            validate_pricing_data(&scenario.pricing, &scenario.opportunity),
        ),
        ("Maturity", validate_maturity(scenario)),
    ];

    let inputs = build_calculation_inputs_with_defaults(scenario, &config.defaults);
    let field_issues = scenario
        .components
        .iter()
        .filter(|(id, _)| {
            inputs
                .component_data
                .get(*id)
                .is_some_and(|data| data.enabled)
        })
        .filter_map(|(id, component_override)| {
            Some((id, get_component_by_id(id)?, component_override))
        })
        .flat_map(|(id, def, component_override)| {
            validate_override_inputs(def, &component_override.inputs)
                .into_iter()
                .map(move |issue| (id.clone(), issue))
        })
        .collect();

    ScenarioValidation {
        sections,
        field_issues,
        overrides: check_overrides(scenario, config.guardrails.override_guard_enabled),
    }
}

/// Compare each override input against what the component would get
/// without it: catalog defaults, agent volumes and maturity presets.
fn check_overrides(scenario: &Scenario, enabled: bool) -> Vec<OverrideCheck> {
    let mut checks = Vec::new();
    for (id, component_override) in &scenario.components {
        let Some(def) = get_component_by_id(id) else {
            continue;
        };
        let mut baseline_scenario = scenario.clone();
        baseline_scenario.components.remove(id);
        let baseline = component_inputs(&baseline_scenario, def);

        for (field_id, value) in &component_override.inputs {
            let original = baseline.get(field_id).copied().unwrap_or(0.0);
            checks.push(OverrideCheck {
                component_id: id.clone(),
                field_id: field_id.clone(),
                original,
                value: *value,
                verdict: check_manual_override_allowed(original, *value, enabled),
            });
        }
    }
    checks
}

fn print_validation(validation: &ScenarioValidation, styler: &Styler) {
    println!("{}", styler.header("Data completeness"));
    for (section, result) in &validation.sections {
        match &result.error {
            None => println!("  {} {section}", styler.success("✓")),
            Some(error) => println!(
                "  {} {section}: {error}",
                styler.severity(Severity::Error, "✗")
            ),
        }
    }

    if !validation.field_issues.is_empty() {
        println!();
        println!("{}", styler.header("Component inputs"));
        for (id, issue) in &validation.field_issues {
            println!(
                "  {} {id}.{} ({}): {}",
                styler.severity(Severity::Error, "✗"),
                issue.field_id,
                issue.label,
                issue.message
            );
        }
    }

    let flagged: Vec<_> = validation
        .overrides
        .iter()
        .filter(|check| check.verdict.severity > Severity::Info)
        .collect();
    if !flagged.is_empty() {
        println!();
        println!("{}", styler.header("Manual overrides"));
        for check in flagged {
            println!(
                "  {} {}.{}: {} -> {}. {}",
                styler.severity(check.verdict.severity, &check.verdict.severity.to_string()),
                check.component_id,
                check.field_id,
                check.original,
                check.value,
                check.verdict.message().unwrap_or_default()
            );
        }
    }
}

pub fn validate_scenario(config: ValidateConfig) -> Result<()> {
    let scenario = Scenario::load(&config.scenario)?;
    let validation = check_scenario(&scenario, &config.config);
    let styler = config.formatting.styler();

    print_validation(&validation, &styler);

    if !validation.passed() {
        anyhow::bail!("Validation failed");
    }
    println!();
    println!("{}", styler.success("Scenario is valid"));
    Ok(())
}
