use super::{
    check_benefit_realization_factors, check_export_readiness, check_payback_period,
    check_roi_guardrail, validate_calculation_inputs, ExportReadiness, GuardrailResult,
    PlausibilityInputs, Severity,
};
use crate::config::GuardrailConfig;
use crate::engine::ResultsData;
use serde::Serialize;

/// Which input sections were filled in, as fed to export readiness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataCompleteness {
    pub opportunity: bool,
    pub agent_data: bool,
    pub pricing: bool,
    pub maturity: bool,
}

impl DataCompleteness {
    /// For raw calculation inputs that carry no wizard sections.
    pub fn complete() -> Self {
        Self {
            opportunity: true,
            agent_data: true,
            pricing: true,
            maturity: true,
        }
    }
}

/// Every guardrail verdict for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardrailReport {
    pub export_readiness: ExportReadiness,
    pub roi_band: GuardrailResult,
    pub payback: GuardrailResult,
    pub realization: GuardrailResult,
    pub plausibility: Vec<GuardrailResult>,
}

impl GuardrailReport {
    pub fn evaluate(
        results: &ResultsData,
        hourly_rate: f64,
        config: &GuardrailConfig,
        completeness: &DataCompleteness,
    ) -> Self {
        let analysis = &results.analysis_results;
        let roi = analysis.roi;

        let plausibility = validate_calculation_inputs(&PlausibilityInputs {
            hourly_rate,
            total_costs: analysis.total_costs_3yr,
            total_benefits: analysis.total_benefits_3yr,
            discount_rate: results.discount_rate,
        });

        let report = Self {
            export_readiness: check_export_readiness(
                roi,
                completeness.opportunity,
                completeness.agent_data,
                completeness.pricing,
                completeness.maturity,
            ),
            roi_band: check_roi_guardrail(roi, config.roi_band_enabled, config.block_mode),
            payback: check_payback_period(analysis.payback_period),
            realization: check_benefit_realization_factors(&results.benefit_realization_factors),
            plausibility,
        };
        log::debug!(
            "Guardrails: can_export={} worst={}",
            report.export_readiness.can_export,
            report.worst_severity()
        );
        report
    }

    pub fn verdicts(&self) -> impl Iterator<Item = &GuardrailResult> {
        [&self.roi_band, &self.payback, &self.realization]
            .into_iter()
            .chain(self.plausibility.iter())
    }

    pub fn worst_severity(&self) -> Severity {
        self.verdicts()
            .map(|v| v.severity)
            .max()
            .unwrap_or(Severity::Info)
    }

    /// True when export is blocked or any verdict carries error severity.
    pub fn is_blocked(&self) -> bool {
        !self.export_readiness.can_export || self.worst_severity() == Severity::Error
    }

    /// Advisory messages across all verdicts, without duplicates.
    pub fn warnings(&self) -> Vec<String> {
        let mut messages: Vec<String> = self.export_readiness.warnings.clone();
        for warning in self.verdicts().filter_map(|v| v.warning.as_ref()) {
            if !messages.contains(warning) {
                messages.push(warning.clone());
            }
        }
        messages
    }

    pub fn errors(&self) -> Vec<String> {
        let mut messages: Vec<String> = self.export_readiness.blockers.clone();
        for error in self.verdicts().filter_map(|v| v.error.as_ref()) {
            if !messages.contains(error) {
                messages.push(error.clone());
            }
        }
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{calculate_roi_results, CalculationInputs, ComponentData};
    use crate::projection::{BenefitRealizationFactors, CostSchedule};
    use std::collections::BTreeMap;

    fn results_with_benefit(tools: f64, discount_rate: f64) -> ResultsData {
        let mut component_data = BTreeMap::new();
        component_data.insert(
            "licenseConsolidation".to_string(),
            ComponentData::enabled(
                [
                    ("numberOfToolsEliminated".to_string(), tools),
                    ("costPerToolEliminated".to_string(), 10_000.0),
                ]
                .into_iter()
                .collect(),
            ),
        );
        calculate_roi_results(&CalculationInputs {
            hourly_rate: 40.0,
            component_data,
            costs: CostSchedule::flat(10_000.0, 0.0, 0.0),
            benefit_realization_factors: BenefitRealizationFactors::default(),
            discount_rate,
        })
    }

    #[test]
    fn test_healthy_result_is_not_blocked() {
        // 3 tools: benefits 67,500 over costs 30,000, ROI 125%.
        let results = results_with_benefit(3.0, 10.0);
        let report = GuardrailReport::evaluate(
            &results,
            40.0,
            &GuardrailConfig::default(),
            &DataCompleteness::complete(),
        );
        assert!(!report.is_blocked());
        assert!(report.errors().is_empty());
        assert_eq!(report.roi_band, GuardrailResult::pass());
    }

    #[test]
    fn test_high_roi_blocks_even_with_band_disabled() {
        // 10 tools: benefits 225,000 over costs 30,000, ROI 650%.
        let results = results_with_benefit(10.0, 10.0);
        let config = GuardrailConfig {
            roi_band_enabled: false,
            ..GuardrailConfig::default()
        };
        let report =
            GuardrailReport::evaluate(&results, 40.0, &config, &DataCompleteness::complete());
        assert!(report.is_blocked());
        assert!(!report.roi_band.allowed);
        // Same message from readiness and band appears once.
        assert_eq!(report.errors().len(), 1);
    }

    #[test]
    fn test_discount_rate_error_blocks() {
        let results = results_with_benefit(3.0, 75.0);
        let report = GuardrailReport::evaluate(
            &results,
            40.0,
            &GuardrailConfig::default(),
            &DataCompleteness::complete(),
        );
        assert!(report.export_readiness.can_export);
        assert!(report.is_blocked());
        assert_eq!(report.worst_severity(), Severity::Error);
    }
}
