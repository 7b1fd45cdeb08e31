//! End-to-end calculation: formulas, realization, aggregation and metrics.
//!
//! Data flows one way through the stages and nothing here touches I/O or
//! shared state, so identical [`CalculationInputs`] always produce identical
//! [`ResultsData`].

use crate::catalog::{all_components, get_component_by_id};
use crate::formulas::{component_benefit, ComponentInputs};
use crate::metrics::{summarize, AnalysisResults};
use crate::projection::{
    aggregate_yearly, apply_realization, BenefitRealizationFactors, ComponentResult, CostSchedule,
    YearlyData,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// User-supplied inputs for one component.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ComponentData {
    #[serde(default)]
    pub inputs: ComponentInputs,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl ComponentData {
    pub fn enabled(inputs: ComponentInputs) -> Self {
        Self {
            inputs,
            enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationInputs {
    pub hourly_rate: f64,
    /// Keyed by component id string so that ids unknown to this build can be
    /// reported instead of failing deserialization.
    #[serde(default)]
    pub component_data: BTreeMap<String, ComponentData>,
    #[serde(default)]
    pub costs: CostSchedule,
    #[serde(default)]
    pub benefit_realization_factors: BenefitRealizationFactors,
    #[serde(default)]
    pub discount_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsData {
    pub component_results: Vec<ComponentResult>,
    pub yearly_data: [YearlyData; 3],
    pub analysis_results: AnalysisResults,
    pub discount_rate: f64,
    pub benefit_realization_factors: BenefitRealizationFactors,
}

/// Run the full pipeline. Component results come back in catalog
/// declaration order; disabled components and ids absent from the catalog
/// are skipped.
pub fn calculate_roi_results(inputs: &CalculationInputs) -> ResultsData {
    for id in inputs.component_data.keys() {
        if get_component_by_id(id).is_none() {
            log::warn!("Skipping component data for unknown component ID: {id}");
        }
    }

    let factors = inputs.benefit_realization_factors;
    let component_results: Vec<ComponentResult> = all_components()
        .iter()
        .filter_map(|def| {
            let data = inputs.component_data.get(def.id.as_str())?;
            if !data.enabled {
                return None;
            }
            for (field, value) in data.inputs.iter().filter(|(_, v)| **v < 0.0) {
                log::warn!("{}.{field} is negative ({value}); treating it as 0", def.id);
            }
            let annual_benefit = component_benefit(def.id, &data.inputs, inputs.hourly_rate);
            log::debug!("{}: annual benefit {annual_benefit:.2}", def.id);
            Some(ComponentResult::new(
                def,
                annual_benefit,
                apply_realization(annual_benefit, &factors),
            ))
        })
        .collect();

    let yearly_data = aggregate_yearly(&component_results, &inputs.costs);
    let analysis_results = summarize(&yearly_data);

    ResultsData {
        component_results,
        yearly_data,
        analysis_results,
        discount_rate: inputs.discount_rate,
        benefit_realization_factors: factors,
    }
}
