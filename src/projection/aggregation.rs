use super::realization::RealizedBenefit;
use crate::catalog::{ComponentCategory, ComponentDefinition, ComponentId};
use serde::{Deserialize, Serialize};

/// License and add-on cost per year plus the one-time implementation charge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CostSchedule {
    pub year1_license: f64,
    pub year2_license: f64,
    pub year3_license: f64,
    pub year1_freddy: f64,
    pub year2_freddy: f64,
    pub year3_freddy: f64,
    pub implementation: f64,
}

impl CostSchedule {
    /// Flat schedule: the same recurring amounts every year.
    pub fn flat(annual_license: f64, annual_freddy: f64, implementation: f64) -> Self {
        Self {
            year1_license: annual_license,
            year2_license: annual_license,
            year3_license: annual_license,
            year1_freddy: annual_freddy,
            year2_freddy: annual_freddy,
            year3_freddy: annual_freddy,
            implementation,
        }
    }

    /// Total cost charged in a fiscal year (1..=3). Implementation is charged
    /// in year 1 only.
    pub fn costs_for_year(&self, year: u8) -> f64 {
        match year {
            1 => self.year1_license + self.year1_freddy + self.implementation,
            2 => self.year2_license + self.year2_freddy,
            3 => self.year3_license + self.year3_freddy,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentResult {
    pub component_id: ComponentId,
    pub component_name: String,
    pub category: ComponentCategory,
    pub annual_benefit: f64,
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
    pub total: f64,
}

impl ComponentResult {
    pub fn new(definition: &ComponentDefinition, annual_benefit: f64, realized: RealizedBenefit) -> Self {
        Self {
            component_id: definition.id,
            component_name: definition.name.to_string(),
            category: definition.category,
            annual_benefit,
            year1: realized.year1,
            year2: realized.year2,
            year3: realized.year3,
            total: realized.total(),
        }
    }

    pub fn year(&self, year: u8) -> f64 {
        match year {
            1 => self.year1,
            2 => self.year2,
            3 => self.year3,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearlyData {
    pub year: u8,
    pub benefits: f64,
    pub costs: f64,
    pub net_cash_flow: f64,
}

/// Roll component results and costs up into the three fiscal years.
pub fn aggregate_yearly(results: &[ComponentResult], costs: &CostSchedule) -> [YearlyData; 3] {
    [1u8, 2, 3].map(|year| {
        let benefits: f64 = results.iter().map(|r| r.year(year)).sum();
        let year_costs = costs.costs_for_year(year);
        YearlyData {
            year,
            benefits,
            costs: year_costs,
            net_cash_flow: benefits - year_costs,
        }
    })
}
