//! Benefit realization over the three-year horizon and roll-up against the
//! cost schedule.

pub mod aggregation;
pub mod realization;

pub use aggregation::{aggregate_yearly, ComponentResult, CostSchedule, YearlyData};
pub use realization::{apply_realization, BenefitRealizationFactors, RealizedBenefit};
