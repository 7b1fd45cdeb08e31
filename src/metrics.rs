//! Headline financial metrics over aggregated cash flow.

use crate::projection::YearlyData;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResults {
    /// Percentage.
    pub roi: f64,
    /// Months. Infinite when year-1 benefits are zero; serialized as `null`.
    #[serde(with = "payback_serde")]
    pub payback_period: f64,
    pub total_benefits_3yr: f64,
    pub total_costs_3yr: f64,
    pub total_net_cash_flow_3yr: f64,
}

impl AnalysisResults {
    pub fn has_payback(&self) -> bool {
        self.payback_period.is_finite()
    }
}

/// `(totalNetCashFlow / totalCosts) × 100`, or exactly 0 when there is no
/// cost base.
pub fn calculate_roi(total_net_cash_flow: f64, total_costs: f64) -> f64 {
    if total_costs == 0.0 {
        return 0.0;
    }
    (total_net_cash_flow / total_costs) * 100.0
}

/// `(totalCosts / year1Benefits) × 12` months, or positive infinity when
/// year 1 realizes nothing.
pub fn calculate_payback_period(total_costs: f64, year1_benefits: f64) -> f64 {
    if year1_benefits == 0.0 {
        return f64::INFINITY;
    }
    (total_costs / year1_benefits) * 12.0
}

pub fn summarize(yearly: &[YearlyData; 3]) -> AnalysisResults {
    let total_benefits_3yr: f64 = yearly.iter().map(|y| y.benefits).sum();
    let total_costs_3yr: f64 = yearly.iter().map(|y| y.costs).sum();
    let total_net_cash_flow_3yr: f64 = yearly.iter().map(|y| y.net_cash_flow).sum();

    AnalysisResults {
        roi: calculate_roi(total_net_cash_flow_3yr, total_costs_3yr),
        payback_period: calculate_payback_period(total_costs_3yr, yearly[0].benefits),
        total_benefits_3yr,
        total_costs_3yr,
        total_net_cash_flow_3yr,
    }
}

/// Infinite payback round-trips through JSON as `null`.
pub mod payback_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            serializer.serialize_some(value)
        } else {
            serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(year: u8, benefits: f64, costs: f64) -> YearlyData {
        YearlyData {
            year,
            benefits,
            costs,
            net_cash_flow: benefits - costs,
        }
    }

    #[test]
    fn test_roi_zero_cost_is_zero() {
        let roi = calculate_roi(50_000.0, 0.0);
        assert_eq!(roi, 0.0);
        assert!(!roi.is_nan());
    }

    #[test]
    fn test_roi_basic() {
        assert_eq!(calculate_roi(150.0, 100.0), 150.0);
        assert_eq!(calculate_roi(-50.0, 100.0), -50.0);
    }

    #[test]
    fn test_payback_zero_benefit_is_infinite() {
        let payback = calculate_payback_period(10_000.0, 0.0);
        assert!(payback.is_infinite() && payback.is_sign_positive());
    }

    #[test]
    fn test_payback_months() {
        assert_eq!(calculate_payback_period(60_000.0, 120_000.0), 6.0);
    }

    #[test]
    fn test_summarize_totals() {
        let yearly = [
            year(1, 50_000.0, 40_000.0),
            year(2, 75_000.0, 20_000.0),
            year(3, 100_000.0, 20_000.0),
        ];
        let summary = summarize(&yearly);
        assert_eq!(summary.total_benefits_3yr, 225_000.0);
        assert_eq!(summary.total_costs_3yr, 80_000.0);
        assert_eq!(summary.total_net_cash_flow_3yr, 145_000.0);
        assert_eq!(summary.roi, 181.25);
        assert!((summary.payback_period - 19.2).abs() < 1e-9);
        assert!(summary.has_payback());
    }

    #[test]
    fn test_infinite_payback_serializes_as_null_and_back() {
        let yearly = [year(1, 0.0, 10.0), year(2, 0.0, 10.0), year(3, 0.0, 10.0)];
        let summary = summarize(&yearly);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"paybackPeriod\":null"));

        let back: AnalysisResults = serde_json::from_str(&json).unwrap();
        assert!(back.payback_period.is_infinite());
        assert!(!back.has_payback());
    }
}
