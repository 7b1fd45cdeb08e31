use serde::{Deserialize, Serialize};

/// Year-specific adoption multipliers applied to every component's annual
/// benefit. Values above 1.0 are arithmetically allowed; the realization
/// sanity guardrail flags them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenefitRealizationFactors {
    #[serde(default = "default_year1")]
    pub year1: f64,
    #[serde(default = "default_year2")]
    pub year2: f64,
    #[serde(default = "default_year3")]
    pub year3: f64,
}

impl Default for BenefitRealizationFactors {
    fn default() -> Self {
        Self {
            year1: default_year1(),
            year2: default_year2(),
            year3: default_year3(),
        }
    }
}

impl BenefitRealizationFactors {
    pub fn new(year1: f64, year2: f64, year3: f64) -> Self {
        Self {
            year1,
            year2,
            year3,
        }
    }

    pub fn as_array(&self) -> [f64; 3] {
        [self.year1, self.year2, self.year3]
    }
}

fn default_year1() -> f64 {
    0.5
}
fn default_year2() -> f64 {
    0.75
}
fn default_year3() -> f64 {
    1.0
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RealizedBenefit {
    pub year1: f64,
    pub year2: f64,
    pub year3: f64,
}

impl RealizedBenefit {
    pub fn total(&self) -> f64 {
        self.year1 + self.year2 + self.year3
    }
}

/// Elementwise product of the annual benefit with the three factors. No
/// clamping.
pub fn apply_realization(annual_benefit: f64, factors: &BenefitRealizationFactors) -> RealizedBenefit {
    RealizedBenefit {
        year1: annual_benefit * factors.year1,
        year2: annual_benefit * factors.year2,
        year3: annual_benefit * factors.year3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ramp() {
        let factors = BenefitRealizationFactors::default();
        assert_eq!(factors.as_array(), [0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_apply_realization_default_ramp() {
        let realized = apply_realization(1000.0, &BenefitRealizationFactors::default());
        assert_eq!(realized.year1, 500.0);
        assert_eq!(realized.year2, 750.0);
        assert_eq!(realized.year3, 1000.0);
        assert_eq!(realized.total(), 2250.0);
    }

    #[test]
    fn test_factors_above_one_are_not_clamped() {
        let realized = apply_realization(100.0, &BenefitRealizationFactors::new(1.0, 1.5, 2.0));
        assert_eq!(realized.year3, 200.0);
    }

    #[test]
    fn test_partial_factors_deserialize_with_defaults() {
        let factors: BenefitRealizationFactors = toml::from_str("year1 = 0.25").unwrap();
        assert_eq!(factors.as_array(), [0.25, 0.75, 1.0]);
    }
}
