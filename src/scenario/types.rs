use crate::catalog::{MaturityLevel, Plan};
use crate::formulas::ComponentInputs;
use crate::projection::BenefitRealizationFactors;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One deal as entered by a seller: who, how many agents, what price, and
/// how mature each practice area is today.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub opportunity: Opportunity,
    #[serde(default)]
    pub agent_data: AgentData,
    #[serde(default)]
    pub pricing: Pricing,
    /// Keyed by component id
    #[serde(default)]
    pub maturity: BTreeMap<String, MaturitySelection>,
    /// Explicit per-component inputs, keyed by component id
    #[serde(default)]
    pub components: BTreeMap<String, ComponentOverride>,
    #[serde(default)]
    pub advanced: AdvancedSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub engagement: Option<String>,
    #[serde(default)]
    pub plan: Option<Plan>,
    /// Display label only; no conversion happens.
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub esm: bool,
    #[serde(default)]
    pub freddy_copilot: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentData {
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub agent_count: f64,
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub annual_incidents: f64,
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub annual_service_requests: f64,
    /// Fully loaded annual cost of one agent
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub individual_agent_expense: f64,
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub current_licensing: f64,
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub current_maintenance: f64,
}

impl AgentData {
    pub fn total_tickets(&self) -> f64 {
        self.annual_incidents + self.annual_service_requests
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pricing {
    #[serde(default)]
    pub pricing_type: Option<String>,
    /// Annual price per agent. Falls back to the plan list price.
    #[serde(default, deserialize_with = "numeric_text::option")]
    pub unit_price: Option<f64>,
    /// Falls back to the plan's default implementation price.
    #[serde(default, deserialize_with = "numeric_text::option")]
    pub implementation_price: Option<f64>,
    #[serde(default, deserialize_with = "numeric_text::option")]
    pub premium_support_price: Option<f64>,
    #[serde(default, deserialize_with = "numeric_text::deserialize")]
    pub other_costs: f64,
}

impl Pricing {
    pub fn effective_unit_price(&self, plan: Option<Plan>) -> f64 {
        self.unit_price
            .or_else(|| plan.map(|p| p.list_unit_price()))
            .unwrap_or(0.0)
    }

    pub fn effective_implementation_price(&self, plan: Option<Plan>) -> f64 {
        self.implementation_price
            .or_else(|| plan.map(|p| p.default_implementation_price()))
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaturitySelection {
    pub level: MaturityLevel,
    /// Only read for `Other`; sets the component's custom parameter.
    #[serde(default)]
    pub custom_value: Option<f64>,
    /// Only read for `Other`; sets `timeSavedMinutes`.
    #[serde(default)]
    pub custom_time_saved: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentOverride {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub inputs: ComponentInputs,
}

fn default_enabled() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AdvancedSettings {
    /// Percent. Falls back to the configured default.
    #[serde(default)]
    pub discount_rate: Option<f64>,
    #[serde(default)]
    pub benefit_realization_factors: Option<BenefitRealizationFactors>,
}

/// Numeric fields accept plain numbers or text the way sellers type it
/// ("1,200", "$99.50"). Text goes through `parse_numeric_input`, so
/// anything unreadable becomes 0 and is caught by completeness checks.
pub mod numeric_text {
    use crate::validation::parse_numeric_input;
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(f64),
        Text(String),
    }

    impl NumberOrText {
        fn value(self) -> f64 {
            match self {
                Self::Number(n) => n,
                Self::Text(text) => parse_numeric_input(&text),
            }
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
        NumberOrText::deserialize(deserializer).map(NumberOrText::value)
    }

    pub fn option<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        Option::<NumberOrText>::deserialize(deserializer).map(|v| v.map(NumberOrText::value))
    }
}
