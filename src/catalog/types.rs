use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Benefit category a component reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentCategory {
    TicketElimination,
    AgentProductivity,
    CostSavings,
}

impl ComponentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::TicketElimination => "Ticket Elimination",
            Self::AgentProductivity => "Agent Productivity",
            Self::CostSavings => "Cost Savings",
        }
    }

    pub fn all() -> [ComponentCategory; 3] {
        [
            Self::TicketElimination,
            Self::AgentProductivity,
            Self::CostSavings,
        ]
    }
}

impl FromStr for ComponentCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "ticketelimination" => Ok(Self::TicketElimination),
            "agentproductivity" => Ok(Self::AgentProductivity),
            "costsavings" => Ok(Self::CostSavings),
            _ => Err(format!("unknown component category: {s}")),
        }
    }
}

/// Subscription plan, including the two upgrade paths for existing customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Plan {
    Growth,
    Pro,
    Enterprise,
    #[serde(rename = "Growth to Pro")]
    GrowthToPro,
    #[serde(rename = "Pro to Enterprise")]
    ProToEnterprise,
}

impl Plan {
    pub const ALL: [Plan; 5] = [
        Plan::Growth,
        Plan::Pro,
        Plan::Enterprise,
        Plan::GrowthToPro,
        Plan::ProToEnterprise,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Growth => "Growth",
            Self::Pro => "Pro",
            Self::Enterprise => "Enterprise",
            Self::GrowthToPro => "Growth to Pro",
            Self::ProToEnterprise => "Pro to Enterprise",
        }
    }

    /// Annual list price per agent.
    pub fn list_unit_price(&self) -> f64 {
        match self {
            Self::Growth => 588.0,
            Self::Pro => 1188.0,
            Self::Enterprise => 2376.0,
            Self::GrowthToPro => 588.0,
            Self::ProToEnterprise => 1188.0,
        }
    }

    pub fn default_implementation_price(&self) -> f64 {
        match self {
            Self::Growth => 5000.0,
            Self::Pro => 10000.0,
            Self::Enterprise => 20000.0,
            Self::GrowthToPro => 7500.0,
            Self::ProToEnterprise => 15000.0,
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Plan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "growth" => Ok(Self::Growth),
            "pro" => Ok(Self::Pro),
            "enterprise" => Ok(Self::Enterprise),
            "growth to pro" => Ok(Self::GrowthToPro),
            "pro to enterprise" => Ok(Self::ProToEnterprise),
            _ => Err(format!("unknown plan: {s}")),
        }
    }
}

/// Maturity preset a customer selects per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Low,
    Medium,
    High,
    Other,
}

/// Semantic type of an input field. Drives validation, not arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Percent,
    Currency,
    Hours,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputField {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub default_value: Option<f64>,
    pub tooltip: Option<&'static str>,
}

/// Sparse set of named formula parameters supplied by one maturity level.
pub type ParameterSet = BTreeMap<&'static str, f64>;

#[derive(Debug, Clone, Serialize)]
pub struct MaturityDefaults {
    pub low: ParameterSet,
    pub medium: ParameterSet,
    pub high: ParameterSet,
}

impl MaturityDefaults {
    /// Preset for a level. `Other` has no preset; the caller supplies custom values.
    pub fn for_level(&self, level: MaturityLevel) -> Option<&ParameterSet> {
        match level {
            MaturityLevel::Low => Some(&self.low),
            MaturityLevel::Medium => Some(&self.medium),
            MaturityLevel::High => Some(&self.high),
            MaturityLevel::Other => None,
        }
    }
}

/// Immutable catalog entry describing one benefit component.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefinition {
    pub id: ComponentId,
    pub name: &'static str,
    pub description: &'static str,
    pub tooltip: &'static str,
    pub category: ComponentCategory,
    pub visible_for_plans: &'static [Plan],
    #[serde(rename = "requiresESM")]
    pub requires_esm: bool,
    pub requires_freddy: bool,
    pub supports_maturity: bool,
    pub maturity_defaults: Option<MaturityDefaults>,
    pub other_range: Option<ValueRange>,
    /// Input that an `Other` maturity value overrides.
    pub custom_parameter: Option<&'static str>,
    pub input_fields: Vec<InputField>,
}

impl ComponentDefinition {
    pub fn is_visible(&self, plan: Plan, esm_enabled: bool, freddy_enabled: bool) -> bool {
        self.visible_for_plans.contains(&plan)
            && (!self.requires_esm || esm_enabled)
            && (!self.requires_freddy || freddy_enabled)
    }

    pub fn field(&self, id: &str) -> Option<&InputField> {
        self.input_fields.iter().find(|f| f.id == id)
    }

    /// Catalog default for every field that declares one.
    pub fn default_inputs(&self) -> BTreeMap<String, f64> {
        self.input_fields
            .iter()
            .filter_map(|f| f.default_value.map(|v| (f.id.to_string(), v)))
            .collect()
    }
}

/// The 19 benefit components known to the formula engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComponentId {
    // Ticket elimination
    KnowledgeBase,
    AutomationServiceRequests,
    #[serde(rename = "freddyAIAgent")]
    FreddyAiAgent,
    ProactiveProblemManagement,
    EsmTicketElimination,
    // Agent productivity
    IncidentManagement,
    ServiceRequestManagement,
    ProblemManagement,
    ChangeManagement,
    ProjectManagement,
    AssetManagement,
    Cmdb,
    ServiceCatalogExpansion,
    EsmAgentProductivity,
    // Cost savings
    LicenseConsolidation,
    InfrastructureSavings,
    VendorSpendReduction,
    EsmSharedServices,
    FreddyCopilotSavings,
}

impl ComponentId {
    pub const ALL: [ComponentId; 19] = [
        ComponentId::KnowledgeBase,
        ComponentId::AutomationServiceRequests,
        ComponentId::FreddyAiAgent,
        ComponentId::ProactiveProblemManagement,
        ComponentId::EsmTicketElimination,
        ComponentId::IncidentManagement,
        ComponentId::ServiceRequestManagement,
        ComponentId::ProblemManagement,
        ComponentId::ChangeManagement,
        ComponentId::ProjectManagement,
        ComponentId::AssetManagement,
        ComponentId::Cmdb,
        ComponentId::ServiceCatalogExpansion,
        ComponentId::EsmAgentProductivity,
        ComponentId::LicenseConsolidation,
        ComponentId::InfrastructureSavings,
        ComponentId::VendorSpendReduction,
        ComponentId::EsmSharedServices,
        ComponentId::FreddyCopilotSavings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KnowledgeBase => "knowledgeBase",
            Self::AutomationServiceRequests => "automationServiceRequests",
            Self::FreddyAiAgent => "freddyAIAgent",
            Self::ProactiveProblemManagement => "proactiveProblemManagement",
            Self::EsmTicketElimination => "esmTicketElimination",
            Self::IncidentManagement => "incidentManagement",
            Self::ServiceRequestManagement => "serviceRequestManagement",
            Self::ProblemManagement => "problemManagement",
            Self::ChangeManagement => "changeManagement",
            Self::ProjectManagement => "projectManagement",
            Self::AssetManagement => "assetManagement",
            Self::Cmdb => "cmdb",
            Self::ServiceCatalogExpansion => "serviceCatalogExpansion",
            Self::EsmAgentProductivity => "esmAgentProductivity",
            Self::LicenseConsolidation => "licenseConsolidation",
            Self::InfrastructureSavings => "infrastructureSavings",
            Self::VendorSpendReduction => "vendorSpendReduction",
            Self::EsmSharedServices => "esmSharedServices",
            Self::FreddyCopilotSavings => "freddyCopilotSavings",
        }
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown component id: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_id_string_round_trip() {
        for id in ComponentId::ALL {
            assert_eq!(id.as_str().parse::<ComponentId>(), Ok(id));
        }
    }

    #[test]
    fn test_component_id_serde_matches_as_str() {
        for id in ComponentId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_plan_parses_display_strings() {
        assert_eq!("Growth to Pro".parse::<Plan>(), Ok(Plan::GrowthToPro));
        assert_eq!("pro-to-enterprise".parse::<Plan>(), Ok(Plan::ProToEnterprise));
        assert!("Starter".parse::<Plan>().is_err());
    }

    #[test]
    fn test_value_range_is_inclusive() {
        let range = ValueRange::new(0.0, 20.0);
        assert!(range.contains(0.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(20.01));
    }
}
