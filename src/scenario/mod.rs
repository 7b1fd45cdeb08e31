//! Deal scenarios and their translation into calculation inputs.
//!
//! A scenario file is TOML or JSON, picked by extension.

mod builder;
mod types;

pub use builder::{
    build_calculation_inputs, build_calculation_inputs_with_defaults, component_inputs,
    FREDDY_COPILOT_PRICE_PER_AGENT, PLACEHOLDER_ESM_REMAINING, PLACEHOLDER_ESM_TICKETS,
};
pub use types::{
    AdvancedSettings, AgentData, ComponentOverride, MaturitySelection, Opportunity, Pricing,
    Scenario,
};

use crate::errors::RoimapError;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioFormat {
    Toml,
    Json,
}

impl ScenarioFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Scenario {
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        toml::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn from_json_str(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    }

    pub fn parse(contents: &str, format: ScenarioFormat) -> Result<Self, String> {
        match format {
            ScenarioFormat::Toml => Self::from_toml_str(contents),
            ScenarioFormat::Json => Self::from_json_str(contents),
        }
    }

    pub fn load(path: &Path) -> Result<Self, RoimapError> {
        let format =
            ScenarioFormat::from_path(path).ok_or_else(|| RoimapError::unsupported_format(path))?;
        let contents = fs::read_to_string(path).map_err(|e| RoimapError::io(path, e))?;
        let scenario =
            Self::parse(&contents, format).map_err(|e| RoimapError::scenario_parse(path, e))?;
        log::debug!("Loaded scenario from {}", path.display());
        Ok(scenario)
    }
}
