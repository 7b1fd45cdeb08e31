//! CLI command implementations.
//!
//! - **calculate**: run a scenario through the engine and guardrails
//! - **components**: list the catalog entries visible for a plan
//! - **validate**: check scenario inputs without calculating
//! - **init**: write a default `.roimap.toml`

pub mod calculate;
pub mod components;
pub mod init;
pub mod validate;

pub use calculate::{handle_calculate, CalculateConfig};
pub use components::{list_components, ComponentsConfig};
pub use init::init_config;
pub use validate::{validate_scenario, ValidateConfig};
