//! Optional `.roimap.toml` configuration.
//!
//! Every field has a default, so an absent or partial file is valid. See
//! [`DEFAULT_CONFIG_TEMPLATE`] for the annotated layout written by
//! `roimap init`.

mod core;
mod loader;

pub use self::core::{DefaultsConfig, GuardrailConfig, OutputConfig, RoimapConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path, parse_config,
    CONFIG_FILE_NAME,
};

pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"# roimap configuration

[guardrails]
# Warn when 3-year ROI is below 100%. ROI above 300% always blocks export.
roi_band_enabled = true
# Block instead of warn for ROI below 100%.
block_mode = false
# Check manual overrides against catalog defaults.
override_guard_enabled = true

[defaults]
# Used when a scenario does not set advanced.discount_rate (percent).
discount_rate = 10.0

[defaults.realization]
year1 = 0.5
year2 = 0.75
year3 = 1.0

[output]
# terminal, json or markdown
default_format = "terminal"
"#;
