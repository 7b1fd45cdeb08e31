use crate::catalog::{get_visible_components, ComponentCategory, Plan};
use crate::formatting::FormattingConfig;
use crate::io::{self, create_writer, ComponentListing, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

pub struct ComponentsConfig {
    pub plan: Plan,
    pub esm: bool,
    pub freddy_copilot: bool,
    pub category: Option<ComponentCategory>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub formatting: FormattingConfig,
}

pub fn build_listing(config: &ComponentsConfig) -> ComponentListing {
    let components = get_visible_components(config.plan, config.esm, config.freddy_copilot)
        .into_iter()
        .filter(|def| config.category.is_none_or(|c| def.category == c))
        .collect();

    ComponentListing {
        plan: config.plan,
        esm: config.esm,
        freddy_copilot: config.freddy_copilot,
        components,
    }
}

pub fn list_components(config: ComponentsConfig) -> Result<()> {
    let listing = build_listing(&config);
    log::debug!(
        "{} components visible for {} (esm={}, freddy={})",
        listing.components.len(),
        config.plan,
        config.esm,
        config.freddy_copilot
    );

    let out = io::open_output(config.output.as_deref())?;
    let styler = if config.output.is_some() {
        FormattingConfig::plain().styler()
    } else {
        config.formatting.styler()
    };
    create_writer(config.format, out, styler).write_components(&listing)
}
