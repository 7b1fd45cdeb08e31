use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use roimap::cli::{Cli, Commands};
use roimap::commands::{
    handle_calculate, init_config, list_components, validate_scenario, CalculateConfig,
    ComponentsConfig, ValidateConfig,
};
use roimap::config::{load_config, load_config_from_path, RoimapConfig};
use roimap::formatting::FormattingConfig;
use roimap::io::OutputFormat;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let config = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    };
    let formatting = create_formatting_config(cli.plain, &config);

    match cli.command {
        Commands::Calculate {
            scenario,
            format,
            output,
            strict,
        } => handle_calculate(CalculateConfig {
            scenario,
            format: resolve_format(format, &config),
            output,
            strict,
            verbosity: cli.verbosity,
            formatting,
            config,
        }),
        Commands::Components {
            plan,
            esm,
            freddy,
            category,
            format,
            output,
        } => list_components(ComponentsConfig {
            plan,
            esm,
            freddy_copilot: freddy,
            category,
            format: resolve_format(format, &config),
            output,
            formatting,
        }),
        Commands::Validate { scenario } => validate_scenario(ValidateConfig {
            scenario,
            formatting,
            config,
        }),
        Commands::Init { force } => init_config(force),
    }
}

// RUST_LOG takes precedence over -v
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

// CLI flag, then [output].default_format, then terminal
fn resolve_format(flag: Option<roimap::cli::OutputFormat>, config: &RoimapConfig) -> OutputFormat {
    if let Some(format) = flag {
        return format.into();
    }
    match config.output.default_format.as_deref() {
        Some(name) => OutputFormat::parse(name).unwrap_or_else(|| {
            log::warn!("Unknown default_format '{name}' in config; using terminal");
            OutputFormat::Terminal
        }),
        None => OutputFormat::Terminal,
    }
}

fn create_formatting_config(plain: bool, config: &RoimapConfig) -> FormattingConfig {
    if plain || config.output.use_color == Some(false) {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}
