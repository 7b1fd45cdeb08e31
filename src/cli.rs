use crate::catalog::{ComponentCategory, Plan};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser, Debug)]
#[command(name = "roimap")]
#[command(about = "Three-year ROI projection with guardrails for benefit models", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info and formula traces, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    /// Disable colour output
    #[arg(long, global = true, env = "ROIMAP_PLAIN")]
    pub plain: bool,

    /// Config file (defaults to the nearest .roimap.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate a three-year projection for a scenario file
    Calculate {
        /// Scenario file (.toml or .json)
        scenario: PathBuf,

        /// Output format (defaults to [output].default_format, then terminal)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exit non-zero when guardrails block the result
        #[arg(long)]
        strict: bool,
    },

    /// List benefit components available for a plan
    Components {
        /// Growth, Pro, Enterprise, "Growth to Pro" or "Pro to Enterprise"
        #[arg(long, value_parser = parse_plan)]
        plan: Plan,

        /// Include Enterprise Service Management components
        #[arg(long)]
        esm: bool,

        /// Include Freddy Copilot components
        #[arg(long)]
        freddy: bool,

        /// Only list one category
        #[arg(long, value_parser = parse_category)]
        category: Option<ComponentCategory>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check a scenario for missing or out-of-range inputs
    Validate {
        /// Scenario file (.toml or .json)
        scenario: PathBuf,
    },

    /// Initialize a .roimap.toml configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Markdown => crate::io::output::OutputFormat::Markdown,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

fn parse_plan(s: &str) -> Result<Plan, String> {
    Plan::from_str(s)
}

fn parse_category(s: &str) -> Result<ComponentCategory, String> {
    ComponentCategory::from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_conversion() {
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Json),
            crate::io::output::OutputFormat::Json
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Markdown),
            crate::io::output::OutputFormat::Markdown
        );
        assert_eq!(
            crate::io::output::OutputFormat::from(OutputFormat::Terminal),
            crate::io::output::OutputFormat::Terminal
        );
    }

    #[test]
    fn test_cli_parsing_calculate_command() {
        let cli = Cli::parse_from([
            "roimap",
            "calculate",
            "deal.toml",
            "--format",
            "json",
            "--strict",
            "-vv",
        ]);

        assert_eq!(cli.verbosity, 2);
        match cli.command {
            Commands::Calculate {
                scenario,
                format,
                output,
                strict,
            } => {
                assert_eq!(scenario, PathBuf::from("deal.toml"));
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(output, None);
                assert!(strict);
            }
            _ => panic!("Expected Calculate command"),
        }
    }

    #[test]
    fn test_cli_parsing_components_command() {
        let cli = Cli::parse_from([
            "roimap",
            "components",
            "--plan",
            "Growth to Pro",
            "--esm",
            "--category",
            "cost-savings",
        ]);

        match cli.command {
            Commands::Components {
                plan,
                esm,
                freddy,
                category,
                ..
            } => {
                assert_eq!(plan, Plan::GrowthToPro);
                assert!(esm);
                assert!(!freddy);
                assert_eq!(category, Some(ComponentCategory::CostSavings));
            }
            _ => panic!("Expected Components command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_plan() {
        let result = Cli::try_parse_from(["roimap", "components", "--plan", "Platinum"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parsing_init_command() {
        let cli = Cli::parse_from(["roimap", "init", "--force"]);
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["roimap", "validate", "deal.json", "--config", "/etc/roi.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/roi.toml")));
        assert!(matches!(cli.command, Commands::Validate { .. }));
    }
}
