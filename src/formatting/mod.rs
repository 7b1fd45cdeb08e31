use crate::guardrails::Severity;
use colored::*;
use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Auto,   // Detect based on terminal
    Always, // Force colors on
    Never,  // Force colors off
}

impl ColorMode {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Some(Self::Auto),
            "always" => Some(Self::Always),
            "never" => Some(Self::Never),
            _ => None,
        }
    }

    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattingConfig {
    pub color: ColorMode,
    /// Prefix for money values, e.g. `$` or `EUR `
    pub currency_symbol: String,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            currency_symbol: "$".to_string(),
        }
    }
}

impl FormattingConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        // https://no-color.org
        if env::var_os("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            config.color = ColorMode::Always;
        }

        config
    }

    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
            ..Self::default()
        }
    }

    pub fn with_currency_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn styler(&self) -> Styler {
        let enabled = self.color.should_use_color();
        colored::control::set_override(enabled);
        Styler { enabled }
    }
}

/// Applies colour when enabled and passes text through otherwise.
#[derive(Debug, Clone, Copy)]
pub struct Styler {
    enabled: bool,
}

impl Styler {
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn paint(&self, text: &str, f: impl Fn(&str) -> ColoredString) -> String {
        if self.enabled {
            f(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, text: &str) -> String {
        self.paint(text, |t| t.blue().bold())
    }

    pub fn bold(&self, text: &str) -> String {
        self.paint(text, |t| t.bold())
    }

    pub fn dim(&self, text: &str) -> String {
        self.paint(text, |t| t.dimmed())
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, |t| t.green())
    }

    pub fn severity(&self, severity: Severity, text: &str) -> String {
        match severity {
            Severity::Info => self.paint(text, |t| t.cyan()),
            Severity::Warning => self.paint(text, |t| t.yellow()),
            Severity::Error => self.paint(text, |t| t.red().bold()),
        }
    }

    /// Green when non-negative, red otherwise.
    pub fn signed(&self, value: f64, text: &str) -> String {
        if value < 0.0 {
            self.paint(text, |t| t.red())
        } else {
            self.paint(text, |t| t.green())
        }
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|t| t == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Whole number with thousands separators.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(&digits))
}

/// `-$1,234` style: rounded to whole units, sign before the symbol.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    let number = format_number(value);
    match number.strip_prefix('-') {
        Some(abs) => format!("-{symbol}{abs}"),
        None => format!("{symbol}{number}"),
    }
}

pub fn format_percentage(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }
    format!("{value:.1}%")
}

/// Payback months to one decimal; infinite payback reads `N/A`.
pub fn format_months(months: f64) -> String {
    if !months.is_finite() {
        return "N/A".to_string();
    }
    format!("{months:.1} months")
}
