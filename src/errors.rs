//! Error types for the file-facing shell around the calculation core.
//!
//! Business conditions (unknown component ids, zero cost bases, guardrail
//! blocks) are never errors. Only reading scenarios and config files and
//! writing reports can fail.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RoimapError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse scenario {}: {message}", path.display())]
    ScenarioParse { path: PathBuf, message: String },

    #[error("Failed to parse config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unsupported scenario format for {}: expected .toml or .json", path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("{} already exists. Use --force to overwrite.", path.display())]
    ConfigExists { path: PathBuf },
}

impl RoimapError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn scenario_parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::ScenarioParse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn config_parse(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::ConfigParse {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }

    pub fn unsupported_format(path: impl AsRef<Path>) -> Self {
        Self::UnsupportedFormat {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn config_exists(path: impl AsRef<Path>) -> Self {
        Self::ConfigExists {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::ScenarioParse { path, .. }
            | Self::ConfigParse { path, .. }
            | Self::UnsupportedFormat { path }
            | Self::ConfigExists { path } => path,
        }
    }

    /// Whether the user can resolve this by fixing their input or command
    /// line, as opposed to an environment failure.
    pub fn is_user_fixable(&self) -> bool {
        match self {
            Self::Io { source, .. } => matches!(
                source.kind(),
                io::ErrorKind::NotFound | io::ErrorKind::InvalidInput
            ),
            Self::ScenarioParse { .. }
            | Self::ConfigParse { .. }
            | Self::UnsupportedFormat { .. }
            | Self::ConfigExists { .. } => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = RoimapError::scenario_parse("deal.toml", "missing field `plan`");
        assert_eq!(
            err.to_string(),
            "Failed to parse scenario deal.toml: missing field `plan`"
        );
    }

    #[test]
    fn test_config_exists_message_mentions_force() {
        let err = RoimapError::config_exists(".roimap.toml");
        assert!(err.to_string().contains("--force"));
        assert_eq!(err.path(), Path::new(".roimap.toml"));
    }

    #[test]
    fn test_user_fixable_classification() {
        let missing = RoimapError::io("x.toml", io::Error::from(io::ErrorKind::NotFound));
        assert!(missing.is_user_fixable());

        let denied = RoimapError::io("x.toml", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(!denied.is_user_fixable());

        assert!(RoimapError::unsupported_format("deal.yaml").is_user_fixable());
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;
        let err = RoimapError::io("out.json", io::Error::other("disk full"));
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk full".into()));
    }
}
