use std::fs;
use std::path::{Path, PathBuf};

use super::core::{DefaultsConfig, RoimapConfig};
use crate::errors::RoimapError;

pub const CONFIG_FILE_NAME: &str = ".roimap.toml";
const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Parse and normalize config from a TOML string.
pub fn parse_config(contents: &str) -> Result<RoimapConfig, toml::de::Error> {
    let mut config = toml::from_str::<RoimapConfig>(contents)?;

    if let Err(e) = config.defaults.validate() {
        log::warn!("Invalid [defaults] section: {e}. Using defaults.");
        config.defaults = DefaultsConfig::default();
    }

    Ok(config)
}

/// Load an explicitly named config file. A missing or unreadable file is
/// an error; unparseable contents warn and fall back to defaults.
pub fn load_config_from_path(path: &Path) -> Result<RoimapConfig, RoimapError> {
    let contents = fs::read_to_string(path).map_err(|e| RoimapError::io(path, e))?;
    Ok(parse_or_default(path, &contents))
}

fn parse_or_default(path: &Path, contents: &str) -> RoimapConfig {
    match parse_config(contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            let err = RoimapError::config_parse(path, e.message());
            log::warn!("{err}. Using defaults.");
            RoimapConfig::default()
        }
    }
}

fn try_load_config_from_path(path: &Path) -> Option<RoimapConfig> {
    match fs::read_to_string(path) {
        Ok(contents) => Some(parse_or_default(path, &contents)),
        Err(e) => {
            // Not finding the file at this level is the normal case.
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!("Failed to read config file {}: {}", path.display(), e);
            }
            None
        }
    }
}

/// `start` followed by its parents, at most `max_depth` entries.
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and up to nine ancestors for `.roimap.toml`.
pub fn discover_config(start: PathBuf) -> RoimapConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {MAX_TRAVERSAL_DEPTH} directories. Using default config."
            );
            RoimapConfig::default()
        })
}

/// Discover config from the current working directory.
pub fn load_config() -> RoimapConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!("Failed to get current directory: {e}. Using default config.");
            RoimapConfig::default()
        }
    }
}
