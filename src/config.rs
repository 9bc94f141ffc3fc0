use crate::error::{Result, RevisionError};
use crate::publish::PublishFormat;
use crate::resolver::DEFAULT_SNAPSHOT_QUALIFIER;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the repository directory
pub const CONFIG_FILE_NAME: &str = "gitrevision.toml";

/// Environment variable overriding the property name
pub const PROPERTY_ENV_VAR: &str = "GIT_REVISION_PROPERTY";

/// Represents the complete configuration for git-revision.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Name the version is published under
    #[serde(default = "default_property_name")]
    pub property_name: String,

    #[serde(default)]
    pub format: PublishFormat,

    #[serde(default)]
    pub snapshot: SnapshotConfig,
}

fn default_property_name() -> String {
    "revision".to_string()
}

fn default_snapshot_qualifier() -> String {
    DEFAULT_SNAPSHOT_QUALIFIER.to_string()
}

/// Configuration for versions derived from history rather than a release tag.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SnapshotConfig {
    /// Pre-release marker, rendered as `-<qualifier>`
    #[serde(default = "default_snapshot_qualifier")]
    pub qualifier: String,
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        SnapshotConfig {
            qualifier: default_snapshot_qualifier(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            property_name: default_property_name(),
            format: PublishFormat::default(),
            snapshot: SnapshotConfig::default(),
        }
    }
}

impl Config {
    /// Apply `GIT_REVISION_PROPERTY` when set and non-empty
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(name) = std::env::var(PROPERTY_ENV_VAR) {
            if !name.trim().is_empty() {
                self.property_name = name.trim().to_string();
            }
        }
        self
    }

    /// Reject values that cannot be published
    pub fn validate(&self) -> Result<()> {
        if self.property_name.trim().is_empty() {
            return Err(RevisionError::config("property_name must not be empty"));
        }
        if self.property_name.contains(char::is_whitespace) {
            return Err(RevisionError::config(format!(
                "property_name '{}' must not contain whitespace",
                self.property_name
            )));
        }
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gitrevision.toml` in `search_dir`
/// 3. `.gitrevision.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>, search_dir: &Path) -> Result<Config> {
    let local = search_dir.join(CONFIG_FILE_NAME);

    let path = if let Some(path) = config_path {
        path.to_path_buf()
    } else if local.exists() {
        local
    } else if let Some(config_dir) = dirs::config_dir() {
        let global = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if global.exists() {
            global
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path)?;
    let config: Config = toml::from_str(&config_str)
        .map_err(|e| RevisionError::config(format!("{}: {}", path.display(), e)))?;
    Ok(config)
}
