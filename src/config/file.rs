use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

use crate::core::SetupError;

/// Contents of an optional `--config` TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// `[install]` table.
    #[serde(default)]
    pub install: InstallSection,
}

/// The `[install]` table. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct InstallSection {
    /// `latest` or a semantic version.
    pub version: Option<String>,
    /// Install directory; `~` and `$VAR` are expanded.
    pub bin_dir: Option<String>,
    /// Release index base URL.
    pub release_url: Option<String>,
}

impl ConfigFile {
    /// Load and parse the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::Config`] if the file cannot be read or is not
    /// valid TOML for this schema.
    pub async fn load_from(path: &Path) -> Result<Self, SetupError> {
        debug!("Loading configuration from {}", path.display());

        let content = fs::read_to_string(path).await.map_err(|e| SetupError::Config {
            message: format!("Failed to read config from {}: {e}", path.display()),
        })?;

        Self::parse(&content).map_err(|e| SetupError::Config {
            message: format!("Failed to parse config from {}: {e}", path.display()),
        })
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
