//! Global cinecal configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CinecalError, CinecalResult};

static DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn is_default_api_base_url(url: &String) -> bool {
    url == DEFAULT_API_BASE_URL
}

/// Global configuration at ~/.config/cinecal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct CinecalConfig {
    /// Base URL of the movie release backend.
    #[serde(
        default = "default_api_base_url",
        skip_serializing_if = "is_default_api_base_url"
    )]
    pub api_base_url: String,

    /// Country used when --country is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_country: Option<String>,
}

impl Default for CinecalConfig {
    fn default() -> Self {
        CinecalConfig {
            api_base_url: default_api_base_url(),
            default_country: None,
        }
    }
}

impl CinecalConfig {
    pub fn config_path() -> CinecalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CinecalError::Config("Could not determine config directory".into()))?
            .join("cinecal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the config, creating a commented default file on first use.
    pub fn load() -> CinecalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CinecalConfig = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .build()
            .map_err(|e| CinecalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CinecalError::Config(e.to_string()))?;

        Ok(config)
    }

    /// Save the current config to ~/.config/cinecal/config.toml
    pub fn save(&self) -> CinecalResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| CinecalError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| CinecalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CinecalResult<()> {
        let contents = format!(
            "\
# cinecal configuration

# Where the movie release backend lives:
# api_base_url = \"{DEFAULT_API_BASE_URL}\"

# Country used when --country is not given:
# default_country = \"IE\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CinecalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CinecalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = CinecalConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
        assert_eq!(config.default_country, None);
    }

    #[test]
    fn parses_partial_toml() {
        let config: CinecalConfig = toml::from_str("default_country = \"SE\"").unwrap();
        assert_eq!(config.default_country.as_deref(), Some("SE"));
        assert_eq!(config.api_base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn serializing_defaults_omits_default_values() {
        let serialized = toml::to_string_pretty(&CinecalConfig::default()).unwrap();
        assert!(!serialized.contains("api_base_url"));
        assert!(!serialized.contains("default_country"));
    }
}
