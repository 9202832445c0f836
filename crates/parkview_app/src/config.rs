//! Parkview configuration file handling (parkview.toml)
//!
//! ```toml
//! [theme]
//! initial = "dark"
//! respect_system_preference = true
//! system = "light"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use parkview_theme::{ThemeOptions, ThemeVariant};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config")]
    Parse(#[from] toml::de::Error),
}

/// Top-level configuration
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// Theme configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Fixed theme; system appearance changes are ignored when set
    #[serde(default)]
    pub initial: Option<ThemeVariant>,
    #[serde(default = "default_true")]
    pub respect_system_preference: bool,
    /// System appearance reported to headless hosts
    #[serde(default)]
    pub system: Option<ThemeVariant>,
}

fn default_true() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            initial: None,
            respect_system_preference: true,
            system: None,
        }
    }
}

impl ThemeConfig {
    pub fn options(&self) -> ThemeOptions {
        ThemeOptions {
            initial: self.initial,
            respect_system_preference: self.respect_system_preference,
        }
    }
}

impl AppConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.theme.options(), ThemeOptions::default());
    }

    #[test]
    fn test_theme_section() {
        let config = AppConfig::from_toml_str(
            r#"
            [theme]
            initial = "dark"
            respect_system_preference = false
            system = "light"
            "#,
        )
        .expect("valid config");
        assert_eq!(config.theme.initial, Some(ThemeVariant::Dark));
        assert!(!config.theme.respect_system_preference);
        assert_eq!(config.theme.system, Some(ThemeVariant::Light));
    }

    #[test]
    fn test_unknown_variant_is_rejected() {
        let err = AppConfig::from_toml_str("[theme]\ninitial = \"sepia\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
