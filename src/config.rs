/*!
# Locator Configuration

Literal tokens the locator looks for in test-runner output. The defaults
match the JsTestDriver runner; TOML and YAML files can override any of
them.
*/

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

use crate::core::LocatorError;

pub const DEFAULT_MARKER: &str = "error loading file: ";
pub const DEFAULT_PATH_SENTINEL: &str = "/test/";
pub const DEFAULT_UNCAUGHT_PREFIX: &str = "Uncaught ";
pub const DEFAULT_EXCEPTION_TOKEN: &str = "exception:";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Prefix that every error-location line starts with
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Leading segment of the virtual path the runner reports
    #[serde(default = "default_path_sentinel")]
    pub path_sentinel: String,

    /// Stripped from the message before the error name is read
    #[serde(default = "default_uncaught_prefix")]
    pub uncaught_prefix: String,

    /// Stripped after `uncaught_prefix`, checked independently
    #[serde(default = "default_exception_token")]
    pub exception_token: String,
}

fn default_marker() -> String {
    DEFAULT_MARKER.to_string()
}

fn default_path_sentinel() -> String {
    DEFAULT_PATH_SENTINEL.to_string()
}

fn default_uncaught_prefix() -> String {
    DEFAULT_UNCAUGHT_PREFIX.to_string()
}

fn default_exception_token() -> String {
    DEFAULT_EXCEPTION_TOKEN.to_string()
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            path_sentinel: default_path_sentinel(),
            uncaught_prefix: default_uncaught_prefix(),
            exception_token: default_exception_token(),
        }
    }
}

impl LocatorConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read locator config from {}",
                path.as_ref().display()
            )
        })?;

        let config: Self = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config from {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        info!(path = %path.as_ref().display(), "loaded locator config");
        Ok(config)
    }

    /// Load configuration from YAML file
    pub fn load_from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).with_context(|| {
            format!(
                "Failed to read locator config from {}",
                path.as_ref().display()
            )
        })?;

        let config: Self = serde_yaml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse YAML config from {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        info!(path = %path.as_ref().display(), "loaded locator config");
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize locator config to TOML")?;

        std::fs::write(&path, content).with_context(|| {
            format!(
                "Failed to write locator config to {}",
                path.as_ref().display()
            )
        })?;

        Ok(())
    }

    /// Checks that the tokens can actually match a single output line.
    ///
    /// `uncaught_prefix` and `exception_token` may be empty, which disables
    /// the corresponding strip.
    pub fn validate(&self) -> Result<(), LocatorError> {
        if self.marker.is_empty() {
            return Err(LocatorError::EmptyField { field: "marker" });
        }
        if self.path_sentinel.is_empty() {
            return Err(LocatorError::EmptyField {
                field: "path_sentinel",
            });
        }

        let fields = [
            ("marker", &self.marker),
            ("path_sentinel", &self.path_sentinel),
            ("uncaught_prefix", &self.uncaught_prefix),
            ("exception_token", &self.exception_token),
        ];
        for (field, value) in fields {
            if value.contains(['\n', '\r']) {
                return Err(LocatorError::MultilineField { field });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = LocatorConfig::default();
        assert_eq!(config.marker, "error loading file: ");
        assert_eq!(config.path_sentinel, "/test/");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: LocatorConfig = toml::from_str(r#"path_sentinel = "/spec/""#).unwrap();
        assert_eq!(config.path_sentinel, "/spec/");
        assert_eq!(config.marker, DEFAULT_MARKER);
        assert_eq!(config.uncaught_prefix, DEFAULT_UNCAUGHT_PREFIX);
    }

    #[test]
    fn test_config_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locator.toml");

        let config = LocatorConfig {
            marker: "failed to load: ".to_string(),
            ..LocatorConfig::default()
        };
        config.save_to_file(&path).unwrap();

        let loaded = LocatorConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_yaml_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locator.yaml");
        std::fs::write(&path, "exception_token: \"error:\"\n").unwrap();

        let loaded = LocatorConfig::load_from_yaml(&path).unwrap();
        assert_eq!(loaded.exception_token, "error:");
        assert_eq!(loaded.path_sentinel, DEFAULT_PATH_SENTINEL);
    }

    #[test]
    fn test_config_validation() {
        let empty_marker = LocatorConfig {
            marker: String::new(),
            ..LocatorConfig::default()
        };
        assert!(matches!(
            empty_marker.validate(),
            Err(LocatorError::EmptyField { field: "marker" })
        ));

        let multiline = LocatorConfig {
            uncaught_prefix: "Uncaught\n".to_string(),
            ..LocatorConfig::default()
        };
        assert!(matches!(
            multiline.validate(),
            Err(LocatorError::MultilineField {
                field: "uncaught_prefix"
            })
        ));
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("locator.toml");
        std::fs::write(&path, "marker = \"\"\n").unwrap();

        let err = LocatorConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("marker"));
    }
}
