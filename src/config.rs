//! Paginator configuration
//!
//! Defaults for the page size and starting page, loadable from a YAML or
//! JSON file and overridable from the command line.

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Paginator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Number of elements per page
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Page shown when none is requested explicitly
    #[serde(default = "default_first_page")]
    pub first_page: i64,
}

fn default_per_page() -> usize {
    DEFAULT_PER_PAGE
}

fn default_first_page() -> i64 {
    1
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            first_page: default_first_page(),
        }
    }
}

impl PagerConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file, YAML for `.yaml`/`.yml` and JSON otherwise
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::from_yaml_str(&content),
            _ => Self::from_json_str(&content),
        }
    }

    /// Replace the page size when one is given
    #[must_use]
    pub fn with_per_page(mut self, per_page: Option<usize>) -> Self {
        if let Some(per_page) = per_page {
            self.per_page = per_page;
        }
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.per_page == 0 {
            return Err(Error::invalid_config_value(
                "per_page",
                "must be at least 1",
            ));
        }
        if self.first_page < 1 {
            return Err(Error::invalid_config_value(
                "first_page",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = PagerConfig::default();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.first_page, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_str() {
        let config = PagerConfig::from_yaml_str("per_page: 60\n").unwrap();
        assert_eq!(
            config,
            PagerConfig {
                per_page: 60,
                first_page: 1,
            }
        );

        assert_eq!(PagerConfig::from_yaml_str("").unwrap(), PagerConfig::default());
    }

    #[test]
    fn test_from_json_str() {
        let config = PagerConfig::from_json_str(r#"{"first_page": 3}"#).unwrap();
        assert_eq!(config.per_page, 10);
        assert_eq!(config.first_page, 3);
    }

    #[test]
    fn test_rejects_zero_per_page() {
        let err = PagerConfig::from_yaml_str("per_page: 0").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'per_page': must be at least 1"
        );
    }

    #[test]
    fn test_rejects_non_positive_first_page() {
        let err = PagerConfig::from_json_str(r#"{"first_page": 0}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { ref field, .. } if field == "first_page"));
    }

    #[test]
    fn test_with_per_page_override() {
        let config = PagerConfig::default().with_per_page(Some(25));
        assert_eq!(config.per_page, 25);

        let config = PagerConfig::default().with_per_page(None);
        assert_eq!(config.per_page, 10);
    }

    #[test]
    fn test_from_file_by_extension() {
        let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(yaml, "per_page: 5\nfirst_page: 2").unwrap();
        let config = PagerConfig::from_file(yaml.path()).unwrap();
        assert_eq!(config.per_page, 5);
        assert_eq!(config.first_page, 2);

        let mut json = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(json, r#"{{"per_page": 7}}"#).unwrap();
        let config = PagerConfig::from_file(json.path()).unwrap();
        assert_eq!(config.per_page, 7);
    }

    #[test]
    fn test_from_file_missing() {
        let err = PagerConfig::from_file("/no/such/pagekit.yaml").unwrap_err();
        assert!(err
            .to_string()
            .starts_with("Configuration error: Failed to read config file"));
    }
}
