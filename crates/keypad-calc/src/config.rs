//! Calculator configuration
//!
//! Loaded from JSON or YAML, chosen by file extension.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{DisplayStyle, StyleSpec};

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON did not parse
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML did not parse
    #[error("Invalid YAML config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// Parsed values are out of range
    #[error("Invalid config: {message}")]
    Invalid {
        /// What is wrong
        message: String,
    },
}

impl ConfigError {
    /// Create an invalid-value error
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Longest literal the display buffer accepts
    pub max_digits: usize,
    /// Fractional digits kept in results
    pub result_precision: u32,
    /// Look of regular output
    pub normal_style: StyleSpec,
    /// Look of error messages
    pub error_style: StyleSpec,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_digits: Self::DEFAULT_MAX_DIGITS,
            result_precision: Self::DEFAULT_RESULT_PRECISION,
            normal_style: StyleSpec::normal(),
            error_style: StyleSpec::error(),
        }
    }
}

impl CalculatorConfig {
    /// Default buffer length limit
    pub const DEFAULT_MAX_DIGITS: usize = 10;
    /// Default result precision
    pub const DEFAULT_RESULT_PRECISION: u32 = 4;
    /// Precision above which rounding stops being meaningful for `f64`
    pub const MAX_RESULT_PRECISION: u32 = 15;

    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the buffer length limit
    #[must_use]
    pub const fn with_max_digits(mut self, max_digits: usize) -> Self {
        self.max_digits = max_digits;
        self
    }

    /// Set the result precision
    #[must_use]
    pub const fn with_result_precision(mut self, precision: u32) -> Self {
        self.result_precision = precision;
        self
    }

    /// Returns the concrete look of a display preset
    #[must_use]
    pub fn style(&self, style: DisplayStyle) -> &StyleSpec {
        match style {
            DisplayStyle::Normal => &self.normal_style,
            DisplayStyle::Error => &self.error_style,
        }
    }

    /// Checks value ranges
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_digits == 0 {
            return Err(ConfigError::invalid("max_digits must be at least 1"));
        }
        if self.result_precision > Self::MAX_RESULT_PRECISION {
            return Err(ConfigError::invalid(format!(
                "result_precision must be at most {}",
                Self::MAX_RESULT_PRECISION
            )));
        }
        Ok(())
    }

    /// Parses JSON and validates
    pub fn from_json(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses YAML and validates
    pub fn from_yaml(text: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml_ng::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("yaml" | "yml") => Self::from_yaml(&text),
            other => Err(ConfigError::invalid(format!(
                "unsupported config extension: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = CalculatorConfig::default();
        assert_eq!(config.max_digits, 10);
        assert_eq!(config.result_precision, 4);
        assert_eq!(config.style(DisplayStyle::Normal), &StyleSpec::normal());
        assert_eq!(config.style(DisplayStyle::Error), &StyleSpec::error());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = CalculatorConfig::new()
            .with_max_digits(6)
            .with_result_precision(2);
        assert_eq!(config.max_digits, 6);
        assert_eq!(config.result_precision, 2);
    }

    #[test]
    fn test_zero_max_digits_rejected() {
        let config = CalculatorConfig::new().with_max_digits(0);
        assert!(matches!(config.validate(), Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_excessive_precision_rejected() {
        let config = CalculatorConfig::new().with_result_precision(40);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = CalculatorConfig::from_json(r#"{"max_digits": 8}"#).unwrap();
        assert_eq!(config.max_digits, 8);
        assert_eq!(config.result_precision, 4);
        assert_eq!(config.normal_style, StyleSpec::normal());
    }

    #[test]
    fn test_yaml_styles() {
        let yaml = "error_style:\n  color: orange\n  font_size: 30px\n";
        let config = CalculatorConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.error_style, StyleSpec::new("orange", "30px"));
        assert_eq!(config.max_digits, 10);
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            CalculatorConfig::from_json("{not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = CalculatorConfig::new().with_max_digits(12);
        let text = serde_json::to_string(&config).unwrap();
        assert_eq!(CalculatorConfig::from_json(&text).unwrap(), config);
    }

    #[test]
    fn test_load_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("calc.json");
        std::fs::File::create(&json_path)
            .unwrap()
            .write_all(br#"{"result_precision": 2}"#)
            .unwrap();
        assert_eq!(
            CalculatorConfig::load(&json_path).unwrap().result_precision,
            2
        );

        let yaml_path = dir.path().join("calc.yml");
        std::fs::write(&yaml_path, "max_digits: 5\n").unwrap();
        assert_eq!(CalculatorConfig::load(&yaml_path).unwrap().max_digits, 5);

        let toml_path = dir.path().join("calc.toml");
        std::fs::write(&toml_path, "max_digits = 5\n").unwrap();
        assert!(matches!(
            CalculatorConfig::load(&toml_path),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            CalculatorConfig::load(&missing),
            Err(ConfigError::Io(_))
        ));
    }
}
