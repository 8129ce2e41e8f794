//! Configuration validation.

use super::types::{AppConfig, OutputConfig, PatternsConfig};
use crate::parsers::PatternTable;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.patterns.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: "Output file path is empty".to_string(),
                });
            }
        }
        errors
    }
}

impl Validatable for PatternsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (kind, phrases) in &self.aliases {
            for phrase in phrases {
                if phrase.trim().is_empty() {
                    errors.push(ConfigError {
                        field: format!("patterns.aliases.{}", kind.key()),
                        message: "Alias must not be empty".to_string(),
                    });
                }
            }
        }
        if errors.is_empty() {
            if let Err(e) = PatternTable::with_aliases(&self.aliases) {
                errors.push(ConfigError {
                    field: "patterns.aliases".to_string(),
                    message: e.to_string(),
                });
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionKind;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_empty_alias_is_reported() {
        let config = AppConfig::builder()
            .alias(SectionKind::Recommendations, "  ")
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "patterns.aliases.recommendations");
    }

    #[test]
    fn test_empty_output_path_is_reported() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::new()))
            .build();
        assert_eq!(config.validate()[0].field, "output.file");
    }

    #[test]
    fn test_alias_with_punctuation_is_valid() {
        let config = AppConfig::builder()
            .alias(SectionKind::FuturePrediction, "Outlook (next 3 days)")
            .build();
        assert!(config.is_valid());
    }
}
