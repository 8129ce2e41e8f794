//! Configuration types for hydroprognosis.

use crate::model::SectionKind;
use crate::parsers::{DuplicatePolicy, ExtractError, ExtractOptions, PatternTable, ReportExtractor};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Extraction behavior
    pub extraction: ExtractionConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Extra section header aliases
    pub patterns: PatternsConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Compile the header pattern table, built-ins plus configured aliases.
    pub fn pattern_table(&self) -> Result<PatternTable, ExtractError> {
        if self.patterns.aliases.is_empty() {
            return Ok(PatternTable::default());
        }
        PatternTable::with_aliases(&self.patterns.aliases)
    }

    /// Build an extractor for this configuration.
    pub fn extractor(&self) -> Result<ReportExtractor, ExtractError> {
        Ok(ReportExtractor::new(
            self.pattern_table()?,
            self.extraction.to_options(),
        ))
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Set the duplicate header policy.
    pub const fn duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.config.extraction.duplicates = policy;
        self
    }

    /// Exit non-zero when a report has no recognizable sections.
    pub const fn fail_on_unstructured(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_unstructured = fail;
        self
    }

    /// Suppress non-essential output.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Add a header alias for a section.
    pub fn alias(mut self, kind: SectionKind, phrase: impl Into<String>) -> Self {
        self.config
            .patterns
            .aliases
            .entry(kind)
            .or_default()
            .push(phrase.into());
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Output configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Include the raw normalized text in JSON output
    pub include_raw: bool,
}

/// Extraction configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ExtractionConfig {
    /// How a repeated section header is handled
    pub duplicates: DuplicatePolicy,
}

impl ExtractionConfig {
    #[must_use]
    pub const fn to_options(&self) -> ExtractOptions {
        ExtractOptions {
            duplicates: self.duplicates,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 when a report has no recognizable sections
    pub fail_on_unstructured: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// User-supplied section header aliases.
///
/// Keys are section keys (`flood_risk`, `key_factors`, ...); values are
/// plain header phrases matched case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PatternsConfig {
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<SectionKind, Vec<String>>,
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the parse command.
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    /// Report files to parse (`-` reads stdin)
    pub inputs: Vec<PathBuf>,
    /// Vulnerability summary JSON shown alongside each report
    pub vulnerability: Option<PathBuf>,
    /// Effective application configuration
    pub app: AppConfig,
}

impl ParseConfig {
    #[must_use]
    pub fn new(inputs: Vec<PathBuf>, app: AppConfig) -> Self {
        Self {
            inputs,
            vulnerability: None,
            app,
        }
    }

    #[must_use]
    pub fn with_vulnerability(mut self, path: Option<PathBuf>) -> Self {
        self.vulnerability = path;
        self
    }
}
