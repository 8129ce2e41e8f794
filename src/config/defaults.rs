//! Named configuration presets.

use super::types::{AppConfig, BehaviorConfig, ExtractionConfig, OutputConfig, PatternsConfig};
use crate::parsers::DuplicatePolicy;
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Overwrite duplicates, auto output, never fail on unstructured reports
    Default,
    /// JSON output, fail when a report has no recognizable sections
    Strict,
    /// Merge repeated sections instead of replacing them
    Lenient,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "strict" | "ci" => Some(Self::Strict),
            "lenient" | "permissive" => Some(Self::Lenient),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Best-effort extraction with terminal-friendly output",
            Self::Strict => "Machine-readable output that fails on unstructured reports",
            Self::Lenient => "Repeated section headers are merged into one section",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Strict, Self::Lenient]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Strict => Self::strict_preset(),
            ConfigPreset::Lenient => Self::lenient_preset(),
        }
    }

    /// Strict preset for pipelines.
    ///
    /// - JSON output without colors
    /// - Exit code 1 when nothing was recognized
    #[must_use]
    pub fn strict_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
                include_raw: true,
            },
            extraction: ExtractionConfig::default(),
            behavior: BehaviorConfig {
                fail_on_unstructured: true,
                quiet: true,
            },
            patterns: PatternsConfig::default(),
        }
    }

    /// Lenient preset for reports that repeat headers.
    #[must_use]
    pub fn lenient_preset() -> Self {
        Self {
            extraction: ExtractionConfig {
                duplicates: DuplicatePolicy::Append,
            },
            ..Self::default()
        }
    }
}
