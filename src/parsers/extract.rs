//! Report extraction entry point.
//!
//! Raw input is normalized to text, fed line by line through a
//! [`SectionAccumulator`], and returned as a [`ParsedReport`]. An input with
//! no recognizable section yields `None` rather than an error.

use super::accumulator::SectionAccumulator;
use super::classifier::LineClassifier;
use super::error::ExtractError;
use super::observer::{NoopObserver, ParseObserver};
use super::patterns::PatternTable;
use super::text::normalize_line_endings;
use crate::model::ParsedReport;
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Raw input
// ============================================================================

/// Report as delivered by the upstream generator.
#[derive(Debug, Clone, PartialEq)]
pub enum RawReport {
    /// Free text, possibly markdown
    Text(String),
    /// Structured payload that is rendered to text before parsing
    Structured(Value),
}

impl RawReport {
    /// Convert any serializable value into a structured report.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> Result<Self, ExtractError> {
        Ok(Self::Structured(serde_json::to_value(value)?))
    }

    /// Normalize to the text the line pipeline consumes.
    ///
    /// Returns `None` for empty text and `null`.
    pub fn normalize(&self) -> Result<Option<String>, ExtractError> {
        let text = match self {
            Self::Text(text) => text.clone(),
            Self::Structured(Value::Null) => return Ok(None),
            Self::Structured(Value::String(text)) => text.clone(),
            Self::Structured(other) => serde_json::to_string_pretty(other)?,
        };
        Ok((!text.trim().is_empty()).then_some(text))
    }
}

impl From<&str> for RawReport {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawReport {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Value> for RawReport {
    fn from(value: Value) -> Self {
        Self::Structured(value)
    }
}

// ============================================================================
// Options
// ============================================================================

/// How a section header seen a second time is handled.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Later value replaces the earlier one, keeping its position
    #[default]
    Overwrite,
    /// Later items are appended and the section is processed again
    Append,
}

impl std::fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overwrite => write!(f, "overwrite"),
            Self::Append => write!(f, "append"),
        }
    }
}

/// Extraction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    pub duplicates: DuplicatePolicy,
}

// ============================================================================
// Extractor
// ============================================================================

/// Result of a successful extraction, with the text it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub report: ParsedReport,
    pub text: String,
}

impl Extraction {
    /// Whether any section was recognized.
    #[must_use]
    pub fn is_structured(&self) -> bool {
        !self.report.is_empty()
    }

    /// The raw text to display when nothing was recognized.
    #[must_use]
    pub fn fallback_text(&self) -> Option<&str> {
        (!self.is_structured()).then_some(self.text.as_str())
    }
}

/// Configured extraction engine.
#[derive(Debug, Clone, Default)]
pub struct ReportExtractor {
    patterns: PatternTable,
    options: ExtractOptions,
}

impl ReportExtractor {
    #[must_use]
    pub const fn new(patterns: PatternTable, options: ExtractOptions) -> Self {
        Self { patterns, options }
    }

    #[must_use]
    pub const fn patterns(&self) -> &PatternTable {
        &self.patterns
    }

    #[must_use]
    pub const fn options(&self) -> ExtractOptions {
        self.options
    }

    /// Extract sections; `None` when the input is empty or unstructured.
    pub fn extract(&self, raw: &RawReport) -> Result<Option<ParsedReport>, ExtractError> {
        Ok(self
            .extract_document(raw)?
            .map(|doc| doc.report)
            .filter(|report| !report.is_empty()))
    }

    /// Extract sections while keeping the normalized text.
    ///
    /// Returns `None` only for empty input. An unstructured input yields an
    /// [`Extraction`] with an empty report so the caller can fall back to
    /// [`Extraction::fallback_text`].
    pub fn extract_document(&self, raw: &RawReport) -> Result<Option<Extraction>, ExtractError> {
        self.extract_with_observer(raw, NoopObserver)
    }

    /// Like [`Self::extract_document`], reporting progress to `observer`.
    pub fn extract_with_observer<O: ParseObserver>(
        &self,
        raw: &RawReport,
        observer: O,
    ) -> Result<Option<Extraction>, ExtractError> {
        let Some(text) = raw.normalize()? else {
            tracing::debug!("Empty report input");
            return Ok(None);
        };
        let report = self.extract_text(&text, observer);
        Ok(Some(Extraction { report, text }))
    }

    fn extract_text<O: ParseObserver>(&self, text: &str, observer: O) -> ParsedReport {
        let mut accumulator = SectionAccumulator::new(
            LineClassifier::new(&self.patterns),
            self.options.duplicates,
            observer,
        );
        for line in normalize_line_endings(text).lines() {
            accumulator.push_line(line);
        }
        let report = accumulator.finish();
        tracing::debug!(sections = report.len(), "Extraction finished");
        report
    }
}

/// Extract with the built-in patterns and default options.
pub fn extract(raw: impl Into<RawReport>) -> Result<Option<ParsedReport>, ExtractError> {
    ReportExtractor::default().extract(&raw.into())
}

/// Extract with the built-in patterns, keeping the normalized text.
pub fn extract_document(raw: impl Into<RawReport>) -> Result<Option<Extraction>, ExtractError> {
    ReportExtractor::default().extract_document(&raw.into())
}
