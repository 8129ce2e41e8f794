//! Rendering of parsed risk reports.
//!
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//! - Summary: colored terminal output
//!
//! Every renderer falls back to the normalized report text when no section
//! was recognized, so an unstructured report is still shown in full.
//!
//! # Security
//!
//! Report text comes from an upstream language model. The `escape` module
//! neutralizes Markdown syntax before text is embedded in Markdown output.

mod badge;
pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use badge::{category_icon, BadgeColor, CloudburstBadge, RiskBadge};
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use summary::SummaryRenderer;
pub use types::ReportFormat;

use crate::model::VulnerabilitySummary;
use crate::parsers::Extraction;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report rendering
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Everything a renderer needs for one report.
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub extraction: &'a Extraction,
    pub vulnerability: Option<&'a VulnerabilitySummary>,
    /// Where the report came from (file path or `stdin`)
    pub source: Option<&'a str>,
}

impl<'a> RenderInput<'a> {
    #[must_use]
    pub const fn new(extraction: &'a Extraction) -> Self {
        Self {
            extraction,
            vulnerability: None,
            source: None,
        }
    }

    #[must_use]
    pub const fn with_vulnerability(mut self, summary: Option<&'a VulnerabilitySummary>) -> Self {
        self.vulnerability = summary;
        self
    }

    #[must_use]
    pub const fn with_source(mut self, source: Option<&'a str>) -> Self {
        self.source = source;
        self
    }
}

/// Trait for report renderers
pub trait ReportRenderer {
    /// Render a single report.
    fn render(&self, input: &RenderInput<'_>) -> Result<String, ReportError>;

    /// Render several reports into one document.
    fn render_many(&self, inputs: &[RenderInput<'_>]) -> Result<String, ReportError> {
        let rendered = inputs
            .iter()
            .map(|input| self.render(input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join("\n"))
    }

    /// Write rendered reports to a writer.
    fn write_to(
        &self,
        inputs: &[RenderInput<'_>],
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.render_many(inputs)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this renderer produces
    fn format(&self) -> ReportFormat;
}

/// Create a renderer for the given format.
///
/// `Auto` must already be resolved; it falls back to the summary renderer.
#[must_use]
pub fn create_renderer(
    format: ReportFormat,
    use_color: bool,
    include_raw: bool,
) -> Box<dyn ReportRenderer + Send + Sync> {
    match format {
        ReportFormat::Json => Box::new(JsonRenderer::new().include_raw(include_raw)),
        ReportFormat::Markdown => Box::new(MarkdownRenderer::new()),
        ReportFormat::Auto | ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryRenderer::new())
            } else {
                Box::new(SummaryRenderer::new().no_color())
            }
        }
    }
}
