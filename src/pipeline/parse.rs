//! Report input stage.
//!
//! Reads report files or stdin, unwraps upstream `/analysis` envelopes and
//! runs extraction on each input.

use crate::error::{ErrorContext, HydroError, OptionContext};
use crate::model::{AnalysisResponse, ParsedReport, VulnerabilitySummary};
use crate::parsers::{Extraction, RawReport, ReportExtractor};
use crate::reports::RenderInput;
use anyhow::Result;
use rayon::prelude::*;
use serde_json::Value;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Path argument that stands for standard input.
pub const STDIN_MARKER: &str = "-";

/// Where a report is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == STDIN_MARKER {
            Self::Stdin
        } else {
            Self::File(path.to_path_buf())
        }
    }

    /// Label used in logs and rendered output.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Stdin => "stdin".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }

    /// Read the whole input as UTF-8 text.
    pub fn read_to_string(&self) -> crate::Result<String> {
        match self {
            Self::Stdin => {
                let mut content = String::new();
                std::io::stdin()
                    .read_to_string(&mut content)
                    .context("Failed to read report from stdin")?;
                Ok(content)
            }
            Self::File(path) => std::fs::read_to_string(path)
                .map_err(|e| HydroError::io(path, e))
                .with_context(|| format!("Failed to read report file: {}", path.display())),
        }
    }
}

/// One input after extraction.
#[derive(Debug, Clone)]
pub struct ParsedInput {
    /// Source label (path or `stdin`)
    pub source: String,
    pub extraction: Extraction,
    /// Retrieval context carried by an `/analysis` envelope
    pub rag_context: Option<String>,
}

impl ParsedInput {
    #[must_use]
    pub fn is_structured(&self) -> bool {
        self.extraction.is_structured()
    }

    /// Borrow as renderer input.
    #[must_use]
    pub fn render_input<'a>(
        &'a self,
        vulnerability: Option<&'a VulnerabilitySummary>,
    ) -> RenderInput<'a> {
        RenderInput::new(&self.extraction)
            .with_source(Some(self.source.as_str()))
            .with_vulnerability(vulnerability)
    }
}

/// Interpret file content as a raw report.
///
/// JSON content is recognized first: an `/analysis` envelope contributes its
/// `analysis` text, an error envelope becomes [`HydroError::Upstream`], and
/// any other JSON value is kept as a structured report. Everything else is
/// free text.
pub fn raw_report_from_content(
    content: &str,
) -> crate::Result<(RawReport, Option<String>)> {
    let trimmed = content.trim_start();
    if !(trimmed.starts_with('{') || trimmed.starts_with('[')) {
        return Ok((RawReport::from(content), None));
    }
    let Ok(value) = serde_json::from_str::<Value>(content) else {
        return Ok((RawReport::from(content), None));
    };

    match AnalysisResponse::from_value(&value) {
        Some(envelope) if envelope.is_error() => Err(HydroError::upstream(
            envelope
                .error
                .unwrap_or_else(|| "analysis endpoint reported an error".to_string()),
        )),
        Some(envelope) => {
            let analysis = envelope
                .analysis
                .context_none("analysis response carries no report text")?;
            Ok((RawReport::Text(analysis), envelope.rag_context))
        }
        None => Ok((RawReport::Structured(value), None)),
    }
}

/// Read and extract a single input.
pub fn parse_input(
    source: &InputSource,
    extractor: &ReportExtractor,
    quiet: bool,
) -> Result<ParsedInput> {
    let label = source.label();
    if !quiet {
        tracing::info!("Parsing report: {label}");
    }

    let content = source.read_to_string()?;
    let (raw, rag_context) = raw_report_from_content(&content)
        .with_context(|| format!("Failed to interpret report: {label}"))?;
    let extraction = extractor
        .extract_document(&raw)
        .map_err(|e| HydroError::extract(label.clone(), e))?
        .unwrap_or_else(|| Extraction {
            report: ParsedReport::new(),
            text: String::new(),
        });

    if extraction.is_structured() {
        if !quiet {
            tracing::info!("Recognized {} sections in {label}", extraction.report.len());
        }
    } else {
        tracing::warn!("No report sections recognized in {label}");
    }

    Ok(ParsedInput {
        source: label,
        extraction,
        rag_context,
    })
}

/// Read and extract every input in parallel, preserving input order.
pub fn parse_inputs(
    paths: &[PathBuf],
    extractor: &ReportExtractor,
    quiet: bool,
) -> Result<Vec<ParsedInput>> {
    let stdin_count = paths
        .iter()
        .filter(|p| p.as_os_str() == STDIN_MARKER)
        .count();
    if stdin_count > 1 {
        return Err(HydroError::validation("stdin ('-') can only be given once").into());
    }

    paths
        .par_iter()
        .map(|path| parse_input(&InputSource::from_path(path), extractor, quiet))
        .collect()
}

/// Load a vulnerability summary JSON file.
pub fn load_vulnerability(path: &Path) -> Result<VulnerabilitySummary> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| HydroError::io(path, e))
        .with_context(|| format!("Failed to read vulnerability summary: {}", path.display()))?;
    let summary: VulnerabilitySummary = serde_json::from_str(&content).map_err(|e| {
        HydroError::validation(format!(
            "Invalid vulnerability summary {}: {e}",
            path.display()
        ))
    })?;
    tracing::debug!(
        fvi_score = summary.fvi_score,
        risk_level = %summary.risk_level,
        "Loaded vulnerability summary"
    );
    Ok(summary)
}
