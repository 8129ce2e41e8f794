//! JSON report renderer.

use super::{CloudburstBadge, RenderInput, ReportError, ReportFormat, ReportRenderer, RiskBadge};
use crate::model::{ParsedReport, VulnerabilitySummary};
use chrono::Utc;
use serde::Serialize;

/// JSON report renderer
pub struct JsonRenderer {
    /// Pretty print output
    pretty: bool,
    /// Always include the normalized report text
    include_raw: bool,
}

impl JsonRenderer {
    /// Create a new JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pretty: true,
            include_raw: false,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Include the normalized text even for structured reports
    #[must_use]
    pub const fn include_raw(mut self, include_raw: bool) -> Self {
        self.include_raw = include_raw;
        self
    }

    fn build<'a>(&self, input: &RenderInput<'a>, generated_at: &str) -> JsonReport<'a> {
        let extraction = input.extraction;
        let structured = extraction.is_structured();
        JsonReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: generated_at.to_string(),
                source: input.source.map(str::to_string),
                section_count: extraction.report.len(),
            },
            status: if structured {
                ParseStatus::Structured
            } else {
                ParseStatus::Unstructured
            },
            badges: structured.then(|| Badges::from_report(&extraction.report)),
            sections: &extraction.report,
            vulnerability: input.vulnerability,
            raw_text: (self.include_raw || !structured).then_some(extraction.text.as_str()),
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }?;
        Ok(json)
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonRenderer {
    fn render(&self, input: &RenderInput<'_>) -> Result<String, ReportError> {
        let generated_at = Utc::now().to_rfc3339();
        self.to_json(&self.build(input, &generated_at))
    }

    /// Several reports become one JSON array.
    fn render_many(&self, inputs: &[RenderInput<'_>]) -> Result<String, ReportError> {
        if let [single] = inputs {
            return self.render(single);
        }
        let generated_at = Utc::now().to_rfc3339();
        let reports: Vec<_> = inputs
            .iter()
            .map(|input| self.build(input, &generated_at))
            .collect();
        self.to_json(&reports)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON report structures

#[derive(Serialize)]
struct JsonReport<'a> {
    metadata: JsonReportMetadata,
    status: ParseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    badges: Option<Badges>,
    sections: &'a ParsedReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    vulnerability: Option<&'a VulnerabilitySummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw_text: Option<&'a str>,
}

#[derive(Serialize)]
#[serde(rename_all = "lowercase")]
enum ParseStatus {
    Structured,
    Unstructured,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    source: Option<String>,
    section_count: usize,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct Badges {
    #[serde(skip_serializing_if = "Option::is_none")]
    flood_risk: Option<RiskBadge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cloudburst: Option<CloudburstBadge>,
}

impl Badges {
    fn from_report(report: &ParsedReport) -> Self {
        Self {
            flood_risk: report.flood_risk().map(RiskBadge::from_text),
            cloudburst: report
                .cloudburst_probability()
                .map(|(value, _)| CloudburstBadge::from_text(value)),
        }
    }
}
