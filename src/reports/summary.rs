//! Summary renderer for terminal output.
//!
//! Provides a compact, colored view of a parsed report.

use super::{category_icon, CloudburstBadge, RenderInput, ReportError, ReportFormat, ReportRenderer, RiskBadge};
use crate::model::{ContentItem, Group, SectionKind, SectionValue, VulnerabilitySummary};
use unicode_width::UnicodeWidthStr;

const WRAP_WIDTH: usize = 88;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "magenta" => format!("\x1b[35m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Summary renderer for terminal output
pub struct SummaryRenderer {
    /// Use colored output
    colored: bool,
}

impl SummaryRenderer {
    /// Create a new summary renderer
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn vulnerability_lines(&self, summary: &VulnerabilitySummary, lines: &mut Vec<String>) {
        lines.push(self.color("Vulnerability Index", "bold"));
        if let Some(place) = summary.display_place() {
            lines.push(format!("  {}  {place}", self.color("Location:", "cyan")));
        }
        let badge = RiskBadge::from_text(&summary.risk_level);
        lines.push(format!(
            "  {}  {:.1}/100 {}",
            self.color("FVI:", "cyan"),
            summary.clamped_score(),
            self.color(
                &format!("{} {}", badge.icon(), summary.risk_level),
                badge.color().ansi()
            )
        ));
        for factor in &summary.key_factors {
            lines.push(format!("    • {factor}"));
        }
        lines.push(String::new());
    }

    fn section_lines(&self, kind: SectionKind, value: &SectionValue, lines: &mut Vec<String>) {
        match value {
            SectionValue::Scalar(text) if kind == SectionKind::FloodRisk => {
                let badge = RiskBadge::from_text(text);
                lines.push(format!(
                    "{}  {}",
                    self.color(kind.title(), "bold"),
                    self.color(&format!("{} {}", badge.icon(), badge.label()), badge.color().ansi())
                ));
                push_wrapped(lines, text, "  ");
            }
            SectionValue::Scalar(text) => {
                lines.push(self.color(kind.title(), "bold"));
                push_wrapped(lines, text, "  ");
            }
            SectionValue::ValueWithReasoning { value, reasoning } => {
                let badge = CloudburstBadge::from_text(value);
                lines.push(format!(
                    "{}  {}",
                    self.color(kind.title(), "bold"),
                    self.color(&format!("{} {}", badge.icon(), badge.label()), badge.color().ansi())
                ));
                if !value.is_empty() {
                    push_wrapped(lines, value, "  ");
                }
                if !reasoning.is_empty() {
                    lines.push(format!("  {}", self.color("Reasoning:", "dim")));
                    push_wrapped(lines, reasoning, "    ");
                }
            }
            SectionValue::Grouped(groups) => {
                lines.push(self.color(kind.title(), "bold"));
                for group in groups {
                    self.group_lines(group, lines);
                }
            }
        }
        lines.push(String::new());
    }

    fn group_lines(&self, group: &Group, lines: &mut Vec<String>) {
        match group {
            Group::Header {
                category,
                display_text,
            } => lines.push(format!(
                "  {} {}",
                category_icon(*category),
                self.color(display_text, "cyan")
            )),
            Group::Items { items, .. } => {
                for item in items {
                    let text = match item {
                        ContentItem::Bullet {
                            text,
                            bold_label: Some(label),
                        } => format!("{}: {text}", self.color(label, "bold")),
                        other => other.text().to_string(),
                    };
                    lines.push(format!("    • {text}"));
                }
            }
        }
    }
}

impl Default for SummaryRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for SummaryRenderer {
    fn render(&self, input: &RenderInput<'_>) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        let extraction = input.extraction;

        let title = input.source.map_or_else(
            || "Flood Risk Report".to_string(),
            |source| format!("Flood Risk Report: {source}"),
        );
        lines.push(self.color(&title, "bold"));
        lines.push(self.color("─".repeat(title.width().clamp(20, 60)).as_str(), "dim"));

        if let Some(summary) = input.vulnerability {
            self.vulnerability_lines(summary, &mut lines);
        }

        if extraction.is_structured() {
            for (kind, value) in extraction.report.iter() {
                self.section_lines(kind, value, &mut lines);
            }
        } else {
            lines.push(self.color("No report sections recognized; raw text follows.", "yellow"));
            lines.push(String::new());
            lines.extend(extraction.text.lines().map(str::to_string));
            lines.push(String::new());
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

/// Word-wrap `text` at [`WRAP_WIDTH`] display columns, indenting every line.
fn push_wrapped(lines: &mut Vec<String>, text: &str, indent: &str) {
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed + indent.width() > WRAP_WIDTH && !current.is_empty() {
            lines.push(format!("{indent}{current}"));
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(format!("{indent}{current}"));
    }
}
