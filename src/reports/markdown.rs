//! Markdown report renderer.

use super::escape::{escape_fenced, escape_markdown_inline, escape_markdown_list};
use super::{category_icon, CloudburstBadge, RenderInput, ReportError, ReportFormat, ReportRenderer, RiskBadge};
use crate::model::{ContentItem, Group, SectionKind, SectionValue, VulnerabilitySummary};
use std::fmt::Write;

/// Markdown report renderer
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportRenderer for MarkdownRenderer {
    fn render(&self, input: &RenderInput<'_>) -> Result<String, ReportError> {
        let mut md = String::new();
        let extraction = input.extraction;

        writeln!(md, "# Flood Risk Report")?;
        if let Some(source) = input.source {
            writeln!(md, "\n_Source: {}_", escape_markdown_inline(source))?;
        }

        if let Some(summary) = input.vulnerability {
            write_vulnerability(&mut md, summary)?;
        }

        if !extraction.is_structured() {
            writeln!(md, "\n> No report sections were recognized; showing the raw text.\n")?;
            writeln!(md, "```text\n{}\n```", escape_fenced(extraction.text.trim_end()))?;
            return Ok(md);
        }

        for (kind, value) in extraction.report.iter() {
            write_section(&mut md, kind, value)?;
        }
        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

fn write_vulnerability(md: &mut String, summary: &VulnerabilitySummary) -> std::fmt::Result {
    writeln!(md, "\n## Vulnerability Index\n")?;
    if let Some(place) = summary.display_place() {
        writeln!(md, "- **Location:** {}", escape_markdown_list(&place))?;
    }
    writeln!(md, "- **FVI score:** {:.1} / 100", summary.clamped_score())?;
    let badge = RiskBadge::from_text(&summary.risk_level);
    writeln!(
        md,
        "- **Risk level:** {} {}",
        badge.icon(),
        escape_markdown_list(&summary.risk_level)
    )?;
    if !summary.key_factors.is_empty() {
        writeln!(md, "- **Key factors:**")?;
        for factor in &summary.key_factors {
            writeln!(md, "  - {}", escape_markdown_list(factor))?;
        }
    }
    Ok(())
}

fn write_section(md: &mut String, kind: SectionKind, value: &SectionValue) -> std::fmt::Result {
    match value {
        SectionValue::Scalar(text) => {
            if kind == SectionKind::FloodRisk {
                let badge = RiskBadge::from_text(text);
                writeln!(md, "\n## {} {}\n", badge.icon(), kind.title())?;
                writeln!(md, "**{}**", escape_markdown_inline(text))?;
            } else {
                writeln!(md, "\n## {}\n", kind.title())?;
                writeln!(md, "{}", escape_markdown_inline(text))?;
            }
        }
        SectionValue::ValueWithReasoning { value, reasoning } => {
            let badge = CloudburstBadge::from_text(value);
            writeln!(md, "\n## {} {}\n", badge.icon(), kind.title())?;
            if !value.is_empty() {
                writeln!(
                    md,
                    "**{}**: {}",
                    badge.label(),
                    escape_markdown_inline(value)
                )?;
            }
            if !reasoning.is_empty() {
                writeln!(md, "\n> {}", escape_markdown_inline(reasoning))?;
            }
        }
        SectionValue::Grouped(groups) => {
            writeln!(md, "\n## {}", kind.title())?;
            for group in groups {
                write_group(md, group)?;
            }
        }
    }
    Ok(())
}

fn write_group(md: &mut String, group: &Group) -> std::fmt::Result {
    match group {
        Group::Header {
            category,
            display_text,
        } => {
            writeln!(
                md,
                "\n### {} {}",
                category_icon(*category),
                escape_markdown_inline(display_text)
            )?;
        }
        Group::Items { items, .. } => {
            writeln!(md)?;
            for item in items {
                match item {
                    ContentItem::Bullet {
                        text,
                        bold_label: Some(label),
                    } => writeln!(
                        md,
                        "- **{}:** {}",
                        escape_markdown_list(label),
                        escape_markdown_list(text)
                    )?,
                    other => writeln!(md, "- {}", escape_markdown_list(other.text()))?,
                }
            }
        }
    }
    Ok(())
}
