//! Classify command handler.
//!
//! Implements the `classify` subcommand, which shows how every line of a
//! report was classified and which section it landed in. Useful when a
//! header alias does not match as expected.

use crate::config::AppConfig;
use crate::parsers::{ParseEvent, RecordingObserver};
use crate::pipeline::{raw_report_from_content, should_use_color, write_output, InputSource, OutputTarget};
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::path::Path;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Run the classify command
pub fn run_classify(path: &Path, app: &AppConfig) -> Result<()> {
    let source = InputSource::from_path(path);
    let content = source.read_to_string()?;
    let (raw, _) = raw_report_from_content(&content)
        .with_context(|| format!("Failed to interpret report: {}", source.label()))?;

    let extractor = app
        .extractor()
        .context("Failed to compile section header patterns")?;
    let mut recorder = RecordingObserver::new();
    let extraction = extractor.extract_with_observer(&raw, &mut recorder)?;

    let target = OutputTarget::Stdout;
    let colored = should_use_color(app.output.no_color) && target.is_terminal();
    let mut out = format_events(recorder.events(), colored);

    let sections = extraction.as_ref().map_or(0, |e| e.report.len());
    let _ = write!(
        out,
        "\n{} sections recognized, {} lines outside any section",
        sections,
        recorder.dropped_count()
    );
    write_output(&out, &target, app.behavior.quiet)
}

/// One row per classified line: line number, label, open section and text.
#[must_use]
pub fn format_events(events: &[ParseEvent], colored: bool) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            ParseEvent::Line {
                line_no,
                text,
                label,
                section,
            } => {
                let label_cell = format!("{label:<9}");
                let label_cell = match *label {
                    "section" => ansi_color(&label_cell, "bold", colored),
                    "marker" => ansi_color(&label_cell, "cyan", colored),
                    "reasoning" => ansi_color(&label_cell, "yellow", colored),
                    "separator" => ansi_color(&label_cell, "dim", colored),
                    _ => label_cell,
                };
                let section_cell = format!("{:<26}", section.map_or("-", |k| k.key()));
                let _ = writeln!(
                    out,
                    "{line_no:>4}  {label_cell} {} {text}",
                    ansi_color(&section_cell, "green", colored)
                );
            }
            ParseEvent::Dropped { line_no, .. } => {
                let _ = writeln!(
                    out,
                    "{}",
                    ansi_color(&format!("{line_no:>4}  (dropped: no open section)"), "dim", colored)
                );
            }
            ParseEvent::Opened(_) | ParseEvent::Committed { .. } => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::{RawReport, ReportExtractor};

    fn events(text: &str) -> Vec<ParseEvent> {
        let mut recorder = RecordingObserver::new();
        ReportExtractor::default()
            .extract_with_observer(&RawReport::from(text), &mut recorder)
            .unwrap();
        recorder.into_events()
    }

    #[test]
    fn test_format_events_plain() {
        let out = format_events(
            &events("Preamble\nFlood Risk Level: High\n- rising river"),
            false,
        );
        assert!(out.contains("(dropped: no open section)"));
        assert!(out.contains("section   flood_risk"));
        assert!(out.contains("bullet    flood_risk"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_format_events_colored() {
        let out = format_events(&events("Flood Risk Level: High"), true);
        assert!(out.contains("\x1b[1m"));
    }
}
