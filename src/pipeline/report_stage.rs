//! Report output stage.
//!
//! Renders parsed inputs in the configured format and writes them to the
//! configured destination.

use crate::config::AppConfig;
use crate::model::VulnerabilitySummary;
use crate::reports::{create_renderer, RenderInput};
use anyhow::{Context, Result};

use super::{auto_detect_format, should_use_color, write_output, OutputTarget, ParsedInput};

/// Render every parsed input into one document.
///
/// Color is only used when writing to a terminal.
pub fn render_reports(
    config: &AppConfig,
    inputs: &[ParsedInput],
    vulnerability: Option<&VulnerabilitySummary>,
    target: &OutputTarget,
) -> Result<String> {
    let format = auto_detect_format(config.output.format, target);
    let use_color = should_use_color(config.output.no_color) && target.is_terminal();
    tracing::debug!(%format, use_color, reports = inputs.len(), "Rendering reports");

    let renderer = create_renderer(format, use_color, config.output.include_raw);
    let render_inputs: Vec<RenderInput<'_>> = inputs
        .iter()
        .map(|input| input.render_input(vulnerability))
        .collect();
    renderer
        .render_many(&render_inputs)
        .with_context(|| format!("Failed to render {format} report"))
}

/// Render parsed inputs and write them to the configured destination.
pub fn output_reports(
    config: &AppConfig,
    inputs: &[ParsedInput],
    vulnerability: Option<&VulnerabilitySummary>,
) -> Result<()> {
    let target = OutputTarget::from_option(config.output.file.clone());
    let report = render_reports(config, inputs, vulnerability, &target)?;
    write_output(&report, &target, config.behavior.quiet)
}
