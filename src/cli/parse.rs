//! Parse command handler.
//!
//! Implements the `parse` subcommand: extract every input report and render
//! the results in one document.

use crate::config::{ParseConfig, Validatable};
use crate::error::HydroError;
use crate::pipeline::{exit_code_for, load_vulnerability, output_reports, parse_inputs};
use anyhow::{bail, Context, Result};

/// Run the parse command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_parse(config: ParseConfig) -> Result<i32> {
    if config.inputs.is_empty() {
        bail!("No report files specified. Usage: hydroprognosis parse FILE... (use '-' for stdin)");
    }

    let errors = config.app.validate();
    if !errors.is_empty() {
        let listing = errors
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(HydroError::config(listing).into());
    }

    let extractor = config
        .app
        .extractor()
        .context("Failed to compile section header patterns")?;
    let quiet = config.app.behavior.quiet;

    let vulnerability = config
        .vulnerability
        .as_deref()
        .map(load_vulnerability)
        .transpose()?;

    let inputs = parse_inputs(&config.inputs, &extractor, quiet)?;
    let unstructured = inputs.iter().filter(|i| !i.is_structured()).count();
    if !quiet && inputs.len() > 1 {
        tracing::info!(
            "Parsed {} reports ({} without recognizable sections)",
            inputs.len(),
            unstructured
        );
    }

    output_reports(&config.app, &inputs, vulnerability.as_ref())?;

    Ok(exit_code_for(
        &inputs,
        config.app.behavior.fail_on_unstructured,
    ))
}
