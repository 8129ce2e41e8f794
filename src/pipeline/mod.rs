//! Pipeline orchestration for report operations.
//!
//! This module provides shared orchestration logic for read → extract → render
//! workflows, keeping the CLI command handlers thin.

mod output;
mod parse;
mod report_stage;

pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use parse::{
    load_vulnerability, parse_input, parse_inputs, raw_report_from_content, InputSource,
    ParsedInput, STDIN_MARKER,
};
pub use report_stage::{output_reports, render_reports};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - every report had recognizable sections (or no --fail-on-unstructured)
    pub const SUCCESS: i32 = 0;
    /// At least one report had no recognizable sections
    pub const UNSTRUCTURED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

/// Exit code for a batch of parsed inputs.
#[must_use]
pub fn exit_code_for(inputs: &[ParsedInput], fail_on_unstructured: bool) -> i32 {
    if fail_on_unstructured && inputs.iter().any(|input| !input.is_structured()) {
        exit_codes::UNSTRUCTURED
    } else {
        exit_codes::SUCCESS
    }
}
