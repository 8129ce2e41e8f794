//! Extraction error type.
//!
//! Malformed report text is never an error: unrecognized lines are absorbed
//! or dropped. Only input that cannot become text, or a header alias that
//! cannot become a pattern, is reported.

use crate::model::SectionKind;
use thiserror::Error;

/// Errors that can occur before extraction starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Invalid report input: {0}")]
    InvalidInput(String),

    #[error("Invalid header alias for {kind}: '{alias}' ({message})")]
    InvalidPattern {
        kind: SectionKind,
        alias: String,
        message: String,
    },
}

impl From<serde_json::Error> for ExtractError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidInput(err.to_string())
    }
}
