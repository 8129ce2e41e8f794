//! **Structured extraction for free-text flood and cloudburst risk reports.**
//!
//! `hydroprognosis` turns the markdown-ish reports written by an upstream
//! language model into a typed [`ParsedReport`]: a flood risk level, a
//! cloudburst probability with its reasoning, grouped key factors and
//! recommendations, and the remaining narrative sections. Reports that do not
//! follow the expected layout are never an error; extraction simply yields
//! nothing and callers fall back to the raw text.
//!
//! It powers both a command-line interface (CLI) and a Rust library for
//! programmatic integration.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`SectionKind`], [`ContentItem`], [`SectionValue`] and the
//!   ordered [`ParsedReport`], plus the vulnerability summary carried for display.
//! - **[`parsers`]**: the line classifier, section accumulator and
//!   post-processor behind [`ReportExtractor`].
//! - **[`reports`]**: JSON, Markdown and terminal summary renderers.
//! - **[`pipeline`]**: read → extract → render orchestration used by the CLI.
//! - **[`config`]**: YAML configuration, presets and header aliases.
//!
//! ## Getting Started
//!
//! ```
//! use hydroprognosis::{extract, SectionKind};
//!
//! let text = "\
//! ### 1. **Flood Risk Level**
//! High
//!
//! ### 2. **Cloudburst Probability**
//! Moderate
//! *Reasoning:* heavy rainfall expected
//! ";
//!
//! let report = extract(text).unwrap().unwrap();
//! assert_eq!(report.flood_risk(), Some("High"));
//! assert_eq!(
//!     report.cloudburst_probability(),
//!     Some(("Moderate", "heavy rainfall expected"))
//! );
//! assert!(!report.contains(SectionKind::Recommendations));
//! ```
//!
//! ### Custom Header Aliases
//!
//! ```
//! use hydroprognosis::{AppConfig, RawReport, SectionKind};
//!
//! let config = AppConfig::builder()
//!     .alias(SectionKind::FloodRisk, "Flood Hazard")
//!     .build();
//! let extractor = config.extractor().unwrap();
//! let report = extractor
//!     .extract(&RawReport::from("Flood Hazard: Severe"))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(report.flood_risk(), Some("Severe"));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `hydroprognosis` library crate. The binary
//! exposes `hydroprognosis parse`, `classify` and configuration helpers.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use several bools for flags
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // Renderers keep self for API consistency across trait impls
    clippy::unused_self,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, ExtractionConfig, OutputConfig, ParseConfig, PatternsConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, HydroError, OptionContext, Result};
pub use model::{
    AnalysisResponse, ContentItem, Group, ParsedReport, SectionKind, SectionValue,
    SubsectionCategory, VulnerabilitySummary,
};
pub use parsers::{
    extract, extract_document, DuplicatePolicy, ExtractError, ExtractOptions, Extraction,
    ParseObserver, PatternTable, RawReport, ReportExtractor,
};
pub use reports::{create_renderer, ReportFormat, ReportRenderer};
