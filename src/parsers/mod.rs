//! Risk report parsing.
//!
//! Extraction is a single pass over the report's lines:
//!
//! - [`LineClassifier`] decides what each line is, consulting a
//!   [`PatternTable`] of section header expressions
//! - [`SectionAccumulator`] tracks the open section and buffers its items
//! - [`postprocess::process`] folds each flushed buffer into a
//!   [`SectionValue`](crate::model::SectionValue)
//! - [`ReportExtractor`] normalizes input and drives the pass
//!
//! ## Usage
//!
//! ```
//! use hydroprognosis::parsers::extract;
//!
//! let report = extract("### 1. **Flood Risk Level**\nHigh").unwrap().unwrap();
//! assert_eq!(report.flood_risk(), Some("High"));
//! ```

mod accumulator;
mod classifier;
mod error;
mod extract;
mod observer;
mod patterns;
pub mod postprocess;
mod text;

pub use accumulator::SectionAccumulator;
pub use classifier::{Classification, LineClassifier};
pub use error::ExtractError;
pub use extract::{
    extract, extract_document, DuplicatePolicy, ExtractOptions, Extraction, RawReport,
    ReportExtractor,
};
pub use observer::{NoopObserver, ParseEvent, ParseObserver, RecordingObserver, TracingObserver};
pub use patterns::{HeaderMatch, PatternTable};
pub use text::strip_emphasis;
