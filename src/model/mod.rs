//! Data model for structured risk reports.
//!
//! A raw report is classified into [`ContentItem`]s, which are folded per
//! [`SectionKind`] into a [`SectionValue`]. The resulting [`ParsedReport`]
//! keeps sections in order of first appearance.
//!
//! [`VulnerabilitySummary`] and [`AnalysisResponse`] describe data owned by
//! the upstream services and are only carried for display.

mod content;
mod report;
mod section;
mod vulnerability;

pub use content::*;
pub use report::*;
pub use section::*;
pub use vulnerability::*;
