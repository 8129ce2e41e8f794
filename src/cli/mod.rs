//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand.

mod classify;
mod parse;

pub use classify::{format_events, run_classify};
pub use parse::run_parse;

// Re-export config types used by handlers
pub use crate::config::{AppConfig, ParseConfig};
