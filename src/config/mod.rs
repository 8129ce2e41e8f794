//! Configuration for hydroprognosis.
//!
//! - Type-safe configuration structures with a builder
//! - Validation for configuration values
//! - Named presets
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.hydroprognosis.yaml` file in your project root or
//! `~/.config/hydroprognosis/`:
//!
//! ```yaml
//! output:
//!   format: json
//! extraction:
//!   duplicates: append
//! patterns:
//!   aliases:
//!     flood_risk:
//!       - Flood Hazard
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ExtractionConfig, OutputConfig, ParseConfig,
    PatternsConfig,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Editors can use it to validate and complete `.hydroprognosis.yaml` files.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
