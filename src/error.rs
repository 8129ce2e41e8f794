//! Unified error types for hydroprognosis.
//!
//! Extraction itself never fails on malformed text; these errors cover
//! input that cannot be read, configuration that cannot be used, and
//! upstream responses that report a failure.

use crate::parsers::ExtractError;
use crate::reports::ReportError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for hydroprognosis operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HydroError {
    /// Input could not be turned into report text
    #[error("Extraction failed: {context}")]
    Extract {
        context: String,
        #[source]
        source: ExtractError,
    },

    /// Rendering or writing a report failed
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportError,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// The upstream report generator returned an error envelope
    #[error("Upstream analysis failed: {0}")]
    Upstream(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for hydroprognosis operations
pub type Result<T> = std::result::Result<T, HydroError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl HydroError {
    /// Create an extraction error with context
    pub fn extract(context: impl Into<String>, source: ExtractError) -> Self {
        Self::Extract {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportError) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: Some(path.into()),
            message: source.to_string(),
            source,
        }
    }

    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for HydroError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<ExtractError> for HydroError {
    fn from(err: ExtractError) -> Self {
        Self::extract("", err)
    }
}

impl From<ReportError> for HydroError {
    fn from(err: ReportError) -> Self {
        Self::report("", err)
    }
}

impl From<serde_json::Error> for HydroError {
    fn from(err: serde_json::Error) -> Self {
        Self::extract("JSON deserialization", ExtractError::from(err))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings are chained outermost first, so a failure reads like
/// `reading report.txt: parsing envelope: <cause>`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<HydroError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: HydroError, new_ctx: &str) -> HydroError {
    match err {
        HydroError::Extract {
            context: existing,
            source,
        } => HydroError::Extract {
            context: chain_context(new_ctx, &existing),
            source,
        },
        HydroError::Report {
            context: existing,
            source,
        } => HydroError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        HydroError::Io {
            path,
            message,
            source,
        } => HydroError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        HydroError::Upstream(msg) => HydroError::Upstream(chain_context(new_ctx, &msg)),
        HydroError::Config(msg) => HydroError::Config(chain_context(new_ctx, &msg)),
        HydroError::Validation(msg) => HydroError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to an error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;

    /// Convert None to an error with context from a closure.
    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| HydroError::Validation(context.into()))
    }

    fn with_context_none<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.ok_or_else(|| HydroError::Validation(f().into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HydroError::upstream("model timeout");
        assert_eq!(err.to_string(), "Upstream analysis failed: model timeout");

        let err = HydroError::extract(
            "report.json",
            ExtractError::InvalidInput("key must be a string".into()),
        );
        assert!(err.to_string().contains("report.json"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = HydroError::io("/reports/today.txt", io_err);
        assert!(err.to_string().contains("/reports/today.txt"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(HydroError::extract(
                "base",
                ExtractError::InvalidInput("bad".into()),
            ))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(HydroError::Extract { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Extract error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_extract_error_has_empty_context() {
        let result: Result<()> =
            Err(ExtractError::InvalidInput("bad".into())).context("reading stdin");
        match result {
            Err(HydroError::Extract { context, .. }) => assert_eq!(context, "reading stdin"),
            other => panic!("Expected Extract error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called);

        let err_result: Result<i32> = Err(HydroError::validation("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called);
    }

    #[test]
    fn test_option_context() {
        assert_eq!(Some(42).context_none("missing value").unwrap(), 42);
        match None::<i32>.context_none("missing value") {
            Err(HydroError::Validation(msg)) => assert_eq!(msg, "missing value"),
            other => panic!("Expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("outer", "middle: inner"), "outer: middle: inner");
    }
}
