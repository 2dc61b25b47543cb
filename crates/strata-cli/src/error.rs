//! Error handling for the Strata CLI.
//!
//! Provides structured errors with user-facing messages, actionable
//! suggestions, and exit-code mapping.

use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

use strata_core::error::{CatalogueError, ErrorCategory as CoreCategory};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input (validation failed).
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A template file given on the command line could not be read.
    #[error("Cannot read template file {path}")]
    TemplateUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error propagated from the catalogue crates.
    ///
    /// Wrapped here so that the CLI can attach suggestions drawn from the
    /// core error's category without touching core internals.
    #[error("Catalogue operation failed: {0}")]
    Catalogue(#[from] CatalogueError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::TemplateUnreadable { path, .. } => vec![
                format!("Ensure '{}' exists and is readable", path.display()),
                "The file stem becomes the style name, e.g. my-style.xml".into(),
            ],

            Self::Catalogue(err) => match err.category() {
                CoreCategory::NotFound => vec![
                    "List known styles with: strata list".into(),
                    "Check the layer and style names for typos".into(),
                ],
                CoreCategory::Configuration => vec![
                    "Check --styles-dir / $STRATA_STYLES_DIR".into(),
                    "The directory must be readable and contain .xml files".into(),
                ],
                _ => vec![],
            },

            Self::Io { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::UserError,
            Self::TemplateUnreadable { .. } => ErrorCategory::NotFound,
            Self::Catalogue(err) => match err.category() {
                CoreCategory::Validation | CoreCategory::Incompatible => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::Io { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Plain-text rendering for stderr.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        out.push_str(&format!("\nError: {self}\n"));

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing at category-appropriate severity.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    use strata_core::domain::DomainError;

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn exit_code_user_error() {
        let err = CliError::InvalidInput {
            message: "x".into(),
        };
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_not_found_from_core() {
        let err = CliError::Catalogue(
            DomainError::StyleNotFound {
                style: "nope".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_code_incompatible_is_user_error() {
        let err = CliError::Catalogue(
            DomainError::RequiredChildMissing {
                layer: "ocean/temp".into(),
                role: "mask".into(),
            }
            .into(),
        );
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn exit_code_configuration() {
        let err = CliError::Catalogue(CatalogueError::Configuration {
            message: "bad dir".into(),
        });
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_code_internal() {
        let err = CliError::Io {
            message: "x".into(),
            source: io::Error::other("e"),
        };
        assert_eq!(err.exit_code(), 1);
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_contains_error_and_suggestions() {
        let err = CliError::TemplateUnreadable {
            path: PathBuf::from("/tmp/x.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_source_chain() {
        let err = CliError::TemplateUnreadable {
            path: PathBuf::from("/tmp/x.xml"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let s = err.format_plain(true);
        assert!(s.contains("Caused by: missing"));
        assert!(!s.contains("--verbose"));
    }
}
