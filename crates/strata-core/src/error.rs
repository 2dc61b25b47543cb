//! Unified error handling for Strata Core.
//!
//! Wraps domain errors together with backend/configuration failures so the
//! facade and its callers deal with a single result type.

use thiserror::Error;

use crate::domain::{DomainError, ErrorCategory as DomainCategory};

/// Root error type for catalogue operations.
#[derive(Debug, Error, Clone)]
pub enum CatalogueError {
    /// Errors from the domain layer (lookup failures, bad templates).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A deployment backend could not satisfy a capability call.
    #[error("backend error: {message}")]
    Backend { message: String },

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl CatalogueError {
    /// Error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                DomainCategory::Validation => ErrorCategory::Validation,
                DomainCategory::Incompatible => ErrorCategory::Incompatible,
                DomainCategory::NotFound => ErrorCategory::NotFound,
                DomainCategory::Internal => ErrorCategory::Internal,
            },
            Self::Backend { .. } => ErrorCategory::Internal,
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// Protocol diagnostic code, where one exists.
    ///
    /// Backend and configuration failures have no protocol-visible code; the
    /// serving layer reports those as generic internal errors.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Domain(e) => Some(e.code()),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Incompatible,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type CatalogueResult<T> = Result<T, CatalogueError>;
