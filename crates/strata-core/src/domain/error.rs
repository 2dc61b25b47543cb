use thiserror::Error;

/// Root domain error type.
///
/// Every lookup-time failure is a distinct variant carrying the identifier
/// that triggered it: the serving protocol maps each variant to its own
/// client-facing diagnostic, so none of these may be collapsed or swallowed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A layer identity that no dataset/variable pair answers to.
    #[error("layer '{layer}' does not map to a variable on this server")]
    LayerNotFound { layer: String },

    /// A style name absent from the descriptor table.
    #[error("style '{style}' is not supported by this server")]
    StyleNotFound { style: String },

    /// A style requires a child role the variable does not provide.
    #[error("layer '{layer}' has no scalar child with role '{role}'")]
    RequiredChildMissing { layer: String, role: String },

    /// The dataset kind cannot produce map features.
    #[error("dataset '{dataset}' of kind '{kind}' cannot produce map features")]
    UnsupportedDatasetKind { dataset: String, kind: String },

    /// A template resource that could not be used during discovery.
    ///
    /// Only adapters raise this (unreadable file, bad path); scanning itself
    /// is total and never fails on arbitrary text.
    #[error("invalid style template: {0}")]
    InvalidTemplate(String),
}

impl DomainError {
    /// Protocol diagnostic code for the capabilities/exception document.
    ///
    /// Codes are stable identifiers, one per variant.
    pub fn code(&self) -> &'static str {
        match self {
            Self::LayerNotFound { .. } => "LayerNotDefined",
            Self::StyleNotFound { .. } => "StyleNotDefined",
            Self::RequiredChildMissing { .. } => "RequiredChildMissing",
            Self::UnsupportedDatasetKind { .. } => "OperationNotSupported",
            Self::InvalidTemplate(_) => "InvalidTemplate",
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LayerNotFound { .. } | Self::StyleNotFound { .. } => ErrorCategory::NotFound,
            Self::RequiredChildMissing { .. } | Self::UnsupportedDatasetKind { .. } => {
                ErrorCategory::Incompatible
            }
            Self::InvalidTemplate(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Incompatible,
    NotFound,
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_per_variant() {
        let errors = [
            DomainError::LayerNotFound {
                layer: "a".into(),
            },
            DomainError::StyleNotFound {
                style: "b".into(),
            },
            DomainError::RequiredChildMissing {
                layer: "a".into(),
                role: "mask".into(),
            },
            DomainError::UnsupportedDatasetKind {
                dataset: "d".into(),
                kind: "in-situ".into(),
            },
            DomainError::InvalidTemplate("x".into()),
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn messages_name_the_offending_identifier() {
        let err = DomainError::RequiredChildMissing {
            layer: "ocean/currents".into(),
            role: "dir".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("ocean/currents"));
        assert!(msg.contains("dir"));
    }
}
