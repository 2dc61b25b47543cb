//! Core domain layer for Strata.
//!
//! Pure business logic: the template scanner, discovery/override merge,
//! compatibility matcher, and layer-name resolver. No I/O happens here -
//! template text arrives as [`TemplateSource`] values and variable metadata
//! as [`VariableShape`] views supplied by the backend port.
//!
//! The descriptor table ([`StyleSet`]) is produced once by
//! [`repository::discover`] and is immutable afterwards; everything that
//! reads it is a side-effect-free function.

pub mod error;
pub mod matcher;
pub mod metadata;
pub mod repository;
pub mod resolver;
pub mod scanner;
pub mod style;
pub mod variable;

// Re-exports for convenience
pub use error::{DomainError, ErrorCategory};
pub use metadata::{
    ContactInfo, DatasetKind, DatasetRef, LayerDefaults, MapFeature, PlotParams, ServerInfo,
};
pub use style::{StyleDescriptor, StyleSet, TemplateSource};
pub use variable::{LayerId, PlaceholderBinding, VariableShape};
