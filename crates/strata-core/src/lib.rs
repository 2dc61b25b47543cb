//! Strata Core - layer/style resolution catalogue
//!
//! This crate provides the domain and application layers for the Strata
//! map-serving catalogue, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           strata-cli (CLI)              │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        StyleCatalogue (Facade)          │
//! │   supported_styles / bind / feature     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     CatalogueBackend (Driven Port)      │
//! │   datasets, shapes, layer-name codec    │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    strata-adapters (Infrastructure)     │
//! │  bundled styles, dir loader, backends   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (scanner, repository, matcher, resolver) is pure: the
//! descriptor table is built once from template sources and is immutable for
//! the rest of the process, so every lookup is a side-effect-free function
//! that can run concurrently without locking.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use strata_core::{
//!     application::StyleCatalogue,
//!     domain::{repository, TemplateSource},
//! };
//! # fn backend() -> Arc<dyn strata_core::application::ports::CatalogueBackend> { unimplemented!() }
//!
//! // 1. Discover styles (bundled first, overrides win on name collision).
//! let bundled = vec![TemplateSource::new("default", "... $layerName ...")];
//! let styles = repository::discover(bundled, vec![]);
//!
//! // 2. Build the facade over a deployment-supplied backend.
//! let catalogue = StyleCatalogue::new(styles, backend());
//! let supported = catalogue.supported_styles(&"ds/temp".into()).unwrap();
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (facade + ports)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{StyleCatalogue, ports::CatalogueBackend};
    pub use crate::domain::{
        ContactInfo, DatasetKind, DatasetRef, LayerDefaults, LayerId, MapFeature,
        PlaceholderBinding, PlotParams, ServerInfo, StyleDescriptor, StyleSet, TemplateSource,
        VariableShape,
    };
    pub use crate::error::{CatalogueError, CatalogueResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
