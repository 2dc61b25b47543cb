//! Infrastructure adapters for Strata.
//!
//! This crate implements the port defined in `strata-core::application::ports`
//! and supplies the style templates the catalogue is discovered from. All
//! filesystem and environment access lives here.

pub mod backend;
pub mod bundled;
pub mod discover;
pub mod style_loader;

// Re-export commonly used adapters
pub use backend::MemoryBackend;
pub use discover::discover_styles;
