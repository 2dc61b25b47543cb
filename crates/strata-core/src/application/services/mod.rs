//! Application services - the catalogue facade.

pub mod catalogue;

pub use catalogue::StyleCatalogue;
