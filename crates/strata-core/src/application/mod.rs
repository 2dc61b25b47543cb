//! Application layer: the facade service and the port it depends on.

pub mod ports;
pub mod services;

pub use services::StyleCatalogue;
