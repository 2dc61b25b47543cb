//! Backend implementations of the catalogue port.

pub mod memory;

pub use memory::MemoryBackend;
