//! Infrastructure adapters for Motif.
//!
//! This crate implements the ports defined in `motif_core::ports`.
//! It contains all output I/O.

pub mod console;

// Re-export commonly used adapters
pub use console::{MemoryConsole, WriterConsole};
