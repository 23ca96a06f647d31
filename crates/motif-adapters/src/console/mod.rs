//! Console adapters.

mod memory;
mod writer;

pub use memory::MemoryConsole;
pub use writer::WriterConsole;
