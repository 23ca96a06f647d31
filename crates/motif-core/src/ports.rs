//! Driven (output) ports - implemented by infrastructure.
//!
//! Every pattern demo reports what it did by writing human-readable lines
//! through [`Console`]. The `motif-adapters` crate and the CLI provide the
//! implementations.

use crate::error::MotifResult;

/// Port for line-oriented text output.
///
/// Implemented by:
/// - `motif_adapters::MemoryConsole` (testing, transcript capture)
/// - `motif_adapters::WriterConsole` (any `io::Write`, e.g. a file)
/// - `motif_cli::output::OutputManager` (styled terminal output)
#[cfg_attr(test, mockall::automock)]
pub trait Console: Send + Sync {
    /// Write one line. The implementation appends the line terminator.
    fn write_line(&self, line: &str) -> MotifResult<()>;

    /// Write a section banner such as `==== FLYWEIGHT ====`.
    ///
    /// Styled consoles override this; the text stays the same.
    fn write_header(&self, title: &str) -> MotifResult<()> {
        self.write_line(&banner(title))
    }
}

/// Plain banner text for a section title.
pub fn banner(title: &str) -> String {
    format!("==== {title} ====")
}
