//! Adapter: an old printer behind the interface the rest of the code expects.

use crate::{error::MotifResult, ports::Console};

/// The interface callers program against.
pub trait Printer {
    fn print(&self, console: &dyn Console) -> MotifResult<()>;
}

/// Pre-existing device with its own method name. Left untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyPrinter;

impl LegacyPrinter {
    pub fn old_print(&self, console: &dyn Console) -> MotifResult<()> {
        console.write_line("Old printer is printing...")
    }
}

/// Presents a borrowed [`LegacyPrinter`] as a [`Printer`].
///
/// The adapter never owns the legacy device; its lifetime is the caller's
/// business.
#[derive(Debug, Clone, Copy)]
pub struct PrinterAdapter<'a> {
    legacy: &'a LegacyPrinter,
}

impl<'a> PrinterAdapter<'a> {
    pub fn new(legacy: &'a LegacyPrinter) -> Self {
        Self { legacy }
    }
}

impl Printer for PrinterAdapter<'_> {
    fn print(&self, console: &dyn Console) -> MotifResult<()> {
        self.legacy.old_print(console)
    }
}
