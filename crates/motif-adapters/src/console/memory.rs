//! In-memory console adapter for testing.

use std::sync::{Arc, RwLock};

use motif_core::{
    error::{MotifError, MotifResult},
    ports::Console,
};

/// Captures every line written to it.
///
/// Clones share the same buffer, so a test can hand one clone to a service
/// and inspect the other afterwards.
#[derive(Debug, Clone, Default)]
pub struct MemoryConsole {
    lines: Arc<RwLock<Vec<String>>>,
}

impl MemoryConsole {
    /// Create a new empty console.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far, one entry per line.
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().map(|l| l.clone()).unwrap_or_default()
    }

    /// Everything written so far, newline-terminated, as stdout would show it.
    pub fn transcript(&self) -> String {
        self.lines()
            .into_iter()
            .map(|mut line| {
                line.push('\n');
                line
            })
            .collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        if let Ok(mut lines) = self.lines.write() {
            lines.clear();
        }
    }
}

impl Console for MemoryConsole {
    fn write_line(&self, line: &str) -> MotifResult<()> {
        let mut lines = self.lines.write().map_err(|_| MotifError::Internal {
            message: "memory console lock poisoned".into(),
        })?;
        lines.push(line.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_buffer() {
        let console = MemoryConsole::new();
        let handle = console.clone();

        console.write_line("one").unwrap();
        handle.write_header("TWO").unwrap();

        assert_eq!(handle.lines(), vec!["one", "==== TWO ===="]);
        assert_eq!(console.transcript(), "one\n==== TWO ====\n");
    }

    #[test]
    fn clear_empties_buffer() {
        let console = MemoryConsole::new();
        console.write_line("x").unwrap();
        console.clear();
        assert!(console.lines().is_empty());
        assert_eq!(console.transcript(), "");
    }
}
