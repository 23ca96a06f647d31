//! Console adapter over any `io::Write`.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::Mutex,
};

use motif_core::{
    error::{Context, MotifError, MotifResult},
    ports::Console,
};
use tracing::debug;

/// Writes plain lines to the wrapped writer and flushes after each one.
#[derive(Debug)]
pub struct WriterConsole<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterConsole<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Give the writer back, e.g. to inspect a `Vec<u8>` buffer.
    pub fn into_inner(self) -> W {
        match self.writer.into_inner() {
            Ok(w) => w,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl WriterConsole<BufWriter<File>> {
    /// Create (or truncate) `path` and write to it.
    pub fn create(path: &Path) -> MotifResult<Self> {
        let file = File::create(path).map_err(|e| MotifError::Output {
            reason: format!("Failed to create {}: {}", path.display(), e),
        })?;
        debug!(path = %path.display(), "writing transcript to file");
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Console for WriterConsole<W> {
    fn write_line(&self, line: &str) -> MotifResult<()> {
        let mut writer = self.writer.lock().map_err(|_| MotifError::Internal {
            message: "writer console lock poisoned".into(),
        })?;
        writeln!(writer, "{line}").context("Failed to write line")?;
        writer.flush().context("Failed to flush output")
    }
}
