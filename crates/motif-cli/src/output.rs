//! Output management and formatting.
//!
//! [`OutputManager`] is also the terminal-side [`Console`] the showcase
//! writes through, so demo lines respect `--quiet` and section banners pick
//! up colour when it is available.

use std::io::{self, IsTerminal};

use console::Term;
use motif_core::{
    error::{Context, MotifResult},
    ports::{Console, banner},
};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;
use crate::error::{CliError, CliResult};

/// Manages CLI output based on configuration.
#[derive(Clone)]
pub struct OutputManager {
    quiet: bool,
    no_color: bool,
    format: OutputFormat,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = args.output_format.resolve(io::stdout().is_terminal());

        Self {
            quiet: args.quiet,
            no_color: !format.allows_color() || args.no_color || config.output.no_color,
            format,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.emit(msg)
    }

    /// Machine-readable output: never quiet, never coloured.
    pub fn raw(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)
    }

    /// Pretty-print `value` as one JSON document.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> CliResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| CliError::IoError {
            message: format!("Failed to serialise JSON output: {e}"),
            source: e.into(),
        })?;
        Ok(self.raw(&text)?)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.emit(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.emit(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.emit(&line)
    }

    /// Print `msg` and block until a line (or EOF) arrives on stdin.
    ///
    /// Not suppressed in quiet mode: a silent wait would look like a hang.
    pub fn pause(&self, msg: &str) -> io::Result<()> {
        self.emit(msg)?;
        let mut buf = String::new();
        io::stdin().read_line(&mut buf)?;
        Ok(())
    }

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    /// `true` under `--output-format json`.
    pub fn is_json(&self) -> bool {
        self.format.is_json()
    }

    fn emit(&self, line: &str) -> io::Result<()> {
        reader_gone_is_ok(self.term.write_line(line))
    }
}

/// A closed stdout (`motif run | head -1`) ends output, it is not a failure.
fn reader_gone_is_ok(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

impl Console for OutputManager {
    fn write_line(&self, line: &str) -> MotifResult<()> {
        self.print(line).context("Failed to write to stdout")
    }

    fn write_header(&self, title: &str) -> MotifResult<()> {
        self.header(&banner(title))
            .context("Failed to write to stdout")
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, no_color: bool, format: OutputFormat) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, &AppConfig::default())
    }

    #[test]
    fn quiet_suppresses_print() {
        let out = make_manager(true, true, OutputFormat::Plain);
        assert!(out.print("hello").is_ok());
        assert!(out.write_line("hello").is_ok());
    }

    #[test]
    fn plain_format_disables_color() {
        assert!(!make_manager(false, false, OutputFormat::Plain).supports_color());
    }

    #[test]
    fn human_format_respects_no_color_flag() {
        assert!(make_manager(false, false, OutputFormat::Human).supports_color());
        assert!(!make_manager(false, true, OutputFormat::Human).supports_color());
    }

    #[test]
    fn json_format_is_never_coloured() {
        let out = make_manager(false, false, OutputFormat::Json);
        assert!(out.is_json());
        assert!(!out.supports_color());
        assert!(!make_manager(false, false, OutputFormat::Human).is_json());
    }

    #[test]
    fn broken_pipe_ends_output_quietly() {
        let closed = Err(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(reader_gone_is_ok(closed).is_ok());

        let denied = Err(io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(
            reader_gone_is_ok(denied).unwrap_err().kind(),
            io::ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn config_can_disable_color() {
        let args = GlobalArgs {
            verbose: 0,
            quiet: false,
            no_color: false,
            config: None,
            output_format: OutputFormat::Human,
        };
        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!OutputManager::new(&args, &config).supports_color());
    }
}
