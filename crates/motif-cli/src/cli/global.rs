//! Flags accepted before or after any `motif` subcommand.

use std::path::PathBuf;

use clap::{Args, ValueEnum, builder::FalseyValueParser};

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more: `-v` section progress, `-vv` cache misses and crate
    /// targets, `-vvv` cache hits and section timings.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Print nothing but errors. The pause prompt and machine-readable
    /// listings still appear.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Only print errors"
    )]
    pub quiet: bool,

    /// Never emit ANSI colour. `NO_COLOR` counts when set to anything but
    /// an empty string, `0`, `false`, `no` or `off` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        action = clap::ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Read configuration from FILE"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto,
        help = "How to render output on stdout"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of everything `motif` writes to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` otherwise.
    #[default]
    Auto,
    /// Coloured banners and status marks.
    Human,
    /// The bare transcript, no escape codes.
    Plain,
    /// One JSON document per command.
    Json,
}

impl OutputFormat {
    /// Settle `Auto` against whether stdout is a terminal.
    pub fn resolve(self, stdout_is_terminal: bool) -> Self {
        match self {
            Self::Auto if stdout_is_terminal => Self::Human,
            Self::Auto => Self::Plain,
            other => other,
        }
    }

    pub fn is_json(self) -> bool {
        self == Self::Json
    }

    /// Only the human rendering may colour its output.
    pub fn allows_color(self) -> bool {
        self == Self::Human
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_the_terminal() {
        assert_eq!(OutputFormat::Auto.resolve(true), OutputFormat::Human);
        assert_eq!(OutputFormat::Auto.resolve(false), OutputFormat::Plain);
    }

    #[test]
    fn explicit_formats_ignore_the_terminal() {
        for format in [OutputFormat::Human, OutputFormat::Plain, OutputFormat::Json] {
            assert_eq!(format.resolve(true), format);
            assert_eq!(format.resolve(false), format);
        }
    }

    #[test]
    fn only_human_is_coloured() {
        assert!(OutputFormat::Human.allows_color());
        assert!(!OutputFormat::Plain.allows_color());
        assert!(!OutputFormat::Json.allows_color());
        assert!(OutputFormat::Json.is_json());
    }
}
