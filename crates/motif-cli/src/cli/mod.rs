//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "motif",
    bin_name = "motif",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Structural design patterns, runnable",
    long_about = "Motif runs small, self-contained demonstrations of the \
                  Flyweight, Adapter, Bridge and Facade patterns.",
    after_help = "EXAMPLES:\n\
        \x20 motif run\n\
        \x20 motif run flyweight bridge\n\
        \x20 motif list --format json\n\
        \x20 motif completions bash > /usr/share/bash-completion/completions/motif",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run pattern demos.
    #[command(
        visible_alias = "r",
        about = "Run pattern demos",
        after_help = "EXAMPLES:\n\
            \x20 motif run                     # every configured section\n\
            \x20 motif run adapter facade      # just these, in this order\n\
            \x20 motif run --output demo.txt   # write the transcript to a file\n\
            \x20 motif run --pause             # wait for Enter before exiting"
    )]
    Run(RunArgs),

    /// List the available sections.
    #[command(
        visible_alias = "ls",
        about = "List available sections",
        after_help = "EXAMPLES:\n\
            \x20 motif list\n\
            \x20 motif list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 motif completions bash > ~/.local/share/bash-completion/completions/motif\n\
            \x20 motif completions zsh  > ~/.zfunc/_motif\n\
            \x20 motif completions fish > ~/.config/fish/completions/motif.fish"
    )]
    Completions(CompletionsArgs),

    /// Manage the Motif configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 motif config get showcase.sections\n\
            \x20 motif config list\n\
            \x20 motif config init --force"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `motif run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Sections to run, in order.  Defaults to `showcase.sections` from the
    /// configuration (all four, in reference order, unless changed).
    #[arg(value_name = "SECTION", help = "Sections to run (default: all)")]
    pub sections: Vec<String>,

    /// Wait for Enter after the last section.
    #[arg(long = "pause", help = "Wait for Enter before exiting")]
    pub pause: bool,

    /// Write the transcript to a file instead of the terminal.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        help = "Write output to FILE instead of stdout"
    )]
    pub output: Option<PathBuf>,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `motif list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format. Defaults to `json` under `--output-format json`,
    /// otherwise `table`.
    #[arg(long = "format", value_enum, help = "Output format")]
    pub format: Option<ListFormat>,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `motif completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `motif config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `showcase.sections`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
    /// Write a default configuration file.
    Init {
        /// Overwrite an existing config file.
        #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
        force: bool,
    },
}

// ── tests ─────────────────────────────────────────────────────────────────────
