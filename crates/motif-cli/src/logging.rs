//! Tracing subscriber setup for the `motif` binary.
//!
//! The library crates only emit events. Everything they log is filtered here
//! to the three motif targets, so dependency chatter never reaches the
//! terminal unless `RUST_LOG` asks for it.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::cli::GlobalArgs;

/// Crates whose events are shown by default.
const MOTIF_TARGETS: [&str; 3] = ["motif", "motif_core", "motif_adapters"];

/// Install the global subscriber. Call once, before the first event.
///
/// Logs go to stderr so they never mix with the transcript on stdout.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = verbosity(args.verbose, args.quiet);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| motif_filter(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        // which crate spoke only matters once cache traffic shows up
        .with_target(level >= LevelFilter::DEBUG)
        .with_span_events(section_timings(level))
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

/// `-q` wins over any number of `-v`.
fn verbosity(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn motif_filter(level: LevelFilter) -> EnvFilter {
    let directives = MOTIF_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// At `-vvv` every `run_section` span reports how long it took on close.
fn section_timings(level: LevelFilter) -> FmtSpan {
    if level == LevelFilter::TRACE {
        FmtSpan::CLOSE
    } else {
        FmtSpan::NONE
    }
}
