//! Implementation of the `motif run` command.

use motif_adapters::{MemoryConsole, WriterConsole};
use motif_core::prelude::{MotifError, Section, Showcase};
use serde::Serialize;
use tracing::info;

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

const PAUSE_PROMPT: &str = "Press Enter to exit...";

/// One section of a `--output-format json` run.
#[derive(Debug, Serialize)]
struct SectionTranscript {
    section: &'static str,
    title: &'static str,
    lines: Vec<String>,
}

pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let sections = resolve_sections(&args.sections, &config)?;
    info!(
        sections = %sections.iter().map(|s| s.name()).collect::<Vec<_>>().join(","),
        "Running showcase"
    );

    match &args.output {
        Some(path) => {
            let console = WriterConsole::create(path)?;
            Showcase::new(Box::new(console)).run(&sections)?;
            info!(path = %path.display(), "Transcript written");
        }
        None if output.is_json() => output.json(&capture(&sections)?)?,
        None => Showcase::new(Box::new(output.clone())).run(&sections)?,
    }

    if args.pause || config.showcase.pause_on_exit {
        if !output.is_json() {
            output.print("")?;
        }
        output
            .pause(PAUSE_PROMPT)
            .with_cli_context(|| "Failed to wait for Enter")?;
    }

    Ok(())
}

/// Run each section against its own buffer and keep the lines under the
/// banner.
fn capture(sections: &[Section]) -> CliResult<Vec<SectionTranscript>> {
    if sections.is_empty() {
        return Err(MotifError::Configuration {
            message: "no sections selected".into(),
        }
        .into());
    }

    let mut transcripts = Vec::with_capacity(sections.len());
    for &section in sections {
        let console = MemoryConsole::new();
        Showcase::new(Box::new(console.clone())).run_section(section)?;
        transcripts.push(SectionTranscript {
            section: section.name(),
            title: section.title(),
            lines: console.lines().into_iter().skip(1).collect(),
        });
    }
    Ok(transcripts)
}

/// Sections named on the command line win; otherwise the configured list.
fn resolve_sections(requested: &[String], config: &AppConfig) -> CliResult<Vec<Section>> {
    if requested.is_empty() {
        return Ok(config.sections()?);
    }
    Ok(requested
        .iter()
        .map(|name| name.parse::<Section>())
        .collect::<Result<Vec<_>, _>>()?)
}
