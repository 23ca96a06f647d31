//! Implementation of the `motif list` command.

use motif_core::prelude::{Section, SectionInfo};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let sections: Vec<SectionInfo> = Section::ALL.iter().map(|s| s.info()).collect();

    match effective_format(args.format, output.is_json()) {
        ListFormat::Table => {
            output.header("Available Sections:")?;
            for info in &sections {
                output.print(&format!("  {:<10} {}", info.name, info.summary))?;
            }
        }

        // JSON and bare names are meant for pipes and must not be silenced
        // by --quiet.
        ListFormat::Json => output.json(&sections)?,

        ListFormat::List => {
            for info in &sections {
                output.raw(info.name)?;
            }
        }
    }

    Ok(())
}

/// An explicit `--format` wins over `--output-format json`.
fn effective_format(requested: Option<ListFormat>, json_output: bool) -> ListFormat {
    match requested {
        Some(format) => format,
        None if json_output => ListFormat::Json,
        None => ListFormat::Table,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_unless_asked_otherwise() {
        assert_eq!(effective_format(None, false), ListFormat::Table);
        assert_eq!(effective_format(None, true), ListFormat::Json);
        assert_eq!(
            effective_format(Some(ListFormat::List), true),
            ListFormat::List
        );
    }
}
