//! `motif config`: inspect and create configuration.

use std::path::{Path, PathBuf};

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys accepted by `motif config get`.
pub const KNOWN_KEYS: [&str; 3] = [
    "showcase.sections",
    "showcase.pause_on_exit",
    "output.no_color",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    config_file: Option<PathBuf>,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = config_file.unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List if output.is_json() => output.json(&config)?,

        ConfigCommands::List => {
            output.header("Current Configuration:")?;
            output.print(&to_toml(&config)?)?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }

        ConfigCommands::Init { force } => {
            if path.exists() && !force {
                output.warning(&format!(
                    "Config already exists at {}  (use --force to overwrite)",
                    path.display(),
                ))?;
                return Ok(());
            }

            write_default_config(&path)?;
            output.success(&format!("Configuration created at {}", path.display()))?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "showcase.sections" => Ok(config.showcase.sections.join(",")),
        "showcase.pause_on_exit" => Ok(config.showcase.pause_on_exit.to_string()),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        _ => Err(CliError::UnknownConfigKey { key: key.to_owned() }),
    }
}

fn to_toml(config: &AppConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })
}

fn write_default_config(path: &Path) -> CliResult<()> {
    let toml = to_toml(&AppConfig::default())?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_key_resolves() {
        let cfg = AppConfig::default();
        for key in KNOWN_KEYS {
            assert!(get_config_value(&cfg, key).is_ok(), "{key}");
        }
        assert_eq!(
            get_config_value(&cfg, "showcase.sections").unwrap(),
            "flyweight,adapter,bridge,facade"
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::UnknownConfigKey { .. })
        ));
    }

    #[test]
    fn written_default_loads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        write_default_config(&path).unwrap();
        let loaded = AppConfig::load(Some(&path), false).unwrap();
        assert_eq!(loaded.showcase, AppConfig::default().showcase);
    }
}
