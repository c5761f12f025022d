//! Config command handler

use crate::cli::{ConfigAction, ConfigArgs, ConfigFormat, ConfigInitArgs, ConfigShowArgs, OutputFormat};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde::Serialize;
use std::path::PathBuf;

/// Handle the config command
pub fn handle_config(args: ConfigArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    match args.action {
        ConfigAction::Show(show_args) => handle_config_show(show_args, config, output),
        ConfigAction::Init(init_args) => handle_config_init(init_args, output),
        ConfigAction::Path => handle_config_path(output),
    }
}

fn handle_config_show(args: ConfigShowArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let content = match args.format {
        ConfigFormat::Json => serde_json::to_string_pretty(config)
            .map_err(|e| Error::config(format!("Failed to serialize as JSON: {}", e)))?,
        ConfigFormat::Yaml => serde_yaml::to_string(config)
            .map_err(|e| Error::config(format!("Failed to serialize as YAML: {}", e)))?,
    };

    output.write(&content)?;
    if !content.ends_with('\n') {
        output.writeln("")?;
    }
    Ok(())
}

fn handle_config_init(args: ConfigInitArgs, output: &mut OutputWriter) -> Result<()> {
    let path = args.path.unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));

    if path.exists() && !args.force {
        return Err(Error::config(format!(
            "{} already exists; pass --force to overwrite it",
            path.display()
        )));
    }

    Config::default().save(&path)?;
    tracing::info!(path = %path.display(), "Wrote default configuration");
    output.success(&format!("Wrote default configuration to {}", path.display()))
}

#[derive(Serialize)]
struct SearchedPath {
    path: String,
    exists: bool,
}

fn handle_config_path(output: &mut OutputWriter) -> Result<()> {
    let searched: Vec<SearchedPath> = Config::default_config_paths()
        .into_iter()
        .map(|path| SearchedPath {
            exists: path.exists(),
            path: path.display().to_string(),
        })
        .collect();

    if output.format() != OutputFormat::Human {
        return output.data(&searched);
    }

    output.section("Configuration search order")?;
    let rows = searched
        .iter()
        .map(|entry| {
            let status = if entry.exists { "found" } else { "-" };
            vec![entry.path.clone(), status.to_string()]
        })
        .collect();
    output.table(&["path", "status"], rows)
}
