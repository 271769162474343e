//! `crease config` - read and write configuration values.

use std::{fs, path::Path};

use tracing::info;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Keys accepted by `get` and `set`.
const KEYS: &[&str] = &[
    "storage.data_file",
    "defaults.overs",
    "defaults.balls_per_over",
    "defaults.max_wickets",
    "output.no_color",
    "output.format",
    "awards.mvp_title",
    "awards.most_expensive_title",
    "awards.duck_title",
];

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let path = global.config.clone().unwrap_or_else(AppConfig::config_path);

    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::Set { key, value } => {
            set_config_value(&path, &key, &value)?;
            info!(key = %key, path = %path.display(), "Config updated");
            output.success(&format!("Set {key} = {value} in {}", path.display()))?;
        }

        ConfigCommands::List => {
            if output.is_json() {
                output.json(&config)?;
                return Ok(());
            }
            output.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.print(&serialised)?;
        }

        ConfigCommands::Path => {
            output.print(&path.display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn unknown_key(key: &str) -> CliError {
    CliError::ConfigError {
        message: format!("Unknown config key: '{key}' (known: {})", KEYS.join(", ")),
        source: None,
    }
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let opt = |v: Option<String>| v.unwrap_or_else(|| "(unset)".into());
    match key {
        "storage.data_file" => Ok(opt(config
            .storage
            .data_file
            .as_ref()
            .map(|p| p.display().to_string()))),
        "defaults.overs" => Ok(config.defaults.overs.to_string()),
        "defaults.balls_per_over" => Ok(config.defaults.balls_per_over.to_string()),
        "defaults.max_wickets" => Ok(opt(config.defaults.max_wickets.map(|w| w.to_string()))),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        "awards.mvp_title" => Ok(config.awards.mvp_title.clone()),
        "awards.most_expensive_title" => Ok(config.awards.most_expensive_title.clone()),
        "awards.duck_title" => Ok(config.awards.duck_title.clone()),
        _ => Err(unknown_key(key)),
    }
}

/// Writes one key into the TOML file at `path`, keeping other entries.
///
/// The edited document must still deserialize as an [`AppConfig`], so a
/// value of the wrong type is rejected before anything is written.
fn set_config_value(path: &Path, key: &str, value: &str) -> CliResult<()> {
    if !KEYS.contains(&key) {
        return Err(unknown_key(key));
    }
    let Some((section, field)) = key.split_once('.') else {
        return Err(unknown_key(key));
    };

    let mut doc: toml::Table = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_cli_context(|| format!("Failed to read '{}'", path.display()))?;
        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("'{}' is not valid TOML", path.display()),
            source: Some(Box::new(e)),
        })?
    } else {
        toml::Table::new()
    };

    let table = doc
        .entry(section)
        .or_insert(toml::Value::Table(toml::Table::new()));
    let toml::Value::Table(table) = table else {
        return Err(CliError::ConfigError {
            message: format!("'{section}' is not a table in '{}'", path.display()),
            source: None,
        });
    };
    table.insert(field.to_owned(), parse_value(value));

    let text = toml::to_string_pretty(&doc).map_err(|e| CliError::ConfigError {
        message: format!("Failed to serialise config: {e}"),
        source: Some(Box::new(e)),
    })?;
    toml::from_str::<AppConfig>(&text).map_err(|e| CliError::ConfigError {
        message: format!("Invalid value '{value}' for {key}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

/// Integers and booleans keep their type; everything else is a string.
fn parse_value(value: &str) -> toml::Value {
    if let Ok(n) = value.parse::<i64>() {
        toml::Value::Integer(n)
    } else if let Ok(b) = value.parse::<bool>() {
        toml::Value::Boolean(b)
    } else {
        toml::Value::String(value.to_owned())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
