//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager};
use crate::error::{SnapError, SnapResult};
use crate::ui::{self, UiContext};
use std::path::PathBuf;

const VALID_KEYS: [&str; 5] = [
    "general.log_format",
    "api.base_url",
    "api.client_id",
    "cache.enabled",
    "cache.dir",
];

/// Execute the config command
pub async fn execute(args: ConfigArgs, manager: &ConfigManager, config: &Config) -> SnapResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => println!("{}", manager.path().display()),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value }) => set_value(manager, config, &key, &value).await?,
    }

    Ok(())
}

fn show_config(config: &Config) -> SnapResult<()> {
    let mut shown = config.clone();
    if !shown.api.client_id.is_empty() {
        shown.api.client_id = "<set>".to_string();
    }
    println!("{}", toml::to_string_pretty(&shown)?);
    Ok(())
}

async fn init_config(manager: &ConfigManager, force: bool) -> SnapResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;
    ui::step_ok_detail(&ctx, "Configuration initialized", &path.display().to_string());
    Ok(())
}

async fn set_value(manager: &ConfigManager, config: &Config, key: &str, value: &str) -> SnapResult<()> {
    let ctx = UiContext::detect();
    let mut config = config.clone();

    apply_value(&mut config, key, value)?;
    manager.save(&config).await?;

    let shown = if key == "api.client_id" { "<set>" } else { value };
    ui::step_ok(&ctx, &format!("Set {} = {}", key, shown));
    Ok(())
}

/// Apply one dot-separated key to a config
fn apply_value(config: &mut Config, key: &str, value: &str) -> SnapResult<()> {
    let parts: Vec<&str> = key.split('.').collect();

    match parts.as_slice() {
        ["general", "log_format"] => match value {
            "text" | "json" => config.general.log_format = value.to_string(),
            _ => {
                return Err(SnapError::User(format!(
                    "Invalid log format: {}. Use text or json",
                    value
                )))
            }
        },
        ["api", "base_url"] => {
            url::Url::parse(value)
                .map_err(|e| SnapError::User(format!("Invalid URL {}: {}", value, e)))?;
            config.api.base_url = value.to_string();
        }
        ["api", "client_id"] => config.api.client_id = value.trim().to_string(),
        ["cache", "enabled"] => config.cache.enabled = parse_bool(value)?,
        ["cache", "dir"] => {
            config.cache.dir = match value.trim() {
                "" => None,
                dir => Some(PathBuf::from(dir)),
            }
        }
        _ => {
            return Err(SnapError::User(format!(
                "Unknown config key: {}. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            )))
        }
    }

    Ok(())
}

fn parse_bool(value: &str) -> SnapResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(SnapError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}
