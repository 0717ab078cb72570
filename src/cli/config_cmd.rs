//! Config command handler

use crate::application::ports::ConfigStore;
use crate::domain::config::{AppConfig, LinuxConfig, LOG_LEVELS};
use crate::domain::error::ConfigError;

use super::args::{is_valid_config_key, ConfigAction, VALID_CONFIG_KEYS};
use super::presenter::Presenter;

const NOT_SET: &str = "(not set)";

/// Handle config subcommand
pub async fn handle_config_command<S: ConfigStore>(
    action: ConfigAction,
    store: &S,
    presenter: &Presenter,
) -> Result<(), ConfigError> {
    match action {
        ConfigAction::Init => handle_init(store, presenter).await,
        ConfigAction::Set { key, value } => handle_set(store, presenter, &key, &value).await,
        ConfigAction::Get { key } => handle_get(store, presenter, &key).await,
        ConfigAction::List => handle_list(store, presenter).await,
        ConfigAction::Path => {
            presenter.output(&store.path().to_string_lossy());
            Ok(())
        }
    }
}

async fn handle_init<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    store.init().await?;
    presenter.success(&format!(
        "Config file created at: {}",
        store.path().display()
    ));
    Ok(())
}

async fn handle_set<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
    value: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let mut config = store.load().await?;
    apply_value(&mut config, key, value)?;

    store.save(&config).await?;
    presenter.success(&format!("{} = {}", key, value));

    Ok(())
}

async fn handle_get<S: ConfigStore>(
    store: &S,
    presenter: &Presenter,
    key: &str,
) -> Result<(), ConfigError> {
    ensure_valid_key(key)?;

    let config = store.load().await?;
    presenter.output(&read_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()));

    Ok(())
}

async fn handle_list<S: ConfigStore>(store: &S, presenter: &Presenter) -> Result<(), ConfigError> {
    let config = store.load().await?;

    for key in VALID_CONFIG_KEYS {
        presenter.key_value(
            key,
            &read_value(&config, key).unwrap_or_else(|| NOT_SET.to_string()),
        );
    }

    Ok(())
}

fn ensure_valid_key(key: &str) -> Result<(), ConfigError> {
    if is_valid_config_key(key) {
        return Ok(());
    }
    Err(ConfigError::ValidationError {
        key: key.to_string(),
        message: format!("Unknown key. Valid keys: {}", VALID_CONFIG_KEYS.join(", ")),
    })
}

/// Current value of a key, formatted for display
fn read_value(config: &AppConfig, key: &str) -> Option<String> {
    match key {
        "poll_interval_ms" => config.poll_interval_ms.map(|v| v.to_string()),
        "byte_precision" => config.byte_precision.map(|v| v.to_string()),
        "log_level" => config.log_level.clone(),
        "linux.selection" => config
            .linux
            .as_ref()
            .and_then(|l| l.selection)
            .map(|b| b.to_string()),
        _ => None,
    }
}

/// Validate `value` for `key` and store it in `config`
fn apply_value(config: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = |message: &str| ConfigError::ValidationError {
        key: key.to_string(),
        message: message.to_string(),
    };

    match key {
        "poll_interval_ms" => {
            let ms = value
                .parse::<u64>()
                .ok()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| invalid("Value must be a positive number of milliseconds"))?;
            config.poll_interval_ms = Some(ms);
        }
        "byte_precision" => {
            let precision = value
                .parse::<u32>()
                .ok()
                .filter(|p| *p <= 9)
                .ok_or_else(|| invalid("Value must be between 0 and 9"))?;
            config.byte_precision = Some(precision);
        }
        "log_level" => {
            let level = value.to_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(invalid(&format!(
                    "Value must be one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
            config.log_level = Some(level);
        }
        "linux.selection" => {
            let enabled =
                parse_bool(value).map_err(|_| invalid("Value must be 'true' or 'false'"))?;
            config
                .linux
                .get_or_insert_with(LinuxConfig::default)
                .selection = Some(enabled);
        }
        _ => return Err(invalid("Unknown key")),
    }

    Ok(())
}

/// Parse a boolean value from string
fn parse_bool(value: &str) -> Result<bool, ()> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(()),
    }
}
