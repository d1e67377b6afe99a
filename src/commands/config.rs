//! Config command - show, get and set configuration values

use super::Result;
use crate::PlaceError;
use crate::cli::ConfigCommands;
use crate::config::AppConfig;

/// Execute a config subcommand
///
/// # Errors
/// Returns an error if the key is unknown, the value is invalid, or the
/// configuration cannot be saved.
pub fn execute(mut config: AppConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let text = toml::to_string_pretty(&config)
                .map_err(|e| PlaceError::InvalidInput(format!("Failed to render config: {e}")))?;
            print!("{text}");
        }
        ConfigCommands::Path => {
            println!("{}", AppConfig::config_path()?.display());
        }
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                PlaceError::InvalidInput("Invalid format. Use: config set KEY=VALUE".into())
            })?;
            let (key, value) = (key.trim(), value.trim());
            config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", get(&config, key)?);
        }
    }
    Ok(())
}

/// Textual value of `key`
///
/// # Errors
/// Returns `PlaceError::InvalidInput` for an unknown key.
pub fn get(config: &AppConfig, key: &str) -> Result<String> {
    let value = match key {
        "data_dir" => config.data_dir()?.display().to_string(),
        "default_radius" => config.default_radius.to_string(),
        "default_center" => format!(
            "{},{}",
            config.default_center.lat, config.default_center.lng
        ),
        "persist_last_location" => config.persist_last_location.to_string(),
        "min_update_interval_ms" => config.min_update_interval_ms.to_string(),
        "quiet" => config.quiet.to_string(),
        _ => return Err(PlaceError::InvalidInput(format!("Unknown config key: {key}"))),
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_keys() {
        let config = AppConfig::default();
        assert_eq!(get(&config, "default_radius").unwrap(), "5000");
        assert_eq!(get(&config, "default_center").unwrap(), "37.5665,126.978");
        assert_eq!(get(&config, "persist_last_location").unwrap(), "false");
    }

    #[test]
    fn test_get_round_trips_through_set() {
        let mut config = AppConfig::default();
        let value = "35.1796,129.0756";
        config.set("default_center", value).unwrap();
        assert_eq!(get(&config, "default_center").unwrap(), value);
    }

    #[test]
    fn test_get_unknown_key() {
        assert!(matches!(
            get(&AppConfig::default(), "colour"),
            Err(PlaceError::InvalidInput(_))
        ));
    }
}
