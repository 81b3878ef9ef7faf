//! `tailor config`: inspect configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => match get_config_value(config, &key)? {
            Some(value) if output.is_json() => output.json(&value)?,
            Some(value) => output.print(&format!("{key} = {value:?}"))?,
            None if output.is_json() => output.json(&serde_json::Value::Null)?,
            None => output.print(&format!("{key} is not set"))?,
        },

        ConfigCommands::List => {
            if output.is_json() {
                output.json(config)?;
            } else {
                output.header("Current Configuration:")?;
                let serialised = toml::to_string_pretty(config)
                    .with_cli_context(|| "Failed to serialise config")?;
                output.print(&serialised)?;
            }
        }

        ConfigCommands::Path => {
            let path = AppConfig::config_path();
            if output.is_json() {
                output.json(&path)?;
            } else {
                output.print(&path.display().to_string())?;
            }
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<Option<String>> {
    match key {
        "identity.author" => Ok(config.identity.author.clone()),
        "identity.email" => Ok(config.identity.email.clone()),
        "identity.github_username" => Ok(config.identity.github_username.clone()),
        "output.no_color" => Ok(Some(config.output.no_color.to_string())),
        "output.format" => Ok(Some(config.output.format.clone())),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_identity_key_is_none() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "identity.author").unwrap(), None);
    }

    #[test]
    fn set_identity_key_is_returned() {
        let mut cfg = AppConfig::default();
        cfg.identity.email = Some("ada@example.com".into());
        assert_eq!(
            get_config_value(&cfg, "identity.email").unwrap().as_deref(),
            Some("ada@example.com")
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_no_color_default() {
        let cfg = AppConfig::default();
        assert_eq!(
            get_config_value(&cfg, "output.no_color").unwrap().as_deref(),
            Some("false")
        );
    }
}
