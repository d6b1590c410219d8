use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub const DEFAULT_DATA_PATH: &str = "data/clients.json";
pub const DEFAULT_EXPORT_DIR: &str = "exports";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let non_blank = |var: &str, default: &str| -> Result<String, ConfigError> {
        let raw = or_default(var, default);
        if raw.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be blank".to_string(),
            });
        }
        Ok(raw)
    };

    let env = parse_environment(&or_default("ONBOARD_ENV", "development"))?;
    let log_level = non_blank("ONBOARD_LOG_LEVEL", "info")?;
    let data_path = PathBuf::from(non_blank("ONBOARD_DATA_PATH", DEFAULT_DATA_PATH)?);
    let export_dir = PathBuf::from(non_blank("ONBOARD_EXPORT_DIR", DEFAULT_EXPORT_DIR)?);

    Ok(AppConfig {
        env,
        log_level,
        data_path,
        export_dir,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "ONBOARD_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
