use rust_decimal::Decimal;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_decimal = |var: &str, default: &str| -> Result<Decimal, ConfigError> {
        or_default(var, default)
            .parse::<Decimal>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("VITRINE_ENV", "development"));
    let log_level = or_default("VITRINE_LOG_LEVEL", "info");
    let catalog_path = PathBuf::from(or_default(
        "VITRINE_CATALOG_PATH",
        "./config/catalog.yaml",
    ));
    let search_debounce_ms = parse_u64("VITRINE_SEARCH_DEBOUNCE_MS", "300")?;

    let page_size = parse_usize("VITRINE_PAGE_SIZE", "10")?;
    if page_size == 0 {
        return Err(invalid("VITRINE_PAGE_SIZE", "must be at least 1".to_string()));
    }

    let price_ceiling = parse_decimal("VITRINE_PRICE_CEILING", "1000")?;
    if price_ceiling < Decimal::ZERO {
        return Err(invalid(
            "VITRINE_PRICE_CEILING",
            "must not be negative".to_string(),
        ));
    }

    Ok(AppConfig {
        env,
        log_level,
        catalog_path,
        search_debounce_ms,
        page_size,
        price_ceiling,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}
