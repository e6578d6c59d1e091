// In crates/app-config/src/lib.rs

use std::path::Path;

use config::{Config, Environment, File};

pub mod error;
pub mod types;

// Re-export the most important types for easy access.
pub use error::{Error, Result};
pub use types::Settings;

/// Loads the signal settings from layered sources.
///
/// This function orchestrates the layered configuration loading:
/// 1. Built-in defaults (AAPL, 5/15 windows), via serde defaults.
/// 2. An optional `config/signal.toml` file.
/// 3. Environment variables with the `SMA` prefix
///    (e.g. `SMA_SYMBOL=MSFT`, `SMA_SHORT_PERIOD=8`).
///
/// Window ordering is NOT checked here: callers merge their own overrides
/// first and then run [`Settings::validate`] on the final pair.
pub fn load_settings() -> Result<Settings> {
    let settings = Config::builder()
        .add_source(File::with_name("config/signal").required(false))
        .add_source(Environment::with_prefix("SMA").separator("__"))
        .build()?;

    let settings: Settings = settings.try_deserialize()?;

    Ok(settings)
}

/// Loads settings from an explicit TOML file, bypassing the layered sources.
pub fn load_settings_from(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path)?;

    let settings: Settings = toml::from_str(&content)?;
    Ok(settings)
}
