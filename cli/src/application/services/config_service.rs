//! Application service: configuration use-cases.

use anyhow::Result;

use crate::application::ports::ConfigStore;
use crate::domain::config::StratusConfig;

/// Load configuration.
///
/// # Errors
///
/// Returns an error if stored configuration cannot be read.
pub fn load_config(store: &impl ConfigStore) -> Result<StratusConfig> {
    store.load()
}

/// Validate and persist a single `key = value` setting.
///
/// Nothing is written when validation fails.
///
/// # Errors
///
/// Returns an error if the key or value is invalid or the store fails.
pub fn set_value(store: &impl ConfigStore, key: &str, value: &str) -> Result<StratusConfig> {
    let mut config = store.load()?;
    config.set(key, value)?;
    store.save(&config)?;
    Ok(config)
}
