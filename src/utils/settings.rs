//! Loading of the die configuration.
use bevy::prelude::*;

use crate::utils::objects::DieSettings;
use die_core::DieConfig;

#[cfg(not(target_arch = "wasm32"))]
use die_core::constants::game_constants::{CONFIG_DEFAULT_PATH, CONFIG_ENV_VAR};

/// Reads the config file named by `ICOSA_DIE_CONFIG` (or `assets/die.toml`).
/// A broken file is reported and replaced by the defaults.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> DieSettings {
    let path = std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| CONFIG_DEFAULT_PATH.to_string());
    match DieConfig::load_or_default(&path) {
        Ok(config) => DieSettings(config),
        Err(err) => {
            warn!("Ignoring config {}: {}", path, err);
            DieSettings::default()
        }
    }
}

/// No filesystem on the web, always the defaults.
#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> DieSettings {
    info!("Using default die config");
    DieSettings(DieConfig::default())
}
