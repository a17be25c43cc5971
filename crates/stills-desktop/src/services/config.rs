//! Locate and load the config file shared with the CLI.

use std::path::PathBuf;

use stills_core::config::{StillsConfig, CONFIG_FILE_NAME};
use stills_core::util::normalize_text_option;

const CONFIG_ENV_VAR: &str = "STILLS_CONFIG";

fn config_path() -> Option<PathBuf> {
    normalize_text_option(std::env::var(CONFIG_ENV_VAR).ok())
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join("stills").join(CONFIG_FILE_NAME)))
}

/// Load the config, falling back to defaults when it is missing or broken.
pub fn load_desktop_config() -> StillsConfig {
    let Some(path) = config_path() else {
        tracing::warn!("No config directory available, using default settings");
        return StillsConfig::default();
    };

    match StillsConfig::load_from_path(&path) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            config
        }
        Err(e) => {
            tracing::error!("Failed to load config: {}", e);
            StillsConfig::default()
        }
    }
}
