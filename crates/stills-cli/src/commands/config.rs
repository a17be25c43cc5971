use std::path::Path;

use stills_core::config::StillsConfig;

use crate::commands::common::load_config;
use crate::error::CliError;

pub fn run_config_init(path: &Path, force: bool) -> Result<(), CliError> {
    write_default_config(path, force)?;
    println!("{}", path.display());
    Ok(())
}

pub fn write_default_config(path: &Path, force: bool) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }
    StillsConfig::default().save_to_path(path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn run_config_show(path: &Path) -> Result<(), CliError> {
    let config = load_config(path)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn run_config_path(path: &Path) {
    println!("{}", path.display());
}
