//! Client configuration shared by the CLI and desktop app.
//!
//! The config file is optional JSON; missing fields fall back to the built-in
//! catalog and the chip metrics the tag bar was designed with.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chip::ChipMetrics;
use crate::error::{Error, Result};
use crate::layout::FlowLayout;
use crate::models::{ClockStyle, ThemeMode, LOCATIONS, REPEAT_OPTIONS};
use crate::tag_bar::TagBarOptions;
use crate::util::normalize_text_option;

/// File name used under the platform config directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

const CONFIG_VERSION: u32 = 1;

/// User-tunable settings for the tag bar and its layout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct StillsConfig {
    pub version: u32,
    /// Use the catalog with the "+" affordance and hidden tags
    pub extended: bool,
    pub clock: ClockStyle,
    pub theme: ThemeMode,
    pub locations: Vec<String>,
    pub repeat_options: Vec<String>,
    /// Width the chips wrap within, in points
    pub container_width: f64,
    /// Gap between chips and between rows, in points
    pub spacing: f64,
    pub chip: ChipMetrics,
}

impl Default for StillsConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            extended: true,
            clock: ClockStyle::default(),
            theme: ThemeMode::default(),
            locations: LOCATIONS.iter().map(ToString::to_string).collect(),
            repeat_options: REPEAT_OPTIONS.iter().map(ToString::to_string).collect(),
            container_width: 500.0,
            spacing: 8.0,
            chip: ChipMetrics::default(),
        }
    }
}

impl StillsConfig {
    /// Load the config at `path`, or the defaults when the file does not exist.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        Self::parse(&raw).map_err(|error| {
            Error::Config(format!("Failed to load {}: {}", path.display(), error))
        })
    }

    /// Parse, normalize and validate a JSON payload.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut config = serde_json::from_str::<Self>(raw)?;
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty JSON, creating parent directories.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut normalized = self.clone();
        normalized.normalize();
        normalized.validate()?;
        let serialized = serde_json::to_string_pretty(&normalized)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }

    /// Reject settings the tag bar cannot work with.
    pub fn validate(&self) -> Result<()> {
        if self.version != CONFIG_VERSION {
            return Err(Error::Config(format!(
                "unsupported config version {} (expected {})",
                self.version, CONFIG_VERSION
            )));
        }
        if self.locations.is_empty() {
            return Err(Error::Config("locations must not be empty".to_string()));
        }
        if self.repeat_options.is_empty() {
            return Err(Error::Config(
                "repeat_options must not be empty".to_string(),
            ));
        }
        if !(self.container_width.is_finite() && self.container_width > 0.0) {
            return Err(Error::Config(
                "container_width must be a positive number".to_string(),
            ));
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return Err(Error::Config(
                "spacing must be zero or a positive number".to_string(),
            ));
        }
        Ok(())
    }

    /// Catalog options for [`crate::TagBar::new`].
    #[must_use]
    pub fn tag_bar_options(&self) -> TagBarOptions {
        TagBarOptions {
            extended: self.extended,
            clock: self.clock,
            locations: self.locations.clone(),
            repeat_options: self.repeat_options.clone(),
        }
    }

    #[must_use]
    pub const fn flow_layout(&self) -> FlowLayout {
        FlowLayout::new(self.container_width, self.spacing)
    }

    fn normalize(&mut self) {
        self.locations = normalize_options(&self.locations);
        self.repeat_options = normalize_options(&self.repeat_options);
    }
}

fn normalize_options(options: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(options.len());
    for option in options {
        if let Some(option) = normalize_text_option(Some(option.clone())) {
            if !normalized.contains(&option) {
                normalized.push(option);
            }
        }
    }
    normalized
}
