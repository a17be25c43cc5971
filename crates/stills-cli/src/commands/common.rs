use std::env;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use stills_core::chip::{ChipIcon, ChipView};
use stills_core::config::{StillsConfig, CONFIG_FILE_NAME};
use stills_core::format::{parse_date, parse_time};
use stills_core::layout::Size;
use stills_core::tag_bar::PlacedChip;
use stills_core::util::normalize_text_option;
use stills_core::{TagBarEvent, TagKind};

use crate::error::CliError;

const CONFIG_ENV_VAR: &str = "STILLS_CONFIG";

#[derive(Debug, Serialize, PartialEq)]
pub struct ChipItem {
    pub kind: TagKind,
    pub label: String,
    pub selected: bool,
    pub hidden: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn chip_to_item(placed: &PlacedChip) -> ChipItem {
    ChipItem {
        kind: placed.chip.kind,
        label: placed.chip.label.clone(),
        selected: placed.chip.is_selected,
        hidden: placed.chip.is_hidden_tag,
        x: placed.origin.x,
        y: placed.origin.y,
        width: placed.size.width,
        height: placed.size.height,
    }
}

/// One-line rendering of a chip, e.g. `[Time v]` or `(Color)` for a hidden tag.
pub fn render_chip(chip: &ChipView) -> String {
    let icon = match chip.icon {
        Some(ChipIcon::Chevron { expanded: true }) => " ^",
        Some(ChipIcon::Chevron { expanded: false }) => " v",
        Some(ChipIcon::Cycle) => " ~",
        None => "",
    };
    let marker = if chip.is_selected { "*" } else { "" };
    if chip.is_hidden_tag {
        format!("({}{icon}){marker}", chip.label)
    } else {
        format!("[{}{icon}]{marker}", chip.label)
    }
}

pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, CliError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(path) = normalize_text_option(env::var(CONFIG_ENV_VAR).ok()) {
        return Ok(PathBuf::from(path));
    }
    default_config_path()
}

pub fn default_config_path() -> Result<PathBuf, CliError> {
    dirs::config_dir()
        .map(|dir| dir.join("stills").join(CONFIG_FILE_NAME))
        .ok_or_else(|| CliError::Config("Failed to resolve config directory".to_string()))
}

pub fn load_config(path: &Path) -> Result<StillsConfig, CliError> {
    Ok(StillsConfig::load_from_path(path)?)
}

/// Parse `tap:<kind>`, `time:HH:MM`, `date:YYYY-MM-DD`, `set` or `dismiss`.
pub fn parse_event(raw: &str) -> Result<TagBarEvent, CliError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| CliError::InvalidEvent {
        event: raw.to_string(),
        reason,
    };

    match trimmed.to_lowercase().as_str() {
        "set" | "commit" => return Ok(TagBarEvent::Commit),
        "dismiss" => return Ok(TagBarEvent::Dismiss),
        _ => {}
    }

    let Some((name, value)) = trimmed.split_once(':') else {
        return Err(invalid("expected NAME:VALUE".to_string()));
    };

    match name.trim().to_lowercase().as_str() {
        "tap" => value.parse::<TagKind>().map(TagBarEvent::Tap).map_err(|_| {
            let known = TagKind::ALL.map(TagKind::as_str).join(", ");
            invalid(format!("unknown tag kind '{}', expected one of: {known}", value.trim()))
        }),
        "time" => parse_time(value)
            .map(TagBarEvent::TimeChanged)
            .map_err(|error| invalid(error.to_string())),
        "date" => parse_date(value)
            .map(TagBarEvent::DateChanged)
            .map_err(|error| invalid(error.to_string())),
        other => Err(invalid(format!("unknown event '{other}'"))),
    }
}

/// Parse `WIDTH` or `WIDTHxHEIGHT`.
pub fn parse_size(raw: &str, default_height: f64) -> Result<Size, CliError> {
    let invalid = || CliError::InvalidSize(raw.to_string());
    let parse_dimension = |value: &str| {
        value
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|dimension| dimension.is_finite() && *dimension >= 0.0)
            .ok_or_else(invalid)
    };

    match raw.split_once(['x', 'X']) {
        Some((width, height)) => Ok(Size::new(parse_dimension(width)?, parse_dimension(height)?)),
        None => Ok(Size::new(parse_dimension(raw)?, default_height)),
    }
}

pub fn parse_now(raw: Option<&str>) -> Result<NaiveDateTime, CliError> {
    let Some(raw) = raw else {
        return Ok(Local::now().naive_local());
    };
    let trimmed = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
        .ok_or_else(|| CliError::InvalidTimestamp(raw.to_string()))
}
