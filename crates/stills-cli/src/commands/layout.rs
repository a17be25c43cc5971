use serde::Serialize;
use stills_core::layout::{FlowLayout, Point, Size};

use crate::commands::common::parse_size;
use crate::error::CliError;

#[derive(Debug, Serialize, PartialEq)]
pub struct LayoutItem {
    pub index: usize,
    pub row: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn run_layout(
    raw_sizes: &[String],
    width: f64,
    spacing: f64,
    default_height: f64,
    as_json: bool,
) -> Result<(), CliError> {
    let items = compute_layout(raw_sizes, width, spacing, default_height)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            println!(
                "#{:<3} row {:<2} at ({}, {})  {}x{}",
                item.index, item.row, item.x, item.y, item.width, item.height
            );
        }
    }
    Ok(())
}

pub fn compute_layout(
    raw_sizes: &[String],
    width: f64,
    spacing: f64,
    default_height: f64,
) -> Result<Vec<LayoutItem>, CliError> {
    if !(width.is_finite() && width > 0.0) {
        return Err(CliError::InvalidLayout(
            "width must be a positive number".to_string(),
        ));
    }
    if !(spacing.is_finite() && spacing >= 0.0) {
        return Err(CliError::InvalidLayout(
            "spacing must be zero or a positive number".to_string(),
        ));
    }

    let sizes = raw_sizes
        .iter()
        .map(|raw| parse_size(raw, default_height))
        .collect::<Result<Vec<Size>, _>>()?;
    let arrangement = FlowLayout::new(width, spacing).arrange(&sizes);

    Ok(sizes
        .iter()
        .zip(&arrangement.offsets)
        .enumerate()
        .map(|(index, (size, &Point { x, y }))| LayoutItem {
            index,
            row: arrangement.row_of(index).unwrap_or_default(),
            x,
            y,
            width: size.width,
            height: size.height,
        })
        .collect())
}
