use serde::Serialize;
use stills_core::carousel::Carousel;
use stills_core::models::{mock_profiles, ProfileInfo};

use crate::error::CliError;

#[derive(Debug, Serialize)]
pub struct CarouselItem {
    pub index: usize,
    pub name: String,
    pub offset_x: f64,
    pub scale: f64,
    pub opacity: f64,
    pub visible: bool,
    pub selected: bool,
}

pub fn run_carousel(drag: f64, select: Option<usize>, as_json: bool) -> Result<(), CliError> {
    let profiles = mock_profiles();
    let items = carousel_items(&profiles, drag, select);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        for item in &items {
            let marker = if item.selected { "*" } else { " " };
            let visibility = if item.visible { "" } else { "  (hidden)" };
            println!(
                "{marker} {:<10} x={:>8.2} scale={:.2} opacity={:.2}{visibility}",
                item.name, item.offset_x, item.scale, item.opacity
            );
        }
    }
    Ok(())
}

pub fn carousel_items(
    profiles: &[ProfileInfo],
    drag: f64,
    select: Option<usize>,
) -> Vec<CarouselItem> {
    let mut carousel = Carousel::new(profiles.len());
    carousel.drag_changed(drag);
    carousel.drag_ended(drag);
    if let Some(index) = select.filter(|index| *index < profiles.len()) {
        carousel.tap(index);
    }

    profiles
        .iter()
        .enumerate()
        .map(|(index, profile)| {
            let placement = carousel.placement(index);
            CarouselItem {
                index,
                name: profile.name.clone(),
                offset_x: placement.offset_x,
                scale: placement.scale,
                opacity: placement.opacity,
                visible: placement.visible,
                selected: carousel.selected() == Some(index),
            }
        })
        .collect()
}
