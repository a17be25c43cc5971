//! A single tag chip, absolutely positioned by the tag bar

use dioxus::prelude::*;
use stills_core::chip::{ChipIcon, ChipView};
use stills_core::layout::{Point, Size};

use crate::state::AppState;

#[component]
pub fn TagChip(
    chip: ChipView,
    origin: Point,
    size: Size,
    corner_radius: f64,
    font_size: f64,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let (background, foreground) = if chip.is_selected {
        (colors.chip_selected_bg, colors.chip_selected_text)
    } else {
        (colors.chip_bg, colors.chip_text)
    };
    let border = if chip.is_hidden_tag {
        format!("1px dashed {}", colors.border)
    } else {
        "1px solid transparent".to_string()
    };
    let opacity = chip.opacity();

    rsx! {
        button {
            class: if chip.is_selected { "tag-chip selected" } else { "tag-chip" },
            style: "
                position: absolute;
                left: {origin.x}px;
                top: {origin.y}px;
                width: {size.width}px;
                height: {size.height}px;
                display: flex;
                align-items: center;
                justify-content: center;
                gap: 4px;
                padding: 0;
                border: {border};
                border-radius: {corner_radius}px;
                font-size: {font_size}px;
                background: {background};
                color: {foreground};
                opacity: {opacity};
                cursor: pointer;
                transition: left 0.2s, top 0.2s, background 0.15s, opacity 0.2s;
                white-space: nowrap;
            ",
            onclick: move |evt| onclick.call(evt),

            span { "{chip.label}" }
            if let Some(icon) = chip.icon {
                ChipGlyph { icon }
            }
        }
    }
}

#[component]
fn ChipGlyph(icon: ChipIcon) -> Element {
    let glyph = match icon {
        ChipIcon::Chevron { .. } => "⌄",
        ChipIcon::Cycle => "↻",
    };
    let rotation = icon.rotation_degrees();

    rsx! {
        span {
            style: "
                display: inline-block;
                font-size: 10px;
                transform: rotate({rotation}deg);
                transition: transform 0.2s;
            ",
            "{glyph}"
        }
    }
}
