//! Tag bar beneath the reminder text
//!
//! Owns a [`TagBar`] state machine, feeds it chip taps and picker changes,
//! and draws the chips where the flow layout puts them.

use dioxus::prelude::*;
use stills_core::chip::ChipMetrics;
use stills_core::layout::FlowLayout;
use stills_core::tag_bar::{TagBarOptions, TagBarResponse};
use stills_core::{SelectedTags, TagBar, TagBarEvent};

use super::{PickerOverlay, TagChip};

const PICKER_GAP: f64 = 8.0;

#[component]
pub fn TagBarView(
    options: TagBarOptions,
    layout: FlowLayout,
    metrics: ChipMetrics,
    on_change: EventHandler<SelectedTags>,
    on_dismiss: EventHandler<()>,
) -> Element {
    let mut bar = use_signal(|| TagBar::new(options.clone()));

    let mut send = move |event: TagBarEvent| {
        let outcome = bar
            .write()
            .as_mut()
            .ok()
            .map(|tag_bar| (tag_bar.handle(event), tag_bar.selected().clone()));
        let Some((response, selected)) = outcome else {
            return;
        };
        on_change.call(selected);
        if response == TagBarResponse::Dismiss {
            on_dismiss.call(());
        }
    };

    let snapshot = bar
        .read()
        .as_ref()
        .map(|tag_bar| {
            (
                tag_bar.arrange(&layout, &metrics),
                tag_bar.open_picker(),
                tag_bar.picker_time(),
                tag_bar.picker_date(),
            )
        })
        .map_err(ToString::to_string);

    let (placed, picker, time, date) = match snapshot {
        Ok(snapshot) => snapshot,
        Err(e) => {
            return rsx! {
                div { class: "tag-bar-error", "Tags unavailable: {e}" }
            }
        }
    };

    let height = placed
        .iter()
        .map(|chip| chip.origin.y + chip.size.height)
        .fold(0.0, f64::max);

    rsx! {
        div {
            class: "tag-bar",
            style: "
                position: relative;
                width: {layout.container_width}px;
                height: {height}px;
            ",

            for placed_chip in placed {
                {
                    let kind = placed_chip.chip.kind;
                    rsx! {
                        TagChip {
                            key: "{kind}",
                            chip: placed_chip.chip,
                            origin: placed_chip.origin,
                            size: placed_chip.size,
                            corner_radius: metrics.corner_radius,
                            font_size: metrics.font_size,
                            onclick: move |_| send(TagBarEvent::Tap(kind)),
                        }
                    }
                }
            }

            PickerOverlay {
                picker,
                time,
                date,
                top: height + PICKER_GAP,
                on_event: move |event| send(event),
            }
        }
    }
}
