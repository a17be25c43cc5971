//! Time and date pickers shown under the tag bar

use chrono::{NaiveDate, NaiveTime};
use dioxus::prelude::*;
use stills_core::format::{parse_date, parse_time};
use stills_core::{OpenPicker, TagBarEvent};

use crate::state::AppState;

#[component]
pub fn PickerOverlay(
    picker: OpenPicker,
    time: Option<NaiveTime>,
    date: Option<NaiveDate>,
    top: f64,
    on_event: EventHandler<TagBarEvent>,
) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let input_style = format!(
        "padding: 6px 10px; border: 1px solid {}; border-radius: 6px; \
         font-size: 14px; background: transparent; color: {};",
        colors.border, colors.text_primary
    );

    let input = match picker {
        OpenPicker::None => return rsx! {},
        OpenPicker::Time => {
            let value = time.map(|time| time.format("%H:%M").to_string()).unwrap_or_default();
            rsx! {
                input {
                    r#type: "time",
                    value: "{value}",
                    style: "{input_style}",
                    oninput: move |evt| match parse_time(&evt.value()) {
                        Ok(time) => on_event.call(TagBarEvent::TimeChanged(time)),
                        Err(e) => tracing::warn!("Ignoring time picker value: {}", e),
                    },
                }
            }
        }
        OpenPicker::Date => {
            let value = date.map(|date| date.format("%Y-%m-%d").to_string()).unwrap_or_default();
            rsx! {
                input {
                    r#type: "date",
                    value: "{value}",
                    style: "{input_style}",
                    oninput: move |evt| match parse_date(&evt.value()) {
                        Ok(date) => on_event.call(TagBarEvent::DateChanged(date)),
                        Err(e) => tracing::warn!("Ignoring date picker value: {}", e),
                    },
                }
            }
        }
    };

    rsx! {
        div {
            class: "picker-overlay",
            style: "
                position: absolute;
                left: 0;
                top: {top}px;
                display: flex;
                align-items: center;
                gap: 8px;
                padding: 10px 12px;
                border-radius: 12px;
                background: {colors.overlay};
                box-shadow: 0 4px 16px rgba(0, 0, 0, 0.18);
                z-index: 10;
            ",

            {input}

            button {
                style: "
                    padding: 6px 14px;
                    border: none;
                    border-radius: 6px;
                    background: {colors.accent};
                    color: {colors.accent_text};
                    cursor: pointer;
                ",
                onclick: move |_| on_event.call(TagBarEvent::Commit),
                "Set"
            }
        }
    }
}
