//! Circular profile carousel

use dioxus::prelude::*;

use super::ProfileAvatar;
use crate::state::AppState;

/// Drags shorter than this are treated as taps.
const TAP_SLOP: f64 = 4.0;

const CARD_SIZE: u32 = 96;

#[component]
pub fn ProfileCarousel() -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let mut drag_start = use_signal(|| None::<f64>);
    let mut drag_delta = use_signal(|| 0.0_f64);

    let profiles = (state.profiles)();
    let carousel = (state.carousel)();

    rsx! {
        div {
            class: "profile-carousel",
            style: "
                position: relative;
                width: 100%;
                height: 180px;
                user-select: none;
                cursor: grab;
            ",
            onmousedown: move |evt| {
                drag_start.set(Some(evt.client_coordinates().x));
                drag_delta.set(0.0);
            },
            onmousemove: move |evt| {
                if let Some(start) = drag_start() {
                    let delta = evt.client_coordinates().x - start;
                    drag_delta.set(delta);
                    state.carousel.write().drag_changed(delta);
                }
            },
            onmouseup: move |_| {
                if drag_start.take().is_some() {
                    state.carousel.write().drag_ended(drag_delta());
                }
            },
            onmouseleave: move |_| {
                if drag_start.take().is_some() {
                    state.carousel.write().drag_ended(drag_delta());
                }
            },

            for (index, profile) in profiles.into_iter().enumerate() {
                {
                    let placement = carousel.placement(index);
                    let is_selected = carousel.selected() == Some(index);
                    let opacity = if placement.visible || is_selected { placement.opacity } else { 0.0 };
                    let z_index = (placement.z_index * 100.0).round();
                    rsx! {
                        div {
                            key: "{profile.id}",
                            class: "profile-card",
                            style: "
                                position: absolute;
                                left: 50%;
                                top: 40px;
                                display: flex;
                                flex-direction: column;
                                align-items: center;
                                gap: 6px;
                                transform: translateX(calc(-50% + {placement.offset_x}px)) scale({placement.scale});
                                opacity: {opacity};
                                z-index: {z_index};
                                transition: transform 0.25s, opacity 0.25s;
                                cursor: pointer;
                            ",
                            onclick: move |_| {
                                if drag_delta().abs() < TAP_SLOP {
                                    state.carousel.write().tap(index);
                                }
                            },

                            ProfileAvatar { url: profile.image_url.clone(), size: CARD_SIZE }
                            span {
                                style: "font-size: 13px; color: {colors.text_secondary};",
                                "{profile.name}"
                            }
                        }
                    }
                }
            }
        }
    }
}
