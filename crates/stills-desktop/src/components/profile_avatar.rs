//! Round profile picture backed by the shared image cache

use dioxus::prelude::*;
use stills_core::image::ImagePhase;

use crate::services::data_uri;
use crate::state::AppState;

#[component]
pub fn ProfileAvatar(url: String, size: u32) -> Element {
    let state = use_context::<AppState>();
    let colors = (state.theme)().palette();

    let phase = use_resource(use_reactive!(|url| async move {
        let cache = (state.images)();
        cache.load(&url).await
    }));

    let frame = format!(
        "width: {size}px; height: {size}px; border-radius: 50%; overflow: hidden; \
         display: flex; align-items: center; justify-content: center; \
         background: {}; color: {};",
        colors.chip_bg, colors.text_secondary
    );

    match phase.read().as_ref() {
        Some(ImagePhase::Image(bytes)) => {
            let src = data_uri(bytes);
            rsx! {
                div { style: "{frame}",
                    img {
                        src: "{src}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                        draggable: false,
                    }
                }
            }
        }
        Some(ImagePhase::Failure(_)) => {
            let glyph_size = size / 3;
            rsx! {
                div { style: "{frame} font-size: {glyph_size}px;", title: "Image unavailable", "?" }
            }
        }
        Some(ImagePhase::Loading) | None => rsx! {
            div { style: "{frame} opacity: 0.6;", "…" }
        },
    }
}
