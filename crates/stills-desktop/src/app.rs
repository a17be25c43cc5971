//! Main application component

use std::sync::Arc;

use dioxus::prelude::*;
use stills_core::carousel::Carousel;
use stills_core::models::mock_profiles;

use crate::components::{ProfileCarousel, ReminderCard};
use crate::services::{load_desktop_config, DesktopImageCache, HttpImageFetcher};
use crate::state::AppState;
use crate::theme::resolve_theme;

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_signal(load_desktop_config);
    let theme = use_signal(|| resolve_theme(config.peek().theme));
    let profiles = use_signal(mock_profiles);
    let carousel = use_signal(|| Carousel::new(profiles.peek().len()));
    let reminders = use_signal(Vec::new);
    let images = use_signal(|| Arc::new(DesktopImageCache::new(HttpImageFetcher::new())));

    let state = use_context_provider(|| AppState {
        config,
        theme,
        profiles,
        carousel,
        reminders,
        images,
    });

    let colors = theme().palette();
    let selected_profile = state.selected_profile();

    rsx! {
        div {
            class: "app-container",
            style: "
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                gap: 32px;
                font-family: system-ui, -apple-system, sans-serif;
                font-size: 15px;
                background: {colors.bg_primary};
                color: {colors.text_primary};
            ",

            ProfileCarousel {}

            if let Some(profile) = selected_profile {
                ReminderCard { key: "{profile.id}", profile }
            }
        }
    }
}
