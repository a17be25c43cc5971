//! Application state shared through the Dioxus context.

use std::sync::Arc;

use dioxus::prelude::*;
use stills_core::carousel::Carousel;
use stills_core::config::StillsConfig;
use stills_core::models::{ProfileInfo, Reminder};

use crate::services::DesktopImageCache;
use crate::theme::ResolvedTheme;

#[derive(Clone, Copy)]
pub struct AppState {
    pub config: Signal<StillsConfig>,
    pub theme: Signal<ResolvedTheme>,
    pub profiles: Signal<Vec<ProfileInfo>>,
    pub carousel: Signal<Carousel>,
    /// Reminders placed during this session, newest last
    pub reminders: Signal<Vec<Reminder>>,
    pub images: Signal<Arc<DesktopImageCache>>,
}

impl AppState {
    /// Profile whose reminder card is open, if any.
    #[must_use]
    pub fn selected_profile(&self) -> Option<ProfileInfo> {
        let selected = (self.carousel)().selected()?;
        (self.profiles)().get(selected).cloned()
    }
}
