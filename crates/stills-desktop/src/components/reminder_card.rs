//! Reminder card for the selected profile
//!
//! Text entry on top, tag bar below. Submitting places the reminder; tapping
//! the placed text brings the field back for editing.

use dioxus::prelude::*;
use stills_core::models::{ProfileInfo, ReminderDraft, ReminderId};
use stills_core::SelectedTags;

use super::{ProfileAvatar, TagBarView};
use crate::state::AppState;

#[component]
pub fn ReminderCard(profile: ProfileInfo) -> Element {
    let mut state = use_context::<AppState>();
    let colors = (state.theme)().palette();
    let config = (state.config)();

    let mut draft = use_signal(ReminderDraft::new);
    let mut tags = use_signal(SelectedTags::new);
    let mut placed = use_signal(|| None::<ReminderId>);

    let submit_profile = profile.clone();
    let mut submit = move || {
        if !draft.write().submit() {
            return;
        }
        let reminder = match draft().into_reminder(&submit_profile, tags()) {
            Ok(reminder) => reminder,
            Err(e) => {
                tracing::error!("Failed to place reminder: {}", e);
                return;
            }
        };

        let mut reminders = state.reminders.write();
        if let Some(previous) = placed() {
            reminders.retain(|existing| existing.id != previous);
        }
        tracing::info!("Placed reminder for {}", reminder.name);
        placed.set(Some(reminder.id));
        reminders.push(reminder);
    };

    let on_tags_change = move |selected: SelectedTags| {
        if let Some(id) = placed() {
            if let Some(reminder) = state
                .reminders
                .write()
                .iter_mut()
                .find(|reminder| reminder.id == id)
            {
                reminder.tags = selected.clone();
            }
        }
        tags.set(selected);
    };

    let current = draft();
    let text = current.input().to_string();
    let profile_name = profile.name.clone();
    let clock = config.clock;
    let summary = tags().display_strings(clock).join(" · ");

    rsx! {
        div {
            class: "reminder-card",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 20px 24px;
                border-radius: 24px;
                background: {colors.bg_card};
                box-shadow: 0 8px 32px rgba(0, 0, 0, 0.12);
            ",

            div {
                style: "display: flex; align-items: center; gap: 12px;",
                ProfileAvatar { url: profile.image_url.clone(), size: 40 }
                span { style: "font-weight: 600;", "{profile.name}" }
            }

            if current.shows_input() {
                input {
                    r#type: "text",
                    placeholder: "Remind me to...",
                    value: "{text}",
                    autofocus: true,
                    oninput: move |evt| draft.write().set_input(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            submit();
                        }
                    },
                    style: "
                        width: {config.container_width}px;
                        padding: 10px 12px;
                        border: 1px solid {colors.border};
                        border-radius: 10px;
                        font-size: 17px;
                        background: transparent;
                        color: {colors.text_primary};
                        outline: none;
                    ",
                }
            } else {
                div {
                    class: "reminder-text",
                    style: "
                        max-width: {config.container_width}px;
                        font-size: 17px;
                        cursor: text;
                    ",
                    onclick: move |_| draft.write().begin_edit(),
                    "{text}"
                }
            }

            TagBarView {
                options: config.tag_bar_options(),
                layout: config.flow_layout(),
                metrics: config.chip,
                on_change: on_tags_change,
                on_dismiss: move |()| {
                    tracing::info!("Closing reminder card for {}", profile_name);
                    state.carousel.write().close();
                },
            }

            if !summary.is_empty() {
                div {
                    style: "font-size: 12px; color: {colors.text_secondary};",
                    "{summary}"
                }
            }
        }
    }
}
