//! Reminder model and the text-entry state of the reminder card

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::ProfileInfo;
use crate::error::{Error, Result};
use crate::selection::SelectedTags;
use crate::util::{is_http_url, normalize_text_option, unix_timestamp_ms_now};

/// A unique identifier for a reminder, using UUID v7 (time-sortable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReminderId(Uuid);

impl ReminderId {
    /// Create a new unique reminder ID using UUID v7
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ReminderId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReminderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ReminderId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// A reminder placed in the scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Unique identifier
    pub id: ReminderId,
    /// Who or what the reminder is about
    pub name: String,
    /// Avatar shown next to the text
    pub image_url: String,
    /// Free-text content
    pub content: String,
    /// Metadata chosen in the tag bar
    pub tags: SelectedTags,
    /// Creation timestamp (Unix ms)
    pub created_at: i64,
}

impl Reminder {
    /// Create a reminder, validating the name and image URL.
    pub fn new(
        name: impl Into<String>,
        image_url: impl Into<String>,
        content: impl Into<String>,
        tags: SelectedTags,
    ) -> Result<Self> {
        let name = normalize_text_option(Some(name.into()))
            .ok_or_else(|| Error::InvalidInput("reminder name cannot be empty".to_string()))?;
        let image_url = normalize_text_option(Some(image_url.into()))
            .filter(|url| is_http_url(url))
            .ok_or_else(|| {
                Error::InvalidInput("reminder image URL must use http:// or https://".to_string())
            })?;

        Ok(Self {
            id: ReminderId::new(),
            name,
            image_url,
            content: content.into().trim().to_string(),
            tags,
            created_at: unix_timestamp_ms_now(),
        })
    }
}

/// Text-entry state of the reminder card.
///
/// The card shows an input field until text is submitted, then the text with
/// an edit affordance that brings the field back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    input: String,
    has_submitted: bool,
    is_editing: bool,
}

impl ReminderDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    /// Submit the current input. Returns `false` and changes nothing when the
    /// input is blank.
    pub fn submit(&mut self) -> bool {
        if self.input.trim().is_empty() {
            tracing::debug!("Ignoring submit of blank reminder text");
            return false;
        }
        self.has_submitted = true;
        self.is_editing = false;
        true
    }

    pub fn begin_edit(&mut self) {
        self.is_editing = true;
    }

    #[must_use]
    pub const fn has_submitted(&self) -> bool {
        self.has_submitted
    }

    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.is_editing
    }

    /// Whether the card should show the text field rather than the message.
    #[must_use]
    pub const fn shows_input(&self) -> bool {
        !self.has_submitted || self.is_editing
    }

    /// Turn the submitted draft into a reminder for `profile`.
    pub fn into_reminder(self, profile: &ProfileInfo, tags: SelectedTags) -> Result<Reminder> {
        if !self.has_submitted {
            return Err(Error::InvalidInput(
                "reminder text has not been submitted".to_string(),
            ));
        }
        Reminder::new(&*profile.name, &*profile.image_url, self.input, tags)
    }
}
