//! Chosen tag values.
//!
//! Each tag kind owns at most one slot, so choosing a new location or a new
//! picker time replaces the previous value instead of leaving it behind.
//! The set of display strings the host shows is derived from the slots.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::format::{format_date, format_time};
use crate::models::{ClockStyle, TagKind};

/// The value chosen for one tag kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum TagValue {
    Time(NaiveTime),
    Date(NaiveDate),
    Location(String),
    Repeat(String),
    /// A chip that is either on or off (color, navigation)
    Marker(TagKind),
}

impl TagValue {
    /// The slot this value occupies.
    #[must_use]
    pub const fn kind(&self) -> TagKind {
        match self {
            Self::Time(_) => TagKind::Time,
            Self::Date(_) => TagKind::Date,
            Self::Location(_) => TagKind::Location,
            Self::Repeat(_) => TagKind::Repeating,
            Self::Marker(kind) => *kind,
        }
    }

    /// Display string for chips and summaries.
    #[must_use]
    pub fn display(&self, clock: ClockStyle) -> String {
        match self {
            Self::Time(time) => format_time(*time, clock),
            Self::Date(date) => format_date(*date),
            Self::Location(value) | Self::Repeat(value) => value.clone(),
            Self::Marker(kind) => kind.default_title().to_string(),
        }
    }
}

/// One value slot per tag kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTags {
    slots: BTreeMap<TagKind, TagValue>,
}

impl SelectedTags {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` in its kind's slot, returning what it replaced.
    pub fn set(&mut self, value: TagValue) -> Option<TagValue> {
        self.slots.insert(value.kind(), value)
    }

    #[must_use]
    pub fn get(&self, kind: TagKind) -> Option<&TagValue> {
        self.slots.get(&kind)
    }

    #[must_use]
    pub fn contains(&self, kind: TagKind) -> bool {
        self.slots.contains_key(&kind)
    }

    /// Flip an on/off marker. Returns whether the marker is now set.
    pub fn toggle_marker(&mut self, kind: TagKind) -> bool {
        if self.slots.remove(&kind).is_some() {
            false
        } else {
            self.slots.insert(kind, TagValue::Marker(kind));
            true
        }
    }

    #[must_use]
    pub fn time(&self) -> Option<NaiveTime> {
        match self.get(TagKind::Time) {
            Some(TagValue::Time(time)) => Some(*time),
            _ => None,
        }
    }

    #[must_use]
    pub fn date(&self) -> Option<NaiveDate> {
        match self.get(TagKind::Date) {
            Some(TagValue::Date(date)) => Some(*date),
            _ => None,
        }
    }

    /// Values in kind order.
    pub fn iter(&self) -> impl Iterator<Item = &TagValue> {
        self.slots.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Display strings in kind order.
    #[must_use]
    pub fn display_strings(&self, clock: ClockStyle) -> Vec<String> {
        self.iter().map(|value| value.display(clock)).collect()
    }

    /// The set of display strings, as the host consumes it.
    #[must_use]
    pub fn display_set(&self, clock: ClockStyle) -> BTreeSet<String> {
        self.iter().map(|value| value.display(clock)).collect()
    }
}
