//! Data models for Stills

mod profile;
mod reminder;
mod settings;
mod tag;

pub use profile::{mock_profiles, ProfileInfo};
pub use reminder::{Reminder, ReminderDraft, ReminderId};
pub use settings::{ClockStyle, ThemeMode};
pub use tag::{Tag, TagId, TagKind, LOCATIONS, REPEAT_OPTIONS};
