//! stills-core - Core library for Stills
//!
//! This crate contains the reminder models, the tag bar state machine, the
//! flow layout used to arrange tag chips, and the helpers shared by the CLI
//! and desktop interfaces.

pub mod carousel;
pub mod chip;
pub mod config;
pub mod error;
pub mod format;
pub mod image;
pub mod layout;
pub mod models;
pub mod selection;
pub mod tag_bar;
pub mod util;

pub use error::{Error, Result};
pub use models::{Reminder, ReminderId, Tag, TagId, TagKind};
pub use selection::{SelectedTags, TagValue};
pub use tag_bar::{OpenPicker, TagBar, TagBarEvent, TagBarResponse};
