//! Tag model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Default places a location chip cycles through.
pub const LOCATIONS: [&str; 4] = ["Front door", "Kitchen", "Desk", "Bedroom"];

/// Default repeat intervals a repeating chip cycles through.
pub const REPEAT_OPTIONS: [&str; 4] = ["Doesn't repeat", "Daily", "Weekly", "Monthly"];

/// A unique identifier for a tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagId(Uuid);

impl TagId {
    /// Create a new unique tag ID
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Get the string representation of this ID
    #[must_use]
    pub fn as_str(&self) -> String {
        self.0.to_string()
    }
}

impl Default for TagId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TagId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// What a chip in the tag bar stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagKind {
    Time,
    Date,
    Location,
    Repeating,
    Plus,
    Color,
    Navigation,
}

impl TagKind {
    /// All kinds, in catalog order.
    pub const ALL: [Self; 7] = [
        Self::Time,
        Self::Date,
        Self::Location,
        Self::Repeating,
        Self::Plus,
        Self::Color,
        Self::Navigation,
    ];

    /// Placeholder title shown before a value is chosen.
    #[must_use]
    pub const fn default_title(self) -> &'static str {
        match self {
            Self::Time => "Time",
            Self::Date => "Date",
            Self::Location => "Location",
            Self::Repeating => "Repeats",
            Self::Plus => "+",
            Self::Color => "Color",
            Self::Navigation => "Navigation",
        }
    }

    /// Kinds whose tap advances through a fixed option list.
    #[must_use]
    pub const fn is_cycling(self) -> bool {
        matches!(self, Self::Location | Self::Repeating)
    }

    /// Kinds whose tap opens a picker.
    #[must_use]
    pub const fn has_picker(self) -> bool {
        matches!(self, Self::Time | Self::Date)
    }

    /// Stable lowercase name used in the CLI and config files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Date => "date",
            Self::Location => "location",
            Self::Repeating => "repeating",
            Self::Plus => "plus",
            Self::Color => "color",
            Self::Navigation => "navigation",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "time" => Ok(Self::Time),
            "date" => Ok(Self::Date),
            "location" => Ok(Self::Location),
            "repeating" | "repeat" | "repeats" => Ok(Self::Repeating),
            "plus" | "+" => Ok(Self::Plus),
            "color" => Ok(Self::Color),
            "navigation" => Ok(Self::Navigation),
            _ => Err(Error::InvalidInput(format!("unknown tag kind '{s}'"))),
        }
    }
}

/// One chip of metadata in the tag bar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Unique identifier
    pub id: TagId,
    /// What this tag stands for
    pub kind: TagKind,
    /// Display label; starts as the placeholder and changes once a value is chosen
    pub title: String,
    /// Display flag refreshed from the selection, not authoritative
    pub is_selected: bool,
    options: Vec<String>,
}

impl Tag {
    /// Create a tag without options.
    ///
    /// Fails for cycling kinds, which need at least one option.
    pub fn new(kind: TagKind) -> Result<Self> {
        Self::with_options(kind, Vec::new())
    }

    /// Create a tag with an option list.
    ///
    /// Cycling kinds need a non-empty list; every other kind must not carry
    /// options. The tag starts with its kind's placeholder title.
    pub fn with_options(kind: TagKind, options: Vec<String>) -> Result<Self> {
        match (kind.is_cycling(), options.is_empty()) {
            (true, true) => {
                return Err(Error::InvalidTag {
                    kind,
                    reason: "cycling tags need at least one option".to_string(),
                })
            }
            (false, false) => {
                return Err(Error::InvalidTag {
                    kind,
                    reason: "only location and repeating tags take options".to_string(),
                })
            }
            _ => {}
        }

        Ok(Self {
            id: TagId::new(),
            kind,
            title: kind.default_title().to_string(),
            is_selected: false,
            options,
        })
    }

    /// Ordered option list; empty unless the kind is cycling.
    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Whether the title still shows the kind's placeholder.
    #[must_use]
    pub fn has_default_title(&self) -> bool {
        self.title == self.kind.default_title()
    }
}
