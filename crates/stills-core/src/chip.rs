//! Presentation model for a single tag chip.

use serde::{Deserialize, Serialize};

use crate::layout::Size;
use crate::models::TagKind;

/// Trailing icon drawn after the chip label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChipIcon {
    /// Disclosure chevron for picker chips; points up while expanded
    Chevron { expanded: bool },
    /// Circular arrows for chips that cycle through options
    Cycle,
}

impl ChipIcon {
    /// Icon for a chip of `kind`.
    #[must_use]
    pub const fn for_kind(kind: TagKind, is_selected: bool) -> Option<Self> {
        if kind.has_picker() {
            Some(Self::Chevron {
                expanded: is_selected,
            })
        } else if kind.is_cycling() {
            Some(Self::Cycle)
        } else {
            None
        }
    }

    /// Chevron rotation in degrees.
    #[must_use]
    pub const fn rotation_degrees(self) -> u16 {
        match self {
            Self::Chevron { expanded: true } => 180,
            _ => 0,
        }
    }
}

/// Everything needed to draw one chip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipView {
    pub kind: TagKind,
    pub label: String,
    pub icon: Option<ChipIcon>,
    pub is_selected: bool,
    /// The chip is the exposed entry of the hidden tray
    pub is_hidden_tag: bool,
    pub showing_hidden: bool,
}

impl ChipView {
    #[must_use]
    pub fn new(kind: TagKind, label: impl Into<String>, is_selected: bool) -> Self {
        Self {
            kind,
            label: label.into(),
            icon: ChipIcon::for_kind(kind, is_selected),
            is_selected,
            is_hidden_tag: false,
            showing_hidden: false,
        }
    }

    /// Hidden chips fade out while the tray is closed.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.is_hidden_tag && !self.showing_hidden {
            0.0
        } else {
            1.0
        }
    }
}

/// Typography and padding used to size chips
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChipMetrics {
    pub font_size: f64,
    /// Average glyph advance as a fraction of the font size
    pub glyph_width_factor: f64,
    pub horizontal_padding: f64,
    pub vertical_padding: f64,
    pub corner_radius: f64,
    pub icon_size: f64,
    pub icon_gap: f64,
}

impl Default for ChipMetrics {
    fn default() -> Self {
        Self {
            font_size: 15.0,
            glyph_width_factor: 0.55,
            horizontal_padding: 16.0,
            vertical_padding: 8.0,
            corner_radius: 20.0,
            icon_size: 10.0,
            icon_gap: 4.0,
        }
    }
}

impl ChipMetrics {
    /// Estimated intrinsic size of `chip`.
    #[must_use]
    pub fn measure(&self, chip: &ChipView) -> Size {
        let glyphs = chip.label.chars().count() as f64;
        let text_width = glyphs * self.font_size * self.glyph_width_factor;
        let icon_width = if chip.icon.is_some() {
            self.icon_gap + self.icon_size
        } else {
            0.0
        };
        let line_height = (self.font_size * 1.2).ceil();

        Size::new(
            (text_width + icon_width + self.horizontal_padding * 2.0).ceil(),
            line_height + self.vertical_padding * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_follow_kind() {
        assert_eq!(
            ChipIcon::for_kind(TagKind::Time, true),
            Some(ChipIcon::Chevron { expanded: true })
        );
        assert_eq!(
            ChipIcon::for_kind(TagKind::Repeating, false),
            Some(ChipIcon::Cycle)
        );
        assert_eq!(ChipIcon::for_kind(TagKind::Plus, false), None);
        assert_eq!(ChipIcon::Chevron { expanded: true }.rotation_degrees(), 180);
        assert_eq!(ChipIcon::Cycle.rotation_degrees(), 0);
    }

    #[test]
    fn hidden_chip_fades_while_tray_closed() {
        let mut chip = ChipView::new(TagKind::Color, "Color", false);
        assert!((chip.opacity() - 1.0).abs() < f64::EPSILON);

        chip.is_hidden_tag = true;
        assert!(chip.opacity().abs() < f64::EPSILON);

        chip.showing_hidden = true;
        assert!((chip.opacity() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn measure_accounts_for_icon() {
        let metrics = ChipMetrics::default();
        let plain = metrics.measure(&ChipView::new(TagKind::Color, "Desk", false));
        let cycling = metrics.measure(&ChipView::new(TagKind::Location, "Desk", false));

        assert!((cycling.width - plain.width - 14.0).abs() <= 1.0);
        assert!((plain.height - 34.0).abs() < f64::EPSILON);
    }

    #[test]
    fn longer_labels_are_wider() {
        let metrics = ChipMetrics::default();
        let short = metrics.measure(&ChipView::new(TagKind::Date, "Date", false));
        let long = metrics.measure(&ChipView::new(TagKind::Date, "Apr 15, 2025", false));
        assert!(long.width > short.width);
    }
}
