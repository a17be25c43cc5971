//! Circular profile carousel.
//!
//! Profiles sit on a ring; the drag position is a fractional index and every
//! profile's placement is derived from its signed distance to that index.

use std::f64::consts::PI;

use crate::util::ieee_remainder;

/// Horizontal radius of the ring, in points.
pub const DEFAULT_X_DISTANCE: f64 = 150.0;

/// Drag translation, in points, that moves the ring by one profile.
const POINTS_PER_ITEM: f64 = 100.0;

/// Scale, opacity and position of one profile card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub offset_x: f64,
    pub scale: f64,
    pub opacity: f64,
    pub z_index: f64,
    /// Cards fade out while another profile is open
    pub visible: bool,
}

/// Drag and selection state of the carousel
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    count: usize,
    x_distance: f64,
    snapped: f64,
    dragging: f64,
    active_index: usize,
    selected: Option<usize>,
}

impl Carousel {
    /// A carousel over `count` profiles. A count of zero is treated as one.
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
            x_distance: DEFAULT_X_DISTANCE,
            snapped: 0.0,
            dragging: 0.0,
            active_index: 0,
            selected: None,
        }
    }

    #[must_use]
    pub const fn selected(&self) -> Option<usize> {
        self.selected
    }

    #[must_use]
    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub const fn dragging(&self) -> f64 {
        self.dragging
    }

    /// Signed distance of `index` from the drag position, in items.
    #[must_use]
    pub fn distance(&self, index: usize) -> f64 {
        ieee_remainder(self.dragging - index as f64, self.count as f64)
    }

    /// Horizontal offset of `index` on the ring, ignoring selection.
    #[must_use]
    pub fn ring_offset(&self, index: usize) -> f64 {
        let angle = PI * 2.0 / self.count as f64 * self.distance(index);
        angle.sin() * self.x_distance
    }

    /// Where to draw the card for `index`.
    #[must_use]
    pub fn placement(&self, index: usize) -> CardPlacement {
        let distance = self.distance(index).abs();
        let is_selected = self.selected == Some(index);

        let offset_x = match self.selected {
            None => self.ring_offset(index),
            Some(selected) if selected == index => 0.0,
            Some(_) => self.ring_offset(index) * 2.0,
        };

        CardPlacement {
            offset_x,
            scale: if is_selected {
                1.3
            } else {
                distance.mul_add(-0.2, 1.0)
            },
            opacity: if is_selected {
                1.0
            } else {
                distance.mul_add(-0.3, 1.0)
            },
            z_index: if is_selected {
                1.0
            } else {
                distance.mul_add(-0.1, 1.0)
            },
            visible: self.selected.is_none(),
        }
    }

    /// Follow a drag in progress. Ignored while a profile is open.
    pub fn drag_changed(&mut self, translation_x: f64) {
        if self.selected.is_some() {
            return;
        }
        self.dragging = self.snapped + translation_x / POINTS_PER_ITEM;
    }

    /// Settle on the nearest profile once the drag ends.
    pub fn drag_ended(&mut self, predicted_translation_x: f64) {
        if self.selected.is_some() {
            return;
        }
        let target = (self.snapped + predicted_translation_x / POINTS_PER_ITEM).round();
        self.dragging = ieee_remainder(target, self.count as f64);
        self.snapped = self.dragging;
        self.active_index = self.normalized_index(self.dragging);
        tracing::debug!("Carousel settled on profile {}", self.active_index);
    }

    /// Open `index`, or close it when it is already open.
    pub fn tap(&mut self, index: usize) {
        if self.selected == Some(index) {
            self.selected = None;
            return;
        }
        let position = index as f64;
        self.dragging = position;
        self.snapped = position;
        self.active_index = index % self.count;
        self.selected = Some(index);
    }

    /// Close the open profile, if any.
    pub fn close(&mut self) {
        self.selected = None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn normalized_index(&self, position: f64) -> usize {
        position.rem_euclid(self.count as f64).round() as usize % self.count
    }
}
