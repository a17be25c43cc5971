//! Tag bar state machine.
//!
//! The tag bar owns the chips shown under a reminder, which picker (if any) is
//! open, and the values chosen so far. Every input is a [`TagBarEvent`]; each
//! one is handled to completion before the next and can never fail.
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use stills_core::tag_bar::{TagBarOptions, TagBarResponse};
//! use stills_core::{OpenPicker, TagBar, TagBarEvent, TagKind};
//!
//! let now = NaiveDate::from_ymd_opt(2025, 4, 15)
//!     .unwrap()
//!     .and_hms_opt(9, 0, 0)
//!     .unwrap();
//! let mut bar = TagBar::new(TagBarOptions::extended()).unwrap();
//!
//! let _ = bar.handle_at(TagBarEvent::Tap(TagKind::Time), now);
//! assert_eq!(bar.open_picker(), OpenPicker::Time);
//!
//! let half_past_two = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
//! let _ = bar.handle_at(TagBarEvent::TimeChanged(half_past_two), now);
//! assert_eq!(bar.title(TagKind::Time), Some("2:30 PM"));
//!
//! assert_eq!(bar.handle_at(TagBarEvent::Commit, now), TagBarResponse::None);
//! assert_eq!(bar.open_picker(), OpenPicker::None);
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::chip::{ChipMetrics, ChipView};
use crate::error::Result;
use crate::format::{format_date, format_time};
use crate::layout::{Arrangement, FlowLayout, Point, Size};
use crate::models::{ClockStyle, Tag, TagKind, LOCATIONS, REPEAT_OPTIONS};
use crate::selection::{SelectedTags, TagValue};

/// Which picker overlay is open. At most one can be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpenPicker {
    #[default]
    None,
    Time,
    Date,
}

/// Input delivered by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagBarEvent {
    /// A chip was tapped
    Tap(TagKind),
    /// The time picker moved to a new value
    TimeChanged(NaiveTime),
    /// The date picker moved to a new value
    DateChanged(NaiveDate),
    /// The picker's "Set" button was pressed
    Commit,
    /// The host asked to close the reminder surface
    Dismiss,
}

/// What the host has to do after an event
#[must_use]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagBarResponse {
    #[default]
    None,
    /// Tear down the whole reminder surface
    Dismiss,
}

/// Catalog and formatting choices for a tag bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBarOptions {
    /// Offer the "+" affordance with a tray of hidden tags
    pub extended: bool,
    pub clock: ClockStyle,
    pub locations: Vec<String>,
    pub repeat_options: Vec<String>,
}

impl TagBarOptions {
    /// Time, date, location and repeat chips, all visible.
    #[must_use]
    pub fn basic() -> Self {
        Self {
            extended: false,
            clock: ClockStyle::default(),
            locations: LOCATIONS.iter().map(ToString::to_string).collect(),
            repeat_options: REPEAT_OPTIONS.iter().map(ToString::to_string).collect(),
        }
    }

    /// Time, date, location and "+", with color, repeat and navigation
    /// revealed one at a time from the hidden tray.
    #[must_use]
    pub fn extended() -> Self {
        Self {
            extended: true,
            ..Self::basic()
        }
    }
}

impl Default for TagBarOptions {
    fn default() -> Self {
        Self::extended()
    }
}

/// A chip with its place in the flow layout
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedChip {
    pub chip: ChipView,
    pub origin: Point,
    pub size: Size,
}

/// State of the tag bar under one reminder
#[derive(Debug, Clone)]
pub struct TagBar {
    visible: Vec<Tag>,
    hidden: Vec<Tag>,
    extended: bool,
    clock: ClockStyle,
    open_picker: OpenPicker,
    picker_time: Option<NaiveTime>,
    picker_date: Option<NaiveDate>,
    location_cursor: usize,
    repeat_cursor: usize,
    showing_hidden: bool,
    hidden_cursor: usize,
    selected: SelectedTags,
}

impl TagBar {
    /// Build a tag bar from its catalog.
    ///
    /// Fails when an option list for a cycling chip is empty.
    pub fn new(options: TagBarOptions) -> Result<Self> {
        let time = Tag::new(TagKind::Time)?;
        let date = Tag::new(TagKind::Date)?;
        let mut location = Tag::with_options(TagKind::Location, options.locations)?;
        // The location chip shows its first place; the repeat chip keeps "Repeats"
        if let Some(first) = location.options().first().cloned() {
            location.title = first;
        }
        let repeating = Tag::with_options(TagKind::Repeating, options.repeat_options)?;

        let (visible, hidden) = if options.extended {
            (
                vec![time, date, location, Tag::new(TagKind::Plus)?],
                vec![
                    Tag::new(TagKind::Color)?,
                    repeating,
                    Tag::new(TagKind::Navigation)?,
                ],
            )
        } else {
            (vec![time, date, location, repeating], Vec::new())
        };

        Ok(Self {
            visible,
            hidden,
            extended: options.extended,
            clock: options.clock,
            open_picker: OpenPicker::None,
            picker_time: None,
            picker_date: None,
            location_cursor: 0,
            repeat_cursor: 0,
            showing_hidden: false,
            hidden_cursor: 0,
            selected: SelectedTags::new(),
        })
    }

    /// Handle an event using the local wall clock.
    pub fn handle(&mut self, event: TagBarEvent) -> TagBarResponse {
        self.handle_at(event, Local::now().naive_local())
    }

    /// Handle an event; `now` seeds pickers opened for the first time.
    pub fn handle_at(&mut self, event: TagBarEvent, now: NaiveDateTime) -> TagBarResponse {
        let response = match event {
            TagBarEvent::Tap(kind) => self.tap(kind, now),
            TagBarEvent::TimeChanged(time) => {
                self.change_time(time);
                TagBarResponse::None
            }
            TagBarEvent::DateChanged(date) => {
                self.change_date(date);
                TagBarResponse::None
            }
            TagBarEvent::Commit => {
                self.commit();
                TagBarResponse::None
            }
            TagBarEvent::Dismiss => {
                tracing::info!("Dismiss requested for reminder surface");
                TagBarResponse::Dismiss
            }
        };
        self.refresh_selection_flags();
        response
    }

    fn tap(&mut self, kind: TagKind, now: NaiveDateTime) -> TagBarResponse {
        if self.exposed_hidden().is_some_and(|tag| tag.kind == kind) {
            self.reveal_exposed();
            return TagBarResponse::None;
        }
        if !self.visible.iter().any(|tag| tag.kind == kind) {
            tracing::debug!("Ignoring tap on {} chip that is not visible", kind);
            return TagBarResponse::None;
        }

        match kind {
            TagKind::Time => return self.tap_time(now),
            TagKind::Date => self.tap_date(now),
            TagKind::Location | TagKind::Repeating => self.cycle(kind),
            TagKind::Plus => self.tap_plus(),
            TagKind::Color | TagKind::Navigation => {
                let on = self.selected.toggle_marker(kind);
                tracing::debug!("{} marker is now {}", kind, if on { "on" } else { "off" });
            }
        }
        TagBarResponse::None
    }

    fn tap_time(&mut self, now: NaiveDateTime) -> TagBarResponse {
        if self.open_picker == OpenPicker::Time {
            tracing::info!("Time chip tapped with picker open, dismissing");
            return TagBarResponse::Dismiss;
        }

        self.open_picker = OpenPicker::Time;
        let clock = self.clock;
        let seeded = minute_precision(now.time());
        if let Some(tag) = Self::find_mut(&mut self.visible, TagKind::Time) {
            if tag.has_default_title() {
                self.picker_time = Some(seeded);
                tag.title = format_time(seeded, clock);
            }
        }
        tracing::debug!("Opened time picker");
        TagBarResponse::None
    }

    fn tap_date(&mut self, now: NaiveDateTime) {
        if self.open_picker == OpenPicker::Date {
            self.open_picker = OpenPicker::None;
            tracing::debug!("Closed date picker");
            return;
        }

        self.open_picker = OpenPicker::Date;
        let today = now.date();
        if let Some(tag) = Self::find_mut(&mut self.visible, TagKind::Date) {
            if tag.has_default_title() {
                self.picker_date = Some(today);
                tag.title = format_date(today);
            }
        }
        tracing::debug!("Opened date picker");
    }

    fn cycle(&mut self, kind: TagKind) {
        let Some(tag) = Self::find_mut(&mut self.visible, kind) else {
            return;
        };
        let cursor = if kind == TagKind::Location {
            &mut self.location_cursor
        } else {
            &mut self.repeat_cursor
        };

        let options = tag.options();
        *cursor = (*cursor + 1) % options.len();
        let option = options[*cursor].clone();
        tag.title.clone_from(&option);

        let value = if kind == TagKind::Location {
            TagValue::Location(option)
        } else {
            TagValue::Repeat(option)
        };
        let previous = self.selected.set(value);
        tracing::debug!(
            "Cycled {} chip to option {} (replaced {:?})",
            kind,
            *cursor,
            previous
        );
    }

    fn tap_plus(&mut self) {
        if self.hidden.is_empty() {
            tracing::debug!("Plus tapped with no hidden tags left");
            return;
        }

        if !self.showing_hidden {
            self.showing_hidden = true;
            self.hidden_cursor = 0;
        } else if self.hidden_cursor + 1 < self.hidden.len() {
            self.hidden_cursor += 1;
        } else {
            self.showing_hidden = false;
            self.hidden_cursor = 0;
        }
    }

    fn reveal_exposed(&mut self) {
        let tag = self.hidden.remove(self.hidden_cursor);
        let at = self
            .visible
            .iter()
            .position(|visible| visible.kind == TagKind::Plus)
            .unwrap_or(self.visible.len());
        tracing::debug!("Moved {} chip from hidden tray to position {}", tag.kind, at);
        self.visible.insert(at, tag);

        self.hidden_cursor = 0;
        if self.hidden.is_empty() {
            self.showing_hidden = false;
        }
    }

    fn change_time(&mut self, time: NaiveTime) {
        self.picker_time = Some(time);
        let title = format_time(time, self.clock);
        if let Some(tag) = Self::find_mut(&mut self.visible, TagKind::Time) {
            tag.title = title;
        }
        self.selected.set(TagValue::Time(time));
    }

    fn change_date(&mut self, date: NaiveDate) {
        self.picker_date = Some(date);
        if let Some(tag) = Self::find_mut(&mut self.visible, TagKind::Date) {
            tag.title = format_date(date);
        }
        self.selected.set(TagValue::Date(date));
    }

    fn commit(&mut self) {
        match self.open_picker {
            OpenPicker::None => {
                tracing::debug!("Commit with no picker open");
                return;
            }
            OpenPicker::Time => {
                if let Some(time) = self.picker_time {
                    self.change_time(time);
                }
            }
            OpenPicker::Date => {
                if let Some(date) = self.picker_date {
                    self.change_date(date);
                }
            }
        }
        tracing::info!("Committed {:?} picker", self.open_picker);
        self.open_picker = OpenPicker::None;
    }

    fn refresh_selection_flags(&mut self) {
        let open_picker = self.open_picker;
        let showing_hidden = self.showing_hidden;
        let selected = &self.selected;
        for tag in self.visible.iter_mut().chain(self.hidden.iter_mut()) {
            tag.is_selected = match tag.kind {
                TagKind::Time => open_picker == OpenPicker::Time || selected.contains(tag.kind),
                TagKind::Date => open_picker == OpenPicker::Date || selected.contains(tag.kind),
                TagKind::Plus => showing_hidden,
                _ => selected.contains(tag.kind),
            };
        }
    }

    fn find_mut(tags: &mut [Tag], kind: TagKind) -> Option<&mut Tag> {
        tags.iter_mut().find(|tag| tag.kind == kind)
    }

    /// The hidden tag currently offered next to "+", if the tray is open.
    #[must_use]
    pub fn exposed_hidden(&self) -> Option<&Tag> {
        if self.showing_hidden {
            self.hidden.get(self.hidden_cursor)
        } else {
            None
        }
    }

    /// Chips to draw, in order: the visible tags, then the exposed hidden tag.
    #[must_use]
    pub fn chips(&self) -> Vec<ChipView> {
        let mut chips = self
            .visible
            .iter()
            .map(|tag| {
                let mut chip = ChipView::new(tag.kind, tag.title.clone(), tag.is_selected);
                chip.showing_hidden = self.showing_hidden;
                chip
            })
            .collect::<Vec<_>>();

        if let Some(tag) = self.exposed_hidden() {
            let mut chip = ChipView::new(tag.kind, tag.title.clone(), tag.is_selected);
            chip.is_hidden_tag = true;
            chip.showing_hidden = true;
            chips.push(chip);
        }
        chips
    }

    /// Measure the chips and flow them into `layout`.
    #[must_use]
    pub fn arrange(&self, layout: &FlowLayout, metrics: &ChipMetrics) -> Vec<PlacedChip> {
        let chips = self.chips();
        let sizes = chips
            .iter()
            .map(|chip| metrics.measure(chip))
            .collect::<Vec<_>>();
        let Arrangement { offsets, .. } = layout.arrange(&sizes);

        chips
            .into_iter()
            .zip(sizes)
            .zip(offsets)
            .map(|((chip, size), origin)| PlacedChip { chip, origin, size })
            .collect()
    }

    #[must_use]
    pub const fn open_picker(&self) -> OpenPicker {
        self.open_picker
    }

    #[must_use]
    pub const fn selected(&self) -> &SelectedTags {
        &self.selected
    }

    #[must_use]
    pub fn visible(&self) -> &[Tag] {
        &self.visible
    }

    #[must_use]
    pub fn hidden(&self) -> &[Tag] {
        &self.hidden
    }

    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.extended
    }

    #[must_use]
    pub const fn clock(&self) -> ClockStyle {
        self.clock
    }

    #[must_use]
    pub const fn showing_hidden(&self) -> bool {
        self.showing_hidden
    }

    #[must_use]
    pub const fn hidden_cursor(&self) -> usize {
        self.hidden_cursor
    }

    #[must_use]
    pub const fn picker_time(&self) -> Option<NaiveTime> {
        self.picker_time
    }

    #[must_use]
    pub const fn picker_date(&self) -> Option<NaiveDate> {
        self.picker_date
    }

    /// Option index for a cycling kind.
    #[must_use]
    pub const fn cursor(&self, kind: TagKind) -> Option<usize> {
        match kind {
            TagKind::Location => Some(self.location_cursor),
            TagKind::Repeating => Some(self.repeat_cursor),
            _ => None,
        }
    }

    /// Current title of the tag of `kind`, wherever it lives.
    #[must_use]
    pub fn title(&self, kind: TagKind) -> Option<&str> {
        self.visible
            .iter()
            .chain(self.hidden.iter())
            .find(|tag| tag.kind == kind)
            .map(|tag| tag.title.as_str())
    }
}

fn minute_precision(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(9, 5, 42)
            .unwrap()
    }

    fn extended() -> TagBar {
        TagBar::new(TagBarOptions::extended()).unwrap()
    }

    fn basic() -> TagBar {
        TagBar::new(TagBarOptions::basic()).unwrap()
    }

    fn tap(bar: &mut TagBar, kind: TagKind) -> TagBarResponse {
        bar.handle_at(TagBarEvent::Tap(kind), now())
    }

    fn kinds(tags: &[Tag]) -> Vec<TagKind> {
        tags.iter().map(|tag| tag.kind).collect()
    }

    fn display_set(bar: &TagBar) -> BTreeSet<String> {
        bar.selected().display_set(bar.clock())
    }

    #[test]
    fn catalogs_match_variant() {
        let bar = extended();
        assert_eq!(
            kinds(bar.visible()),
            vec![TagKind::Time, TagKind::Date, TagKind::Location, TagKind::Plus]
        );
        assert_eq!(
            kinds(bar.hidden()),
            vec![TagKind::Color, TagKind::Repeating, TagKind::Navigation]
        );

        let bar = basic();
        assert_eq!(
            kinds(bar.visible()),
            vec![
                TagKind::Time,
                TagKind::Date,
                TagKind::Location,
                TagKind::Repeating
            ]
        );
        assert!(bar.hidden().is_empty());
    }

    #[test]
    fn initial_titles_match_catalog() {
        for bar in [extended(), basic()] {
            assert_eq!(bar.title(TagKind::Location), Some("Front door"));
            assert_eq!(bar.title(TagKind::Repeating), Some("Repeats"));
            assert_eq!(bar.title(TagKind::Time), Some("Time"));
            assert_eq!(bar.title(TagKind::Date), Some("Date"));
        }
    }

    #[test]
    fn empty_option_list_is_rejected() {
        let options = TagBarOptions {
            locations: Vec::new(),
            ..TagBarOptions::basic()
        };
        assert!(TagBar::new(options).is_err());
    }

    #[test]
    fn time_tap_opens_picker_seeded_with_now() {
        let mut bar = extended();
        assert_eq!(tap(&mut bar, TagKind::Time), TagBarResponse::None);

        assert_eq!(bar.open_picker(), OpenPicker::Time);
        assert_eq!(bar.picker_time(), NaiveTime::from_hms_opt(9, 5, 0));
        assert_eq!(bar.title(TagKind::Time), Some("9:05 AM"));
        // Opening alone does not choose a value.
        assert!(bar.selected().is_empty());
        assert!(bar.visible()[0].is_selected);
    }

    #[test]
    fn time_tap_with_picker_open_dismisses() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Time);
        assert_eq!(tap(&mut bar, TagKind::Time), TagBarResponse::Dismiss);
        assert_eq!(bar.open_picker(), OpenPicker::Time);
    }

    #[test]
    fn reopening_time_picker_keeps_chosen_value() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Time);
        let chosen = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
        let _ = bar.handle_at(TagBarEvent::TimeChanged(chosen), now());
        let _ = bar.handle_at(TagBarEvent::Commit, now());

        let _ = tap(&mut bar, TagKind::Time);
        assert_eq!(bar.picker_time(), Some(chosen));
        assert_eq!(bar.title(TagKind::Time), Some("6:00 PM"));
    }

    #[test]
    fn date_tap_toggles_and_closes_time() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Time);
        let _ = tap(&mut bar, TagKind::Date);
        assert_eq!(bar.open_picker(), OpenPicker::Date);
        assert_eq!(bar.title(TagKind::Date), Some("Apr 15, 2025"));

        let _ = tap(&mut bar, TagKind::Date);
        assert_eq!(bar.open_picker(), OpenPicker::None);
    }

    #[test]
    fn time_tap_closes_date() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Date);
        let _ = tap(&mut bar, TagKind::Time);
        assert_eq!(bar.open_picker(), OpenPicker::Time);
    }

    #[test]
    fn cycling_index_is_tap_count_mod_options() {
        let mut bar = extended();
        for taps in 1..=9 {
            let _ = tap(&mut bar, TagKind::Location);
            let expected = LOCATIONS[taps % LOCATIONS.len()];
            assert_eq!(bar.cursor(TagKind::Location), Some(taps % LOCATIONS.len()));
            assert_eq!(bar.title(TagKind::Location), Some(expected));
            assert_eq!(display_set(&bar), BTreeSet::from([expected.to_string()]));
        }
    }

    #[test]
    fn repeat_cycles_in_basic_variant() {
        let mut bar = basic();
        let _ = tap(&mut bar, TagKind::Repeating);
        let _ = tap(&mut bar, TagKind::Repeating);
        assert_eq!(bar.cursor(TagKind::Repeating), Some(2));
        assert_eq!(
            bar.selected().get(TagKind::Repeating),
            Some(&TagValue::Repeat("Weekly".to_string()))
        );
    }

    #[test]
    fn plus_walks_hidden_tags_then_closes() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        assert!(bar.showing_hidden());
        assert_eq!(bar.exposed_hidden().map(|tag| tag.kind), Some(TagKind::Color));

        let _ = tap(&mut bar, TagKind::Plus);
        assert_eq!(
            bar.exposed_hidden().map(|tag| tag.kind),
            Some(TagKind::Repeating)
        );
        let _ = tap(&mut bar, TagKind::Plus);
        assert_eq!(
            bar.exposed_hidden().map(|tag| tag.kind),
            Some(TagKind::Navigation)
        );

        let _ = tap(&mut bar, TagKind::Plus);
        assert!(!bar.showing_hidden());
        assert_eq!(bar.hidden_cursor(), 0);
        assert!(bar.exposed_hidden().is_none());
    }

    #[test]
    fn plus_is_ignored_in_basic_variant() {
        let mut bar = basic();
        let _ = tap(&mut bar, TagKind::Plus);
        assert!(!bar.showing_hidden());
    }

    #[test]
    fn revealing_hidden_tag_inserts_before_plus() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        let _ = tap(&mut bar, TagKind::Plus);
        let _ = tap(&mut bar, TagKind::Repeating);

        assert_eq!(
            kinds(bar.visible()),
            vec![
                TagKind::Time,
                TagKind::Date,
                TagKind::Location,
                TagKind::Repeating,
                TagKind::Plus
            ]
        );
        assert_eq!(
            kinds(bar.hidden()),
            vec![TagKind::Color, TagKind::Navigation]
        );
        assert_eq!(bar.hidden_cursor(), 0);
        assert!(bar.showing_hidden());
        // Revealing does not also cycle the tag.
        assert!(bar.selected().is_empty());

        let _ = tap(&mut bar, TagKind::Repeating);
        assert_eq!(bar.title(TagKind::Repeating), Some("Daily"));
    }

    #[test]
    fn revealing_last_hidden_tag_closes_tray() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        // After each reveal the tray stays open on the next hidden tag.
        for kind in [TagKind::Color, TagKind::Repeating, TagKind::Navigation] {
            assert_eq!(bar.exposed_hidden().map(|tag| tag.kind), Some(kind));
            let _ = tap(&mut bar, kind);
        }

        assert!(bar.hidden().is_empty());
        assert!(!bar.showing_hidden());
        assert_eq!(bar.hidden_cursor(), 0);
        assert_eq!(bar.visible().last().map(|tag| tag.kind), Some(TagKind::Plus));
    }

    #[test]
    fn plus_with_empty_tray_is_noop() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        while let Some(exposed) = bar.exposed_hidden().map(|tag| tag.kind) {
            let _ = tap(&mut bar, exposed);
        }
        assert!(bar.hidden().is_empty());
        let before_visible = kinds(bar.visible());

        let _ = tap(&mut bar, TagKind::Plus);
        assert!(!bar.showing_hidden());
        assert_eq!(bar.hidden_cursor(), 0);
        assert_eq!(kinds(bar.visible()), before_visible);
    }

    #[test]
    fn tapping_unexposed_hidden_tag_is_ignored() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Navigation);
        assert_eq!(bar.hidden().len(), 3);
        assert!(bar.selected().is_empty());
    }

    #[test]
    fn marker_chips_toggle() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        let _ = tap(&mut bar, TagKind::Color);
        let _ = tap(&mut bar, TagKind::Color);
        assert!(bar.selected().contains(TagKind::Color));
        assert!(bar.visible().iter().any(|tag| tag.is_selected));

        let _ = tap(&mut bar, TagKind::Color);
        assert!(!bar.selected().contains(TagKind::Color));
    }

    #[test]
    fn picker_changes_replace_previous_value() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Time);
        for minute in [10, 11, 12] {
            let time = NaiveTime::from_hms_opt(14, minute, 0).unwrap();
            let _ = bar.handle_at(TagBarEvent::TimeChanged(time), now());
        }
        assert_eq!(display_set(&bar), BTreeSet::from(["2:12 PM".to_string()]));
    }

    #[test]
    fn commit_without_picker_is_noop() {
        let mut bar = extended();
        assert_eq!(
            bar.handle_at(TagBarEvent::Commit, now()),
            TagBarResponse::None
        );
        assert!(bar.selected().is_empty());
    }

    #[test]
    fn commit_date_records_seeded_value() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Date);
        let _ = bar.handle_at(TagBarEvent::Commit, now());
        assert_eq!(bar.open_picker(), OpenPicker::None);
        assert_eq!(bar.selected().date(), Some(now().date()));
        assert!(bar.visible()[1].is_selected);
    }

    #[test]
    fn dismiss_event_requests_dismiss() {
        let mut bar = basic();
        assert_eq!(
            bar.handle_at(TagBarEvent::Dismiss, now()),
            TagBarResponse::Dismiss
        );
    }

    #[test]
    fn time_picker_scenario() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Time);
        assert_eq!(bar.open_picker(), OpenPicker::Time);

        let half_past_two = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let _ = bar.handle_at(TagBarEvent::TimeChanged(half_past_two), now());
        assert_eq!(bar.title(TagKind::Time), Some("2:30 PM"));
        let expected = BTreeSet::from(["2:30 PM".to_string()]);
        assert_eq!(display_set(&bar), expected);

        let _ = bar.handle_at(TagBarEvent::Commit, now());
        assert_eq!(bar.open_picker(), OpenPicker::None);
        assert_eq!(display_set(&bar), expected);
    }

    #[test]
    fn twenty_four_hour_titles() {
        let options = TagBarOptions {
            clock: ClockStyle::TwentyFourHour,
            ..TagBarOptions::basic()
        };
        let mut bar = TagBar::new(options).unwrap();
        let _ = tap(&mut bar, TagKind::Time);
        assert_eq!(bar.title(TagKind::Time), Some("09:05"));
    }

    #[test]
    fn chips_append_exposed_hidden_tag() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        let chips = bar.chips();

        assert_eq!(chips.len(), 5);
        let last = chips.last().unwrap();
        assert_eq!(last.kind, TagKind::Color);
        assert!(last.is_hidden_tag);
        assert!(chips[3].is_selected, "plus chip shows tray state");
        assert!(chips.iter().all(|chip| chip.showing_hidden));
    }

    #[test]
    fn arrange_places_every_chip() {
        let mut bar = extended();
        let _ = tap(&mut bar, TagKind::Plus);
        let placed = bar.arrange(&FlowLayout::new(500.0, 8.0), &ChipMetrics::default());

        assert_eq!(placed.len(), 5);
        assert_eq!(placed[0].origin, Point::new(0.0, 0.0));
        for pair in placed.windows(2) {
            let (left, right) = (&pair[0], &pair[1]);
            if (left.origin.y - right.origin.y).abs() < f64::EPSILON {
                assert!(right.origin.x >= left.origin.x + left.size.width);
            }
        }
    }
}
