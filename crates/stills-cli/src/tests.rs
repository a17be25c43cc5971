use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pretty_assertions::assert_eq;
use stills_core::chip::ChipView;
use stills_core::config::StillsConfig;
use stills_core::models::mock_profiles;
use stills_core::{OpenPicker, TagBarEvent, TagKind};

use crate::cli::CompletionShell;
use crate::commands::carousel::carousel_items;
use crate::commands::common::{parse_event, parse_now, parse_size, render_chip, resolve_config_path};
use crate::commands::completions::render_completions;
use crate::commands::config::write_default_config;
use crate::commands::layout::compute_layout;
use crate::commands::session::{build_session_report, format_session_lines};
use crate::error::CliError;

fn morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 4, 15)
        .unwrap()
        .and_hms_opt(9, 5, 42)
        .unwrap()
}

fn events(raw: &[&str]) -> Vec<String> {
    raw.iter().map(ToString::to_string).collect()
}

#[test]
fn parse_event_accepts_taps_and_picker_values() {
    assert_eq!(
        parse_event("tap:time").unwrap(),
        TagBarEvent::Tap(TagKind::Time)
    );
    assert_eq!(
        parse_event(" TAP:+ ").unwrap(),
        TagBarEvent::Tap(TagKind::Plus)
    );
    assert_eq!(
        parse_event("time:14:30").unwrap(),
        TagBarEvent::TimeChanged(NaiveTime::from_hms_opt(14, 30, 0).unwrap())
    );
    assert_eq!(
        parse_event("date:2025-12-24").unwrap(),
        TagBarEvent::DateChanged(NaiveDate::from_ymd_opt(2025, 12, 24).unwrap())
    );
    assert_eq!(parse_event("set").unwrap(), TagBarEvent::Commit);
    assert_eq!(parse_event("Dismiss").unwrap(), TagBarEvent::Dismiss);
}

#[test]
fn parse_event_rejects_garbage() {
    assert!(matches!(
        parse_event("wiggle"),
        Err(CliError::InvalidEvent { .. })
    ));
    assert!(matches!(
        parse_event("tap:weather"),
        Err(CliError::InvalidEvent { .. })
    ));
    assert!(matches!(
        parse_event("time:25:99"),
        Err(CliError::InvalidEvent { .. })
    ));
}

#[test]
fn unknown_tap_kind_lists_known_kinds() {
    let error = parse_event("tap:weather").unwrap_err().to_string();
    assert!(error.contains("weather"));
    assert!(error.contains("time, date, location, repeating, plus, color, navigation"));
}

#[test]
fn parse_size_supports_width_only_and_pairs() {
    let pair = parse_size("120x40", 34.0).unwrap();
    assert!((pair.width - 120.0).abs() < f64::EPSILON);
    assert!((pair.height - 40.0).abs() < f64::EPSILON);

    let width_only = parse_size("75", 34.0).unwrap();
    assert!((width_only.height - 34.0).abs() < f64::EPSILON);

    assert!(parse_size("-3", 34.0).is_err());
    assert!(parse_size("ax2", 34.0).is_err());
}

#[test]
fn parse_now_accepts_minute_timestamps() {
    let parsed = parse_now(Some("2025-04-15T09:05")).unwrap();
    assert_eq!(
        parsed,
        NaiveDate::from_ymd_opt(2025, 4, 15)
            .unwrap()
            .and_hms_opt(9, 5, 0)
            .unwrap()
    );
    assert!(matches!(
        parse_now(Some("tomorrow")),
        Err(CliError::InvalidTimestamp(_))
    ));
    assert!(parse_now(None).is_ok());
}

#[test]
fn render_chip_marks_icon_and_selection() {
    assert_eq!(render_chip(&ChipView::new(TagKind::Time, "Time", false)), "[Time v]");
    assert_eq!(render_chip(&ChipView::new(TagKind::Time, "9:05 AM", true)), "[9:05 AM ^]*");
    assert_eq!(
        render_chip(&ChipView::new(TagKind::Location, "Desk", true)),
        "[Desk ~]*"
    );

    let mut hidden = ChipView::new(TagKind::Color, "Color", false);
    hidden.is_hidden_tag = true;
    assert_eq!(render_chip(&hidden), "(Color)");
}

#[test]
fn session_sets_time_through_picker() {
    let config = StillsConfig::default();
    let report = build_session_report(
        &events(&["tap:time", "time:14:30", "set"]),
        None,
        &config,
        morning(),
    )
    .unwrap();

    assert_eq!(report.events_applied, 3);
    assert!(!report.dismissed);
    assert_eq!(report.open_picker, OpenPicker::None);
    assert_eq!(report.selected, vec!["2:30 PM".to_string()]);
    assert_eq!(report.chips[0].label, "2:30 PM");
    assert!(report.chips[0].selected);

    let lines = format_session_lines(&report);
    assert!(lines.iter().any(|line| line == "picker:   none"));
    assert!(lines.iter().any(|line| line == "selected: 2:30 PM"));
}

#[test]
fn session_stops_at_dismiss() {
    let config = StillsConfig::default();
    let report = build_session_report(
        &events(&["tap:time", "tap:time", "tap:location"]),
        None,
        &config,
        morning(),
    )
    .unwrap();

    assert!(report.dismissed);
    assert_eq!(report.events_applied, 2);
    assert_eq!(report.open_picker, OpenPicker::Time);
    assert!(format_session_lines(&report)
        .last()
        .is_some_and(|line| line.starts_with("dismissed after 2")));
}

#[test]
fn session_basic_override_shows_repeating_chip() {
    let config = StillsConfig::default();
    let report = build_session_report(
        &events(&["tap:location", "tap:repeating"]),
        Some(false),
        &config,
        morning(),
    )
    .unwrap();

    assert!(!report.extended);
    let kinds = report.chips.iter().map(|chip| chip.kind).collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![
            TagKind::Time,
            TagKind::Date,
            TagKind::Location,
            TagKind::Repeating
        ]
    );
    assert_eq!(
        report.selected,
        vec!["Kitchen".to_string(), "Daily".to_string()]
    );
}

#[test]
fn session_rejects_bad_event_before_replay() {
    let config = StillsConfig::default();
    let error =
        build_session_report(&events(&["tap:time", "nope"]), None, &config, morning()).unwrap_err();
    assert!(error.to_string().contains("nope"));
}

#[test]
fn layout_wraps_to_next_row() {
    let items = compute_layout(&events(&["50x30", "50x30", "50x30"]), 120.0, 8.0, 34.0).unwrap();
    let points = items
        .iter()
        .map(|item| (item.x, item.y, item.row))
        .collect::<Vec<_>>();
    assert_eq!(points, vec![(0.0, 0.0, 0), (58.0, 0.0, 0), (0.0, 38.0, 1)]);
}

#[test]
fn layout_rejects_bad_geometry() {
    assert!(matches!(
        compute_layout(&events(&["10"]), 0.0, 8.0, 34.0),
        Err(CliError::InvalidLayout(_))
    ));
    assert!(matches!(
        compute_layout(&events(&["10"]), 100.0, -1.0, 34.0),
        Err(CliError::InvalidLayout(_))
    ));
}

#[test]
fn carousel_select_marks_profile() {
    let profiles = mock_profiles();
    let items = carousel_items(&profiles, 0.0, Some(2));
    assert!(items[2].selected);
    assert!(items.iter().filter(|item| item.selected).count() == 1);
    assert!(items.iter().all(|item| !item.visible));
    assert!(items[2].offset_x.abs() < 1e-9);
}

#[test]
fn carousel_ignores_out_of_range_select() {
    let profiles = mock_profiles();
    let items = carousel_items(&profiles, 100.0, Some(99));
    assert!(items.iter().all(|item| !item.selected && item.visible));
}

#[test]
fn config_init_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stills").join("config.json");

    write_default_config(&path, false).unwrap();
    assert!(path.exists());
    assert!(matches!(
        write_default_config(&path, false),
        Err(CliError::ConfigExists(_))
    ));
    write_default_config(&path, true).unwrap();

    let loaded = StillsConfig::load_from_path(&path).unwrap();
    assert_eq!(loaded, StillsConfig::default());
}

#[test]
fn explicit_config_path_wins() {
    let explicit = std::path::PathBuf::from("/tmp/stills-explicit.json");
    assert_eq!(resolve_config_path(Some(explicit.clone())).unwrap(), explicit);
}

#[test]
fn completions_render_for_every_shell() {
    for shell in [
        CompletionShell::Bash,
        CompletionShell::Zsh,
        CompletionShell::Fish,
    ] {
        let script = String::from_utf8(render_completions(shell)).unwrap();
        assert!(script.contains("stills"));
    }
}
