use chrono::NaiveDateTime;
use serde::Serialize;
use stills_core::config::StillsConfig;
use stills_core::tag_bar::TagBarResponse;
use stills_core::{OpenPicker, TagBar};

use crate::commands::common::{chip_to_item, parse_event, parse_now, render_chip, ChipItem};
use crate::error::CliError;

pub struct SessionArgs {
    pub events: Vec<String>,
    /// Catalog override; `None` keeps the config's choice
    pub extended: Option<bool>,
    pub now: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct SessionReport {
    pub extended: bool,
    pub events_applied: usize,
    pub dismissed: bool,
    pub open_picker: OpenPicker,
    pub selected: Vec<String>,
    pub chips: Vec<ChipItem>,
    #[serde(skip)]
    pub chip_lines: Vec<String>,
}

pub fn run_session(args: &SessionArgs, config: &StillsConfig) -> Result<(), CliError> {
    let now = parse_now(args.now.as_deref())?;
    let report = build_session_report(&args.events, args.extended, config, now)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in format_session_lines(&report) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Parse every event first, then replay them against a fresh tag bar.
///
/// Replay stops at the first event that dismisses the reminder surface.
pub fn build_session_report(
    raw_events: &[String],
    extended: Option<bool>,
    config: &StillsConfig,
    now: NaiveDateTime,
) -> Result<SessionReport, CliError> {
    let events = raw_events
        .iter()
        .map(|raw| parse_event(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let mut options = config.tag_bar_options();
    if let Some(extended) = extended {
        options.extended = extended;
    }
    let mut bar = TagBar::new(options)?;

    let mut events_applied = 0;
    let mut dismissed = false;
    for event in events {
        events_applied += 1;
        if bar.handle_at(event, now) == TagBarResponse::Dismiss {
            tracing::info!("Reminder surface dismissed after {} events", events_applied);
            dismissed = true;
            break;
        }
    }

    let placed = bar.arrange(&config.flow_layout(), &config.chip);
    Ok(SessionReport {
        extended: bar.is_extended(),
        events_applied,
        dismissed,
        open_picker: bar.open_picker(),
        selected: bar.selected().display_strings(bar.clock()),
        chips: placed.iter().map(chip_to_item).collect(),
        chip_lines: placed.iter().map(|placed| render_chip(&placed.chip)).collect(),
    })
}

pub fn format_session_lines(report: &SessionReport) -> Vec<String> {
    let picker = match report.open_picker {
        OpenPicker::None => "none",
        OpenPicker::Time => "time",
        OpenPicker::Date => "date",
    };
    let selected = if report.selected.is_empty() {
        "(nothing)".to_string()
    } else {
        report.selected.join(", ")
    };

    let mut lines = vec![
        format!("chips:    {}", report.chip_lines.join(" ")),
        format!("picker:   {picker}"),
        format!("selected: {selected}"),
    ];
    if report.dismissed {
        lines.push(format!(
            "dismissed after {} event(s)",
            report.events_applied
        ));
    }
    lines
}
