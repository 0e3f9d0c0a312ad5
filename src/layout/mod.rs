pub mod battery;
pub mod grid;
pub mod sidebar;
pub mod time;

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use itertools::Itertools;

use crate::config::{ConfigError, DisplayConfig};
use crate::event::Event;
use crate::logging::RenderLogger;

use self::grid::CalendarGrid;

/// How one grid entry should be styled by the template layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventKind {
    Timed,
    AllDay,
    MultidayStart,
    MultidayEnd,
    /// The "+N more" overflow marker.
    More,
}

/// Markup seam between the layout core and the template collaborator.
///
/// The core decides what appears where; implementations decide how it is
/// written down (HTML classes, plain text, ...). [`PlainMarkup`] is the
/// textual reference implementation the test-suite asserts against.
pub trait Markup {
    /// The minute span inside a 12-hour time label.
    fn minute(&self, minutes: &str) -> String;

    /// A timed entry: time label plus summary.
    fn timed(&self, time: &str, summary: &str) -> String;

    /// Wrap one grid entry.
    fn event(&self, body: &str, kind: EventKind, muted: bool) -> String;

    /// Wrap one day cell. `muted` marks days outside the current month.
    fn day(&self, date: &str, entries: &[String], today: bool, muted: bool) -> String;

    /// One day-of-week header label.
    fn weekday(&self, label: &str) -> String;

    /// One sidebar entry: abbreviated weekday + day number, then summary.
    fn sidebar_event(&self, day: &str, summary: &str) -> String;
}

/// Minimal textual markup: minute spans in angle brackets, muted entries in
/// parentheses, today starred. Good enough for tests and terminal previews.
pub struct PlainMarkup;

impl Markup for PlainMarkup {
    fn minute(&self, minutes: &str) -> String {
        format!("⟨{minutes}⟩")
    }

    fn timed(&self, time: &str, summary: &str) -> String {
        format!("{time} {summary}")
    }

    fn event(&self, body: &str, _kind: EventKind, muted: bool) -> String {
        if muted {
            format!("({body})")
        } else {
            body.to_owned()
        }
    }

    fn day(&self, date: &str, entries: &[String], today: bool, _muted: bool) -> String {
        let marker = if today { "*" } else { "" };
        if entries.is_empty() {
            format!("{date}{marker}")
        } else {
            format!("{date}{marker}: {}", entries.iter().join(" | "))
        }
    }

    fn weekday(&self, label: &str) -> String {
        label.to_owned()
    }

    fn sidebar_event(&self, day: &str, summary: &str) -> String {
        format!("{day}: {summary}")
    }
}

/// Names of the fragments handed to the template collaborator.
pub const FRAGMENT_NAMES: [&str; 7] = [
    "month_name",
    "month_date",
    "month_day",
    "day_of_week",
    "calendar_events",
    "sidebar_events",
    "battery_icon",
];

/// Builds the flat substitution map consumed by the template service.
pub struct LayoutAssembler<'a> {
    config: &'a DisplayConfig,
    markup: &'a dyn Markup,
    logger: &'a dyn RenderLogger,
}

impl<'a> LayoutAssembler<'a> {
    pub fn new(
        config: &'a DisplayConfig,
        markup: &'a dyn Markup,
        logger: &'a dyn RenderLogger,
    ) -> Self {
        Self {
            config,
            markup,
            logger,
        }
    }

    /// Build every fragment for one render cycle.
    ///
    /// Validates the config up front; a wrong battery mode or week start must
    /// not make it onto the panel.
    pub fn fragments(
        &self,
        events: &[Event],
    ) -> Result<HashMap<&'static str, String>, ConfigError> {
        let battery_mode = self.config.validate()?;
        let today = self.config.today;

        let window = CalendarGrid::build(self.config.cal_start_date, self.config.grid_len(), events);
        let sidebar = sidebar::upcoming(events, today, self.config.max_events_sidebar);

        let mut fragments = HashMap::new();
        fragments.insert("month_name", today.format("%B").to_string());
        fragments.insert("month_date", today.day().to_string());
        fragments.insert("month_day", today.format("%A").to_string());
        fragments.insert("day_of_week", self.day_of_week_row());
        fragments.insert("calendar_events", self.grid_body(&window));
        fragments.insert("sidebar_events", self.sidebar_body(&sidebar));
        let icon = battery::battery_icon(battery_mode, self.config.battery_level);
        fragments.insert("battery_icon", icon.to_owned());

        self.logger.debug(&format!("Battery icon '{icon}'"));
        self.logger.info(&format!(
            "Assembled layout: {} day cells, {} sidebar events",
            window.len(),
            sidebar.len()
        ));
        Ok(fragments)
    }

    /// Seven header labels starting at the configured week start, wrapping
    /// modulo 7.
    fn day_of_week_row(&self) -> String {
        let labels = &self.config.day_of_week_text;
        let start = self.config.week_start_day as usize;
        (0..7)
            .map(|i| self.markup.weekday(&labels[(i + start) % 7]))
            .join("\n")
    }

    fn grid_body(&self, window: &CalendarGrid) -> String {
        window
            .days()
            .map(|(date, slots)| self.day_cell(date, slots))
            .join("\n")
    }

    fn day_cell(&self, date: NaiveDate, slots: &[&Event]) -> String {
        let today = self.config.today;
        let muted = date.month() != today.month();
        let cap = self.config.max_events_per_day;

        let mut entries: Vec<String> = slots
            .iter()
            .take(cap)
            .map(|event| self.entry(event, date, muted))
            .collect();
        if slots.len() > cap {
            // Overflow markers are always muted.
            entries.push(self.markup.event(
                &format!("+{} more", slots.len() - cap),
                EventKind::More,
                true,
            ));
        }
        self.markup
            .day(&date.day().to_string(), &entries, date == today, muted)
    }

    fn entry(&self, event: &Event, cell_date: NaiveDate, muted: bool) -> String {
        let (body, kind) = if event.multiday {
            if event.start.date() == cell_date {
                (format!("{} »", event.summary), EventKind::MultidayStart)
            } else {
                (format!("« {}", event.summary), EventKind::MultidayEnd)
            }
        } else if event.all_day {
            (format!("⊚ {}", event.summary), EventKind::AllDay)
        } else {
            let label = time::short_time(event.start.time(), self.config.is_24_hour, self.markup);
            (self.markup.timed(&label, &event.summary), EventKind::Timed)
        };
        self.markup.event(&body, kind, muted)
    }

    fn sidebar_body(&self, events: &[&Event]) -> String {
        events
            .iter()
            .map(|event| {
                let date = event.start.date();
                let day = format!("{} {}", date.format("%a"), date.day());
                self.markup.sidebar_event(&day, &event.summary)
            })
            .join("\n")
    }
}
