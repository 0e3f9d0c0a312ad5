use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One calendar event, as delivered by the (external) event feed.
///
/// Feeds are expected to arrive pre-sorted chronologically; selection code
/// keeps the input order rather than re-sorting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    /// Spans the whole day with no specific start time.
    #[serde(default)]
    pub all_day: bool,
    /// Crosses a calendar-day boundary; shown in both its start and end cell.
    #[serde(default)]
    pub multiday: bool,
}

impl Event {
    /// Whether the event starts today or later.
    pub fn is_upcoming(&self, today: NaiveDate) -> bool {
        self.start.date() >= today
    }
}
