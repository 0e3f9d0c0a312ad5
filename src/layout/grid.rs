use chrono::{Duration, NaiveDate};

use crate::event::Event;

/// Offset of `date` within a grid window starting at `cal_start`.
///
/// Negative or past-the-end offsets mean the date falls outside the visible
/// window. A real feed routinely contains such events, so callers skip
/// placement instead of failing.
pub fn day_index(cal_start: NaiveDate, date: NaiveDate) -> i64 {
    (date - cal_start).num_days()
}

/// Events bucketed per visible day, in feed order.
///
/// Storage is unbounded; the per-day display cap is applied when the cells
/// are written out, so overflow counts stay available.
pub struct CalendarGrid<'a> {
    start: NaiveDate,
    days: Vec<Vec<&'a Event>>,
}

impl<'a> CalendarGrid<'a> {
    pub fn build(start: NaiveDate, num_days: usize, events: &'a [Event]) -> Self {
        let mut days: Vec<Vec<&Event>> = vec![Vec::new(); num_days];
        for event in events {
            Self::place(&mut days, day_index(start, event.start.date()), event);
            if event.multiday {
                // End-day placement is bounds-checked on its own: an event
                // starting before the window still lands at its end cell.
                Self::place(&mut days, day_index(start, event.end.date()), event);
            }
        }
        Self { start, days }
    }

    fn place(days: &mut [Vec<&'a Event>], idx: i64, event: &'a Event) {
        if let Ok(idx) = usize::try_from(idx) {
            if let Some(slots) = days.get_mut(idx) {
                slots.push(event);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Iterate the window as `(date, slot list)` pairs.
    pub fn days(&self) -> impl Iterator<Item = (NaiveDate, &[&'a Event])> + '_ {
        let start = self.start;
        self.days
            .iter()
            .enumerate()
            .map(move |(i, slots)| (start + Duration::days(i as i64), slots.as_slice()))
    }
}
