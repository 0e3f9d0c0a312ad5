use chrono::NaiveDate;

use crate::event::Event;

/// The next `max` events starting today or later, in feed order.
///
/// Feeds arrive pre-sorted, so keeping the first `max` matches is the same
/// as keeping the soonest `max`.
pub fn upcoming<'a>(events: &'a [Event], today: NaiveDate, max: usize) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.is_upcoming(today))
        .take(max)
        .collect()
}
