use crate::{Category, Event};
use std::cmp::Ordering;

/// The events which belong to `category` and are not yet among its associated events, newest
/// first.
///
/// An event listed under several categories matches each of them.
pub fn filtered_events(events: &[Event], category: &Category) -> Vec<Event> {
    let mut out: Vec<Event> = events
        .iter()
        .filter(|event| {
            event.is_in(&category.id) && !category.events.iter().any(|seen| seen.id == event.id)
        })
        .cloned()
        .collect();
    out.sort_by(compare_dates);
    out
}

/// Order events by most recent observation, newest first, breaking ties by identifier.
pub fn compare_dates(a: &Event, b: &Event) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id))
}
