//! In-memory storage of events, and the date ranges derived from them

use chrono::NaiveDate;

use crate::Event;

/// The collection of events held by a [`Calendar`](crate::Calendar)
///
/// Events are kept in the order they have been added (or loaded). Duplicates are allowed.
/// Derived values are computed again on every call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events, in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append an event to the collection
    pub fn add_event(&mut self, event: Event) {
        log::debug!("Adding event {:?} ({} to {})", event.title(), event.start_date(), event.end_date());
        self.events.push(event);
    }

    /// Replace the whole collection
    pub fn load(&mut self, events: Vec<Event>) {
        log::debug!("Replacing {} events with {} events", self.events.len(), events.len());
        self.events = events;
    }

    /// The start date of the earliest event, or `None` if there are no events
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.events.iter().map(|event| event.start_date()).min()
    }

    /// The end date of the latest event, or `None` if there are no events
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.events.iter().map(|event| event.end_date()).max()
    }

    /// Every day from [`Self::first_day`] to [`Self::last_day`] (both included), in chronological order
    pub fn days(&self) -> Vec<NaiveDate> {
        match (self.first_day(), self.last_day()) {
            (Some(first), Some(last)) => first
                .iter_days()
                .take_while(|day| *day <= last)
                .collect(),
            _ => Vec::new(),
        }
    }

    /// The number of items in [`Self::days`]
    pub fn days_count(&self) -> usize {
        self.days().len()
    }

    /// Returns the events that are happening on `day`
    pub fn events_on(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter()
            .filter(|event| event.covers(day))
            .collect()
    }
}
