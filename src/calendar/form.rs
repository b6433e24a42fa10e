//! The "new event" sub-view input

use crate::Event;
use crate::error::MalformedEventError;

/// The fields of an event being typed in by a user
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventForm {
    pub title: String,
    /// Expected as `YYYY-MM-DD`
    pub start_date: String,
    /// Expected as `YYYY-MM-DD`
    pub end_date: String,
}

impl EventForm {
    pub fn new<T: ToString, U: ToString, V: ToString>(title: T, start_date: U, end_date: V) -> Self {
        Self {
            title: title.to_string(),
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
        }
    }

    /// Validate the form into an actual event
    pub fn to_event(&self) -> Result<Event, MalformedEventError> {
        Event::parse(&self.title, &self.start_date, &self.end_date)
    }
}
