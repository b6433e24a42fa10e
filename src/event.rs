//! Calendar events

use std::convert::TryFrom;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MalformedEventError;

/// The date format used on the wire and in user input
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A titled event, that spans from its start date to its end date (both included)
///
/// An `Event` can only be built through a validating constructor (this includes deserialization),
/// so that `start_date <= end_date` always holds.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEvent")]
pub struct Event {
    title: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

/// An event as it is received, before validation
#[derive(Deserialize)]
struct RawEvent {
    title: String,
    start_date: String,
    end_date: String,
}

impl TryFrom<RawEvent> for Event {
    type Error = MalformedEventError;

    fn try_from(raw: RawEvent) -> Result<Self, Self::Error> {
        Event::parse(raw.title, &raw.start_date, &raw.end_date)
    }
}

impl Event {
    /// Create an event from already parsed dates
    pub fn new<T: ToString>(title: T, start_date: NaiveDate, end_date: NaiveDate) -> Result<Self, MalformedEventError> {
        if end_date < start_date {
            return Err(MalformedEventError::InvertedRange{ start: start_date, end: end_date });
        }

        Ok(Self {
            title: title.to_string(),
            start_date,
            end_date,
        })
    }

    /// Create an event from `YYYY-MM-DD` date strings
    pub fn parse<T: ToString>(title: T, start_date: &str, end_date: &str) -> Result<Self, MalformedEventError> {
        let start_date = parse_date("start_date", start_date)?;
        let end_date = parse_date("end_date", end_date)?;
        Self::new(title, start_date, end_date)
    }

    pub fn title(&self) -> &str            { &self.title      }
    pub fn start_date(&self) -> NaiveDate  { self.start_date  }
    pub fn end_date(&self) -> NaiveDate    { self.end_date    }

    /// Returns whether this event is happening on `day`
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }

    /// How many calendar days this event covers (a single-day event lasts 1 day)
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Parse a zero-padded `YYYY-MM-DD` date, nothing before or after it
fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, MalformedEventError> {
    let invalid = || MalformedEventError::InvalidDate{ field, value: value.to_string() };

    if has_iso_date_shape(value) == false {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}

fn has_iso_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
