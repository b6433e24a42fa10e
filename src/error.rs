//! Errors surfaced by this crate

use chrono::NaiveDate;

/// An event record that cannot be turned into an [`Event`](crate::Event)
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEventError {
    /// A date field is not a valid `YYYY-MM-DD` calendar date
    #[error("invalid {field} {value:?}: expected a YYYY-MM-DD calendar date")]
    InvalidDate {
        /// Name of the offending field (`start_date` or `end_date`)
        field: &'static str,
        /// The value as it was given
        value: String,
    },

    /// The event ends before it starts
    #[error("event ends on {end}, before it starts on {start}")]
    InvertedRange {
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Why events could not be fetched
///
/// Whatever the variant, a [`Calendar`](crate::Calendar) only keeps track of the fact that fetching failed.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The events endpoint URL cannot be built
    #[error("invalid events URL: {0}")]
    Url(#[from] url::ParseError),

    /// The request could not be sent, or its response could not be read
    #[error("unable to reach the events endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code
    #[error("unexpected HTTP status code {0}")]
    Status(u16),

    /// The response body is not a list of valid events
    #[error("invalid events payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// A failure requested by a [`MockSource`](crate::mock_source::MockSource)
    #[error("mocked failure: {0}")]
    Mocked(String),
}
