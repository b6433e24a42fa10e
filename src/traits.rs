use async_trait::async_trait;

use crate::Event;
use crate::error::FetchError;

/// Something that is able to provide the whole list of events, such as a REST server
#[async_trait]
pub trait EventSource {
    /// Fetch every event this source knows about.
    ///
    /// This is a potentially slow operation (e.g. an HTTP request), that may fail or even never complete.
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError>;
}
