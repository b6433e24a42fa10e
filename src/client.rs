//! This module provides a client to fetch events from a REST server

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::Event;
use crate::error::FetchError;
use crate::traits::EventSource;


/// An [`EventSource`] that fetches its events from the events endpoint of a server
#[derive(Clone, Debug)]
pub struct Client {
    url: Url,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the server at `base_url`. This does not start a connection.
    ///
    /// Events will be requested at [`config::events_path`](crate::config::events_path) on this server.
    /// This path is absolute, so any path in `base_url` is dropped: `https://host/some/prefix/` requests `https://host/api/events`.
    /// To serve the API under a prefix, set [`EVENTS_PATH`](crate::config::EVENTS_PATH) to the full path first.
    pub fn new<S: AsRef<str>>(base_url: S) -> Result<Self, FetchError> {
        let base_url = Url::parse(base_url.as_ref())?;
        let url = base_url.join(&crate::config::events_path())?;

        Ok(Self{
            url,
            http: reqwest::Client::new(),
        })
    }

    /// The URL events are fetched from
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl EventSource for Client {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        log::debug!("GET {}", self.url);

        let response = self.http
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if response.status().is_success() == false {
            return Err(FetchError::Status(response.status().as_u16()));
        }

        let text = response.text().await?;
        let events: Vec<Event> = serde_json::from_str(&text)?;
        log::debug!("Received {} events from {}", events.len(), self.url);
        Ok(events)
    }
}
