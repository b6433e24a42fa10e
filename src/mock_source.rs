//! This module provides an [`EventSource`] with a scripted behaviour, so that tests can simulate a server that answers, fails, or both

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::Event;
use crate::error::FetchError;
use crate::traits::EventSource;

/// What a [`MockSource`] answers when it is allowed to
#[derive(Clone, Debug, PartialEq)]
pub enum MockResponse {
    /// A successful response, with these events
    Events(Vec<Event>),
    /// An HTTP status code (which is considered a failure unless it is a 2xx, in which case it returns no events)
    Status(u16),
}

/// This stores some behaviour tweaks, that describe how a mocked source will behave during a given test
///
/// So that fetches fail _n_ times after _m_ initial successes, set `(m, n)` in `fetch_behaviour`
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every fetch will be allowed
    pub is_suspended: bool,

    pub fetch_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            fetch_behaviour: (0, n_fails),
        }
    }

    /// Suspend this mock behaviour until you call `resume`
    pub fn suspend(&mut self) {
        self.is_suspended = true;
    }
    /// Make this behaviour active again
    pub fn resume(&mut self) {
        self.is_suspended = false;
    }

    pub fn can_fetch(&mut self) -> Result<(), FetchError> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.fetch_behaviour, "fetch")
    }
}


/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), FetchError> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 -= 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else if remaining_failures > 0 {
        value.1 -= 1;
        log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
        Err(FetchError::Mocked(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value)))
    } else {
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    }
}


/// An [`EventSource`] that answers a pre-defined response, in place of a server
#[derive(Debug)]
pub struct MockSource {
    response: MockResponse,
    behaviour: Mutex<MockBehaviour>,
    requests: AtomicUsize,
}

impl MockSource {
    /// A source that successfully returns `events`
    pub fn with_events(events: Vec<Event>) -> Self {
        Self::new(MockResponse::Events(events), MockBehaviour::new())
    }

    /// A source that answers with an HTTP status code, e.g. 404
    pub fn with_status(status: u16) -> Self {
        Self::new(MockResponse::Status(status), MockBehaviour::new())
    }

    pub fn new(response: MockResponse, behaviour: MockBehaviour) -> Self {
        Self {
            response,
            behaviour: Mutex::new(behaviour),
            requests: AtomicUsize::new(0),
        }
    }

    /// Change the behaviour tweaks of this source
    pub fn set_behaviour(&self, behaviour: MockBehaviour) {
        match self.behaviour.lock() {
            Ok(mut current) => *current = behaviour,
            Err(poisoned) => *poisoned.into_inner() = behaviour,
        }
    }

    /// How many fetches this source has been asked for
    pub fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EventSource for MockSource {
    async fn fetch_events(&self) -> Result<Vec<Event>, FetchError> {
        self.requests.fetch_add(1, Ordering::SeqCst);

        match self.behaviour.lock() {
            Ok(mut behaviour) => behaviour.can_fetch()?,
            Err(poisoned) => poisoned.into_inner().can_fetch()?,
        }

        match &self.response {
            MockResponse::Events(events) => Ok(events.clone()),
            MockResponse::Status(status) if (200..300).contains(status) => Ok(Vec::new()),
            MockResponse::Status(status) => Err(FetchError::Status(*status)),
        }
    }
}
