//! The calendar component
//!
//! A [`Calendar`] combines an [`EventSource`] (usually a [`Client`](crate::client::Client)) with a local [`EventStore`].
//! It is also what the rendering layer reads from.

pub mod load_progress;
pub mod form;

use chrono::NaiveDate;

use crate::Event;
use crate::clock::Clock;
use crate::error::{FetchError, MalformedEventError};
use crate::store::EventStore;
use crate::traits::EventSource;

use form::EventForm;
use load_progress::{FeedbackSender, LoadEvent, LoadProgress};


/// A calendar of events, fetched from an [`EventSource`]
///
/// A freshly created calendar holds no events. Events are either loaded at once from the source
/// (see [`Calendar::load`]), or added one at a time (see [`Calendar::add_event`]).
#[derive(Debug)]
pub struct Calendar<S> {
    source: S,
    store: EventStore,
    today: NaiveDate,

    fetch_failed: bool,
    new_event_form: Option<EventForm>,
}

impl<S> Calendar<S>
where
    S: EventSource,
{
    /// Create a calendar. This does not fetch anything yet.
    ///
    /// The current date is read from `clock` once and for all.
    pub fn new<C: Clock>(source: S, clock: C) -> Self {
        Self {
            source,
            store: EventStore::new(),
            today: clock.today(),
            fetch_failed: false,
            new_event_form: None,
        }
    }

    /// Create a calendar and load its events from `source`.
    ///
    /// A failure to fetch the events does not prevent the calendar from being created, see [`Self::has_fetch_error`]
    pub async fn mount<C: Clock>(source: S, clock: C) -> Self {
        let mut calendar = Self::new(source, clock);
        // Errors are already logged and reflected by has_fetch_error()
        let _ = calendar.load().await;
        calendar
    }

    /// Fetch the events from the source, and replace the current events with them.
    ///
    /// In case of failure, the current events are left as they are and [`Self::has_fetch_error`] becomes true.
    pub async fn load(&mut self) -> Result<(), FetchError> {
        let progress = LoadProgress::new();
        self.run_load(&progress).await
    }

    /// Same as [`Self::load`], but also reports its progress to a feedback channel
    /// (see [`feedback_channel`](load_progress::feedback_channel))
    pub async fn load_with_feedback(&mut self, feedback_sender: FeedbackSender) -> Result<(), FetchError> {
        let progress = LoadProgress::new_with_feedback_channel(feedback_sender);
        self.run_load(&progress).await
    }

    async fn run_load(&mut self, progress: &LoadProgress) -> Result<(), FetchError> {
        progress.feedback(LoadEvent::Started);

        match self.source.fetch_events().await {
            Ok(events) => {
                log::info!("Loaded {} events", events.len());
                progress.feedback(LoadEvent::Finished{ success: true, events: events.len() });
                self.store.load(events);
                self.fetch_failed = false;
                Ok(())
            },
            Err(err) => {
                log::warn!("There was an error while fetching the events: {}", err);
                progress.feedback(LoadEvent::Finished{ success: false, events: self.store.len() });
                self.fetch_failed = true;
                Err(err)
            },
        }
    }
}

impl<S> Calendar<S> {
    /// Returns the events, in the order they have been loaded or added
    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    /// Append an event to the calendar
    pub fn add_event(&mut self, event: Event) {
        self.store.add_event(event);
    }

    /// See [`EventStore::first_day`]
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.store.first_day()
    }

    /// See [`EventStore::last_day`]
    pub fn last_day(&self) -> Option<NaiveDate> {
        self.store.last_day()
    }

    /// See [`EventStore::days`]
    pub fn days(&self) -> Vec<NaiveDate> {
        self.store.days()
    }

    /// See [`EventStore::days_count`]
    pub fn days_count(&self) -> usize {
        self.store.days_count()
    }

    /// The current date, as it was when this calendar was created
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// The source this calendar loads its events from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Whether the last attempt to fetch the events has failed
    pub fn has_fetch_error(&self) -> bool {
        self.fetch_failed
    }

    /// Whether the "new event" form is shown
    pub fn is_new_event_open(&self) -> bool {
        self.new_event_form.is_some()
    }

    /// Show the "new event" form if it is hidden, hide it (and drop what was typed in) otherwise
    pub fn toggle_new_event(&mut self) {
        self.new_event_form = match self.new_event_form.take() {
            Some(_) => None,
            None => Some(EventForm::default()),
        };
    }

    /// The "new event" form, if it is shown
    pub fn new_event_form(&self) -> Option<&EventForm> {
        self.new_event_form.as_ref()
    }

    /// The "new event" form, if it is shown
    pub fn new_event_form_mut(&mut self) -> Option<&mut EventForm> {
        self.new_event_form.as_mut()
    }

    /// Add the event described by the "new event" form, and hide the form.
    ///
    /// If the form is invalid, nothing is added and the form stays open. If no form is shown, this does nothing.
    pub fn submit_new_event(&mut self) -> Result<(), MalformedEventError> {
        let form = match &self.new_event_form {
            None => return Ok(()),
            Some(form) => form,
        };

        match form.to_event() {
            Err(err) => {
                log::warn!("Ignoring invalid new event: {}", err);
                Err(err)
            },
            Ok(event) => {
                self.add_event(event);
                self.new_event_form = None;
                Ok(())
            },
        }
    }

    /// Render this calendar as text, see the [`render`](crate::render) module
    pub fn render(&self) -> String {
        crate::render::render(self)
    }
}
