//! Utilities to track the progression of a load

use std::fmt::{Display, Error, Formatter};

/// An event that happens while a calendar loads its events
#[derive(Clone, Debug, PartialEq)]
pub enum LoadEvent {
    /// Load has not started
    NotStarted,
    /// The request has been sent, and no answer has been received yet
    Started,
    /// Load is finished
    Finished{ success: bool, events: usize },
}

impl Display for LoadEvent {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        match self {
            LoadEvent::NotStarted => write!(f, "Not started"),
            LoadEvent::Started => write!(f, "Fetching events..."),
            LoadEvent::Finished{success, events} => match success {
                true => write!(f, "Loaded {} events", events),
                false => write!(f, "Unable to fetch the events"),
            }
        }
    }
}

impl Default for LoadEvent {
    fn default() -> Self {
        Self::NotStarted
    }
}


/// See [`feedback_channel`]
pub type FeedbackSender = tokio::sync::watch::Sender<LoadEvent>;
/// See [`feedback_channel`]
pub type FeedbackReceiver = tokio::sync::watch::Receiver<LoadEvent>;

/// Create a feeback channel, that can be used to retrieve the current progress of a load operation
pub fn feedback_channel() -> (FeedbackSender, FeedbackReceiver) {
    tokio::sync::watch::channel(LoadEvent::default())
}


/// Sends events to the listener of a load (if any)
pub(crate) struct LoadProgress {
    feedback_channel: Option<FeedbackSender>,
}

impl LoadProgress {
    pub fn new() -> Self {
        Self { feedback_channel: None }
    }
    pub fn new_with_feedback_channel(channel: FeedbackSender) -> Self {
        Self { feedback_channel: Some(channel) }
    }

    /// Send an event as a feedback to the listener (if any).
    pub fn feedback(&self, event: LoadEvent) {
        if let Some(sender) = &self.feedback_channel {
            // Nobody may be listening anymore, this is fine
            let _ = sender.send(event);
        }
    }
}
