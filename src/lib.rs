//! This crate provides an events calendar.
//!
//! Events are fetched from a REST server by a [`Client`](client::Client), which is one possible [`EventSource`](traits::EventSource). \
//! A [`Calendar`] holds them in an [`EventStore`](store::EventStore), tells which range of days they span, and can be rendered as text by the [`render`] module.
//!
//! Because a user-frendly app may want to display something before (or even without) a server answer,
//! a calendar is usable as soon as it is created, and a failed fetch never prevents it from being displayed.

pub mod traits;
pub mod error;

mod event;
pub use event::Event;
pub mod store;
pub mod clock;
pub mod calendar;
pub use calendar::Calendar;

pub mod client;
pub mod mock_source;

pub mod config;
pub mod render;
