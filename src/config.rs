//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// Path of the events resource, relative to the server URL given to a [`Client`](crate::client::Client).
/// Feel free to override it when initing this library (this must happen before creating clients).
pub static EVENTS_PATH: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("/api/events".to_string())));

/// The server URL used by the `events-calendar` binary when none is given
pub const DEFAULT_URL: &str = "http://localhost:3000";

/// Returns the current value of [`EVENTS_PATH`]
pub fn events_path() -> String {
    match EVENTS_PATH.lock() {
        Ok(path) => path.clone(),
        // The value itself cannot be half-written, it is always safe to use
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
