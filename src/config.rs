//! Support for library configuration options

use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// The environment variable that can override [`EVENTS_SOURCE`]
pub const EVENTS_SOURCE_ENV_VAR: &str = "MONTH_CALENDAR_EVENTS";

/// The color used for events that do not specify a (valid) one.
/// Feel free to override it when initing this library.
pub static DEFAULT_EVENT_COLOR: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("#4f46e5".to_string())));

/// Where events are loaded from when nothing else is specified. This can either be an `http(s)://` URL or a path to a local file.
/// Feel free to override it when initing this library.
pub static EVENTS_SOURCE: Lazy<Arc<Mutex<String>>> = Lazy::new(|| Arc::new(Mutex::new("events.json".to_string())));


/// Returns the current value of [`DEFAULT_EVENT_COLOR`]
pub fn default_event_color() -> String {
    match DEFAULT_EVENT_COLOR.lock() {
        Ok(color) => color.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Returns the events source to use: the value of [`EVENTS_SOURCE_ENV_VAR`] if it is set, [`EVENTS_SOURCE`] otherwise
pub fn events_source_from_env() -> String {
    match std::env::var(EVENTS_SOURCE_ENV_VAR) {
        Ok(source) if source.trim().is_empty() == false => source,
        _ => match EVENTS_SOURCE.lock() {
            Ok(source) => source.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        },
    }
}
