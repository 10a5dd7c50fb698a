//! This module provides the store that holds the events once they have been loaded

use crate::traits::EventSource;
use crate::Event;

/// The observable result of a load
#[derive(Clone, Debug, PartialEq)]
pub enum LoadOutcome {
    /// The list has been replaced with this many events
    Loaded(usize),
    /// The list has been left untouched. This contains the diagnostic
    Failed(String),
}

impl LoadOutcome {
    pub fn is_success(&self) -> bool {
        match self {
            LoadOutcome::Loaded(_) => true,
            _ => false,
        }
    }
}

/// Holds the list of events.
///
/// The list is only ever replaced by a successful [`load`](EventStore::load). There is no other write path.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventStore {
    events: Vec<Event>,
    last_error: Option<String>,
}

impl EventStore {
    /// An empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already contains some events
    pub fn with_events(events: Vec<Event>) -> Self {
        Self { events, last_error: None }
    }

    /// Create a store and perform its initial (and only) load.
    ///
    /// This never fails: in case the source is not available, the store is empty and the outcome tells why.
    pub async fn initialize<S>(source: &S) -> (Self, LoadOutcome)
    where
        S: EventSource + ?Sized,
    {
        let mut store = Self::new();
        let outcome = store.load(source).await;
        (store, outcome)
    }

    /// Retrieve the events from `source`.
    ///
    /// On success, the held list is replaced. \
    /// On failure, the held list is left as it was, and the error is logged and remembered (see [`last_error`](EventStore::last_error)). It is not returned as an `Err`: a calendar without events is still a usable calendar.
    pub async fn load<S>(&mut self, source: &S) -> LoadOutcome
    where
        S: EventSource + ?Sized,
    {
        log::info!("Loading events from {}", source.description());

        match source.fetch_events().await {
            Ok(events) => {
                log::info!("Loaded {} events", events.len());
                let count = events.len();
                self.events = events;
                self.last_error = None;
                LoadOutcome::Loaded(count)
            },
            Err(err) => {
                let message = format!("Unable to load events from {}: {}", source.description(), err);
                log::error!("{}", message);
                self.last_error = Some(message.clone());
                LoadOutcome::Failed(message)
            },
        }
    }

    /// The current list of events, unfiltered
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// The diagnostic of the latest load, if it failed
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
