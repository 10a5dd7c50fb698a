use std::error::Error;

use async_trait::async_trait;

use crate::Event;

/// Something events can be loaded from
#[async_trait]
pub trait EventSource {
    /// A human-readable description of where the events come from (a URL, a path...)
    fn description(&self) -> String;

    /// Retrieve the full list of events.
    /// This may be slow, and may fail (e.g. in case of a network issue or of a malformed resource)
    async fn fetch_events(&self) -> Result<Vec<Event>, Box<dyn Error>>;
}
