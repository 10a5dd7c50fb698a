//! This module provides a mocked event source, that can be told to fail on some fetches
//!
//! It is mainly meant for tests, to simulate a server that is unreachable or that returns garbage.

use std::error::Error;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::traits::EventSource;
use crate::Event;

/// This stores some behaviour tweaks, that describe how a mocked instance will behave during a given test
///
/// So that a fetch fails _n_ times after _m_ initial successes, set `(m, n)`
#[derive(Default, Clone, Debug)]
pub struct MockBehaviour {
    /// If this is true, every fetch will be allowed
    pub is_suspended: bool,

    pub fetch_events_behaviour: (u32, u32),
}

impl MockBehaviour {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches will fail at once, for `n_fails` times
    pub fn fail_now(n_fails: u32) -> Self {
        Self {
            is_suspended: false,
            fetch_events_behaviour: (0, n_fails),
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

    pub fn can_fetch_events(&mut self) -> Result<(), Box<dyn Error>> {
        if self.is_suspended { return Ok(()) }
        decrement(&mut self.fetch_events_behaviour, "fetch_events")
    }
}

/// Return Ok(()) in case the value is `(1+, _)` or `(_, 0)`, or return Err and decrement otherwise
fn decrement(value: &mut (u32, u32), descr: &str) -> Result<(), Box<dyn Error>> {
    let remaining_successes = value.0;
    let remaining_failures = value.1;

    if remaining_successes > 0 {
        value.0 = value.0 - 1;
        log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
        Ok(())
    } else {
        if remaining_failures > 0 {
            value.1 = value.1 - 1;
            log::debug!("Mock behaviour: failing a {} ({:?})", descr, value);
            Err(format!("Mocked behaviour requires this {} to fail this time. ({:?})", descr, value).into())
        } else {
            log::debug!("Mock behaviour: allowing a {} ({:?})", descr, value);
            Ok(())
        }
    }
}


/// An in-memory event source, whose fetches succeed or fail according to a [`MockBehaviour`]
#[derive(Debug)]
pub struct MockSource {
    events: Vec<Event>,
    behaviour: Mutex<MockBehaviour>,
    fetch_count: Mutex<u32>,
}

impl MockSource {
    pub fn new(events: Vec<Event>, behaviour: MockBehaviour) -> Self {
        Self {
            events,
            behaviour: Mutex::new(behaviour),
            fetch_count: Mutex::new(0),
        }
    }

    /// A source that always fails, as an unreachable server would
    pub fn unreachable() -> Self {
        Self::new(Vec::new(), MockBehaviour::fail_now(u32::MAX))
    }

    /// How many times events have been fetched (successfully or not)
    pub fn fetch_count(&self) -> u32 {
        match self.fetch_count.lock() {
            Ok(count) => *count,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl EventSource for MockSource {
    fn description(&self) -> String {
        format!("mocked source ({} events)", self.events.len())
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        if let Ok(mut count) = self.fetch_count.lock() {
            *count += 1;
        }

        let allowed = match self.behaviour.lock() {
            Ok(mut behaviour) => behaviour.can_fetch_events(),
            Err(_) => Err("Mock behaviour is poisoned".into()),
        };
        allowed?;

        Ok(self.events.clone())
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_mock_behaviour() {
        let mut ok = MockBehaviour::new();
        assert!(ok.can_fetch_events().is_ok());
        assert!(ok.can_fetch_events().is_ok());
        assert!(ok.can_fetch_events().is_ok());

        let mut now = MockBehaviour::fail_now(2);
        assert!(now.can_fetch_events().is_err());
        assert!(now.can_fetch_events().is_err());
        assert!(now.can_fetch_events().is_ok());
        assert!(now.can_fetch_events().is_ok());

        let mut custom = MockBehaviour{
            fetch_events_behaviour: (1,3),
            ..MockBehaviour::default()
        };
        assert!(custom.can_fetch_events().is_ok());
        assert!(custom.can_fetch_events().is_err());
        custom.suspend();
        assert!(custom.can_fetch_events().is_ok());
        custom.resume();
        assert!(custom.can_fetch_events().is_err());
        assert!(custom.can_fetch_events().is_err());
        assert!(custom.can_fetch_events().is_ok());
    }

    #[tokio::test]
    async fn test_mock_source() {
        let source = MockSource::new(vec![Event::new("2024-03-05", "A")], MockBehaviour::fail_now(1));
        assert!(source.fetch_events().await.is_err());
        assert_eq!(source.fetch_events().await.unwrap().len(), 1);
        assert_eq!(source.fetch_count(), 2);
    }
}
