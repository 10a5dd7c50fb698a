//! This module provides an event source that reads a JSON file from the disk

use std::path::{Path, PathBuf};
use std::error::Error;

use async_trait::async_trait;

use crate::traits::EventSource;
use crate::Event;


/// An event source backed by a local file, that contains the same JSON array a server would return
#[derive(Clone, Debug, PartialEq)]
pub struct LocalFile {
    path: PathBuf,
}

impl LocalFile {
    pub fn new(path: &Path) -> Self {
        Self { path: PathBuf::from(path) }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the backing file
    pub fn read_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        let content = match std::fs::read_to_string(&self.path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", self.path, err).into());
            },
            Ok(content) => content,
        };
        crate::event::parse_event_list(&content)
    }
}

#[async_trait]
impl EventSource for LocalFile {
    fn description(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        self.read_events()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_events() {
        let path = std::env::temp_dir().join(format!("month-calendar-local-{}.json", std::process::id()));
        std::fs::write(&path, r#"[{"date": "2024-03-05", "title": "A", "startTime": "9:00", "endTime": "10:00"}]"#).unwrap();

        let source = LocalFile::new(&path);
        let events = source.read_events().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title(), "A");

        std::fs::remove_file(&path).unwrap();
        assert!(source.read_events().is_err());
    }
}
