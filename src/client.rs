//! This module provides a client that fetches events from an HTTP server

use std::error::Error;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use url::Url;

use crate::traits::EventSource;
use crate::Event;


/// An event source that downloads a static JSON resource
pub struct Client {
    url: Url,
}

impl Client {
    /// Create a client. This does not start a connection
    pub fn new<S: AsRef<str>>(url: S) -> Result<Self, Box<dyn Error>> {
        let url = Url::parse(url.as_ref())?;
        match url.scheme() {
            "http" | "https" => (),
            other => return Err(format!("Unsupported URL scheme {:?} for {}", other, url).into()),
        }

        Ok(Self{ url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl EventSource for Client {
    fn description(&self) -> String {
        self.url.to_string()
    }

    async fn fetch_events(&self) -> Result<Vec<Event>, Box<dyn Error>> {
        log::debug!("Fetching events from {}", self.url);

        let res = reqwest::Client::new()
            .get(self.url.clone())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        if res.status().is_success() == false {
            return Err(format!("Unexpected HTTP status code {:?}", res.status()).into());
        }

        let text = res.text().await?;
        let events = crate::event::parse_event_list(&text)?;
        log::debug!("Got {} events from {}", events.len(), self.url);
        Ok(events)
    }
}
