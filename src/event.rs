//! Calendar events, as they are described in the JSON events resource

use std::error::Error;

use serde::{Deserialize, Deserializer, Serialize};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use csscolorparser::Color;

/// Date-time layouts (without any timezone) that are accepted for the `date` field
const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// A calendar event.
///
/// Events are read-only once loaded. Apart from the `date` (that is needed to put an event on the grid), nothing is validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The day this event occurs, as found in the resource (e.g. `2024-03-05` or `2024-03-05T10:00:00+01:00`)
    #[serde(default, deserialize_with = "null_as_empty")]
    date: String,
    /// The display label
    #[serde(default, deserialize_with = "null_as_empty")]
    title: String,
    /// Opaque display string
    #[serde(default, deserialize_with = "null_as_empty")]
    start_time: String,
    /// Opaque display string
    #[serde(default, deserialize_with = "null_as_empty")]
    end_time: String,
    /// A CSS-compatible color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl Event {
    pub fn new<S: ToString, T: ToString>(date: S, title: T) -> Self {
        Self {
            date: date.to_string(),
            title: title.to_string(),
            start_time: String::new(),
            end_time: String::new(),
            color: None,
        }
    }

    /// Set the displayed start and end times
    pub fn with_times<S: ToString, T: ToString>(mut self, start_time: S, end_time: T) -> Self {
        self.start_time = start_time.to_string();
        self.end_time = end_time.to_string();
        self
    }

    pub fn with_color<S: ToString>(mut self, color: S) -> Self {
        self.color = Some(color.to_string());
        self
    }

    pub fn raw_date(&self) -> &str   { &self.date       }
    pub fn title(&self) -> &str      { &self.title      }
    pub fn start_time(&self) -> &str { &self.start_time }
    pub fn end_time(&self) -> &str   { &self.end_time   }
    pub fn raw_color(&self) -> Option<&str> { self.color.as_deref() }

    /// The calendar day of this event, or `None` if its date cannot be parsed
    pub fn date(&self) -> Option<NaiveDate> {
        parse_event_date(&self.date)
    }

    /// The color of this event.
    /// Missing and unparseable colors both fall back to the [default color](crate::config::DEFAULT_EVENT_COLOR)
    pub fn color(&self) -> Color {
        if let Some(raw) = &self.color {
            match csscolorparser::parse(raw) {
                Ok(color) => return color,
                Err(err) => log::debug!("Invalid color {:?} for event {:?} ({}), using the default one", raw, self.title, err),
            }
        }
        default_color()
    }

    /// The displayed time range, e.g. `10:00 - 11:30`
    pub fn time_range(&self) -> String {
        format!("{} - {}", self.start_time, self.end_time)
    }
}

/// Used to support serde: a `null` string field is read as an empty one
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn default_color() -> Color {
    color_or_black(&crate::config::default_event_color())
}

fn color_or_black(raw: &str) -> Color {
    match csscolorparser::parse(raw) {
        Ok(color) => color,
        Err(err) => {
            log::warn!("The configured default event color {:?} is invalid ({}). Using black", raw, err);
            Color::from_rgba(0.0, 0.0, 0.0, 1.0)
        },
    }
}

/// Turn the `date` field of an event into a calendar day.
///
/// A plain `YYYY-MM-DD` is taken as is.
/// Date-times with an offset are first converted into the local timezone, then truncated to their day.
/// Date-times without any offset are truncated to their day.
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local).date_naive());
    }

    NAIVE_DATETIME_FORMATS.iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|dt| dt.date())
}

/// Parse the content of an events resource, that must be a JSON array of events
pub fn parse_event_list(content: &str) -> Result<Vec<Event>, Box<dyn Error>> {
    let events: Vec<Event> = match serde_json::from_str(content) {
        Ok(events) => events,
        Err(err) => return Err(format!("Invalid events resource: {}", err).into()),
    };
    Ok(events)
}
