//! Event records as delivered by the Google Calendar API.
//!
//! gigcal never owns these: they are read from an `events.list` response,
//! passed by reference into the formatting functions and dropped. Fields are
//! kept as the API's strings so malformed input degrades instead of failing.

use std::path::Path;

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{GigcalError, GigcalResult};

/// One occurrence on the source calendar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub start: EventDateTime,
    #[serde(default)]
    pub end: EventDateTime,
}

/// Either a timed instant (`dateTime`) or an all-day date (`date`).
///
/// Exactly one is expected to be set. Nothing here enforces that; consumers
/// prefer a non-empty `date_time` and fall back to `date`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
}

impl EventDateTime {
    pub fn timed(date_time: &str) -> Self {
        EventDateTime {
            date_time: Some(date_time.to_string()),
            ..Default::default()
        }
    }

    pub fn all_day(date: &str) -> Self {
        EventDateTime {
            date: Some(date.to_string()),
            ..Default::default()
        }
    }

    /// `date_time`, with an empty string counting as absent.
    pub fn instant(&self) -> Option<&str> {
        self.date_time.as_deref().filter(|s| !s.is_empty())
    }

    pub fn is_all_day(&self) -> bool {
        self.instant().is_none() && self.date.as_deref().is_some_and(|d| !d.is_empty())
    }

    /// The instant in UTC, if `date_time` is present and parseable.
    ///
    /// Values without an offset are wall-clock time in `time_zone`, or UTC
    /// when the zone is missing or unknown.
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        let zone = self.time_zone.as_deref().and_then(|tz| tz.parse::<Tz>().ok());
        self.instant().and_then(|s| parse_instant(s, zone))
    }

    /// `date` with its `-` separators removed, e.g. `20250704`.
    pub(crate) fn compact_date(&self) -> Option<String> {
        self.date
            .as_deref()
            .filter(|d| !d.is_empty())
            .map(|d| d.replace('-', ""))
    }
}

/// Format as basic-format UTC with whole seconds, e.g. `20250601T100000Z`.
pub(crate) fn compact_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}

fn parse_instant(s: &str, zone: Option<Tz>) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f").ok()?;
    let Some(tz) = zone else {
        return Some(naive.and_utc());
    };

    Some(match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        // Repeated hour when clocks go back: take the earlier one
        LocalResult::Ambiguous(a, b) => a.min(b).with_timezone(&Utc),
        // Skipped hour when clocks go forward
        LocalResult::None => naive.and_utc(),
    })
}

/// `events.list` responses wrap events in `items`; hand-written files are
/// usually a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsDocument {
    List(Vec<CalendarEvent>),
    Envelope {
        #[serde(default)]
        items: Vec<CalendarEvent>,
    },
}

/// Parse events from JSON text.
pub fn parse_events(json: &str) -> GigcalResult<Vec<CalendarEvent>> {
    let doc: EventsDocument =
        serde_json::from_str(json).map_err(|e| GigcalError::EventsFile(e.to_string()))?;

    Ok(match doc {
        EventsDocument::List(events) => events,
        EventsDocument::Envelope { items } => items,
    })
}

/// Read and parse an events file.
pub fn load_events(path: &Path) -> GigcalResult<Vec<CalendarEvent>> {
    let json = std::fs::read_to_string(path)?;
    let events = parse_events(&json)?;
    tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
    Ok(events)
}

/// Look up an event by its source calendar id.
pub fn find_event<'a>(events: &'a [CalendarEvent], id: &str) -> GigcalResult<&'a CalendarEvent> {
    events
        .iter()
        .find(|e| e.id == id)
        .ok_or_else(|| GigcalError::EventNotFound(id.to_string()))
}
