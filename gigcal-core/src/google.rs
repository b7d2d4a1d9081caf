//! Google Calendar "add event" links.

use url::form_urlencoded;

use crate::event::{CalendarEvent, EventDateTime, compact_utc};

const RENDER_URL: &str = "https://calendar.google.com/calendar/render";

/// Build a link that opens Google Calendar's create-event form pre-filled
/// with this event.
pub fn google_event_url(event: &CalendarEvent) -> String {
    let dates = format!("{}/{}", dates_token(&event.start), dates_token(&event.end));

    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("action", "TEMPLATE")
        .append_pair("text", &event.summary)
        .append_pair("dates", &dates);

    if let Some(description) = non_empty(&event.description) {
        query.append_pair("details", description);
    }
    if let Some(location) = non_empty(&event.location) {
        query.append_pair("location", location);
    }

    format!("{}?{}", RENDER_URL, query.finish())
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// `20250601T100000Z` for timed values, `20250704` for all-day ones.
fn dates_token(time: &EventDateTime) -> String {
    if let Some(raw) = time.instant() {
        return match time.to_utc() {
            Some(utc) => compact_utc(&utc),
            None => strip_separators(raw),
        };
    }

    time.compact_date().unwrap_or_default()
}

/// Drop `-`, `:` and fractional seconds from a timestamp we could not parse.
fn strip_separators(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' | ':' => {}
            '.' if chars.peek().is_some_and(|n| n.is_ascii_digit()) => {
                while chars.peek().is_some_and(|n| n.is_ascii_digit()) {
                    chars.next();
                }
            }
            _ => out.push(c),
        }
    }

    out
}
