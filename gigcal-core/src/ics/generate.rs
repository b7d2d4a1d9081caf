//! ICS file generation.

use crate::event::{CalendarEvent, EventDateTime, compact_utc};

/// Appended to event ids to make UIDs globally unique.
pub const UID_DOMAIN: &str = "soundsystemsofmelbourne.com";

pub const PRODUCT_ID: &str = "-//SSOM//Calendar//EN";

const CRLF: &str = "\r\n";

/// Generate a complete .ics document holding exactly one VEVENT.
///
/// The output is deterministic: no DTSTAMP, no folding, and lines are joined
/// with CRLF without a trailing terminator.
pub fn build_ics_content(event: &CalendarEvent) -> String {
    let mut lines = vec![
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", PRODUCT_ID),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}@{}", event.id, UID_DOMAIN),
        format!("SUMMARY:{}", escape_text(&event.summary)),
    ];

    // Optional fields
    if let Some(desc) = event.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(format!("DESCRIPTION:{}", escape_text(desc)));
    }
    if let Some(loc) = event.location.as_deref().filter(|l| !l.is_empty()) {
        lines.push(format!("LOCATION:{}", escape_text(loc)));
    }

    lines.push(format!("DTSTART:{}", ics_token(&event.start)));
    lines.push(format!("DTEND:{}", ics_token(&event.end)));
    lines.push("END:VEVENT".to_string());
    lines.push("END:VCALENDAR".to_string());

    lines.join(CRLF)
}

/// Escape a TEXT value (RFC 5545 §3.3.11).
///
/// Backslashes go first so the escapes inserted afterwards stay single.
pub fn escape_text(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\\', "\\\\")
        .replace('\n', "\\n")
        .replace(';', "\\;")
        .replace(',', "\\,")
}

/// File name for an event's download: the title with whitespace runs turned
/// into underscores, plus `.ics`.
pub fn ics_filename(event: &CalendarEvent) -> String {
    if event.summary.is_empty() {
        return "event.ics".to_string();
    }

    let mut name = String::with_capacity(event.summary.len() + 4);
    let mut in_gap = false;

    for c in event.summary.chars() {
        if c.is_whitespace() {
            if !in_gap {
                name.push('_');
            }
            in_gap = true;
            continue;
        }
        in_gap = false;
        name.push(if c == '/' || c == '\\' { '_' } else { c });
    }

    name.push_str(".ics");
    name
}

/// DTSTART/DTEND value: whole-second UTC for timed values, bare date for
/// all-day ones, empty when neither is present.
fn ics_token(time: &EventDateTime) -> String {
    if let Some(raw) = time.instant() {
        return match time.to_utc() {
            Some(utc) => compact_utc(&utc),
            None => {
                let stripped = raw.replace(['-', ':'], "");
                let whole = stripped.split('.').next().unwrap_or_default();
                format!("{}Z", whole)
            }
        };
    }

    time.compact_date().unwrap_or_default()
}
