//! TUI rendering traits for gigcal types.
//!
//! This module provides extension traits that add colored terminal rendering
//! to gigcal-core types using owo_colors.

use chrono::{Local, NaiveDate};
use gigcal_core::{CalendarEvent, EventDateTime, FeedUrls, ProbeResult};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for CalendarEvent {
    fn render(&self) -> String {
        let mut line = format!("  {} {}", format_time(&self.start), self.summary);
        if let Some(ref location) = self.location {
            line.push_str(&format!(" {}", format!("@ {}", location).dimmed()));
        }
        line
    }
}

impl Render for ProbeResult {
    fn render(&self) -> String {
        let url = self.url();
        let url = url.dimmed();
        match self {
            ProbeResult::Reachable {
                status,
                event_count,
                ..
            } => {
                let status = if (200..300).contains(status) {
                    status.green().to_string()
                } else {
                    status.yellow().to_string()
                };
                let count = format!("{} {}", event_count, pluralize("event", *event_count));
                format!("{} {} {:>10}  {}", "✓".green(), status, count, url)
            }
            ProbeResult::Failed { error, .. } => {
                format!("{} {}\n    {}", "✗".red(), url, error.red())
            }
        }
    }
}

impl Render for FeedUrls {
    fn render(&self) -> String {
        let rows = [
            ("Google subscribe", &self.google),
            ("iCal", &self.ical.primary),
            ("iCal (www host)", &self.ical.alternate),
            ("iCal (full)", &self.ical.full),
            ("iCal (UTC)", &self.ical.with_params),
            ("Download (basic)", &self.download.basic),
            ("Download (full)", &self.download.full),
        ];

        rows.iter()
            .map(|(label, url)| format!("{:>16}  {}", label.dimmed(), url))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Simple pluralization helper
fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

/// Local calendar date an event falls on, if it can be worked out.
pub fn local_date(time: &EventDateTime) -> Option<NaiveDate> {
    if let Some(utc) = time.to_utc() {
        return Some(utc.with_timezone(&Local).date_naive());
    }

    time.date
        .as_deref()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
pub fn format_date_label(time: &EventDateTime) -> String {
    let Some(date) = local_date(time) else {
        return "Date TBA".to_string();
    };

    let today = Local::now().date_naive();
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Format the time portion of an event (e.g. "15:00" or "all-day")
fn format_time(time: &EventDateTime) -> String {
    if time.is_all_day() {
        return "all-day".to_string();
    }

    match time.to_utc() {
        Some(utc) => format!("{:>7}", utc.with_timezone(&Local).format("%H:%M")),
        None => format!("{:>7}", "?"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_day_events_render_as_all_day() {
        assert_eq!(format_time(&EventDateTime::all_day("2025-07-04")), "all-day");
        assert_eq!(
            local_date(&EventDateTime::all_day("2025-07-04")),
            NaiveDate::from_ymd_opt(2025, 7, 4)
        );
    }

    #[test]
    fn empty_date_time_with_date_is_all_day() {
        let time = EventDateTime {
            date_time: Some(String::new()),
            date: Some("2025-07-04".to_string()),
            ..Default::default()
        };
        assert_eq!(format_time(&time), "all-day");
        assert_eq!(format_time(&EventDateTime::default()), "      ?");
    }

    #[test]
    fn reachable_feed_shows_status_and_count() {
        let rendered = ProbeResult::Reachable {
            url: "https://x".to_string(),
            status: 200,
            has_events: true,
            event_count: 2,
            sample: String::new(),
        }
        .render();

        assert!(rendered.contains("https://x"));
        assert!(rendered.contains("200"));
        assert!(rendered.contains("2 events"));
    }

    #[test]
    fn undated_events_get_placeholder_label() {
        assert_eq!(format_date_label(&EventDateTime::default()), "Date TBA");
    }

    #[test]
    fn failed_probe_shows_error() {
        let rendered = ProbeResult::Failed {
            url: "https://x".to_string(),
            error: "timed out".to_string(),
        }
        .render();

        assert!(rendered.contains("https://x"));
        assert!(rendered.contains("timed out"));
    }

    #[test]
    fn pluralize_counts() {
        assert_eq!(pluralize("event", 1), "event");
        assert_eq!(pluralize("event", 3), "events");
    }
}
