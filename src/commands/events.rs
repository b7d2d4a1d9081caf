use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use gigcal_core::{CalendarEvent, EventDateTime, google_event_url, load_events};
use owo_colors::OwoColorize;

use crate::render::{Render, format_date_label, local_date};

pub fn run(file: &Path) -> Result<()> {
    let mut events = load_events(file)
        .with_context(|| format!("Failed to read events from {}", file.display()))?;

    if events.is_empty() {
        println!("{}", "No upcoming events".dimmed());
        return Ok(());
    }

    // Sort by start time; undated events go last
    events.sort_by_cached_key(|e| {
        let key = sort_key(&e.start);
        (key.is_none(), key)
    });

    // Group events by day and print
    let mut current_date: Option<String> = None;

    for event in &events {
        let date_label = format_date_label(&event.start);

        if current_date.as_ref() != Some(&date_label) {
            if current_date.is_some() {
                println!();
            }
            println!("{}", date_label.bold());
            current_date = Some(date_label);
        }

        print_event(event);
    }

    Ok(())
}

fn print_event(event: &CalendarEvent) {
    println!("{}", event.render());
    println!("          {}", google_event_url(event).dimmed());
}

fn sort_key(time: &EventDateTime) -> Option<DateTime<Utc>> {
    time.to_utc().or_else(|| {
        local_date(time)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc())
    })
}
