use std::path::Path;

use anyhow::{Context, Result};
use gigcal_core::error::GOOGLE_CALENDAR_MESSAGE;
use gigcal_core::{find_event, google_event_url, load_events};

pub fn run(file: &Path, event_id: &str, open: bool) -> Result<()> {
    let events = load_events(file)
        .with_context(|| format!("Failed to read events from {}", file.display()))?;
    let event = find_event(&events, event_id)?;

    let url = google_event_url(event);
    println!("{}", url);

    if open {
        if let Err(e) = open::that(&url) {
            tracing::error!(url = %url, error = %e, "error opening Google Calendar");
            anyhow::bail!(GOOGLE_CALENDAR_MESSAGE);
        }
    }

    Ok(())
}
