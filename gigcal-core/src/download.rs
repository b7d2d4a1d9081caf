//! Turning generated calendars into files the user can import.

use std::path::{Path, PathBuf};

use crate::error::{GigcalError, GigcalResult};
use crate::event::CalendarEvent;
use crate::feed::{FeedFormat, download_url};
use crate::ics::{build_ics_content, ics_filename};

/// Name given to whole-calendar downloads.
pub const FULL_CALENDAR_FILENAME: &str = "ssom_calendar.ics";

/// Write a single event's .ics file into `dir` and return its path.
pub fn trigger_ics_download(event: &CalendarEvent, dir: &Path) -> GigcalResult<PathBuf> {
    let content = build_ics_content(event);
    let path = dir.join(ics_filename(event));

    let written = std::fs::create_dir_all(dir).and_then(|_| std::fs::write(&path, content));

    if let Err(source) = written {
        tracing::error!(event = %event.id, path = %path.display(), error = %source, "error generating iCal file");
        return Err(GigcalError::FileGeneration { source });
    }

    tracing::info!(path = %path.display(), "wrote event file");
    Ok(path)
}

/// Fetch the calendar's public export and save it as
/// [`FULL_CALENDAR_FILENAME`] in `dir`.
pub async fn trigger_full_calendar_download(
    client: &reqwest::Client,
    calendar_id: &str,
    format: FeedFormat,
    dir: &Path,
) -> GigcalResult<PathBuf> {
    trigger_feed_download(client, &download_url(calendar_id, format), dir).await
}

/// Download any ICS feed URL into `dir`.
pub async fn trigger_feed_download(
    client: &reqwest::Client,
    url: &str,
    dir: &Path,
) -> GigcalResult<PathBuf> {
    match fetch_to_file(client, url, dir).await {
        Ok(path) => {
            tracing::info!(url, path = %path.display(), "downloaded calendar");
            Ok(path)
        }
        Err(reason) => {
            tracing::error!(url, error = %reason, "error downloading calendar file");
            Err(GigcalError::Download { reason })
        }
    }
}

async fn fetch_to_file(client: &reqwest::Client, url: &str, dir: &Path) -> Result<PathBuf, String> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| e.to_string())?;

    let body = response.bytes().await.map_err(|e| e.to_string())?;

    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| format!("Could not create {}: {e}", dir.display()))?;

    let path = dir.join(FULL_CALENDAR_FILENAME);
    tokio::fs::write(&path, &body)
        .await
        .map_err(|e| format!("Could not write {}: {e}", path.display()))?;

    Ok(path)
}
