use std::path::Path;

use anyhow::Result;
use gigcal_core::{FeedFormat, GigcalConfig, trigger_full_calendar_download};
use owo_colors::OwoColorize;

use crate::utils::tui;

pub async fn run(config: &GigcalConfig, calendar_id: &str, format: FeedFormat, dir: &Path) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;

    let spinner = tui::create_spinner(format!("Downloading {} calendar", format));
    let result = trigger_full_calendar_download(&client, calendar_id, format, dir).await;
    spinner.finish_and_clear();

    let path = result?;
    println!("{} {}", "Saved".green(), path.display());
    Ok(())
}
