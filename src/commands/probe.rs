use anyhow::Result;
use gigcal_core::{GigcalConfig, probe_calendar_access};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::utils::tui;

pub async fn run(config: &GigcalConfig, calendar_id: &str, json: bool) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(config.http_timeout())
        .build()?;

    let spinner = tui::create_spinner("Testing calendar access".to_string());
    let results = probe_calendar_access(&client, calendar_id).await;
    spinner.finish_and_clear();

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("📅 {}", calendar_id.bold());
    for result in &results {
        println!("{}", result.render());
    }

    let reachable = results.iter().filter(|r| r.is_reachable()).count();
    if reachable < results.len() {
        println!(
            "\n{}",
            format!("{} of {} feeds unreachable", results.len() - reachable, results.len()).yellow()
        );
    }

    Ok(())
}
