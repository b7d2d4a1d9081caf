use anyhow::Result;
use gigcal_core::{feed_url_variants, format_calendar_id};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(calendar_id: &str, json: bool) -> Result<()> {
    let urls = feed_url_variants(calendar_id);

    if json {
        println!("{}", serde_json::to_string_pretty(&urls)?);
        return Ok(());
    }

    println!("📅 {}", calendar_id.bold());
    println!("{}", urls.render());
    Ok(())
}

pub fn run_id(id: &str) -> Result<()> {
    println!("{}", format_calendar_id(id));
    Ok(())
}
