use std::path::Path;

use anyhow::{Context, Result};
use gigcal_core::{GigcalConfig, build_ics_content, find_event, load_events, trigger_ics_download};
use owo_colors::OwoColorize;

pub fn run(file: &Path, event_id: &str, stdout: bool, dir: Option<&Path>) -> Result<()> {
    let events = load_events(file)
        .with_context(|| format!("Failed to read events from {}", file.display()))?;
    let event = find_event(&events, event_id)?;

    if stdout {
        print!("{}\r\n", build_ics_content(event));
        return Ok(());
    }

    let dir = match dir {
        Some(dir) => dir.to_path_buf(),
        None => GigcalConfig::load()?.download_dir(),
    };

    let path = trigger_ics_download(event, &dir)?;
    println!("{} {}", "Saved".green(), path.display());
    Ok(())
}
