mod commands;
mod render;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use gigcal_core::{FeedFormat, GigcalConfig};

#[derive(Parser)]
#[command(name = "gigcal")]
#[command(about = "List upcoming gigs and add them, or the whole feed, to your calendar app")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum SubscribeTarget {
    /// Google Calendar web page
    Google,
    /// webcal:// link for Apple Calendar and other iCal clients
    Ical,
}

#[derive(Subcommand)]
enum Commands {
    /// List events from a Google Calendar API events file
    Events {
        /// JSON file: an events.list response or an array of events
        file: PathBuf,
    },
    /// Print a calendar id formatted for feed URLs
    Id { id: String },
    /// Print every feed URL variant for a calendar
    Urls {
        /// Calendar id (defaults to calendar_id from config)
        #[arg(short, long)]
        calendar: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Subscribe to the whole calendar
    Subscribe {
        #[arg(value_enum)]
        target: SubscribeTarget,

        /// Calendar id (defaults to calendar_id from config)
        #[arg(short, long)]
        calendar: Option<String>,

        /// Hand the URL to the browser / default calendar app
        #[arg(long)]
        open: bool,
    },
    /// Google Calendar link that adds a single event
    Add {
        file: PathBuf,
        event_id: String,

        /// Open the link in the browser
        #[arg(long)]
        open: bool,
    },
    /// Save a single event as an .ics file
    Ics {
        file: PathBuf,
        event_id: String,

        /// Print the document instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Directory to save into (defaults to download_dir from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Download the whole calendar as an .ics file
    Download {
        /// Calendar id (defaults to calendar_id from config)
        #[arg(short, long)]
        calendar: Option<String>,

        /// Feed detail level: basic or full
        #[arg(short, long, default_value = "full")]
        format: FeedFormat,

        /// Directory to save into (defaults to download_dir from config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },
    /// Check that the public feed can be fetched
    Probe {
        /// Calendar id (defaults to calendar_id from config)
        #[arg(short, long)]
        calendar: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    utils::logging::init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            utils::notify::failure(&e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Events { file } => commands::events::run(&file),
        Commands::Id { id } => commands::urls::run_id(&id),
        Commands::Urls { calendar, json } => commands::urls::run(&resolve_calendar(calendar)?, json),
        Commands::Subscribe {
            target,
            calendar,
            open,
        } => commands::subscribe::run(target, &resolve_calendar(calendar)?, open),
        Commands::Add {
            file,
            event_id,
            open,
        } => commands::add::run(&file, &event_id, open),
        Commands::Ics {
            file,
            event_id,
            stdout,
            dir,
        } => commands::ics::run(&file, &event_id, stdout, dir.as_deref()),
        Commands::Download {
            calendar,
            format,
            dir,
        } => {
            let config = GigcalConfig::load()?;
            let calendar_id = calendar.unwrap_or_else(|| config.calendar_id.clone());
            let dir = dir.unwrap_or_else(|| config.download_dir());
            commands::download::run(&config, &calendar_id, format, &dir).await
        }
        Commands::Probe { calendar, json } => {
            let config = GigcalConfig::load()?;
            let calendar_id = calendar.unwrap_or_else(|| config.calendar_id.clone());
            commands::probe::run(&config, &calendar_id, json).await
        }
    }
}

/// `--calendar` when given; the config file is only read otherwise.
fn resolve_calendar(calendar: Option<String>) -> Result<String> {
    match calendar {
        Some(id) => Ok(id),
        None => Ok(GigcalConfig::load()?.calendar_id),
    }
}
