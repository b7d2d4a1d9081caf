//! Calendar interop for gigcal.
//!
//! Pure functions that turn a calendar id or a single event record into
//! something another calendar app understands:
//! - feed URLs (Google subscribe, `webcal://`, direct ICS downloads)
//! - Google Calendar "add event" links
//! - single-event ICS documents
//!
//! plus the few impure edges around them: writing/downloading `.ics` files
//! and probing the public feed.

pub mod calendar_id;
pub mod config;
pub mod download;
pub mod error;
pub mod event;
pub mod feed;
pub mod google;
pub mod ics;
pub mod probe;

pub use calendar_id::{DEFAULT_CALENDAR_ID, format_calendar_id};
pub use crate::config::GigcalConfig;
pub use download::{trigger_feed_download, trigger_full_calendar_download, trigger_ics_download};
pub use error::{GigcalError, GigcalResult};
pub use event::{CalendarEvent, EventDateTime, find_event, load_events, parse_events};
pub use feed::{
    FeedFormat, FeedUrls, download_url, feed_url_variants, google_subscribe_url,
    ical_subscribe_url,
};
pub use google::google_event_url;
pub use ics::{build_ics_content, escape_text, ics_filename};
pub use probe::{ProbeResult, probe_calendar_access, probe_urls};
