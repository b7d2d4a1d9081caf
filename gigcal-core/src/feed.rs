//! URLs for reaching a calendar feed as a whole.
//!
//! Pure string templating over the formatted calendar id. Nothing here checks
//! that the feed exists; see [`crate::probe`] for that.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::calendar_id::{encode_uri_component, format_calendar_id};

const GOOGLE_HOST: &str = "calendar.google.com";
const GOOGLE_ALT_HOST: &str = "www.google.com";

/// Detail level of Google's public ICS export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    #[default]
    Basic,
    Full,
}

impl FeedFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedFormat::Basic => "basic",
            FeedFormat::Full => "full",
        }
    }
}

impl fmt::Display for FeedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "basic" => Ok(FeedFormat::Basic),
            "full" => Ok(FeedFormat::Full),
            _ => Err(format!(
                "Invalid feed format '{}'. Expected 'basic' or 'full'",
                s
            )),
        }
    }
}

/// Every way of reaching one calendar's feed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedUrls {
    /// Google Calendar web subscribe page
    pub google: String,
    pub ical: ICalUrls,
    pub download: DownloadUrls,
}

/// `webcal://` subscription variants.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ICalUrls {
    pub primary: String,
    /// Same feed on the legacy www.google.com host
    pub alternate: String,
    pub full: String,
    /// Full feed pinned to UTC
    pub with_params: String,
}

/// Plain HTTPS ICS exports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadUrls {
    pub basic: String,
    pub full: String,
}

fn feed_path(formatted_id: &str, format: FeedFormat) -> String {
    format!("/calendar/ical/{}/public/{}.ics", formatted_id, format)
}

/// HTTPS URL of the calendar's public ICS export.
pub fn download_url(calendar_id: &str, format: FeedFormat) -> String {
    let formatted = format_calendar_id(calendar_id);
    format!("https://{}{}", GOOGLE_HOST, feed_path(&formatted, format))
}

/// Google Calendar page that adds the feed to the visitor's calendars.
pub fn google_subscribe_url(calendar_id: &str) -> String {
    feed_url_variants(calendar_id).google
}

/// `webcal://` URL handed to the platform's default calendar app.
pub fn ical_subscribe_url(calendar_id: &str) -> String {
    let formatted = format_calendar_id(calendar_id);
    format!(
        "webcal://{}{}",
        GOOGLE_HOST,
        feed_path(&formatted, FeedFormat::Basic)
    )
}

/// Build every feed URL variant for a calendar.
pub fn feed_url_variants(calendar_id: &str) -> FeedUrls {
    let formatted = format_calendar_id(calendar_id);
    tracing::debug!(original = calendar_id, formatted = %formatted, "calendar id");

    let basic_path = feed_path(&formatted, FeedFormat::Basic);
    let full_path = feed_path(&formatted, FeedFormat::Full);

    let download = DownloadUrls {
        basic: format!("https://{}{}", GOOGLE_HOST, basic_path),
        full: format!("https://{}{}", GOOGLE_HOST, full_path),
    };

    let google = format!(
        "https://{}/calendar/render?cid={}",
        GOOGLE_HOST,
        encode_uri_component(&download.basic)
    );

    let ical = ICalUrls {
        primary: format!("webcal://{}{}", GOOGLE_HOST, basic_path),
        alternate: format!("webcal://{}{}", GOOGLE_ALT_HOST, basic_path),
        full: format!("webcal://{}{}", GOOGLE_HOST, full_path),
        with_params: format!("webcal://{}{}?ctz=UTC", GOOGLE_HOST, full_path),
    };

    let urls = FeedUrls {
        google,
        ical,
        download,
    };
    tracing::debug!(?urls, "calendar urls generated");
    urls
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar_id::DEFAULT_CALENDAR_ID;

    #[test]
    fn variants_for_default_calendar() {
        let urls = feed_url_variants(DEFAULT_CALENDAR_ID);

        assert_eq!(
            urls.download.basic,
            "https://calendar.google.com/calendar/ical/soundsystemsofmelbourne%40gmail.com/public/basic.ics"
        );
        assert_eq!(
            urls.download.full,
            "https://calendar.google.com/calendar/ical/soundsystemsofmelbourne%40gmail.com/public/full.ics"
        );
        assert_eq!(
            urls.ical.primary,
            "webcal://calendar.google.com/calendar/ical/soundsystemsofmelbourne%40gmail.com/public/basic.ics"
        );
        assert_eq!(
            urls.ical.alternate,
            "webcal://www.google.com/calendar/ical/soundsystemsofmelbourne%40gmail.com/public/basic.ics"
        );
        assert_eq!(
            urls.ical.full,
            "webcal://calendar.google.com/calendar/ical/soundsystemsofmelbourne%40gmail.com/public/full.ics"
        );
        assert_eq!(
            urls.ical.with_params,
            "webcal://calendar.google.com/calendar/ical/soundsystemsofmelbourne%40gmail.com/public/full.ics?ctz=UTC"
        );
    }

    #[test]
    fn google_subscribe_wraps_encoded_basic_feed() {
        let url = google_subscribe_url("foo@bar.com");

        assert_eq!(
            url,
            "https://calendar.google.com/calendar/render?cid=https%3A%2F%2Fcalendar.google.com%2Fcalendar%2Fical%2Ffoo%2540bar.com%2Fpublic%2Fbasic.ics"
        );
        let cid = url.split_once("?cid=").unwrap().1;
        assert_eq!(
            percent_encoding::percent_decode_str(cid).decode_utf8().unwrap(),
            download_url("foo@bar.com", FeedFormat::Basic)
        );
    }

    #[test]
    fn google_subscribe_keeps_uri_component_marks() {
        let url = google_subscribe_url("team(1)@bar.com");
        assert!(url.ends_with("%2Fteam(1)%2540bar.com%2Fpublic%2Fbasic.ics"), "{url}");
    }

    #[test]
    fn ical_subscribe_uses_webcal_scheme() {
        let url = ical_subscribe_url("foo@bar.com");

        assert!(url.starts_with("webcal://"));
        assert_eq!(url, feed_url_variants("foo@bar.com").ical.primary);
    }

    #[test]
    fn non_email_ids_are_encoded_in_every_variant() {
        let urls = feed_url_variants("my calendar");

        assert!(urls.download.basic.contains("/ical/my%20calendar/"));
        assert!(urls.ical.alternate.contains("/ical/my%20calendar/"));
        assert!(!urls.ical.full.contains(' '));
    }

    #[test]
    fn download_url_matches_format() {
        assert!(download_url("x@y", FeedFormat::Basic).ends_with("/public/basic.ics"));
        assert!(download_url("x@y", FeedFormat::Full).ends_with("/public/full.ics"));
    }

    #[test]
    fn feed_format_parses_only_known_values() {
        assert_eq!("basic".parse::<FeedFormat>(), Ok(FeedFormat::Basic));
        assert_eq!("FULL".parse::<FeedFormat>(), Ok(FeedFormat::Full));
        assert!("composite".parse::<FeedFormat>().is_err());
        assert!("".parse::<FeedFormat>().is_err());
    }

    #[test]
    fn feed_urls_serialize_with_camel_case_ical_keys() {
        let json = serde_json::to_value(feed_url_variants("x@y")).unwrap();

        assert!(json["ical"]["withParams"].as_str().unwrap().ends_with("?ctz=UTC"));
        assert!(json["download"]["basic"].is_string());
    }
}
