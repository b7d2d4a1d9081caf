//! Calendar-access diagnostic.
//!
//! Fetches the public ICS exports and reports what came back. Developer
//! tooling: every URL gets an entry, and a failure is recorded in that entry
//! rather than returned.

use serde::Serialize;

use crate::feed::feed_url_variants;

const SAMPLE_CHARS: usize = 200;
const VEVENT_MARKER: &str = "BEGIN:VEVENT";

/// Outcome of fetching one feed URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged, rename_all_fields = "camelCase")]
pub enum ProbeResult {
    Reachable {
        url: String,
        status: u16,
        has_events: bool,
        event_count: usize,
        sample: String,
    },
    Failed {
        url: String,
        error: String,
    },
}

impl ProbeResult {
    pub fn url(&self) -> &str {
        match self {
            ProbeResult::Reachable { url, .. } | ProbeResult::Failed { url, .. } => url.as_str(),
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, ProbeResult::Reachable { .. })
    }

    fn from_body(url: &str, status: u16, body: &str) -> Self {
        let event_count = body.matches(VEVENT_MARKER).count();
        let mut sample: String = body.chars().take(SAMPLE_CHARS).collect();
        sample.push_str("...");

        ProbeResult::Reachable {
            url: url.to_string(),
            status,
            has_events: event_count > 0,
            event_count,
            sample,
        }
    }
}

/// Probe the basic and full download URLs for a calendar.
pub async fn probe_calendar_access(client: &reqwest::Client, calendar_id: &str) -> Vec<ProbeResult> {
    let urls = feed_url_variants(calendar_id).download;
    probe_urls(client, &[urls.basic, urls.full]).await
}

/// Fetch each URL in turn, collecting one result per URL.
pub async fn probe_urls(client: &reqwest::Client, urls: &[String]) -> Vec<ProbeResult> {
    tracing::debug!(count = urls.len(), "testing calendar access");

    let mut results = Vec::with_capacity(urls.len());
    for url in urls {
        let result = probe_one(client, url).await;
        if let ProbeResult::Failed { ref error, .. } = result {
            tracing::warn!(url = %url, error = %error, "calendar probe failed");
        }
        results.push(result);
    }

    results
}

async fn probe_one(client: &reqwest::Client, url: &str) -> ProbeResult {
    let fetched = async {
        let response = client.get(url).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok::<_, reqwest::Error>((status, body))
    }
    .await;

    match fetched {
        Ok((status, body)) => ProbeResult::from_body(url, status, &body),
        Err(e) => ProbeResult::Failed {
            url: url.to_string(),
            error: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_vevent_blocks() {
        let body = "BEGIN:VCALENDAR\r\nBEGIN:VEVENT\r\nEND:VEVENT\r\nBEGIN:VEVENT\r\nEND:VEVENT\r\nEND:VCALENDAR";

        match ProbeResult::from_body("https://x", 200, body) {
            ProbeResult::Reachable {
                status,
                has_events,
                event_count,
                ..
            } => {
                assert_eq!(status, 200);
                assert!(has_events);
                assert_eq!(event_count, 2);
            }
            other => panic!("expected reachable, got {other:?}"),
        }
    }

    #[test]
    fn sample_is_truncated_on_char_boundaries() {
        let body = "é".repeat(500);

        let ProbeResult::Reachable { sample, has_events, .. } =
            ProbeResult::from_body("https://x", 200, &body)
        else {
            panic!("expected reachable");
        };

        assert!(!has_events);
        assert_eq!(sample.chars().count(), SAMPLE_CHARS + 3);
        assert!(sample.ends_with("..."));
    }

    #[test]
    fn failed_result_serializes_error_field() {
        let result = ProbeResult::Failed {
            url: "https://x".to_string(),
            error: "connection refused".to_string(),
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["error"], "connection refused");
        assert!(json.get("status").is_none());
        assert!(!result.is_reachable());
        assert_eq!(result.url(), "https://x");
    }

    #[test]
    fn reachable_result_serializes_camel_case() {
        let json = serde_json::to_value(ProbeResult::from_body("https://x", 404, "Not Found")).unwrap();

        assert_eq!(json["status"], 404);
        assert_eq!(json["hasEvents"], false);
        assert_eq!(json["eventCount"], 0);
    }
}
