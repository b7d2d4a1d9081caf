//! Feed download integration tests with wiremock.

use gigcal_core::download::FULL_CALENDAR_FILENAME;
use gigcal_core::{GigcalError, trigger_feed_download};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FEED_BODY: &str = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nEND:VCALENDAR\r\n";

#[tokio::test]
async fn feed_is_saved_to_calendar_file() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/calendar/ical/x/public/full.ics"))
        .respond_with(ResponseTemplate::new(200).set_body_string(FEED_BODY))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/calendar/ical/x/public/full.ics", mock_server.uri());

    let saved = trigger_feed_download(&reqwest::Client::new(), &url, dir.path())
        .await
        .unwrap();

    assert_eq!(saved, dir.path().join(FULL_CALENDAR_FILENAME));
    assert_eq!(std::fs::read_to_string(saved).unwrap(), FEED_BODY);
}

#[tokio::test]
async fn error_status_is_a_download_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let url = format!("{}/calendar/ical/missing/public/full.ics", mock_server.uri());

    let err = trigger_feed_download(&reqwest::Client::new(), &url, dir.path())
        .await
        .unwrap_err();

    assert!(matches!(err, GigcalError::Download { .. }), "got {err:?}");
    assert!(err.to_string().contains("404"));
    assert!(!dir.path().join(FULL_CALENDAR_FILENAME).exists());
}
