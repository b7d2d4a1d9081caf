//! Error types for gigcal.
//!
//! Formatting and serialization never fail. Only the functions that touch the
//! filesystem, the network or the OS hand-off produce these errors, and each
//! variant carries a short non-technical message for the person using the app.

use thiserror::Error;

pub const GOOGLE_CALENDAR_MESSAGE: &str =
    "Unable to add to Google Calendar. Please check your connection and try again.";
pub const FILE_GENERATION_MESSAGE: &str = "Unable to create iCal file. Please try again.";
pub const SUBSCRIPTION_MESSAGE: &str = "Unable to subscribe to calendar. Please try again later.";
pub const DOWNLOAD_MESSAGE: &str = "Unable to download calendar file. Please try again later.";

/// Errors that can occur in gigcal operations.
#[derive(Error, Debug)]
pub enum GigcalError {
    #[error("Could not write calendar file: {source}")]
    FileGeneration {
        #[source]
        source: std::io::Error,
    },

    #[error("Could not download calendar: {reason}")]
    Download { reason: String },

    #[error("Could not open subscription: {reason}")]
    Subscription { reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid events file: {0}")]
    EventsFile(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GigcalError {
    /// Message safe to show to an end user. Underlying detail belongs in the logs.
    pub fn user_message(&self) -> String {
        match self {
            GigcalError::FileGeneration { .. } => FILE_GENERATION_MESSAGE.to_string(),
            GigcalError::Download { .. } => DOWNLOAD_MESSAGE.to_string(),
            GigcalError::Subscription { .. } => SUBSCRIPTION_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for gigcal operations.
pub type GigcalResult<T> = Result<T, GigcalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_underlying_detail() {
        let err = GigcalError::Download {
            reason: "HTTP 404 from https://calendar.google.com/...".to_string(),
        };

        assert_eq!(err.user_message(), DOWNLOAD_MESSAGE);
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn file_generation_keeps_io_source() {
        use std::error::Error as _;

        let err = GigcalError::FileGeneration {
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        };

        assert_eq!(err.user_message(), FILE_GENERATION_MESSAGE);
        assert!(err.source().is_some());
    }

    #[test]
    fn other_variants_use_display_text() {
        let err = GigcalError::EventNotFound("abc123".to_string());
        assert_eq!(err.user_message(), "Event not found: abc123");
    }
}
