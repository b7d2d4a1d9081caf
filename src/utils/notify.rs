use gigcal_core::GigcalError;
use owo_colors::OwoColorize;

/// Tell the user what went wrong in plain words; the full error chain only
/// goes to the log.
pub fn failure(error: &anyhow::Error) {
    let message = match error.downcast_ref::<GigcalError>() {
        Some(e) => e.user_message(),
        None => format!("{:#}", error),
    };

    tracing::error!(error = ?error, "command failed");
    eprintln!("{}", message.red());
}
