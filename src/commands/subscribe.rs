use anyhow::Result;
use gigcal_core::{GigcalError, google_subscribe_url, ical_subscribe_url};

use crate::SubscribeTarget;

pub fn run(target: SubscribeTarget, calendar_id: &str, open: bool) -> Result<()> {
    let url = match target {
        SubscribeTarget::Google => google_subscribe_url(calendar_id),
        SubscribeTarget::Ical => ical_subscribe_url(calendar_id),
    };

    println!("{}", url);

    if open {
        open::that(&url).map_err(|e| {
            tracing::error!(url = %url, error = %e, "error opening subscription");
            GigcalError::Subscription {
                reason: e.to_string(),
            }
        })?;
    }

    Ok(())
}
