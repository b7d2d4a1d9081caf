//! Calendar identifier encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escapes everything except alphanumerics and `-_.!~*'()`, like a
/// browser's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// The organization's public calendar.
pub const DEFAULT_CALENDAR_ID: &str = "soundsystemsofmelbourne@gmail.com";

/// Format a calendar id for use in Google and webcal feed URLs.
///
/// Email-style ids only get their `@` escaped: Google's feed paths expect
/// `name%40domain`, and a full encode would mangle ids that are already valid
/// path segments. Anything else is encoded as a URI component.
pub fn format_calendar_id(calendar_id: &str) -> String {
    if calendar_id.contains('@') {
        return calendar_id.replace('@', "%40");
    }

    encode_uri_component(calendar_id)
}

pub(crate) fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}
