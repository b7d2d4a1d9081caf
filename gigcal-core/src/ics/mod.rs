//! ICS file generation.
//!
//! This module writes single-event calendar objects according to RFC 5545.

mod generate;

pub use generate::{PRODUCT_ID, UID_DOMAIN, build_ics_content, escape_text, ics_filename};
