//! ICS calendar document generation.
//!
//! This module writes movie release calendars according to RFC 5545.

mod generate;

pub use generate::{CALENDAR_MIME_TYPE, IcsDocument, SkippedRelease, generate, generate_at};
