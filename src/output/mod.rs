//! Output module for scrape results
//!
//! This module handles:
//! - The record types handed back to callers
//! - Rendering an outcome as JSON

mod record;

pub use record::{MetadataRecord, ScrapeFailure, ScrapeOutcome};

/// Renders an outcome as JSON, pretty-printed unless `compact` is set
///
/// # Example
///
/// ```
/// use contact_scout::output::{render_json, ScrapeOutcome};
///
/// let outcome = ScrapeOutcome::failed("https://example.com", "unavailable");
/// let json = render_json(&outcome, true).unwrap();
/// assert_eq!(json, r#"{"error":"unavailable","url":"https://example.com"}"#);
/// ```
pub fn render_json(outcome: &ScrapeOutcome, compact: bool) -> serde_json::Result<String> {
    if compact {
        serde_json::to_string(outcome)
    } else {
        serde_json::to_string_pretty(outcome)
    }
}
