//! Output record types returned by the pipeline

use crate::extract::{PageMetadata, SocialLinks};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

/// Metadata for one successfully scraped page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRecord {
    /// The normalized URL that was scraped
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Absolute favicon URL
    pub favicon: Option<String>,
    pub emails: BTreeSet<String>,
    pub phone_numbers: BTreeSet<String>,
    pub social_links: SocialLinks,
    /// The scraping API response; only set when the fallback path produced this record
    pub original_response: Option<Value>,
}

impl MetadataRecord {
    /// Merges extracted metadata into a record
    ///
    /// Emails and phone numbers are collapsed into sets and empty strings are
    /// dropped. Phone numbers are compared verbatim, so `415-555-2671` and
    /// `(415) 555-2671` stay distinct.
    pub fn from_metadata(
        url: impl Into<String>,
        metadata: PageMetadata,
        original_response: Option<Value>,
    ) -> Self {
        Self {
            url: url.into(),
            title: metadata.title,
            description: metadata.description,
            favicon: metadata.favicon,
            emails: into_set(metadata.emails),
            phone_numbers: into_set(metadata.phone_numbers),
            social_links: metadata.social_links,
            original_response,
        }
    }

    /// Returns true if this record came from the scraping API
    pub fn used_fallback(&self) -> bool {
        self.original_response.is_some()
    }
}

fn into_set(values: Vec<String>) -> BTreeSet<String> {
    values.into_iter().filter(|value| !value.is_empty()).collect()
}

/// Terminal failure: neither the page nor the scraping API produced data
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeFailure {
    pub error: String,
    /// The normalized URL that was attempted
    pub url: String,
}

/// What a scrape returns: always one of these, never a raw error
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ScrapeOutcome {
    Success(MetadataRecord),
    Failed(ScrapeFailure),
}

impl ScrapeOutcome {
    pub fn failed(url: impl Into<String>, error: impl Into<String>) -> Self {
        Self::Failed(ScrapeFailure {
            error: error.into(),
            url: url.into(),
        })
    }

    /// The normalized URL, present on both variants
    pub fn url(&self) -> &str {
        match self {
            Self::Success(record) => &record.url,
            Self::Failed(failure) => &failure.url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn record(&self) -> Option<&MetadataRecord> {
        match self {
            Self::Success(record) => Some(record),
            Self::Failed(_) => None,
        }
    }

    pub fn into_record(self) -> Option<MetadataRecord> {
        match self {
            Self::Success(record) => Some(record),
            Self::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success(_) => None,
            Self::Failed(failure) => Some(&failure.error),
        }
    }

    /// Emails found; empty on failure
    pub fn emails(&self) -> Vec<&str> {
        self.record()
            .map(|record| record.emails.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Phone numbers found; empty on failure
    pub fn phone_numbers(&self) -> Vec<&str> {
        self.record()
            .map(|record| record.phone_numbers.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Social links found; empty on failure
    pub fn social_links(&self) -> SocialLinks {
        self.record()
            .map(|record| record.social_links.clone())
            .unwrap_or_default()
    }

    pub fn original_response(&self) -> Option<&Value> {
        self.record()
            .and_then(|record| record.original_response.as_ref())
    }
}
