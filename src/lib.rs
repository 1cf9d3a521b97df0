//! Contact-Scout: contact metadata from a single web page
//!
//! This crate fetches a page (falling back to a third-party scraping API when
//! the direct fetch fails) and extracts its title, description, favicon,
//! email addresses, phone numbers and social-network profile links.

pub mod config;
pub mod extract;
pub mod output;
pub mod scrape;
pub mod url;

use thiserror::Error;

/// Main error type for Contact-Scout operations
#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch failed for {url} after {attempts} attempt(s): {reason}")]
    FetchExhausted {
        url: String,
        attempts: u32,
        reason: String,
    },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("Fallback unavailable for {url}: {reason}")]
    FallbackUnavailable { url: String, reason: String },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] UrlError),
}

impl ScoutError {
    /// Returns true if this failure should hand the request over to the fallback path
    ///
    /// A target the HTTP client cannot parse also escalates: the scraping API
    /// receives the URL as an opaque string and may still resolve it.
    pub fn escalates_to_fallback(&self) -> bool {
        matches!(
            self,
            Self::FetchExhausted { .. } | Self::HttpStatus { .. } | Self::Url(_)
        )
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Invalid URL scheme: {0}")]
    InvalidScheme(String),
}

/// Result type alias for Contact-Scout operations
pub type Result<T> = std::result::Result<T, ScoutError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use config::ScoutConfig;
pub use extract::{SocialLinks, SocialNetwork};
pub use output::{MetadataRecord, ScrapeFailure, ScrapeOutcome};
pub use scrape::{scrape_metadata, FetchMode, Scraper};
pub use crate::url::normalize_url;
