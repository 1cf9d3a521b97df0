//! Scrape module: the fetch-extract-fallback pipeline
//!
//! This module contains the network side of a scrape, including:
//! - The primary fetcher with its fixed-delay retry policy
//! - The fallback fetcher over the third-party scraping API
//! - User-Agent rotation
//! - The coordinator that sequences the two paths and merges the result

mod coordinator;
mod fallback;
mod fetcher;
mod user_agent;

pub use coordinator::{scrape_metadata, FetchMode, PipelineState, Scraper};
pub use fallback::{
    extract_from_body, fetch_fallback, whatsapp_phone, ApiBody, ApiEnvelope, ApiMeta,
    FallbackResult,
};
pub use fetcher::{build_http_client, fetch_metadata, fetch_page, FetchedPage, RetryPolicy};
pub use user_agent::{FixedUserAgent, RandomUserAgent, UserAgentProvider};
