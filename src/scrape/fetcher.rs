//! Primary HTTP fetcher
//!
//! This module handles the direct fetch of the target page, including:
//! - Building the per-invocation HTTP client
//! - GET requests with a rotating User-Agent
//! - A fixed-delay retry policy around the GET
//! - Classifying exhausted retries into status vs. transport failures

use crate::config::FetchConfig;
use crate::extract::{parse_page, NetworkPatterns, PageMetadata};
use crate::url::parse_target;
use crate::ScoutError;
use reqwest::{header, Client};
use std::time::Duration;
use url::Url;

/// Bounds on how often and how patiently the primary fetch is retried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Pause between consecutive attempts
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &FetchConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            delay: config.retry_delay(),
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&FetchConfig::default())
    }
}

/// A successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// The URL that was requested
    pub url: Url,
    /// HTTP status code (always 2xx)
    pub status_code: u16,
    /// Page body content
    pub body: String,
}

/// Why a single attempt failed
#[derive(Debug, Clone, PartialEq, Eq)]
enum AttemptFailure {
    /// The server answered with a non-2xx status
    Status(u16),
    /// Connection, timeout, TLS or body-read failure
    Transport(String),
}

impl AttemptFailure {
    fn into_error(self, url: &str, attempts: u32) -> ScoutError {
        match self {
            Self::Status(status) => ScoutError::HttpStatus {
                url: url.to_string(),
                status,
            },
            Self::Transport(reason) => ScoutError::FetchExhausted {
                url: url.to_string(),
                attempts,
                reason,
            },
        }
    }
}

/// Builds the HTTP client owned by a single pipeline invocation
///
/// # Arguments
///
/// * `timeout` - Bound on each request, connect included
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying failed attempts according to `policy`
///
/// # Retry Logic
///
/// | Condition | Action |
/// |-----------|--------|
/// | HTTP 2xx | Success |
/// | HTTP non-2xx | Retry after `policy.delay` |
/// | Timeout / connection / body read error | Retry after `policy.delay` |
/// | Attempts exhausted, last was a status | `ScoutError::HttpStatus` |
/// | Attempts exhausted, last was transport | `ScoutError::FetchExhausted` |
/// | URL does not parse | `ScoutError::Url`, no request sent |
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The normalized URL to fetch
/// * `user_agent` - Value for the User-Agent header
/// * `policy` - Attempt budget and delay
pub async fn fetch_page(
    client: &Client,
    url: &str,
    user_agent: &str,
    policy: RetryPolicy,
) -> Result<FetchedPage, ScoutError> {
    let target = parse_target(url)?;
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        tracing::debug!("GET {} (attempt {}/{})", target, attempt, max_attempts);

        match fetch_once(client, &target, user_agent).await {
            Ok(page) => return Ok(page),
            Err(failure) if attempt < max_attempts => {
                tracing::debug!(
                    "Attempt {} for {} failed ({:?}), retrying in {:?}",
                    attempt,
                    target,
                    failure,
                    policy.delay
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
            Err(failure) => return Err(failure.into_error(url, attempt)),
        }
    }
}

/// Sends one GET and reads the body
async fn fetch_once(
    client: &Client,
    target: &Url,
    user_agent: &str,
) -> Result<FetchedPage, AttemptFailure> {
    let response = client
        .get(target.clone())
        .header(header::USER_AGENT, user_agent)
        .send()
        .await
        .map_err(|e| AttemptFailure::Transport(classify_transport_error(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AttemptFailure::Status(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AttemptFailure::Transport(format!("failed to read body: {}", e)))?;

    Ok(FetchedPage {
        url: target.clone(),
        status_code: status.as_u16(),
        body,
    })
}

fn classify_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timeout".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}

/// Fetches the page and extracts its metadata
///
/// This is the whole primary path: retrying GET, HTML parse, extraction.
pub async fn fetch_metadata(
    client: &Client,
    url: &str,
    user_agent: &str,
    policy: RetryPolicy,
    patterns: &NetworkPatterns,
) -> Result<PageMetadata, ScoutError> {
    let page = fetch_page(client, url, user_agent, policy).await?;
    tracing::debug!(
        "Fetched {} ({} bytes, status {})",
        page.url,
        page.body.len(),
        page.status_code
    );
    Ok(parse_page(&page.body, &page.url, patterns))
}
