//! Pipeline coordinator - fetch, escalate, merge
//!
//! A scrape moves through a small state machine:
//!
//! ```text
//! normalize ─┬─ PrimaryFirst ──> PrimaryAttempt ─┬─ ok ───────────────> Done(Success)
//!            │                                   ├─ escalating error ─> FallbackAttempt
//!            │                                   └─ other error ──────> Done(Failed)
//!            └─ ForceFallback ─> FallbackAttempt ─┬─ ok ──> Done(Success)
//!                                                 └─ err ─> Done(Failed)
//! ```
//!
//! Transitions out of each attempt are pure functions of the attempt's
//! result, so the escalation decision can be tested without a network.

use crate::config::{load_config, ScoutConfig};
use crate::extract::{NetworkPatterns, PageMetadata, SOCIAL_NETWORKS};
use crate::output::{MetadataRecord, ScrapeOutcome};
use crate::scrape::fallback::{fetch_fallback, FallbackResult};
use crate::scrape::fetcher::{build_http_client, fetch_metadata, RetryPolicy};
use crate::scrape::user_agent::{RandomUserAgent, UserAgentProvider};
use crate::url::normalize_url;
use crate::ScoutError;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;

/// Which source a scrape starts from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FetchMode {
    /// Fetch the page directly, escalating to the scraping API on failure
    #[default]
    PrimaryFirst,
    /// Skip the direct fetch and go straight to the scraping API
    ForceFallback,
}

impl FetchMode {
    pub fn from_flag(use_fallback: bool) -> Self {
        if use_fallback {
            Self::ForceFallback
        } else {
            Self::PrimaryFirst
        }
    }
}

/// Where a scrape currently stands
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    /// The direct fetch is next
    PrimaryAttempt { url: String },

    /// The scraping API is next; `cause` holds the primary failure, if any
    FallbackAttempt { url: String, cause: Option<String> },

    /// Finished, one way or the other
    Done(ScrapeOutcome),
}

impl PipelineState {
    /// Normalizes the input URL and picks the first attempt
    pub fn start(input: &str, mode: FetchMode) -> Self {
        let url = normalize_url(input);
        match mode {
            FetchMode::PrimaryFirst => Self::PrimaryAttempt { url },
            FetchMode::ForceFallback => Self::FallbackAttempt { url, cause: None },
        }
    }

    /// Transition after the direct fetch completes
    ///
    /// Exhausted retries and HTTP status failures escalate to the fallback
    /// path with a warning; they are never reported to the caller as such.
    pub fn after_primary(url: String, result: Result<PageMetadata, ScoutError>) -> Self {
        match result {
            Ok(metadata) => {
                tracing::info!("Scraped {} directly", url);
                Self::Done(ScrapeOutcome::Success(MetadataRecord::from_metadata(
                    url, metadata, None,
                )))
            }
            Err(e) if e.escalates_to_fallback() => {
                tracing::warn!(
                    "Failed to fetch {} directly, using third-party API: {}",
                    url,
                    e
                );
                Self::FallbackAttempt {
                    url,
                    cause: Some(e.to_string()),
                }
            }
            Err(e) => {
                tracing::error!("Scrape of {} failed: {}", url, e);
                Self::Done(ScrapeOutcome::failed(url, e.to_string()))
            }
        }
    }

    /// Transition after the scraping API call completes; always terminal
    pub fn after_fallback(
        url: String,
        cause: Option<String>,
        result: Result<FallbackResult, ScoutError>,
    ) -> Self {
        match result {
            Ok(fallback) => {
                tracing::info!("Scraped {} through the third-party API", url);
                Self::Done(ScrapeOutcome::Success(MetadataRecord::from_metadata(
                    url,
                    fallback.metadata,
                    Some(fallback.original_response),
                )))
            }
            Err(e) => {
                tracing::error!("Failed to fetch {} even with third-party API: {}", url, e);
                let error = match cause {
                    Some(cause) => format!("{} (direct fetch: {})", e, cause),
                    None => e.to_string(),
                };
                Self::Done(ScrapeOutcome::failed(url, error))
            }
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::PrimaryAttempt { url } | Self::FallbackAttempt { url, .. } => url,
            Self::Done(outcome) => outcome.url(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

/// Runs scrapes with a fixed configuration
///
/// Holds only immutable settings, so one `Scraper` can be cloned into many
/// concurrent tasks. Every call to [`Scraper::scrape`] builds and drops its
/// own HTTP client.
#[derive(Clone)]
pub struct Scraper {
    config: Arc<ScoutConfig>,
    user_agents: Arc<dyn UserAgentProvider>,
    patterns: &'static NetworkPatterns,
}

impl Scraper {
    /// Creates a scraper that rotates User-Agents from the configured pool
    pub fn new(config: ScoutConfig) -> Self {
        let user_agents = RandomUserAgent::from_config(&config.user_agent);
        Self {
            config: Arc::new(config),
            user_agents: Arc::new(user_agents),
            patterns: SOCIAL_NETWORKS,
        }
    }

    /// Creates a scraper from a TOML configuration file
    pub fn from_config_file(path: &Path) -> Result<Self, ScoutError> {
        let config = load_config(path)?;
        Ok(Self::new(config))
    }

    /// Replaces the User-Agent source
    pub fn with_user_agent_provider(mut self, provider: impl UserAgentProvider + 'static) -> Self {
        self.user_agents = Arc::new(provider);
        self
    }

    /// Replaces the social-network table
    pub fn with_network_patterns(mut self, patterns: &'static NetworkPatterns) -> Self {
        self.patterns = patterns;
        self
    }

    pub fn config(&self) -> &ScoutConfig {
        &self.config
    }

    /// Scrapes `url`, returning a record or an error record; never fails outright
    ///
    /// # Example
    ///
    /// ```no_run
    /// use contact_scout::{FetchMode, ScoutConfig, Scraper};
    ///
    /// # async fn example() {
    /// let scraper = Scraper::new(ScoutConfig::default());
    /// let outcome = scraper.scrape("example.com", FetchMode::PrimaryFirst).await;
    /// println!("{}", outcome.url());
    /// # }
    /// ```
    pub async fn scrape(&self, url: &str, mode: FetchMode) -> ScrapeOutcome {
        let mut state = PipelineState::start(url, mode);

        let client = match build_http_client(self.config.fetch.timeout()) {
            Ok(client) => client,
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                return ScrapeOutcome::failed(state.url(), ScoutError::from(e).to_string());
            }
        };

        loop {
            state = match state {
                PipelineState::PrimaryAttempt { url } => {
                    let result = self.run_primary(&client, &url).await;
                    PipelineState::after_primary(url, result)
                }
                PipelineState::FallbackAttempt { url, cause } => {
                    let result =
                        fetch_fallback(&client, &self.config.fallback, &url, self.patterns).await;
                    PipelineState::after_fallback(url, cause, result)
                }
                PipelineState::Done(outcome) => return outcome,
            };
        }
    }

    async fn run_primary(&self, client: &Client, url: &str) -> Result<PageMetadata, ScoutError> {
        let user_agent = self.user_agents.user_agent();
        tracing::debug!("Fetching {} as {}", url, user_agent);
        fetch_metadata(
            client,
            url,
            &user_agent,
            RetryPolicy::from_config(&self.config.fetch),
            self.patterns,
        )
        .await
    }
}

impl Default for Scraper {
    fn default() -> Self {
        Self::new(ScoutConfig::default())
    }
}

/// Scrapes `url` with the default configuration
///
/// `use_fallback` skips the direct fetch and queries the scraping API only.
pub async fn scrape_metadata(url: &str, use_fallback: bool) -> ScrapeOutcome {
    Scraper::default()
        .scrape(url, FetchMode::from_flag(use_fallback))
        .await
}
