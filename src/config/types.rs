use serde::Deserialize;
use std::time::Duration;

/// Third-party scraping endpoint used when the direct fetch fails
pub const DEFAULT_FALLBACK_ENDPOINT: &str = "https://my-third-party-api.com/api/v1/scrape";

/// Browser identities the primary fetcher rotates through when no pool is configured
pub const DEFAULT_USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14.4; rv:125.0) Gecko/20100101 Firefox/125.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 14_4_1) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36 Edg/124.0.0.0",
    "Mozilla/5.0 (iPhone; CPU iPhone OS 17_4_1 like Mac OS X) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.4.1 Mobile/15E148 Safari/604.1",
];

/// Main configuration structure for Contact-Scout
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoutConfig {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Primary fetch behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FetchConfig {
    /// Per-request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total number of attempts, including the first one
    #[serde(rename = "max-attempts", default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Fixed pause between attempts (milliseconds)
    #[serde(rename = "retry-delay-ms", default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

/// Third-party scraping API settings
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackConfig {
    /// Base URL of the scraping API
    #[serde(default = "default_fallback_endpoint")]
    pub endpoint: String,

    /// Query parameter carrying the target URL
    #[serde(rename = "query-param", default = "default_query_param")]
    pub query_param: String,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            endpoint: default_fallback_endpoint(),
            query_param: default_query_param(),
        }
    }
}

/// User-Agent rotation pool
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserAgentConfig {
    /// Candidate User-Agent strings; empty means the built-in pool
    #[serde(default)]
    pub pool: Vec<String>,
}

impl UserAgentConfig {
    /// Returns the configured pool, or the built-in one when none was given
    pub fn effective_pool(&self) -> Vec<String> {
        if self.pool.is_empty() {
            DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect()
        } else {
            self.pool.clone()
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_max_attempts() -> u32 {
    2
}

fn default_retry_delay_ms() -> u64 {
    2000
}

fn default_fallback_endpoint() -> String {
    DEFAULT_FALLBACK_ENDPOINT.to_string()
}

fn default_query_param() -> String {
    "url".to_string()
}
