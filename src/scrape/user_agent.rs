//! User-Agent selection for the primary fetch

use crate::config::{UserAgentConfig, DEFAULT_USER_AGENTS};
use rand::seq::IndexedRandom;

/// Supplies the User-Agent header for each primary fetch
///
/// Implementations must be cheap to call; the pipeline asks for a fresh
/// value on every invocation.
pub trait UserAgentProvider: Send + Sync {
    fn user_agent(&self) -> String;
}

/// Picks a User-Agent uniformly at random from a pool
#[derive(Debug, Clone)]
pub struct RandomUserAgent {
    pool: Vec<String>,
}

impl RandomUserAgent {
    /// Creates a provider over `pool`; an empty pool falls back to the built-in list
    pub fn new(pool: Vec<String>) -> Self {
        if pool.is_empty() {
            Self::default()
        } else {
            Self { pool }
        }
    }

    pub fn from_config(config: &UserAgentConfig) -> Self {
        Self::new(config.effective_pool())
    }

    pub fn pool(&self) -> &[String] {
        &self.pool
    }
}

impl Default for RandomUserAgent {
    fn default() -> Self {
        Self {
            pool: DEFAULT_USER_AGENTS.iter().map(|ua| ua.to_string()).collect(),
        }
    }
}

impl UserAgentProvider for RandomUserAgent {
    fn user_agent(&self) -> String {
        self.pool
            .choose(&mut rand::rng())
            .cloned()
            .unwrap_or_else(|| DEFAULT_USER_AGENTS[0].to_string())
    }
}

/// Always returns the same User-Agent
#[derive(Debug, Clone)]
pub struct FixedUserAgent(String);

impl FixedUserAgent {
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self(user_agent.into())
    }
}

impl UserAgentProvider for FixedUserAgent {
    fn user_agent(&self) -> String {
        self.0.clone()
    }
}
