//! Configuration module for Contact-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every setting has a default, so a scrape can run without any file at all.
//!
//! # Example
//!
//! ```no_run
//! use contact_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scout.toml")).unwrap();
//! println!("Fallback endpoint: {}", config.fallback.endpoint);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    FallbackConfig, FetchConfig, ScoutConfig, UserAgentConfig, DEFAULT_FALLBACK_ENDPOINT,
    DEFAULT_USER_AGENTS,
};

// Re-export parser functions
pub use parser::{load_config, parse_config};
