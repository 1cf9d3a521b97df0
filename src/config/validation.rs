use crate::config::types::{FallbackConfig, FetchConfig, ScoutConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &ScoutConfig) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_fallback_config(&config.fallback)?;
    validate_user_agent_config(&config.user_agent)?;
    Ok(())
}

/// Validates primary fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 || config.timeout_secs > 300 {
        return Err(ConfigError::Validation(format!(
            "timeout-secs must be between 1 and 300, got {}",
            config.timeout_secs
        )));
    }

    if config.max_attempts < 1 || config.max_attempts > 10 {
        return Err(ConfigError::Validation(format!(
            "max-attempts must be between 1 and 10, got {}",
            config.max_attempts
        )));
    }

    if config.retry_delay_ms > 60_000 {
        return Err(ConfigError::Validation(format!(
            "retry-delay-ms must be <= 60000ms, got {}ms",
            config.retry_delay_ms
        )));
    }

    Ok(())
}

/// Validates the fallback endpoint
fn validate_fallback_config(config: &FallbackConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.endpoint).map_err(|e| {
        ConfigError::InvalidUrl(format!("Invalid fallback endpoint '{}': {}", config.endpoint, e))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "Fallback endpoint '{}' must use HTTP or HTTPS",
            config.endpoint
        )));
    }

    if config.query_param.trim().is_empty() {
        return Err(ConfigError::Validation(
            "query-param cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates the User-Agent pool
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    for (index, agent) in config.pool.iter().enumerate() {
        if agent.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "user-agent pool entry {} is empty",
                index
            )));
        }

        // Header values must be visible ASCII
        if agent.chars().any(|c| c.is_control() || !c.is_ascii()) {
            return Err(ConfigError::Validation(format!(
                "user-agent pool entry {} contains characters not allowed in a header",
                index
            )));
        }
    }

    Ok(())
}
