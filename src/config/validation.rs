use crate::config::types::Config;
use crate::ConfigError;
use url::Url;

/// Validates a parsed configuration
///
/// Checks that the API base URL is a well-formed http(s) URL and that the
/// database path is not empty.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let base_url = Url::parse(&config.api.base_url)
        .map_err(|_| ConfigError::InvalidUrl(config.api.base_url.clone()))?;

    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidUrl(config.api.base_url.clone()));
    }

    if config.output.database_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "output.database-path must not be empty".to_string(),
        ));
    }

    Ok(())
}
