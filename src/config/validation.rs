//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate the base endpoint is an absolute http(s) URL
//! - Validate value ranges (timeouts > 0, transient status usable)
//!
//! Returns all validation errors, not just the first.

use thiserror::Error;
use url::Url;

use crate::config::schema::SolverConfig;

/// Statuses with a fixed protocol meaning; none of them can double as the
/// transient signal.
const RESERVED_STATUSES: [u16; 4] = [200, 201, 403, 422];

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("api.base_url '{0}' is not a valid absolute URL")]
    InvalidBaseUrl(String),

    #[error("api.base_url scheme '{0}' is not http or https")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    ZeroTimeout(&'static str),

    #[error("retries.transient_status {0} is not a 4xx/5xx status")]
    TransientStatusOutOfRange(u16),

    #[error("retries.transient_status {0} collides with a status that has a fixed meaning")]
    TransientStatusReserved(u16),

    #[error("credentials.username must not be empty")]
    EmptyUsername,
}

/// Validate a parsed configuration.
pub fn validate_config(config: &SolverConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    match Url::parse(&config.api.base_url) {
        Ok(url) if url.scheme() != "http" && url.scheme() != "https" => {
            errors.push(ValidationError::UnsupportedScheme(url.scheme().to_string()));
        }
        Ok(_) => {}
        Err(_) => errors.push(ValidationError::InvalidBaseUrl(config.api.base_url.clone())),
    }

    if config.api.connect_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("api.connect_timeout_secs"));
    }
    if config.api.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroTimeout("api.request_timeout_secs"));
    }

    let status = config.retries.transient_status;
    if !(400..=599).contains(&status) {
        errors.push(ValidationError::TransientStatusOutOfRange(status));
    } else if RESERVED_STATUSES.contains(&status) {
        errors.push(ValidationError::TransientStatusReserved(status));
    }

    if config.credentials.username.trim().is_empty() {
        errors.push(ValidationError::EmptyUsername);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&SolverConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = SolverConfig::default();
        config.api.base_url = "not a url".into();
        config.api.request_timeout_secs = 0;
        config.retries.transient_status = 403;
        config.credentials.username = "  ".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidBaseUrl("not a url".into()),
                ValidationError::ZeroTimeout("api.request_timeout_secs"),
                ValidationError::TransientStatusReserved(403),
                ValidationError::EmptyUsername,
            ]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme_and_success_status() {
        let mut config = SolverConfig::default();
        config.api.base_url = "ftp://mazes.example/".into();
        config.retries.transient_status = 204;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::UnsupportedScheme("ftp".into())));
        assert!(errors.contains(&ValidationError::TransientStatusOutOfRange(204)));
    }
}
