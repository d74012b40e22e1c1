//! Configuration loading from disk and environment.

use std::path::Path;
use std::fs;
use crate::config::schema::SolverConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable overriding `credentials.username`.
pub const USERNAME_ENV: &str = "MAZE_API_USERNAME";
/// Environment variable overriding `credentials.password`.
pub const PASSWORD_ENV: &str = "MAZE_API_PASSWORD";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SolverConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content)
}

/// Parse, apply environment overrides, and validate configuration text.
pub fn parse_config(content: &str) -> Result<SolverConfig, ConfigError> {
    let mut config: SolverConfig = toml::from_str(content).map_err(ConfigError::Parse)?;
    apply_env_overrides(&mut config, |key| std::env::var(key).ok());

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Default configuration with environment overrides, validated.
pub fn default_config() -> Result<SolverConfig, ConfigError> {
    parse_config("")
}

/// Replace credentials with values found through `lookup`.
pub fn apply_env_overrides<F>(config: &mut SolverConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(username) = lookup(USERNAME_ENV) {
        config.credentials.username = username;
    }
    if let Some(password) = lookup(PASSWORD_ENV) {
        config.credentials.password = password;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_credentials() {
        let mut config = SolverConfig::default();
        apply_env_overrides(&mut config, |key| match key {
            USERNAME_ENV => Some("explorer".to_string()),
            _ => None,
        });

        assert_eq!(config.credentials.username, "explorer");
        assert_eq!(config.credentials.password, "pass");
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = parse_config("[api\nbase_url = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validation_error_is_reported() {
        let err = parse_config("[api]\nrequest_timeout_secs = 0\n").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_config(Path::new("does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
