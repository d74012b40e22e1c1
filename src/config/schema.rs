//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the solver.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for a solver run.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct SolverConfig {
    /// Remote maze service endpoint and timeouts.
    pub api: ApiConfig,

    /// Credential pair sent with every request.
    pub credentials: CredentialsConfig,

    /// Retry configuration.
    pub retries: RetryConfig,

    /// Search and submission behaviour.
    pub solver: SearchConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Remote maze service configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base endpoint. Mazes are created by POSTing here; per-maze
    /// endpoints are resolved relative to it.
    pub base_url: String,

    /// Connection establishment timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Request timeout (total time for request/response) in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.maze_generator.com/".to_string(),
            connect_timeout_secs: 5,
            request_timeout_secs: 30,
        }
    }
}

/// Basic-auth credential pair.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CredentialsConfig {
    pub username: String,
    pub password: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            username: "user".to_string(),
            password: "pass".to_string(),
        }
    }
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Retry configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Extra attempts after the first one (1 means at most 2 attempts).
    pub max_retries: u32,

    /// HTTP status the service uses to signal "try again".
    pub transient_status: u16,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 1,
            transient_status: 503,
        }
    }
}

/// Search and submission behaviour.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Submit an empty solution when no path connects entry and exit.
    pub submit_empty_path: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            submit_empty_path: true,
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
