//! Error types for the secure Gmail skill
//!
//! This module defines the error hierarchy for all operations in the skill.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the secure Gmail skill
#[derive(Error, Debug)]
pub enum SkillError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Composio API errors
    #[error("Composio API error: {0}")]
    Composio(#[from] ComposioError),

    /// Least-privilege policy violations
    #[error("Policy violation: {0}")]
    Policy(#[from] PolicyError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} not set. Add it to this skill's .env ({local}) or {fallback}")]
    MissingApiKey {
        var: String,
        local: String,
        fallback: String,
    },

    #[error("Failed to load env file {path}: {message}")]
    EnvFile { path: PathBuf, message: String },

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

/// Composio API errors
#[derive(Error, Debug)]
pub enum ComposioError {
    #[error("Unauthorized ({status}): check COMPOSIO_API_KEY")]
    Unauthorized { status: u16 },

    #[error("API request failed: {message}")]
    RequestFailed { message: String },
}

/// Least-privilege policy errors
#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Tool {slug} is not permitted for this skill")]
    ForbiddenTool { slug: String },
}

/// Result type alias for skill operations
pub type Result<T> = std::result::Result<T, SkillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_display() {
        let err = ConfigError::MissingApiKey {
            var: "COMPOSIO_API_KEY".to_string(),
            local: "/skills/secure-gmail/.env".to_string(),
            fallback: "~/.openclaw/.env".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("COMPOSIO_API_KEY"));
        assert!(msg.contains("~/.openclaw/.env"));
    }

    #[test]
    fn test_error_conversion() {
        let policy_err = PolicyError::ForbiddenTool {
            slug: "GMAIL_SEND_EMAIL".to_string(),
        };
        let err: SkillError = policy_err.into();
        assert!(matches!(err, SkillError::Policy(_)));
    }
}
