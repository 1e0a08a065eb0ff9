//! Configuration error types

use thiserror::Error;

/// Errors raised while loading router configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Layered configuration could not be loaded or extracted
    #[error("configuration load failed: {message}")]
    Load { message: String },
}

impl ConfigError {
    /// Create a configuration load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(source: figment::Error) -> Self {
        Self::load(source.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_display() {
        let error = ConfigError::load("missing field `default_policy`");
        assert!(error.to_string().contains("configuration load failed"));
        assert!(error.to_string().contains("default_policy"));
    }
}
