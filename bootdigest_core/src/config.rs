//! Router configuration
//!
//! The configurable surface is deliberately small: the system default hash
//! policy, substituted whenever a caller asks for
//! [`PolicySelector::SystemDefault`](crate::policy::PolicySelector). The
//! value layers serialized defaults, a TOML file, and prefixed environment
//! variables.

use crate::error::ConfigError;
use crate::policy::HashPolicy;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "BOOTDIGEST_";

/// Default configuration file name, resolved relative to the working
/// directory
const CONFIG_FILE: &str = "bootdigest.toml";

/// Router configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Policy substituted for the system-default selector
    pub default_policy: HashPolicy,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            // The platform ships with SHA-256 as its measurement default
            default_policy: HashPolicy::SHA256,
        }
    }
}

impl RouterConfig {
    /// Load configuration from the default file location and environment.
    ///
    /// Precedence, lowest to highest: built-in defaults, `bootdigest.toml`,
    /// `BOOTDIGEST_*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific TOML file plus the environment.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;
        Ok(config)
    }
}
