//! Error types for the digest router
//!
//! Errors are grouped by concern: registration failures, dispatch failures,
//! and configuration failures. Every variant is a recoverable, caller-visible
//! outcome; nothing in the router retries or swallows an error.

use thiserror::Error;

pub mod config;
pub mod dispatch;
pub mod register;

pub use self::config::ConfigError;
pub use self::dispatch::DispatchError;
pub use self::register::RegisterError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the digest router
#[derive(Error, Debug)]
pub enum Error {
    /// Backend registration errors
    #[error(transparent)]
    Register(#[from] RegisterError),

    /// Hash request dispatch errors
    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident::AlgorithmId;
    use crate::policy::HashPolicy;
    use std::error::Error as StdError;

    #[test]
    fn test_register_error_conversion() {
        let error: Error = RegisterError::already_registered(AlgorithmId::SHA256).into();
        assert!(matches!(
            error,
            Error::Register(RegisterError::AlreadyRegistered { .. })
        ));
    }

    #[test]
    fn test_dispatch_error_conversion() {
        let error: Error = DispatchError::unsupported(HashPolicy::SHA1).into();
        assert!(matches!(
            error,
            Error::Dispatch(DispatchError::Unsupported { .. })
        ));
    }

    #[test]
    fn test_error_display_is_transparent() {
        let error: Error = DispatchError::Uninitialized.into();
        assert_eq!(error.to_string(), DispatchError::Uninitialized.to_string());
    }

    #[test]
    fn test_error_trait_implementation() {
        let error: Error = RegisterError::capacity_exceeded(5).into();
        let _: &dyn StdError = &error;
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }
}
