//! Hash request dispatch error types

use crate::policy::HashPolicy;
use thiserror::Error;

/// Errors returned while routing a hash request to a backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// No registry exists yet for the calling module. Distinct from an
    /// empty registry: the module has never registered anything, so its
    /// boot record was never created.
    #[error("no backend registry exists for this module yet")]
    Uninitialized,

    /// The registry exists but no registered backend matches the resolved
    /// policy (or the registry is empty)
    #[error("no registered backend matches hash policy {policy:?}")]
    Unsupported { policy: HashPolicy },
}

impl DispatchError {
    /// Create an unsupported-policy error
    pub fn unsupported(policy: HashPolicy) -> Self {
        Self::Unsupported { policy }
    }
}
