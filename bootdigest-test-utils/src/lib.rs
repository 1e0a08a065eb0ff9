//! Test utilities for the bootdigest router
//!
//! This crate provides mock backends and test builders for exercising the
//! router without depending on any real digest algorithm.

pub mod builders;
pub mod mocks;

// Re-export commonly used types
pub use builders::{test_algorithm_id, test_owner_tag, test_policy_bit, test_policy_table};
pub use mocks::{BackendCall, RecordingBackend};
