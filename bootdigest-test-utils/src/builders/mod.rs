//! Builders for deterministic test identifiers and policy tables

mod test_data;

pub use test_data::{test_algorithm_id, test_owner_tag, test_policy_bit, test_policy_table};
