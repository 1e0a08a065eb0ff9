//! Deterministic test data
//!
//! Identifier and policy helpers so tests can build registries without
//! touching the well-known platform algorithms.

use bootdigest_core::ident::{AlgorithmId, OwnerTag};
use bootdigest_core::policy::{HashPolicy, PolicyTable};

/// Deterministic algorithm identifier for test backend `n`.
pub fn test_algorithm_id(n: u32) -> AlgorithmId {
    AlgorithmId::new(0x7e57_0000 | n, 0x0001, 0x0002, [n as u8; 8])
}

/// Deterministic owner tag for test module `n`. `n` must be nonzero so the
/// tag never collides with the global record owner.
pub fn test_owner_tag(n: u32) -> OwnerTag {
    assert_ne!(n, 0, "owner 0 is reserved for the global record");
    OwnerTag::new(0x0d00_0000 | n, 0x0003, 0x0004, [n as u8; 8])
}

/// Policy bit `n`, counted from the least significant bit.
pub fn test_policy_bit(n: u32) -> HashPolicy {
    HashPolicy::from_bits_retain(1 << n)
}

/// Policy table mapping test backend `n` to policy bit `n` for each given
/// `n`.
pub fn test_policy_table(backends: &[u32]) -> PolicyTable {
    backends.iter().fold(PolicyTable::empty(), |table, &n| {
        table.with_entry(test_algorithm_id(n), test_policy_bit(n))
    })
}
