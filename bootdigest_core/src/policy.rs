//! Hash policy masks and the algorithm-to-bit policy table
//!
//! A policy is a bitmask naming which algorithms are acceptable for a
//! request. The policy table translates an algorithm identifier into its
//! bit; it is supplied by the platform and read-only to the router.

use crate::ident::AlgorithmId;
use bitflags::bitflags;

bitflags! {
    /// Bitmask selecting which algorithms are acceptable for a request.
    ///
    /// Bits beyond the named constants are representable
    /// ([`HashPolicy::from_bits_retain`]) so platform-private backends can
    /// carry their own bits through an extended [`PolicyTable`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    pub struct HashPolicy: u32 {
        const SHA1 = 0x0000_0001;
        const SHA256 = 0x0000_0002;
        const SHA384 = 0x0000_0004;
        const SHA512 = 0x0000_0008;
        const SM3_256 = 0x0000_0010;
    }
}

/// Request-side policy selection.
///
/// `SystemDefault` is the sentinel for "ask the system what to use"; the
/// router substitutes its configured default policy. Anything else is used
/// verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolicySelector {
    /// Substitute the configured system default policy
    #[default]
    SystemDefault,
    /// Use this policy mask verbatim
    Explicit(HashPolicy),
}

/// Read-only mapping from algorithm identifier to policy bit.
///
/// The router never mutates a table after construction; extending one is a
/// composition-time concern (`with_entry`).
#[derive(Debug, Clone)]
pub struct PolicyTable {
    entries: Vec<(AlgorithmId, HashPolicy)>,
}

impl PolicyTable {
    /// Table covering the five well-known algorithms.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                (AlgorithmId::SHA1, HashPolicy::SHA1),
                (AlgorithmId::SHA256, HashPolicy::SHA256),
                (AlgorithmId::SHA384, HashPolicy::SHA384),
                (AlgorithmId::SHA512, HashPolicy::SHA512),
                (AlgorithmId::SM3_256, HashPolicy::SM3_256),
            ],
        }
    }

    /// An empty table. Every lookup resolves to no bits.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Extend the table with one more mapping.
    pub fn with_entry(mut self, algorithm: AlgorithmId, mask: HashPolicy) -> Self {
        self.entries.push((algorithm, mask));
        self
    }

    /// Translate an algorithm identifier into its policy bit.
    ///
    /// Pure and total: an identifier absent from the table resolves to the
    /// empty mask.
    pub fn resolve_mask(&self, algorithm: &AlgorithmId) -> HashPolicy {
        self.entries
            .iter()
            .find(|(id, _)| id == algorithm)
            .map(|(_, mask)| *mask)
            .unwrap_or_else(HashPolicy::empty)
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self::builtin()
    }
}
