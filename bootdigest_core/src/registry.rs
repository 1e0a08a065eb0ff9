//! Capacity-bounded, duplicate-free table of digest backends

use crate::error::RegisterError;
use crate::ident::AlgorithmId;
use crate::policy::{HashPolicy, PolicyTable};
use crate::traits::DigestBackend;
use std::fmt;
use std::sync::Arc;

/// Maximum number of backends one registry can hold.
///
/// Matches the width of the builtin policy table; boot records are sized
/// for this many entries when they are first appended.
pub const MAX_ALGOS: usize = 5;

/// One registered backend: its algorithm identifier plus the three-operation
/// implementation behind it.
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    algorithm_id: AlgorithmId,
    backend: Arc<dyn DigestBackend>,
}

impl AlgorithmDescriptor {
    /// Describe a backend under its own algorithm identifier.
    pub fn new(backend: Arc<dyn DigestBackend>) -> Self {
        Self {
            algorithm_id: backend.algorithm_id(),
            backend,
        }
    }

    /// The algorithm this descriptor names
    pub fn algorithm_id(&self) -> AlgorithmId {
        self.algorithm_id
    }

    /// The backend implementation
    pub fn backend(&self) -> &Arc<dyn DigestBackend> {
        &self.backend
    }
}

impl fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("algorithm_id", &self.algorithm_id)
            .field("backend", &self.backend.display_name())
            .finish()
    }
}

/// Ordered backend table plus the running union of its policy bits.
///
/// Entries keep registration order; there is no unregister operation, so
/// the union mask only ever grows.
pub struct Registry {
    entries: Vec<AlgorithmDescriptor>,
    union_mask: HashPolicy,
}

impl Registry {
    /// Create an empty registry pre-sized to [`MAX_ALGOS`] entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_ALGOS),
            union_mask: HashPolicy::empty(),
        }
    }

    /// Append a backend descriptor.
    ///
    /// Fails with [`RegisterError::CapacityExceeded`] when the table is
    /// full and [`RegisterError::AlreadyRegistered`] when the algorithm
    /// identifier is already present. A descriptor whose identifier the
    /// policy table does not know still registers; it just contributes no
    /// bits to the union mask.
    pub fn register(
        &mut self,
        table: &PolicyTable,
        descriptor: AlgorithmDescriptor,
    ) -> Result<(), RegisterError> {
        if self.entries.len() >= MAX_ALGOS {
            return Err(RegisterError::capacity_exceeded(MAX_ALGOS));
        }

        if self
            .entries
            .iter()
            .any(|entry| entry.algorithm_id() == descriptor.algorithm_id())
        {
            return Err(RegisterError::already_registered(descriptor.algorithm_id()));
        }

        self.union_mask |= table.resolve_mask(&descriptor.algorithm_id());
        self.entries.push(descriptor);
        Ok(())
    }

    /// First backend, in registration order, whose policy bit intersects
    /// `policy`. Registration order is the deliberate tie-break when a
    /// policy selects more than one backend.
    pub fn find_matching(
        &self,
        policy: HashPolicy,
        table: &PolicyTable,
    ) -> Option<&AlgorithmDescriptor> {
        self.entries
            .iter()
            .find(|entry| table.resolve_mask(&entry.algorithm_id()).intersects(policy))
    }

    /// Whether no backend has been registered
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of registered backends
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// OR of all registered backends' policy bits
    pub fn union_mask(&self) -> HashPolicy {
        self.union_mask
    }

    /// Drop every entry and reset the union mask. Used when a module is
    /// re-executed within a stage and must start registration over.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.union_mask = HashPolicy::empty();
    }

    pub(crate) fn set_union_mask(&mut self, mask: HashPolicy) {
        self.union_mask = mask;
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .field("union_mask", &self.union_mask)
            .finish()
    }
}
