//! Process-wide registry table for later boot stages

use super::RegistryStore;
use crate::error::DispatchError;
use crate::registry::Registry;
use std::sync::RwLock;

/// Single flat registry that lives for the whole boot stage.
///
/// Constructed empty at stage entry; there is no teardown because the
/// stage itself ends. Lookups never fail with `Uninitialized`: the table
/// always exists, it may merely be empty.
pub struct StaticTable {
    registry: RwLock<Registry>,
}

impl StaticTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            registry: RwLock::new(Registry::new()),
        }
    }
}

impl Default for StaticTable {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryStore for StaticTable {
    fn with_registry<T>(&self, f: impl FnOnce(&Registry) -> T) -> Result<T, DispatchError> {
        Ok(f(&self.registry.read().unwrap()))
    }

    fn with_registry_mut<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        f(&mut self.registry.write().unwrap())
    }
}
