//! Tag-addressed boot records for early boot stages
//!
//! Early in boot, ordinary memory is not guaranteed to survive until the
//! stage ends, so each module's registry is kept inside a discoverable,
//! append-only record identified by the module's owner tag. A record is
//! appended once, pre-sized for [`MAX_ALGOS`](crate::registry::MAX_ALGOS)
//! entries, and only field-updated in place afterwards; at most one record
//! exists per owner tag.
//!
//! A well-known record owned by [`OwnerTag::ZERO`] carries the last-known
//! union mask across modules, for legacy callers that ask what the
//! platform can hash before registering anything themselves.

use super::RegistryStore;
use crate::error::DispatchError;
use crate::ident::OwnerTag;
use crate::policy::HashPolicy;
use crate::registry::Registry;
use std::sync::{Arc, RwLock};

/// One discoverable record: an owner tag plus that owner's registry.
struct BootRecord {
    owner: OwnerTag,
    registry: Registry,
}

impl BootRecord {
    fn new(owner: OwnerTag) -> Self {
        Self {
            owner,
            registry: Registry::new(),
        }
    }
}

/// The discoverable record list shared by every module in the stage.
///
/// Cloning shares the underlying storage, modeling one discovery service
/// visible to all modules. Records are only appended, never removed.
#[derive(Clone)]
pub struct BootRecordStore {
    records: Arc<RwLock<Vec<BootRecord>>>,
}

impl BootRecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create the global record if no module has created it yet.
    pub fn ensure_global(&self) {
        let mut records = self.records.write().unwrap();
        if !records.iter().any(|record| record.owner == OwnerTag::ZERO) {
            records.push(BootRecord::new(OwnerTag::ZERO));
        }
    }

    /// Union mask most recently published to the global record, or `None`
    /// if no module has created the global record yet.
    pub fn last_known_mask(&self) -> Option<HashPolicy> {
        let records = self.records.read().unwrap();
        records
            .iter()
            .find(|record| record.owner == OwnerTag::ZERO)
            .map(|record| record.registry.union_mask())
    }

    /// Union mask of one module's record, or `None` if that module has not
    /// registered anything.
    pub fn supported_mask(&self, owner: &OwnerTag) -> Option<HashPolicy> {
        let records = self.records.read().unwrap();
        records
            .iter()
            .find(|record| record.owner == *owner)
            .map(|record| record.registry.union_mask())
    }

    /// Number of records currently discoverable.
    pub fn record_count(&self) -> usize {
        self.records.read().unwrap().len()
    }
}

impl Default for BootRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

/// One module's view of its own boot record.
///
/// Read access fails `Uninitialized` until the module's first registration
/// creates the record. After every registration pass the module's union
/// mask is mirrored into the global record.
pub struct ModuleRecordTable {
    store: BootRecordStore,
    owner: OwnerTag,
}

impl ModuleRecordTable {
    /// Bind a module to the store.
    ///
    /// Ensures the global record exists (the first consumer creates it).
    /// If a record for this owner is already present, the module has been
    /// relocated and re-executed within the stage: the stale record is
    /// cleared so registration starts over, rather than appending a second
    /// record for the same tag.
    pub fn attach(store: BootRecordStore, owner: OwnerTag) -> Self {
        store.ensure_global();

        {
            let mut records = store.records.write().unwrap();
            if let Some(record) = records.iter_mut().find(|record| record.owner == owner) {
                log::debug!("clearing stale boot record for re-executed module {owner}");
                record.registry.clear();
            }
        }

        Self { store, owner }
    }

    /// The owner tag this table is bound to
    pub fn owner(&self) -> OwnerTag {
        self.owner
    }

    /// The shared record store
    pub fn store(&self) -> &BootRecordStore {
        &self.store
    }
}

impl RegistryStore for ModuleRecordTable {
    fn with_registry<T>(&self, f: impl FnOnce(&Registry) -> T) -> Result<T, DispatchError> {
        let records = self.store.records.read().unwrap();
        let record = records
            .iter()
            .find(|record| record.owner == self.owner)
            .ok_or(DispatchError::Uninitialized)?;
        Ok(f(&record.registry))
    }

    fn with_registry_mut<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T {
        let mut records = self.store.records.write().unwrap();

        let index = match records.iter().position(|record| record.owner == self.owner) {
            Some(index) => index,
            None => {
                records.push(BootRecord::new(self.owner));
                records.len() - 1
            }
        };

        let out = f(&mut records[index].registry);

        // Publish this module's mask as the stage-wide last-known mask.
        // Only an in-place field write: the global record itself is never
        // re-appended.
        let mask = records[index].registry.union_mask();
        if let Some(global) = records
            .iter_mut()
            .find(|record| record.owner == OwnerTag::ZERO)
        {
            global.registry.set_union_mask(mask);
        }

        out
    }
}
