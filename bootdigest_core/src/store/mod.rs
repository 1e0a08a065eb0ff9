//! Registry storage backends
//!
//! The router is generic over where its registry lives. Later boot stages
//! keep one process-wide table ([`StaticTable`]); early stages keep each
//! module's table inside a discoverable boot record
//! ([`ModuleRecordTable`]), because ordinary memory may be relocated before
//! the stage ends. The variant is chosen at composition time.

use crate::error::DispatchError;
use crate::registry::Registry;

mod boot_record;
mod static_table;

pub use boot_record::{BootRecordStore, ModuleRecordTable};
pub use static_table::StaticTable;

/// Where a caller's registry lives.
///
/// Both implementations carry their own interior synchronization: the boot
/// environment is single-threaded by construction, but the protocol itself
/// assumes no locking, so a hosted build must supply its own.
pub trait RegistryStore {
    /// Run `f` over the caller's registry.
    ///
    /// Fails with [`DispatchError::Uninitialized`] when no registry exists
    /// yet for this caller; an *empty* registry is not a failure here.
    fn with_registry<T>(&self, f: impl FnOnce(&Registry) -> T) -> Result<T, DispatchError>;

    /// Run `f` over the caller's registry for registration, creating the
    /// registry first if this caller has never registered anything.
    fn with_registry_mut<T>(&self, f: impl FnOnce(&mut Registry) -> T) -> T;
}
