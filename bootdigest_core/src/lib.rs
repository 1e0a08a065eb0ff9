//! Boot-stage digest router
//!
//! One uniform "compute a digest" front-end for firmware boot stages:
//! independently built algorithm backends register themselves at start-up
//! and a policy bitmask selects exactly one of them per hashing request.
//! The registry lives either in a process-wide table (later stages) or in
//! discoverable boot records that survive within a stage whose ordinary
//! memory does not (early stages).

pub mod backends;
pub mod config;
pub mod error;
pub mod ident;
pub mod policy;
pub mod registry;
pub mod router;
pub mod store;
pub mod traits;

// Re-export main types
pub use config::RouterConfig;
pub use error::{ConfigError, DispatchError, Error, RegisterError, Result};
pub use ident::{AlgorithmId, OwnerTag};
pub use policy::{HashPolicy, PolicySelector, PolicyTable};
pub use registry::{AlgorithmDescriptor, MAX_ALGOS, Registry};
pub use router::{HashRouter, HashSession};
pub use store::{BootRecordStore, ModuleRecordTable, RegistryStore, StaticTable};
pub use traits::{Digest, DigestBackend, DigestContext};
