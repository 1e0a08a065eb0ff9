//! Policy-routed digest front-end
//!
//! The router composes a registry store and the policy table into the four
//! public operations: `register_backend`, `start`, `update`, `finish`.
//! Every hashing request resolves to exactly one backend: the first
//! registered backend whose policy bit intersects the effective policy.

use crate::config::RouterConfig;
use crate::error::{DispatchError, Error, Result};
use crate::ident::AlgorithmId;
use crate::policy::{HashPolicy, PolicySelector, PolicyTable};
use crate::registry::AlgorithmDescriptor;
use crate::store::RegistryStore;
use crate::traits::{Digest, DigestBackend, DigestContext};
use std::fmt;
use std::sync::Arc;

/// One in-flight hashing session.
///
/// The backend is bound when the session starts; `update` mutates the
/// context in place and `finish` consumes the session, so no operation can
/// follow it. Disposal of the context belongs to whoever owns the session
/// value.
pub struct HashSession {
    algorithm_id: AlgorithmId,
    context: Box<dyn DigestContext>,
}

impl HashSession {
    /// Algorithm this session was bound to at start
    pub fn algorithm_id(&self) -> AlgorithmId {
        self.algorithm_id
    }
}

impl fmt::Debug for HashSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSession")
            .field("algorithm_id", &self.algorithm_id)
            .finish()
    }
}

/// The public hashing front-end.
///
/// Generic over the registry store so the same dispatch logic serves both
/// the static-table and boot-record deployments; the store is chosen when
/// the router is composed, never by conditional compilation.
pub struct HashRouter<S> {
    store: S,
    table: PolicyTable,
    default_policy: HashPolicy,
}

impl<S> fmt::Debug for HashRouter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashRouter")
            .field("default_policy", &self.default_policy)
            .finish()
    }
}

impl<S: RegistryStore> HashRouter<S> {
    /// Create a router with default configuration and the builtin policy
    /// table.
    pub fn new(store: S) -> Self {
        Self::with_config(store, RouterConfig::default())
    }

    /// Create a router with explicit configuration.
    pub fn with_config(store: S, config: RouterConfig) -> Self {
        Self {
            store,
            table: PolicyTable::builtin(),
            default_policy: config.default_policy,
        }
    }

    /// Replace the policy table with a platform-supplied one.
    pub fn with_policy_table(mut self, table: PolicyTable) -> Self {
        self.table = table;
        self
    }

    /// The registry store this router dispatches over
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Register a digest backend under its own algorithm identifier.
    ///
    /// Propagates `CapacityExceeded` and `AlreadyRegistered` from the
    /// registry. In the boot-record deployment the caller's record is
    /// created here on first use.
    pub fn register_backend(&self, backend: Arc<dyn DigestBackend>) -> Result<()> {
        let descriptor = AlgorithmDescriptor::new(backend);
        let id = descriptor.algorithm_id();
        let mask = self.table.resolve_mask(&id);
        if mask.is_empty() {
            log::debug!("backend {id} has no policy bit assigned");
        }

        let result = self
            .store
            .with_registry_mut(|registry| registry.register(&self.table, descriptor));

        match &result {
            Ok(()) => log::debug!("registered hash backend {id} (mask {mask:?})"),
            Err(error) => log::error!("hash backend {id} registration failed: {error}"),
        }

        result.map_err(Error::from)
    }

    /// Start a hashing session.
    ///
    /// Resolves the effective policy, picks the first matching backend and
    /// binds it to the returned session. Context allocation failure is an
    /// environment fault and aborts; it is never reported as an `Err`.
    pub fn start(&self, selector: PolicySelector) -> Result<HashSession> {
        let policy = self.effective_policy(selector);
        let descriptor = self.resolve(policy)?;

        Ok(HashSession {
            algorithm_id: descriptor.algorithm_id(),
            context: descriptor.backend().init(),
        })
    }

    /// Feed data into a session.
    ///
    /// The policy is re-derived and re-checked on every call so the
    /// failure surface matches `start`, but dispatch always goes to the
    /// backend bound at `start`: a registry or policy change mid-session
    /// must not switch backends under a live context.
    pub fn update(
        &self,
        session: &mut HashSession,
        selector: PolicySelector,
        data: &[u8],
    ) -> Result<()> {
        let policy = self.effective_policy(selector);
        let descriptor = self.resolve(policy)?;
        self.warn_on_drift(&descriptor, session);

        session.context.update(data);
        Ok(())
    }

    /// Finish a session and produce the digest.
    ///
    /// Consumes the session; its digest length is whatever the bound
    /// backend produces.
    pub fn finish(&self, session: HashSession, selector: PolicySelector) -> Result<Digest> {
        let policy = self.effective_policy(selector);
        let descriptor = self.resolve(policy)?;
        self.warn_on_drift(&descriptor, &session);

        Ok(session.context.finalize())
    }

    /// Union of the registered backends' policy bits.
    pub fn union_mask(&self) -> Result<HashPolicy> {
        Ok(self
            .store
            .with_registry(|registry| registry.union_mask())?)
    }

    fn effective_policy(&self, selector: PolicySelector) -> HashPolicy {
        match selector {
            PolicySelector::Explicit(policy) => policy,
            PolicySelector::SystemDefault => {
                log::debug!(
                    "substituting system default hash policy {:?}",
                    self.default_policy
                );
                self.default_policy
            }
        }
    }

    fn resolve(
        &self,
        policy: HashPolicy,
    ) -> std::result::Result<AlgorithmDescriptor, DispatchError> {
        self.store.with_registry(|registry| {
            if registry.is_empty() || !registry.union_mask().intersects(policy) {
                log::debug!("unsupported hash policy {policy:?}");
                return Err(DispatchError::unsupported(policy));
            }

            registry
                .find_matching(policy, &self.table)
                .cloned()
                .ok_or_else(|| {
                    log::debug!("no backend matches hash policy {policy:?}");
                    DispatchError::unsupported(policy)
                })
        })?
    }

    fn warn_on_drift(&self, resolved: &AlgorithmDescriptor, session: &HashSession) {
        if resolved.algorithm_id() != session.algorithm_id {
            log::warn!(
                "policy now resolves to backend {} but the session is bound to {}",
                resolved.algorithm_id(),
                session.algorithm_id
            );
        }
    }
}
