//! Dispatch tests for the boot-record router deployment
//!
//! Early-stage semantics: each module's registry lives in its own
//! discoverable record, found or created by owner tag, and a well-known
//! global record tracks the last-known union mask across modules.

use bootdigest_core::backends::Sha256Backend;
use bootdigest_core::traits::DigestBackend;
use bootdigest_core::{
    BootRecordStore, DispatchError, Error, HashPolicy, HashRouter, MAX_ALGOS, ModuleRecordTable,
    PolicySelector, RegisterError,
};
use bootdigest_test_utils::{
    RecordingBackend, test_algorithm_id, test_owner_tag, test_policy_bit, test_policy_table,
};
use std::sync::Arc;

fn record_router(
    store: &BootRecordStore,
    module: u32,
    backends: &[u32],
) -> HashRouter<ModuleRecordTable> {
    let table = ModuleRecordTable::attach(store.clone(), test_owner_tag(module));
    HashRouter::new(table).with_policy_table(test_policy_table(backends))
}

#[test]
fn test_start_before_any_registration_is_uninitialized() {
    let store = BootRecordStore::new();
    let router = record_router(&store, 1, &[1]);

    let result = router.start(PolicySelector::Explicit(test_policy_bit(1)));
    assert!(matches!(
        result,
        Err(Error::Dispatch(DispatchError::Uninitialized))
    ));
}

#[test]
fn test_registration_creates_the_module_record() {
    let store = BootRecordStore::new();
    let router = record_router(&store, 1, &[1]);

    router
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();

    assert_eq!(
        store.supported_mask(&test_owner_tag(1)),
        Some(test_policy_bit(1))
    );

    let session = router
        .start(PolicySelector::Explicit(test_policy_bit(1)))
        .unwrap();
    assert_eq!(session.algorithm_id(), test_algorithm_id(1));
}

#[test]
fn test_registries_are_isolated_per_owner_tag() {
    let store = BootRecordStore::new();
    let router_a = record_router(&store, 1, &[1]);
    let router_b = record_router(&store, 2, &[1]);

    router_a
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();

    // The second module sees nothing until it registers its own backends
    let result = router_b.start(PolicySelector::Explicit(test_policy_bit(1)));
    assert!(matches!(
        result,
        Err(Error::Dispatch(DispatchError::Uninitialized))
    ));

    router_b
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();
    assert!(
        router_b
            .start(PolicySelector::Explicit(test_policy_bit(1)))
            .is_ok()
    );
}

#[test]
fn test_global_record_tracks_last_registering_module() {
    let store = BootRecordStore::new();
    assert_eq!(store.last_known_mask(), None);

    let router_a = record_router(&store, 1, &[1, 2]);
    assert_eq!(store.last_known_mask(), Some(HashPolicy::empty()));

    router_a
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();
    assert_eq!(store.last_known_mask(), Some(test_policy_bit(1)));

    router_a
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(2))))
        .unwrap();
    assert_eq!(
        store.last_known_mask(),
        Some(test_policy_bit(1) | test_policy_bit(2))
    );

    // A later module's registration becomes the last-known mask
    let router_b = record_router(&store, 2, &[3]);
    router_b
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(3))))
        .unwrap();
    assert_eq!(store.last_known_mask(), Some(test_policy_bit(3)));
}

#[test]
fn test_capacity_bound_applies_per_record() {
    let ids: Vec<u32> = (1..=MAX_ALGOS as u32 + 1).collect();
    let store = BootRecordStore::new();
    let router = record_router(&store, 1, &ids);

    for &n in &ids[..MAX_ALGOS] {
        router
            .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(n))))
            .unwrap();
    }

    let overflow = router.register_backend(Arc::new(RecordingBackend::new(
        test_algorithm_id(ids[MAX_ALGOS]),
    )));
    assert!(matches!(
        overflow,
        Err(Error::Register(RegisterError::CapacityExceeded { .. }))
    ));

    // A different module still has a full-capacity record of its own
    let other = record_router(&store, 2, &ids);
    other
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();
}

#[test]
fn test_reexecuted_module_starts_over() {
    let store = BootRecordStore::new();
    let router = record_router(&store, 1, &[1]);
    router
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();

    // The module is relocated and runs its start-up again: the same backend
    // registers cleanly instead of tripping the duplicate check
    let router = record_router(&store, 1, &[1]);
    assert!(matches!(
        router.start(PolicySelector::Explicit(test_policy_bit(1))),
        Err(Error::Dispatch(DispatchError::Unsupported { .. }))
    ));
    router
        .register_backend(Arc::new(RecordingBackend::new(test_algorithm_id(1))))
        .unwrap();
}

#[test]
fn test_end_to_end_digest_through_a_boot_record() {
    let store = BootRecordStore::new();
    let table = ModuleRecordTable::attach(store.clone(), test_owner_tag(1));
    let router = HashRouter::new(table);
    router.register_backend(Arc::new(Sha256Backend)).unwrap();

    let selector = PolicySelector::Explicit(HashPolicy::SHA256);
    let mut session = router.start(selector).unwrap();
    router.update(&mut session, selector, b"boot").unwrap();
    router.update(&mut session, selector, b" measurement").unwrap();
    let routed = router.finish(session, selector).unwrap();

    assert_eq!(routed, Sha256Backend.digest_bytes(b"boot measurement"));
}
