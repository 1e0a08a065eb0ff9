//! Recording mock backend
//!
//! A `DigestBackend` that records every contract call so tests can assert
//! which backend the router invoked and in what order. By default the
//! "digest" echoes the bytes fed to the context, which makes pass-through
//! assertions trivial; a fixed digest can be configured instead.

use bootdigest_core::ident::AlgorithmId;
use bootdigest_core::traits::{Digest, DigestBackend, DigestContext};
use std::sync::{Arc, Mutex};

/// One observed contract call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCall {
    Init,
    Update(Vec<u8>),
    Finalize,
}

/// Mock backend that records its contract calls
///
/// # Examples
///
/// ```rust
/// use bootdigest_test_utils::{BackendCall, RecordingBackend, test_algorithm_id};
/// use bootdigest_core::traits::{DigestBackend, DigestContext};
///
/// let backend = RecordingBackend::new(test_algorithm_id(1));
/// let mut context = backend.init();
/// context.update(b"abc");
/// let digest = context.finalize();
///
/// assert_eq!(digest.as_bytes(), b"abc");
/// assert_eq!(
///     backend.calls(),
///     vec![
///         BackendCall::Init,
///         BackendCall::Update(b"abc".to_vec()),
///         BackendCall::Finalize,
///     ]
/// );
/// ```
pub struct RecordingBackend {
    algorithm_id: AlgorithmId,
    fixed_digest: Option<Vec<u8>>,
    calls: Arc<Mutex<Vec<BackendCall>>>,
}

impl RecordingBackend {
    /// Create a mock backend for the given algorithm identifier.
    pub fn new(algorithm_id: AlgorithmId) -> Self {
        Self {
            algorithm_id,
            fixed_digest: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Always produce this digest instead of echoing the input.
    pub fn with_digest(mut self, digest: impl Into<Vec<u8>>) -> Self {
        self.fixed_digest = Some(digest.into());
        self
    }

    /// Every contract call observed so far, in order.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of sessions started against this backend.
    pub fn init_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, BackendCall::Init))
            .count()
    }
}

struct RecordingContext {
    fixed_digest: Option<Vec<u8>>,
    absorbed: Vec<u8>,
    calls: Arc<Mutex<Vec<BackendCall>>>,
}

impl DigestContext for RecordingContext {
    fn update(&mut self, data: &[u8]) {
        self.calls
            .lock()
            .unwrap()
            .push(BackendCall::Update(data.to_vec()));
        self.absorbed.extend_from_slice(data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        self.calls.lock().unwrap().push(BackendCall::Finalize);
        match self.fixed_digest {
            Some(digest) => Digest::new(digest),
            None => Digest::new(self.absorbed),
        }
    }
}

impl DigestBackend for RecordingBackend {
    fn algorithm_id(&self) -> AlgorithmId {
        self.algorithm_id
    }

    fn display_name(&self) -> &'static str {
        "recording-mock"
    }

    fn digest_size(&self) -> usize {
        self.fixed_digest.as_ref().map_or(0, Vec::len)
    }

    fn init(&self) -> Box<dyn DigestContext> {
        self.calls.lock().unwrap().push(BackendCall::Init);
        Box::new(RecordingContext {
            fixed_digest: self.fixed_digest.clone(),
            absorbed: Vec::new(),
            calls: Arc::clone(&self.calls),
        })
    }
}
