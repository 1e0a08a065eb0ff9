//! SHA-1 digest backend

use crate::ident::AlgorithmId;
use crate::traits::{Digest, DigestBackend, DigestContext};
use sha1::{Digest as Sha1Digest, Sha1};

pub struct Sha1Backend;

struct Sha1Context {
    hasher: Sha1,
}

impl DigestContext for Sha1Context {
    fn update(&mut self, data: &[u8]) {
        Sha1Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::new(Sha1Digest::finalize(self.hasher).to_vec())
    }
}

impl DigestBackend for Sha1Backend {
    fn algorithm_id(&self) -> AlgorithmId {
        AlgorithmId::SHA1
    }

    fn display_name(&self) -> &'static str {
        "SHA-1"
    }

    fn digest_size(&self) -> usize {
        20
    }

    fn init(&self) -> Box<dyn DigestContext> {
        Box::new(Sha1Context {
            hasher: Sha1::new(),
        })
    }
}
