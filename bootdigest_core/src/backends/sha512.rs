//! SHA-512 digest backend

use crate::ident::AlgorithmId;
use crate::traits::{Digest, DigestBackend, DigestContext};
use sha2::{Digest as Sha2Digest, Sha512};

pub struct Sha512Backend;

struct Sha512Context {
    hasher: Sha512,
}

impl DigestContext for Sha512Context {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::new(Sha2Digest::finalize(self.hasher).to_vec())
    }
}

impl DigestBackend for Sha512Backend {
    fn algorithm_id(&self) -> AlgorithmId {
        AlgorithmId::SHA512
    }

    fn display_name(&self) -> &'static str {
        "SHA-512"
    }

    fn digest_size(&self) -> usize {
        64
    }

    fn init(&self) -> Box<dyn DigestContext> {
        Box::new(Sha512Context {
            hasher: Sha512::new(),
        })
    }
}
