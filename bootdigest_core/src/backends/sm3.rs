//! SM3-256 digest backend

use crate::ident::AlgorithmId;
use crate::traits::{Digest, DigestBackend, DigestContext};
use sm3::{Digest as Sm3Digest, Sm3};

pub struct Sm3Backend;

struct Sm3Context {
    hasher: Sm3,
}

impl DigestContext for Sm3Context {
    fn update(&mut self, data: &[u8]) {
        Sm3Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::new(Sm3Digest::finalize(self.hasher).to_vec())
    }
}

impl DigestBackend for Sm3Backend {
    fn algorithm_id(&self) -> AlgorithmId {
        AlgorithmId::SM3_256
    }

    fn display_name(&self) -> &'static str {
        "SM3-256"
    }

    fn digest_size(&self) -> usize {
        32
    }

    fn init(&self) -> Box<dyn DigestContext> {
        Box::new(Sm3Context { hasher: Sm3::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sm3_known_vector() {
        let digest = Sm3Backend.digest_bytes(b"abc");
        assert_eq!(
            digest.to_hex(),
            "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
        );
        assert_eq!(digest.len(), Sm3Backend.digest_size());
    }
}
