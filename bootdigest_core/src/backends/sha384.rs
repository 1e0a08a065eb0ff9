//! SHA-384 digest backend

use crate::ident::AlgorithmId;
use crate::traits::{Digest, DigestBackend, DigestContext};
use sha2::{Digest as Sha2Digest, Sha384};

pub struct Sha384Backend;

struct Sha384Context {
    hasher: Sha384,
}

impl DigestContext for Sha384Context {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::new(Sha2Digest::finalize(self.hasher).to_vec())
    }
}

impl DigestBackend for Sha384Backend {
    fn algorithm_id(&self) -> AlgorithmId {
        AlgorithmId::SHA384
    }

    fn display_name(&self) -> &'static str {
        "SHA-384"
    }

    fn digest_size(&self) -> usize {
        48
    }

    fn init(&self) -> Box<dyn DigestContext> {
        Box::new(Sha384Context {
            hasher: Sha384::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha384_known_vector() {
        let digest = Sha384Backend.digest_bytes(b"abc");
        assert_eq!(
            digest.to_hex(),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
             8086072ba1e7cc2358baeca134c825a7"
        );
        assert_eq!(digest.len(), Sha384Backend.digest_size());
    }
}
