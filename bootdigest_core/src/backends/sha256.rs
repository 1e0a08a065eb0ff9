//! SHA-256 digest backend

use crate::ident::AlgorithmId;
use crate::traits::{Digest, DigestBackend, DigestContext};
use sha2::{Digest as Sha2Digest, Sha256};

pub struct Sha256Backend;

struct Sha256Context {
    hasher: Sha256,
}

impl DigestContext for Sha256Context {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> Digest {
        Digest::new(Sha2Digest::finalize(self.hasher).to_vec())
    }
}

impl DigestBackend for Sha256Backend {
    fn algorithm_id(&self) -> AlgorithmId {
        AlgorithmId::SHA256
    }

    fn display_name(&self) -> &'static str {
        "SHA-256"
    }

    fn digest_size(&self) -> usize {
        32
    }

    fn init(&self) -> Box<dyn DigestContext> {
        Box::new(Sha256Context {
            hasher: Sha256::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_known_vectors() {
        let test_cases: Vec<(&[u8], &str)> = vec![
            (
                b"",
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
            ),
            (
                b"abc",
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
            ),
        ];

        for (input, expected) in test_cases {
            let digest = Sha256Backend.digest_bytes(input);
            assert_eq!(digest.to_hex(), expected, "SHA-256 mismatch for {input:?}");
            assert_eq!(digest.len(), Sha256Backend.digest_size());
        }
    }
}
