//! Core traits for the pluggable digest backend system

use crate::ident::AlgorithmId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A finished digest value.
///
/// Length is a property of the backend that produced it; the router never
/// tracks digest sizes itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    /// Wrap raw digest bytes.
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw digest bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Digest length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the digest is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex rendering of the digest.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.bytes {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Core trait every digest backend must implement.
///
/// A backend is one independently built algorithm implementation. The
/// router treats it as opaque: it never validates what the three session
/// operations do, only that exactly one backend handles each request.
pub trait DigestBackend: Send + Sync {
    /// Identifier naming this backend's algorithm
    fn algorithm_id(&self) -> AlgorithmId;

    /// Display name for log output
    fn display_name(&self) -> &'static str;

    /// Digest length in bytes
    fn digest_size(&self) -> usize;

    /// Allocate a fresh streaming context
    fn init(&self) -> Box<dyn DigestContext>;

    /// Digest in-memory data in one call
    fn digest_bytes(&self, data: &[u8]) -> Digest {
        let mut context = self.init();
        context.update(data);
        context.finalize()
    }
}

/// Streaming digest state produced by [`DigestBackend::init`].
///
/// The layout behind the box is private to the backend that produced it.
pub trait DigestContext: Send {
    /// Absorb more data
    fn update(&mut self, data: &[u8]);

    /// Consume the context and produce the digest
    fn finalize(self: Box<Self>) -> Digest;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_hex_rendering() {
        let digest = Digest::new(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(digest.to_hex(), "deadbeef");
        assert_eq!(digest.to_string(), "deadbeef");
        assert_eq!(digest.len(), 4);
        assert!(!digest.is_empty());
    }

    #[test]
    fn test_digest_leading_zero_bytes() {
        let digest = Digest::new(vec![0x00, 0x01, 0xa0]);
        assert_eq!(digest.to_hex(), "0001a0");
    }

    #[test]
    fn test_digest_serialization_round_trip() {
        let digest = Digest::new(vec![1, 2, 3]);
        let json = serde_json::to_string(&digest).unwrap();
        let back: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, back);
    }

    #[test]
    fn test_digest_bytes_default_matches_streaming() {
        struct XorBackend;
        struct XorContext {
            acc: u8,
        }

        impl DigestContext for XorContext {
            fn update(&mut self, data: &[u8]) {
                for byte in data {
                    self.acc ^= byte;
                }
            }

            fn finalize(self: Box<Self>) -> Digest {
                Digest::new(vec![self.acc])
            }
        }

        impl DigestBackend for XorBackend {
            fn algorithm_id(&self) -> AlgorithmId {
                AlgorithmId::new(1, 0, 0, [0; 8])
            }

            fn display_name(&self) -> &'static str {
                "XOR"
            }

            fn digest_size(&self) -> usize {
                1
            }

            fn init(&self) -> Box<dyn DigestContext> {
                Box::new(XorContext { acc: 0 })
            }
        }

        let one_shot = XorBackend.digest_bytes(b"abc");

        let mut context = XorBackend.init();
        context.update(b"a");
        context.update(b"bc");
        let streamed = context.finalize();

        assert_eq!(one_shot, streamed);
        assert_eq!(one_shot.len(), XorBackend.digest_size());
    }
}
