//! Identifier types for algorithms and registry owners
//!
//! Both identifiers are 128-bit, GUID-shaped values: boot firmware names
//! its collaborators this way so that independently built modules can agree
//! on an algorithm or a registry owner without sharing headers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Globally-unique identifier naming one digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AlgorithmId {
    data1: u32,
    data2: u16,
    data3: u16,
    data4: [u8; 8],
}

impl AlgorithmId {
    /// SHA-1
    pub const SHA1: Self = Self::new(
        0x2ae9d80f,
        0x3fb2,
        0x4095,
        [0xb7, 0xb1, 0xe9, 0x31, 0x57, 0xb9, 0x46, 0xb6],
    );

    /// SHA-256
    pub const SHA256: Self = Self::new(
        0x51aa59de,
        0xfdf2,
        0x4ea3,
        [0xbc, 0x63, 0x87, 0x5f, 0xb7, 0x84, 0x2e, 0xe9],
    );

    /// SHA-384
    pub const SHA384: Self = Self::new(
        0xefa96432,
        0xde33,
        0x4dd2,
        [0xae, 0xe6, 0x32, 0x8c, 0x33, 0xdf, 0x77, 0x7a],
    );

    /// SHA-512
    pub const SHA512: Self = Self::new(
        0xcaa4381e,
        0x750c,
        0x4770,
        [0xb8, 0x70, 0x7a, 0x23, 0xb4, 0xe4, 0x21, 0x30],
    );

    /// SM3-256
    pub const SM3_256: Self = Self::new(
        0x251c7818,
        0x0dbf,
        0xe619,
        [0x7f, 0xc2, 0xd6, 0xac, 0x43, 0x22, 0x7d, 0xa6],
    );

    /// Create an algorithm identifier from its GUID fields.
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_guid(f, self.data1, self.data2, self.data3, &self.data4)
    }
}

/// Identifier distinguishing one consuming module's registry from another's
/// within the boot record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OwnerTag {
    data1: u32,
    data2: u16,
    data3: u16,
    data4: [u8; 8],
}

impl OwnerTag {
    /// Owner of the well-known global record that tracks the last-known
    /// union mask for callers that ask before registering.
    pub const ZERO: Self = Self::new(0, 0, 0, [0; 8]);

    /// Create an owner tag from its GUID fields.
    pub const fn new(data1: u32, data2: u16, data3: u16, data4: [u8; 8]) -> Self {
        Self {
            data1,
            data2,
            data3,
            data4,
        }
    }

    /// Whether this is the global record owner.
    pub const fn is_zero(&self) -> bool {
        self.data1 == 0
            && self.data2 == 0
            && self.data3 == 0
            && self.data4[0] == 0
            && self.data4[1] == 0
            && self.data4[2] == 0
            && self.data4[3] == 0
            && self.data4[4] == 0
            && self.data4[5] == 0
            && self.data4[6] == 0
            && self.data4[7] == 0
    }
}

impl fmt::Display for OwnerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_guid(f, self.data1, self.data2, self.data3, &self.data4)
    }
}

fn write_guid(
    f: &mut fmt::Formatter<'_>,
    data1: u32,
    data2: u16,
    data3: u16,
    data4: &[u8; 8],
) -> fmt::Result {
    write!(
        f,
        "{data1:08x}-{data2:04x}-{data3:04x}-{:02x}{:02x}-{:02x}{:02x}{:02x}{:02x}{:02x}{:02x}",
        data4[0], data4[1], data4[2], data4[3], data4[4], data4[5], data4[6], data4[7]
    )
}
