// src/enums.rs
//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

/// Supported key lengths for generation
///
/// The bit length decides the hash used for key material: 256-bit keys
/// come from SHA-256, everything longer from SHA-512 chunks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum KeyLength {
    #[default]
    Bits256,
    Bits512,
    Bits1024,
    Bits2048,
}

impl KeyLength {
    /// Requested key length in bits
    pub const fn bits(self) -> u32 {
        match self {
            KeyLength::Bits256 => 256,
            KeyLength::Bits512 => 512,
            KeyLength::Bits1024 => 1024,
            KeyLength::Bits2048 => 2048,
        }
    }

    /// Number of hex characters in a generated key of this length
    pub const fn hex_chars(self) -> usize {
        match self {
            KeyLength::Bits256 => 64,
            KeyLength::Bits512 => 128,
            KeyLength::Bits1024 => 256,
            KeyLength::Bits2048 => 512,
        }
    }
}
