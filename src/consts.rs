// src/consts.rs
//! Shared constants: format parameters both sides of the transform
//! must agree on

/// Byte value used to fill the final cipher block
pub const PADDING: u8 = 0x00;

/// Every digest is rendered as hex and left-padded to a multiple of
/// this many characters
pub const HEX_CHUNK_LEN: usize = 64;

/// Flat per-chunk length credit during key generation, independent of
/// the actual digest size (see `keygen::generate_keys`)
pub const CHUNK_BITS: u32 = 512;

/// Cipher rounds applied when sealing or unsealing a key set
pub const VAULT_ROUNDS: usize = 5;
