// src/lib.rs
//! eea-vault — chained-XOR encryption with password-sealed key sets
//!
//! Features:
//! - Multi-key chained-XOR encryption and decryption over byte buffers
//! - SHA-256/SHA-512 based key generation and validation
//! - Password sealing of whole key sets (salted, five cipher rounds)
//! - Base64 armor for sealed blobs
//!
//! The crate performs no I/O. Callers supply plaintext buffers, key
//! strings, and passwords, and decide where sealed blobs are stored.
//!
//! This is a compatibility-exact implementation of a legacy format, not
//! a vetted cryptographic primitive. In particular, decryption strips
//! all trailing zero bytes, so plaintext that itself ends in `0x00`
//! does not round-trip. See [`cipher::decrypt`].

pub mod aliases;
pub mod armor;
pub mod cipher;
pub mod consts;
pub mod enums;
pub mod error;
pub mod keygen;
pub mod vault;

// Re-export everything users need at the crate root
pub use aliases::VaultPassword;
pub use cipher::{decrypt, encrypt};
pub use enums::KeyLength;
pub use error::{CoreError, Result};
pub use keygen::{generate_keys, validate_keys};
pub use vault::{gen_salt, seal_keys, seal_keys_with_salt, unseal_keys};
