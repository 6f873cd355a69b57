// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("key set is empty")]
    EmptyKeySet,

    #[error("key has zero length")]
    EmptyKey,

    #[error("no password provided")]
    NoPassword,

    #[error("key material failed validation after decryption (wrong password or corrupted blob)")]
    InvalidKeyMaterial,

    #[error("base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, CoreError>;
