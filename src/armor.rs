// src/armor.rs
//! Base64 armor for sealed blobs
//!
//! Sealed blobs are raw bytes. Callers that keep them in text files or
//! paste buffers wrap them in standard base64; decode tolerates the
//! trailing newline a text editor tends to add.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::Result;

/// Encode a sealed blob as a base64 string
pub fn encode(blob: &[u8]) -> String {
    STANDARD.encode(blob)
}

/// Decode a base64 string back into blob bytes
pub fn decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text.trim_end())?)
}
