// src/keygen.rs
//! Key generation and validation
//!
//! Keys are ASCII hex strings built from hashes of random seeds. Their
//! character length, not their numeric value, is what the cipher uses:
//! one key's byte length is one cipher block.

use rand::Rng;
use sha2::{Digest, Sha256, Sha512};

use crate::consts::{CHUNK_BITS, HEX_CHUNK_LEN};
use crate::enums::KeyLength;

/// Render a digest as a lowercase hex string, left-padded with `'0'`
/// until its length is a multiple of 64 characters.
///
/// The digest is treated as an unsigned big integer, so leading zero
/// nibbles disappear in rendering; the padding step restores them.
pub(crate) fn to_padded_hex(digest: impl AsRef<[u8]>) -> String {
    let full = hex::encode(digest);
    let trimmed = full.trim_start_matches('0');
    let digits = if trimmed.is_empty() { "0" } else { trimmed };

    let pad = (HEX_CHUNK_LEN - digits.len() % HEX_CHUNK_LEN) % HEX_CHUNK_LEN;
    let mut out = "0".repeat(pad);
    out.push_str(digits);
    out
}

/// A fresh pseudo-random seed value, rendered as a decimal string
pub(crate) fn random_seed<R: Rng>(rng: &mut R) -> String {
    (rng.random::<f64>() * f64::from(i32::MAX)).to_string()
}

/// Generate `count` independent keys of the requested length.
///
/// Each key is assembled from hash chunks of random seeds: SHA-256 for
/// 256-bit keys, SHA-512 chunks for everything longer. The running
/// length counter is credited a flat 512 bits per chunk regardless of
/// the digest's real size, so a 256-bit request finishes after a single
/// SHA-256 chunk. Changing that accounting would change the length of
/// every generated key and break existing key material.
pub fn generate_keys(count: usize, length: KeyLength) -> Vec<String> {
    let mut rng = rand::rng();

    (0..count)
        .map(|_| {
            let mut key = String::with_capacity(length.hex_chars());
            let mut credited = 0u32;
            while credited < length.bits() {
                let seed = random_seed(&mut rng);
                let chunk = match length {
                    KeyLength::Bits256 => to_padded_hex(Sha256::digest(seed.as_bytes())),
                    _ => to_padded_hex(Sha512::digest(seed.as_bytes())),
                };
                key.push_str(&chunk);
                credited += CHUNK_BITS;
            }
            key
        })
        .collect()
}

/// Check whether every key in the set is well-formed.
///
/// A key passes when its length is 64 or a multiple of 128 characters
/// and it parses as a non-negative base-16 integer (upper or lower
/// case). An empty set passes vacuously; callers that need a non-empty
/// set enforce that separately.
pub fn validate_keys<K: AsRef<str>>(keys: &[K]) -> bool {
    keys.iter().all(|key| {
        let key = key.as_ref();
        (key.len() % 128 == 0 || key.len() == 64)
            && !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_hexdigit())
    })
}
