// src/cipher.rs
//! Chained-XOR block cipher over in-memory byte buffers
//!
//! Each key in the set drives one full pass ("round") over the buffer.
//! Within a round the first block is XORed against the key itself and
//! every later block against the ciphertext of the block immediately
//! before it, so the key material only ever touches the first block
//! directly. Decryption replays the rounds in reverse key order.
//!
//! The transform never fails on wrong or mismatched keys; it produces
//! garbage instead. Callers validate keys up front when they need to.

use crate::consts::PADDING;
use crate::error::{CoreError, Result};

/// Block size for the whole call: the byte length of the first key.
/// Rejects an empty key set and any zero-length key up front.
fn checked_block_size<K: AsRef<str>>(keys: &[K]) -> Result<usize> {
    let first = keys.first().ok_or(CoreError::EmptyKeySet)?;
    if keys.iter().any(|key| key.as_ref().is_empty()) {
        return Err(CoreError::EmptyKey);
    }
    Ok(first.as_ref().len())
}

/// Key bytes for the first block of a round. Keys longer than the
/// block contribute their leading bytes only; shorter ones are cycled.
fn round_key(key: &str, block_size: usize) -> Vec<u8> {
    let bytes = key.as_bytes();
    (0..block_size).map(|i| bytes[i % bytes.len()]).collect()
}

/// Encrypt `plaintext` under every key in `keys`, in order.
///
/// The output length is the smallest multiple of the block size that
/// holds the plaintext; the slack is filled with zero bytes before the
/// first round. An already-aligned buffer does not grow, and empty
/// plaintext encrypts to an empty buffer.
pub fn encrypt<K: AsRef<str>>(plaintext: &[u8], keys: &[K]) -> Result<Vec<u8>> {
    let block_size = checked_block_size(keys)?;

    let padded_len = plaintext.len().div_ceil(block_size) * block_size;
    let mut cipher = vec![0u8; padded_len];
    let mut chain = vec![0u8; block_size];

    for (round, key) in keys.iter().enumerate() {
        let mut key_block = round_key(key.as_ref(), block_size);

        for x in 0..padded_len {
            if x > 0 && x % block_size == 0 {
                // Block finished: the chain buffer now holds that
                // block's ciphertext and becomes the next key block.
                key_block.copy_from_slice(&chain);
            }

            let byte = if round == 0 {
                plaintext.get(x).copied().unwrap_or(PADDING)
            } else {
                cipher[x]
            };

            let enc = key_block[x % block_size] ^ byte;
            cipher[x] = enc;
            chain[x % block_size] = enc;
        }
    }

    Ok(cipher)
}

/// Decrypt `ciphertext` by undoing every round in reverse key order,
/// then strip the zero padding added during encryption.
///
/// The padding strip removes *all* trailing zero bytes, so plaintext
/// that legitimately ended in `0x00` comes back without those bytes.
/// That is part of the format and is deliberately not corrected here.
///
/// Buffers of any length are accepted; a wrong key or a mangled buffer
/// yields garbage rather than an error.
pub fn decrypt<K: AsRef<str>>(ciphertext: &[u8], keys: &[K]) -> Result<Vec<u8>> {
    let block_size = checked_block_size(keys)?;

    let mut buffer = ciphertext.to_vec();
    for key in keys.iter().rev() {
        let mut plain = vec![0u8; buffer.len()];

        // Every block after the first was keyed by the ciphertext of
        // the block before it, which is still in hand.
        for i in block_size..buffer.len() {
            plain[i] = buffer[i] ^ buffer[i - block_size];
        }

        // The first block was keyed by the round key itself.
        let key_block = round_key(key.as_ref(), block_size);
        for i in 0..block_size.min(buffer.len()) {
            plain[i] = key_block[i] ^ buffer[i];
        }

        buffer = plain;
    }

    while buffer.last() == Some(&PADDING) {
        buffer.pop();
    }

    Ok(buffer)
}
