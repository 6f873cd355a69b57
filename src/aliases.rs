// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! Canonical wrapper types for secret material handled by the vault.

pub use secure_gate::dynamic_alias;

// Dynamic secrets
dynamic_alias!(pub VaultPassword, String); // user password protecting a key set at rest
