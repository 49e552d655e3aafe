// src/crypto/mod.rs

//! Low-level crypto primitives (KDF).
//!
//! See crate root for re-exports (e.g. `evp_bytes_to_key`).

pub mod kdf;
