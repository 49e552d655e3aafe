// src/decryptor/mod.rs

//! High-level decryption facade: the server side of the envelope.
//!
//! Core API: `decrypt_password(encoded, secret)?`.
//! Helpers: `decrypt_envelope` and `cbc_decrypt` for custom flows.

pub(crate) mod cbc;
pub(crate) mod decrypt;

pub use cbc::cbc_decrypt;
pub use decrypt::{decrypt_envelope, decrypt_password};
