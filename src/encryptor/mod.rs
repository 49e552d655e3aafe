// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt_password(password, &config)?` for the login flow.
//! Helpers: `encrypt_with_key_material` and `cbc_encrypt` for interop checks
//! and fixed-vector tests.

pub(crate) mod cbc;
pub(crate) mod encrypt;

pub use cbc::cbc_encrypt;
pub use encrypt::{encrypt_password, encrypt_with_key_material};
