// src/lib.rs

//! OpenSSL `enc`-compatible password pre-encryption.
//!
//! Passwords are encrypted before they are sent to the voting platform's
//! authentication endpoint:
//!
//! ```text
//! salt      = first 8 bytes of (salt_front ‖ salt_back), zero-padded
//! key, iv   = EVP_BytesToKey(MD5, secret, salt) → 32 + 16 bytes
//! envelope  = base64("Salted__" ‖ salt ‖ AES-256-CBC(PKCS#7(password)))
//! ```
//!
//! The output matches `openssl enc -aes-256-cbc -md md5 -S <salt>` byte for
//! byte. The MD5 derivation and fixed salt are kept for interoperability with
//! the existing server, not for strength.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod envelope;
pub mod error;
pub mod login;
pub mod padding;
pub mod salt;
pub mod utils;

// High-level API
pub use crate::config::EncryptionConfig;
pub use decryptor::decrypt_password;
pub use encryptor::encrypt_password;
pub use envelope::Envelope;
pub use error::SaltedcryptError;

// Low-level KDF, exposed for interop checks against other implementations
pub use crypto::kdf::evp::{derive_key_material, evp_bytes_to_key, KeyMaterial};

pub use login::{LoginErrorResponse, LoginRequest, LoginResponse};
