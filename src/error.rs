//! # Error Types
//!
//! All fallible operations return [`Result<T, SaltedcryptError>`](SaltedcryptError).
//! Encryption itself can only fail on a cipher setup problem; the remaining
//! variants belong to configuration loading and the decryption side.

use thiserror::Error;

/// The error type for all salted-envelope operations.
#[derive(Error, Debug)]
pub enum SaltedcryptError {
    /// The block cipher rejected the derived key or IV.
    ///
    /// Lengths are fixed at 32/16 bytes, so this indicates a broken build or
    /// misuse of the low-level API. Never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Loading [`EncryptionConfig`](crate::config::EncryptionConfig) from its
    /// source failed.
    #[error("Config source error: {0}")]
    Config(#[from] config::ConfigError),

    /// Envelope framing is invalid.
    ///
    /// - Missing `Salted__` marker
    /// - Shorter than marker + salt + one block
    /// - Ciphertext not a multiple of the block size
    #[error("Envelope error: {0}")]
    Envelope(String),

    /// The transport string is not valid base64.
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// PKCS#7 padding is invalid, or the block size is unusable.
    ///
    /// On the decryption side this is what a wrong shared secret usually
    /// looks like.
    #[error("Padding error: {0}")]
    Padding(String),

    /// The decrypted password is not valid UTF-8.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
