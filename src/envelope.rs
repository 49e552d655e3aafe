//! # Envelope Framing
//!
//! The OpenSSL `enc` salted layout:
//!
//! ```text
//! "Salted__" (8 bytes) || salt (8 bytes) || ciphertext (N bytes, N % 16 == 0)
//! ```
//!
//! carried as standard padded base64 so it fits in a JSON string field.

use crate::aliases::Salt8;
use crate::consts::{BLOCK_SIZE, ENVELOPE_HEADER_LEN, ENVELOPE_MAGIC, SALT_LEN};
use crate::error::SaltedcryptError;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// A parsed or freshly built salted envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub salt: Salt8,
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    pub fn new(salt: Salt8, ciphertext: Vec<u8>) -> Self {
        Self { salt, ciphertext }
    }

    /// Marker, salt and ciphertext as one contiguous buffer.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(ENVELOPE_HEADER_LEN + self.ciphertext.len());
        out.extend_from_slice(ENVELOPE_MAGIC);
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    /// Base64 transport form.
    pub fn encode(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Parse raw envelope bytes.
    ///
    /// # Errors
    ///
    /// [`SaltedcryptError::Envelope`] if the marker is missing, or the
    /// ciphertext is empty or not block-aligned.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaltedcryptError> {
        if bytes.len() < ENVELOPE_HEADER_LEN {
            return Err(SaltedcryptError::Envelope(format!(
                "envelope too short: {} bytes",
                bytes.len()
            )));
        }

        let (magic, rest) = bytes.split_at(ENVELOPE_MAGIC.len());
        if magic != ENVELOPE_MAGIC {
            return Err(SaltedcryptError::Envelope(
                "invalid marker (expected 'Salted__')".into(),
            ));
        }

        let (salt_bytes, ciphertext) = rest.split_at(SALT_LEN);
        if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
            return Err(SaltedcryptError::Envelope(format!(
                "ciphertext length {} is not a non-zero multiple of {BLOCK_SIZE}",
                ciphertext.len()
            )));
        }

        let mut salt = [0u8; SALT_LEN];
        salt.copy_from_slice(salt_bytes);

        Ok(Self {
            salt,
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Decode the base64 transport form and parse it.
    pub fn decode(encoded: &str) -> Result<Self, SaltedcryptError> {
        let bytes = STANDARD.decode(encoded.trim())?;
        Self::from_bytes(&bytes)
    }
}
