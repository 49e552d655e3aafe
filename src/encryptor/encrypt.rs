//! src/encryptor/encrypt.rs
//! Password pre-encryption for the login request

use crate::aliases::Salt8;
use crate::config::EncryptionConfig;
use crate::consts::BLOCK_SIZE;
use crate::crypto::kdf::evp::{derive_key_material, KeyMaterial};
use crate::encryptor::cbc::cbc_encrypt;
use crate::envelope::Envelope;
use crate::error::SaltedcryptError;
use crate::padding::pkcs7_pad;
use tracing::debug;
use zeroize::Zeroizing;

/// Encrypt a user password into the base64 `Salted__` envelope the
/// authentication endpoint expects.
///
/// Deterministic for a fixed `config`: the salt comes from the configured
/// salt parts, and the key and IV from the shared secret and that salt.
///
/// # Errors
///
/// Only [`SaltedcryptError::Configuration`], if the cipher rejects the
/// derived key material. Not expected with the fixed 32/16-byte derivation.
///
/// # Example
///
/// ```
/// use saltedcrypt::{encrypt_password, EncryptionConfig};
///
/// let config = EncryptionConfig::new("test-secret-32-bytes-long-value!", "front", "back");
/// let encoded = encrypt_password("hunter2", &config)?;
/// assert_eq!(encoded, "U2FsdGVkX19mcm9udGJhY2CeSaB2zH/uPPh1OJxcjwk=");
/// # Ok::<(), saltedcrypt::SaltedcryptError>(())
/// ```
pub fn encrypt_password(
    password: &str,
    config: &EncryptionConfig,
) -> Result<String, SaltedcryptError> {
    let salt = config.salt();
    let material = derive_key_material(&config.secret, &salt);

    let envelope = encrypt_with_key_material(password, salt, &material)?;
    let encoded = envelope.encode();

    debug!(
        ciphertext_len = envelope.ciphertext.len(),
        "built salted password envelope"
    );
    Ok(encoded)
}

/// Pad, encrypt and frame `password` under explicit key material.
pub fn encrypt_with_key_material(
    password: &str,
    salt: Salt8,
    material: &KeyMaterial,
) -> Result<Envelope, SaltedcryptError> {
    let padded = Zeroizing::new(pkcs7_pad(password.as_bytes(), BLOCK_SIZE)?);
    let ciphertext = cbc_encrypt(&material.key[..], &material.iv[..], &padded)?;
    Ok(Envelope::new(salt, ciphertext))
}
