//! src/decryptor/decrypt.rs
//! Envelope decryption, mirroring what the authentication server does

use crate::aliases::PasswordString;
use crate::consts::BLOCK_SIZE;
use crate::crypto::kdf::evp::derive_key_material;
use crate::decryptor::cbc::cbc_decrypt;
use crate::envelope::Envelope;
use crate::error::SaltedcryptError;
use crate::padding::pkcs7_unpad;
use tracing::debug;
use zeroize::Zeroizing;

/// Recover the password from a base64 `Salted__` envelope.
///
/// The salt is read from the envelope itself, so only the shared secret is
/// needed.
///
/// # Errors
///
/// - [`SaltedcryptError::Base64`] / [`SaltedcryptError::Envelope`] for malformed input
/// - [`SaltedcryptError::Padding`] if the padding does not check out, which is
///   the usual symptom of a wrong secret
/// - [`SaltedcryptError::Utf8`] if the recovered bytes are not UTF-8
pub fn decrypt_password(encoded: &str, secret: &str) -> Result<PasswordString, SaltedcryptError> {
    let envelope = Envelope::decode(encoded)?;
    decrypt_envelope(&envelope, secret)
}

/// Decrypt an already parsed [`Envelope`].
pub fn decrypt_envelope(
    envelope: &Envelope,
    secret: &str,
) -> Result<PasswordString, SaltedcryptError> {
    let material = derive_key_material(secret, &envelope.salt);

    let padded = Zeroizing::new(cbc_decrypt(
        &material.key[..],
        &material.iv[..],
        &envelope.ciphertext,
    )?);
    let plaintext = pkcs7_unpad(&padded, BLOCK_SIZE)?;

    debug!(
        ciphertext_len = envelope.ciphertext.len(),
        "opened salted password envelope"
    );
    Ok(Zeroizing::new(String::from_utf8(plaintext.to_vec())?))
}
