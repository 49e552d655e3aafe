//! src/encryptor/cbc.rs
//! AES-256-CBC over whole blocks, no cipher-side padding

use crate::aliases::Block16;
use crate::consts::{BLOCK_SIZE, IV_LEN};
use crate::error::SaltedcryptError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockEncrypt, KeyInit};
use aes::{Aes256Enc, Block as AesBlock};

/// Encrypt already padded `plaintext` with AES-256 in CBC mode.
///
/// # Errors
///
/// - [`SaltedcryptError::Configuration`] if `key` is not 32 bytes or `iv` not 16
/// - [`SaltedcryptError::Padding`] if `plaintext` is not block-aligned
pub fn cbc_encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, SaltedcryptError> {
    let cipher = Aes256Enc::new_from_slice(key).map_err(|_| {
        SaltedcryptError::Configuration(format!("AES-256 rejected a {}-byte key", key.len()))
    })?;
    if iv.len() != IV_LEN {
        return Err(SaltedcryptError::Configuration(format!(
            "CBC rejected a {}-byte IV",
            iv.len()
        )));
    }
    if plaintext.len() % BLOCK_SIZE != 0 {
        return Err(SaltedcryptError::Padding(format!(
            "plaintext length {} is not block-aligned",
            plaintext.len()
        )));
    }

    // previous ciphertext block, seeded with the IV
    let mut prev_block = Block16::new([0u8; BLOCK_SIZE]);
    prev_block.copy_from_slice(iv);
    let mut xor_output = Block16::new([0u8; BLOCK_SIZE]);
    let mut ciphertext = Vec::with_capacity(plaintext.len());

    for chunk in plaintext.chunks_exact(BLOCK_SIZE) {
        xor_blocks(chunk, &prev_block[..], &mut xor_output[..]);

        let mut aes_block = AesBlock::from(*xor_output);
        cipher.encrypt_block(&mut aes_block);

        ciphertext.extend_from_slice(&aes_block);
        prev_block.copy_from_slice(&aes_block);
    }

    Ok(ciphertext)
}
