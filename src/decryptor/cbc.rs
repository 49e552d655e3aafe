//! src/decryptor/cbc.rs

use crate::aliases::Block16;
use crate::consts::{BLOCK_SIZE, IV_LEN};
use crate::error::SaltedcryptError;
use crate::utils::xor_blocks;
use aes::cipher::{BlockDecrypt, KeyInit};
use aes::{Aes256Dec, Block as AesBlock};

/// Decrypt block-aligned `ciphertext` with AES-256 in CBC mode.
///
/// Padding is left in place; strip it with
/// [`pkcs7_unpad`](crate::padding::pkcs7_unpad).
pub fn cbc_decrypt(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, SaltedcryptError> {
    let cipher = Aes256Dec::new_from_slice(key).map_err(|_| {
        SaltedcryptError::Configuration(format!("AES-256 rejected a {}-byte key", key.len()))
    })?;
    if iv.len() != IV_LEN {
        return Err(SaltedcryptError::Configuration(format!(
            "CBC rejected a {}-byte IV",
            iv.len()
        )));
    }
    if ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(SaltedcryptError::Envelope(format!(
            "ciphertext length {} is not block-aligned",
            ciphertext.len()
        )));
    }

    let mut previous_block = Block16::new([0u8; BLOCK_SIZE]);
    previous_block.copy_from_slice(iv);
    let mut plain_block = Block16::new([0u8; BLOCK_SIZE]);
    let mut plaintext = Vec::with_capacity(ciphertext.len());

    for chunk in ciphertext.chunks_exact(BLOCK_SIZE) {
        let mut block = *AesBlock::from_slice(chunk);
        cipher.decrypt_block(&mut block);

        xor_blocks(&block, &previous_block[..], &mut plain_block[..]);
        plaintext.extend_from_slice(&plain_block[..]);

        previous_block.copy_from_slice(chunk);
    }

    Ok(plaintext)
}
