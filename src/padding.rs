//! PKCS#7 padding.
//!
//! Padding is applied by hand rather than by a cipher mode wrapper: the block
//! cipher only ever sees whole blocks.

use crate::error::SaltedcryptError;

/// Pad `data` to a multiple of `block_size`.
///
/// Appends `p = block_size - len % block_size` bytes of value `p`. `p` is in
/// `1..=block_size`, so block-aligned input gains a whole extra block.
///
/// # Errors
///
/// [`SaltedcryptError::Padding`] if `block_size` is not in `1..=255`.
pub fn pkcs7_pad(data: &[u8], block_size: usize) -> Result<Vec<u8>, SaltedcryptError> {
    check_block_size(block_size)?;

    let pad = block_size - (data.len() % block_size);
    let mut padded = Vec::with_capacity(data.len() + pad);
    padded.extend_from_slice(data);
    padded.resize(data.len() + pad, pad as u8);
    Ok(padded)
}

/// Strip PKCS#7 padding, returning the unpadded prefix of `data`.
///
/// # Errors
///
/// [`SaltedcryptError::Padding`] if the input is empty or unaligned, the pad
/// value is `0` or larger than `block_size`, or any pad byte disagrees.
pub fn pkcs7_unpad(data: &[u8], block_size: usize) -> Result<&[u8], SaltedcryptError> {
    check_block_size(block_size)?;

    if data.is_empty() || data.len() % block_size != 0 {
        return Err(SaltedcryptError::Padding(format!(
            "padded length {} is not a non-zero multiple of {block_size}",
            data.len()
        )));
    }

    let pad = data[data.len() - 1] as usize;
    if pad == 0 || pad > block_size {
        return Err(SaltedcryptError::Padding(format!("invalid pad value {pad}")));
    }

    let (body, tail) = data.split_at(data.len() - pad);
    if tail.iter().any(|&b| b as usize != pad) {
        return Err(SaltedcryptError::Padding("inconsistent pad bytes".into()));
    }

    Ok(body)
}

#[inline]
fn check_block_size(block_size: usize) -> Result<(), SaltedcryptError> {
    if !(1..=255).contains(&block_size) {
        return Err(SaltedcryptError::Padding(format!(
            "block size {block_size} outside 1..=255"
        )));
    }
    Ok(())
}
