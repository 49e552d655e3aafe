//! src/crypto/kdf/evp.rs
//! OpenSSL `EVP_BytesToKey` (MD5, count = 1)

use crate::aliases::{Aes256Key32, Iv16, Salt8};
use crate::consts::{IV_LEN, KEY_LEN};
use md5::{Digest, Md5};
use tracing::trace;
use zeroize::Zeroizing;

/// MD5 digest length; each derivation round yields this many bytes.
pub const MD5_DIGEST_LEN: usize = 16;

/// Derived AES-256-CBC key and IV. Wiped on drop.
pub struct KeyMaterial {
    pub key: Aes256Key32,
    pub iv: Iv16,
}

/// Derive `key_len` key bytes and `iv_len` IV bytes from `password` and `salt`.
///
/// `D_0` is empty and `D_i = MD5(D_{i-1} ‖ password ‖ salt)`; rounds are
/// concatenated until at least `key_len + iv_len` bytes exist. The key is the
/// first `key_len` bytes and the IV the following `iv_len`.
///
/// Total and deterministic: identical inputs always yield identical output.
pub fn evp_bytes_to_key(
    password: &[u8],
    salt: &Salt8,
    key_len: usize,
    iv_len: usize,
) -> (Zeroizing<Vec<u8>>, Zeroizing<Vec<u8>>) {
    let total_len = key_len + iv_len;
    let mut derived = Zeroizing::new(Vec::with_capacity(total_len + MD5_DIGEST_LEN));
    let mut hasher = Md5::new();
    let mut rounds = 0usize;

    while derived.len() < total_len {
        if rounds > 0 {
            let previous = derived.len() - MD5_DIGEST_LEN;
            hasher.update(&derived[previous..]);
        }
        hasher.update(password);
        hasher.update(salt);
        let digest = hasher.finalize_reset();
        derived.extend_from_slice(&digest);
        rounds += 1;
    }

    trace!(rounds, key_len, iv_len, "derived EVP_BytesToKey material");

    let key = Zeroizing::new(derived[..key_len].to_vec());
    let iv = Zeroizing::new(derived[key_len..total_len].to_vec());
    (key, iv)
}

/// Derive the fixed 32-byte key and 16-byte IV used by the envelope format.
#[inline]
pub fn derive_key_material(secret: &str, salt: &Salt8) -> KeyMaterial {
    let (key_bytes, iv_bytes) = evp_bytes_to_key(secret.as_bytes(), salt, KEY_LEN, IV_LEN);

    let mut key = Aes256Key32::new([0u8; KEY_LEN]);
    key.copy_from_slice(&key_bytes);
    let mut iv = Iv16::new([0u8; IV_LEN]);
    iv.copy_from_slice(&iv_bytes);

    KeyMaterial { key, iv }
}
