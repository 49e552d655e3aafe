//! Envelope salt construction.

use crate::aliases::Salt8;
use crate::consts::SALT_LEN;

/// Build the 8-byte salt from the front and back salt parts.
///
/// The UTF-8 bytes of `front ‖ back` are truncated to the first 8 bytes, or
/// zero-padded up to 8. Truncation is byte-wise and may split a multi-byte
/// character; the server does the same.
///
/// ```
/// use saltedcrypt::salt::build_salt;
///
/// assert_eq!(build_salt("ab", "cd"), *b"abcd\0\0\0\0");
/// assert_eq!(build_salt("frontSalt1234", "backSalt5678"), *b"frontSal");
/// ```
pub fn build_salt(front: &str, back: &str) -> Salt8 {
    let mut salt = [0u8; SALT_LEN];
    let combined = front.bytes().chain(back.bytes()).take(SALT_LEN);
    for (slot, byte) in salt.iter_mut().zip(combined) {
        *slot = byte;
    }
    salt
}
