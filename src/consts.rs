//! # Constants
//!
//! Fixed sizes of the OpenSSL `enc` salted format, plus the configuration
//! fallbacks used when the environment does not provide values.

/// Literal marker at the start of every envelope.
pub const ENVELOPE_MAGIC: &[u8; 8] = b"Salted__";

/// Salt length in bytes. Always exactly 8 in the `Salted__` format.
pub const SALT_LEN: usize = 8;

/// Marker + salt.
pub const ENVELOPE_HEADER_LEN: usize = ENVELOPE_MAGIC.len() + SALT_LEN;

/// AES-256 key length.
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length.
pub const IV_LEN: usize = 16;

/// AES block size, also the PKCS#7 padding modulus.
pub const BLOCK_SIZE: usize = 16;

/// Fallback shared secret when `NEXT_PUBLIC_ENCRYPTION_KEY` is unset or empty.
pub const DEFAULT_ENCRYPTION_KEY: &str = "yV9!pZt8@Q1mH!s4Xj^2bGkEw&uLrN0C";

/// Fallback front salt part.
pub const DEFAULT_SALT_FRONT: &str = "frontSalt1234";

/// Fallback back salt part.
pub const DEFAULT_SALT_BACK: &str = "backSalt5678";

/// Prefix shared by all configuration environment variables.
pub const ENV_PREFIX: &str = "NEXT_PUBLIC";

pub const ENV_ENCRYPTION_KEY: &str = "NEXT_PUBLIC_ENCRYPTION_KEY";
pub const ENV_SALT_FRONT: &str = "NEXT_PUBLIC_ENCRYPTION_SALT_FRONT";
pub const ENV_SALT_BACK: &str = "NEXT_PUBLIC_ENCRYPTION_SALT_BACK";
