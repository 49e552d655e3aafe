//! # Key Material Type Aliases
//!
//! Fixed-size buffers for everything derived from the shared secret. Secret
//! buffers are wrapped in [`zeroize::Zeroizing`] so they are wiped on drop.
//!
//! - [`Aes256Key32`] - 32-byte AES-256 key
//! - [`Iv16`] - 16-byte CBC initialization vector
//! - [`Block16`] - one AES block of scratch space
//! - [`Salt8`] - 8-byte envelope salt (public, travels in the envelope)
//! - [`PasswordString`] - recovered plaintext password

use zeroize::Zeroizing;

pub type Aes256Key32 = Zeroizing<[u8; 32]>;
pub type Iv16 = Zeroizing<[u8; 16]>;
pub type Block16 = Zeroizing<[u8; 16]>;
pub type PasswordString = Zeroizing<String>;

// Not secret: written verbatim after the marker.
pub type Salt8 = [u8; 8];
