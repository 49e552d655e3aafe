//! # Key Derivation Functions (KDF)
//!
//! ## Modules
//!
//! - [`evp`] - OpenSSL `EVP_BytesToKey` with MD5 and a single iteration, the
//!   derivation `openssl enc -md md5` uses for `Salted__` envelopes
//!
//! ## Usage
//!
//! Most callers want [`encrypt_password`](crate::encrypt_password) and
//! [`decrypt_password`](crate::decrypt_password), which derive internally.
//! The KDF is exposed for interop checks against other implementations.

pub mod evp;
