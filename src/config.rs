//! Shared-secret and salt configuration.
//!
//! Values come from the `NEXT_PUBLIC_ENCRYPTION_*` environment variables the
//! frontend build already exposes. Any value that is unset **or empty** falls
//! back to its documented default, so a half-configured environment still
//! produces envelopes the stock server accepts.

use crate::aliases::Salt8;
use crate::consts::{
    DEFAULT_ENCRYPTION_KEY, DEFAULT_SALT_BACK, DEFAULT_SALT_FRONT, ENV_ENCRYPTION_KEY, ENV_PREFIX,
};
use crate::error::SaltedcryptError;
use crate::salt::build_salt;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, warn};

/// Immutable configuration passed explicitly into every encrypt/decrypt call.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionConfig {
    /// Application-level pass-phrase shared with the server. Not the user's password.
    pub secret: String,
    pub salt_front: String,
    pub salt_back: String,
}

/// Shape of the configuration source before defaults are applied.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEncryptionConfig {
    encryption_key: Option<String>,
    encryption_salt_front: Option<String>,
    encryption_salt_back: Option<String>,
}

impl EncryptionConfig {
    pub fn new(
        secret: impl Into<String>,
        salt_front: impl Into<String>,
        salt_back: impl Into<String>,
    ) -> Self {
        Self {
            secret: secret.into(),
            salt_front: salt_front.into(),
            salt_back: salt_back.into(),
        }
    }

    /// Load configuration from the process environment.
    ///
    /// Reads `NEXT_PUBLIC_ENCRYPTION_KEY`, `NEXT_PUBLIC_ENCRYPTION_SALT_FRONT`
    /// and `NEXT_PUBLIC_ENCRYPTION_SALT_BACK`.
    ///
    /// # Errors
    ///
    /// Returns [`SaltedcryptError::Config`] if the environment source cannot be
    /// read or deserialized.
    pub fn from_env() -> Result<Self, SaltedcryptError> {
        let source = config::Config::builder()
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Self::from_source(source)
    }

    /// Build from an already assembled [`config::Config`].
    ///
    /// Expected keys are `encryption_key`, `encryption_salt_front` and
    /// `encryption_salt_back`; unrelated keys are ignored.
    pub fn from_source(source: config::Config) -> Result<Self, SaltedcryptError> {
        let raw: RawEncryptionConfig = source.try_deserialize()?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawEncryptionConfig) -> Self {
        let secret = match non_empty(raw.encryption_key) {
            Some(secret) => secret,
            None => {
                warn!(
                    variable = ENV_ENCRYPTION_KEY,
                    "shared secret not configured, using built-in default"
                );
                DEFAULT_ENCRYPTION_KEY.to_owned()
            }
        };
        let salt_front =
            non_empty(raw.encryption_salt_front).unwrap_or_else(|| DEFAULT_SALT_FRONT.to_owned());
        let salt_back =
            non_empty(raw.encryption_salt_back).unwrap_or_else(|| DEFAULT_SALT_BACK.to_owned());

        debug!(
            salt_front_len = salt_front.len(),
            salt_back_len = salt_back.len(),
            "loaded encryption config"
        );

        Self {
            secret,
            salt_front,
            salt_back,
        }
    }

    /// The 8-byte envelope salt built from the two salt parts.
    #[inline]
    pub fn salt(&self) -> Salt8 {
        build_salt(&self.salt_front, &self.salt_back)
    }

    /// `true` when the shared secret is the compiled-in fallback.
    pub fn uses_default_secret(&self) -> bool {
        self.secret == DEFAULT_ENCRYPTION_KEY
    }
}

impl Default for EncryptionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENCRYPTION_KEY, DEFAULT_SALT_FRONT, DEFAULT_SALT_BACK)
    }
}

impl fmt::Debug for EncryptionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncryptionConfig")
            .field("secret", &"[REDACTED]")
            .field("salt_front", &self.salt_front)
            .field("salt_back", &self.salt_back)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
