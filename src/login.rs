//! Request and response bodies for `POST /auth/login`.
//!
//! Only the JSON shapes live here; sending the request is the caller's job.

use crate::config::EncryptionConfig;
use crate::encryptor::encrypt_password;
use crate::error::SaltedcryptError;
use serde::{Deserialize, Serialize};

/// Request body. `password` carries the base64 envelope, never plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    /// Build a request, encrypting `password` under `config`.
    pub fn encrypted(
        username: impl Into<String>,
        password: &str,
        config: &EncryptionConfig,
    ) -> Result<Self, SaltedcryptError> {
        Ok(Self {
            username: username.into(),
            password: encrypt_password(password, config)?,
        })
    }
}

/// Account returned on a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub username: String,
    pub created_at: String,
    #[serde(default)]
    pub last_login: Option<String>,
}

/// Successful response body.
///
/// Deployments differ on whether the account is under `admin` or `user`;
/// both are accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<AdminUser>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<AdminUser>,
}

impl LoginResponse {
    /// Session token and account, if the server granted a session.
    pub fn session(&self) -> Option<(&str, &AdminUser)> {
        let token = self.token.as_deref()?;
        let user = self.admin.as_ref().or(self.user.as_ref())?;
        Some((token, user))
    }
}

/// Error body returned on any non-2xx status (bad credentials, inactive account, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginErrorResponse {
    pub error: String,
}
