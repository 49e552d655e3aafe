//! tests/common.rs
//! Common constants and utilities shared across test files

use saltedcrypt::EncryptionConfig;
use serde::Deserialize;

/// Shared secret used by the pinned vectors
#[allow(dead_code)] // Used across multiple test files
pub const TEST_SECRET: &str = "test-secret-32-bytes-long-value!";

#[allow(dead_code)]
pub const TEST_PASSWORD: &str = "hunter2";

/// `encrypt_password("hunter2")` under [`test_config`], cross-checked with
/// `openssl enc -aes-256-cbc -md md5 -S 66726f6e74626163`
#[allow(dead_code)]
pub const TEST_ENVELOPE: &str = "U2FsdGVkX19mcm9udGJhY2CeSaB2zH/uPPh1OJxcjwk=";

/// Password lengths around the AES block boundary
#[allow(dead_code)]
pub const BOUNDARY_LENGTHS: &[usize] = &[0, 1, 15, 16, 17, 100];

#[allow(dead_code)]
pub fn test_config() -> EncryptionConfig {
    EncryptionConfig::new(TEST_SECRET, "front", "back")
}

/// One entry of `tests/test_data/openssl_vectors.json`
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct OpensslVector {
    pub description: String,
    pub secret: String,
    pub salt_front: String,
    pub salt_back: String,
    pub password: String,
    pub salt_hex: String,
    pub key_hex: String,
    pub iv_hex: String,
    pub envelope: String,
}

#[allow(dead_code)]
pub fn load_vectors() -> Vec<OpensslVector> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_data")
        .join("openssl_vectors.json");

    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));

    serde_json::from_str(&content).unwrap_or_else(|e| panic!("Failed to parse vectors: {e}"))
}
