//! tests/vector_tests.rs
//! Pinned vectors produced by `openssl enc -aes-256-cbc -md md5 -S <salt>`

mod common;

use common::load_vectors;
use hex::decode;
use saltedcrypt::{decrypt_password, derive_key_material, encrypt_password, EncryptionConfig};

#[test]
fn encrypt_matches_openssl_vectors() {
    let vectors = load_vectors();
    assert!(!vectors.is_empty(), "no vectors loaded");

    for v in &vectors {
        let config = EncryptionConfig::new(&v.secret, &v.salt_front, &v.salt_back);

        let encoded = encrypt_password(&v.password, &config)
            .unwrap_or_else(|e| panic!("{}: encrypt failed: {e:?}", v.description));

        assert_eq!(encoded, v.envelope, "{}: envelope mismatch", v.description);
    }
}

#[test]
fn salt_and_key_material_match_openssl_vectors() {
    for v in &load_vectors() {
        let config = EncryptionConfig::new(&v.secret, &v.salt_front, &v.salt_back);
        let salt = config.salt();
        assert_eq!(salt.to_vec(), decode(&v.salt_hex).unwrap(), "{}: salt", v.description);

        let material = derive_key_material(&v.secret, &salt);
        assert_eq!(
            material.key.to_vec(),
            decode(&v.key_hex).unwrap(),
            "{}: key",
            v.description
        );
        assert_eq!(
            material.iv.to_vec(),
            decode(&v.iv_hex).unwrap(),
            "{}: iv",
            v.description
        );
    }
}

#[test]
fn decrypt_openssl_vectors() {
    for v in &load_vectors() {
        let decrypted = decrypt_password(&v.envelope, &v.secret)
            .unwrap_or_else(|e| panic!("{}: decrypt failed: {e:?}", v.description));
        assert_eq!(decrypted.as_str(), v.password, "{}", v.description);
    }
}
