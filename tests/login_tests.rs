//! tests/login_tests.rs
//! JSON shapes of the /auth/login exchange

mod common;

use common::{test_config, TEST_ENVELOPE, TEST_SECRET};
use saltedcrypt::login::AdminUser;
use saltedcrypt::{decrypt_password, LoginErrorResponse, LoginRequest, LoginResponse};
use serde_json::json;

#[test]
fn request_carries_envelope_not_plaintext() {
    let request = LoginRequest::encrypted("admin", "hunter2", &test_config()).unwrap();

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(body, json!({ "username": "admin", "password": TEST_ENVELOPE }));

    let recovered = decrypt_password(&request.password, TEST_SECRET).unwrap();
    assert_eq!(recovered.as_str(), "hunter2");
}

#[test]
fn response_with_admin_session() {
    let response: LoginResponse = serde_json::from_value(json!({
        "message": "Login successful",
        "token": "eyJhbGciOiJIUzI1NiJ9.payload.sig",
        "admin": {
            "id": 1,
            "username": "admin",
            "created_at": "2024-01-01T00:00:00Z",
            "last_login": null
        }
    }))
    .unwrap();

    let (token, user) = response.session().expect("session granted");
    assert_eq!(token, "eyJhbGciOiJIUzI1NiJ9.payload.sig");
    assert_eq!(user.username, "admin");
    assert_eq!(user.last_login, None);
}

#[test]
fn response_with_user_key_and_no_token() {
    let response: LoginResponse = serde_json::from_value(json!({
        "message": "ok",
        "user": { "id": 7, "username": "bob", "created_at": "2024-05-05T10:00:00Z" }
    }))
    .unwrap();

    assert_eq!(
        response.user,
        Some(AdminUser {
            id: 7,
            username: "bob".into(),
            created_at: "2024-05-05T10:00:00Z".into(),
            last_login: None,
        })
    );
    assert!(response.session().is_none());
}

#[test]
fn error_response() {
    let error: LoginErrorResponse =
        serde_json::from_str(r#"{"error":"invalid credentials"}"#).unwrap();
    assert_eq!(error.error, "invalid credentials");
}
