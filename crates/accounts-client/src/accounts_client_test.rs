//! Unit tests for request serialization and client construction (no network).

use std::time::Duration;

use super::*;

fn sample_request() -> AccountRequest {
    AccountRequest {
        email: "person0@email.com".to_string(),
        password: "password".to_string(),
        nick_name: "김민준".to_string(),
        one_line_introduce: "안녕하세요!".to_string(),
    }
}

#[test]
fn test_request_serializes_with_camel_case_keys() {
    let value = serde_json::to_value(sample_request()).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "email": "person0@email.com",
            "password": "password",
            "nickName": "김민준",
            "oneLineIntroduce": "안녕하세요!"
        })
    );
}

#[test]
fn test_request_keeps_hangul_unescaped() {
    let text = serde_json::to_string(&sample_request()).unwrap();
    assert!(text.contains("김민준"));
}

#[test]
fn test_register_response_is_success() {
    let ok = RegisterResponse { status: 201, body: String::new() };
    let bad = RegisterResponse { status: 400, body: String::new() };
    let err = RegisterResponse { status: 500, body: String::new() };
    assert!(ok.is_success());
    assert!(!bad.is_success());
    assert!(!err.is_success());
}

#[test]
fn test_new_rejects_invalid_endpoint() {
    let result = AccountsClient::new("not a url", Duration::from_secs(1));
    assert!(result.is_err());
}

#[test]
fn test_new_keeps_endpoint() {
    let client = AccountsClient::new("http://localhost:8083/api/accounts", Duration::from_secs(1)).unwrap();
    assert_eq!(client.endpoint(), "http://localhost:8083/api/accounts");
}
