use super::*;

// =============================================================
// Request bodies
// =============================================================

#[test]
fn login_request_serializes_exactly_email_and_password() {
    let form = LoginForm {
        email: "user@example.com".to_owned(),
        password: "hunter22".to_owned(),
    };
    let value = serde_json::to_value(LoginRequest::from(&form)).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "email": "user@example.com",
            "password": "hunter22",
        })
    );
}

#[test]
fn register_request_never_carries_confirm_password() {
    let form = RegisterForm {
        email: "user@example.com".to_owned(),
        password: "hunter22".to_owned(),
        confirm_password: "hunter22".to_owned(),
        address: "123 Main St".to_owned(),
        phone: "+123 123 1234".to_owned(),
    };
    let value = serde_json::to_value(RegisterRequest::from(&form)).expect("serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "email": "user@example.com",
            "password": "hunter22",
            "address": "123 Main St",
            "phone": "+123 123 1234",
        })
    );
}

// =============================================================
// Response bodies
// =============================================================

#[test]
fn api_message_parses_with_message() {
    let body: ApiMessage =
        serde_json::from_str(r#"{"message":"Invalid credentials"}"#).expect("parse");
    assert_eq!(body.message.as_deref(), Some("Invalid credentials"));
}

#[test]
fn api_message_parses_without_message() {
    let body: ApiMessage = serde_json::from_str("{}").expect("parse");
    assert!(body.message.is_none());
}

#[test]
fn api_message_ignores_extra_fields() {
    let body: ApiMessage =
        serde_json::from_str(r#"{"message":"ok","token":"abc","user":{"id":1}}"#).expect("parse");
    assert_eq!(body.message.as_deref(), Some("ok"));
}
