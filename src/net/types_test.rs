use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_user() -> User {
    User {
        id: UserId::Number(7),
        email: "ada@example.com".to_owned(),
        full_name: Some("Ada Lovelace".to_owned()),
        role: Some("admin".to_owned()),
        extra: serde_json::Map::new(),
    }
}

// =============================================================
// User
// =============================================================

#[test]
fn user_accepts_numeric_id() {
    let user: User = serde_json::from_str(r#"{"id": 42, "email": "a@b.com"}"#).unwrap();
    assert_eq!(user.id, UserId::Number(42));
    assert_eq!(user.full_name, None);
    assert_eq!(user.role, None);
}

#[test]
fn user_accepts_string_id() {
    let user: User = serde_json::from_str(r#"{"id": "u-1", "email": "a@b.com"}"#).unwrap();
    assert_eq!(user.id, UserId::Text("u-1".to_owned()));
    assert_eq!(user.id.to_string(), "u-1");
}

#[test]
fn user_keeps_unknown_fields_through_serialization() {
    let raw = r#"{"id":3,"email":"a@b.com","company":"Acme","is_active":true}"#;
    let user: User = serde_json::from_str(raw).unwrap();
    assert_eq!(user.extra.get("company"), Some(&serde_json::json!("Acme")));

    let written = serde_json::to_string(&user).unwrap();
    let reread: User = serde_json::from_str(&written).unwrap();
    assert_eq!(reread, user);
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&written).unwrap(),
        serde_json::from_str::<serde_json::Value>(raw).unwrap()
    );
}

#[test]
fn user_missing_email_is_rejected() {
    assert!(serde_json::from_str::<User>(r#"{"id": 1}"#).is_err());
}

#[test]
fn user_display_name_prefers_full_name() {
    assert_eq!(make_user().display_name(), "Ada Lovelace");
}

#[test]
fn user_display_name_falls_back_to_email() {
    let user = User { full_name: Some("  ".to_owned()), ..make_user() };
    assert_eq!(user.display_name(), "ada@example.com");
}

// =============================================================
// Credentials
// =============================================================

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("a@b.com", "hunter2");
    let debug = format!("{creds:?}");
    assert!(debug.contains("a@b.com"));
    assert!(!debug.contains("hunter2"));
}

#[test]
fn credentials_serialize_as_email_and_password() {
    let value = serde_json::to_value(Credentials::new("a@b.com", "pw")).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "a@b.com", "password": "pw" }));
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_parses_bearer_payload() {
    let raw = r#"{
        "access_token": "tok-123",
        "token_type": "bearer",
        "user": {"id": 7, "email": "ada@example.com", "full_name": "Ada Lovelace", "role": "admin"}
    }"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.access_token, "tok-123");
    assert_eq!(resp.token_type.as_deref(), Some("bearer"));
    assert_eq!(resp.user, make_user());
}

#[test]
fn login_response_token_type_is_optional() {
    let raw = r#"{"access_token": "t", "user": {"id": 1, "email": "a@b.com"}}"#;
    let resp: LoginResponse = serde_json::from_str(raw).unwrap();
    assert_eq!(resp.token_type, None);
}
