use super::*;

#[test]
fn login_url_joins_configured_base() {
    let config = ClientConfig::parse(Some("https://portal.example.com/api/"), None).unwrap();
    let api = HttpAuthApi::new(config);
    assert_eq!(api.login_url(), "https://portal.example.com/api/auth/login");
}

#[test]
fn status_error_uses_string_detail() {
    let err = status_error(401, r#"{"detail": "Incorrect email or password"}"#);
    assert_eq!(
        err,
        ApiError::Status { status: 401, detail: Some("Incorrect email or password".to_owned()) }
    );
    assert_eq!(err.to_string(), "Incorrect email or password");
}

#[test]
fn status_error_uses_first_validation_message() {
    let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "field required"}]}"#;
    let err = status_error(422, body);
    assert_eq!(err, ApiError::Status { status: 422, detail: Some("field required".to_owned()) });
}

#[test]
fn status_error_without_json_body_reports_status() {
    let err = status_error(502, "<html>Bad Gateway</html>");
    assert_eq!(err, ApiError::Status { status: 502, detail: None });
    assert_eq!(err.to_string(), "login failed: 502");
}

#[test]
fn status_error_ignores_blank_detail() {
    assert_eq!(status_error(400, r#"{"detail": "  "}"#), ApiError::Status { status: 400, detail: None });
}

#[test]
fn timeout_message_reports_seconds() {
    let err = ApiError::Timeout(Duration::from_secs(30));
    assert_eq!(err.to_string(), "login request timed out after 30s");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_login_is_unavailable_off_browser() {
    let api = HttpAuthApi::new(ClientConfig::default());
    let result = futures::executor::block_on(api.login(&Credentials::new("a@b.com", "pw")));
    assert_eq!(result, Err(ApiError::Unavailable));
}
