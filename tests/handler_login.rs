mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{
    create_test_server, location, session_cookie, set_cookies, spawn_happy_upstream,
    spawn_upstream, token_body, unreachable_base,
};

#[tokio::test]
async fn test_login_page_renders_form_without_session() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    let response = server.get("/").await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Вход в систему"));
    assert!(html.contains("name=\"email\""));
    assert!(html.contains("name=\"password\""));
    assert!(html.contains("required"));
    assert!(html.contains("Войти"));
}

#[tokio::test]
async fn test_login_page_skips_form_when_session_exists() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    let response = server
        .get("/")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/weather"));
}

#[tokio::test]
async fn test_login_success_stores_token_and_redirects() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    let response = server
        .post("/login")
        .form(&[("email", "a@b.com"), ("password", "x")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/weather"));

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert!(cookies[0].starts_with("authToken=abc123"));

    assert_eq!(upstream.auth_call_count(), 1);
    assert_eq!(
        upstream.auth_bodies.lock().unwrap()[0],
        json!({"email": "a@b.com", "password": "x"})
    );
}

#[tokio::test]
async fn test_login_rejected_shows_inline_error() {
    let upstream = spawn_upstream(
        (StatusCode::BAD_REQUEST, json!({"message": "Unauthorized"})),
        (StatusCode::OK, common::moscow_weather()),
    )
    .await;
    let server = create_test_server(&upstream.base);

    let response = server
        .post("/login")
        .form(&[("email", "a@b.com"), ("password", "x")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(set_cookies(&response).is_empty());

    let html = response.text();
    assert!(html.contains("Неверный логин или пароль"));
    assert!(html.contains("value=\"a@b.com\""));
    // loading flag is back to false: the button is enabled and labelled for login
    assert!(html.contains("Войти"));
    assert!(!html.contains(" disabled>"));

    assert_eq!(upstream.auth_call_count(), 1);
}

#[tokio::test]
async fn test_login_server_error_is_reported_as_invalid_credentials() {
    let upstream = spawn_upstream(
        (StatusCode::INTERNAL_SERVER_ERROR, json!({})),
        (StatusCode::OK, common::moscow_weather()),
    )
    .await;
    let server = create_test_server(&upstream.base);

    let response = server
        .post("/login")
        .form(&[("email", "a@b.com"), ("password", "x")])
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(response.text().contains("Неверный логин или пароль"));
}

#[tokio::test]
async fn test_login_unreachable_provider_shows_connection_error() {
    let base = unreachable_base().await;
    let server = create_test_server(&base);

    let response = server
        .post("/login")
        .form(&[("email", "a@b.com"), ("password", "x")])
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(set_cookies(&response).is_empty());
    assert!(response.text().contains("Ошибка подключения к серверу"));
}

#[tokio::test]
async fn test_login_response_without_token_shows_connection_error() {
    let upstream = spawn_upstream(
        (StatusCode::OK, json!({"status": "ok"})),
        (StatusCode::OK, common::moscow_weather()),
    )
    .await;
    let server = create_test_server(&upstream.base);

    let response = server
        .post("/login")
        .form(&[("email", "a@b.com"), ("password", "x")])
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(set_cookies(&response).is_empty());
    assert!(response.text().contains("Ошибка подключения к серверу"));
}

#[tokio::test]
async fn test_login_when_already_authenticated_skips_provider() {
    let upstream = spawn_upstream(
        (StatusCode::OK, token_body("other")),
        (StatusCode::OK, common::moscow_weather()),
    )
    .await;
    let server = create_test_server(&upstream.base);

    let response = server
        .post("/login")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .form(&[("email", "a@b.com"), ("password", "x")])
        .await;

    response.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(location(&response).as_deref(), Some("/weather"));
    assert!(set_cookies(&response).is_empty());
    assert_eq!(upstream.auth_call_count(), 0);
}

#[tokio::test]
async fn test_login_malformed_form_is_bad_request() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    let response = server
        .post("/login")
        .form(&[("email", "a@b.com")])
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(upstream.auth_call_count(), 0);
}
