mod common;

use axum::http::{StatusCode, header};
use serde_json::json;

use common::{
    create_test_server, session_cookie, spawn_happy_upstream, spawn_upstream, token_body,
    unreachable_base,
};

#[tokio::test]
async fn test_weather_page_renders_loading_shell() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    let response = server
        .get("/weather")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("Загрузка данных о погоде..."));
    assert!(html.contains("data-src=\"/weather/snapshot\""));
    assert!(html.contains("<noscript>"));
    assert!(html.contains("action=\"/logout\""));
    assert!(html.contains(" г."));

    // the shell itself never calls the weather API
    assert_eq!(upstream.weather_call_count(), 0);
}

#[tokio::test]
async fn test_weather_snapshot_renders_fields() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    let response = server
        .get("/weather/snapshot")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await;

    response.assert_status_ok();
    let html = response.text();
    assert!(html.contains("22°C"));
    assert!(html.contains("18°C"));
    assert!(html.contains("55%"));
    assert!(html.contains("3 м/с"));
    assert!(html.contains("clear"));
    assert!(html.contains("Moscow"));
    assert!(html.contains("https://openweathermap.org/img/wn/01d@2x.png"));
}

#[tokio::test]
async fn test_weather_snapshot_issues_exactly_one_request_for_fixed_location() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    server
        .get("/weather/snapshot")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await
        .assert_status_ok();

    assert_eq!(upstream.weather_call_count(), 1);

    let queries = upstream.weather_queries.lock().unwrap();
    let params = &queries[0];
    assert_eq!(params.get("q").map(String::as_str), Some("Moscow"));
    assert_eq!(params.get("appid").map(String::as_str), Some("test-key"));
    assert_eq!(params.get("units").map(String::as_str), Some("metric"));
    assert_eq!(params.get("lang").map(String::as_str), Some("ru"));
}

#[tokio::test]
async fn test_weather_is_refetched_on_every_load() {
    let upstream = spawn_happy_upstream().await;
    let server = create_test_server(&upstream.base);

    for _ in 0..2 {
        server
            .get("/weather/snapshot")
            .add_header(header::COOKIE, session_cookie("abc123"))
            .await
            .assert_status_ok();
    }

    assert_eq!(upstream.weather_call_count(), 2);
}

#[tokio::test]
async fn test_weather_rejected_shows_error_with_logout_only() {
    let upstream = spawn_upstream(
        (StatusCode::OK, token_body("abc123")),
        (
            StatusCode::UNAUTHORIZED,
            json!({"cod": 401, "message": "Invalid API key"}),
        ),
    )
    .await;
    let server = create_test_server(&upstream.base);

    let response = server
        .get("/weather/snapshot")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let html = response.text();
    assert!(html.contains("Ошибка получения данных о погоде"));
    assert!(html.contains("action=\"/logout\""));
    assert!(!html.contains("°C"));
    assert_eq!(upstream.weather_call_count(), 1);
}

#[tokio::test]
async fn test_weather_unreachable_shows_connection_error() {
    let base = unreachable_base().await;
    let server = create_test_server(&base);

    let response = server
        .get("/weather/snapshot")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let html = response.text();
    assert!(html.contains("Ошибка подключения к сервису погоды"));
    assert!(html.contains("action=\"/logout\""));
}

#[tokio::test]
async fn test_weather_without_conditions_shows_connection_error() {
    let upstream = spawn_upstream(
        (StatusCode::OK, token_body("abc123")),
        (
            StatusCode::OK,
            json!({
                "main": {"temp": 1.0, "feels_like": 0.0, "humidity": 90},
                "weather": [],
                "wind": {"speed": 1.0},
                "name": "Moscow"
            }),
        ),
    )
    .await;
    let server = create_test_server(&upstream.base);

    let response = server
        .get("/weather/snapshot")
        .add_header(header::COOKIE, session_cookie("abc123"))
        .await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    assert!(response.text().contains("Ошибка подключения к сервису погоды"));
}
