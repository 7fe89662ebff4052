#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderValue, StatusCode, header},
    routing::{get, post},
};
use axum_test::TestServer;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use url::Url;
use weather_portal::config::{
    Config, DEFAULT_SESSION_COOKIE_NAME, DEFAULT_WEATHER_ICON_URL,
};
use weather_portal::routes::router;
use weather_portal::server::build_state;
use weather_portal::state::AppState;

pub const AUTH_PATH: &str = "api/v1/auth/login";
pub const WEATHER_PATH: &str = "data/2.5/weather";

/// In-process stand-in for the authentication and weather APIs.
pub struct Upstream {
    pub base: Url,
    pub auth_calls: Arc<AtomicUsize>,
    pub auth_bodies: Arc<Mutex<Vec<Value>>>,
    pub weather_calls: Arc<AtomicUsize>,
    pub weather_queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl Upstream {
    pub fn auth_call_count(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn weather_call_count(&self) -> usize {
        self.weather_calls.load(Ordering::SeqCst)
    }
}

pub fn moscow_weather() -> Value {
    json!({
        "main": {"temp": 21.6, "feels_like": 18.0, "humidity": 55},
        "weather": [{"description": "clear", "icon": "01d"}],
        "wind": {"speed": 3.0},
        "name": "Moscow"
    })
}

pub fn token_body(token: &str) -> Value {
    json!({ "token": token })
}

/// Serves fixed responses for both upstream endpoints on an ephemeral port.
pub async fn spawn_upstream(auth: (StatusCode, Value), weather: (StatusCode, Value)) -> Upstream {
    let auth_calls = Arc::new(AtomicUsize::new(0));
    let auth_bodies = Arc::new(Mutex::new(Vec::new()));
    let weather_calls = Arc::new(AtomicUsize::new(0));
    let weather_queries = Arc::new(Mutex::new(Vec::new()));

    let auth_handler = {
        let calls = auth_calls.clone();
        let bodies = auth_bodies.clone();
        move |Json(body): Json<Value>| {
            let calls = calls.clone();
            let bodies = bodies.clone();
            let (status, response) = auth.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                bodies.lock().unwrap().push(body);
                (status, Json(response))
            }
        }
    };

    let weather_handler = {
        let calls = weather_calls.clone();
        let queries = weather_queries.clone();
        move |Query(params): Query<HashMap<String, String>>| {
            let calls = calls.clone();
            let queries = queries.clone();
            let (status, response) = weather.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                queries.lock().unwrap().push(params);
                (status, Json(response))
            }
        }
    };

    let app = Router::new()
        .route(&format!("/{AUTH_PATH}"), post(auth_handler))
        .route(&format!("/{WEATHER_PATH}"), get(weather_handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        base: Url::parse(&format!("http://{addr}/")).unwrap(),
        auth_calls,
        auth_bodies,
        weather_calls,
        weather_queries,
    }
}

/// Upstream that answers login with `abc123` and weather with the Moscow sample.
pub async fn spawn_happy_upstream() -> Upstream {
    spawn_upstream(
        (StatusCode::OK, token_body("abc123")),
        (StatusCode::OK, moscow_weather()),
    )
    .await
}

/// Base URL of a local port with nothing listening on it.
pub async fn unreachable_base() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    Url::parse(&format!("http://{addr}/")).unwrap()
}

pub fn test_config(base: &Url) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        log_level: "info".to_string(),
        log_format: "text".to_string(),
        auth_api_url: base.join(AUTH_PATH).unwrap().to_string(),
        weather_api_url: base.join(WEATHER_PATH).unwrap().to_string(),
        weather_api_key: "test-key".to_string(),
        weather_city: "Moscow".to_string(),
        weather_units: "metric".to_string(),
        weather_lang: "ru".to_string(),
        weather_icon_url: DEFAULT_WEATHER_ICON_URL.to_string(),
        session_cookie_name: DEFAULT_SESSION_COOKIE_NAME.to_string(),
        session_cookie_secure: false,
        login_rate_limit: false,
    }
}

pub fn create_test_state(base: &Url) -> AppState {
    let config = test_config(base);
    config.validate().unwrap();
    build_state(&config).unwrap()
}

/// Full application router against the given upstream base URL.
pub fn create_test_server(base: &Url) -> TestServer {
    let app = router(create_test_state(base), false).unwrap();
    TestServer::new(app).unwrap()
}

pub fn session_cookie(token: &'static str) -> HeaderValue {
    HeaderValue::from_str(&format!("authToken={token}")).unwrap()
}

pub fn location(response: &axum_test::TestResponse) -> Option<String> {
    response
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string())
}

pub fn set_cookies(response: &axum_test::TestResponse) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}
