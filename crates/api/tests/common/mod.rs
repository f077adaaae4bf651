#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use fyyur_api::config::ServerConfig;
use fyyur_api::router::build_app_router;
use fyyur_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is unused: tests hand a ready pool to the router.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        database_max_connections: 1,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app_router(AppState { pool }, &test_config())
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Body::empty(), None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Body::empty(), None).await
}

/// POST an `application/x-www-form-urlencoded` body built from `pairs`.
/// Keys may repeat, as multi-select inputs do.
pub async fn post_form(app: Router, uri: &str, pairs: &[(&str, &str)]) -> Response<Body> {
    let body = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    send(
        app,
        Method::POST,
        uri,
        Body::from(body),
        Some("application/x-www-form-urlencoded"),
    )
    .await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Body,
    content_type: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(CONTENT_TYPE, content_type);
    }
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a 303 redirect and return its `Location`.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response
        .headers()
        .get(LOCATION)
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// Trailing id of a `/venues/{id}` style location.
pub fn id_from_location(location: &str) -> i64 {
    location.rsplit('/').next().unwrap().parse().unwrap()
}

pub const MUSICAL_HOP: &[(&str, &str)] = &[
    ("name", "The Musical Hop"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("address", "1015 Folsom Street"),
    ("phone", "123-123-1234"),
    ("genres", "Jazz"),
    ("genres", "Reggae"),
    ("genres", "Folk"),
    ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
    ("seeking_talent", "y"),
    ("seeking_description", "We are on the lookout for a local artist."),
];

pub const GUNS_N_PETALS: &[(&str, &str)] = &[
    ("name", "Guns N Petals"),
    ("city", "San Francisco"),
    ("state", "CA"),
    ("phone", "326-123-5000"),
    ("genres", "Rock n Roll"),
    ("facebook_link", "https://www.facebook.com/GunsNPetals"),
];

/// Create a venue through the API and return its id.
pub async fn create_venue(pool: &PgPool, pairs: &[(&str, &str)]) -> i64 {
    let response = post_form(build_test_app(pool.clone()), "/venues/create", pairs).await;
    id_from_location(&redirect_location(&response))
}

/// Create an artist through the API and return its id.
pub async fn create_artist(pool: &PgPool, pairs: &[(&str, &str)]) -> i64 {
    let response = post_form(build_test_app(pool.clone()), "/artists/create", pairs).await;
    id_from_location(&redirect_location(&response))
}

/// Create a show through the API.
pub async fn create_show(pool: &PgPool, venue_id: i64, artist_id: i64, start_time: &str) {
    let venue_id = venue_id.to_string();
    let artist_id = artist_id.to_string();
    let response = post_form(
        build_test_app(pool.clone()),
        "/shows/create",
        &[
            ("venue_id", venue_id.as_str()),
            ("artist_id", artist_id.as_str()),
            ("start_time", start_time),
        ],
    )
    .await;
    assert_eq!(redirect_location(&response), "/shows");
}

/// Replace one field of a fixture, keeping the rest.
pub fn with<'a>(
    base: &[(&'a str, &'a str)],
    key: &'a str,
    value: &'a str,
) -> Vec<(&'a str, &'a str)> {
    let mut pairs: Vec<_> = base.iter().copied().filter(|(k, _)| *k != key).collect();
    pairs.push((key, value));
    pairs
}
