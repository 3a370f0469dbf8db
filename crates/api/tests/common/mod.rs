#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use pokevote_core::visitor::CookieSettings;
use pokevote_db::models::pokemon::CreatePokemon;
use pokevote_db::repositories::PokemonRepo;
use sqlx::PgPool;
use tower::ServiceExt;

use pokevote_api::config::ServerConfig;
use pokevote_api::router::build_app_router;
use pokevote_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout, and the default visitor cookie.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        visitor_cookie: CookieSettings::default(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Insert a small fixed catalog: ids 1, 4, 7, 25, 39.
pub async fn seed_catalog(pool: &PgPool) {
    let entries: Vec<CreatePokemon> = [
        (1, "Bulbasaur", "grass"),
        (4, "Charmander", "fire"),
        (7, "Squirtle", "water"),
        (25, "Pikachu", "electric"),
        (39, "Jigglypuff", "normal"),
    ]
    .into_iter()
    .map(|(id, name, type_1)| CreatePokemon {
        id,
        name: name.to_string(),
        type_1: type_1.to_string(),
        type_2: None,
        hp: 40,
        attack: 50,
        defense: 45,
        special_attack: 55,
        special_defense: 50,
        speed: 60,
        sprite_front: Some(format!("https://img.example/{id}.png")),
        artwork: None,
    })
    .collect();

    PokemonRepo::insert_many(pool, &entries).await.unwrap();
}

async fn send(app: Router, method: Method, uri: &str, cookie: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie)).await
}

pub async fn post(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn post_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(cookie)).await
}

/// Cookie for a fixed visitor token, as a browser would send it.
pub fn visitor_cookie(token: &str) -> String {
    format!("visitor_id={token}")
}

/// The `name=value` pair of the first `Set-Cookie` header, if any.
pub fn issued_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get(SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|pair| pair.trim().to_string())
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
