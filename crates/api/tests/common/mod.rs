#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gamemaster_api::auth::password::hash_password;
use gamemaster_api::auth::session::SessionConfig;
use gamemaster_api::config::ServerConfig;
use gamemaster_api::flash::{decode_flash, FLASH_COOKIE};
use gamemaster_api::router::build_app_router;
use gamemaster_api::state::AppState;
use gamemaster_db::models::account::{Account, CreateAccount};
use gamemaster_db::models::game_master::{CreateGameMaster, GameMaster};
use gamemaster_db::models::player::{CreatePlayer, Player};
use gamemaster_db::repositories::{AccountRepo, GameMasterRepo, PlayerRepo};

pub const TEST_PASSWORD: &str = "test_password_123!";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        session: SessionConfig::default(),
    }
}

/// Build the full application router, with the production middleware stack,
/// on top of the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_config(pool, test_config())
}

pub fn build_test_app_with_config(pool: PgPool, config: ServerConfig) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert an account directly, with [`TEST_PASSWORD`] as its password.
pub async fn create_account(pool: &PgPool, username: &str) -> Account {
    let password_hash = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    AccountRepo::create(
        pool,
        &CreateAccount {
            username: username.to_string(),
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: format!("{username}@example.com"),
            password_hash,
        },
    )
    .await
    .expect("account creation should succeed")
}

pub async fn make_game_master(pool: &PgPool, account: &Account, nickname: &str) -> GameMaster {
    GameMasterRepo::create(
        pool,
        &CreateGameMaster {
            account_id: account.id,
            user_nickname: nickname.to_string(),
        },
    )
    .await
    .expect("game master creation should succeed")
}

pub async fn make_player(pool: &PgPool, account: &Account, nickname: &str) -> Player {
    PlayerRepo::create(
        pool,
        &CreatePlayer {
            account_id: account.id,
            player_nickname: nickname.to_string(),
        },
    )
    .await
    .expect("player creation should succeed")
}

/// Log in through the login form and return the `session=<token>` pair to
/// send back in a `Cookie` header.
pub async fn login_cookie(app: Router, username: &str, password: &str) -> String {
    let response = post_form(
        app,
        "/",
        &[("username", username), ("password", password)],
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FOUND, "login should redirect");
    cookie_pair(&response, "session").expect("login should set the session cookie")
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str, cookie: Option<&str>) -> Response {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// POST an urlencoded form.
pub async fn post_form(
    app: Router,
    uri: &str,
    fields: &[(&str, &str)],
    cookie: Option<&str>,
) -> Response {
    let body = serde_urlencoded::to_string(fields).unwrap();
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    app.oneshot(builder.body(Body::from(body)).unwrap())
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Response inspection
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response) -> Option<&str> {
    response
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
}

/// The `name=value` pair of a cookie set by the response, ignoring deletions.
pub fn cookie_pair(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .filter_map(|cookie| cookie.split(';').next())
        .find(|pair| {
            pair.split_once('=')
                .is_some_and(|(key, value)| key == name && !value.is_empty())
        })
        .map(str::to_string)
}

/// The flash message a redirect carries to the next page.
pub fn flash_message(response: &Response) -> Option<String> {
    let pair = cookie_pair(response, FLASH_COOKIE)?;
    let (_, value) = pair.split_once('=')?;
    decode_flash(value)
}

/// Assert a `302 Found` to `expected`.
pub fn assert_redirect(response: &Response, expected: &str) {
    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(response), Some(expected));
}
