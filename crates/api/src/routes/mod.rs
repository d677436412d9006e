pub mod account;
pub mod auth;
pub mod game_session;
pub mod health;
pub mod player_character;

use axum::Router;

use crate::state::AppState;

pub const INDEX: &str = "/";
pub const REGISTER: &str = "/register";
pub const START: &str = "/start";
pub const LOGOUT: &str = "/logout";
pub const DASHBOARD: &str = "/dashboard";
pub const SETTINGS: &str = "/settings";
pub const ADD_SESSION: &str = "/add_session";
pub const SESSIONS: &str = "/sessions";
pub const JOIN_SESSION: &str = "/sessions/{id}/join";
pub const ADD_CHARACTER: &str = "/add_character";

/// Build the page route tree.
///
/// ```text
/// /                       login form, login (public)
/// /register               registration form, register (public)
/// /start                  post-registration landing page (public)
/// /logout                 logout (requires auth)
///
/// /dashboard              account overview (requires auth)
/// /settings               role settings (requires auth)
///
/// /add_session            session form, create (requires game master)
/// /sessions               public session list (requires auth)
/// /sessions/{id}/join     sign a character up (requires player)
///
/// /add_character          character form, create (requires player)
/// ```
pub fn page_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(account::router())
        .merge(game_session::router())
        .merge(player_character::router())
}
