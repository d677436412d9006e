//! Route definitions for login, registration and logout.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{auth, register};
use crate::state::AppState;

/// ```text
/// GET  /           -> login_page
/// POST /           -> login
/// GET  /register   -> register_page
/// POST /register   -> register
/// GET  /start      -> start_page
/// POST /logout     -> logout (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(super::INDEX, get(auth::login_page).post(auth::login))
        .route(
            super::REGISTER,
            get(register::register_page).post(register::register),
        )
        .route(super::START, get(register::start_page))
        .route(super::LOGOUT, post(auth::logout))
}
