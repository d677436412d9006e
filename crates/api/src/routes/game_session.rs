use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game_session;
use crate::state::AppState;

/// ```text
/// GET  /add_session          -> add_session_page
/// POST /add_session          -> add_session
/// GET  /sessions             -> list_sessions
/// POST /sessions/{id}/join   -> join_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            super::ADD_SESSION,
            get(game_session::add_session_page).post(game_session::add_session),
        )
        .route(super::SESSIONS, get(game_session::list_sessions))
        .route(super::JOIN_SESSION, post(game_session::join_session))
}
