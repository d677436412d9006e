use axum::routing::get;
use axum::Router;

use crate::handlers::player_character;
use crate::state::AppState;

/// ```text
/// GET  /add_character  -> add_character_page
/// POST /add_character  -> add_character
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        super::ADD_CHARACTER,
        get(player_character::add_character_page).post(player_character::add_character),
    )
}
