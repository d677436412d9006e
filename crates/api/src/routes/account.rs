//! Route definitions for the signed-in account's own pages.

use axum::routing::get;
use axum::Router;

use crate::handlers::{dashboard, settings};
use crate::state::AppState;

/// ```text
/// GET  /dashboard  -> dashboard
/// GET  /settings   -> settings_page
/// POST /settings   -> update_settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(super::DASHBOARD, get(dashboard::dashboard))
        .route(
            super::SETTINGS,
            get(settings::settings_page).post(settings::update_settings),
        )
}
