//! Handler for `/dashboard`.

use axum::extract::State;
use gamemaster_db::models::account::AccountProfile;
use gamemaster_db::repositories::{AccountRepo, GameSessionRepo, PlayerCharacterRepo};

use crate::error::AppResult;
use crate::flash::Flash;
use crate::middleware::auth::CurrentAccount;
use crate::pages::{DashboardPage, Page};
use crate::state::AppState;

/// GET /dashboard
///
/// Read-only overview of the account, its roles, the game master's sessions
/// and the player's characters.
pub async fn dashboard(
    State(state): State<AppState>,
    current: CurrentAccount,
    flash: Flash,
) -> AppResult<Page<DashboardPage>> {
    let roles = AccountRepo::roles(&state.pool, current.id()).await?;

    let sessions = match &roles.game_master {
        Some(gm) => GameSessionRepo::list_by_game_master(&state.pool, gm.id).await?,
        None => Vec::new(),
    };
    let characters = match &roles.player {
        Some(player) => PlayerCharacterRepo::list_by_player(&state.pool, player.id).await?,
        None => Vec::new(),
    };

    Ok(Page::new(DashboardPage {
        flash: flash.clone().into_message(),
        profile: AccountProfile::from(&current.account),
        game_master: roles.game_master,
        player: roles.player,
        sessions,
        characters,
    })
    .consuming(&flash))
}
