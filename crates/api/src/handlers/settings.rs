//! Handlers for `/settings`, where an account takes on roles.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use gamemaster_core::roles::{ROLE_GAME_MASTER, ROLE_PLAYER};
use gamemaster_db::models::game_master::CreateGameMaster;
use gamemaster_db::models::player::CreatePlayer;
use gamemaster_db::repositories::{AccountRepo, GameMasterRepo, PlayerRepo};

use crate::error::AppResult;
use crate::flash::Flash;
use crate::forms::{flash_message, SettingsForm};
use crate::middleware::auth::CurrentAccount;
use crate::pages::{Page, SettingsPage};
use crate::response::{redirect, redirect_with_flash};
use crate::routes;
use crate::state::AppState;

/// GET /settings
pub async fn settings_page(
    State(state): State<AppState>,
    current: CurrentAccount,
    flash: Flash,
) -> AppResult<Page<SettingsPage>> {
    let roles = AccountRepo::roles(&state.pool, current.id()).await?;
    Ok(Page::new(SettingsPage {
        flash: flash.clone().into_message(),
        game_master: roles.game_master,
        player: roles.player,
    })
    .consuming(&flash))
}

/// POST /settings
///
/// Creates the requested role rows in one transaction. Asking for a role the
/// account already holds hits the one-per-account unique constraint, surfaces
/// as 409 and leaves both roles untouched.
pub async fn update_settings(
    State(state): State<AppState>,
    current: CurrentAccount,
    Form(input): Form<SettingsForm>,
) -> AppResult<Response> {
    let request = match input.parse() {
        Ok(request) => request,
        Err(err) => {
            return Ok(redirect_with_flash(
                routes::SETTINGS,
                Some(&flash_message(err)),
            ));
        }
    };

    let mut tx = state.pool.begin().await?;

    let game_master = if request.game_master {
        let created = GameMasterRepo::create(
            &mut *tx,
            &CreateGameMaster {
                account_id: current.id(),
                user_nickname: request.nickname.clone(),
            },
        )
        .await?;
        Some(created)
    } else {
        None
    };

    let player = if request.player {
        let created = PlayerRepo::create(
            &mut *tx,
            &CreatePlayer {
                account_id: current.id(),
                player_nickname: request.nickname,
            },
        )
        .await?;
        Some(created)
    } else {
        None
    };

    tx.commit().await?;

    if let Some(game_master) = game_master {
        tracing::info!(
            account_id = current.id(),
            game_master_id = game_master.id,
            role = ROLE_GAME_MASTER,
            "Role granted"
        );
    }
    if let Some(player) = player {
        tracing::info!(
            account_id = current.id(),
            player_id = player.id,
            role = ROLE_PLAYER,
            "Role granted"
        );
    }

    Ok(redirect(routes::DASHBOARD, &[]))
}
