//! Role-based access control extractors.
//!
//! Provides composable extractors that wrap [`CurrentAccount`] and look up
//! the role row the handler needs. An account without the role is sent to
//! the settings page, where roles are taken on.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gamemaster_core::roles::{ROLE_GAME_MASTER, ROLE_PLAYER};
use gamemaster_db::models::game_master::GameMaster;
use gamemaster_db::models::player::Player;
use gamemaster_db::repositories::{GameMasterRepo, PlayerRepo};

use crate::error::AppError;
use crate::middleware::auth::CurrentAccount;
use crate::routes;
use crate::state::AppState;

pub const MSG_GAME_MASTER_REQUIRED: &str = "Become a game master before creating sessions";
pub const MSG_PLAYER_REQUIRED: &str = "Become a player before creating characters";

/// Requires the account to hold the game master role.
#[derive(Debug, Clone)]
pub struct RequireGameMaster {
    pub current: CurrentAccount,
    pub game_master: GameMaster,
}

impl FromRequestParts<AppState> for RequireGameMaster {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentAccount::from_request_parts(parts, state).await?;
        match GameMasterRepo::find_by_account(&state.pool, current.id()).await? {
            Some(game_master) => Ok(RequireGameMaster {
                current,
                game_master,
            }),
            None => Err(missing_role(&current, ROLE_GAME_MASTER, MSG_GAME_MASTER_REQUIRED)),
        }
    }
}

/// Requires the account to hold the player role.
#[derive(Debug, Clone)]
pub struct RequirePlayer {
    pub current: CurrentAccount,
    pub player: Player,
}

impl FromRequestParts<AppState> for RequirePlayer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let current = CurrentAccount::from_request_parts(parts, state).await?;
        match PlayerRepo::find_by_account(&state.pool, current.id()).await? {
            Some(player) => Ok(RequirePlayer { current, player }),
            None => Err(missing_role(&current, ROLE_PLAYER, MSG_PLAYER_REQUIRED)),
        }
    }
}

fn missing_role(current: &CurrentAccount, role: &str, message: &str) -> AppError {
    tracing::info!(account_id = current.id(), role, "Account lacks required role");
    AppError::Redirect {
        location: routes::SETTINGS,
        flash: Some(message.to_string()),
    }
}
