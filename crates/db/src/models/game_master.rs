//! Game master role model.

use gamemaster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `game_masters` table. At most one per account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameMaster {
    pub id: DbId,
    pub account_id: DbId,
    pub user_nickname: String,
    pub created_at: Timestamp,
}

/// DTO for granting the game master role.
#[derive(Debug)]
pub struct CreateGameMaster {
    pub account_id: DbId,
    pub user_nickname: String,
}
