//! Player role model.

use gamemaster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `players` table. At most one per account.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    pub account_id: DbId,
    pub player_nickname: String,
    pub created_at: Timestamp,
}

/// DTO for granting the player role.
#[derive(Debug)]
pub struct CreatePlayer {
    pub account_id: DbId,
    pub player_nickname: String,
}
