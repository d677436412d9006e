//! Player character entity model and DTOs.

use gamemaster_core::character::CharacterStatus;
use gamemaster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `player_characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlayerCharacter {
    pub id: DbId,
    pub player_id: DbId,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub character_status: CharacterStatus,
    pub created_at: Timestamp,
}

/// DTO for creating a character.
#[derive(Debug)]
pub struct CreatePlayerCharacter {
    pub player_id: DbId,
    pub name: String,
    pub description: String,
    pub character_status: CharacterStatus,
}
