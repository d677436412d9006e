//! Game session entity model and DTOs.

use gamemaster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `game_sessions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSession {
    pub id: DbId,
    pub game_master_id: DbId,
    pub title: String,
    /// Player capacity, always within 1..=6.
    pub slots: i32,
    pub session_date: Timestamp,
    pub is_public: bool,
    pub is_open: bool,
    pub created_at: Timestamp,
}

/// A public session joined with its game master's nickname and the number
/// of characters already signed up.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSessionListing {
    pub id: DbId,
    pub game_master_id: DbId,
    pub game_master_nickname: String,
    pub title: String,
    pub slots: i32,
    pub session_date: Timestamp,
    pub is_open: bool,
    pub taken_slots: i64,
    pub created_at: Timestamp,
}

/// DTO for creating a game session. Callers validate `slots` first.
#[derive(Debug)]
pub struct CreateGameSession {
    pub game_master_id: DbId,
    pub title: String,
    pub slots: i32,
    pub session_date: Timestamp,
    pub is_public: bool,
    pub is_open: bool,
}

/// Result of trying to sign a character up for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
    SessionNotFound,
    Closed,
    Full,
}
