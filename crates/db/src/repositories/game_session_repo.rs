//! Repository for the `game_sessions` table and its character sign-ups.

use gamemaster_core::game_session::has_free_slot;
use gamemaster_core::types::DbId;
use sqlx::PgPool;

use crate::models::game_session::{
    CreateGameSession, GameSession, GameSessionListing, JoinOutcome,
};

const COLUMNS: &str =
    "id, game_master_id, title, slots, session_date, is_public, is_open, created_at";

/// Provides create/list operations for game sessions.
pub struct GameSessionRepo;

impl GameSessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateGameSession,
    ) -> Result<GameSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_sessions (game_master_id, title, slots, session_date, is_public, is_open)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(input.game_master_id)
            .bind(&input.title)
            .bind(input.slots)
            .bind(input.session_date)
            .bind(input.is_public)
            .bind(input.is_open)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_sessions WHERE id = $1");
        sqlx::query_as::<_, GameSession>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Sessions owned by a game master, newest first.
    pub async fn list_by_game_master(
        pool: &PgPool,
        game_master_id: DbId,
    ) -> Result<Vec<GameSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM game_sessions
             WHERE game_master_id = $1
             ORDER BY created_at DESC, game_master_id ASC"
        );
        sqlx::query_as::<_, GameSession>(&query)
            .bind(game_master_id)
            .fetch_all(pool)
            .await
    }

    /// Public sessions with owner nickname and sign-up count, newest first,
    /// tie-broken by owner.
    pub async fn list_public(pool: &PgPool) -> Result<Vec<GameSessionListing>, sqlx::Error> {
        sqlx::query_as::<_, GameSessionListing>(
            "SELECT s.id, s.game_master_id, gm.user_nickname AS game_master_nickname,
                    s.title, s.slots, s.session_date, s.is_open,
                    (SELECT COUNT(*) FROM player_character_sessions pcs
                      WHERE pcs.game_session_id = s.id) AS taken_slots,
                    s.created_at
             FROM game_sessions s
             JOIN game_masters gm ON gm.id = s.game_master_id
             WHERE s.is_public = true
             ORDER BY s.created_at DESC, s.game_master_id ASC",
        )
        .fetch_all(pool)
        .await
    }

    /// Number of characters signed up for a session.
    pub async fn count_characters(pool: &PgPool, game_session_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM player_character_sessions WHERE game_session_id = $1",
        )
        .bind(game_session_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }

    /// Sign a character up for a session if it is open and has a free slot.
    ///
    /// The session row is locked for the duration of the check so two
    /// concurrent sign-ups cannot both take the last slot.
    pub async fn join(
        pool: &PgPool,
        game_session_id: DbId,
        player_character_id: DbId,
    ) -> Result<JoinOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("SELECT {COLUMNS} FROM game_sessions WHERE id = $1 FOR UPDATE");
        let Some(session) = sqlx::query_as::<_, GameSession>(&query)
            .bind(game_session_id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(JoinOutcome::SessionNotFound);
        };

        if !session.is_open {
            return Ok(JoinOutcome::Closed);
        }

        let (already,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM player_character_sessions
                            WHERE game_session_id = $1 AND player_character_id = $2)",
        )
        .bind(game_session_id)
        .bind(player_character_id)
        .fetch_one(&mut *tx)
        .await?;
        if already {
            return Ok(JoinOutcome::AlreadyJoined);
        }

        let (taken,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM player_character_sessions WHERE game_session_id = $1",
        )
        .bind(game_session_id)
        .fetch_one(&mut *tx)
        .await?;
        if !has_free_slot(session.slots, taken) {
            return Ok(JoinOutcome::Full);
        }

        sqlx::query(
            "INSERT INTO player_character_sessions (player_character_id, game_session_id)
             VALUES ($1, $2)",
        )
        .bind(player_character_id)
        .bind(game_session_id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        tracing::debug!(game_session_id, player_character_id, "Character joined session");
        Ok(JoinOutcome::Joined)
    }
}
