//! Repository for the `players` table.

use gamemaster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::player::{CreatePlayer, Player};

const COLUMNS: &str = "id, account_id, player_nickname, created_at";

/// Provides create/read operations for player role rows.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Grant the player role.
    ///
    /// A second row for the same account violates `uq_players_account_id`.
    pub async fn create<'e, E>(executor: E, input: &CreatePlayer) -> Result<Player, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO players (account_id, player_nickname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(input.account_id)
            .bind(&input.player_nickname)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE account_id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Count player rows for an account (0 or 1).
    pub async fn count_by_account(pool: &PgPool, account_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM players WHERE account_id = $1")
                .bind(account_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
