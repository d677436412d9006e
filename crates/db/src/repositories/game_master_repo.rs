//! Repository for the `game_masters` table.

use gamemaster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::game_master::{CreateGameMaster, GameMaster};

const COLUMNS: &str = "id, account_id, user_nickname, created_at";

/// Provides create/read operations for game master role rows.
pub struct GameMasterRepo;

impl GameMasterRepo {
    /// Grant the game master role.
    ///
    /// A second row for the same account violates `uq_game_masters_account_id`.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateGameMaster,
    ) -> Result<GameMaster, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO game_masters (account_id, user_nickname)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameMaster>(&query)
            .bind(input.account_id)
            .bind(&input.user_nickname)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameMaster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_masters WHERE id = $1");
        sqlx::query_as::<_, GameMaster>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn find_by_account(
        pool: &PgPool,
        account_id: DbId,
    ) -> Result<Option<GameMaster>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_masters WHERE account_id = $1");
        sqlx::query_as::<_, GameMaster>(&query)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Count game master rows for an account (0 or 1).
    pub async fn count_by_account(pool: &PgPool, account_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM game_masters WHERE account_id = $1")
                .bind(account_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
