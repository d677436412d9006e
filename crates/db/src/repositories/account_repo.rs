//! Repository for the `accounts` table.

use gamemaster_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::{Account, AccountRoles, CreateAccount};
use crate::repositories::{GameMasterRepo, PlayerRepo, SessionRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, username, first_name, last_name, email, password_hash, is_active, created_at";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (username, first_name, last_name, email, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.username)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find an account by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE username = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Whether any account already uses `username` or `email`.
    pub async fn username_or_email_taken(
        pool: &PgPool,
        username: &str,
        email: &str,
    ) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (SELECT 1 FROM accounts WHERE username = $1 OR email = $2)",
        )
        .bind(username)
        .bind(email)
        .fetch_one(pool)
        .await?;
        Ok(taken)
    }

    /// Count accounts with the given username. Used by tests and diagnostics.
    pub async fn count_by_username(pool: &PgPool, username: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM accounts WHERE username = $1")
            .bind(username)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// List all accounts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts ORDER BY created_at DESC, id ASC");
        sqlx::query_as::<_, Account>(&query).fetch_all(pool).await
    }

    /// Block an account by setting `is_active = false` and revoke its login
    /// sessions in the same transaction.
    ///
    /// Returns `true` if the row was updated.
    pub async fn deactivate(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let result =
            sqlx::query("UPDATE accounts SET is_active = false WHERE id = $1 AND is_active = true")
                .bind(id)
                .execute(&mut *tx)
                .await?;
        if result.rows_affected() == 0 {
            return Ok(false);
        }
        let revoked = SessionRepo::revoke_all_for_account(&mut *tx, id).await?;

        tx.commit().await?;
        tracing::info!(account_id = id, revoked_sessions = revoked, "Account deactivated");
        Ok(true)
    }

    /// Delete an account. Role rows, sessions, characters and sheets go with it.
    ///
    /// Returns `true` if the row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load the role rows held by an account.
    pub async fn roles(pool: &PgPool, id: DbId) -> Result<AccountRoles, sqlx::Error> {
        let game_master = GameMasterRepo::find_by_account(pool, id).await?;
        let player = PlayerRepo::find_by_account(pool, id).await?;
        Ok(AccountRoles {
            game_master,
            player,
        })
    }
}
