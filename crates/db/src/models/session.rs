//! Login session model and DTOs.

use gamemaster_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A login session row from the `account_sessions` table.
#[derive(Debug, Clone, FromRow)]
pub struct AccountSession {
    pub id: DbId,
    pub account_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a login session.
pub struct CreateAccountSession {
    pub account_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}
