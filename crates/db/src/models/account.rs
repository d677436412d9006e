//! Account entity model and DTOs.

use gamemaster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use super::game_master::GameMaster;
use super::player::Player;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- never render this struct directly.
/// Use [`AccountProfile`] for anything shown to users.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// Account fields safe to display.
#[derive(Debug, Clone, Serialize)]
pub struct AccountProfile {
    pub id: DbId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            first_name: account.first_name.clone(),
            last_name: account.last_name.clone(),
            email: account.email.clone(),
            created_at: account.created_at,
        }
    }
}

/// DTO for creating a new account. The password must already be hashed.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
}

/// Role rows held by an account. A role is held when its row exists.
#[derive(Debug, Clone, Default)]
pub struct AccountRoles {
    pub game_master: Option<GameMaster>,
    pub player: Option<Player>,
}

impl AccountRoles {
    pub fn is_game_master(&self) -> bool {
        self.game_master.is_some()
    }

    pub fn is_player(&self) -> bool {
        self.player.is_some()
    }
}
