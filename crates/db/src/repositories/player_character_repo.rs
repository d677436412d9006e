//! Repository for the `player_characters` table.

use gamemaster_core::character::SheetValues;
use gamemaster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::character_sheet::{CharacterSheet, CreateCharacterSheet};
use crate::models::player_character::{CreatePlayerCharacter, PlayerCharacter};
use crate::repositories::CharacterSheetRepo;

const COLUMNS: &str = "id, player_id, name, description, character_status, created_at";

/// Provides create/list operations for player characters.
pub struct PlayerCharacterRepo;

impl PlayerCharacterRepo {
    /// Insert a character row on its own.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreatePlayerCharacter,
    ) -> Result<PlayerCharacter, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO player_characters (player_id, name, description, character_status)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlayerCharacter>(&query)
            .bind(input.player_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.character_status.as_str())
            .fetch_one(executor)
            .await
    }

    /// Create a character together with its sheet in one transaction.
    ///
    /// The sheet takes the character's name.
    pub async fn create_with_sheet(
        pool: &PgPool,
        input: &CreatePlayerCharacter,
        values: SheetValues,
    ) -> Result<(PlayerCharacter, CharacterSheet), sqlx::Error> {
        let mut tx = pool.begin().await?;

        let character = Self::create(&mut *tx, input).await?;
        let sheet = CharacterSheetRepo::create(
            &mut *tx,
            &CreateCharacterSheet {
                player_character_id: character.id,
                name: character.name.clone(),
                values,
            },
        )
        .await?;

        tx.commit().await?;
        Ok((character, sheet))
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<PlayerCharacter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM player_characters WHERE id = $1");
        sqlx::query_as::<_, PlayerCharacter>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Characters owned by a player, newest first.
    pub async fn list_by_player(
        pool: &PgPool,
        player_id: DbId,
    ) -> Result<Vec<PlayerCharacter>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM player_characters
             WHERE player_id = $1
             ORDER BY created_at DESC, player_id ASC"
        );
        sqlx::query_as::<_, PlayerCharacter>(&query)
            .bind(player_id)
            .fetch_all(pool)
            .await
    }

    /// Characters signed up for a session, newest first, tie-broken by owner.
    pub async fn list_by_session(
        pool: &PgPool,
        game_session_id: DbId,
    ) -> Result<Vec<PlayerCharacter>, sqlx::Error> {
        sqlx::query_as::<_, PlayerCharacter>(
            "SELECT pc.id, pc.player_id, pc.name, pc.description, pc.character_status, pc.created_at
             FROM player_characters pc
             JOIN player_character_sessions pcs ON pcs.player_character_id = pc.id
             WHERE pcs.game_session_id = $1
             ORDER BY pc.created_at DESC, pc.player_id ASC",
        )
        .bind(game_session_id)
        .fetch_all(pool)
        .await
    }
}
