//! Repository for the `character_sheets` table.

use gamemaster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::character_sheet::{CharacterSheet, CreateCharacterSheet};

const COLUMNS: &str = "id, player_character_id, name, strength, condition, dexterity, \
                       intelligence, wisdom, charisma, reputation, wealth, life_points, age, \
                       created_at";

/// Provides create/read operations for character sheets.
pub struct CharacterSheetRepo;

impl CharacterSheetRepo {
    /// Insert a sheet. Bounds are checked by the caller and again by the
    /// table's CHECK constraints.
    pub async fn create<'e, E>(
        executor: E,
        input: &CreateCharacterSheet,
    ) -> Result<CharacterSheet, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let v = &input.values;
        let query = format!(
            "INSERT INTO character_sheets
                (player_character_id, name, strength, condition, dexterity, intelligence,
                 wisdom, charisma, reputation, wealth, life_points, age)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CharacterSheet>(&query)
            .bind(input.player_character_id)
            .bind(&input.name)
            .bind(v.strength)
            .bind(v.condition)
            .bind(v.dexterity)
            .bind(v.intelligence)
            .bind(v.wisdom)
            .bind(v.charisma)
            .bind(v.reputation)
            .bind(v.wealth)
            .bind(v.life_points)
            .bind(v.age)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_character(
        pool: &PgPool,
        player_character_id: DbId,
    ) -> Result<Option<CharacterSheet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character_sheets WHERE player_character_id = $1");
        sqlx::query_as::<_, CharacterSheet>(&query)
            .bind(player_character_id)
            .fetch_optional(pool)
            .await
    }
}
