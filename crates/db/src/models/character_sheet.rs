//! Character sheet model.

use gamemaster_core::character::SheetValues;
use gamemaster_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `character_sheets` table (one per character).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CharacterSheet {
    pub id: DbId,
    pub player_character_id: DbId,
    pub name: String,
    pub strength: i32,
    pub condition: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub wisdom: i32,
    pub charisma: i32,
    pub reputation: i32,
    pub wealth: i32,
    pub life_points: i32,
    pub age: i32,
    pub created_at: Timestamp,
}

impl CharacterSheet {
    pub fn values(&self) -> SheetValues {
        SheetValues {
            strength: self.strength,
            condition: self.condition,
            dexterity: self.dexterity,
            intelligence: self.intelligence,
            wisdom: self.wisdom,
            charisma: self.charisma,
            reputation: self.reputation,
            wealth: self.wealth,
            life_points: self.life_points,
            age: self.age,
        }
    }
}

/// DTO for creating a character sheet.
#[derive(Debug)]
pub struct CreateCharacterSheet {
    pub player_character_id: DbId,
    pub name: String,
    pub values: SheetValues,
}
