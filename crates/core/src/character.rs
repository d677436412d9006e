//! Player character status and character sheet bounds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Status
-------------------------------------------------------------------------- */

/// Life status of a player character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CharacterStatus {
    #[default]
    Alive,
    Dead,
}

impl CharacterStatus {
    /// The value stored in `player_characters.character_status`.
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterStatus::Alive => "Alive",
            CharacterStatus::Dead => "Dead",
        }
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CharacterStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Alive" => Ok(CharacterStatus::Alive),
            "Dead" => Ok(CharacterStatus::Dead),
            other => Err(CoreError::Validation(format!(
                "unknown character status '{other}'"
            ))),
        }
    }
}

impl TryFrom<String> for CharacterStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/* --------------------------------------------------------------------------
Sheet bounds
-------------------------------------------------------------------------- */

pub const MIN_ATTRIBUTE: i32 = 1;
pub const MAX_ATTRIBUTE: i32 = 30;
pub const DEFAULT_ATTRIBUTE: i32 = 8;

pub const MIN_LIFE_POINTS: i32 = 0;
pub const MAX_LIFE_POINTS: i32 = 100;
pub const DEFAULT_LIFE_POINTS: i32 = 10;

pub const MIN_AGE: i32 = 18;
pub const MAX_AGE: i32 = 999;
pub const DEFAULT_AGE: i32 = 20;

/// Numeric values of a character sheet, checked before any write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetValues {
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
}

impl Default for SheetValues {
    fn default() -> Self {
        Self {
            strength: DEFAULT_ATTRIBUTE,
            condition: DEFAULT_ATTRIBUTE,
            dexterity: DEFAULT_ATTRIBUTE,
            intelligence: DEFAULT_ATTRIBUTE,
            wisdom: DEFAULT_ATTRIBUTE,
            charisma: DEFAULT_ATTRIBUTE,
            reputation: 0,
            wealth: 0,
            life_points: DEFAULT_LIFE_POINTS,
            age: DEFAULT_AGE,
        }
    }
}

impl SheetValues {
    /// Check every bound, reporting the first offending field.
    ///
    /// Reputation is unbounded; wealth only has to be non-negative.
    pub fn validate(&self) -> Result<(), CoreError> {
        let attributes = [
            ("strength", self.strength),
            ("condition", self.condition),
            ("dexterity", self.dexterity),
            ("intelligence", self.intelligence),
            ("wisdom", self.wisdom),
            ("charisma", self.charisma),
        ];
        for (name, value) in attributes {
            check_range(name, value, MIN_ATTRIBUTE, MAX_ATTRIBUTE)?;
        }

        if self.wealth < 0 {
            return Err(CoreError::Validation(format!(
                "wealth must not be negative, got {}",
                self.wealth
            )));
        }
        check_range("life_points", self.life_points, MIN_LIFE_POINTS, MAX_LIFE_POINTS)?;
        check_range("age", self.age, MIN_AGE, MAX_AGE)?;
        Ok(())
    }
}

fn check_range(name: &str, value: i32, min: i32, max: i32) -> Result<(), CoreError> {
    if !(min..=max).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{name} must be between {min} and {max}, got {value}"
        )));
    }
    Ok(())
}
