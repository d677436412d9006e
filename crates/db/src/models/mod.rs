//! Row models and create DTOs, one module per table.

pub mod account;
pub mod character_sheet;
pub mod game_master;
pub mod game_session;
pub mod player;
pub mod player_character;
pub mod session;
