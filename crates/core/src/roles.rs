//! Well-known role names.
//!
//! A role is held when the matching role row (`game_masters` / `players`)
//! exists for the account. The names are only used for display and logging.

pub const ROLE_GAME_MASTER: &str = "game_master";
pub const ROLE_PLAYER: &str = "player";
