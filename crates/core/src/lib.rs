//! Domain types and pure validation shared by the database and HTTP layers.

pub mod character;
pub mod error;
pub mod forms;
pub mod game_session;
pub mod roles;
pub mod types;
