pub mod auth;
pub mod dashboard;
pub mod game_session;
pub mod player_character;
pub mod register;
pub mod settings;
