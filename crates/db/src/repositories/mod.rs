//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor, where the method is
//! used inside a transaction) as the first argument.

pub mod account_repo;
pub mod character_sheet_repo;
pub mod game_master_repo;
pub mod game_session_repo;
pub mod player_character_repo;
pub mod player_repo;
pub mod session_repo;

pub use account_repo::AccountRepo;
pub use character_sheet_repo::CharacterSheetRepo;
pub use game_master_repo::GameMasterRepo;
pub use game_session_repo::GameSessionRepo;
pub use player_character_repo::PlayerCharacterRepo;
pub use player_repo::PlayerRepo;
pub use session_repo::SessionRepo;
