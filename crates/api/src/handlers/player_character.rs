//! Handlers for `/add_character`.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use gamemaster_db::models::player_character::CreatePlayerCharacter;
use gamemaster_db::repositories::PlayerCharacterRepo;

use crate::error::AppResult;
use crate::flash::Flash;
use crate::forms::{flash_message, AddCharacterForm};
use crate::middleware::rbac::RequirePlayer;
use crate::pages::{AddCharacterPage, Page};
use crate::response::redirect_with_flash;
use crate::routes;
use crate::state::AppState;

/// GET /add_character
pub async fn add_character_page(_player: RequirePlayer, flash: Flash) -> Page<AddCharacterPage> {
    Page::new(AddCharacterPage::new(flash.clone().into_message())).consuming(&flash)
}

/// POST /add_character
///
/// Creates the character and its sheet together. The first validation
/// problem is flashed back to the form.
pub async fn add_character(
    State(state): State<AppState>,
    rp: RequirePlayer,
    Form(input): Form<AddCharacterForm>,
) -> AppResult<Response> {
    let new_character = match input.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            return Ok(redirect_with_flash(
                routes::ADD_CHARACTER,
                Some(&flash_message(err)),
            ));
        }
    };

    let (character, sheet) = PlayerCharacterRepo::create_with_sheet(
        &state.pool,
        &CreatePlayerCharacter {
            player_id: rp.player.id,
            name: new_character.name,
            description: new_character.description,
            character_status: new_character.status,
        },
        new_character.sheet,
    )
    .await?;

    tracing::info!(
        player_id = rp.player.id,
        player_character_id = character.id,
        character_sheet_id = sheet.id,
        "Character created"
    );

    let message = format!("Character {} created", character.name);
    Ok(redirect_with_flash(routes::DASHBOARD, Some(&message)))
}
