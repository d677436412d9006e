//! Handlers for game sessions: creation, the public listing and sign-ups.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Form;
use gamemaster_core::character::CharacterStatus;
use gamemaster_core::forms::MSG_FILL_ALL_FIELDS;
use gamemaster_core::types::DbId;
use gamemaster_db::models::game_session::{CreateGameSession, JoinOutcome};
use gamemaster_db::repositories::{GameSessionRepo, PlayerCharacterRepo, PlayerRepo};

use crate::error::AppResult;
use crate::flash::Flash;
use crate::forms::{flash_message, AddSessionForm, JoinSessionForm};
use crate::middleware::auth::CurrentAccount;
use crate::middleware::rbac::{RequireGameMaster, RequirePlayer};
use crate::pages::{AddSessionPage, Page, SessionsPage};
use crate::response::redirect_with_flash;
use crate::routes;
use crate::state::AppState;

pub const MSG_SESSION_CREATED: &str = "Session created";
pub const MSG_JOINED: &str = "Character signed up for the session";
pub const MSG_NOT_YOUR_CHARACTER: &str = "Choose one of your own characters";
pub const MSG_CHARACTER_DEAD: &str = "Dead characters cannot join sessions";

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

/// GET /add_session
pub async fn add_session_page(_gm: RequireGameMaster, flash: Flash) -> Page<AddSessionPage> {
    Page::new(AddSessionPage::new(flash.clone().into_message())).consuming(&flash)
}

/// POST /add_session
///
/// Any missing or malformed field redirects back with the generic
/// "fill in all fields" message and creates nothing.
pub async fn add_session(
    State(state): State<AppState>,
    gm: RequireGameMaster,
    Form(input): Form<AddSessionForm>,
) -> AppResult<Response> {
    let new_session = match input.parse() {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::debug!(
                game_master_id = gm.game_master.id,
                reason = %flash_message(err),
                "Session form rejected"
            );
            return Ok(redirect_with_flash(
                routes::ADD_SESSION,
                Some(MSG_FILL_ALL_FIELDS),
            ));
        }
    };

    let session = GameSessionRepo::create(
        &state.pool,
        &CreateGameSession {
            game_master_id: gm.game_master.id,
            title: new_session.title,
            slots: new_session.slots,
            session_date: new_session.session_date,
            is_public: new_session.is_public,
            is_open: new_session.is_open,
        },
    )
    .await?;

    tracing::info!(
        account_id = gm.current.id(),
        game_master_id = gm.game_master.id,
        game_session_id = session.id,
        "Game session created"
    );

    Ok(redirect_with_flash(
        routes::DASHBOARD,
        Some(MSG_SESSION_CREATED),
    ))
}

// ---------------------------------------------------------------------------
// Listing and sign-ups
// ---------------------------------------------------------------------------

/// GET /sessions
///
/// Public sessions, newest first. Players also get their characters so they
/// can sign one up from the list.
pub async fn list_sessions(
    State(state): State<AppState>,
    current: CurrentAccount,
    flash: Flash,
) -> AppResult<Page<SessionsPage>> {
    let sessions = GameSessionRepo::list_public(&state.pool).await?;
    let characters = match PlayerRepo::find_by_account(&state.pool, current.id()).await? {
        Some(player) => PlayerCharacterRepo::list_by_player(&state.pool, player.id)
            .await?
            .into_iter()
            .filter(|c| c.character_status == CharacterStatus::Alive)
            .collect(),
        None => Vec::new(),
    };

    Ok(Page::new(SessionsPage {
        flash: flash.clone().into_message(),
        sessions,
        characters,
    })
    .consuming(&flash))
}

/// POST /sessions/{id}/join
///
/// Signs one of the player's living characters up for an open session with
/// a free slot.
pub async fn join_session(
    State(state): State<AppState>,
    rp: RequirePlayer,
    Path(game_session_id): Path<DbId>,
    Form(input): Form<JoinSessionForm>,
) -> AppResult<Response> {
    let character_id = match input.parse() {
        Ok(id) => id,
        Err(err) => {
            return Ok(redirect_with_flash(
                routes::SESSIONS,
                Some(&flash_message(err)),
            ))
        }
    };

    let character = PlayerCharacterRepo::find_by_id(&state.pool, character_id)
        .await?
        .filter(|c| c.player_id == rp.player.id);
    let Some(character) = character else {
        return Ok(redirect_with_flash(
            routes::SESSIONS,
            Some(MSG_NOT_YOUR_CHARACTER),
        ));
    };
    if character.character_status != CharacterStatus::Alive {
        return Ok(redirect_with_flash(routes::SESSIONS, Some(MSG_CHARACTER_DEAD)));
    }

    let outcome = GameSessionRepo::join(&state.pool, game_session_id, character.id).await?;
    tracing::info!(
        player_id = rp.player.id,
        player_character_id = character.id,
        game_session_id,
        ?outcome,
        "Session sign-up"
    );

    match join_refusal(outcome) {
        None => Ok(redirect_with_flash(routes::DASHBOARD, Some(MSG_JOINED))),
        Some(message) => Ok(redirect_with_flash(routes::SESSIONS, Some(message))),
    }
}

/// The flash text for a refused sign-up, `None` when the character joined.
fn join_refusal(outcome: JoinOutcome) -> Option<&'static str> {
    match outcome {
        JoinOutcome::Joined => None,
        JoinOutcome::AlreadyJoined => Some("This character already joined the session"),
        JoinOutcome::SessionNotFound => Some("Session not found"),
        JoinOutcome::Closed => Some("This session is closed"),
        JoinOutcome::Full => Some("This session is full"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_a_successful_join_has_no_refusal() {
        assert_eq!(join_refusal(JoinOutcome::Joined), None);
        for outcome in [
            JoinOutcome::AlreadyJoined,
            JoinOutcome::SessionNotFound,
            JoinOutcome::Closed,
            JoinOutcome::Full,
        ] {
            assert!(join_refusal(outcome).is_some(), "{outcome:?}");
        }
    }
}
