//! HTML pages rendered with askama.
//!
//! Templates live in `crates/api/templates/`. Every page extends `base.html`,
//! which shows the pending flash message, so each page struct carries a
//! `flash` field.

use askama::Template;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderValue;
use axum::response::{Html, IntoResponse, Response};
use gamemaster_core::character::{
    SheetValues, MAX_AGE, MAX_ATTRIBUTE, MAX_LIFE_POINTS, MIN_AGE, MIN_ATTRIBUTE, MIN_LIFE_POINTS,
};
use gamemaster_core::game_session::{MAX_SLOTS, MIN_SLOTS};
use gamemaster_db::models::account::AccountProfile;
use gamemaster_db::models::game_master::GameMaster;
use gamemaster_db::models::game_session::{GameSession, GameSessionListing};
use gamemaster_db::models::player::Player;
use gamemaster_db::models::player_character::PlayerCharacter;

use crate::error::AppError;
use crate::flash::{clear_flash_cookie, Flash};

/// A rendered page that also clears the flash cookie once it has been shown.
pub struct Page<T> {
    template: T,
    clear_flash: bool,
}

impl<T: Template> Page<T> {
    pub fn new(template: T) -> Self {
        Self {
            template,
            clear_flash: false,
        }
    }

    /// Clear the flash cookie when the request carried one.
    pub fn consuming(mut self, flash: &Flash) -> Self {
        self.clear_flash = flash.is_present();
        self
    }
}

impl<T: Template> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        let body = match self.template.render() {
            Ok(body) => body,
            Err(err) => return AppError::Template(err).into_response(),
        };
        let mut response = Html(body).into_response();
        if self.clear_flash {
            if let Ok(cookie) = HeaderValue::from_str(&clear_flash_cookie()) {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
        }
        response
    }
}

/* --------------------------------------------------------------------------
Anonymous pages
-------------------------------------------------------------------------- */

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage {
    pub flash: Option<String>,
    /// Authentication failure shown above the form.
    pub error: Option<String>,
    pub username: String,
    pub field_errors: Vec<String>,
}

impl LoginPage {
    pub fn blank(flash: Option<String>) -> Self {
        Self {
            flash,
            error: None,
            username: String::new(),
            field_errors: Vec::new(),
        }
    }
}

#[derive(Template)]
#[template(path = "register.html")]
pub struct RegisterPage {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "start.html")]
pub struct StartPage {
    pub flash: Option<String>,
}

/* --------------------------------------------------------------------------
Account pages
-------------------------------------------------------------------------- */

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage {
    pub flash: Option<String>,
    pub profile: AccountProfile,
    pub game_master: Option<GameMaster>,
    pub player: Option<Player>,
    pub sessions: Vec<GameSession>,
    pub characters: Vec<PlayerCharacter>,
}

#[derive(Template)]
#[template(path = "settings.html")]
pub struct SettingsPage {
    pub flash: Option<String>,
    pub game_master: Option<GameMaster>,
    pub player: Option<Player>,
}

/* --------------------------------------------------------------------------
Sessions and characters
-------------------------------------------------------------------------- */

#[derive(Template)]
#[template(path = "add_session.html")]
pub struct AddSessionPage {
    pub flash: Option<String>,
    pub min_slots: i32,
    pub max_slots: i32,
}

impl AddSessionPage {
    pub fn new(flash: Option<String>) -> Self {
        Self {
            flash,
            min_slots: MIN_SLOTS,
            max_slots: MAX_SLOTS,
        }
    }
}

#[derive(Template)]
#[template(path = "sessions.html")]
pub struct SessionsPage {
    pub flash: Option<String>,
    pub sessions: Vec<GameSessionListing>,
    /// The viewer's characters that can be signed up, empty for non-players.
    pub characters: Vec<PlayerCharacter>,
}

/// Input bounds shown on the character form.
pub struct SheetBounds {
    pub min_attribute: i32,
    pub max_attribute: i32,
    pub min_life_points: i32,
    pub max_life_points: i32,
    pub min_age: i32,
    pub max_age: i32,
}

#[derive(Template)]
#[template(path = "add_character.html")]
pub struct AddCharacterPage {
    pub flash: Option<String>,
    pub defaults: SheetValues,
    pub bounds: SheetBounds,
}

impl AddCharacterPage {
    pub fn new(flash: Option<String>) -> Self {
        Self {
            flash,
            defaults: SheetValues::default(),
            bounds: SheetBounds {
                min_attribute: MIN_ATTRIBUTE,
                max_attribute: MAX_ATTRIBUTE,
                min_life_points: MIN_LIFE_POINTS,
                max_life_points: MAX_LIFE_POINTS,
                min_age: MIN_AGE,
                max_age: MAX_AGE,
            },
        }
    }
}

/* --------------------------------------------------------------------------
Errors
-------------------------------------------------------------------------- */

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub code: &'static str,
    pub message: String,
}
