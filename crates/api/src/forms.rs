//! Urlencoded form payloads.
//!
//! Every field deserializes as a string with `#[serde(default)]`, so a
//! missing field never turns into an extractor rejection: handlers decide
//! what an empty value means and answer with a flash message instead.

use gamemaster_core::character::{CharacterStatus, SheetValues};
use gamemaster_core::error::CoreError;
use gamemaster_core::forms::{parse_flag, parse_optional_i32, require_text, MSG_FILL_ALL_FIELDS};
use gamemaster_core::game_session::{parse_session_date, parse_slots};
use gamemaster_core::types::{DbId, Timestamp};
use serde::Deserialize;
use validator::{Validate, ValidationErrors};

pub const MSG_PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match!";

/// Pick the message of the first failing field, visiting fields in `order`.
///
/// `ValidationErrors` is unordered, so callers pass the order in which
/// problems should be reported.
pub fn first_error_message(errors: &ValidationErrors, order: &[&str]) -> String {
    let field_errors = errors.field_errors();
    order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .find_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| MSG_FILL_ALL_FIELDS.to_string())
}

/// The text to flash for a rejected submission.
pub fn flash_message(err: CoreError) -> String {
    match err {
        CoreError::Validation(message) => message,
        other => other.to_string(),
    }
}

/// Messages of every failing field, in `order`.
pub fn error_messages(errors: &ValidationErrors, order: &[&str]) -> Vec<String> {
    let field_errors = errors.field_errors();
    order
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .flat_map(|errors| errors.iter())
        .filter_map(|error| error.message.as_ref().map(|m| m.to_string()))
        .collect()
}

/* --------------------------------------------------------------------------
Login / registration
-------------------------------------------------------------------------- */

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl LoginForm {
    pub const FIELD_ORDER: &'static [&'static str] = &["username", "password"];

    /// Trim the username the same way registration stores it.
    pub fn normalized(mut self) -> Self {
        self.username = self.username.trim().to_string();
        self
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegistrationForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "Username must be 1 to 150 characters"))]
    pub username: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 150, message = "First name is required"))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 150, message = "Last name is too long"))]
    pub last_name: String,
    #[serde(default)]
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    #[serde(default)]
    #[validate(must_match(other = "password", message = "Passwords do not match!"))]
    pub password2: String,
}

impl RegistrationForm {
    /// Mismatched passwords are reported before anything else.
    pub const FIELD_ORDER: &'static [&'static str] = &[
        "password2",
        "username",
        "first_name",
        "last_name",
        "email",
        "password",
    ];

    /// Trim surrounding whitespace from the text fields. Passwords are kept verbatim.
    pub fn normalized(mut self) -> Self {
        self.username = self.username.trim().to_string();
        self.first_name = self.first_name.trim().to_string();
        self.last_name = self.last_name.trim().to_string();
        self.email = self.email.trim().to_string();
        self
    }
}

/* --------------------------------------------------------------------------
Settings
-------------------------------------------------------------------------- */

#[derive(Debug, Default, Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub user_nickname: String,
    #[serde(default)]
    pub is_game_master: String,
    #[serde(default)]
    pub is_player: String,
}

/// A validated settings submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRequest {
    pub nickname: String,
    pub game_master: bool,
    pub player: bool,
}

impl SettingsForm {
    /// Requires a nickname and at least one requested role.
    pub fn parse(&self) -> Result<RoleRequest, CoreError> {
        let nickname = self.user_nickname.trim();
        let game_master = parse_flag(&self.is_game_master).unwrap_or(false);
        let player = parse_flag(&self.is_player).unwrap_or(false);

        if nickname.is_empty() || !(game_master || player) {
            return Err(CoreError::Validation(MSG_FILL_ALL_FIELDS.into()));
        }
        Ok(RoleRequest {
            nickname: nickname.to_string(),
            game_master,
            player,
        })
    }
}

/* --------------------------------------------------------------------------
Game sessions
-------------------------------------------------------------------------- */

#[derive(Debug, Default, Deserialize)]
pub struct AddSessionForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slots: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub is_open: String,
    #[serde(default)]
    pub is_public: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSession {
    pub title: String,
    pub slots: i32,
    pub session_date: Timestamp,
    pub is_open: bool,
    pub is_public: bool,
}

impl AddSessionForm {
    /// Every field is required; absent flags count as missing.
    pub fn parse(&self) -> Result<NewSession, CoreError> {
        let title = require_text(&self.title, "title")?;
        let slots = parse_slots(&self.slots)?;
        let session_date = parse_session_date(&self.date)?;
        let is_open = parse_flag(&self.is_open)
            .ok_or_else(|| CoreError::Validation("is_open is required".into()))?;
        let is_public = parse_flag(&self.is_public)
            .ok_or_else(|| CoreError::Validation("is_public is required".into()))?;

        Ok(NewSession {
            title: title.to_string(),
            slots,
            session_date,
            is_open,
            is_public,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct JoinSessionForm {
    #[serde(default)]
    pub character_id: String,
}

impl JoinSessionForm {
    pub fn parse(&self) -> Result<DbId, CoreError> {
        self.character_id
            .trim()
            .parse()
            .map_err(|_| CoreError::Validation("Choose a character to sign up".into()))
    }
}

/* --------------------------------------------------------------------------
Characters
-------------------------------------------------------------------------- */

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AddCharacterForm {
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Character name must be 1 to 100 characters"))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub character_status: String,
    #[serde(default)]
    pub strength: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub dexterity: String,
    #[serde(default)]
    pub intelligence: String,
    #[serde(default)]
    pub wisdom: String,
    #[serde(default)]
    pub charisma: String,
    #[serde(default)]
    pub reputation: String,
    #[serde(default)]
    pub wealth: String,
    #[serde(default)]
    pub life_points: String,
    #[serde(default)]
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCharacter {
    pub name: String,
    pub description: String,
    pub status: CharacterStatus,
    pub sheet: SheetValues,
}

impl AddCharacterForm {
    pub const FIELD_ORDER: &'static [&'static str] = &["name"];

    /// Parse and bound-check the submission. Blank sheet fields take their defaults.
    pub fn parse(mut self) -> Result<NewCharacter, CoreError> {
        self.name = self.name.trim().to_string();
        if let Err(errors) = self.validate() {
            return Err(CoreError::Validation(first_error_message(
                &errors,
                Self::FIELD_ORDER,
            )));
        }

        let status = match self.character_status.trim() {
            "" => CharacterStatus::default(),
            raw => raw.parse()?,
        };

        let defaults = SheetValues::default();
        let field = |raw: &str, label: &str, default: i32| -> Result<i32, CoreError> {
            Ok(parse_optional_i32(raw, label)?.unwrap_or(default))
        };
        let sheet = SheetValues {
            strength: field(&self.strength, "strength", defaults.strength)?,
            condition: field(&self.condition, "condition", defaults.condition)?,
            dexterity: field(&self.dexterity, "dexterity", defaults.dexterity)?,
            intelligence: field(&self.intelligence, "intelligence", defaults.intelligence)?,
            wisdom: field(&self.wisdom, "wisdom", defaults.wisdom)?,
            charisma: field(&self.charisma, "charisma", defaults.charisma)?,
            reputation: field(&self.reputation, "reputation", defaults.reputation)?,
            wealth: field(&self.wealth, "wealth", defaults.wealth)?,
            life_points: field(&self.life_points, "life_points", defaults.life_points)?,
            age: field(&self.age, "age", defaults.age)?,
        };
        sheet.validate()?;

        Ok(NewCharacter {
            description: self.description.trim().to_string(),
            name: self.name,
            status,
            sheet,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn registration(password: &str, password2: &str) -> RegistrationForm {
        RegistrationForm {
            username: "arthur".into(),
            first_name: "Arthur".into(),
            last_name: "Dent".into(),
            email: "arthur@example.com".into(),
            password: password.into(),
            password2: password2.into(),
        }
    }

    #[test]
    fn registration_accepts_matching_passwords() {
        assert!(registration("towel42", "towel42").validate().is_ok());
    }

    #[test]
    fn registration_reports_mismatch_first() {
        let mut form = registration("towel42", "towel43");
        form.email = "not-an-email".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_error_message(&errors, RegistrationForm::FIELD_ORDER),
            MSG_PASSWORDS_DO_NOT_MATCH
        );
    }

    #[test]
    fn registration_rejects_bad_email() {
        let mut form = registration("towel42", "towel42");
        form.email = "not-an-email".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            first_error_message(&errors, RegistrationForm::FIELD_ORDER),
            "Enter a valid email address"
        );
    }

    #[test]
    fn registration_normalizes_whitespace() {
        let mut form = registration("  pw  ", "  pw  ");
        form.username = "  arthur ".into();
        let form = form.normalized();
        assert_eq!(form.username, "arthur");
        assert_eq!(form.password, "  pw  ");
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = LoginForm::default().validate().unwrap_err();
        assert_eq!(
            error_messages(&errors, LoginForm::FIELD_ORDER),
            vec!["Username is required", "Password is required"]
        );
    }

    #[test]
    fn login_username_is_trimmed_but_password_is_not() {
        let form = LoginForm {
            username: "  frodo ".into(),
            password: " ring ".into(),
        }
        .normalized();
        assert_eq!(form.username, "frodo");
        assert_eq!(form.password, " ring ");
    }

    #[test]
    fn flash_message_strips_error_prefix() {
        assert_eq!(
            flash_message(CoreError::Validation(MSG_FILL_ALL_FIELDS.into())),
            MSG_FILL_ALL_FIELDS
        );
    }

    #[test]
    fn settings_needs_nickname_and_a_role() {
        let form = SettingsForm {
            user_nickname: "Gandalf".into(),
            is_game_master: "on".into(),
            is_player: String::new(),
        };
        assert_eq!(
            form.parse().unwrap(),
            RoleRequest {
                nickname: "Gandalf".into(),
                game_master: true,
                player: false,
            }
        );

        let empty_nickname = SettingsForm {
            user_nickname: "  ".into(),
            is_game_master: "on".into(),
            is_player: String::new(),
        };
        assert_matches!(empty_nickname.parse(), Err(CoreError::Validation(_)));

        let no_role = SettingsForm {
            user_nickname: "Gandalf".into(),
            is_game_master: "false".into(),
            is_player: String::new(),
        };
        assert_matches!(no_role.parse(), Err(CoreError::Validation(_)));
    }

    fn session_form() -> AddSessionForm {
        AddSessionForm {
            title: "Test Session".into(),
            slots: "5".into(),
            date: "2023-09-30".into(),
            is_open: "True".into(),
            is_public: "True".into(),
        }
    }

    #[test]
    fn add_session_parses_complete_form() {
        let parsed = session_form().parse().unwrap();
        assert_eq!(parsed.title, "Test Session");
        assert_eq!(parsed.slots, 5);
        assert_eq!(
            parsed.session_date.format("%Y-%m-%d %H:%M").to_string(),
            "2023-09-30 00:00"
        );
        assert!(parsed.is_open);
        assert!(parsed.is_public);
    }

    #[test]
    fn add_session_rejects_missing_pieces() {
        let mut form = session_form();
        form.title = String::new();
        assert_matches!(form.parse(), Err(CoreError::Validation(_)));

        let mut form = session_form();
        form.slots = "7".into();
        assert_matches!(form.parse(), Err(CoreError::Validation(_)));

        let mut form = session_form();
        form.is_public = String::new();
        assert_matches!(form.parse(), Err(CoreError::Validation(_)));

        let mut form = session_form();
        form.date = "30/09/2023".into();
        assert_matches!(form.parse(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn add_session_accepts_explicit_false_flags() {
        let mut form = session_form();
        form.is_public = "false".into();
        assert!(!form.parse().unwrap().is_public);
    }

    #[test]
    fn character_defaults_fill_blank_sheet_fields() {
        let form = AddCharacterForm {
            name: " Frodo ".into(),
            strength: "12".into(),
            ..Default::default()
        };
        let parsed = form.parse().unwrap();
        assert_eq!(parsed.name, "Frodo");
        assert_eq!(parsed.status, CharacterStatus::Alive);
        assert_eq!(parsed.sheet.strength, 12);
        assert_eq!(parsed.sheet.wisdom, 8);
        assert_eq!(parsed.sheet.age, 20);
    }

    #[test]
    fn character_rejects_out_of_range_and_garbage() {
        let form = AddCharacterForm {
            name: "Frodo".into(),
            age: "17".into(),
            ..Default::default()
        };
        assert_matches!(form.parse(), Err(CoreError::Validation(msg)) if msg.contains("age"));

        let form = AddCharacterForm {
            name: "Frodo".into(),
            wealth: "lots".into(),
            ..Default::default()
        };
        assert_matches!(form.parse(), Err(CoreError::Validation(_)));

        let form = AddCharacterForm::default();
        assert_matches!(form.parse(), Err(CoreError::Validation(msg)) if msg.contains("name"));

        let form = AddCharacterForm {
            name: "   ".into(),
            ..Default::default()
        };
        assert_matches!(form.parse(), Err(CoreError::Validation(msg)) if msg.contains("name"));
    }

    #[test]
    fn character_status_is_parsed() {
        let form = AddCharacterForm {
            name: "Boromir".into(),
            character_status: "Dead".into(),
            ..Default::default()
        };
        assert_eq!(form.parse().unwrap().status, CharacterStatus::Dead);
    }
}
