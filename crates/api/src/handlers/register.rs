//! Handlers for `/register` and the post-registration `/start` page.

use axum::extract::State;
use axum::response::Response;
use axum::Form;
use gamemaster_db::models::account::CreateAccount;
use gamemaster_db::repositories::AccountRepo;
use validator::Validate;

use crate::auth::password::hash_password_blocking;
use crate::error::AppResult;
use crate::flash::Flash;
use crate::forms::{first_error_message, RegistrationForm};
use crate::pages::{Page, RegisterPage, StartPage};
use crate::response::redirect_with_flash;
use crate::routes;
use crate::state::AppState;

pub const MSG_ALREADY_TAKEN: &str = "Username or email is already taken";

/// GET /register
pub async fn register_page(flash: Flash) -> Page<RegisterPage> {
    Page::new(RegisterPage {
        flash: flash.clone().into_message(),
    })
    .consuming(&flash)
}

/// POST /register
///
/// Every failure redirects back to the form with a flash message; success
/// redirects to `/start`.
pub async fn register(
    State(state): State<AppState>,
    Form(input): Form<RegistrationForm>,
) -> AppResult<Response> {
    let input = input.normalized();

    if let Err(errors) = input.validate() {
        let message = first_error_message(&errors, RegistrationForm::FIELD_ORDER);
        tracing::debug!(username = %input.username, %message, "Registration rejected");
        return Ok(redirect_with_flash(routes::REGISTER, Some(&message)));
    }

    if AccountRepo::username_or_email_taken(&state.pool, &input.username, &input.email).await? {
        tracing::debug!(username = %input.username, "Registration with a taken username or email");
        return Ok(redirect_with_flash(routes::REGISTER, Some(MSG_ALREADY_TAKEN)));
    }

    let password_hash = hash_password_blocking(input.password).await?;
    let account = AccountRepo::create(
        &state.pool,
        &CreateAccount {
            username: input.username,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(account_id = account.id, username = %account.username, "Account registered");

    let message = format!(
        "Account created for {}. You can log in now.",
        account.username
    );
    Ok(redirect_with_flash(routes::START, Some(&message)))
}

/// GET /start
pub async fn start_page(flash: Flash) -> Page<StartPage> {
    Page::new(StartPage {
        flash: flash.clone().into_message(),
    })
    .consuming(&flash)
}
