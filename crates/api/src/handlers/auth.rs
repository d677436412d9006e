//! Handlers for the login page (`/`) and `/logout`.

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Form;
use chrono::{Duration, Utc};
use gamemaster_db::models::session::CreateAccountSession;
use gamemaster_db::repositories::{AccountRepo, SessionRepo};
use validator::Validate;

use crate::auth::cookies::{build_cookie, expire_cookie};
use crate::auth::password::verify_password_blocking;
use crate::auth::session::{generate_session_token, SESSION_COOKIE};
use crate::error::AppResult;
use crate::flash::{self, Flash};
use crate::forms::{error_messages, LoginForm};
use crate::middleware::auth::CurrentAccount;
use crate::pages::{LoginPage, Page};
use crate::response::redirect;
use crate::routes;
use crate::state::AppState;

pub const MSG_INVALID_CREDENTIALS: &str = "Invalid username or password";
pub const MSG_ACCOUNT_BLOCKED: &str = "Account is blocked";
pub const MSG_LOGGED_IN: &str = "Logged in successfully";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
pub async fn login_page(flash: Flash) -> Page<LoginPage> {
    Page::new(LoginPage::blank(flash.clone().into_message())).consuming(&flash)
}

/// POST /
///
/// Authenticate with username + password. On success a login session row is
/// created and its token set as the `session` cookie. Failures re-render the
/// form with status 200 and never set a cookie.
pub async fn login(
    State(state): State<AppState>,
    Form(input): Form<LoginForm>,
) -> AppResult<Response> {
    let input = input.normalized();

    // 1. Both fields must be present.
    if let Err(errors) = input.validate() {
        return Ok(Page::new(LoginPage {
            flash: None,
            error: None,
            username: input.username,
            field_errors: error_messages(&errors, LoginForm::FIELD_ORDER),
        })
        .into_response());
    }

    // 2. Find the account and verify the password.
    let Some(account) = AccountRepo::find_by_username(&state.pool, &input.username).await? else {
        tracing::info!(username = %input.username, "Login for unknown username");
        return Ok(login_failed(input.username, MSG_INVALID_CREDENTIALS));
    };

    let password_valid =
        verify_password_blocking(input.password, account.password_hash.clone()).await?;
    if !password_valid {
        tracing::info!(account_id = account.id, "Login with wrong password");
        return Ok(login_failed(input.username, MSG_INVALID_CREDENTIALS));
    }

    // 3. Blocked accounts cannot log in.
    if !account.is_active {
        tracing::info!(account_id = account.id, "Login for blocked account");
        return Ok(login_failed(input.username, MSG_ACCOUNT_BLOCKED));
    }

    // 4. Create the login session.
    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + Duration::hours(state.config.session.expiry_hours);
    let session = SessionRepo::create(
        &state.pool,
        &CreateAccountSession {
            account_id: account.id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(account_id = account.id, session_id = session.id, "Account logged in");

    let session_cookie = build_cookie(
        SESSION_COOKIE,
        &token,
        Some(state.config.session.max_age_secs()),
        state.config.session.cookie_secure,
    );
    Ok(redirect(
        routes::DASHBOARD,
        &[session_cookie, flash::set_flash_cookie(MSG_LOGGED_IN)],
    ))
}

/// POST /logout
///
/// Revoke the current login session and clear the cookie.
pub async fn logout(State(state): State<AppState>, current: CurrentAccount) -> AppResult<Response> {
    SessionRepo::revoke(&state.pool, current.session_id).await?;
    tracing::info!(
        account_id = current.id(),
        session_id = current.session_id,
        "Account logged out"
    );
    Ok(redirect(routes::INDEX, &[expire_cookie(SESSION_COOKIE)]))
}

fn login_failed(username: String, message: &str) -> Response {
    Page::new(LoginPage {
        flash: None,
        error: Some(message.to_string()),
        username,
        field_errors: Vec::new(),
    })
    .into_response()
}
