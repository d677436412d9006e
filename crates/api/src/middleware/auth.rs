//! Session-cookie authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gamemaster_core::types::DbId;
use gamemaster_db::models::account::Account;
use gamemaster_db::repositories::{AccountRepo, SessionRepo};

use crate::auth::cookies::read_cookie;
use crate::auth::session::{hash_session_token, SESSION_COOKIE};
use crate::error::AppError;
use crate::state::AppState;

/// The logged-in account, resolved from the `session` cookie.
///
/// Every request looks the token hash up in `account_sessions`, so a
/// revoked or expired session stops working immediately. Anonymous
/// requests, unknown tokens and deactivated accounts are redirected to the
/// login page.
///
/// ```ignore
/// async fn my_handler(current: CurrentAccount) -> AppResult<Response> {
///     tracing::info!(account_id = current.account.id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentAccount {
    pub account: Account,
    /// Id of the `account_sessions` row that authenticated this request.
    pub session_id: DbId,
}

impl CurrentAccount {
    pub fn id(&self) -> DbId {
        self.account.id
    }
}

impl FromRequestParts<AppState> for CurrentAccount {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token =
            read_cookie(&parts.headers, SESSION_COOKIE).ok_or_else(AppError::login_required)?;

        let session = SessionRepo::find_active_by_token_hash(&state.pool, &hash_session_token(token))
            .await?
            .ok_or_else(AppError::login_required)?;

        let account = AccountRepo::find_by_id(&state.pool, session.account_id)
            .await?
            .filter(|account| account.is_active)
            .ok_or_else(|| {
                tracing::debug!(
                    account_id = session.account_id,
                    "Session belongs to a missing or blocked account"
                );
                AppError::login_required()
            })?;

        Ok(CurrentAccount {
            account,
            session_id: session.id,
        })
    }
}
