//! Response middleware applying the `SESSION_COOKIE_SECURE` setting.
//!
//! Flash cookies are written from redirects and error responses that never
//! see [`AppState`], so the `Secure` attribute is added here on the way out.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::auth::cookies::mark_cookies_secure;
use crate::state::AppState;

pub async fn secure_cookies(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    if state.config.session.cookie_secure {
        mark_cookies_secure(response.headers_mut());
    }
    response
}
