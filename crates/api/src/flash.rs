//! One-shot flash messages carried across a redirect in the `flash` cookie.
//!
//! The message is base64url-encoded so any UTF-8 text survives the cookie
//! grammar. Pages that display a flash also clear the cookie.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::auth::cookies::{build_cookie, expire_cookie, read_cookie};

/// Name of the cookie carrying the pending flash message.
pub const FLASH_COOKIE: &str = "flash";

pub fn encode_flash(message: &str) -> String {
    URL_SAFE_NO_PAD.encode(message.as_bytes())
}

/// Decode a cookie value; anything malformed is dropped.
pub fn decode_flash(value: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(value).ok()?;
    String::from_utf8(bytes).ok().filter(|m| !m.is_empty())
}

/// `Set-Cookie` value that stores `message` as the pending flash.
pub fn set_flash_cookie(message: &str) -> String {
    build_cookie(FLASH_COOKIE, &encode_flash(message), None, false)
}

/// `Set-Cookie` value that removes the pending flash.
pub fn clear_flash_cookie() -> String {
    expire_cookie(FLASH_COOKIE)
}

/// The pending flash message of the current request, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(pub Option<String>);

impl Flash {
    pub fn is_present(&self) -> bool {
        self.0.is_some()
    }

    pub fn into_message(self) -> Option<String> {
        self.0
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Flash {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Flash(
            read_cookie(&parts.headers, FLASH_COOKIE).and_then(decode_flash),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_message_is_cookie_safe() {
        let encoded = encode_flash("Account created for Zoë; welcome!");
        assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert_eq!(
            decode_flash(&encoded).as_deref(),
            Some("Account created for Zoë; welcome!")
        );
    }

    #[test]
    fn garbage_is_ignored() {
        assert_eq!(decode_flash("***"), None);
        assert_eq!(decode_flash(""), None);
    }

    #[test]
    fn clear_cookie_expires_flash() {
        let cookie = clear_flash_cookie();
        assert!(cookie.starts_with("flash=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[tokio::test]
    async fn extractor_reads_flash_cookie() {
        let request = axum::http::Request::builder()
            .header("cookie", format!("flash={}", encode_flash("Hello")))
            .body(())
            .unwrap();
        let (mut parts, _) = request.into_parts();
        let flash = Flash::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(flash, Flash(Some("Hello".into())));
    }
}
