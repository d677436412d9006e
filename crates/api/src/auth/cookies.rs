//! Minimal `Cookie` / `Set-Cookie` handling.

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

/// Find the value of cookie `name` in the request's `Cookie` headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}

/// Build a `Set-Cookie` value for an HttpOnly cookie scoped to the whole site.
///
/// `max_age_secs` of `None` yields a browser-session cookie.
pub fn build_cookie(name: &str, value: &str, max_age_secs: Option<i64>, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; HttpOnly; Path=/; SameSite=Lax");
    if let Some(max_age) = max_age_secs {
        cookie.push_str(&format!("; Max-Age={max_age}"));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Build a `Set-Cookie` value that deletes cookie `name`.
pub fn expire_cookie(name: &str) -> String {
    format!("{name}=; HttpOnly; Path=/; SameSite=Lax; Max-Age=0")
}

/// Add the `Secure` attribute to every `Set-Cookie` header that lacks it.
pub fn mark_cookies_secure(headers: &mut HeaderMap) {
    let cookies: Vec<HeaderValue> = headers.get_all(SET_COOKIE).iter().cloned().collect();
    if cookies.is_empty() {
        return;
    }

    headers.remove(SET_COOKIE);
    for value in cookies {
        let secured = value
            .to_str()
            .ok()
            .filter(|cookie| !has_secure_attribute(cookie))
            .and_then(|cookie| HeaderValue::from_str(&format!("{cookie}; Secure")).ok());
        headers.append(SET_COOKIE, secured.unwrap_or(value));
    }
}

fn has_secure_attribute(cookie: &str) -> bool {
    cookie
        .split(';')
        .skip(1)
        .any(|attr| attr.trim().eq_ignore_ascii_case("secure"))
}
