//! Redirect responses.
//!
//! Every successful form submission, and most failed ones, answers with
//! `302 Found` so that a browser refresh never re-posts the form.

use axum::http::header::{LOCATION, SET_COOKIE};
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::flash;

/// `302 Found` to `location`, appending each entry of `cookies` as a `Set-Cookie` header.
pub fn redirect(location: &str, cookies: &[String]) -> Response {
    let mut response = StatusCode::FOUND.into_response();
    let headers = response.headers_mut();

    match HeaderValue::from_str(location) {
        Ok(value) => {
            headers.insert(LOCATION, value);
        }
        Err(_) => tracing::error!(location, "Redirect target is not a valid header value"),
    }
    for cookie in cookies {
        match HeaderValue::from_str(cookie) {
            Ok(value) => {
                headers.append(SET_COOKIE, value);
            }
            Err(_) => tracing::error!("Cookie is not a valid header value"),
        }
    }
    response
}

/// `302 Found` to `location`, carrying `message` as the next page's flash.
pub fn redirect_with_flash(location: &str, message: Option<&str>) -> Response {
    match message {
        Some(message) => redirect(location, &[flash::set_flash_cookie(message)]),
        None => redirect(location, &[]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirect_sets_location_and_cookies() {
        let response = redirect("/dashboard", &["a=1".into(), "b=2".into()]);
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(response.headers()[LOCATION], "/dashboard");
        let cookies: Vec<_> = response.headers().get_all(SET_COOKIE).iter().collect();
        assert_eq!(cookies.len(), 2);
    }

    #[test]
    fn redirect_with_flash_sets_flash_cookie() {
        let response = redirect_with_flash("/register", Some("Passwords do not match!"));
        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("flash="));
    }

    #[test]
    fn redirect_without_flash_sets_no_cookie() {
        let response = redirect_with_flash("/", None);
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}
