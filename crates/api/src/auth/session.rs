//! Opaque login-session tokens.
//!
//! The browser holds a random token in the `session` cookie; the database
//! only ever sees its SHA-256 digest, so a leaked `account_sessions` table
//! cannot be replayed.

use sha2::{Digest, Sha256};

/// Name of the cookie carrying the login token.
pub const SESSION_COOKIE: &str = "session";

/// Login session lifetime and cookie flags.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Lifetime of a login session in hours (default: 336, two weeks).
    pub expiry_hours: i64,
    /// Add the `Secure` attribute to the session cookie (default: `false`).
    pub cookie_secure: bool,
}

impl SessionConfig {
    /// Load session configuration from environment variables.
    ///
    /// | Env Var                 | Default |
    /// |-------------------------|---------|
    /// | `SESSION_EXPIRY_HOURS`  | `336`   |
    /// | `SESSION_COOKIE_SECURE` | `false` |
    pub fn from_env() -> Self {
        let expiry_hours: i64 = std::env::var("SESSION_EXPIRY_HOURS")
            .unwrap_or_else(|_| "336".into())
            .parse()
            .expect("SESSION_EXPIRY_HOURS must be a valid i64");

        let cookie_secure = std::env::var("SESSION_COOKIE_SECURE")
            .map(|v| gamemaster_core::forms::is_truthy(&v))
            .unwrap_or(false);

        Self {
            expiry_hours,
            cookie_secure,
        }
    }

    /// Session lifetime in seconds, used for the cookie `Max-Age`.
    pub fn max_age_secs(&self) -> i64 {
        self.expiry_hours * 3600
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            expiry_hours: 336,
            cookie_secure: false,
        }
    }
}

/// Generate a new random session token.
///
/// Returns `(plaintext_token, sha256_hex_hash)`. The plaintext goes into the
/// cookie; only the hash is persisted.
pub fn generate_session_token() -> (String, String) {
    let token = uuid::Uuid::new_v4().simple().to_string();
    let hash = hash_session_token(&token);
    (token, hash)
}

/// Compute the lowercase hex SHA-256 digest of a session token.
pub fn hash_session_token(token: &str) -> String {
    let digest = Sha256::digest(token.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_hash_matches_token() {
        let (token, hash) = generate_session_token();
        assert_eq!(hash, hash_session_token(&token));
        assert_eq!(hash.len(), 64);
        assert_ne!(token, hash);
    }

    #[test]
    fn tokens_are_unique() {
        let (a, _) = generate_session_token();
        let (b, _) = generate_session_token();
        assert_ne!(a, b);
    }

    #[test]
    fn known_digest() {
        assert_eq!(
            hash_session_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn max_age_covers_whole_expiry() {
        let config = SessionConfig {
            expiry_hours: 2,
            cookie_secure: false,
        };
        assert_eq!(config.max_age_secs(), 7200);
    }
}
