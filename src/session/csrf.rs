use actix_session::Session;
use rand::Rng;

use crate::errors::AppError;

const SESSION_KEY: &str = "csrf_token";

/// Get the CSRF token from the session, or generate a new one.
pub fn get_or_create_token(session: &Session) -> String {
    if let Ok(Some(token)) = session.get::<String>(SESSION_KEY) {
        return token;
    }
    let token = generate_token();
    if let Err(e) = session.insert(SESSION_KEY, &token) {
        log::warn!("Could not store CSRF token in session: {e}");
    }
    token
}

/// Validate the submitted CSRF token against the session token.
pub fn validate_csrf(session: &Session, submitted: &str) -> Result<(), AppError> {
    let stored = session
        .get::<String>(SESSION_KEY)
        .unwrap_or(None)
        .unwrap_or_default();
    if stored.is_empty() || !constant_time_eq(&stored, submitted) {
        return Err(AppError::Csrf);
    }
    Ok(())
}

/// Random 32-byte hex token.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_are_64_hex_chars_and_distinct() {
        let a = generate_token();
        let b = generate_token();
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn constant_time_eq_compares_content_and_length() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
    }
}
