//! Field-level validators shared by the submission paths.
//!
//! Each returns `Some(message)` when the value is rejected, `None` otherwise.

/// Maximum accepted email length (RFC 5321 path limit).
pub const EMAIL_MAX_LEN: usize = 254;

/// Validate a text field has at least `min_len` characters after trimming.
pub fn validate_min_len(value: &str, field_name: &str, min_len: usize) -> Option<String> {
    if value.trim().chars().count() < min_len {
        return Some(format!("{field_name} must be at least {min_len} characters"));
    }
    None
}

/// Validate email syntax: one '@', non-empty local part, dotted domain with
/// non-empty labels, no whitespace, at most 254 chars.
pub fn validate_email(email: &str) -> Option<String> {
    let invalid = Some("Please enter a valid email".to_string());
    let trimmed = email.trim();
    if trimmed.is_empty() || trimmed.len() > EMAIL_MAX_LEN {
        return invalid;
    }
    if trimmed.chars().any(char::is_whitespace) {
        return invalid;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return invalid;
    };
    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return invalid;
    }
    if domain.split('.').any(|label| label.is_empty()) {
        return invalid;
    }
    None
}

/// Trim an optional text field, collapsing blank input to `None`.
pub fn normalize_optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}
