//! Stateless field validators shared by all request handlers.
//!
//! These are pure predicates: no configuration, no database access. Handlers
//! run them before touching the repositories so that malformed input is
//! rejected with a 400 and a field-specific message.

use chrono::NaiveDate;

/// True if the string is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Identifier shape check: exactly 24 lowercase/uppercase hex characters.
pub fn is_object_id(value: &str) -> bool {
    value.len() == 24 && value.chars().all(|c| c.is_ascii_hexdigit())
}

/// ISBN-10 / ISBN-13 pattern check: digits and hyphens only, with exactly
/// 10 or 13 digits. Checksum digits are not verified, matching the
/// pattern-only validation this API has always done.
pub fn is_valid_isbn(value: &str) -> bool {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == '-') {
        return false;
    }
    let digits = value.chars().filter(|c| c.is_ascii_digit()).count();
    digits == 10 || digits == 13
}

/// Category names: ASCII letters and spaces, at least one letter.
pub fn is_alphabetic(value: &str) -> bool {
    !is_blank(value) && value.chars().all(|c| c.is_ascii_alphabetic() || c == ' ')
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn is_valid_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

/// Minimal email shape check: one '@', non-empty local part, domain
/// containing a dot. Anything stricter belongs to a confirmation mail.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !value.contains(' ')
}

/// Ratings are integers from 1 to 5.
pub fn is_valid_rating(value: i64) -> bool {
    (1..=5).contains(&value)
}
