use once_cell::sync::Lazy;
use regex::Regex;

// Permissive `local@domain.tld` shape, not full RFC grammar.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Returns the trimmed address when it matches the expected shape.
pub fn valid_email(raw: &str) -> Option<&str> {
    let email = raw.trim();
    if EMAIL_RE.is_match(email) {
        Some(email)
    } else {
        None
    }
}
