//! Composable value validators attached to fields via `Field::validator`.

use std::sync::Arc;

use serde_json::Value;

use super::strings;

/// Runs against the coerced value; returns an error message on failure.
pub type Validator = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

pub fn range_min(min: i64, message: String) -> Validator {
    Arc::new(move |value| match value.as_i64() {
        Some(n) if n >= min => None,
        _ => Some(message.clone()),
    })
}

pub fn non_empty_string(name: &str) -> Validator {
    let message = strings::string_must_be_non_empty(name);
    Arc::new(move |value| match value.as_str() {
        Some(s) if !s.trim().is_empty() => None,
        _ => Some(message.clone()),
    })
}

pub fn length_min(min: usize, message: String) -> Validator {
    Arc::new(move |value| match value.as_array() {
        Some(items) if items.len() >= min => None,
        _ => Some(message.clone()),
    })
}

pub fn one_of(allowed: Vec<String>, message: String) -> Validator {
    Arc::new(move |value| match value.as_str() {
        Some(s) if allowed.iter().any(|a| a == s) => None,
        _ => Some(message.clone()),
    })
}

pub(crate) fn is_valid_email(input: &str) -> bool {
    let mut parts = input.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if input.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    // Domain needs a dot with something on both sides.
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}
