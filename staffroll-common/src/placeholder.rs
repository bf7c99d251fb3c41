//! Placeholder sentinel handling for the name field
//!
//! The name starts out as a sentinel string rather than an empty value.
//! Focusing an untouched field clears it; leaving it blank puts it back.

/// Value after focus, or `None` if the field keeps what it has
pub fn on_focus(value: &str, sentinel: &str) -> Option<String> {
    (value == sentinel).then(String::new)
}

/// Value after blur, or `None` if the field keeps what it has
pub fn on_blur(value: &str, sentinel: &str) -> Option<String> {
    value.trim().is_empty().then(|| sentinel.to_string())
}
