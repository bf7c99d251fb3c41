//! Age field filtering and clamping

use crate::config::AgeConfig;

/// Keep only digits, capped to the configured width
pub fn filter_input(raw: &str, config: &AgeConfig) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(config.max_digits)
        .collect()
}

/// At-rest age after blur: empty stays empty, anything else is clamped into range
pub fn normalize(value: &str, config: &AgeConfig) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return String::new();
    }

    let age = digits.parse::<u32>().unwrap_or(config.max);
    age.clamp(config.min, config.max).to_string()
}
