//! Salary input filtering, grouping and bands

use serde::{Deserialize, Serialize};
use std::fmt;

/// Digits kept from free-text salary input
pub const MAX_SALARY_DIGITS: usize = 6;

const BAND_STEP_K: u32 = 5;
const BAND_CEILING_K: u32 = 200;

/// How the salary field is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryMode {
    #[default]
    FreeText,
    Banded,
}

/// Keep only ASCII digits, at most `max_digits` of them
pub fn filter_digits(raw: &str, max_digits: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(max_digits)
        .collect()
}

/// Drop grouping separators (and anything else that isn't a digit)
pub fn strip_grouping(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Group a digit string in thousands: "1234567" -> "1,234,567".
///
/// Leading zeros are dropped the way a number formatter would, so "000" is
/// "0". Returns `None` when `digits` is empty or not all digits.
pub fn format_grouped(digits: &str, separator: char) -> Option<String> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    let trimmed = if trimmed.is_empty() { "0" } else { trimmed };

    let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 3);
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (trimmed.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    Some(out)
}

/// Parse a salary value in either its edited or at-rest form
pub fn parse_amount(value: &str) -> Option<u64> {
    let digits = strip_grouping(value);
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Discrete salary ranges in 5k steps, for the banded input mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalaryBand {
    Below(u32),       // under N thousand
    Range(u32, u32),  // from..to thousand
    Above(u32),       // over N thousand
}

impl SalaryBand {
    pub fn lowest() -> Self {
        Self::Below(BAND_STEP_K)
    }

    /// Every band in ascending order: <5k, 5k–10k, ..., 195k–200k, >200k
    pub fn all() -> Vec<SalaryBand> {
        let mut bands = vec![Self::lowest()];
        let mut lo = BAND_STEP_K;
        while lo < BAND_CEILING_K {
            bands.push(Self::Range(lo, lo + BAND_STEP_K));
            lo += BAND_STEP_K;
        }
        bands.push(Self::Above(BAND_CEILING_K));
        bands
    }

    /// Band containing a yearly amount. Band edges belong to the upper band.
    pub fn for_amount(amount: u64) -> Self {
        let k = amount / 1000;
        if k < BAND_STEP_K as u64 {
            Self::lowest()
        } else if k >= BAND_CEILING_K as u64 {
            Self::Above(BAND_CEILING_K)
        } else {
            let lo = (k as u32 / BAND_STEP_K) * BAND_STEP_K;
            Self::Range(lo, lo + BAND_STEP_K)
        }
    }

    /// Smallest amount inside the band
    pub fn floor_amount(&self) -> u64 {
        match self {
            Self::Below(_) => 0,
            Self::Range(lo, _) => *lo as u64 * 1000,
            Self::Above(k) => *k as u64 * 1000,
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::all().into_iter().find(|b| b.label() == label)
    }
}

impl fmt::Display for SalaryBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Below(k) => write!(f, "<{}k", k),
            Self::Range(lo, hi) => write!(f, "{}k–{}k", lo, hi),
            Self::Above(k) => write!(f, ">{}k", k),
        }
    }
}
