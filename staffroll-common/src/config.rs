//! Editor configuration
//!
//! Every knob that differs between the swipe/salary variants of the editor
//! lives here, so the UI crates only pick a config and never branch on
//! variant names themselves.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::salary::{SalaryBand, SalaryMode, MAX_SALARY_DIGITS};
use crate::{Error, Result};

/// Top-level editor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub name_placeholder: String,
    pub salary: SalaryConfig,
    pub age: AgeConfig,
    pub swipe: SwipeConfig,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            name_placeholder: "New Employee".to_string(),
            salary: SalaryConfig::default(),
            age: AgeConfig::default(),
            swipe: SwipeConfig::default(),
        }
    }
}

impl EditorConfig {
    /// Default config with the swipe section replaced by a preset
    pub fn with_preset(preset: SwipePreset) -> Self {
        Self {
            swipe: preset.config(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.name_placeholder.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "name_placeholder must not be empty".to_string(),
            ));
        }
        self.salary.validate()?;
        self.age.validate()?;
        self.swipe.validate()
    }
}

/// Salary input discipline and formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryConfig {
    pub mode: SalaryMode,
    pub max_digits: usize,
    pub grouping_separator: char,
    pub currency_symbol: String,
    pub default_value: String,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            mode: SalaryMode::FreeText,
            max_digits: MAX_SALARY_DIGITS,
            grouping_separator: ',',
            currency_symbol: "€".to_string(),
            default_value: "0".to_string(),
        }
    }
}

impl SalaryConfig {
    /// Value a freshly added record starts with
    pub fn initial_value(&self) -> String {
        match self.mode {
            SalaryMode::FreeText => self.default_value.clone(),
            SalaryMode::Banded => SalaryBand::lowest().label(),
        }
    }

    fn validate(&self) -> Result<()> {
        // u64 holds 19 digits; keep one spare so grouping never overflows
        if self.max_digits == 0 || self.max_digits > 18 {
            return Err(Error::InvalidConfig(format!(
                "salary.max_digits must be in 1..=18, got {}",
                self.max_digits
            )));
        }
        if self.grouping_separator.is_ascii_digit() {
            return Err(Error::InvalidConfig(
                "salary.grouping_separator must not be a digit".to_string(),
            ));
        }
        Ok(())
    }
}

/// Bounds for the optional age field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeConfig {
    pub min: u32,
    pub max: u32,
    pub max_digits: usize,
}

impl Default for AgeConfig {
    fn default() -> Self {
        Self {
            min: 18,
            max: 67,
            max_digits: 2,
        }
    }
}

impl AgeConfig {
    fn validate(&self) -> Result<()> {
        if self.min > self.max {
            return Err(Error::InvalidConfig(format!(
                "age.min ({}) must not exceed age.max ({})",
                self.min, self.max
            )));
        }
        if self.max_digits == 0 || self.max_digits > 9 {
            return Err(Error::InvalidConfig(format!(
                "age.max_digits must be in 1..=9, got {}",
                self.max_digits
            )));
        }
        Ok(())
    }
}

/// A swipe distance, either absolute or relative to the card width
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeMeasure {
    Fixed(f64),    // pixels
    Fraction(f64), // of the rendered card width
}

impl SwipeMeasure {
    /// Resolve to pixels for a card of the given width
    pub fn resolve(self, card_width: f64) -> f64 {
        match self {
            Self::Fixed(px) => px,
            Self::Fraction(f) => card_width.max(0.0) * f,
        }
    }

    fn validate(self, name: &str) -> Result<()> {
        match self {
            Self::Fixed(px) if !(px.is_finite() && px > 0.0) => Err(Error::InvalidConfig(
                format!("swipe.{} must be a positive pixel value, got {}", name, px),
            )),
            Self::Fraction(f) if !(f > 0.0 && f <= 1.0) => Err(Error::InvalidConfig(format!(
                "swipe.{} fraction must be in (0, 1], got {}",
                name, f
            ))),
            _ => Ok(()),
        }
    }
}

/// Swipe-to-delete tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    pub limit: SwipeMeasure,     // max offset while dragging
    pub threshold: SwipeMeasure, // offset that must be exceeded to delete
    pub fade: bool,
    pub animate_commit: bool,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        SwipePreset::Proportional.config()
    }
}

impl SwipeConfig {
    fn validate(&self) -> Result<()> {
        self.limit.validate("limit")?;
        self.threshold.validate("threshold")?;

        // A threshold at or beyond the drag cap can never be exceeded
        let unreachable = match (self.limit, self.threshold) {
            (SwipeMeasure::Fixed(l), SwipeMeasure::Fixed(t)) => t >= l,
            (SwipeMeasure::Fraction(l), SwipeMeasure::Fraction(t)) => t >= l,
            _ => false,
        };
        if unreachable {
            return Err(Error::InvalidConfig(
                "swipe.threshold must be below swipe.limit".to_string(),
            ));
        }
        Ok(())
    }
}

/// Named swipe configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipePreset {
    /// Fixed 100px drag cap, deletes past 50px
    Simple,
    /// Half-width drag cap, deletes past a quarter width, fades while dragging
    #[default]
    Proportional,
}

impl SwipePreset {
    pub const ALL: [SwipePreset; 2] = [SwipePreset::Simple, SwipePreset::Proportional];

    pub fn config(self) -> SwipeConfig {
        match self {
            Self::Simple => SwipeConfig {
                limit: SwipeMeasure::Fixed(100.0),
                threshold: SwipeMeasure::Fixed(50.0),
                fade: false,
                animate_commit: false,
            },
            Self::Proportional => SwipeConfig {
                limit: SwipeMeasure::Fraction(0.5),
                threshold: SwipeMeasure::Fraction(0.25),
                fade: true,
                animate_commit: true,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Proportional => "proportional",
        }
    }

    /// Preset matching a swipe config exactly, if any
    pub fn detect(config: &SwipeConfig) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.config() == *config)
    }
}

impl FromStr for SwipePreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "simple" | "fixed" => Ok(Self::Simple),
            "proportional" | "fraction" => Ok(Self::Proportional),
            other => Err(Error::UnknownPreset(other.to_string())),
        }
    }
}
