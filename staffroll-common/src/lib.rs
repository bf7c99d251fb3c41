//! Core types and editor state shared between staffroll-mobile and staffroll-cli
//!
//! Nothing in here touches the DOM: the UI crates feed events in and read
//! the resulting state back out.

pub mod age;
pub mod config;
pub mod editor;
pub mod employee;
pub mod focus;
pub mod placeholder;
pub mod roster;
pub mod salary;
pub mod swipe;

pub use config::{EditorConfig, SwipeConfig, SwipeMeasure, SwipePreset};
pub use editor::{EditorEvent, EmployeeListEditor, EventOutcome, Leaving};
pub use employee::{Employee, EmployeeId, Field, Gender};
pub use focus::{FocusRequest, FocusTarget};
pub use roster::Roster;
pub use salary::{SalaryBand, SalaryMode};
pub use swipe::{SwipeOutcome, SwipeState, SwipeVisual};

/// Errors raised while building or decoding editor state
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown swipe preset: {0}")]
    UnknownPreset(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
