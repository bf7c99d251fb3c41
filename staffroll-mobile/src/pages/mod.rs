//! Mobile UI pages

pub mod employees;
pub mod settings;
