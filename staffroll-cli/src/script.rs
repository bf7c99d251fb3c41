//! Event script loading
//!
//! A script is a JSON or YAML array of editor events, as recorded from the UI
//! or written by hand:
//!
//! ```yaml
//! - event: add
//! - event: input
//!   id: 1
//!   field: age
//!   value: 41
//! - event: touch_start
//!   id: 1
//!   x: 300
//! - event: touch_move
//!   id: 1
//!   x: 180
//! - event: touch_end
//!   id: 1
//! ```
//!
//! Field values may be written as bare numbers; they are read as the text
//! the field would hold.

use anyhow::{Context, Result};
use staffroll_common::EditorEvent;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptFormat {
    Json,
    Yaml,
}

impl ScriptFormat {
    /// Pick a format from the file extension; anything unknown is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_lowercase).as_deref() {
            Some("yaml") | Some("yml") => ScriptFormat::Yaml,
            _ => ScriptFormat::Json,
        }
    }
}

pub fn parse(text: &str, format: ScriptFormat) -> Result<Vec<EditorEvent>> {
    let events = match format {
        ScriptFormat::Json => serde_json::from_str(text)?,
        ScriptFormat::Yaml => serde_yaml::from_str(text)?,
    };
    Ok(events)
}

pub fn load(path: &Path) -> Result<Vec<EditorEvent>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading script {}", path.display()))?;
    parse(&text, ScriptFormat::from_path(path))
        .with_context(|| format!("parsing script {}", path.display()))
}
