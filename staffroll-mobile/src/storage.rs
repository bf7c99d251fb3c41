//! Editor settings kept in browser local storage
//!
//! Only the configuration is stored; the employee list itself is memory-only.

use gloo_storage::{LocalStorage, Storage};
use staffroll_common::EditorConfig;

const CONFIG_KEY: &str = "staffroll_config";

pub struct ConfigStore;

impl ConfigStore {
    /// Stored config, or the defaults if nothing usable is stored
    pub fn load() -> EditorConfig {
        match LocalStorage::get::<EditorConfig>(CONFIG_KEY) {
            Ok(config) => match config.validate() {
                Ok(()) => config,
                Err(err) => {
                    web_sys::console::warn_1(&format!("Ignoring stored config: {}", err).into());
                    EditorConfig::default()
                }
            },
            Err(_) => EditorConfig::default(),
        }
    }

    pub fn save(config: &EditorConfig) {
        if let Err(err) = LocalStorage::set(CONFIG_KEY, config) {
            web_sys::console::error_1(&format!("Failed to save config: {}", err).into());
        }
    }

    pub fn clear() {
        LocalStorage::delete(CONFIG_KEY);
    }
}
