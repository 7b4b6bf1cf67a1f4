use std::{collections::HashMap, fs};

use serde::Deserialize;

const SETTINGS_FILE: &str = "server.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    pub server_bind: String,
    pub persons_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_bind: "0.0.0.0:3001".into(),
            persons_path: "data/persons.json".into(),
        }
    }
}

/// Defaults, then `server.toml`, then the environment; later sources win.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());

    settings
}

pub(crate) fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(raw) else {
        tracing::warn!(file = SETTINGS_FILE, "ignoring unreadable settings file");
        return;
    };
    if let Some(v) = file_cfg.get("bind_addr") {
        settings.server_bind = v.clone();
    }
    if let Some(v) = file_cfg.get("persons_path") {
        settings.persons_path = v.clone();
    }
}

pub(crate) fn apply_env_overrides(
    settings: &mut Settings,
    lookup: impl Fn(&str) -> Option<String>,
) {
    if let Some(port) = lookup("PORT") {
        if let Ok(port) = port.trim().parse::<u16>() {
            settings.server_bind = format!("0.0.0.0:{port}");
        }
    }
    if let Some(v) = lookup("SERVER_BIND") {
        settings.server_bind = v;
    }
    if let Some(v) = lookup("APP__BIND_ADDR") {
        settings.server_bind = v;
    }

    if let Some(v) = lookup("PERSONS_PATH") {
        settings.persons_path = v;
    }
    if let Some(v) = lookup("APP__PERSONS_PATH") {
        settings.persons_path = v;
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
