use std::{collections::HashMap, fs};

use shared::domain::Theme;

#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub page_size: u32,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://pokeapi.co/api/v2".into(),
            page_size: 20,
            theme: Theme::Light,
        }
    }
}

pub fn parse_theme(raw: &str) -> Option<Theme> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "light" => Some(Theme::Light),
        "dark" => Some(Theme::Dark),
        _ => None,
    }
}

/// Layers defaults under an optional `pokedex.toml`, then under `APP__*`
/// environment variables.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("pokedex.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            if let Some(v) = file_cfg.get("api_base_url") {
                settings.api_base_url = v.clone();
            }
            if let Some(v) = file_cfg.get("page_size") {
                if let Ok(n) = v.parse() {
                    settings.page_size = n;
                }
            }
            if let Some(v) = file_cfg.get("theme") {
                if let Some(theme) = parse_theme(v) {
                    settings.theme = theme;
                }
            }
        }
    }

    if let Ok(v) = std::env::var("APP__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Ok(v) = std::env::var("APP__PAGE_SIZE") {
        if let Ok(n) = v.parse() {
            settings.page_size = n;
        }
    }
    if let Ok(v) = std::env::var("APP__THEME") {
        if let Some(theme) = parse_theme(&v) {
            settings.theme = theme;
        }
    }

    settings
}
