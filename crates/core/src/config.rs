//! Config file parsing for `~/.config/opds-shelf/config.toml`.
//!
//! The CLI reads default plugin settings from here; flags override file
//! values. A missing or unparsable file silently yields defaults, the same
//! degrade-don't-fail posture the render pipeline has.

use serde::{Deserialize, Serialize};

use crate::settings::{FeedKind, PluginSettings};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub settings: SettingsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsConfig {
    pub feed: Option<String>,
    pub server_url: Option<String>,
    pub reverse_proxy_header: Option<String>,
    pub username: Option<String>,
}

/// Load config from the default path (`~/.config/opds-shelf/config.toml`).
pub fn load_config() -> AppConfig {
    let config_path = match config_path() {
        Some(p) => p,
        None => return AppConfig::default(),
    };

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(_) => return AppConfig::default(),
    };

    match toml::from_str::<AppConfig>(&content) {
        Ok(cfg) => cfg,
        Err(_) => AppConfig::default(),
    }
}

/// Return the default config file path (for show).
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|mut p| {
        p.push("opds-shelf");
        p.push("config.toml");
        p
    })
}

/// Build plugin settings from config. Unset values keep their defaults.
pub fn settings_from_config(c: &AppConfig) -> PluginSettings {
    PluginSettings {
        feed: c
            .settings
            .feed
            .as_deref()
            .map(FeedKind::parse)
            .unwrap_or_default(),
        server_url: c.settings.server_url.clone().unwrap_or_default(),
        reverse_proxy_header: c.settings.reverse_proxy_header.clone(),
        username: c.settings.username.clone(),
    }
}
