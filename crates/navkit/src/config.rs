//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Class names and markup prefixes shared by every menu style.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Class appended to the active item (default: "active").
    #[serde(default = "default_active_class")]
    pub active_class: String,

    /// Class appended to a disabled item (default: "disabled").
    #[serde(default = "default_disabled_class")]
    pub disabled_class: String,

    /// Class prefix for icons; the icon name is appended
    /// (default: "glyphicon glyphicon-").
    #[serde(default = "default_icon_prefix")]
    pub icon_prefix: String,

    /// Class of the badge span (default: "badge").
    #[serde(default = "default_badge_class")]
    pub badge_class: String,
}

fn default_active_class() -> String {
    "active".to_string()
}
fn default_disabled_class() -> String {
    "disabled".to_string()
}
fn default_icon_prefix() -> String {
    "glyphicon glyphicon-".to_string()
}
fn default_badge_class() -> String {
    "badge".to_string()
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            active_class: default_active_class(),
            disabled_class: default_disabled_class(),
            icon_prefix: default_icon_prefix(),
            badge_class: default_badge_class(),
        }
    }
}

impl MenuConfig {
    /// Load menu configuration.
    ///
    /// Starts from the JSON file named by `NAVKIT_MENU_CONFIG` when set, then
    /// applies `NAVKIT_ACTIVE_CLASS`, `NAVKIT_DISABLED_CLASS`,
    /// `NAVKIT_ICON_PREFIX` and `NAVKIT_BADGE_CLASS` overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var("NAVKIT_MENU_CONFIG") {
            Ok(path) => {
                let raw = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read menu config {path}"))?;
                Self::from_json(&raw)?
            }
            Err(_) => Self::default(),
        };

        if let Ok(class) = env::var("NAVKIT_ACTIVE_CLASS") {
            config.active_class = class;
        }
        if let Ok(class) = env::var("NAVKIT_DISABLED_CLASS") {
            config.disabled_class = class;
        }
        if let Ok(prefix) = env::var("NAVKIT_ICON_PREFIX") {
            config.icon_prefix = prefix;
        }
        if let Ok(class) = env::var("NAVKIT_BADGE_CLASS") {
            config.badge_class = class;
        }

        Ok(config)
    }

    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("menu config must be a JSON object")
    }
}

/// Preview server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// JSON file mapping menu names to item lists (default: ./menus.json).
    pub menu_file: PathBuf,

    /// Optional JSON file of route definitions.
    pub routes_file: Option<PathBuf>,

    /// Optional JSON file of label translations.
    pub translations_file: Option<PathBuf>,

    /// Menu styling.
    pub menu: MenuConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let menu_file = env::var("MENU_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./menus.json"));

        let routes_file = env::var("ROUTES_FILE").ok().map(PathBuf::from);
        let translations_file = env::var("TRANSLATIONS_FILE").ok().map(PathBuf::from);

        let menu = MenuConfig::from_env().context("failed to load menu configuration")?;

        Ok(Self {
            port,
            menu_file,
            routes_file,
            translations_file,
            menu,
        })
    }
}
