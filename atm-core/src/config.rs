//! Configuration management
//!
//! Optional `settings.json` in the ATM directory:
//! ```json
//! {
//!   "app": { "logFilter": "warn", "prompt": "> ", "showBanner": true }
//! }
//! ```
//! Unknown keys are ignored.

use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    log_filter: Option<String>,
    #[serde(default)]
    prompt: Option<String>,
    #[serde(default)]
    show_banner: Option<bool>,
}

/// ATM configuration (simplified view of settings)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Default tracing filter, overridden by `ATM_LOG`
    pub log_filter: String,
    /// Printed before each line when reading from a terminal
    pub prompt: String,
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            prompt: "> ".to_string(),
            show_banner: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}

fn read_settings(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}

impl Config {
    /// Load config from the ATM directory
    ///
    /// A missing or malformed settings file yields the defaults.
    /// `ATM_LOG` and `ATM_SHOW_BANNER` override the file.
    pub fn load(atm_dir: &Path) -> Result<Self> {
        let raw = read_settings(&atm_dir.join(SETTINGS_FILE))?;
        let defaults = Self::default();

        let log_filter = std::env::var(crate::logging::LOG_ENV)
            .ok()
            .or(raw.app.log_filter)
            .unwrap_or(defaults.log_filter);

        let show_banner = std::env::var("ATM_SHOW_BANNER")
            .ok()
            .as_deref()
            .and_then(parse_flag)
            .or(raw.app.show_banner)
            .unwrap_or(defaults.show_banner);

        Ok(Self {
            log_filter,
            prompt: raw.app.prompt.unwrap_or(defaults.prompt),
            show_banner,
        })
    }
}
