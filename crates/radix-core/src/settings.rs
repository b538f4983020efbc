//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::numeral::NumeralSystem;
use crate::validate::RomanGrammar;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        // build.rs checks the embedded default; custom TOML was parsed in init_custom.
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub roman: RomanSettings,
    pub display: DisplaySettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RomanSettings {
    pub strict_grammar: bool,
}

impl RomanSettings {
    pub fn grammar(&self) -> RomanGrammar {
        if self.strict_grammar {
            RomanGrammar::Strict
        } else {
            RomanGrammar::Lenient
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplaySettings {
    pub systems: Vec<NumeralSystem>,
    #[serde(default = "default_indicators")]
    pub indicators: bool,
}

fn default_indicators() -> bool {
    true
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let s: Settings = toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    Ok(s)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.display.systems.is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "display.systems".to_string(),
            reason: "must list at least one numeral system".to_string(),
        });
    }
    for (i, system) in s.display.systems.iter().enumerate() {
        if s.display.systems[..i].contains(system) {
            return Err(SettingsError::InvalidValue {
                field: "display.systems".to_string(),
                reason: format!("duplicate entry \"{system}\""),
            });
        }
    }
    Ok(())
}
