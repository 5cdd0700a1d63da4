//! TOML-based application configuration.
//!
//! Stores user preferences including:
//! - Editor defaults (render style, session pattern file name)
//! - Generation defaults (marker file, commit message prefix, working hours,
//!   optional default target year)
//!
//! Configuration is stored at `~/.config/lawnpaint/config.toml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::config_dir;
use crate::error::ConfigError;
use crate::policy::PolicyConfig;
use crate::render::RenderStyle;

/// Editor-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_style")]
    pub style: RenderStyle,
    /// File name (under `patterns/`) the editor saves to and loads from.
    #[serde(default = "default_pattern_name")]
    pub pattern_name: String,
}

/// Generation-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Tracked file each synthesized commit appends a line to.
    #[serde(default = "default_marker_file")]
    pub marker_file: String,
    /// Commit message prefix; the sequence number is appended.
    #[serde(default = "default_message_prefix")]
    pub message_prefix: String,
    #[serde(default = "default_first_hour")]
    pub first_hour: u8,
    #[serde(default = "default_last_hour")]
    pub last_hour: u8,
    /// Target year when the CLI is not given one (None = current year).
    #[serde(default)]
    pub default_year: Option<i32>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/lawnpaint/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
}

// Default functions
fn default_style() -> RenderStyle {
    RenderStyle::Shaded
}
fn default_pattern_name() -> String {
    "pattern.json".to_string()
}
fn default_marker_file() -> String {
    "lawn_commits.txt".to_string()
}
fn default_message_prefix() -> String {
    "Lawn commit".to_string()
}
fn default_first_hour() -> u8 {
    9
}
fn default_last_hour() -> u8 {
    22
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            style: default_style(),
            pattern_name: default_pattern_name(),
        }
    }
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            marker_file: default_marker_file(),
            message_prefix: default_message_prefix(),
            first_hour: default_first_hour(),
            last_hour: default_last_hour(),
            default_year: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            generate: GenerateConfig::default(),
        }
    }
}

impl GenerateConfig {
    /// Policy config with the configured working-hour window.
    pub fn policy_config(&self) -> PolicyConfig {
        PolicyConfig {
            hours: (self.first_hour, self.last_hour),
            ..Default::default()
        }
    }
}

impl Config {
    /// Location of the config file on disk.
    pub fn path() -> Result<PathBuf, ConfigError> {
        let dir = config_dir().map_err(|e| ConfigError::Dir(e.to_string()))?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk or write and return the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed, or
    /// if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let config = Self::default();
                config.save()?;
                Ok(config)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = self.to_toml()?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// TOML rendering of the full config.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: PathBuf::from("config.toml"),
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let root = serde_json::to_value(self).ok()?;
        let mut current = &root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(match current {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    /// Set a config value by key and persist. Returns an error for unknown
    /// keys or values that do not parse into the field's type.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut root = serde_json::to_value(&*self).map_err(|_| unknown(key))?;
        write_value(&mut root, key, value)?;
        *self = serde_json::from_value(root).map_err(|_| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })?;
        self.save()
    }
}

fn unknown(key: &str) -> ConfigError {
    ConfigError::UnknownKey(key.to_string())
}

/// Replace the JSON leaf named by a dot-separated key, keeping the type of
/// the existing value.
fn write_value(root: &mut serde_json::Value, key: &str, value: &str) -> Result<(), ConfigError> {
    let mut current = root;
    let mut parts = key.split('.').peekable();
    loop {
        let part = parts.next().filter(|p| !p.is_empty()).ok_or_else(|| unknown(key))?;
        if parts.peek().is_none() {
            let slot = current.get_mut(part).ok_or_else(|| unknown(key))?;
            *slot = parse_like(slot, key, value)?;
            return Ok(());
        }
        current = current.get_mut(part).ok_or_else(|| unknown(key))?;
    }
}

fn parse_like(
    existing: &serde_json::Value,
    key: &str,
    raw: &str,
) -> Result<serde_json::Value, ConfigError> {
    use serde_json::Value;
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    };
    match existing {
        Value::Bool(_) => raw.parse().map(Value::Bool).map_err(|_| invalid()),
        // Null leaves are optional integers (e.g. generate.default_year).
        Value::Number(_) | Value::Null => raw
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|_| invalid()),
        Value::Object(_) | Value::Array(_) => Err(invalid()),
        Value::String(_) => Ok(Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let config = Config::default();
        let toml_str = config.to_toml().unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.editor.pattern_name, "pattern.json");
        assert_eq!(parsed.generate.first_hour, 9);
        assert_eq!(parsed.generate.last_hour, 22);
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let config = Config::default();
        assert_eq!(config.get("editor.style").as_deref(), Some("shaded"));
        assert_eq!(
            config.get("generate.marker_file").as_deref(),
            Some("lawn_commits.txt")
        );
        assert!(config.get("editor.missing_key").is_none());
    }

    #[test]
    fn write_value_updates_a_nested_number() {
        let mut root = serde_json::to_value(Config::default()).unwrap();
        write_value(&mut root, "generate.first_hour", "8").unwrap();
        assert_eq!(
            root["generate"]["first_hour"],
            serde_json::Value::Number(8.into())
        );
    }

    #[test]
    fn write_value_fills_an_optional_year() {
        let mut root = serde_json::to_value(Config::default()).unwrap();
        write_value(&mut root, "generate.default_year", "2024").unwrap();
        let parsed: Config = serde_json::from_value(root).unwrap();
        assert_eq!(parsed.generate.default_year, Some(2024));
    }

    #[test]
    fn write_value_rejects_unknown_keys() {
        let mut root = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            write_value(&mut root, "editor.nonexistent", "x"),
            Err(ConfigError::UnknownKey(_))
        ));
        assert!(write_value(&mut root, "", "x").is_err());
    }

    #[test]
    fn write_value_rejects_type_mismatches() {
        let mut root = serde_json::to_value(Config::default()).unwrap();
        assert!(matches!(
            write_value(&mut root, "generate.first_hour", "late"),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn policy_config_carries_the_hour_window() {
        let generate = GenerateConfig {
            first_hour: 10,
            last_hour: 18,
            ..Default::default()
        };
        let policy = generate.policy_config();
        assert_eq!(policy.hours, (10, 18));
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn style_round_trips_through_toml() {
        let config = Config {
            editor: EditorConfig {
                style: RenderStyle::Block,
                ..Default::default()
            },
            ..Default::default()
        };
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert_eq!(parsed.editor.style, RenderStyle::Block);
    }
}
