//! Startup settings
//!
//! Layered lowest to highest: built-in defaults, an optional TOML file,
//! `ABACUS__*` environment variables, then command-line flags (applied by the
//! binary). A missing default file is fine; a file the user named explicitly
//! must exist and parse.

use crate::engine::constants::{DEFAULT_CARRY_DELAY, MIN_CARRY_DELAY};
use crate::presentation::Verbosity;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_CONFIG_FILE: &str = "abacus.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Speak feedback after each move
    pub voice: bool,
    /// Click a tone when beads move
    pub sound: bool,
    pub verbosity: Verbosity,
    pub carry_delay: Duration,
    /// Program that reads text aloud, `None` to stay silent
    pub speech_command: Option<String>,
    /// Where the chosen player name is kept
    pub data_dir: Option<PathBuf>,
    /// Names offered on the player picker
    pub players: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            voice: false,
            sound: true,
            verbosity: Verbosity::Normal,
            carry_delay: DEFAULT_CARRY_DELAY,
            speech_command: Some(default_speech_command().to_string()),
            data_dir: None,
            players: vec!["Georgia".to_string(), "Lilly".to_string()],
        }
    }
}

fn default_speech_command() -> &'static str {
    if cfg!(target_os = "macos") {
        "say"
    } else {
        "espeak"
    }
}

/// On-disk shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    voice: Option<bool>,
    sound: Option<bool>,
    verbosity: Option<Verbosity>,
    carry_delay_ms: Option<u64>,
    speech_command: Option<String>,
    data_dir: Option<PathBuf>,
    players: Option<Vec<String>>,
}

/// Load settings from `path` (or `abacus.toml` when `None`) and the process
/// environment.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading config file {}", path.display()))?;
            apply_toml(&mut settings, &raw)
                .with_context(|| format!("parsing config file {}", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                apply_toml(&mut settings, &raw)
                    .with_context(|| format!("parsing config file {}", DEFAULT_CONFIG_FILE))?;
            }
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

pub fn apply_toml(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file: FileSettings = toml::from_str(raw)?;

    if let Some(v) = file.voice {
        settings.voice = v;
    }
    if let Some(v) = file.sound {
        settings.sound = v;
    }
    if let Some(v) = file.verbosity {
        settings.verbosity = v;
    }
    if let Some(ms) = file.carry_delay_ms {
        settings.carry_delay = carry_delay_from_millis(ms);
    }
    if let Some(v) = file.speech_command {
        settings.speech_command = non_empty(v);
    }
    if let Some(v) = file.data_dir {
        settings.data_dir = Some(v);
    }
    if let Some(v) = file.players {
        settings.players = v;
    }
    Ok(())
}

/// Overlay `ABACUS__*` variables. Unparseable values are ignored.
pub fn apply_env<F>(settings: &mut Settings, var: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = var("ABACUS__VOICE").and_then(|v| parse_flag(&v)) {
        settings.voice = v;
    }
    if let Some(v) = var("ABACUS__SOUND").and_then(|v| parse_flag(&v)) {
        settings.sound = v;
    }
    if let Some(v) = var("ABACUS__VERBOSITY").and_then(|v| v.parse().ok()) {
        settings.verbosity = v;
    }
    if let Some(ms) = var("ABACUS__CARRY_DELAY_MS").and_then(|v| v.trim().parse::<u64>().ok()) {
        settings.carry_delay = carry_delay_from_millis(ms);
    }
    if let Some(v) = var("ABACUS__SPEECH_COMMAND") {
        settings.speech_command = non_empty(v);
    }
    if let Some(v) = var("ABACUS__DATA_DIR") {
        settings.data_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = var("ABACUS__PLAYERS") {
        let players: Vec<String> = v
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect();
        if !players.is_empty() {
            settings.players = players;
        }
    }
}

/// Carry delay in milliseconds, raised to [`MIN_CARRY_DELAY`] when shorter
pub fn carry_delay_from_millis(ms: u64) -> Duration {
    Duration::from_millis(ms).max(MIN_CARRY_DELAY)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_toml_overrides_defaults() {
        let mut settings = Settings::default();
        apply_toml(
            &mut settings,
            r#"
                voice = true
                verbosity = "chatty"
                carry_delay_ms = 250
                players = ["Ada"]
            "#,
        )
        .unwrap();

        assert!(settings.voice);
        assert!(settings.sound);
        assert_eq!(settings.verbosity, Verbosity::Chatty);
        assert_eq!(settings.carry_delay, Duration::from_millis(250));
        assert_eq!(settings.players, vec!["Ada".to_string()]);
    }

    #[test]
    fn test_zero_carry_delay_is_raised() {
        let mut settings = Settings::default();
        apply_toml(&mut settings, "carry_delay_ms = 0").unwrap();
        assert_eq!(settings.carry_delay, MIN_CARRY_DELAY);

        let mut env = FxHashMap::default();
        env.insert("ABACUS__CARRY_DELAY_MS", "1".to_string());
        apply_env(&mut settings, |key| env.get(key).cloned());
        assert_eq!(settings.carry_delay, MIN_CARRY_DELAY);
    }

    #[test]
    fn test_unknown_toml_key_is_an_error() {
        let mut settings = Settings::default();
        assert!(apply_toml(&mut settings, "volume = 11").is_err());
    }

    #[test]
    fn test_env_beats_file() {
        let mut settings = Settings::default();
        apply_toml(&mut settings, "sound = true\nspeech_command = \"say\"").unwrap();

        let mut env = FxHashMap::default();
        env.insert("ABACUS__SOUND", "off".to_string());
        env.insert("ABACUS__SPEECH_COMMAND", "  ".to_string());
        env.insert("ABACUS__PLAYERS", "Ada, Grace,".to_string());
        env.insert("ABACUS__CARRY_DELAY_MS", "soon".to_string());
        apply_env(&mut settings, |key| env.get(key).cloned());

        assert!(!settings.sound);
        assert_eq!(settings.speech_command, None);
        assert_eq!(settings.players, vec!["Ada".to_string(), "Grace".to_string()]);
        assert_eq!(settings.carry_delay, DEFAULT_CARRY_DELAY);
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let path = std::env::temp_dir().join("abacus_tty_no_such_config.toml");
        assert!(load_settings(Some(path.as_path())).is_err());
    }
}
