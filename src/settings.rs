//! Game settings
//!
//! Nothing is persisted between runs. Settings come from `key=value` pairs:
//! the URL query string on the web (`?volume=0.5&mute=1`), command-line
//! arguments natively (`soccer-duel duration=30 seed=7`).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::MATCH_DURATION_SECS;

/// Why a settings string was rejected
#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),

    #[error("setting `{key}` has invalid value `{value}`")]
    InvalidValue { key: String, value: String },

    #[error("setting `{key}` out of range: {value} (expected {range})")]
    OutOfRange {
        key: String,
        value: String,
        range: &'static str,
    },

    #[error("expected key=value, got `{0}`")]
    Malformed(String),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Start muted
    pub muted: bool,

    // === Match ===
    /// Match length in seconds
    pub match_duration_secs: u32,
    /// RNG seed; None picks one from the clock
    pub seed: Option<u64>,
    /// Let the chase heuristic drive player 1 as well
    pub autopilot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            match_duration_secs: MATCH_DURATION_SECS,
            seed: None,
            autopilot: false,
        }
    }
}

impl Settings {
    /// Longest match the settings accept (one hour)
    const MAX_DURATION_SECS: u32 = 3600;

    /// Apply a single `key=value` pair
    pub fn apply(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        match key.to_lowercase().as_str() {
            "volume" | "master_volume" => self.master_volume = parse_volume(key, value)?,
            "sfx" | "sfx_volume" => self.sfx_volume = parse_volume(key, value)?,
            "mute" | "muted" => self.muted = parse_flag(key, value)?,
            "duration" | "match_duration" => {
                let secs: u32 = parse(key, value)?;
                if secs == 0 || secs > Self::MAX_DURATION_SECS {
                    return Err(SettingsError::OutOfRange {
                        key: key.to_string(),
                        value: value.to_string(),
                        range: "1..=3600",
                    });
                }
                self.match_duration_secs = secs;
            }
            "seed" => self.seed = Some(parse(key, value)?),
            "autopilot" | "demo" => self.autopilot = parse_flag(key, value)?,
            _ => return Err(SettingsError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Parse a sequence of `key=value` pairs on top of the defaults
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, SettingsError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut settings = Self::default();
        for pair in pairs {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| SettingsError::Malformed(pair.to_string()))?;
            settings.apply(key.trim(), value.trim())?;
        }
        Ok(settings)
    }

    /// Parse a URL query string (`?a=1&b=2`, leading `?` optional)
    pub fn from_query(query: &str) -> Result<Self, SettingsError> {
        Self::from_pairs(query.trim_start_matches('?').split('&'))
    }

    /// Like [`Settings::from_query`], falling back to defaults on error
    pub fn from_query_or_default(query: &str) -> Self {
        Self::from_query(query).unwrap_or_else(|e| {
            log::warn!("Ignoring settings: {e}");
            Self::default()
        })
    }

    /// Effective cue volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, SettingsError> {
    value.parse().map_err(|_| SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_volume(key: &str, value: &str) -> Result<f32, SettingsError> {
    let vol: f32 = parse(key, value)?;
    if !(0.0..=1.0).contains(&vol) {
        return Err(SettingsError::OutOfRange {
            key: key.to_string(),
            value: value.to_string(),
            range: "0.0..=1.0",
        });
    }
    Ok(vol)
}

fn parse_flag(key: &str, value: &str) -> Result<bool, SettingsError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_is_default() {
        assert_eq!(Settings::from_query("").unwrap(), Settings::default());
        assert_eq!(Settings::from_query("?").unwrap(), Settings::default());
    }

    #[test]
    fn test_query_parsing() {
        let s = Settings::from_query("?volume=0.5&mute=1&duration=30&seed=42&demo=on").unwrap();
        assert_eq!(s.master_volume, 0.5);
        assert!(s.muted);
        assert_eq!(s.match_duration_secs, 30);
        assert_eq!(s.seed, Some(42));
        assert!(s.autopilot);
        assert_eq!(s.effective_volume(), 0.0);
    }

    #[test]
    fn test_cli_pairs() {
        let s = Settings::from_pairs(["sfx=0.25", "autopilot=true"]).unwrap();
        assert_eq!(s.sfx_volume, 0.25);
        assert!(s.autopilot);
        assert!((s.effective_volume() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_unknown_key() {
        assert_eq!(
            Settings::from_query("speed=9"),
            Err(SettingsError::UnknownKey("speed".to_string()))
        );
    }

    #[test]
    fn test_rejects_out_of_range_volume() {
        assert!(matches!(
            Settings::from_query("volume=1.5"),
            Err(SettingsError::OutOfRange { .. })
        ));
        assert!(matches!(
            Settings::from_query("duration=0"),
            Err(SettingsError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_pair() {
        assert_eq!(
            Settings::from_query("mute"),
            Err(SettingsError::Malformed("mute".to_string()))
        );
        assert!(matches!(
            Settings::from_query("mute=maybe"),
            Err(SettingsError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_fallback_to_default() {
        assert_eq!(Settings::from_query_or_default("bogus=1"), Settings::default());
    }
}
