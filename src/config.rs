//! Game configuration. Every field has a default, so `{}` is a valid config and
//! JS only needs to pass the keys it wants to override (camelCase).

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};
use crate::game::Difficulty;

pub const DEFAULT_DURATION_SECS: u32 = 10;
pub const DEFAULT_CYBERMOLE_PROBABILITY: f64 = 0.1;
pub const STANDARD_MOLE_POINTS: u32 = 1;
pub const CYBER_MOLE_POINTS: u32 = 3;

pub const DEFAULT_HIT_SOUND_URL: &str =
    "https://github.com/gabrielsanchez/erddiagram/blob/main/hit.mp3?raw=true";
pub const DEFAULT_SONG_URL: &str =
    "https://github.com/gabrielsanchez/erddiagram/blob/main/molesong.mp3?raw=true";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    /// Round length in seconds.
    pub duration_secs: u32,
    /// Chance that a reveal shows a cybermole instead of a plain mole.
    pub cybermole_probability: f64,
    pub mole_points: u32,
    pub cybermole_points: u32,
    /// Used until the player changes the difficulty radios.
    pub difficulty: Difficulty,
    /// `None` disables the sound.
    pub hit_sound_url: Option<String>,
    pub song_url: Option<String>,
    pub log_level: LevelFilter,
    pub page: PageSelectors,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            cybermole_probability: DEFAULT_CYBERMOLE_PROBABILITY,
            mole_points: STANDARD_MOLE_POINTS,
            cybermole_points: CYBER_MOLE_POINTS,
            difficulty: Difficulty::Easy,
            hit_sound_url: Some(DEFAULT_HIT_SOUND_URL.to_string()),
            song_url: Some(DEFAULT_SONG_URL.to_string()),
            log_level: LevelFilter::Info,
            page: PageSelectors::default(),
        }
    }
}

/// CSS selectors and class names of the pre-existing page elements.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageSelectors {
    pub start_button: String,
    pub score: String,
    pub timer: String,
    pub holes: String,
    /// Looked up inside each hole.
    pub mole: String,
    pub difficulty_radios: String,
    pub show_class: String,
    pub cybermole_class: String,
}

impl Default for PageSelectors {
    fn default() -> Self {
        Self {
            start_button: "#start".into(),
            score: "#score".into(),
            timer: "#timer".into(),
            holes: ".hole".into(),
            mole: ".mole".into(),
            difficulty_radios: "input[name=\"difficulty\"]".into(),
            show_class: "show".into(),
            cybermole_class: "cybermole".into(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.duration_secs == 0 {
            return Err(invalid("durationSecs must be positive"));
        }
        if !(0.0..=1.0).contains(&self.cybermole_probability) {
            return Err(invalid("cybermoleProbability must be within [0, 1]"));
        }
        if self.mole_points == 0 || self.cybermole_points == 0 {
            return Err(invalid("point values must be positive"));
        }
        let selectors = [
            &self.page.start_button,
            &self.page.score,
            &self.page.timer,
            &self.page.holes,
            &self.page.mole,
            &self.page.difficulty_radios,
            &self.page.show_class,
            &self.page.cybermole_class,
        ];
        if selectors.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("page selectors and class names must not be empty"));
        }
        Ok(())
    }
}

fn invalid(message: &str) -> GameError {
    GameError::InvalidConfig {
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let cfg = GameConfig::from_json("{}").unwrap();
        assert_eq!(cfg, GameConfig::default());
        assert_eq!(cfg.duration_secs, 10);
        assert_eq!(cfg.page.holes, ".hole");
    }

    #[test]
    fn test_partial_override() {
        let cfg = GameConfig::from_json(
            r##"{"durationSecs": 30, "difficulty": "hard", "songUrl": null, "page": {"timer": "#clock"}}"##,
        )
        .unwrap();
        assert_eq!(cfg.duration_secs, 30);
        assert_eq!(cfg.difficulty, Difficulty::Hard);
        assert_eq!(cfg.song_url, None);
        assert_eq!(cfg.page.timer, "#clock");
        assert_eq!(cfg.page.score, "#score");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{"durationSecs": 0}"#),
            Err(GameError::InvalidConfig { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"cybermoleProbability": 1.5}"#),
            Err(GameError::InvalidConfig { .. })
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{"page": {"mole": " "}}"#),
            Err(GameError::InvalidConfig { .. })
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(GameError::ConfigParse(_))
        ));
    }
}
