use serde::{Deserialize, Serialize};

use crate::rng::RandomSource;

pub const EASY_DELAY_MS: u32 = 1500;
pub const NORMAL_DELAY_MS: u32 = 1000;
pub const HARD_DELAY_MIN_MS: u32 = 600;
pub const HARD_DELAY_MAX_MS: u32 = 1200;

/// Named setting controlling how long targets stay up and what they are worth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    #[serde(alias = "medium")]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse a radio-button value. Unknown labels fall back to `Easy`.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "normal" | "medium" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Easy,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// How long a revealed target stays up, in milliseconds.
    pub fn delay_ms(self, rng: &mut impl RandomSource) -> u32 {
        match self {
            Difficulty::Easy => EASY_DELAY_MS,
            Difficulty::Normal => NORMAL_DELAY_MS,
            Difficulty::Hard => rng.random_integer(HARD_DELAY_MIN_MS, HARD_DELAY_MAX_MS),
        }
    }

    /// Score multiplier: easy x1, normal (label "normal" or "medium") x2, hard x4.
    /// Unrecognised labels parse as easy, so they score x1.
    pub fn multiplier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::Hard => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xorshift64;

    #[test]
    fn test_fixed_delays() {
        let mut rng = Xorshift64::seeded(3);
        assert_eq!(Difficulty::Easy.delay_ms(&mut rng), 1500);
        assert_eq!(Difficulty::Normal.delay_ms(&mut rng), 1000);
    }

    #[test]
    fn test_hard_delay_range() {
        let mut rng = Xorshift64::seeded(99);
        for _ in 0..1_000 {
            let d = Difficulty::Hard.delay_ms(&mut rng);
            assert!((600..=1200).contains(&d), "hard delay {d}");
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Difficulty::from_label("hard"), Difficulty::Hard);
        assert_eq!(Difficulty::from_label(" Normal "), Difficulty::Normal);
        assert_eq!(Difficulty::from_label("medium"), Difficulty::Normal);
        assert_eq!(Difficulty::from_label("nightmare"), Difficulty::Easy);
        assert_eq!(Difficulty::from_label(""), Difficulty::Easy);
        for d in [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard] {
            assert_eq!(Difficulty::from_label(d.label()), d);
        }
    }

    #[test]
    fn test_serde_alias() {
        let d: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(d, Difficulty::Normal);
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
    }
}
