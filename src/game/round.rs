//! Browser-free state of one round: which hole is up, the score and the clock.
//! The runtime in `game/mod.rs` owns a `Round` and mirrors its decisions onto the page.

use super::{Countdown, Difficulty, HoleChooser, PointValues, Scoreboard, TargetKind};
use crate::config::GameConfig;
use crate::rng::RandomSource;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Running,
    Stopped,
}

/// A target shown in `hole` for `delay_ms`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub hole: usize,
    pub delay_ms: u32,
    pub kind: TargetKind,
}

/// What the scheduler does after a target hides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    ShowUp,
    Stop,
}

#[derive(Clone, Debug)]
pub struct Round {
    hole_count: usize,
    cybermole_probability: f64,
    difficulty: Difficulty,
    phase: Phase,
    score: Scoreboard,
    countdown: Countdown,
    chooser: HoleChooser,
    revealed: Option<Reveal>,
    // set once the current reveal has been scored
    whacked: bool,
}

impl Round {
    pub fn new(hole_count: usize, config: &GameConfig) -> Self {
        Self {
            hole_count,
            cybermole_probability: config.cybermole_probability,
            difficulty: config.difficulty,
            phase: Phase::Idle,
            score: Scoreboard::new(PointValues {
                mole: config.mole_points,
                cybermole: config.cybermole_points,
            }),
            countdown: Countdown::default(),
            chooser: HoleChooser::new(),
            revealed: None,
            whacked: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score.points()
    }

    pub fn remaining(&self) -> u32 {
        self.countdown.remaining()
    }

    pub fn revealed(&self) -> Option<Reveal> {
        self.revealed
    }

    /// Difficulty is locked while a round runs.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.is_running() {
            return false;
        }
        self.difficulty = difficulty;
        true
    }

    pub fn start(&mut self, duration_secs: u32) {
        self.score.clear();
        self.countdown.set_duration(duration_secs);
        self.chooser.reset();
        self.revealed = None;
        self.whacked = false;
        self.phase = Phase::Running;
    }

    /// Pick the next hole, how long it stays up and what pops out.
    pub fn show_up(&mut self, rng: &mut impl RandomSource) -> Option<Reveal> {
        if !self.is_running() {
            return None;
        }
        let hole = self.chooser.choose(self.hole_count, rng)?;
        let delay_ms = self.difficulty.delay_ms(rng);
        let kind = if rng.next_f64() < self.cybermole_probability {
            TargetKind::Cybermole
        } else {
            TargetKind::Mole
        };
        let reveal = Reveal {
            hole,
            delay_ms,
            kind,
        };
        self.revealed = Some(reveal);
        self.whacked = false;
        Some(reveal)
    }

    /// The current target went back down. Keep going while time remains.
    pub fn hide(&mut self) -> NextStep {
        self.revealed = None;
        if self.is_running() && !self.countdown.expired() {
            NextStep::ShowUp
        } else {
            self.stop();
            NextStep::Stop
        }
    }

    /// Player clicked the target in `hole`. Returns the new score if it counted.
    pub fn whack(&mut self, hole: usize) -> Option<u32> {
        if !self.is_running() || self.whacked {
            return None;
        }
        let reveal = self.revealed.filter(|r| r.hole == hole)?;
        self.whacked = true;
        Some(self.score.whack(reveal.kind, self.difficulty))
    }

    pub fn tick(&mut self) -> u32 {
        if self.is_running() {
            self.countdown.tick();
        }
        self.countdown.remaining()
    }

    pub fn time_expired(&self) -> bool {
        self.countdown.expired()
    }

    /// End the round. Returns the target still showing, if any.
    pub fn stop(&mut self) -> Option<Reveal> {
        self.phase = Phase::Stopped;
        self.revealed.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Xorshift64;

    struct Scripted(Vec<f64>);

    impl RandomSource for Scripted {
        fn next_f64(&mut self) -> f64 {
            if self.0.is_empty() { 0.5 } else { self.0.remove(0) }
        }
    }

    fn round() -> Round {
        Round::new(9, &GameConfig::default())
    }

    #[test]
    fn test_idle_round_does_nothing() {
        let mut r = round();
        assert_eq!(r.phase(), Phase::Idle);
        assert_eq!(r.show_up(&mut Xorshift64::seeded(1)), None);
        assert_eq!(r.whack(0), None);
        assert_eq!(r.tick(), 0);
    }

    #[test]
    fn test_show_up_rolls_hole_delay_kind() {
        let mut r = round();
        r.start(10);
        // hole: 0.0 -> 0; easy delay consumes nothing; kind: 0.05 < 0.1 -> cybermole
        let reveal = r.show_up(&mut Scripted(vec![0.0, 0.05])).unwrap();
        assert_eq!(
            reveal,
            Reveal {
                hole: 0,
                delay_ms: 1500,
                kind: TargetKind::Cybermole
            }
        );
        assert_eq!(r.revealed(), Some(reveal));

        r.hide();
        let reveal = r.show_up(&mut Scripted(vec![0.0, 0.1])).unwrap();
        assert_eq!(reveal.hole, 1);
        assert_eq!(reveal.kind, TargetKind::Mole);
    }

    #[test]
    fn test_whack_scores_once_per_reveal() {
        let mut r = round();
        assert!(r.set_difficulty(Difficulty::Normal));
        r.start(10);
        let reveal = r.show_up(&mut Scripted(vec![0.5, 0.9])).unwrap();
        assert_eq!(reveal.kind, TargetKind::Mole);
        assert_eq!(r.whack((reveal.hole + 1) % 9), None);
        assert_eq!(r.whack(reveal.hole), Some(2));
        assert_eq!(r.whack(reveal.hole), None);
        assert_eq!(r.score(), 2);
    }

    #[test]
    fn test_hide_stops_when_time_is_up() {
        let mut r = round();
        r.start(1);
        r.show_up(&mut Xorshift64::seeded(2)).unwrap();
        assert_eq!(r.hide(), NextStep::ShowUp);
        r.show_up(&mut Xorshift64::seeded(3)).unwrap();
        assert_eq!(r.tick(), 0);
        assert!(r.time_expired());
        assert_eq!(r.hide(), NextStep::Stop);
        assert_eq!(r.phase(), Phase::Stopped);
    }

    #[test]
    fn test_stop_returns_visible_target() {
        let mut r = round();
        r.start(5);
        let reveal = r.show_up(&mut Xorshift64::seeded(4)).unwrap();
        assert_eq!(r.stop(), Some(reveal));
        assert_eq!(r.stop(), None);
        assert_eq!(r.whack(reveal.hole), None);
    }

    #[test]
    fn test_difficulty_locked_while_running() {
        let mut r = round();
        r.start(5);
        assert!(!r.set_difficulty(Difficulty::Hard));
        assert_eq!(r.difficulty(), Difficulty::Easy);
        r.stop();
        assert!(r.set_difficulty(Difficulty::Hard));
    }

    #[test]
    fn test_restart_clears_score() {
        let mut r = round();
        r.start(5);
        let reveal = r.show_up(&mut Xorshift64::seeded(8)).unwrap();
        r.whack(reveal.hole).unwrap();
        r.stop();
        r.start(7);
        assert_eq!(r.score(), 0);
        assert_eq!(r.remaining(), 7);
        assert_eq!(r.revealed(), None);
    }
}
