/// Seconds left in the round; ticked once per second by an interval callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
}

impl Countdown {
    pub fn set_duration(&mut self, secs: u32) -> u32 {
        self.remaining = secs;
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }

    /// One second elapsed. Never goes below zero.
    pub fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}
