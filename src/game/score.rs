use super::Difficulty;

/// What popped out of the hole.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TargetKind {
    Mole,
    /// Rare, higher-value variant.
    Cybermole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointValues {
    pub mole: u32,
    pub cybermole: u32,
}

impl PointValues {
    pub fn base(&self, kind: TargetKind) -> u32 {
        match kind {
            TargetKind::Mole => self.mole,
            TargetKind::Cybermole => self.cybermole,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Scoreboard {
    values: PointValues,
    points: u32,
}

impl Scoreboard {
    pub fn new(values: PointValues) -> Self {
        Self { values, points: 0 }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Award a hit and return the new total.
    pub fn whack(&mut self, kind: TargetKind, difficulty: Difficulty) -> u32 {
        let award = self.values.base(kind).saturating_mul(difficulty.multiplier());
        self.points = self.points.saturating_add(award);
        self.points
    }

    pub fn clear(&mut self) -> u32 {
        self.points = 0;
        self.points
    }
}
