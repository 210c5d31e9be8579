//! Running score kept by the engine.

/// Score counters. `score` only ever grows, one point per sliced fruit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u32,
    pub spawned: u32,
    pub sliced: u32,
    pub missed: u32,
}

impl ScoreState {
    /// Record a slice. Saturates instead of wrapping.
    pub fn record_slice(&mut self) {
        self.score = self.score.saturating_add(1);
        self.sliced = self.sliced.saturating_add(1);
    }

    pub fn record_miss(&mut self) {
        self.missed = self.missed.saturating_add(1);
    }
}
