/// Aggregate preload progress as a whole percentage in `[0, 100]`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct LoadProgress(u8);

impl LoadProgress {
    /// Nothing settled yet.
    pub const ZERO: Self = Self(0);
    /// Every resource settled.
    pub const COMPLETE: Self = Self(100);

    /// `round(100 * settled / total)`, held at 99 until the last resource settles. An empty
    /// manifest counts as complete.
    pub fn from_counts(settled: usize, total: usize) -> Self {
        if total == 0 {
            return Self::COMPLETE;
        }
        let settled = settled.min(total);
        // Integer form of round-half-up.
        let pct = (200 * settled + total) / (2 * total);
        if settled < total {
            return Self(pct.min(99) as u8);
        }
        Self(pct as u8)
    }

    /// Clamp an arbitrary percentage.
    pub fn from_percent(pct: u8) -> Self {
        Self(pct.min(100))
    }

    /// Percentage value.
    pub fn percent(self) -> u8 {
        self.0
    }

    /// Whether progress reached 100.
    pub fn is_complete(self) -> bool {
        self.0 >= 100
    }
}

/// Completion counter for a fixed set of resources.
///
/// Each resource settles exactly once, whether it loaded or failed; repeated or out-of-range
/// settlements are ignored so progress never moves backward or double counts.
#[derive(Clone, Debug)]
pub struct PreloadBarrier {
    settled: Vec<bool>,
    completed: usize,
    failed: usize,
}

impl PreloadBarrier {
    /// Barrier over `total` resources.
    pub fn new(total: usize) -> Self {
        Self {
            settled: vec![false; total],
            completed: 0,
            failed: 0,
        }
    }

    /// Resource count.
    pub fn total(&self) -> usize {
        self.settled.len()
    }

    /// Resources settled so far.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Settled resources that failed.
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Current progress.
    pub fn progress(&self) -> LoadProgress {
        LoadProgress::from_counts(self.completed, self.total())
    }

    /// Whether every resource settled.
    pub fn is_complete(&self) -> bool {
        self.completed == self.total()
    }

    /// Settle resource `index`. Returns the new progress on the first settlement, `None`
    /// otherwise.
    pub fn settle(&mut self, index: usize, ok: bool) -> Option<LoadProgress> {
        let slot = self.settled.get_mut(index)?;
        if *slot {
            return None;
        }
        *slot = true;
        self.completed += 1;
        if !ok {
            self.failed += 1;
        }
        Some(self.progress())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preload/progress.rs"]
mod tests;
