use crate::foundation::core::ScrollOffset;

/// Latest host scroll position, sampled once per tick.
///
/// Unsmoothed; phase boundaries are read straight off this value.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScrollTracker {
    latest: ScrollOffset,
    events: u64,
}

impl ScrollTracker {
    /// Tracker resting at the top of the document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a host scroll event.
    pub fn on_scroll(&mut self, px: f64) {
        self.latest = ScrollOffset::from_host(px);
        self.events += 1;
    }

    /// The single per-tick sample every layer reads.
    pub fn sample(&self) -> ScrollOffset {
        self.latest
    }

    /// Number of scroll events observed since mount.
    pub fn events(&self) -> u64 {
        self.events
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/scroll.rs"]
mod tests;
