use std::time::Duration;

use crate::{animation::sequence::PingPong, preload::progress::LoadProgress};

/// Hover state of the logo sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LogoAnimState {
    /// Showing the static frame.
    #[default]
    Idle,
    /// Sweeping through frames while hovered.
    Playing,
    /// Pointer left; finishing the current sweep.
    Stopping,
}

/// What the logo shows this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LogoRender {
    /// The single static logo image.
    Static,
    /// 1-based frame of the animation sequence.
    Frame(u32),
}

/// Hover-driven frame sequence that only halts at a cycle boundary.
///
/// Cycle boundaries are derived from the view clock: every `cycle` since playback started. A
/// sweep interrupted by pointer-leave keeps running until the next boundary, so the sequence
/// always lands back on its first frame before going static.
#[derive(Clone, Debug)]
pub struct LogoAnimator {
    sequence: PingPong,
    state: LogoAnimState,
    started_at: Duration,
    boundaries_seen: u64,
}

impl LogoAnimator {
    /// Idle animator over `sequence`.
    pub fn new(sequence: PingPong) -> Self {
        Self {
            sequence,
            state: LogoAnimState::Idle,
            started_at: Duration::ZERO,
            boundaries_seen: 0,
        }
    }

    /// Current state.
    pub fn state(&self) -> LogoAnimState {
        self.state
    }

    /// Frame sequence being played.
    pub fn sequence(&self) -> PingPong {
        self.sequence
    }

    /// Pointer entered the logo. Ignored until the loading gate is open.
    ///
    /// Boundaries crossed since the last tick are delivered first, so a sweep that already
    /// halted restarts from its first frame.
    pub fn pointer_enter(&mut self, ready: bool, now: Duration) {
        if !ready {
            return;
        }
        self.advance(now);
        match self.state {
            LogoAnimState::Idle => {
                self.started_at = now;
                self.boundaries_seen = 0;
                self.transition(LogoAnimState::Playing);
            }
            LogoAnimState::Stopping => self.transition(LogoAnimState::Playing),
            LogoAnimState::Playing => {}
        }
    }

    /// Pointer left the logo at `now`; the sweep in progress at `now` is allowed to finish.
    pub fn pointer_leave(&mut self, now: Duration) {
        self.advance(now);
        if self.state == LogoAnimState::Playing {
            self.transition(LogoAnimState::Stopping);
        }
    }

    /// A sweep just completed.
    pub fn cycle_boundary(&mut self) {
        if self.state == LogoAnimState::Stopping {
            self.transition(LogoAnimState::Idle);
        }
    }

    /// Deliver every cycle boundary crossed up to `now`. Returns how many were delivered.
    pub fn advance(&mut self, now: Duration) -> u64 {
        if self.state == LogoAnimState::Idle {
            return 0;
        }
        let completed = self
            .sequence
            .cycles_completed(now.saturating_sub(self.started_at));
        let mut delivered = 0;
        while self.boundaries_seen < completed && self.state != LogoAnimState::Idle {
            self.boundaries_seen += 1;
            delivered += 1;
            self.cycle_boundary();
        }
        delivered
    }

    /// Image to show at `now`. Static while the gate is closed or while idle.
    pub fn render(&self, ready: bool, now: Duration) -> LogoRender {
        if !ready || self.state == LogoAnimState::Idle {
            return LogoRender::Static;
        }
        LogoRender::Frame(
            self.sequence
                .frame_at(now.saturating_sub(self.started_at)),
        )
    }

    fn transition(&mut self, to: LogoAnimState) {
        tracing::debug!(from = ?self.state, ?to, "logo animator");
        self.state = to;
    }
}

/// Top clip inset (percent of height) for the loading fill: 100 hides everything, 0 reveals it.
pub fn reveal_inset_top_pct(progress: LoadProgress, ready: bool) -> f64 {
    if ready {
        0.0
    } else {
        100.0 - f64::from(progress.percent())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/logo/animator.rs"]
mod tests;
