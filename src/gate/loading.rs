use std::time::Duration;

use crate::preload::progress::LoadProgress;

/// Delay between progress reaching 100 and the gate opening.
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Two-state loading gate; only ever moves `Loading -> Ready`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoadingState {
    /// Assets are still settling or the settle delay is running.
    #[default]
    Loading,
    /// The experience is unlocked.
    Ready,
}

/// One-shot deadline measured on the view clock.
///
/// Arming is idempotent: the first `arm` wins and later calls never push the deadline out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SettleTimer {
    delay: Duration,
    deadline: Option<Duration>,
    cancelled: bool,
}

impl SettleTimer {
    /// Unarmed timer firing `delay` after it is armed.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            cancelled: false,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start counting from `now`. Returns `false` if already armed or cancelled.
    pub fn arm(&mut self, now: Duration) -> bool {
        if self.cancelled || self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(now.saturating_add(self.delay));
        true
    }

    /// Drop any pending deadline and refuse to re-arm.
    pub fn cancel(&mut self) {
        self.deadline = None;
        self.cancelled = true;
    }

    /// Whether a deadline is pending.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Whether the timer was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Pending deadline on the view clock.
    pub fn deadline(&self) -> Option<Duration> {
        self.deadline
    }

    /// Whether `now` is at or past the deadline.
    pub fn has_elapsed(&self, now: Duration) -> bool {
        self.deadline.is_some_and(|d| now >= d)
    }
}

/// Watches preload progress and opens once, a settle delay after progress first hits 100.
#[derive(Clone, Debug)]
pub struct LoadingGate {
    state: LoadingState,
    progress: LoadProgress,
    timer: SettleTimer,
    ready_at: Option<Duration>,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(DEFAULT_SETTLE_DELAY)
    }
}

impl LoadingGate {
    /// Closed gate with the given settle delay.
    pub fn new(settle_delay: Duration) -> Self {
        Self {
            state: LoadingState::Loading,
            progress: LoadProgress::ZERO,
            timer: SettleTimer::new(settle_delay),
            ready_at: None,
        }
    }

    /// Record a progress sample taken at `now`. Stale (lower) samples are ignored.
    pub fn observe(&mut self, progress: LoadProgress, now: Duration) {
        if progress > self.progress {
            self.progress = progress;
        }
        if self.state == LoadingState::Loading
            && self.progress.is_complete()
            && self.timer.arm(now)
        {
            tracing::debug!(at = ?now, delay = ?self.timer.delay(), "loading gate armed");
        }
    }

    /// Advance the clock. Returns the ready instant on the single call that opens the gate.
    pub fn poll(&mut self, now: Duration) -> Option<Duration> {
        if self.state == LoadingState::Ready || !self.timer.has_elapsed(now) {
            return None;
        }
        self.state = LoadingState::Ready;
        self.ready_at = Some(now);
        tracing::info!(at = ?now, "loading gate ready");
        Some(now)
    }

    /// Cancel a pending settle timer; the gate then stays closed.
    pub fn cancel(&mut self) {
        if self.state == LoadingState::Loading && self.timer.is_armed() {
            tracing::debug!("loading gate settle timer cancelled");
        }
        self.timer.cancel();
    }

    /// Current state.
    pub fn state(&self) -> LoadingState {
        self.state
    }

    /// Whether the gate is open.
    pub fn is_ready(&self) -> bool {
        self.state == LoadingState::Ready
    }

    /// Highest progress observed.
    pub fn progress(&self) -> LoadProgress {
        self.progress
    }

    /// View-clock instant at which the gate opened.
    pub fn ready_at(&self) -> Option<Duration> {
        self.ready_at
    }

    /// Time since the gate opened, `None` while loading.
    pub fn since_ready(&self, now: Duration) -> Option<Duration> {
        self.ready_at.map(|at| now.saturating_sub(at))
    }

    /// Settle timer state.
    pub fn timer(&self) -> &SettleTimer {
        &self.timer
    }
}

#[cfg(test)]
#[path = "../../tests/unit/gate/loading.rs"]
mod tests;
