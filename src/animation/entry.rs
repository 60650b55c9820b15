use std::time::Duration;

use crate::animation::ease::Ease;

/// One-shot delayed tween keyed off a trigger instant.
///
/// Progress is a pure function of time since the trigger, so re-rendering never replays it; the
/// only way to restart is a new trigger instant, which one-way gates never produce.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntryTransition {
    /// Wait after the trigger before motion starts.
    pub delay: Duration,
    /// Length of the motion itself.
    pub duration: Duration,
    /// Curve applied to the normalized progress.
    pub ease: Ease,
}

impl EntryTransition {
    /// Build a transition.
    pub const fn new(delay: Duration, duration: Duration, ease: Ease) -> Self {
        Self {
            delay,
            duration,
            ease,
        }
    }

    /// Eased progress in `[0, 1]`; `None` (not yet triggered) is 0.
    pub fn progress(&self, since_trigger: Option<Duration>) -> f64 {
        let Some(elapsed) = since_trigger else {
            return 0.0;
        };
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        self.ease
            .apply(active.as_secs_f64() / self.duration.as_secs_f64())
    }

    /// Whether the transition has fully played.
    pub fn is_done(&self, since_trigger: Option<Duration>) -> bool {
        since_trigger.is_some_and(|e| e >= self.delay + self.duration)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/entry.rs"]
mod tests;
