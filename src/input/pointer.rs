use std::time::Duration;

use crate::{
    animation::spring::{SpringConfig, SpringState},
    foundation::core::{Point, PointerOffset, Viewport},
};

/// Raw pointer samples fed through a per-axis spring.
///
/// Consumers only ever see [`PointerTracker::smoothed`]. When the host has no pointer support
/// the tracker stays at [`PointerOffset::NEUTRAL`].
#[derive(Clone, Debug)]
pub struct PointerTracker {
    spring: SpringConfig,
    raw: PointerOffset,
    x: SpringState,
    y: SpringState,
    available: bool,
}

impl PointerTracker {
    /// Tracker at rest in the viewport center.
    pub fn new(spring: SpringConfig) -> Self {
        Self {
            spring,
            raw: PointerOffset::NEUTRAL,
            x: SpringState::at_rest(0.0),
            y: SpringState::at_rest(0.0),
            available: true,
        }
    }

    /// Mark pointer input as (un)available. Losing it snaps back to neutral.
    pub fn set_available(&mut self, available: bool) {
        self.available = available;
        if !available {
            self.reset();
        }
    }

    /// Whether pointer events are being delivered.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Record a pointer-move event in client coordinates.
    pub fn on_pointer_move(&mut self, client: Point, viewport: Viewport) {
        if !self.available {
            return;
        }
        self.raw = PointerOffset::from_client(client, viewport);
        self.x.set_target(self.raw.x);
        self.y.set_target(self.raw.y);
    }

    /// Advance the smoother by the time since the previous tick.
    pub fn tick(&mut self, dt: Duration) {
        let dt = dt.as_secs_f64();
        self.x.step(&self.spring, dt);
        self.y.step(&self.spring, dt);
    }

    /// Last raw (unsmoothed) sample.
    pub fn raw(&self) -> PointerOffset {
        self.raw
    }

    /// Smoothed offset, clamped to the normalized range.
    pub fn smoothed(&self) -> PointerOffset {
        if !self.available {
            return PointerOffset::NEUTRAL;
        }
        PointerOffset::new(self.x.position, self.y.position)
    }

    /// Whether both axes have come to rest.
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }

    /// Drop all motion and return to neutral.
    pub fn reset(&mut self) {
        self.raw = PointerOffset::NEUTRAL;
        self.x = SpringState::at_rest(0.0);
        self.y = SpringState::at_rest(0.0);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;
