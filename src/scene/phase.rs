//! Shared scroll breakpoints.
//!
//! Every scroll-driven window in the scene is built from these constants so that all layers of a
//! phase cross over in lockstep.

use crate::foundation::core::ScrollOffset;

/// Phase-1 begins decaying (opacity, blur, scale); start of the transition region.
pub const TRANSITION_START: f64 = 800.0;
/// Phase-1 decay is complete.
pub const PHASE1_DECAY_END: f64 = 1150.0;
/// Phase-2 begins fading in.
pub const PHASE2_FADE_START: f64 = 900.0;
/// Phase-2 fully opaque, phase-1 removed from paint; start of the phase-2 region.
pub const TRANSITION_END: f64 = 1200.0;
/// Pointer input hands over from phase-1 to phase-2.
pub const POINTER_HANDOFF: f64 = 1000.0;
/// End of the deep-scroll parallax window.
pub const DEEP_SCROLL_END: f64 = 2500.0;
/// Phase-2 copy starts rising in.
pub const TEXT_REVEAL_START: f64 = 1100.0;
/// Phase-2 copy fully revealed.
pub const TEXT_REVEAL_END: f64 = 1400.0;

/// Hero title fade window.
pub const TITLE_FADE: (f64, f64) = (0.0, 300.0);
/// Hero middle line fade window.
pub const SUBTITLE_MIDDLE_FADE: (f64, f64) = (200.0, 500.0);
/// Hero last line fade window.
pub const SUBTITLE_LAST_FADE: (f64, f64) = (600.0, 900.0);
/// Navigation docking window.
pub const NAV_DOCK: (f64, f64) = (0.0, 400.0);

/// Visual regime selected by scroll offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// `[0, 800)`: the gate scene.
    Phase1Active,
    /// `[800, 1200)`: both phases mounted and crossfading.
    Transition,
    /// `[1200, inf)`: the shore scene.
    Phase2Active,
}

impl Phase {
    /// Total over every `f64`: negatives and NaN map to [`Phase::Phase1Active`].
    pub fn from_offset(scroll: ScrollOffset) -> Self {
        let s = scroll.px();
        if s.is_nan() || s < TRANSITION_START {
            Self::Phase1Active
        } else if s < TRANSITION_END {
            Self::Transition
        } else {
            Self::Phase2Active
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/phase.rs"]
mod tests;
