use std::time::Duration;

use crate::{
    animation::{ease::Ease, sequence::LoopKeyframes},
    foundation::core::Length,
    foundation::error::OdysseyResult,
    scene::layer::AmbientMotion,
};

/// The two endless loops of the intro: the volcano glow pulse and the water sway.
#[derive(Clone, Debug)]
pub struct AmbientLoops {
    glow_opacity: LoopKeyframes,
    glow_scale: LoopKeyframes,
    sway_x: LoopKeyframes,
    sway_scale: LoopKeyframes,
}

impl AmbientLoops {
    /// Glow pulses over 3 s, water sways over 8 s.
    pub fn new() -> OdysseyResult<Self> {
        let glow = Duration::from_secs(3);
        let sway = Duration::from_secs(8);
        Ok(Self {
            glow_opacity: LoopKeyframes::even(glow, vec![0.4, 0.8, 0.4], Ease::EASE_IN_OUT)?,
            glow_scale: LoopKeyframes::even(glow, vec![1.0, 1.2, 1.0], Ease::EASE_IN_OUT)?,
            sway_x: LoopKeyframes::even(sway, vec![-1.0, 1.0, -1.0], Ease::EASE_IN_OUT)?,
            sway_scale: LoopKeyframes::even(sway, vec![1.0, 1.05, 1.0], Ease::EASE_IN_OUT)?,
        })
    }

    /// Volcano glow at `elapsed` since mount.
    pub fn glow(&self, elapsed: Duration) -> AmbientMotion {
        AmbientMotion {
            opacity: self.glow_opacity.sample(elapsed),
            scale: self.glow_scale.sample(elapsed),
            translate_x: Length::ZERO,
        }
    }

    /// Water sway at `elapsed` since mount.
    pub fn sway(&self, elapsed: Duration) -> AmbientMotion {
        AmbientMotion {
            opacity: 1.0,
            scale: self.sway_scale.sample(elapsed),
            translate_x: Length::Percent(self.sway_x.sample(elapsed)),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/ambient.rs"]
mod tests;
