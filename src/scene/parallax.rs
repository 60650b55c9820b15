use crate::{
    animation::interp::Mapping,
    foundation::core::{PointerOffset, Vec2},
};

/// Pointer-derived offsets for one tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParallaxOffsets {
    /// Translation of the 3D gate layer, in pixels.
    pub gate: Vec2,
    /// Translation shared by the background layers, in pixels.
    pub background: Vec2,
    /// Rotation input handed to the 3D renderer (the smoothed pointer offset itself).
    pub scene_rotation: PointerOffset,
}

impl ParallaxOffsets {
    /// No displacement anywhere.
    pub const NEUTRAL: Self = Self {
        gate: Vec2::ZERO,
        background: Vec2::ZERO,
        scene_rotation: PointerOffset::NEUTRAL,
    };
}

impl Default for ParallaxOffsets {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Two linear maps off one smoothed pointer signal: a large one for the gate and a small one for
/// the backdrop. Moving the pointer right pushes layers left.
#[derive(Clone, Debug)]
pub struct ParallaxEngine {
    gate_x: Mapping<f64>,
    gate_y: Mapping<f64>,
    background_x: Mapping<f64>,
    background_y: Mapping<f64>,
}

impl Default for ParallaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallaxEngine {
    /// Gate travels ±60 × ±25 px, backdrop ±15 × ±5 px.
    pub fn new() -> Self {
        Self::with_ranges(Vec2::new(60.0, 25.0), Vec2::new(15.0, 5.0))
    }

    /// Custom half-ranges per axis for the gate and the backdrop.
    pub fn with_ranges(gate: Vec2, background: Vec2) -> Self {
        let axis = |half: f64| Mapping::window(-0.5, 0.5, half, -half);
        Self {
            gate_x: axis(gate.x),
            gate_y: axis(gate.y),
            background_x: axis(background.x),
            background_y: axis(background.y),
        }
    }

    /// Offsets for `smoothed`. Neutral whenever phase-1 is not taking pointer input.
    pub fn map_pointer(&self, smoothed: PointerOffset, phase1_interactive: bool) -> ParallaxOffsets {
        if !phase1_interactive {
            return ParallaxOffsets::NEUTRAL;
        }
        ParallaxOffsets {
            gate: Vec2::new(self.gate_x.sample(smoothed.x), self.gate_y.sample(smoothed.y)),
            background: Vec2::new(
                self.background_x.sample(smoothed.x),
                self.background_y.sample(smoothed.y),
            ),
            scene_rotation: smoothed,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/parallax.rs"]
mod tests;
