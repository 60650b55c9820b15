use crate::foundation::{
    core::{Length, Translate},
    math::{clamp01, finite_or},
};

/// Smallest scale a layer may carry; a zero or negative scale would collapse it.
pub const MIN_SCALE: f64 = 1e-3;

/// Derived per-layer visual state, recomputed every tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayerStyle {
    /// In `[0, 1]`.
    pub opacity: f64,
    /// Gaussian blur radius in pixels, `>= 0`.
    pub blur_px: f64,
    /// Uniform scale, `> 0`.
    pub scale: f64,
    /// Translation applied after layout.
    pub translate: Translate,
    /// Whether the layer receives pointer events.
    pub pointer_interactive: bool,
    /// Whether the layer is painted at all (independent of opacity).
    pub visible: bool,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl LayerStyle {
    /// Fully opaque, unblurred, unscaled, untranslated, visible, not interactive.
    pub const IDENTITY: Self = Self {
        opacity: 1.0,
        blur_px: 0.0,
        scale: 1.0,
        translate: Translate::ZERO,
        pointer_interactive: false,
        visible: true,
    };

    /// Identity with the given opacity.
    pub fn faded(opacity: f64) -> Self {
        Self {
            opacity,
            ..Self::IDENTITY
        }
        .normalized()
    }

    /// Replace the opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    /// Replace the translation.
    pub fn with_translate(mut self, translate: Translate) -> Self {
        self.translate = translate;
        self
    }

    /// Replace the scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Multiply opacity by `factor` (e.g. an entry fade over a scroll fade).
    pub fn fade_by(mut self, factor: f64) -> Self {
        self.opacity *= factor;
        self.normalized()
    }

    /// Force every field into its declared range. Non-finite values fall back to identity.
    pub fn normalized(mut self) -> Self {
        self.opacity = clamp01(self.opacity);
        self.blur_px = finite_or(self.blur_px, 0.0).max(0.0);
        self.scale = if self.scale.is_finite() {
            self.scale.max(MIN_SCALE)
        } else {
            1.0
        };
        self.translate = Translate {
            x: finite_length(self.translate.x),
            y: finite_length(self.translate.y),
        };
        self
    }
}

fn finite_length(l: Length) -> Length {
    match l {
        Length::Px(v) => Length::Px(finite_or(v, 0.0)),
        Length::Percent(v) => Length::Percent(finite_or(v, 0.0)),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/style.rs"]
mod tests;
