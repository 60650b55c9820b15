use crate::foundation::error::{OdysseyError, OdysseyResult};

pub use kurbo::{Point, Vec2};

/// Vertical scroll position in device pixels from the top of the document.
///
/// The host owns this value; the engine only samples it. Any `f64` is accepted by the mapping
/// layer, so rubber-band overscroll or absurd values never fail a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize, serde::Deserialize)]
pub struct ScrollOffset(pub f64);

impl ScrollOffset {
    /// Top of the document.
    pub const ZERO: Self = Self(0.0);

    /// Sanitize a raw host sample: non-finite collapses to zero, negative overscroll to the top.
    pub fn from_host(px: f64) -> Self {
        if px.is_nan() {
            return Self::ZERO;
        }
        Self(px.max(0.0))
    }

    /// Offset in pixels.
    pub fn px(self) -> f64 {
        self.0
    }
}

/// Pointer position relative to the viewport center, normalized to `[-0.5, 0.5]` per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerOffset {
    /// Horizontal offset; negative is left of center.
    pub x: f64,
    /// Vertical offset; negative is above center.
    pub y: f64,
}

impl PointerOffset {
    /// Pointer resting at the viewport center.
    pub const NEUTRAL: Self = Self { x: 0.0, y: 0.0 };

    /// Build a clamped offset from arbitrary components.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_half(x),
            y: clamp_half(y),
        }
    }

    /// Normalize a client-space pointer position against the viewport.
    ///
    /// A degenerate viewport yields [`PointerOffset::NEUTRAL`].
    pub fn from_client(client: Point, viewport: Viewport) -> Self {
        if !viewport.is_usable() {
            return Self::NEUTRAL;
        }
        Self::new(
            client.x / viewport.width - 0.5,
            client.y / viewport.height - 0.5,
        )
    }

    /// Offset as a vector.
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

fn clamp_half(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(-0.5, 0.5) }
}

/// Host viewport size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Build a validated viewport.
    pub fn new(width: f64, height: f64) -> OdysseyResult<Self> {
        let vp = Self { width, height };
        if !vp.is_usable() {
            return Err(OdysseyError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(vp)
    }

    /// Whether both extents are finite and positive.
    pub fn is_usable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Narrow-layout check used for every mobile/desktop branch.
    pub fn is_mobile(self, breakpoint_px: f64) -> bool {
        self.width < breakpoint_px
    }
}

/// A length with its unit, as consumed by the host's layout system.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "unit", content = "value", rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the layer's own extent on that axis.
    Percent(f64),
}

impl Length {
    /// Zero pixels.
    pub const ZERO: Self = Self::Px(0.0);

    /// Numeric value regardless of unit.
    pub fn value(self) -> f64 {
        match self {
            Self::Px(v) | Self::Percent(v) => v,
        }
    }

    /// Whether both lengths share a unit.
    pub fn same_unit(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Px(_), Self::Px(_)) | (Self::Percent(_), Self::Percent(_))
        )
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::ZERO
    }
}

/// 2D translation with per-axis units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Translate {
    /// Horizontal component.
    pub x: Length,
    /// Vertical component.
    pub y: Length,
}

impl Translate {
    /// No translation.
    pub const ZERO: Self = Self {
        x: Length::ZERO,
        y: Length::ZERO,
    };

    /// Pixel translation from a vector.
    pub fn px(v: Vec2) -> Self {
        Self {
            x: Length::Px(v.x),
            y: Length::Px(v.y),
        }
    }

    /// Vertical-only translation.
    pub fn y(y: Length) -> Self {
        Self {
            x: Length::ZERO,
            y,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
