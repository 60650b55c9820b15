use crate::foundation::math::clamp01;

/// Easing curve applied to a normalized progress value.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// CSS-style `cubic-bezier(x1, y1, x2, y2)` timing curve.
    CubicBezier {
        /// First control point x, in `[0, 1]`.
        x1: f64,
        /// First control point y.
        y1: f64,
        /// Second control point x, in `[0, 1]`.
        x2: f64,
        /// Second control point y.
        y2: f64,
    },
}

impl Ease {
    /// CSS `ease`, the default for timed transitions.
    pub const EASE: Self = Self::bezier(0.25, 0.1, 0.25, 1.0);
    /// CSS `ease-out`.
    pub const EASE_OUT: Self = Self::bezier(0.0, 0.0, 0.58, 1.0);
    /// CSS `ease-in-out`.
    pub const EASE_IN_OUT: Self = Self::bezier(0.42, 0.0, 0.58, 1.0);
    /// Long-tail deceleration used when the loading logo docks into the header.
    pub const DOCK: Self = Self::bezier(0.22, 1.0, 0.36, 1.0);
    /// Symmetric slide used by the menu overlay.
    pub const SLIDE: Self = Self::bezier(0.76, 0.0, 0.24, 1.0);

    /// Build a cubic-bezier curve.
    pub const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Map progress `t` (clamped to `[0, 1]`) through the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = clamp01(t);
        match self {
            Self::Linear => t,
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let u = solve_bezier_param(t, x1.clamp(0.0, 1.0), x2.clamp(0.0, 1.0));
                bezier_axis(u, y1, y2)
            }
        }
    }
}

fn bezier_axis(u: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * u * p1 + 3.0 * inv * u * u * p2 + u * u * u
}

fn bezier_axis_slope(u: f64, p1: f64, p2: f64) -> f64 {
    let inv = 1.0 - u;
    3.0 * inv * inv * p1 + 6.0 * inv * u * (p2 - p1) + 3.0 * u * u * (1.0 - p2)
}

// x(u) is monotonic for control x in [0, 1]: Newton first, bisection when the slope vanishes.
fn solve_bezier_param(x: f64, x1: f64, x2: f64) -> f64 {
    const EPS: f64 = 1e-7;

    let mut u = x;
    for _ in 0..8 {
        let err = bezier_axis(u, x1, x2) - x;
        if err.abs() < EPS {
            return u;
        }
        let slope = bezier_axis_slope(u, x1, x2);
        if slope.abs() < 1e-6 {
            break;
        }
        u = (u - err / slope).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..60 {
        let v = bezier_axis(u, x1, x2);
        if (v - x).abs() < EPS {
            break;
        }
        if v < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    u
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
