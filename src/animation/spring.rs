use crate::foundation::error::{OdysseyError, OdysseyResult};

/// Physical spring parameters (unit mass by default).
///
/// The defaults (`stiffness = 150`, `damping = 25`) give a damping ratio just above 1: a step
/// input settles in roughly 450 ms without overshoot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Restoring force per unit displacement.
    pub stiffness: f64,
    /// Velocity-proportional drag.
    pub damping: f64,
    /// Moving mass.
    pub mass: f64,
    /// Displacement below which the spring may snap to its target.
    pub rest_delta: f64,
    /// Speed below which the spring may snap to its target.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 150.0,
            damping: 25.0,
            mass: 1.0,
            rest_delta: 1e-4,
            rest_speed: 1e-3,
        }
    }
}

impl SpringConfig {
    /// Reject non-physical parameters.
    pub fn validate(&self) -> OdysseyResult<()> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.stiffness) || !positive(self.mass) {
            return Err(OdysseyError::animation(
                "spring stiffness and mass must be finite and > 0",
            ));
        }
        if !self.damping.is_finite() || self.damping < 0.0 {
            return Err(OdysseyError::animation(
                "spring damping must be finite and >= 0",
            ));
        }
        if !self.rest_delta.is_finite() || self.rest_delta < 0.0 {
            return Err(OdysseyError::animation("spring rest_delta must be >= 0"));
        }
        if !self.rest_speed.is_finite() || self.rest_speed < 0.0 {
            return Err(OdysseyError::animation("spring rest_speed must be >= 0"));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// `c / (2 * sqrt(k * m))`; 1 is critical damping.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// One spring axis: position chasing `target`.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringState {
    /// Current smoothed value.
    pub position: f64,
    /// Current rate of change per second.
    pub velocity: f64,
    /// Value the spring is pulled toward.
    pub target: f64,
}

impl SpringState {
    /// A spring sitting still at `value`.
    pub fn at_rest(value: f64) -> Self {
        Self {
            position: value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Retarget without disturbing position or velocity. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Whether the spring is at its target with no residual motion.
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance by `dt_secs` using the closed-form solution of the damped oscillator, so the
    /// result does not depend on how the host slices time.
    pub fn step(&mut self, cfg: &SpringConfig, dt_secs: f64) {
        if !dt_secs.is_finite() || dt_secs <= 0.0 || self.is_settled() {
            return;
        }

        let omega = cfg.natural_frequency();
        let zeta = cfg.damping_ratio();
        let x0 = self.position - self.target;
        let v0 = self.velocity;
        let t = dt_secs;

        let (x, v) = if (zeta - 1.0).abs() < 1e-9 {
            let c = v0 + omega * x0;
            let e = (-omega * t).exp();
            ((x0 + c * t) * e, (v0 - omega * c * t) * e)
        } else if zeta > 1.0 {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c2 = (v0 - r1 * x0) / (r2 - r1);
            let c1 = x0 - c2;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
        } else {
            let wd = omega * (1.0 - zeta * zeta).sqrt();
            let decay = zeta * omega;
            let a = x0;
            let b = (v0 + decay * x0) / wd;
            let e = (-decay * t).exp();
            let (sin, cos) = (wd * t).sin_cos();
            let x = e * (a * cos + b * sin);
            let v = e * (-decay * (a * cos + b * sin) + wd * (b * cos - a * sin));
            (x, v)
        };

        if !x.is_finite() || !v.is_finite() {
            *self = Self::at_rest(self.target);
            return;
        }

        if x.abs() <= cfg.rest_delta && v.abs() <= cfg.rest_speed {
            *self = Self::at_rest(self.target);
        } else {
            self.position = self.target + x;
            self.velocity = v;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
