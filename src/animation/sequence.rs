use std::time::Duration;

use crate::{
    animation::ease::Ease,
    animation::interp::Mapping,
    foundation::error::{OdysseyError, OdysseyResult},
};

/// A numbered frame sequence played forward then backward once per cycle, holding each frame
/// (no blending between frames).
///
/// With `frames = 39` a cycle has 76 steps: frames `1..=39`, then `38..=2`, landing back on 1 at
/// the cycle boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PingPong {
    frames: u32,
    cycle: Duration,
}

impl PingPong {
    /// Build a sequence of `frames` images swept over `cycle`.
    pub fn new(frames: u32, cycle: Duration) -> OdysseyResult<Self> {
        if frames == 0 {
            return Err(OdysseyError::animation("frame sequence must have >= 1 frame"));
        }
        if cycle.is_zero() {
            return Err(OdysseyError::animation("frame cycle must be > 0"));
        }
        Ok(Self { frames, cycle })
    }

    /// Number of distinct frames.
    pub fn frames(self) -> u32 {
        self.frames
    }

    /// Duration of one forward-then-reverse sweep.
    pub fn cycle(self) -> Duration {
        self.cycle
    }

    /// Steps per cycle.
    pub fn steps(self) -> u64 {
        if self.frames == 1 {
            1
        } else {
            2 * (u64::from(self.frames) - 1)
        }
    }

    /// Completed cycles after `elapsed` of playback.
    pub fn cycles_completed(self, elapsed: Duration) -> u64 {
        (elapsed.as_nanos() / self.cycle.as_nanos()) as u64
    }

    /// 1-based frame number shown after `elapsed` of playback.
    pub fn frame_at(self, elapsed: Duration) -> u32 {
        let steps = self.steps();
        let cycle_ns = self.cycle.as_nanos();
        let within = elapsed.as_nanos() % cycle_ns;
        let step = ((within * u128::from(steps)) / cycle_ns) as u64;

        let period = u64::from(self.frames);
        let pos = if period == 1 {
            0
        } else if step < period {
            step
        } else {
            steps - step
        };
        pos as u32 + 1
    }
}

/// Infinitely repeating keyframe loop sampled from a wall clock (the volcano glow, the water sway).
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct LoopKeyframes {
    period: Duration,
    values: Mapping<f64>,
}

impl LoopKeyframes {
    /// Evenly spaced keyframes over `period` with a per-segment ease.
    pub fn even(period: Duration, values: Vec<f64>, ease: Ease) -> OdysseyResult<Self> {
        if period.is_zero() {
            return Err(OdysseyError::animation("loop period must be > 0"));
        }
        if values.len() < 2 {
            return Err(OdysseyError::animation("loop needs at least two keyframes"));
        }
        let last = (values.len() - 1) as f64;
        let stops = (0..values.len()).map(|i| i as f64 / last).collect();
        Ok(Self {
            period,
            values: Mapping::new(stops, values)?.with_ease(ease),
        })
    }

    /// Value at `elapsed` since the loop was mounted.
    pub fn sample(&self, elapsed: Duration) -> f64 {
        let period = self.period.as_secs_f64();
        let phase = (elapsed.as_secs_f64() % period) / period;
        self.values.sample(phase)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/sequence.rs"]
mod tests;
