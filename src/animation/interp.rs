use crate::{
    animation::ease::Ease,
    foundation::core::{Length, Translate, Vec2},
    foundation::error::{OdysseyError, OdysseyResult},
};

/// Linear blend between two values of the same kind.
pub trait Lerp: Sized {
    /// Blend `a` toward `b` by `t` (not clamped here; callers clamp).
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;

    /// Whether `a` and `b` can be blended at all (e.g. lengths must share a unit).
    fn compatible(_a: &Self, _b: &Self) -> bool {
        true
    }
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

impl Lerp for Length {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        match (*a, *b) {
            (Length::Px(a), Length::Px(b)) => Length::Px(a + (b - a) * t),
            (Length::Percent(a), Length::Percent(b)) => Length::Percent(a + (b - a) * t),
            // Unit mismatch is rejected by `Mapping::new`; hold the nearer end otherwise.
            _ => {
                if t < 1.0 {
                    *a
                } else {
                    *b
                }
            }
        }
    }

    fn compatible(a: &Self, b: &Self) -> bool {
        a.same_unit(*b)
    }
}

impl Lerp for Translate {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: Length::lerp(&a.x, &b.x, t),
            y: Length::lerp(&a.y, &b.y, t),
        }
    }

    fn compatible(a: &Self, b: &Self) -> bool {
        a.x.same_unit(b.x) && a.y.same_unit(b.y)
    }
}

/// Piecewise-linear map from an input axis (scroll pixels, pointer offset, loop phase) onto
/// output values.
///
/// Inputs outside the declared stops clamp to the nearest endpoint; there is no extrapolation.
/// The ease applies per segment, toward the next stop.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Mapping<T> {
    input: Vec<f64>,
    output: Vec<T>,
    ease: Ease,
}

impl<T> Mapping<T>
where
    T: Lerp + Clone,
{
    /// Build and validate a multi-stop mapping.
    pub fn new(input: Vec<f64>, output: Vec<T>) -> OdysseyResult<Self> {
        let out = Self {
            input,
            output,
            ease: Ease::Linear,
        };
        out.validate()?;
        Ok(out)
    }

    /// Two-stop window `[start, end] -> [from, to]`.
    ///
    /// A reversed window is normalized by swapping both ends, so this never fails; unit
    /// compatibility is still checked on sample by [`Lerp`].
    pub fn window(start: f64, end: f64, from: T, to: T) -> Self {
        let (input, output) = if start <= end {
            (vec![start, end], vec![from, to])
        } else {
            (vec![end, start], vec![to, from])
        };
        Self {
            input,
            output,
            ease: Ease::Linear,
        }
    }

    /// Replace the per-segment ease.
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Check stop counts, ordering, finiteness and output compatibility.
    pub fn validate(&self) -> OdysseyResult<()> {
        if self.input.len() < 2 {
            return Err(OdysseyError::animation("mapping needs at least two stops"));
        }
        if self.input.len() != self.output.len() {
            return Err(OdysseyError::animation(format!(
                "mapping has {} input stops but {} outputs",
                self.input.len(),
                self.output.len()
            )));
        }
        if self.input.iter().any(|v| !v.is_finite()) {
            return Err(OdysseyError::animation("mapping stops must be finite"));
        }
        if !self.input.windows(2).all(|w| w[0] <= w[1]) {
            return Err(OdysseyError::animation(
                "mapping stops must be sorted ascending",
            ));
        }
        if !self.output.windows(2).all(|w| T::compatible(&w[0], &w[1])) {
            return Err(OdysseyError::animation(
                "mapping outputs must share a unit",
            ));
        }
        Ok(())
    }

    /// First input stop.
    pub fn start(&self) -> f64 {
        self.input[0]
    }

    /// Last input stop.
    pub fn end(&self) -> f64 {
        self.input[self.input.len() - 1]
    }

    /// Sample at `x`. NaN samples the first stop.
    pub fn sample(&self, x: f64) -> T {
        let last = self.output.len() - 1;
        if x.is_nan() || x <= self.input[0] {
            return self.output[0].clone();
        }
        if x >= self.input[last] {
            return self.output[last].clone();
        }

        let idx = self.input.partition_point(|&stop| stop <= x);
        let (a_in, b_in) = (self.input[idx - 1], self.input[idx]);
        let denom = b_in - a_in;
        if denom <= 0.0 {
            return self.output[idx].clone();
        }

        let t = self.ease.apply((x - a_in) / denom);
        T::lerp(&self.output[idx - 1], &self.output[idx], t)
    }
}

/// Boolean step over the same input axis as [`Mapping`]; never interpolated.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Step {
    /// True strictly below the threshold.
    Below(f64),
    /// True strictly above the threshold.
    Above(f64),
}

impl Step {
    /// Evaluate the step at `x`. NaN is treated as the top of the document (`0`).
    pub fn test(self, x: f64) -> bool {
        let x = if x.is_nan() { 0.0 } else { x };
        match self {
            Self::Below(at) => x < at,
            Self::Above(at) => x > at,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interp.rs"]
mod tests;
