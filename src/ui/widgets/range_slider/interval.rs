//! Value interval and pointer mapping for the range slider
//!
//! All conversions between pixels and values go through [`Interval`], so the
//! widget never has to reason about quantization or clamping itself.

use std::fmt;

/// Closed numeric interval `[min, max]` with a quantization step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    min: f32,
    max: f32,
    step: f32,
}

/// Horizontal extent of the rail that thumbs travel along, in window pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub left: f32,
    pub width: f32,
}

impl Track {
    pub fn new(left: f32, width: f32) -> Self {
        Self {
            left,
            width: width.max(0.0),
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }
}

impl Default for Interval {
    /// `[0, 100]` in whole steps
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl Interval {
    /// Build an interval, rejecting empty ranges and non-positive steps
    pub fn new(min: f32, max: f32, step: f32) -> Result<Self, IntervalError> {
        if !min.is_finite() || !max.is_finite() || !step.is_finite() {
            return Err(IntervalError::NonFinite);
        }
        if min >= max {
            return Err(IntervalError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(IntervalError::InvalidStep(step));
        }
        Ok(Self { min, max, step })
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn span(&self) -> f32 {
        self.max - self.min
    }

    /// Visual placement of `value` along the track, 0.0 at `min` and 100.0 at `max`
    pub fn percentage(&self, value: f32) -> f32 {
        (value - self.min) / self.span() * 100.0
    }

    /// Round `raw` to the nearest step offset from `min` and clamp it into the interval
    ///
    /// NaN collapses to `min`.
    pub fn quantize(&self, raw: f32) -> f32 {
        if raw.is_nan() {
            return self.min;
        }
        let min = f64::from(self.min);
        let max = f64::from(self.max);
        let step = f64::from(self.step);

        let steps = ((f64::from(raw) - min) / step).round();
        (steps * step + min).clamp(min, max) as f32
    }

    /// Value under a pointer at `pointer_x`, clamped to the ends of the track
    pub fn locate(&self, pointer_x: f32, track: Track) -> f32 {
        let ratio = if track.width <= 0.0 {
            0.0
        } else {
            ((pointer_x - track.left) / track.width).clamp(0.0, 1.0)
        };
        let raw = f64::from(self.min) + f64::from(ratio) * f64::from(self.span());
        self.quantize(raw as f32)
    }

    /// Pixel x coordinate of a thumb centre holding `value`
    pub fn position(&self, value: f32, track: Track) -> f32 {
        let percent = self.percentage(value).clamp(0.0, 100.0);
        track.left + track.width * percent / 100.0
    }

    /// Clamp, quantize and order an incoming value sequence
    ///
    /// Out-of-order input is lifted rather than sorted, so thumb `i` keeps
    /// identity with entry `i`.
    pub fn normalize(&self, values: &[f32]) -> Vec<f32> {
        let mut floor = self.min;
        values
            .iter()
            .map(|&value| {
                let value = self.quantize(value).max(floor);
                floor = value;
                value
            })
            .collect()
    }
}

/// Reasons an [`Interval`] cannot be built
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntervalError {
    NonFinite,
    EmptyRange { min: f32, max: f32 },
    InvalidStep(f32),
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntervalError::NonFinite => write!(f, "interval bounds and step must be finite"),
            IntervalError::EmptyRange { min, max } => {
                write!(f, "interval min ({}) must be below max ({})", min, max)
            }
            IntervalError::InvalidStep(step) => write!(f, "step must be positive, got {}", step),
        }
    }
}

impl std::error::Error for IntervalError {}
