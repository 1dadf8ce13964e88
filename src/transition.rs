//! Indicator transition for pointer-down selection.
//!
//! Two phases: [`IndicatorTransition::begin`] captures where the indicator
//! is drawn now, then [`IndicatorTransition::sample`] interpolates toward
//! the target tick on each paint. Once the duration has elapsed the sample
//! reports `finished` and the caller drops the transition, which puts the
//! indicator back on its exact target frame.

use std::time::{Duration, Instant};

use crate::constants;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sample {
    pub x: f64,
    pub finished: bool,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct IndicatorTransition {
    from_x: f64,
    started: Instant,
    duration: Duration,
}

impl IndicatorTransition {
    pub fn begin(from_x: f64) -> Self {
        Self::with_duration(from_x, Instant::now(), constants::TRANSITION_DURATION)
    }

    pub fn with_duration(from_x: f64, started: Instant, duration: Duration) -> Self {
        Self {
            from_x,
            started,
            duration,
        }
    }

    /// Position at `now` on the way to `target_x`.
    ///
    /// The target is passed in rather than stored so a resized widget still
    /// lands on the right tick.
    pub fn sample(&self, now: Instant, target_x: f64) -> Sample {
        let elapsed = now.saturating_duration_since(self.started);
        if self.duration.is_zero() || elapsed >= self.duration {
            return Sample {
                x: target_x,
                finished: true,
            };
        }
        let t = ease_in_out(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        Sample {
            x: self.from_x + (target_x - self.from_x) * t,
            finished: false,
        }
    }
}

fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
