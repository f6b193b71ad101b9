use serde::{Deserialize, Serialize};

/// How long frame gaps (tab in background, debugger pause) are tamed
/// before they reach the physics step. A stability safeguard, not physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimestepClamp {
    /// Use the raw elapsed time.
    Unbounded,
    /// Never step more than `max` seconds.
    Cap { max: f64 },
    /// Any gap longer than `threshold` seconds is replaced by `fallback`.
    Substitute { threshold: f64, fallback: f64 },
}

impl TimestepClamp {
    pub fn apply(&self, dt: f64) -> f64 {
        match *self {
            TimestepClamp::Unbounded => dt,
            TimestepClamp::Cap { max } => dt.min(max),
            TimestepClamp::Substitute { threshold, fallback } => {
                if dt > threshold { fallback } else { dt }
            }
        }
    }
}

impl Default for TimestepClamp {
    fn default() -> Self {
        TimestepClamp::Substitute {
            threshold: 0.5,
            fallback: 1.0 / 30.0,
        }
    }
}

/// Turns frame timestamps into clamped per-frame deltas.
///
/// Timestamps are milliseconds, as handed out by `requestAnimationFrame`.
pub struct FrameClock {
    clamp: TimestepClamp,
    last_ms: Option<f64>,
}

impl FrameClock {
    pub fn new(clamp: TimestepClamp) -> Self {
        Self {
            clamp,
            last_ms: None,
        }
    }

    /// Seconds since the previous tick, clamped. The first tick returns 0.
    pub fn tick(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            return 0.0;
        }
        let dt = match self.last_ms {
            // Timestamps going backwards count as no elapsed time.
            Some(last) => ((now_ms - last) / 1000.0).max(0.0),
            None => 0.0,
        };
        self.last_ms = Some(now_ms);
        self.clamp.apply(dt)
    }

    /// Forget the previous timestamp, e.g. after the loop was paused.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn clamp(&self) -> TimestepClamp {
        self.clamp
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(TimestepClamp::default())
    }
}
