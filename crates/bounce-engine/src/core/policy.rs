use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::core::rng::Rng;

/// Downward acceleration used by the gravity mode, in px/s².
pub const DEFAULT_GRAVITY: f64 = 98.0;

/// How a particle picks a new acceleration vector after each bounce.
/// Chosen once at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum AccelerationPolicy {
    /// Constant `(0, g)`. Positive `g` points down the screen.
    Gravity { g: f64 },
    /// A fresh random vector on every bounce: per axis, a magnitude in
    /// `[min, max)` with a random sign.
    FreeDrift { min: f64, max: f64 },
    /// Always the same vector; bounces never change acceleration.
    Fixed { x: f64, y: f64 },
}

impl AccelerationPolicy {
    pub fn gravity() -> Self {
        AccelerationPolicy::Gravity { g: DEFAULT_GRAVITY }
    }

    /// Produce the next acceleration vector.
    pub fn generate(&self, rng: &mut Rng) -> DVec2 {
        match *self {
            AccelerationPolicy::Gravity { g } => DVec2::new(0.0, g),
            AccelerationPolicy::FreeDrift { min, max } => {
                DVec2::new(rng.signed(min, max), rng.signed(min, max))
            }
            AccelerationPolicy::Fixed { x, y } => DVec2::new(x, y),
        }
    }
}

impl Default for AccelerationPolicy {
    fn default() -> Self {
        Self::gravity()
    }
}
