use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::components::color::ColorConfig;
use crate::core::particle::{CollisionSettings, Overshoot};
use crate::core::policy::{AccelerationPolicy, DEFAULT_GRAVITY};
use crate::core::time::TimestepClamp;

/// Hard ceiling on the number of particles a page can ask for.
pub const MAX_PARTICLES: usize = 10_000;

pub const DEFAULT_PARTICLE_COUNT: usize = 100;
pub const DEFAULT_RADIUS: f64 = 10.0;
pub const DEFAULT_MAX_SPEED: f64 = 100.0;
pub const DEFAULT_RESTITUTION: [f64; 2] = [0.5, 0.9];

/// Inclusive `[min, max]` pair of non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub const fn exactly(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// Replace non-finite ends with `fallback`, drop signs, and order the pair.
    fn sanitized(self, field: &str, fallback: ValueRange) -> Self {
        let mut min = if self.min.is_finite() { self.min } else { fallback.min };
        let mut max = if self.max.is_finite() { self.max } else { fallback.max };
        if min < 0.0 || max < 0.0 {
            log::warn!("{}: negative magnitudes made positive", field);
            min = min.abs();
            max = max.abs();
        }
        if min > max {
            log::warn!("{}: min {} > max {}, swapping", field, min, max);
            std::mem::swap(&mut min, &mut max);
        }
        Self { min, max }
    }
}

/// Everything the engine needs to build a simulation.
/// Missing JSON fields fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub particle_count: usize,
    /// Radius range (px).
    pub size: ValueRange,
    /// Initial speed per axis (px/s); the sign is random.
    pub speed: ValueRange,
    /// Free-drift acceleration per axis (px/s²). Defaults to `[0, speed.max / 4]`.
    pub acceleration: Option<ValueRange>,
    pub gravity: bool,
    /// Downward acceleration in gravity mode (px/s²).
    pub gravity_strength: f64,
    /// Per-particle restitution. Defaults to `[0.5, 0.9]` with gravity, `1` without.
    pub restitution: Option<ValueRange>,
    /// Fraction of the viewport the simulation covers, centered.
    pub coverage: f64,
    pub color: ColorConfig,
    pub max_timestep: TimestepClamp,
    pub overshoot: Overshoot,
    pub recursive_resolution: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            size: ValueRange::exactly(DEFAULT_RADIUS),
            speed: ValueRange::new(0.0, DEFAULT_MAX_SPEED),
            acceleration: None,
            gravity: true,
            gravity_strength: DEFAULT_GRAVITY,
            restitution: None,
            coverage: 1.0,
            color: ColorConfig::default(),
            max_timestep: TimestepClamp::default(),
            overshoot: Overshoot::default(),
            recursive_resolution: false,
        }
    }
}

impl SimConfig {
    /// Parse a JSON configuration and clamp it into range.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Clamp every value into its valid range. Corrections are logged, never fatal.
    pub fn sanitized(mut self) -> Self {
        let defaults = SimConfig::default();

        if self.particle_count > MAX_PARTICLES {
            log::warn!("particle_count {} capped at {}", self.particle_count, MAX_PARTICLES);
            self.particle_count = MAX_PARTICLES;
        }

        self.size = self.size.sanitized("size", defaults.size);
        self.speed = self.speed.sanitized("speed", defaults.speed);
        let accel_fallback = ValueRange::new(0.0, self.speed.max / 4.0);
        self.acceleration = Some(
            self.acceleration
                .unwrap_or(accel_fallback)
                .sanitized("acceleration", accel_fallback),
        );

        if !self.gravity_strength.is_finite() {
            log::warn!("gravity_strength is not finite, using {}", DEFAULT_GRAVITY);
            self.gravity_strength = DEFAULT_GRAVITY;
        }

        let rest_fallback = if self.gravity {
            ValueRange::new(DEFAULT_RESTITUTION[0], DEFAULT_RESTITUTION[1])
        } else {
            ValueRange::exactly(1.0)
        };
        let mut restitution = self
            .restitution
            .unwrap_or(rest_fallback)
            .sanitized("restitution", rest_fallback);
        if restitution.max > 1.0 {
            log::warn!("restitution above 1 clamped");
            restitution.min = restitution.min.min(1.0);
            restitution.max = 1.0;
        }
        self.restitution = Some(restitution);

        if !self.coverage.is_finite() {
            log::warn!("coverage is not finite, using 1");
            self.coverage = 1.0;
        } else if !(0.0..=1.0).contains(&self.coverage) {
            log::warn!("coverage {} clamped to [0, 1]", self.coverage);
            self.coverage = self.coverage.clamp(0.0, 1.0);
        }

        self.color = sanitize_color(self.color);
        self.max_timestep = sanitize_clamp(self.max_timestep);
        self
    }

    /// Acceleration range after defaults are resolved.
    pub fn acceleration_range(&self) -> ValueRange {
        self.acceleration
            .unwrap_or(ValueRange::new(0.0, self.speed.max / 4.0))
    }

    /// Restitution range after defaults are resolved.
    pub fn restitution_range(&self) -> ValueRange {
        self.restitution.unwrap_or(if self.gravity {
            ValueRange::new(DEFAULT_RESTITUTION[0], DEFAULT_RESTITUTION[1])
        } else {
            ValueRange::exactly(1.0)
        })
    }

    /// The bounce strategy this configuration selects.
    pub fn acceleration_policy(&self) -> AccelerationPolicy {
        if self.gravity {
            AccelerationPolicy::Gravity { g: self.gravity_strength }
        } else {
            let range = self.acceleration_range();
            AccelerationPolicy::FreeDrift { min: range.min, max: range.max }
        }
    }

    pub fn collision(&self) -> CollisionSettings {
        CollisionSettings {
            overshoot: self.overshoot,
            recursive: self.recursive_resolution,
        }
    }
}

fn sanitize_color(mut color: ColorConfig) -> ColorConfig {
    let defaults = ColorConfig::default();
    if !color.hue[0].is_finite() || !color.hue[1].is_finite() {
        log::warn!("color.hue is not finite, using default");
        color.hue = defaults.hue;
    }
    if color.hue[0] > color.hue[1] {
        color.hue.swap(0, 1);
    }
    for (value, fallback) in [
        (&mut color.saturation, defaults.saturation),
        (&mut color.lightness, defaults.lightness),
        (&mut color.alpha, defaults.alpha),
    ] {
        *value = if value.is_finite() { value.clamp(0.0, 1.0) } else { fallback };
    }
    color
}

fn sanitize_clamp(clamp: TimestepClamp) -> TimestepClamp {
    let valid = match clamp {
        TimestepClamp::Unbounded => true,
        TimestepClamp::Cap { max } => max.is_finite() && max > 0.0,
        TimestepClamp::Substitute { threshold, fallback } => {
            threshold.is_finite() && threshold > 0.0 && fallback.is_finite() && fallback >= 0.0
        }
    };
    if valid {
        clamp
    } else {
        log::warn!("invalid max_timestep {:?}, using default", clamp);
        TimestepClamp::default()
    }
}
