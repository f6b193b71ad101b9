//! Kinematic disc that integrates its own motion and bounces off the bounds.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;
use crate::core::bounds::Bounds;
use crate::core::policy::AccelerationPolicy;
use crate::core::rng::Rng;

/// Upper limit on re-validation passes when recursive resolution is enabled.
pub const MAX_RESOLUTION_PASSES: usize = 4;

/// Where a disc is placed after it crossed an edge during a step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Overshoot {
    /// Mirror the overshoot back inside, as if the disc had bounced mid-step.
    #[default]
    Reflect,
    /// Park the disc edge exactly on the crossed bound.
    Clamp,
}

/// Collision response knobs shared by all particles of a simulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollisionSettings {
    pub overshoot: Overshoot,
    /// Repeat the per-axis pass until nothing penetrates.
    pub recursive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisHit {
    None,
    Bounced,
    /// Bounds narrower than the disc; centered instead of reflected.
    Pinned,
}

/// Construction parameters for a [`Particle`]. Validated by [`ParticleDesc::build`].
#[derive(Debug, Clone)]
pub struct ParticleDesc {
    pub position: DVec2,
    pub velocity: DVec2,
    /// Initial acceleration. `None` asks the policy for one.
    pub acceleration: Option<DVec2>,
    pub restitution: f64,
    pub radius: f64,
    pub policy: AccelerationPolicy,
    pub collision: CollisionSettings,
    pub seed: u64,
}

impl ParticleDesc {
    pub fn new(radius: f64) -> Self {
        Self {
            position: DVec2::ZERO,
            velocity: DVec2::ZERO,
            acceleration: None,
            restitution: 1.0,
            radius,
            policy: AccelerationPolicy::default(),
            collision: CollisionSettings::default(),
            seed: 1,
        }
    }

    // -- Builder pattern --

    pub fn with_position(mut self, position: DVec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: DVec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn with_acceleration(mut self, acceleration: DVec2) -> Self {
        self.acceleration = Some(acceleration);
        self
    }

    pub fn with_restitution(mut self, restitution: f64) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_policy(mut self, policy: AccelerationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_collision(mut self, collision: CollisionSettings) -> Self {
        self.collision = collision;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Validate and create the particle.
    pub fn build(self) -> Result<Particle, ConfigError> {
        if !self.radius.is_finite() {
            return Err(ConfigError::NonFinite { field: "radius" });
        }
        if self.radius < 0.0 {
            return Err(ConfigError::NegativeRadius(self.radius));
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::InvalidRestitution(self.restitution));
        }
        if !self.position.is_finite() {
            return Err(ConfigError::NonFinite { field: "position" });
        }
        if !self.velocity.is_finite() {
            return Err(ConfigError::NonFinite { field: "velocity" });
        }

        let mut rng = Rng::new(self.seed);
        let acceleration = match self.acceleration {
            Some(a) if !a.is_finite() => {
                return Err(ConfigError::NonFinite { field: "acceleration" });
            }
            Some(a) => a,
            None => self.policy.generate(&mut rng),
        };

        Ok(Particle {
            position: self.position,
            velocity: self.velocity,
            acceleration,
            restitution: self.restitution,
            radius: self.radius,
            policy: self.policy,
            collision: self.collision,
            rng,
        })
    }
}

/// A circular body bouncing inside a [`Bounds`] rectangle.
#[derive(Debug, Clone)]
pub struct Particle {
    position: DVec2,
    velocity: DVec2,
    acceleration: DVec2,
    restitution: f64,
    radius: f64,
    policy: AccelerationPolicy,
    collision: CollisionSettings,
    rng: Rng,
}

impl Particle {
    /// Step the particle forward by `dt` seconds and return its new center.
    ///
    /// Position moves with the pre-step velocity, then velocity picks up
    /// acceleration, then collisions are resolved against `bounds`.
    /// Not idempotent: every call consumes `dt` of simulated time.
    pub fn advance(&mut self, dt: f64, bounds: &Bounds) -> DVec2 {
        let dt = if dt.is_finite() && dt > 0.0 { dt } else { 0.0 };
        self.position += dt * self.velocity;
        self.velocity += dt * self.acceleration;
        self.check_bounds(bounds);
        self.position
    }

    /// Resolve edge crossings on x then y. Returns whether any axis collided.
    pub fn check_bounds(&mut self, bounds: &Bounds) -> bool {
        let passes = if self.collision.recursive { MAX_RESOLUTION_PASSES } else { 1 };
        let mut collided = false;
        // A pinned disc still overlaps both edges; resolve that axis once per step.
        let mut pinned = [false; 2];
        for _ in 0..passes {
            let mut bounced = false;
            for axis in 0..2 {
                if pinned[axis] {
                    continue;
                }
                match self.resolve_axis(axis, bounds.axis(axis)) {
                    AxisHit::None => {}
                    AxisHit::Bounced => bounced = true,
                    AxisHit::Pinned => {
                        pinned[axis] = true;
                        collided = true;
                    }
                }
            }
            if !bounced {
                break;
            }
            collided = true;
        }
        collided
    }

    fn resolve_axis(&mut self, axis: usize, [min, max]: [f64; 2]) -> AxisHit {
        let r = self.radius;
        let pos = self.position[axis];
        let min_penetration = min - (pos - r);
        let max_penetration = (pos + r) - max;
        if min_penetration <= 0.0 && max_penetration <= 0.0 {
            return AxisHit::None;
        }

        let free_span = (max - min) - 2.0 * r;
        let hit = if free_span < 0.0 {
            self.position[axis] = (min + max) / 2.0;
            AxisHit::Pinned
        } else {
            self.position[axis] = match (self.collision.overshoot, min_penetration > 0.0) {
                (Overshoot::Reflect, true) => min + r + min_penetration.min(free_span),
                (Overshoot::Reflect, false) => max - r - max_penetration.min(free_span),
                (Overshoot::Clamp, true) => min + r,
                (Overshoot::Clamp, false) => max - r,
            };
            AxisHit::Bounced
        };

        self.velocity[axis] = -self.velocity[axis] * self.restitution;
        self.acceleration = self.policy.generate(&mut self.rng);
        hit
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    pub fn acceleration(&self) -> DVec2 {
        self.acceleration
    }

    pub fn restitution(&self) -> f64 {
        self.restitution
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn policy(&self) -> AccelerationPolicy {
        self.policy
    }
}
