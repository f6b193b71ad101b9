pub mod api;
pub mod core;
pub mod components;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use crate::api::config::{SimConfig, ValueRange, MAX_PARTICLES};
pub use crate::api::error::ConfigError;
pub use crate::api::options::OptionAnswers;
pub use crate::api::simulation::Simulation;
pub use crate::components::color::{ColorConfig, DiscColor};
pub use crate::core::bounds::{Bounds, Viewport};
pub use crate::core::particle::{CollisionSettings, Overshoot, Particle, ParticleDesc};
pub use crate::core::policy::AccelerationPolicy;
pub use crate::core::rng::Rng;
pub use crate::core::stage::{Stage, StageBody};
pub use crate::core::time::{FrameClock, TimestepClamp};
pub use crate::renderer::disc_instance::{DiscBuffer, DiscInstance};
pub use crate::renderer::surface::Surface;
