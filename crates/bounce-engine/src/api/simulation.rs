use glam::DVec2;

use crate::api::config::SimConfig;
use crate::api::error::ConfigError;
use crate::core::bounds::{Bounds, Viewport};
use crate::core::particle::ParticleDesc;
use crate::core::rng::Rng;
use crate::core::stage::Stage;
use crate::renderer::surface::Surface;

/// A configured stage: particles spawned from a [`SimConfig`] inside a viewport.
pub struct Simulation {
    stage: Stage,
    config: SimConfig,
}

impl Simulation {
    /// Spawn `config.particle_count` particles with randomized state.
    ///
    /// The config is sanitized first. Fails when the derived bounds are
    /// empty (zero-sized viewport or zero coverage).
    pub fn new(config: SimConfig, width: f64, height: f64, seed: u64) -> Result<Self, ConfigError> {
        let config = config.sanitized();
        let viewport = Viewport::new(width, height, config.coverage);
        let bounds = *viewport.bounds();
        Bounds::validated(bounds.x, bounds.y)?;

        let mut rng = Rng::new(seed);
        let policy = config.acceleration_policy();
        let collision = config.collision();
        let restitution = config.restitution_range();
        let mut stage = Stage::with_capacity(viewport, config.particle_count);

        for _ in 0..config.particle_count {
            let radius = rng.range(config.size.min, config.size.max);
            let position = DVec2::new(
                spawn_coordinate(&mut rng, bounds.x, radius),
                spawn_coordinate(&mut rng, bounds.y, radius),
            );
            let velocity = DVec2::new(
                rng.signed(config.speed.min, config.speed.max),
                rng.signed(config.speed.min, config.speed.max),
            );
            let particle = ParticleDesc::new(radius)
                .with_position(position)
                .with_velocity(velocity)
                .with_restitution(rng.range(restitution.min, restitution.max))
                .with_policy(policy)
                .with_collision(collision)
                .with_seed(rng.next_u64())
                .build()?;
            let color = config.color.generate(&mut rng);
            stage.add_particle(particle, color);
        }

        log::info!(
            "spawned {} particles ({}) in {:.0}x{:.0}",
            stage.len(),
            if config.gravity { "gravity" } else { "free drift" },
            bounds.width(),
            bounds.height()
        );

        Ok(Self { stage, config })
    }

    /// Advance and draw one frame.
    pub fn frame<S: Surface + ?Sized>(&mut self, dt: f64, surface: &mut S) {
        self.stage.render_frame(dt, surface);
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.stage.resize(width, height);
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn particle_count(&self) -> usize {
        self.stage.len()
    }
}

/// Uniform spawn position with the whole disc inside, or the axis center
/// when the disc does not fit.
fn spawn_coordinate(rng: &mut Rng, [min, max]: [f64; 2], radius: f64) -> f64 {
    if max - min >= 2.0 * radius {
        rng.range(min + radius, max - radius)
    } else {
        (min + max) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::config::ValueRange;
    use crate::renderer::disc_instance::DiscBuffer;

    #[test]
    fn spawns_requested_count_inside_bounds() {
        let config = SimConfig {
            particle_count: 50,
            size: ValueRange::new(3.0, 12.0),
            ..SimConfig::default()
        };
        let sim = Simulation::new(config, 800.0, 600.0, 9).unwrap();
        assert_eq!(sim.particle_count(), 50);
        let bounds = *sim.stage().bounds();
        for body in sim.stage().iter() {
            let p = &body.particle;
            assert!(bounds.contains_disc(p.position(), p.radius()));
            assert!((3.0..=12.0).contains(&p.radius()));
            assert!((0.5..=0.9).contains(&p.restitution()));
            assert!(p.velocity().x.abs() <= 100.0 && p.velocity().y.abs() <= 100.0);
            assert_eq!(p.acceleration(), DVec2::new(0.0, 98.0));
        }
    }

    #[test]
    fn free_drift_particles_are_elastic() {
        let config = SimConfig {
            particle_count: 10,
            gravity: false,
            ..SimConfig::default()
        };
        let sim = Simulation::new(config, 300.0, 300.0, 4).unwrap();
        for body in sim.stage().iter() {
            assert_eq!(body.particle.restitution(), 1.0);
            let a = body.particle.acceleration();
            assert!(a.x.abs() <= 25.0 && a.y.abs() <= 25.0);
        }
    }

    #[test]
    fn empty_bounds_are_rejected() {
        let result = Simulation::new(SimConfig::default(), 0.0, 600.0, 1);
        assert!(matches!(result, Err(ConfigError::EmptyBounds { axis: "x" })));
        let config = SimConfig { coverage: 0.0, ..SimConfig::default() };
        assert!(Simulation::new(config, 800.0, 600.0, 1).is_err());
    }

    #[test]
    fn same_seed_same_run() {
        let mut a = Simulation::new(SimConfig::default(), 640.0, 480.0, 123).unwrap();
        let mut b = Simulation::new(SimConfig::default(), 640.0, 480.0, 123).unwrap();
        let mut buf_a = DiscBuffer::new();
        let mut buf_b = DiscBuffer::new();
        for _ in 0..240 {
            a.frame(1.0 / 60.0, &mut buf_a);
            b.frame(1.0 / 60.0, &mut buf_b);
            assert_eq!(buf_a.instances(), buf_b.instances());
        }
    }

    #[test]
    fn every_frame_keeps_discs_inside() {
        let config = SimConfig {
            particle_count: 40,
            gravity: false,
            speed: ValueRange::new(100.0, 400.0),
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(config, 500.0, 400.0, 77).unwrap();
        let mut buf = DiscBuffer::new();
        for frame in 0..600 {
            if frame == 300 {
                sim.resize(300.0, 250.0);
            }
            sim.frame(1.0 / 60.0, &mut buf);
            let bounds = *sim.stage().bounds();
            for d in buf.instances() {
                let center = DVec2::new(d.x as f64, d.y as f64);
                // f32 round-trip loses a little precision.
                let shrunk = d.radius as f64 - 1e-3;
                assert!(bounds.contains_disc(center, shrunk), "frame {}: {:?}", frame, d);
            }
        }
    }
}
