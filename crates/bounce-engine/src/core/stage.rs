use glam::DVec2;

use crate::components::color::DiscColor;
use crate::core::bounds::{Bounds, Viewport};
use crate::core::particle::Particle;
use crate::renderer::surface::Surface;

/// A particle together with its precomputed color.
#[derive(Debug, Clone)]
pub struct StageBody {
    pub particle: Particle,
    pub color: DiscColor,
}

/// Flat storage of every particle in the run plus the viewport they bounce in.
/// Particles are never removed while the stage lives.
pub struct Stage {
    bodies: Vec<StageBody>,
    viewport: Viewport,
    frame_count: u64,
}

impl Stage {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_capacity(viewport, 128)
    }

    pub fn with_capacity(viewport: Viewport, capacity: usize) -> Self {
        Self {
            bodies: Vec::with_capacity(capacity),
            viewport,
            frame_count: 0,
        }
    }

    pub fn add_particle(&mut self, particle: Particle, color: DiscColor) {
        self.bodies.push(StageBody { particle, color });
    }

    /// Advance every particle exactly once by `dt` and draw it.
    ///
    /// All particles read the same bounds for the whole frame; a resize
    /// only takes effect on the next call.
    pub fn render_frame<S: Surface + ?Sized>(&mut self, dt: f64, surface: &mut S) {
        let bounds = *self.viewport.bounds();
        surface.clear(self.viewport.width(), self.viewport.height());
        for body in &mut self.bodies {
            let center = body.particle.advance(dt, &bounds);
            surface.fill_disc(center, body.particle.radius(), body.color);
        }
        self.frame_count += 1;
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.resize(width, height);
    }

    pub fn bounds(&self) -> &Bounds {
        self.viewport.bounds()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageBody> {
        self.bodies.iter()
    }

    /// Current centers without stepping.
    pub fn positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.bodies.iter().map(|b| b.particle.position())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Number of frames rendered so far.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
