use bounce_engine::{ConfigError, DiscBuffer, FrameClock, SimConfig, Simulation};

use crate::canvas::CanvasPainter;

/// Wires the simulation to the browser frame loop.
///
/// Lives in a `thread_local!` in `lib.rs`; every exported function borrows it
/// for the duration of one call, so a resize can never land mid-frame.
pub struct StageRunner {
    sim: Simulation,
    clock: FrameClock,
    discs: DiscBuffer,
    painter: Option<CanvasPainter>,
}

impl StageRunner {
    pub fn new(config: SimConfig, width: f64, height: f64, seed: u64) -> Result<Self, ConfigError> {
        let sim = Simulation::new(config, width, height, seed)?;
        let clock = FrameClock::new(sim.config().max_timestep);
        let discs = DiscBuffer::with_capacity(sim.particle_count());
        Ok(Self {
            sim,
            clock,
            discs,
            painter: None,
        })
    }

    pub fn attach_painter(&mut self, painter: CanvasPainter) {
        self.painter = Some(painter);
    }

    /// Run one frame for a `requestAnimationFrame` timestamp (milliseconds).
    pub fn frame(&mut self, timestamp_ms: f64) {
        let dt = self.clock.tick(timestamp_ms);
        self.sim.frame(dt, &mut self.discs);
        if let Some(painter) = self.painter.as_mut() {
            painter.paint(&self.discs);
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.sim.resize(width, height);
    }

    /// Forget the last timestamp so a resumed loop does not see one huge gap.
    pub fn pause(&mut self) {
        self.clock.reset();
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    // ---- Pointer accessors for reading discs straight out of wasm memory ----

    pub fn discs_ptr(&self) -> *const f32 {
        self.discs.instances_ptr()
    }

    pub fn disc_count(&self) -> u32 {
        self.discs.instance_count() as u32
    }

    pub fn particle_count(&self) -> u32 {
        self.sim.particle_count() as u32
    }

    pub fn discs(&self) -> &DiscBuffer {
        &self.discs
    }
}
