use bytemuck::{Pod, Zeroable};
use glam::DVec2;

use crate::components::color::DiscColor;
use crate::renderer::surface::Surface;

/// Per-disc render data handed to the canvas painter or read by JS through a pointer.
/// 8 floats = 32 bytes per instance.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct DiscInstance {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
    pub _pad: f32,
}

impl DiscInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn color(&self) -> DiscColor {
        DiscColor::new(self.r, self.g, self.b, self.a)
    }
}

/// One frame's worth of discs plus the surface size they were drawn for.
pub struct DiscBuffer {
    instances: Vec<DiscInstance>,
    width: f64,
    height: f64,
}

impl DiscBuffer {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(max: usize) -> Self {
        Self {
            instances: Vec::with_capacity(max),
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn instances(&self) -> &[DiscInstance] {
        &self.instances
    }

    /// Flat float view, `FLOATS` per disc.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Default for DiscBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for DiscBuffer {
    fn clear(&mut self, width: f64, height: f64) {
        self.instances.clear();
        self.width = width;
        self.height = height;
    }

    fn fill_disc(&mut self, center: DVec2, radius: f64, color: DiscColor) {
        self.instances.push(DiscInstance {
            x: center.x as f32,
            y: center.y as f32,
            radius: radius as f32,
            r: color.r,
            g: color.g,
            b: color.b,
            a: color.a,
            _pad: 0.0,
        });
    }
}
