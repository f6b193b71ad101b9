//! Canvas 2D painter. Sizes the backing store for the device pixel ratio
//! and draws one filled circle per disc.

use std::f64::consts::TAU;

use bounce_engine::{DiscBuffer, DiscColor, Surface};
use glam::DVec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pixel_ratio: f64,
}

impl CanvasPainter {
    /// Look up a `<canvas>` by element id and grab its 2D context.
    pub fn from_element_id(id: &str) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| JsValue::from_str(&format!("no element with id '{}'", id)))?
            .dyn_into::<HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        let pixel_ratio = window.device_pixel_ratio();
        Ok(Self {
            canvas,
            ctx,
            pixel_ratio: if pixel_ratio > 0.0 { pixel_ratio } else { 1.0 },
        })
    }

    /// Replay a finished frame onto the canvas.
    pub fn paint(&mut self, discs: &DiscBuffer) {
        self.clear(discs.width(), discs.height());
        for d in discs.instances() {
            self.fill_disc(
                DVec2::new(d.x as f64, d.y as f64),
                d.radius as f64,
                d.color(),
            );
        }
    }
}

impl Surface for CanvasPainter {
    fn clear(&mut self, width: f64, height: f64) {
        let w = (width * self.pixel_ratio).round() as u32;
        let h = (height * self.pixel_ratio).round() as u32;
        // Assigning the size also resets the transform and clears the canvas.
        if self.canvas.width() != w {
            self.canvas.set_width(w);
        }
        if self.canvas.height() != h {
            self.canvas.set_height(h);
        }
        if let Err(e) = self
            .ctx
            .set_transform(self.pixel_ratio, 0.0, 0.0, self.pixel_ratio, 0.0, 0.0)
        {
            log::warn!("set_transform failed: {:?}", e);
        }
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_disc(&mut self, center: DVec2, radius: f64, color: DiscColor) {
        self.ctx.begin_path();
        self.ctx.set_fill_style_str(&color.to_css());
        if let Err(e) = self.ctx.arc(center.x, center.y, radius, 0.0, TAU) {
            log::warn!("arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }
}
