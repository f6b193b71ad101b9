//! Drawing contract between the stage and whatever paints the frame.
//!
//! The engine stays headless: the stage only emits "clear" and "fill a disc"
//! commands. The web crate paints them onto a Canvas 2D context; tests and
//! the pointer-based JS path use [`DiscBuffer`](super::disc_instance::DiscBuffer).

use glam::DVec2;

use crate::components::color::DiscColor;

pub trait Surface {
    /// Start a new frame covering `width` × `height` viewport units.
    fn clear(&mut self, width: f64, height: f64);

    /// Draw a filled circle.
    fn fill_disc(&mut self, center: DVec2, radius: f64, color: DiscColor);
}
