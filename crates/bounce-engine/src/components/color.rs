use serde::{Deserialize, Serialize};

use crate::core::rng::Rng;

/// RGBA color for disc rendering. Channels in 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl DiscColor {
    pub const WHITE: DiscColor = DiscColor { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Convert hue (degrees), saturation and lightness (0–1) to RGB.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);
        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = l - c / 2.0;
        Self {
            r: (r + m) as f32,
            g: (g + m) as f32,
            b: (b + m) as f32,
            a: alpha.clamp(0.0, 1.0) as f32,
        }
    }

    /// CSS `rgba(...)` string for Canvas 2D `fillStyle`.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            channel_byte(self.r),
            channel_byte(self.g),
            channel_byte(self.b),
            self.a
        )
    }
}

impl Default for DiscColor {
    fn default() -> Self {
        Self { r: 1.0, g: 1.0, b: 1.0, a: 0.5 }
    }
}

fn channel_byte(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Color parameters. Each particle gets a hue drawn from `hue`;
/// saturation, lightness and alpha are shared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Hue range in degrees, `[min, max]`.
    pub hue: [f64; 2],
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            hue: [0.0, 360.0],
            saturation: 0.0,
            lightness: 1.0,
            alpha: 0.5,
        }
    }
}

impl ColorConfig {
    /// Pick the color for one particle.
    pub fn generate(&self, rng: &mut Rng) -> DiscColor {
        let hue = rng.range(self.hue[0], self.hue[1]);
        DiscColor::from_hsl(hue, self.saturation, self.lightness, self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn default_config_is_translucent_white() {
        let mut rng = Rng::new(5);
        let c = ColorConfig::default().generate(&mut rng);
        assert!(close(c.r, 1.0) && close(c.g, 1.0) && close(c.b, 1.0));
        assert!(close(c.a, 0.5));
        assert_eq!(c.to_css(), "rgba(255, 255, 255, 0.5)");
    }

    #[test]
    fn hsl_primaries() {
        let red = DiscColor::from_hsl(0.0, 1.0, 0.5, 1.0);
        assert!(close(red.r, 1.0) && close(red.g, 0.0) && close(red.b, 0.0));
        let green = DiscColor::from_hsl(120.0, 1.0, 0.5, 1.0);
        assert!(close(green.r, 0.0) && close(green.g, 1.0) && close(green.b, 0.0));
        let blue = DiscColor::from_hsl(240.0, 1.0, 0.5, 1.0);
        assert!(close(blue.r, 0.0) && close(blue.g, 0.0) && close(blue.b, 1.0));
    }

    #[test]
    fn hue_wraps_around() {
        assert_eq!(
            DiscColor::from_hsl(360.0, 1.0, 0.5, 1.0),
            DiscColor::from_hsl(0.0, 1.0, 0.5, 1.0)
        );
    }

    #[test]
    fn fixed_hue_range_gives_fixed_color() {
        let cfg = ColorConfig { hue: [200.0, 200.0], saturation: 0.8, lightness: 0.6, alpha: 1.0 };
        let mut rng = Rng::new(1);
        assert_eq!(cfg.generate(&mut rng), cfg.generate(&mut rng));
    }

    #[test]
    fn color_config_fills_missing_fields() {
        let cfg: ColorConfig = serde_json::from_str(r#"{ "saturation": 0.7 }"#).unwrap();
        assert_eq!(cfg.saturation, 0.7);
        assert_eq!(cfg.alpha, 0.5);
    }
}
