use crate::api::error::ConfigError;

/// Axis-aligned rectangle constraining particle travel.
/// `x` and `y` hold `[min, max]` for each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl Bounds {
    pub fn new(x: [f64; 2], y: [f64; 2]) -> Self {
        Self { x, y }
    }

    /// Build bounds for a particle constructor. Rejects inverted, empty
    /// and non-finite rectangles.
    pub fn validated(x: [f64; 2], y: [f64; 2]) -> Result<Self, ConfigError> {
        for (axis, [min, max]) in [("x", x), ("y", y)] {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::NonFinite { field: "bounds" });
            }
            if min > max {
                return Err(ConfigError::InvertedBounds { axis, min, max });
            }
            if min == max {
                return Err(ConfigError::EmptyBounds { axis });
            }
        }
        Ok(Self { x, y })
    }

    /// `[min, max]` for axis 0 (x) or 1 (y).
    pub fn axis(&self, axis: usize) -> [f64; 2] {
        if axis == 0 { self.x } else { self.y }
    }

    pub fn width(&self) -> f64 {
        self.x[1] - self.x[0]
    }

    pub fn height(&self) -> f64 {
        self.y[1] - self.y[0]
    }

    /// Whether a disc at `center` with `radius` lies fully inside.
    pub fn contains_disc(&self, center: glam::DVec2, radius: f64) -> bool {
        center.x - radius >= self.x[0]
            && center.x + radius <= self.x[1]
            && center.y - radius >= self.y[0]
            && center.y + radius <= self.y[1]
    }
}

/// Owns the viewport size and derives the simulation bounds from it.
///
/// The coverage factor centers the simulation area: a margin of
/// `size * (1 - coverage) / 2` is left on each side of each axis.
#[derive(Debug, Clone)]
pub struct Viewport {
    width: f64,
    height: f64,
    coverage: f64,
    bounds: Bounds,
}

impl Viewport {
    pub fn new(width: f64, height: f64, coverage: f64) -> Self {
        let width = sanitize_extent(width);
        let height = sanitize_extent(height);
        let coverage = if coverage.is_finite() { coverage.clamp(0.0, 1.0) } else { 1.0 };
        Self {
            width,
            height,
            coverage,
            bounds: compute_bounds(width, height, coverage),
        }
    }

    /// Recompute bounds for a new viewport size. Applied between frames,
    /// so the next `advance` of every particle sees the new rectangle.
    pub fn resize(&mut self, width: f64, height: f64) {
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            log::warn!("ignoring invalid viewport size {}x{}", width, height);
            return;
        }
        self.width = width;
        self.height = height;
        self.bounds = compute_bounds(width, height, self.coverage);
        log::debug!(
            "viewport resized to {}x{}, bounds x={:?} y={:?}",
            width, height, self.bounds.x, self.bounds.y
        );
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn coverage(&self) -> f64 {
        self.coverage
    }
}

fn sanitize_extent(v: f64) -> f64 {
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}

fn compute_bounds(width: f64, height: f64, coverage: f64) -> Bounds {
    let x_margin = width * (1.0 - coverage) / 2.0;
    let y_margin = height * (1.0 - coverage) / 2.0;
    Bounds {
        x: [x_margin, width - x_margin],
        y: [y_margin, height - y_margin],
    }
}
