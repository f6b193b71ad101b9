use thiserror::Error;

/// Errors raised while building a simulation from configuration.
/// The physics step itself never fails; every error surfaces at construction.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("radius must be non-negative, got {0}")]
    NegativeRadius(f64),

    #[error("restitution must lie in [0, 1], got {0}")]
    InvalidRestitution(f64),

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("bounds on the {axis} axis are inverted: min {min} > max {max}")]
    InvertedBounds { axis: &'static str, min: f64, max: f64 },

    #[error("bounds on the {axis} axis have zero size")]
    EmptyBounds { axis: &'static str },

    #[error("unable to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
