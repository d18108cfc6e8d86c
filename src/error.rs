//! Input-domain validation errors for the orbital engine.

use thiserror::Error;

/// The engine's only failure mode: an argument outside its documented
/// domain. Every operation is a pure mapping, so there is nothing to
/// retry and no partial result to hand back.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("orbit radius must be positive, got {0}")]
    NonPositiveRadius(f64),

    #[error("angular speed must not be negative, got {0}")]
    NegativeAngularSpeed(f64),

    #[error("eccentricity bias must lie in [0, 1), got {0}")]
    BiasOutOfRange(f64),

    #[error("a closed path needs at least 3 segments, got {0}")]
    TooFewSegments(usize),

    #[error("latitude must lie in [-90, 90] degrees, got {0}")]
    LatitudeOutOfRange(f64),

    #[error("longitude must lie in [-180, 180] degrees, got {0}")]
    LongitudeOutOfRange(f64),

    #[error("radial distance must be positive, got {0}")]
    NonPositiveDistance(f64),
}

pub type Result<T> = std::result::Result<T, InvalidArgument>;
