use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::error::{InvalidArgument, Result};

use super::OrbitalParameters;

/// A closed path needs at least a triangle to be meaningful.
pub const MIN_SEGMENTS: usize = 3;

/// Traces the orbit's closed curve at `segment_count` evenly spaced
/// angles, yielding `segment_count + 1` points in increasing-angle order.
/// The trace is a static geometric outline: phase and angular speed play
/// no part, and the last point coincides with the first (angle 2pi vs 0,
/// identical up to trigonometric rounding).
///
/// Fewer than [`MIN_SEGMENTS`] segments is rejected, not clamped.
pub fn path_points(
    params: &OrbitalParameters,
    segment_count: usize,
) -> Result<impl Iterator<Item = Vector3<f64>>> {
    if segment_count < MIN_SEGMENTS {
        return Err(InvalidArgument::TooFewSegments(segment_count));
    }

    let params = *params;
    Ok((0..=segment_count)
        .map(move |i| (i as f64 / segment_count as f64) * 2.0 * PI)
        .map(move |angle| params.position_at_angle(angle)))
}

/// Eager form of [`path_points`], for callers that want the whole
/// polyline at once.
pub fn discretize_path(
    params: &OrbitalParameters,
    segment_count: usize,
) -> Result<Vec<Vector3<f64>>> {
    Ok(path_points(params, segment_count)?.collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_too_few_segments() {
        let params = OrbitalParameters::circular(1.0, 1.0).unwrap();
        for n in 0..MIN_SEGMENTS {
            assert_eq!(
                discretize_path(&params, n),
                Err(InvalidArgument::TooFewSegments(n))
            );
        }
        assert!(discretize_path(&params, MIN_SEGMENTS).is_ok());
    }

    #[test]
    fn test_unit_circle() {
        // Four segments of an untilted unit orbit hit the axis points
        let params = OrbitalParameters::circular(1.0, 1.0).unwrap();
        let points = discretize_path(&params, 4).unwrap();

        assert_eq!(points.len(), 5);
        assert_relative_eq!(points[0], Vector3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(points[1], Vector3::new(0.0, 0.0, 1.0), epsilon = 1e-15);
        assert_relative_eq!(points[2], Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-15);
        assert_relative_eq!(points[3], Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-15);
        assert_relative_eq!(points[4], Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_closed_loop() {
        let params = OrbitalParameters::new(2.2, 0.7, 1.3, 0.2, 0.35).unwrap();
        for n in [3, 7, 50, 128] {
            let points = discretize_path(&params, n).unwrap();
            assert_eq!(points.len(), n + 1);
            assert_relative_eq!(points[0], points[n], epsilon = 1e-12);
        }
    }

    #[test]
    fn test_phase_does_not_shift_path() {
        // The trace is the orbit's shape, not the object's position on it
        let a = OrbitalParameters::new(1.5, 0.4, 0.0, 1.0, 0.2).unwrap();
        let b = OrbitalParameters::new(1.5, 0.4, 2.9, 0.01, 0.2).unwrap();

        let pa = discretize_path(&a, 16).unwrap();
        let pb = discretize_path(&b, 16).unwrap();
        for (u, v) in pa.into_iter().zip(pb) {
            assert_relative_eq!(u, v);
        }
    }

    #[test]
    fn test_restartable() {
        let params = OrbitalParameters::new(1.5, 0.4, 0.8, 1.0, 0.2).unwrap();
        let first: Vec<_> = path_points(&params, 12).unwrap().collect();
        let second: Vec<_> = path_points(&params, 12).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_winding_order() {
        // Increasing index winds from +x towards +z (for an untilted orbit)
        let params = OrbitalParameters::circular(1.0, 1.0).unwrap();
        let points = discretize_path(&params, 8).unwrap();
        assert!(points[1].z > 0.0);
        assert!(points[1].x > 0.0);
    }
}
