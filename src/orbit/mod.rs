use std::f64::consts::PI;

use nalgebra::Vector3;

use crate::error::{InvalidArgument, Result};

mod path;

pub use path::{discretize_path, path_points, MIN_SEGMENTS};

/// The scalar inputs that fully determine a synthetic orbit's shape and
/// motion. Lengths are in unit-sphere coordinates (the central body has
/// radius 1.0), not physical kilometers.
///
/// The motion model is deliberately not Keplerian: the orbit is a tilted
/// circle traversed at constant angular speed, and `eccentricity_bias`
/// flattens the out-of-plane excursion as a linear factor rather than
/// turning the path into a true ellipse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalParameters {
    radius: f64,
    inclination: f64,
    phase: f64,
    angular_speed: f64,
    eccentricity_bias: f64,
}

impl OrbitalParameters {
    /// Validates the shape invariants: `radius > 0`, `angular_speed >= 0`
    /// (zero is a permitted degenerate stationary point), and
    /// `eccentricity_bias` in `[0, 1)`. Inclination and phase are angles
    /// and need no restriction; sin/cos are already periodic.
    pub fn new(
        radius: f64,
        inclination: f64,
        phase: f64,
        angular_speed: f64,
        eccentricity_bias: f64,
    ) -> Result<Self> {
        if !(radius > 0.0) {
            return Err(InvalidArgument::NonPositiveRadius(radius));
        }
        if !(angular_speed >= 0.0) {
            return Err(InvalidArgument::NegativeAngularSpeed(angular_speed));
        }
        if !(0.0..1.0).contains(&eccentricity_bias) {
            return Err(InvalidArgument::BiasOutOfRange(eccentricity_bias));
        }

        Ok(OrbitalParameters {
            radius,
            inclination,
            phase,
            angular_speed,
            eccentricity_bias,
        })
    }

    /// An untilted, unbiased orbit; handy when only the ring shape matters.
    pub fn circular(radius: f64, angular_speed: f64) -> Result<Self> {
        OrbitalParameters::new(radius, 0.0, 0.0, angular_speed, 0.0)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn eccentricity_bias(&self) -> f64 {
        self.eccentricity_bias
    }

    /// Elapsed time for one full revolution, or `None` for a stationary
    /// orbit (zero angular speed).
    pub fn period(&self) -> Option<f64> {
        if self.angular_speed > 0.0 {
            Some(2.0 * PI / self.angular_speed)
        } else {
            None
        }
    }

    /// Evaluates the orbit at a raw angle, ignoring phase and speed.
    /// Shared by the time sampler and the path discretizer so the two
    /// cannot drift apart.
    pub fn position_at_angle(&self, angle: f64) -> Vector3<f64> {
        let (sin, cos) = angle.sin_cos();
        Vector3::new(
            self.radius * cos,
            self.radius * sin * self.inclination.sin(),
            self.radius * sin * self.inclination.cos() * (1.0 - self.eccentricity_bias),
        )
    }

    /// Maps an elapsed time to a Cartesian position. Total over all finite
    /// times; negative times mean "before the reference epoch" and fall
    /// out of the same formula.
    pub fn sample_position(&self, elapsed_time: f64) -> Vector3<f64> {
        self.position_at_angle(elapsed_time * self.angular_speed + self.phase)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_validation() {
        assert!(OrbitalParameters::new(1.0, 0.3, 0.0, 0.1, 0.5).is_ok());
        // Zero speed is a permitted degenerate case
        assert!(OrbitalParameters::new(1.0, 0.0, 0.0, 0.0, 0.0).is_ok());

        assert_eq!(
            OrbitalParameters::new(0.0, 0.0, 0.0, 1.0, 0.0),
            Err(InvalidArgument::NonPositiveRadius(0.0))
        );
        assert_eq!(
            OrbitalParameters::new(-2.0, 0.0, 0.0, 1.0, 0.0),
            Err(InvalidArgument::NonPositiveRadius(-2.0))
        );
        assert_eq!(
            OrbitalParameters::new(1.0, 0.0, 0.0, -0.1, 0.0),
            Err(InvalidArgument::NegativeAngularSpeed(-0.1))
        );
        assert_eq!(
            OrbitalParameters::new(1.0, 0.0, 0.0, 1.0, 1.0),
            Err(InvalidArgument::BiasOutOfRange(1.0))
        );
        assert_eq!(
            OrbitalParameters::new(1.0, 0.0, 0.0, 1.0, -0.2),
            Err(InvalidArgument::BiasOutOfRange(-0.2))
        );
        assert!(OrbitalParameters::new(f64::NAN, 0.0, 0.0, 1.0, 0.0).is_err());
    }

    #[test]
    fn test_sample_at_epoch() {
        // Reference scenario: unbiased, untilted orbit starts on the x-axis
        let params = OrbitalParameters::new(2.0, 0.0, 0.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(params.sample_position(0.0), Vector3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turn() {
        // With inclination 0 the motion stays in the xz plane
        let params = OrbitalParameters::new(2.0, 0.0, 0.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(
            params.sample_position(PI / 2.0),
            Vector3::new(0.0, 0.0, 2.0),
            epsilon = 1e-15
        );

        // With inclination pi/2 the same excursion lands on the y-axis
        let params = OrbitalParameters::new(2.0, PI / 2.0, 0.0, 1.0, 0.0).unwrap();
        assert_relative_eq!(
            params.sample_position(PI / 2.0),
            Vector3::new(0.0, 2.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_periodicity() {
        let params = OrbitalParameters::new(1.7, 0.8, 1.1, 0.35, 0.25).unwrap();
        let period = params.period().unwrap();
        assert_relative_eq!(period, 2.0 * PI / 0.35);

        for &t in &[-3.0, 0.0, 0.4, 12.9] {
            assert_relative_eq!(
                params.sample_position(t),
                params.sample_position(t + period),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_negative_time() {
        // Negative time is just an angle before the phase offset
        let params = OrbitalParameters::new(1.0, 0.4, 0.6, 2.0, 0.1).unwrap();
        assert_relative_eq!(
            params.sample_position(-1.5),
            params.position_at_angle(-1.5 * 2.0 + 0.6)
        );
    }

    #[test]
    fn test_bounded_radius() {
        let params = OrbitalParameters::new(2.5, 1.1, 0.3, 0.7, 0.9).unwrap();
        for i in 0..1000 {
            let t = (i as f64) * 0.037 - 18.0;
            assert!(params.sample_position(t).norm() <= 2.5 + 1e-12);
        }
    }

    #[test]
    fn test_bias_flattens_out_of_plane() {
        // The bias only compresses z; x and y are untouched
        let unbiased = OrbitalParameters::new(2.0, 0.5, 0.0, 1.0, 0.0).unwrap();
        let biased = OrbitalParameters::new(2.0, 0.5, 0.0, 1.0, 0.6).unwrap();

        let a = unbiased.position_at_angle(1.2);
        let b = biased.position_at_angle(1.2);
        assert_relative_eq!(a.x, b.x);
        assert_relative_eq!(a.y, b.y);
        assert_relative_eq!(b.z, a.z * 0.4);
    }

    #[test]
    fn test_stationary_orbit() {
        let params = OrbitalParameters::new(1.5, 0.2, 0.9, 0.0, 0.0).unwrap();
        assert_eq!(params.period(), None);
        // Zero speed pins the object at its phase angle forever
        assert_relative_eq!(params.sample_position(0.0), params.sample_position(1e6));
    }
}
