//! Conversion from latitude/longitude/altitude to Cartesian points on or
//! above the reference sphere.

use nalgebra::Vector3;

use crate::error::{InvalidArgument, Result};

/// A point relative to the sphere surface: latitude and longitude in
/// degrees, radial distance from the sphere center in the same unit
/// system as orbital radii (the sphere surface sits at 1.0).
///
/// Out-of-range inputs are rejected at construction, so a value of this
/// type always projects cleanly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude: f64,
    longitude: f64,
    radial_distance: f64,
}

impl GeoCoordinate {
    pub fn new(latitude: f64, longitude: f64, radial_distance: f64) -> Result<Self> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(InvalidArgument::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(InvalidArgument::LongitudeOutOfRange(longitude));
        }
        if !(radial_distance > 0.0) {
            return Err(InvalidArgument::NonPositiveDistance(radial_distance));
        }

        Ok(GeoCoordinate {
            latitude,
            longitude,
            radial_distance,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn radial_distance(&self) -> f64 {
        self.radial_distance
    }

    /// Standard spherical-to-Cartesian conversion, with longitude offset
    /// by 180 degrees to match the orientation convention shared by all
    /// the renderers. The north pole maps to +y.
    pub fn to_cartesian(&self) -> Vector3<f64> {
        let phi = (90.0 - self.latitude).to_radians();
        let theta = (self.longitude + 180.0).to_radians();

        Vector3::new(
            -self.radial_distance * phi.sin() * theta.cos(),
            self.radial_distance * phi.cos(),
            self.radial_distance * phi.sin() * theta.sin(),
        )
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_validation() {
        assert!(GeoCoordinate::new(45.0, -120.0, 1.1).is_ok());
        // Boundary values are in-range
        assert!(GeoCoordinate::new(90.0, 180.0, 1.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0, 0.5).is_ok());

        assert_eq!(
            GeoCoordinate::new(90.5, 0.0, 1.0),
            Err(InvalidArgument::LatitudeOutOfRange(90.5))
        );
        assert_eq!(
            GeoCoordinate::new(0.0, -181.0, 1.0),
            Err(InvalidArgument::LongitudeOutOfRange(-181.0))
        );
        assert_eq!(
            GeoCoordinate::new(0.0, 0.0, 0.0),
            Err(InvalidArgument::NonPositiveDistance(0.0))
        );
    }

    #[test]
    fn test_north_pole() {
        let pole = GeoCoordinate::new(90.0, 0.0, 1.0).unwrap();
        assert_relative_eq!(
            pole.to_cartesian(),
            Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-15
        );

        // Longitude is degenerate at the pole
        let pole2 = GeoCoordinate::new(90.0, 135.0, 1.0).unwrap();
        assert_relative_eq!(pole2.to_cartesian(), pole.to_cartesian(), epsilon = 1e-15);
    }

    #[test]
    fn test_south_pole() {
        let pole = GeoCoordinate::new(-90.0, 0.0, 2.0).unwrap();
        assert_relative_eq!(
            pole.to_cartesian(),
            Vector3::new(0.0, -2.0, 0.0),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_equator() {
        // At the reference meridian the offset convention puts the point
        // on +x, with no y component
        let v = GeoCoordinate::new(0.0, 0.0, 1.0).unwrap().to_cartesian();
        assert_relative_eq!(v, Vector3::new(1.0, 0.0, 0.0), epsilon = 1e-15);

        // A quarter turn east lands on -z
        let v = GeoCoordinate::new(0.0, 90.0, 1.0).unwrap().to_cartesian();
        assert_relative_eq!(v, Vector3::new(0.0, 0.0, -1.0), epsilon = 1e-15);

        // The antimeridian is opposite the reference meridian
        let v = GeoCoordinate::new(0.0, 180.0, 1.0).unwrap().to_cartesian();
        assert_relative_eq!(v, Vector3::new(-1.0, 0.0, 0.0), epsilon = 1e-15);
    }

    #[test]
    fn test_radius_scales_linearly() {
        let near = GeoCoordinate::new(37.0, -122.0, 1.0).unwrap().to_cartesian();
        let far = GeoCoordinate::new(37.0, -122.0, 2.5).unwrap().to_cartesian();
        assert_relative_eq!(far, near * 2.5, epsilon = 1e-12);
        assert_relative_eq!(near.norm(), 1.0, epsilon = 1e-12);
    }
}
