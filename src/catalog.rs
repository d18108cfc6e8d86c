//! The mock debris catalog: every tradeable object the marketplace
//! pretends to track, with randomly fabricated physical and market
//! fields. All randomness lives here; the orbital engine itself is pure.

use std::f64::consts::PI;

use nalgebra::Point3;
use rand::Rng;

use crate::geo::GeoCoordinate;
use crate::orbit::OrbitalParameters;

/// Used to scale altitudes into unit-sphere coordinates.
pub const EARTH_RADIUS_KM: f64 = 6378.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebrisKind {
    DefunctSatellite,
    RocketBody,
    Fragment,
}

impl DebrisKind {
    pub fn label(&self) -> &'static str {
        match self {
            DebrisKind::DefunctSatellite => "Defunct Satellite",
            DebrisKind::RocketBody => "Rocket Body",
            DebrisKind::Fragment => "Fragment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Usa,
    Russia,
    China,
    Eu,
    India,
    Japan,
}

impl Origin {
    pub fn label(&self) -> &'static str {
        match self {
            Origin::Usa => "USA",
            Origin::Russia => "Russia",
            Origin::China => "China",
            Origin::Eu => "EU",
            Origin::India => "India",
            Origin::Japan => "Japan",
        }
    }
}

/// Risk banding used everywhere a risk score turns into a color or a
/// label: high above 70, medium above 40, low otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn classify(risk_score: u32) -> Self {
        if risk_score > 70 {
            RiskBand::High
        } else if risk_score > 40 {
            RiskBand::Medium
        } else {
            RiskBand::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskBand::Low => "Low",
            RiskBand::Medium => "Medium",
            RiskBand::High => "High",
        }
    }

    /// Brand colors: solar-orange, amber, neon-cyan.
    pub fn color(&self) -> Point3<f32> {
        match self {
            RiskBand::High => parse_color("FF7F11"),
            RiskBand::Medium => parse_color("FFC107"),
            RiskBand::Low => parse_color("00FFC6"),
        }
    }
}

fn parse_color(s: &str) -> Point3<f32> {
    assert_eq!(s.len(), 6);
    let r = u8::from_str_radix(&s[0..2], 16).unwrap();
    let g = u8::from_str_radix(&s[2..4], 16).unwrap();
    let b = u8::from_str_radix(&s[4..6], 16).unwrap();

    Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
}

#[derive(Debug, Clone)]
pub struct DebrisInfo {
    pub id: u32,
    pub name: String,
    pub kind: DebrisKind,
    pub origin: Origin,
    /// Characteristic size, meters.
    pub size_m: f64,
    /// Composite collision-risk score, 0-99.
    pub risk_score: u32,
    pub altitude_km: f64,
    pub velocity_km_s: f64,
    /// Current listing price.
    pub price_eth: f64,
    /// Mock wallet address of the current owner.
    pub owner: String,
    /// Ground-track reference point, degrees.
    pub latitude: f64,
    pub longitude: f64,
}

impl DebrisInfo {
    pub fn risk_band(&self) -> RiskBand {
        RiskBand::classify(self.risk_score)
    }

    pub fn color(&self) -> Point3<f32> {
        self.risk_band().color()
    }

    /// Crude mass estimate the marketplace displays: 100 kg per meter.
    pub fn mass_kg(&self) -> f64 {
        self.size_m * 100.0
    }

    /// Monthly insurance premium: 5% of the listing price.
    pub fn insurance_premium_eth(&self) -> f64 {
        self.price_eth * 0.05
    }

    /// Bounty paid out on verified deorbit: three times the listing price.
    pub fn cleanup_bounty_eth(&self) -> f64 {
        self.price_eth * 3.0
    }

    /// Where the object sits relative to the globe, altitude scaled into
    /// unit-sphere coordinates.
    pub fn geo_position(&self) -> GeoCoordinate {
        GeoCoordinate::new(
            self.latitude,
            self.longitude,
            1.0 + self.altitude_km / EARTH_RADIUS_KM,
        )
        .expect("catalog fields stay inside the engine's domain")
    }

    /// The decorative orbit ring drawn around the globe for this object:
    /// ring radius from the altitude, inclination leaning with the
    /// latitude, phase and speed varied per object so the swarm doesn't
    /// move in lockstep.
    pub fn ring_orbit(&self) -> OrbitalParameters {
        let radius = 1.0 + self.altitude_km / EARTH_RADIUS_KM;
        let inclination = (self.latitude / 90.0) * PI * 0.3;
        let phase = f64::from(self.id % 100) / 10.0;
        let angular_speed = 0.1 + f64::from(self.id % 50) * 0.001;

        OrbitalParameters::new(radius, inclination, phase, angular_speed, 0.0)
            .expect("catalog fields stay inside the engine's domain")
    }

    /// The close-up orbit shown in the detail view: fixed radius, with
    /// the risk score feeding the eccentricity bias (riskier objects
    /// trace visibly flatter loops).
    pub fn detail_orbit(&self) -> OrbitalParameters {
        let bias = 0.1 + f64::from(self.risk_score) / 200.0;

        OrbitalParameters::new(1.5, 0.0, 0.0, 1.0, bias)
            .expect("catalog fields stay inside the engine's domain")
    }
}

/// A random orbit for the hero background swarm, unrelated to any
/// catalog fields: mid-range radii, gentle speeds, any tilt.
pub fn hero_orbit(rng: &mut impl Rng) -> OrbitalParameters {
    OrbitalParameters::new(
        1.5 + rng.random_range(0.0..1.5),
        rng.random_range(0.0..PI * 0.5),
        rng.random_range(0.0..PI * 2.0),
        0.05 + rng.random_range(0.0..0.1),
        0.0,
    )
    .expect("hero ranges stay inside the engine's domain")
}

const KINDS: [DebrisKind; 3] = [
    DebrisKind::DefunctSatellite,
    DebrisKind::RocketBody,
    DebrisKind::Fragment,
];

const ORIGINS: [Origin; 6] = [
    Origin::Usa,
    Origin::Russia,
    Origin::China,
    Origin::Eu,
    Origin::India,
    Origin::Japan,
];

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<DebrisInfo>,
}

impl Catalog {
    /// Fabricates `count` objects. Ids start at 1000, like the listings
    /// on the marketplace pages.
    pub fn generate(count: usize, rng: &mut impl Rng) -> Self {
        let entries = (0..count)
            .map(|i| {
                let id = 1000 + i as u32;
                DebrisInfo {
                    id,
                    name: format!("Debris #{}", id),
                    kind: KINDS[rng.random_range(0..KINDS.len())],
                    origin: ORIGINS[rng.random_range(0..ORIGINS.len())],
                    size_m: 0.1 + rng.random_range(0.0..10.0),
                    risk_score: rng.random_range(0..100),
                    altitude_km: 200.0 + rng.random_range(0.0..800.0),
                    velocity_km_s: 7.0 + rng.random_range(0.0..4.0),
                    price_eth: 0.1 + rng.random_range(0.0..2.0),
                    owner: format!(
                        "0x{:06x}...{:04x}",
                        rng.random_range(0..0x100_0000u32),
                        rng.random_range(0..0x1_0000u32)
                    ),
                    latitude: rng.random_range(-90.0..90.0),
                    longitude: rng.random_range(-180.0..180.0),
                }
            })
            .collect();

        Catalog { entries }
    }

    pub fn get(&self, id: u32) -> Option<&DebrisInfo> {
        self.entries.iter().find(|d| d.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DebrisInfo> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_banding_thresholds() {
        assert_eq!(RiskBand::classify(0), RiskBand::Low);
        assert_eq!(RiskBand::classify(40), RiskBand::Low);
        assert_eq!(RiskBand::classify(41), RiskBand::Medium);
        assert_eq!(RiskBand::classify(70), RiskBand::Medium);
        assert_eq!(RiskBand::classify(71), RiskBand::High);
        assert_eq!(RiskBand::classify(99), RiskBand::High);
    }

    #[test]
    fn test_band_colors() {
        // Neon-cyan for low risk: full green and a strong blue, no red
        let low = RiskBand::Low.color();
        assert_eq!(low.x, 0.0);
        assert_eq!(low.y, 1.0);
        assert!(low.z > 0.7);

        // Solar-orange for high risk is red-dominant
        let high = RiskBand::High.color();
        assert!(high.x > high.y && high.y > high.z);
    }

    #[test]
    fn test_generated_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let catalog = Catalog::generate(200, &mut rng);
        assert_eq!(catalog.len(), 200);

        for d in catalog.iter() {
            assert!(d.risk_score < 100);
            assert!((200.0..1000.0).contains(&d.altitude_km));
            assert!((7.0..11.0).contains(&d.velocity_km_s));
            assert!((0.1..2.1).contains(&d.price_eth));
            assert!((-90.0..90.0).contains(&d.latitude));
            assert!((-180.0..180.0).contains(&d.longitude));
            assert!(d.name.starts_with("Debris #"));
        }
    }

    #[test]
    fn test_derived_orbits_are_valid() {
        // Every catalog entry must produce in-domain engine inputs,
        // whatever the dice said
        let mut rng = StdRng::seed_from_u64(99);
        let catalog = Catalog::generate(500, &mut rng);

        for d in catalog.iter() {
            let ring = d.ring_orbit();
            assert!(ring.radius() > 1.0);
            assert!(ring.period().is_some());

            let detail = d.detail_orbit();
            assert!(detail.eccentricity_bias() < 1.0);
            assert!(detail.eccentricity_bias() >= 0.1);

            // Geo positions sit above the sphere surface
            assert!(d.geo_position().to_cartesian().norm() > 1.0);
        }
    }

    #[test]
    fn test_lookup_by_id() {
        let mut rng = StdRng::seed_from_u64(1);
        let catalog = Catalog::generate(10, &mut rng);

        assert_eq!(catalog.get(1003).map(|d| d.id), Some(1003));
        assert!(catalog.get(2000).is_none());
    }

    #[test]
    fn test_marketplace_derivations() {
        let mut rng = StdRng::seed_from_u64(5);
        let catalog = Catalog::generate(1, &mut rng);
        let d = catalog.iter().next().unwrap();

        assert!((d.insurance_premium_eth() - d.price_eth * 0.05).abs() < 1e-12);
        assert!((d.cleanup_bounty_eth() - d.price_eth * 3.0).abs() < 1e-12);
        assert!((d.mass_kg() - d.size_m * 100.0).abs() < 1e-12);
    }
}
