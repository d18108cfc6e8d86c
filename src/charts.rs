//! PNG renderings of the dashboard charts: the tracked-debris census by
//! risk band and the altitude/collision-probability heatmap. Like the
//! catalog, the underlying series are fabricated client-side.

use std::error::Error;

use plotters::prelude::*;
use rand::Rng;

use crate::catalog::RiskBand;

const SPACE_NAVY: RGBColor = RGBColor(11, 26, 47);
const SOLAR_ORANGE: RGBColor = RGBColor(255, 127, 17);
const AMBER: RGBColor = RGBColor(255, 193, 7);
const NEON_CYAN: RGBColor = RGBColor(0, 255, 198);
const GRAY: RGBColor = RGBColor(190, 190, 190);

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// One month of the debris census, counted per risk band.
#[derive(Debug, Clone, Copy)]
pub struct CensusPoint {
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

impl CensusPoint {
    pub fn total(&self) -> f64 {
        self.high + self.medium + self.low
    }
}

/// Twelve months of drifting counts: high risk trends up, low risk
/// slowly down, with noise on top.
pub fn generate_census(rng: &mut impl Rng) -> Vec<CensusPoint> {
    let mut high = 2900.0;
    let mut medium = 11000.0;
    let mut low = 9000.0;

    (0..MONTHS.len())
        .map(|_| {
            high += 80.0 + rng.random_range(0.0..200.0) - 50.0;
            medium += 20.0 + rng.random_range(0.0..400.0) - 250.0;
            low += -30.0 + rng.random_range(0.0..300.0) - 150.0;

            CensusPoint { high, medium, low }
        })
        .collect()
}

pub fn draw_census_chart(path: &str, data: &[CensusPoint]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (900, 540)).into_drawing_area();
    root.fill(&SPACE_NAVY)?;

    let y_max = data.iter().map(CensusPoint::total).fold(0.0, f64::max) * 1.1;
    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Tracked debris by risk band",
            ("sans-serif", 24).into_font().color(&WHITE),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(0..data.len() - 1, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_labels(data.len())
        .x_label_formatter(&|i| MONTHS.get(*i).copied().unwrap_or("").to_string())
        .label_style(("sans-serif", 14).into_font().color(&WHITE.mix(0.7)))
        .axis_style(WHITE.mix(0.4))
        .light_line_style(WHITE.mix(0.08))
        .bold_line_style(WHITE.mix(0.15))
        .draw()?;

    let series: [(&str, &dyn Fn(&CensusPoint) -> f64, RGBColor); 4] = [
        ("High risk", &|p: &CensusPoint| p.high, SOLAR_ORANGE),
        ("Medium risk", &|p: &CensusPoint| p.medium, AMBER),
        ("Low risk", &|p: &CensusPoint| p.low, NEON_CYAN),
        ("Total", &|p: &CensusPoint| p.total(), GRAY),
    ];

    for (label, value, color) in series {
        chart
            .draw_series(LineSeries::new(
                data.iter().enumerate().map(|(i, p)| (i, value(p))),
                color.stroke_width(2),
            ))?
            .label(label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 16, y)], color));
    }

    chart
        .configure_series_labels()
        .border_style(WHITE.mix(0.4))
        .label_font(("sans-serif", 14).into_font().color(&WHITE.mix(0.8)))
        .draw()?;

    root.present()?;
    Ok(())
}

/// One fabricated tracking sample for the heatmap.
#[derive(Debug, Clone, Copy)]
pub struct HeatmapPoint {
    pub altitude_km: f64,
    pub collision_probability: f64,
}

/// Banding for collision probabilities (the heatmap's own thresholds,
/// distinct from the 0-99 risk-score bands).
pub fn probability_band(probability: f64) -> RiskBand {
    if probability > 0.04 {
        RiskBand::High
    } else if probability > 0.02 {
        RiskBand::Medium
    } else {
        RiskBand::Low
    }
}

/// Samples the four orbital regimes the dashboard pretends to monitor.
/// LEO is dense and risky, MEO moderate, GEO a narrow band, HEO sparse;
/// every tenth sample spawns a small debris cluster around itself.
pub fn generate_heatmap(rng: &mut impl Rng) -> Vec<HeatmapPoint> {
    let mut data = Vec::new();

    for i in 0..100 {
        let (altitude, probability) = if i < 40 {
            // LEO
            (
                200.0 + rng.random_range(0.0..1000.0),
                (0.03_f64 + rng.random_range(0.0..0.05)).clamp(0.001, 0.08),
            )
        } else if i < 70 {
            // MEO
            (
                2000.0 + rng.random_range(0.0..18000.0),
                (0.015_f64 + rng.random_range(0.0..0.025)).clamp(0.001, 0.04),
            )
        } else if i < 85 {
            // GEO
            (
                35000.0 + rng.random_range(0.0..1000.0),
                (0.02_f64 + rng.random_range(0.0..0.03)).clamp(0.001, 0.05),
            )
        } else {
            // HEO
            (
                500.0 + rng.random_range(0.0..35000.0),
                (0.005_f64 + rng.random_range(0.0..0.01)).clamp(0.001, 0.015),
            )
        };

        if i % 10 == 0 {
            let cluster_size = 3 + rng.random_range(0..5);
            for _ in 0..cluster_size {
                data.push(HeatmapPoint {
                    altitude_km: altitude + rng.random_range(0.0..100.0) - 50.0,
                    collision_probability: (probability + rng.random_range(0.0..0.01) - 0.005)
                        .clamp(0.001, 0.08),
                });
            }
        }

        data.push(HeatmapPoint {
            altitude_km: altitude,
            collision_probability: probability,
        });
    }

    data
}

pub fn draw_heatmap(path: &str, data: &[HeatmapPoint]) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(path, (900, 540)).into_drawing_area();
    root.fill(&SPACE_NAVY)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Collision probability by altitude",
            ("sans-serif", 24).into_font().color(&WHITE),
        )
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..40_000.0, 0.0..0.09)?;

    chart
        .configure_mesh()
        .x_desc("Altitude (km)")
        .y_desc("Collision probability")
        .label_style(("sans-serif", 14).into_font().color(&WHITE.mix(0.7)))
        .axis_style(WHITE.mix(0.4))
        .light_line_style(WHITE.mix(0.08))
        .bold_line_style(WHITE.mix(0.15))
        .draw()?;

    chart.draw_series(data.iter().map(|p| {
        let color = band_rgb(probability_band(p.collision_probability));
        Circle::new(
            (p.altitude_km, p.collision_probability),
            4,
            color.mix(0.8).filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

fn band_rgb(band: RiskBand) -> RGBColor {
    match band {
        RiskBand::High => SOLAR_ORANGE,
        RiskBand::Medium => AMBER,
        RiskBand::Low => NEON_CYAN,
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_census_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let census = generate_census(&mut rng);

        assert_eq!(census.len(), 12);
        for point in &census {
            assert!(point.high > 0.0);
            assert!((point.total() - (point.high + point.medium + point.low)).abs() < 1e-9);
        }
        // High risk trends upward over the year: drift +80, noise -50..+150
        assert!(census[11].high > census[0].high);
    }

    #[test]
    fn test_heatmap_bounds() {
        let mut rng = StdRng::seed_from_u64(4);
        let points = generate_heatmap(&mut rng);

        // 100 base samples plus ten clusters of 3-7
        assert!(points.len() >= 130);
        for p in &points {
            assert!((0.001..=0.08).contains(&p.collision_probability));
            assert!(p.altitude_km > 100.0 && p.altitude_km < 40_000.0);
        }
    }

    #[test]
    fn test_probability_bands() {
        assert_eq!(probability_band(0.05), RiskBand::High);
        assert_eq!(probability_band(0.03), RiskBand::Medium);
        assert_eq!(probability_band(0.01), RiskBand::Low);
    }
}
