use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use debris_viz::catalog::Catalog;
use debris_viz::orbit::discretize_path;

#[derive(Debug, Parser)]
struct Args {
    /// Catalog id to describe; omit to list the whole catalog
    id: Option<u32>,

    /// How many debris objects to fabricate
    #[arg(long, default_value_t = 75)]
    count: usize,

    /// Fixed RNG seed, for a reproducible catalog
    #[arg(long, default_value_t = 1337)]
    seed: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let catalog = Catalog::generate(args.count, &mut rng);

    match args.id {
        None => {
            for debris in catalog.iter() {
                println!(
                    "{:>6}  {:<22} {:<8} risk {:>2} ({})  {:>4.0} km  {:.3} ETH",
                    debris.id,
                    debris.kind.label(),
                    debris.origin.label(),
                    debris.risk_score,
                    debris.risk_band().label(),
                    debris.altitude_km,
                    debris.price_eth,
                );
            }
        }
        Some(id) => match catalog.get(id) {
            None => println!("No debris with id {} (try without an id to list)", id),
            Some(debris) => {
                let orbit = debris.ring_orbit();
                let base = debris.geo_position();

                println!("Dossier for {}", debris.name);
                println!("- Type: {}", debris.kind.label());
                println!("- Origin: {}", debris.origin.label());
                println!("- Size: {:.1} m", debris.size_m);
                println!("- Mass estimate: {:.1} kg", debris.mass_kg());
                println!("- Altitude: {:.0} km", debris.altitude_km);
                println!("- Velocity: {:.1} km/s", debris.velocity_km_s);
                println!(
                    "- Risk score: {} ({})",
                    debris.risk_score,
                    debris.risk_band().label()
                );
                println!("- Owner: {}", debris.owner);
                println!("- Price: {:.3} ETH", debris.price_eth);
                println!(
                    "- Insurance premium: {:.3} ETH/month",
                    debris.insurance_premium_eth()
                );
                println!("- Cleanup bounty: {:.2} ETH", debris.cleanup_bounty_eth());
                println!();
                println!("Orbital characteristics (unit-sphere frame)");
                println!("- Ring radius: {:.4}", orbit.radius());
                println!(
                    "- Inclination: {:.1} deg",
                    orbit.inclination().to_degrees()
                );
                println!("- Angular speed: {:.3} rad/s", orbit.angular_speed());
                println!("- Period: {:?} s", orbit.period());
                println!(
                    "- Ground-track point: ({:.2} N, {:.2} E) -> {:?}",
                    base.latitude(),
                    base.longitude(),
                    base.to_cartesian()
                );

                let ring = discretize_path(&orbit, 8).expect("8 segments is above the minimum");
                println!("- Ring sample ({} points, closed):", ring.len());
                for point in ring {
                    println!("    ({:+.3}, {:+.3}, {:+.3})", point.x, point.y, point.z);
                }
            }
        },
    }
}
