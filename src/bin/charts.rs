use std::fs;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

use debris_viz::charts::{draw_census_chart, draw_heatmap, generate_census, generate_heatmap};

#[derive(Debug, Parser)]
struct Args {
    /// Directory the PNGs are written into
    #[arg(long, default_value = "plots")]
    out_dir: String,

    /// Fixed RNG seed, for reproducible series
    #[arg(long, default_value_t = 1337)]
    seed: u64,
}

pub fn main() {
    env_logger::init();
    let args = Args::parse();

    fs::create_dir_all(&args.out_dir).expect("Failed to create output directory");
    let mut rng = StdRng::seed_from_u64(args.seed);

    let census = generate_census(&mut rng);
    let census_path = format!("{}/census.png", args.out_dir);
    draw_census_chart(&census_path, &census).unwrap();
    log::info!("wrote {}", census_path);

    let heatmap = generate_heatmap(&mut rng);
    let heatmap_path = format!("{}/heatmap.png", args.out_dir);
    draw_heatmap(&heatmap_path, &heatmap).unwrap();
    log::info!("wrote {}", heatmap_path);

    println!("Wrote {} and {}", census_path, heatmap_path);
}
