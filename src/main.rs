use clap::{Parser, ValueEnum};
use kiss3d::light::Light;
use kiss3d::window::Window;
use rand::rngs::StdRng;
use rand::SeedableRng;

use debris_viz::catalog::Catalog;
use debris_viz::gui::{SceneKind, Simulation};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SceneArg {
    /// Background swarm of synthetic orbits
    Hero,
    /// Full catalog over its ground-track points
    Globe,
    /// One object up close
    Detail,
}

impl From<SceneArg> for SceneKind {
    fn from(arg: SceneArg) -> Self {
        match arg {
            SceneArg::Hero => SceneKind::Hero,
            SceneArg::Globe => SceneKind::Globe,
            SceneArg::Detail => SceneKind::Detail,
        }
    }
}

#[derive(Debug, Parser)]
struct Args {
    /// Scene to open (switchable at runtime with keys 1/2/3)
    #[arg(value_enum, default_value_t = SceneArg::Globe)]
    scene: SceneArg,

    /// How many debris objects to fabricate
    #[arg(long, default_value_t = 75)]
    count: usize,

    /// Fixed RNG seed, for a reproducible catalog
    #[arg(long)]
    seed: Option<u64>,

    /// Catalog id to focus initially (ids start at 1000)
    #[arg(long)]
    id: Option<u32>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let catalog = Catalog::generate(args.count, &mut rng);
    log::info!("fabricated a catalog of {} debris objects", catalog.len());

    let mut window = Window::new("DebrisDAO Orbital Explorer");
    window.set_light(Light::StickToCamera);

    let simulation = Simulation::new(catalog, args.scene.into(), args.id, rng, &mut window);
    window.render_loop(simulation);
}
