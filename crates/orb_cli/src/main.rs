use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use orb_core::{cover_scene, load_scene, save_scene, SceneDesc};
use orb_renderer::{build_world, render, save_image, write_ppm, Camera};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cli;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting orb");

    let mut rng = match args.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let scene = load_or_generate(&args, &mut rng)?;
    if let Some(path) = &args.dump_scene {
        save_scene(&scene, path)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
    }

    let config = args.render_config();
    let camera = Camera::new(&scene.camera, config.aspect());
    let world = build_world(&scene);

    let image = render(&camera, &world, &config, &mut rng);

    if args.output_is_stdout() {
        let stdout = io::stdout();
        write_ppm(&image, BufWriter::new(stdout.lock())).context("Failed to write image to stdout")?;
    } else {
        save_image(&image, &args.output)
            .with_context(|| format!("Failed to save image to {}", args.output.display()))?;
    }

    Ok(())
}

fn load_or_generate(args: &Args, rng: &mut StdRng) -> Result<SceneDesc> {
    match &args.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display())),
        None => {
            let scene = cover_scene(rng);
            log::info!("Generated cover scene with {} spheres", scene.sphere_count());
            Ok(scene)
        }
    }
}
