use std::path::PathBuf;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use log::info;
use physics_sandbox::{Engine, SettingsOverrides};

mod scenes;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scene {
    /// Circles bouncing inside four walls, no gravity
    Bounce,
    /// Circles falling onto the floor; drag to pour more
    Rain,
    /// Static pegs and a kinematic sweeper
    Pegs,
}

#[derive(Parser, Debug)]
#[command(about = "Physics sandbox demo scenes")]
struct Args {
    #[arg(value_enum, default_value_t = Scene::Bounce)]
    scene: Scene,

    /// YAML file with settings overrides
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let overrides = match &args.config {
        Some(path) => SettingsOverrides::from_yaml_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => scenes::default_overrides(args.scene),
    };

    info!("Running scene: {:?}", args.scene);
    let mut engine = Engine::new(overrides)?;
    let handlers = match args.scene {
        Scene::Bounce => scenes::bounce(&mut engine)?,
        Scene::Rain => scenes::rain(&mut engine)?,
        Scene::Pegs => scenes::pegs(&mut engine)?,
    };
    engine.run(handlers)?;
    Ok(())
}
