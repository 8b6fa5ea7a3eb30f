use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::info;
use macroquad::prelude::*;

mod background;
mod clock;
mod config;
mod launch;
mod physics;
mod simulation;
mod space;

use config::Config;
use physics::Position;

/// Launch spacecraft past a planet and watch gravity bend their paths.
///
/// Click once to pick a starting point and again to aim; the distance between
/// the two clicks sets the launch speed. Right click cancels, Escape quits.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// YAML file with visual settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Target frame rate (one physics step per frame)
    #[arg(long)]
    fps: Option<u32>,

    /// Hide the fps and ship counters
    #[arg(long)]
    no_hud: bool,
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(fps) = args.fps {
        config.visuals.fps = fps;
    }

    if args.no_hud {
        config.visuals.hud = false;
    }

    config.visuals.validate()?;

    Ok(config)
}

fn window_conf(config: &Config) -> Conf {
    Conf {
        window_title: "Gravitational Slingshot Simulation".to_string(),
        window_width: config.physics.width as i32,
        window_height: config.physics.height as i32,
        window_resizable: false,
        sample_count: 4,
        icon: None,
        high_dpi: false,
        ..Default::default()
    }
}

async fn run(config: Config) {
    let mut limiter = clock::FrameLimiter::new(config.visuals.fps);
    let mut sim = simulation::Simulation::init(config);

    info!(
        "planet at ({}, {}), {:?}",
        sim.planet().pos().x,
        sim.planet().pos().y,
        sim.physics()
    );

    loop {
        limiter.tick();

        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        sim.handle_input();
        sim.update();

        sim.render_field();
        sim.step();
        sim.render_overlay();

        next_frame().await
    }

    info!("quit with totals {:?}", sim.totals());
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;

    info!("starting with {:?}", config.visuals);

    macroquad::Window::from_config(window_conf(&config), run(config));

    Ok(())
}
