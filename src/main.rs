//! First-person hallway walker.
//!
//! Controls  W/↑ = forward  S/↓ = back  A/← D/→ = turn  Esc = quit
//!
//! ```bash
//! cargo run --release -- [--map level.txt] [--rays 400] [--parallel]
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{info, warn};

use hallway_rs::{
    Config,
    engine::Engine,
    platform::MinifbPlatform,
    renderer::Software,
    sim::frame_budget,
    world::{Cell, GridMap, Pose},
};

/// CLI options handled via `clap` derive.  Every default is the reference
/// setup, so a bare `hallway` opens the stock 800×600, 60° hallway view.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Opts {
    /// Window width in pixels
    #[arg(long, default_value_t = 800)]
    width: usize,

    /// Window height in pixels
    #[arg(long, default_value_t = 600)]
    height: usize,

    /// Horizontal field of view, degrees
    #[arg(long, default_value_t = 60.0)]
    fov: f32,

    /// Rays per frame (defaults to one per pixel column)
    #[arg(long)]
    rays: Option<usize>,

    /// Target frame rate
    #[arg(long, default_value_t = 60)]
    fps: usize,

    /// Text map (`#` = wall, `.` = floor); the built-in hallway otherwise
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Cast columns on all cores
    #[arg(long)]
    parallel: bool,
}

impl Opts {
    fn config(&self) -> Config {
        Config {
            screen_width: self.width,
            screen_height: self.height,
            fov: self.fov.to_radians(),
            ray_count: self.rays.unwrap_or(self.width),
            target_fps: self.fps,
            parallel: self.parallel,
            ..Config::default()
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = Opts::parse();
    let cfg = opts.config();
    cfg.validate().context("invalid configuration")?;

    // ─────────── map & spawn ───────
    let map = match &opts.map {
        Some(path) => GridMap::from_file(path, cfg.cell_size)
            .with_context(|| format!("loading map {}", path.display()))?,
        None => GridMap::hallway()
            .with_cell_size(cfg.cell_size)
            .context("scaling the built-in map")?,
    };
    info!(
        "map {}×{} cells, {} walls, cell size {}",
        map.width(),
        map.height(),
        map.wall_count(),
        map.cell_size()
    );

    // middle of cell (1, 1) facing +X, or the first open cell if that is solid
    let spawn_cell = if map.cell((1, 1)) == Some(Cell::Empty) {
        (1, 1)
    } else {
        let cell = map.open_cells().next().context("map has no open cell")?;
        warn!("cell (1, 1) is solid; spawning in {cell:?}");
        cell
    };
    let spawn = Pose::new(map.cell_centre(spawn_cell), 0.0);

    info!(
        "{}×{} @ {} FPS ({:?}/frame), {} rays over {:.1}°{}",
        cfg.screen_width,
        cfg.screen_height,
        cfg.target_fps,
        frame_budget(cfg.target_fps),
        cfg.ray_count,
        cfg.fov.to_degrees(),
        if cfg.parallel { ", parallel" } else { "" }
    );

    let mut platform = MinifbPlatform::new("3D Hallway Navigation", &cfg)?;
    let mut engine = Engine::new(Software::default(), map, spawn, cfg)
        .context("cannot start the frame loop")?;

    engine.run(&mut platform)
}
