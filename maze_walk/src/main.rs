//! Headless maze walk
//!
//! Loads the walk configuration, a level layout and a replay script, then
//! steps the camera through the script and logs what happened.
//!
//! ```text
//! maze_walk [config.toml] [replay.ron]
//! ```

use std::path::{Path, PathBuf};

use maze_engine::foundation::logging;
use maze_engine::foundation::time::Stopwatch;
use maze_engine::prelude::*;

const DEFAULT_CONFIG: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/resources/maze_walk.toml");

/// Application errors
#[derive(thiserror::Error, Debug)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Level error: {0}")]
    Level(#[from] LevelError),
}

struct Args {
    config: PathBuf,
    replay: Option<PathBuf>,
}

impl Args {
    fn parse() -> Self {
        let mut args = std::env::args_os().skip(1).map(PathBuf::from);
        Self {
            config: args.next().unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG)),
            replay: args.next(),
        }
    }
}

/// Load the configured level, or the built-in corridor when none is set
///
/// A relative level path is read from the config file's directory.
fn load_level(config: &MazeConfig, config_path: &Path) -> Result<LevelLayout, LevelError> {
    let config_dir = config_path.parent().unwrap_or_else(|| Path::new(""));
    match config.level.resolve_path(config_dir) {
        Some(path) => LevelLayout::load(path),
        None => {
            log::info!("No level configured, using the built-in corridor");
            Ok(LevelLayout::corridor())
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let config = MazeConfig::load_or_default(&args.config)?;
    logging::init_with_level(&config.engine.log_level);
    config.validate()?;
    log::info!("Starting maze walk with {}", args.config.display());

    let level = load_level(&config, &args.config)?;

    let script = match &args.replay {
        Some(path) => ReplayScript::load_from_file(path)?,
        None => ReplayScript::default(),
    };
    script.validate()?;

    let mut walker = Walker::new(&level, &config)?;
    let timer = Stopwatch::start_new();
    let reports = script.run(&mut walker);

    for report in reports.iter().filter(|r| r.footstep) {
        log::info!(
            "Frame {}: footstep at ({:.3}, {:.3})",
            report.frame,
            report.position.x,
            report.position.z
        );
    }

    let blocked = reports.iter().filter(|r| r.blocked_by.is_some()).count();
    let end = walker.camera().position;
    log::info!(
        "Walked {} frames ({:.2}s simulated) in {:.2}ms: {} blocked, {} footsteps, ended at ({:.3}, {:.3}, {:.3})",
        reports.len(),
        walker.clock().total_time(),
        timer.elapsed_millis(),
        blocked,
        walker.footsteps(),
        end.x,
        end.y,
        end.z
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(&args) {
        // Logging may not be up yet if the config failed to load
        eprintln!("maze_walk: {e}");
        log::error!("{e}");
        std::process::exit(1);
    }
}
