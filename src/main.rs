//! # Warren Main Entry Point
//!
//! Parses command-line options, seeds the random source, runs map generation
//! and prints the result to stdout.

use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;
use warren::generation::utils;
use warren::{config, generate, GenerationConfig, Grid, TextRenderer, WarrenResult};

/// Command line arguments for the warren map generator.
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(about = "A procedural dungeon map generator carving chained, randomly shaped rooms")]
#[command(version)]
struct Args {
    /// Map width in tiles
    #[arg(long, default_value_t = config::DEFAULT_MAP_WIDTH)]
    width: u32,

    /// Map height in tiles
    #[arg(long, default_value_t = config::DEFAULT_MAP_HEIGHT)]
    height: u32,

    /// Random seed for map generation
    #[arg(short, long)]
    seed: Option<u64>,

    /// Target fraction of tiles to carve, in (0, 1)
    #[arg(long, default_value_t = config::DEFAULT_MIN_FILLING)]
    min_filling: f64,

    /// Maximum room extent as a fraction of the map dimensions, in (0, 1]
    #[arg(long, default_value_t = config::DEFAULT_MAX_ROOM_SIZE)]
    max_room_size: f64,

    /// Named generation preset (overrides the fraction options)
    #[arg(long, value_enum)]
    preset: Option<MapPreset>,

    /// Path to a JSON generation config (overrides preset and fractions)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// Named map flavors.
#[derive(ValueEnum, Debug, Clone, Copy)]
enum MapPreset {
    /// Default mixed layout
    Random,
    /// Many tightly packed small rooms
    SmallRooms,
    /// Fewer, sprawling rooms
    BigRooms,
    /// A handful of arena-sized chambers
    Boss,
}

impl MapPreset {
    fn to_config(self) -> GenerationConfig {
        match self {
            MapPreset::Random => GenerationConfig::default(),
            MapPreset::SmallRooms => GenerationConfig::small_rooms(),
            MapPreset::BigRooms => GenerationConfig::big_rooms(),
            MapPreset::Boss => GenerationConfig::boss(),
        }
    }
}

fn main() -> WarrenResult<()> {
    let args = Args::parse();

    initialize_logging(&args.log_level);

    info!("Starting warren v{}", warren::VERSION);

    let generation_config = resolve_config(&args)?;
    debug!("Generation config: {:?}", generation_config);

    // Seeding is this binary's responsibility; the core only consumes the
    // handle it is given.
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(
        "Generating {}x{} map with seed {}",
        args.width, args.height, seed
    );

    let mut grid = Grid::new(args.width, args.height);
    let mut rng = utils::create_rng(seed);
    let stats = generate(&mut grid, &generation_config, &mut rng)?;

    info!(
        "Carved {} rooms covering {} of {} tiles",
        stats.rooms_carved,
        stats.tiles_filled,
        grid.len()
    );

    let stdout = std::io::stdout();
    TextRenderer::new().write_to(&grid, &mut stdout.lock())?;

    Ok(())
}

/// Initializes env_logger honoring the `--log-level` option; `RUST_LOG`
/// still takes precedence when set.
fn initialize_logging(log_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

/// Resolves the generation config from, in order of precedence: the JSON
/// config file, the named preset, the individual fraction options.
fn resolve_config(args: &Args) -> WarrenResult<GenerationConfig> {
    if let Some(path) = &args.config {
        let text = std::fs::read_to_string(path)?;
        let loaded = serde_json::from_str(&text)?;
        info!("Loaded generation config from {}", path.display());
        return Ok(loaded);
    }
    if let Some(preset) = args.preset {
        return Ok(preset.to_config());
    }
    Ok(GenerationConfig::new(args.min_filling, args.max_room_size))
}
