mod app;

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use strata_geom::Vec3;
use strata_tables::TableStore;

use app::assets;
use app::commands::{self, SimulateArgs};
use app::config::{ClientConfig, load_config_from_path};
use app::watchers::ConfigReloader;
use app::worldgen::build_map;

#[derive(Parser, Debug)]
#[command(name = "strata", about = "Terrain height and area light queries")]
struct Cli {
    /// Client config (defaults to assets/strata.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Light/area tables (defaults to assets/tables.toml)
    #[arg(long)]
    tables: Option<PathBuf>,
    /// Directory containing assets/
    #[arg(long)]
    assets: Option<PathBuf>,
    /// Overrides the config's log level; RUST_LOG wins over both
    #[arg(long)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ground height and triangle under a world position
    Height { x: f32, y: f32, z: f32 },
    /// Every triangle of the cell under a world position
    Cell { x: f32, y: f32, z: f32 },
    /// Zone, area and blended light at a world position
    Area { x: f32, y: f32, z: f32 },
    /// Walk a camera across the map and run the area update
    Simulate {
        #[arg(long, default_value_t = 300)]
        ticks: u32,
        #[arg(long, default_value_t = 1.0 / 60.0)]
        dt: f32,
        /// Camera velocity along world X, units per second
        #[arg(long, default_value_t = 60.0)]
        speed: f32,
        /// Reload the config file when it changes
        #[arg(long)]
        watch: bool,
    },
    /// Parallel batch of height queries
    Sample {
        #[arg(long, default_value_t = 100_000)]
        count: u64,
    },
}

fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_millis()
        .init();
}

fn load_config(path: &Path) -> Result<ClientConfig, Box<dyn Error>> {
    if path.exists() {
        load_config_from_path(path)
    } else {
        Ok(ClientConfig::default())
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let root = assets::resolve_assets_root(cli.assets.clone());
    let config_path = cli.config.clone().unwrap_or_else(|| assets::config_path(&root));
    let cfg = load_config(&config_path)?;
    init_logging(cli.log_level.as_deref().unwrap_or(&cfg.log_level));
    if !config_path.exists() {
        log::warn!("config {} not found; using defaults", config_path.display());
    }

    let tables_path = cli.tables.clone().unwrap_or_else(|| assets::tables_path(&root));
    let tables = if tables_path.exists() {
        TableStore::from_path(&tables_path)?
    } else {
        log::warn!("tables {} not found; no areas or lights", tables_path.display());
        TableStore::default()
    };

    let map = build_map(&cfg.terrain);
    match cli.command {
        Command::Height { x, y, z } => commands::height(&map, Vec3::new(x, y, z))?,
        Command::Cell { x, y, z } => commands::cell(&map, Vec3::new(x, y, z))?,
        Command::Area { x, y, z } => commands::area(&map, &tables, &cfg, Vec3::new(x, y, z)),
        Command::Simulate {
            ticks,
            dt,
            speed,
            watch,
        } => {
            let watch = watch.then(|| ConfigReloader::new(config_path.clone()));
            commands::simulate(
                &map,
                &tables,
                &cfg,
                SimulateArgs {
                    ticks,
                    dt,
                    velocity: Vec3::new(speed, 0.0, 0.0),
                    watch,
                },
            );
        }
        Command::Sample { count } => {
            let extent = cfg.terrain.chunks as f32 * strata_terrain::consts::MAP_CHUNK_SIZE;
            commands::sample(&map, count, extent);
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
