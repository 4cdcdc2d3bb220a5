//! rampart-runner: headless driver for the RAMPART simulation.
//!
//! Usage:
//!   rampart-runner --list-maps
//!   rampart-runner --map gauntlet-run --waves 5 --script build.json
//!   RUST_LOG=rampart_sim=debug rampart-runner --catalog maps.json --map canyon

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rampart_core::commands::PlayerCommand;
use rampart_core::enums::GamePhase;
use rampart_map::MapCatalog;
use rampart_sim::{SimConfig, SimulationEngine};

#[derive(Parser)]
#[command(name = "rampart-runner")]
#[command(about = "Run a RAMPART tower-defense game without a front end")]
struct Args {
    /// Map id to play
    #[arg(long, default_value = "gauntlet-run")]
    map: String,

    /// JSON map catalog to use instead of the built-in maps
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// RNG seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Stop once this many waves have been cleared
    #[arg(long, default_value_t = 3)]
    waves: u32,

    /// Hard cap on simulated ticks
    #[arg(long, default_value_t = 100_000)]
    max_ticks: u64,

    /// JSON list of player commands applied before the first tick
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print the available maps and exit
    #[arg(long)]
    list_maps: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();
    let catalog = load_catalog(args.catalog.as_deref())?;

    if args.list_maps {
        for map in catalog.iter() {
            println!("{:<16} {}", map.id, map.name);
        }
        return Ok(());
    }

    let Some(definition) = catalog.get(&args.map) else {
        bail!("unknown map '{}'", args.map);
    };

    let mut engine = SimulationEngine::new(SimConfig {
        seed: args.seed,
        ..Default::default()
    });
    engine
        .load_map(definition)
        .with_context(|| format!("loading map '{}'", args.map))?;

    if let Some(path) = &args.script {
        for command in load_script(path)? {
            if let Err(rejection) = engine.execute(command.clone()) {
                warn!(?command, %rejection, "script command rejected");
            }
        }
    }
    // A paused engine never advances time.
    if engine.is_paused() {
        warn!("script left the game paused; resuming");
        engine.set_paused(false);
    }

    let mut cleared = 0;
    while engine.time().tick < args.max_ticks {
        if engine.phase() == GamePhase::Building {
            if cleared >= args.waves {
                break;
            }
            engine.start_next_wave()?;
        }

        let snapshot = engine.tick();
        if snapshot.phase == GamePhase::GameOver {
            break;
        }
        if snapshot.phase == GamePhase::Building && snapshot.wave.next_wave_ready {
            cleared = snapshot.run.wave;
        }
    }

    let run = engine.run_view();
    let outcome = match engine.phase() {
        GamePhase::GameOver => "defeat",
        _ if cleared >= args.waves => "survived",
        _ => "tick limit reached",
    };
    info!(
        map = %args.map,
        seed = args.seed,
        ticks = engine.time().tick,
        wave = run.wave,
        money = run.money,
        lives = run.lives,
        score = run.score,
        outcome,
        "run finished"
    );
    println!("{}", serde_json::to_string_pretty(&run)?);
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<MapCatalog> {
    let Some(path) = path else {
        return Ok(MapCatalog::builtin());
    };
    let json =
        fs::read_to_string(path).with_context(|| format!("reading catalog {}", path.display()))?;
    let catalog = MapCatalog::from_json(&json)
        .with_context(|| format!("parsing catalog {}", path.display()))?;
    info!(path = %path.display(), maps = catalog.maps.len(), "catalog loaded");
    Ok(catalog)
}

fn load_script(path: &Path) -> Result<Vec<PlayerCommand>> {
    let json =
        fs::read_to_string(path).with_context(|| format!("reading script {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("parsing script {}", path.display()))
}
