use gravtrail::{ScenarioConfig, Scenario};
use gravtrail::run_2d;
use gravtrail::{bench_forces, bench_step};

use anyhow::{Context, Result};
use clap::Parser;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2-D gravitational particle simulator with merging bodies and fading trails")]
struct Args {
    /// Scenario file, relative paths resolve against the crate's scenarios/ directory
    #[arg(short, long, default_value = "planets.yaml")]
    file: PathBuf,

    /// Ignore the file and use the built-in defaults
    #[arg(long)]
    defaults: bool,

    /// Override the scene seed
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many steps without a window and log diagnostics
    #[arg(long)]
    steps: Option<u64>,

    /// Run the benchmarks instead of the viewer
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    if args.defaults {
        return Ok(ScenarioConfig::default());
    }

    let config_path = if args.file.is_absolute() || args.file.exists() {
        args.file.clone()
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file)
    };

    ScenarioConfig::from_yaml_file(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))
}

fn run_headless(scenario: &mut Scenario, steps: u64) {
    let sim = &mut scenario.simulation;
    let mass_before = sim.scene().total_mass();

    for _ in 0..steps {
        sim.step();
    }

    let scene = sim.scene();
    let p = scene.total_momentum();
    log::info!(
        "after {} steps: {} bodies, {} trail segments, total mass {:.3} (start {:.3}), momentum ({:.6}, {:.6})",
        sim.clock(),
        scene.bodies.len(),
        scene.trails.len(),
        scene.total_mass(),
        mass_before,
        p.x,
        p.y
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step();
        return Ok(());
    }

    let mut scenario_cfg = load_scenario(&args)?;
    if let Some(seed) = args.seed {
        scenario_cfg.scene.seed = Some(seed);
    }

    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid initial scene")?;

    match args.steps {
        Some(steps) => run_headless(&mut scenario, steps),
        None => run_2d(scenario),
    }

    Ok(())
}
