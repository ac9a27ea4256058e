use chargesim::{bench_update, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "three_charges.yaml")]
    file_name: String,

    /// Override the number of ticks from the scenario
    #[arg(short, long)]
    steps: Option<usize>,

    /// Time `update` for growing N instead of running a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_update()?;
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario { mut system, steps } = Scenario::build_scenario(scenario_cfg)?;
    let steps = args.steps.unwrap_or(steps);

    print!("{system}");
    for _ in 0..steps {
        system.update(None)?;
    }
    info!("ran {steps} ticks, t = {}", system.time());
    print!("{system}");

    Ok(())
}
