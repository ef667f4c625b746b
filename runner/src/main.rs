mod worker;

use std::path::PathBuf;

use clap::Parser;
use combat::{CombatTemplate, Simulation, SimulationResult, SimulationSummary};
use tracing_subscriber::EnvFilter;

lazy_static::lazy_static! {
    pub static ref OPTIMAL_THREAD_COUNT: usize = num_cpus::get().max(1);
}

/// Auto-plays a combat template and reports how it went.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Combat template (TOML).
    template: PathBuf,

    /// Number of combats to play.
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Worker threads; defaults to the number of CPUs.
    #[arg(short, long)]
    threads: Option<usize>,

    /// Seed for the first worker; later workers use consecutive seeds.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the full event log of a single combat instead of a summary.
    #[arg(long)]
    trace: bool,
}

fn load_template(path: &PathBuf) -> anyhow::Result<CombatTemplate> {
    let template_str = std::fs::read_to_string(path)
        .map_err(|error| anyhow::anyhow!("unable to read {}: {error}", path.display()))?;
    let template = toml::from_str::<CombatTemplate>(&template_str)?;
    Ok(template.with_source(&path.to_string_lossy()))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    tracing::info!(?args, "launch");

    let template = load_template(&args.template)?;
    let template_seed = template.seed;
    let simulation: Simulation = template.try_into()?;

    if args.trace {
        let mut simulation = simulation;
        simulation.seed = args.seed.or(template_seed);
        println!("{}", simulation.run_once());
        return Ok(());
    }

    let threads = args.threads.unwrap_or(*OPTIMAL_THREAD_COUNT).max(1);
    let base_seed = args
        .seed
        .or(template_seed)
        .unwrap_or_else(|| std::time::UNIX_EPOCH.elapsed().map(|d| d.as_nanos() as u64).unwrap_or(0));
    let base_chunk = args.iterations / threads;
    let remainder = args.iterations % threads;

    let (res_tx, res_rx) = std::sync::mpsc::channel::<SimulationResult>();
    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let chunk = base_chunk + if i < remainder { 1 } else { 0 };
            worker::spawn_run_simulation_thread(
                chunk,
                base_seed.wrapping_add(i as u64),
                simulation.clone(),
                res_tx.clone(),
            )
        })
        .collect();
    drop(res_tx);

    let started = std::time::Instant::now();
    let results: Vec<SimulationResult> = res_rx.iter().collect();
    for handle in handles {
        if handle.join().is_err() {
            anyhow::bail!("simulation worker panicked");
        }
    }
    tracing::info!(elapsed = ?started.elapsed(), runs = results.len(), "done");

    println!("{}", SimulationSummary::from(&results));
    Ok(())
}
