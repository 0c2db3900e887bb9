mod error;
mod io;
mod model;
mod simulation;

use crate::io::params;
use crate::io::reporting;
use crate::simulation::engine::QueueSimulation;
use clap::Parser;
use rand::Rng;
use std::error::Error;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// Single-server waiting line simulation
#[derive(Parser, Debug)]
#[command(name = "waiting-line", about = "Simulates customers waiting at a single counter.")]
struct Cli {
    /// Parameter file (prompted for on stdin when omitted)
    params: Option<PathBuf>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the per-tick history to this CSV file
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    // 1. LOAD PARAMETERS
    let path = match cli.params {
        Some(path) => path,
        None => prompt_for_path()?,
    };
    let config = params::load_params(&path)?;
    config.validate()?;

    println!("{}", reporting::render_parameters(&config));
    println!("Simulation begins...");

    // 2. RUN
    let seed = cli.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!(
        "replay this run with --seed {} and parameters:\n{}",
        seed,
        config.to_param_text().trim_end()
    );

    let mut sim = QueueSimulation::seeded(config, seed)?;
    if cli.history.is_some() {
        sim = sim.with_history();
    }
    sim.run();

    if let Some(path) = cli.history.as_deref() {
        reporting::write_history_csv(path, sim.history())?;
        println!("History written to {}", path.display());
    }
    let report = sim.report();

    // 3. REPORT
    if report.average_wait_minutes.is_none() {
        log::warn!("no customers were served; average wait time is undefined");
    }
    print!("{}", reporting::render_report(&report));
    Ok(())
}

fn prompt_for_path() -> std::io::Result<PathBuf> {
    print!("Please enter the filename containing simulation parameters: ");
    std::io::stdout().flush()?;

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
