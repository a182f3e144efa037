//! Manna stochastic sandpile on a one-dimensional ring lattice.
//!
//! Seeds `floor(density * L)` particles at random sites, then scatters every
//! particle on an active site each tick until the lattice absorbs or the
//! iteration cap is hit. Progress and the final status go to stdout;
//! diagnostics go through `tracing`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use manna::lattice::Lattice;
use manna::passive::PassiveSet;
use manna::rng::RngSource;
use manna::sim::{RunConfig, RunStatus, run};

#[derive(Parser)]
#[command(name = "manna")]
#[command(about = "Manna stochastic sandpile simulator")]
struct Cli {
    /// Target particle density (particles per site).
    density: f64,
    /// Number of lattice sites.
    lattice_size: usize,
    /// Maximum hop amplitude (at least 1).
    max_amplitude: u32,
    /// RNG seed; the same seed reproduces the same run.
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Iteration cap.
    #[arg(long, default_value_t = 100_000)]
    max_iter: u64,
    /// Print `<iteration> <activity>` every N iterations.
    #[arg(long, default_value_t = 10_000)]
    report_interval: u64,
    /// Write an occupancy snapshot every N iterations (needs --output-dir).
    #[arg(long)]
    flush_interval: Option<u64>,
    /// Directory for snapshot checkpoints.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Comma-separated passive occupancy values.
    #[arg(long, value_delimiter = ',')]
    passive: Option<Vec<u32>>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let passive = match cli.passive {
        Some(values) => PassiveSet::new(values),
        None => PassiveSet::default(),
    };

    let mut rng = RngSource(SmallRng::seed_from_u64(cli.seed));
    let mut lattice = match Lattice::seed_random(cli.density, cli.lattice_size, &mut rng) {
        Ok(lattice) => lattice,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(
        sites = lattice.len(),
        particles = lattice.total_particles(),
        seed = cli.seed,
        "seeded lattice"
    );

    let config = RunConfig {
        max_iterations: cli.max_iter,
        report_interval: cli.report_interval,
        flush_interval: cli.flush_interval,
        output_dir: cli.output_dir,
    };
    let report = match run(
        &mut lattice,
        &passive,
        cli.max_amplitude,
        &mut rng,
        &config,
        |iteration, activity| println!("{iteration} {activity}"),
    ) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    match report.status {
        RunStatus::Absorbed => println!("solved in {}", report.iterations),
        RunStatus::CappedOut => println!("reached max iter ({})", report.iterations),
    }
    ExitCode::SUCCESS
}
