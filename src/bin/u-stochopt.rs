use clap::{Args, Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use u_stochopt::aco::{AcoConfig, AcoRunner};
use u_stochopt::ga::{GaConfig, GaRunner};
use u_stochopt::presets::{parcel_catalog, pilgrimage_route};
use u_stochopt::report::{KnapsackReport, TourReport};
use u_stochopt::SolverError;

#[derive(Error, Debug)]
enum CliError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Solver(#[from] SolverError),
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Random seed; omit for a fresh run each time.
    #[arg(global = true, short, long)]
    seed: Option<u64>,

    /// JSON file with solver parameters; flags override its values.
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Spend the parcel budget with the genetic algorithm.
    Knapsack(KnapsackArgs),
    /// Plan the pilgrimage round trip with the ant colony.
    Tour(TourArgs),
}

#[derive(Args, Debug)]
struct KnapsackArgs {
    #[arg(long)]
    population: Option<usize>,

    #[arg(long)]
    crossover_rate: Option<f64>,

    #[arg(long)]
    mutation_rate: Option<f64>,

    #[arg(long)]
    generations: Option<usize>,
}

#[derive(Args, Debug)]
struct TourArgs {
    #[arg(long)]
    ants: Option<usize>,

    #[arg(long)]
    iterations: Option<usize>,

    /// Evaporation rate.
    #[arg(long)]
    rho: Option<f64>,

    /// Pheromone deposit constant.
    #[arg(long)]
    q: Option<f64>,

    #[arg(long)]
    alpha: Option<f64>,

    #[arg(long)]
    beta: Option<f64>,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let outcome = match &cli.command {
        Commands::Knapsack(args) => run_knapsack(&cli, args),
        Commands::Tour(args) => run_tour(&cli, args),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T, CliError> {
    match path {
        Some(path) => {
            info!("Loading config: {}", path.display());
            let text = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(T::default()),
    }
}

fn run_knapsack(cli: &Cli, args: &KnapsackArgs) -> Result<(), CliError> {
    let mut config: GaConfig = load_config(cli.config.as_deref())?;
    if let Some(n) = args.population {
        config.population_size = n;
    }
    if let Some(rate) = args.crossover_rate {
        config.crossover_rate = rate;
    }
    if let Some(rate) = args.mutation_rate {
        config.mutation_rate = rate;
    }
    if let Some(n) = args.generations {
        config.max_generations = n;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let problem = parcel_catalog()?;
    let result = GaRunner::run(&problem, &config)?;

    println!();
    println!(
        "{}",
        KnapsackReport::new(&problem, &result.best).with_currency("Rp")
    );
    Ok(())
}

fn run_tour(cli: &Cli, args: &TourArgs) -> Result<(), CliError> {
    let mut config: AcoConfig = load_config(cli.config.as_deref())?;
    if let Some(n) = args.ants {
        config.ant_count = n;
    }
    if let Some(n) = args.iterations {
        config.iterations = n;
    }
    if let Some(rho) = args.rho {
        config.evaporation = rho;
    }
    if let Some(q) = args.q {
        config.deposit = q;
    }
    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
    }
    if let Some(beta) = args.beta {
        config.beta = beta;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    let problem = pilgrimage_route()?;
    let result = AcoRunner::run(problem.distances(), &config)?;

    println!();
    println!("{}", TourReport::new(&problem, &result.best).with_unit("km"));
    Ok(())
}
