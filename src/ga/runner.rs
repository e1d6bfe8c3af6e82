//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates one run:
//! initialization → evaluation → roulette selection → crossover →
//! elitist survival → mutation → repeat.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, crossover_candidates, recombine};
use super::selection::select_parents;
use super::types::{Chromosome, KnapsackProblem, Objective};
use crate::error::{SolverError, SolverResult};
use crate::random::rng_from_option;
use rand::Rng;
use tracing::{debug, info};

/// Generations between progress log lines.
const PROGRESS_INTERVAL: usize = 10;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Top-ranked chromosome of the final survival step.
    pub best: Chromosome,

    /// Objective of `best`.
    pub best_objective: Objective,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Total price of the items selected by `best`.
    pub total_price: u64,

    /// Number of generations executed.
    pub generations: usize,

    /// Best fitness after each generation's survival step.
    pub fitness_history: Vec<f64>,

    /// Population at the end of the run (after the last mutation).
    pub population: Vec<Chromosome>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use u_stochopt::ga::{GaConfig, GaRunner, Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![Item::new("tea", 30), Item::new("rice", 70), Item::new("soap", 45)],
///     100,
/// ).unwrap();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(result.total_price <= 100);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization with an RNG built from `config.seed`.
    ///
    /// # Errors
    /// Returns [`SolverError::Config`] before any generation runs if the
    /// configuration is invalid.
    pub fn run(problem: &KnapsackProblem, config: &GaConfig) -> SolverResult<GaResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA optimization drawing from the caller's generator.
    pub fn run_with_rng<R: Rng>(
        problem: &KnapsackProblem,
        config: &GaConfig,
        rng: &mut R,
    ) -> SolverResult<GaResult> {
        config.validate()?;
        let n = config.population_size;
        let dimension = problem.dimension();

        // 1. Initialize population
        let mut population: Vec<Chromosome> = (0..n)
            .map(|_| Chromosome::random(dimension, rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.max_generations);
        let mut best: Option<Chromosome> = None;

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            let fitness: Vec<f64> = population.iter().map(|c| problem.fitness(c)).collect();

            // Selection
            let parents: Vec<Chromosome> = select_parents(&fitness, n, rng)?
                .into_iter()
                .map(|i| population[i].clone())
                .collect();

            // Crossover
            let candidates = crossover_candidates(n, config.crossover_rate, rng);
            let offspring = recombine(&parents, &candidates, rng);

            // Survival
            let offspring_count = offspring.len();
            population.extend(offspring);
            let ranked = survive(problem, population, n);
            let best_fitness = ranked[0].0;
            best = Some(ranked[0].1.clone());
            population = ranked.into_iter().map(|(_, c)| c).collect();
            debug_assert_eq!(population.len(), n);

            // Mutation
            let flips = bit_flip_mutation(&mut population, config.mutation_rate, rng);

            fitness_history.push(best_fitness);
            debug!(
                generation = gen + 1,
                offspring = offspring_count,
                flips,
                best_fitness,
                "generation complete"
            );
            if (gen + 1) % PROGRESS_INTERVAL == 0 {
                info!("Generation {} | Best Fitness: {:.6}", gen + 1, best_fitness);
            }
        }

        // `validate` guarantees at least one generation.
        debug_assert!(best.is_some());
        let best = best.ok_or_else(|| SolverError::Config("no generation ran".into()))?;
        let best_objective = problem.objective(&best);

        Ok(GaResult {
            best_fitness: problem.fitness(&best),
            total_price: problem.total_price(&best),
            best_objective,
            best,
            generations: config.max_generations,
            fitness_history,
            population,
        })
    }
}

/// Elitist survival: scores `merged`, sorts by fitness descending and keeps
/// the first `keep` entries.
///
/// The sort is stable, so equally fit chromosomes keep their merge order
/// (current population before offspring).
pub fn survive(
    problem: &KnapsackProblem,
    merged: Vec<Chromosome>,
    keep: usize,
) -> Vec<(f64, Chromosome)> {
    let mut scored: Vec<(f64, Chromosome)> = merged
        .into_iter()
        .map(|c| (problem.fitness(&c), c))
        .collect();
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.truncate(keep);
    scored
}

// ============================================================================
// Tests
// ============================================================================
