//! ACO iteration loop.
//!
//! Each iteration has a read phase and a write phase. Every ant walks
//! against the same pheromone snapshot; once all ants are done the runner
//! updates the global best and then the pheromone matrix.

use super::config::AcoConfig;
use super::construction::Ant;
use super::pheromone::PheromoneMatrix;
use super::types::{DistanceMatrix, Tour};
use crate::error::{SolverError, SolverResult};
use crate::random::rng_from_option;
use rand::Rng;
use tracing::{debug, info, warn};

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Shortest tour seen in any iteration.
    pub best: Tour,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best distance after each iteration. Non-increasing.
    pub distance_history: Vec<f64>,

    /// Pheromone levels after the final update.
    pub pheromone: PheromoneMatrix,

    /// Transition draws that fell back to a uniform choice.
    pub dead_ends: usize,
}

/// Executes the Ant Colony optimization.
///
/// # Usage
///
/// ```
/// use u_stochopt::aco::{AcoConfig, AcoRunner, DistanceMatrix};
///
/// let distances = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0, 10.0],
///     vec![2.0, 0.0, 6.0, 4.0],
///     vec![9.0, 6.0, 0.0, 3.0],
///     vec![10.0, 4.0, 3.0, 0.0],
/// ]).unwrap();
/// let config = AcoConfig::default().with_seed(1);
/// let result = AcoRunner::run(&distances, &config).unwrap();
/// assert_eq!(result.best.path.len(), 5);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the colony with an RNG built from `config.seed`.
    ///
    /// # Errors
    /// Returns [`SolverError::Config`](crate::SolverError::Config) before
    /// any iteration runs if the configuration is invalid.
    pub fn run(distances: &DistanceMatrix, config: &AcoConfig) -> SolverResult<AcoResult> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(distances, config, &mut rng)
    }

    /// Runs the colony drawing from the caller's generator.
    pub fn run_with_rng<R: Rng>(
        distances: &DistanceMatrix,
        config: &AcoConfig,
        rng: &mut R,
    ) -> SolverResult<AcoResult> {
        config.validate()?;

        let mut pheromone = PheromoneMatrix::new(distances.len(), config.initial_pheromone);
        let mut best: Option<Tour> = None;
        let mut distance_history = Vec::with_capacity(config.iterations);
        let mut dead_ends = 0usize;

        for iteration in 0..config.iterations {
            // Read phase: every ant sees the same pheromone snapshot.
            let ants: Vec<Ant> = (0..config.ant_count)
                .map(|_| Ant::walk(distances, &pheromone, config.alpha, config.beta, rng))
                .collect();

            // Write phase: best tracking, then pheromone update.
            let iteration_dead_ends: usize = ants.iter().map(|a| a.dead_ends).sum();
            if iteration_dead_ends > 0 {
                warn!(
                    iteration = iteration + 1,
                    dead_ends = iteration_dead_ends,
                    "no reachable weighted candidate; fell back to uniform choice"
                );
            }
            dead_ends += iteration_dead_ends;

            let tours: Vec<Tour> = ants.into_iter().map(|a| a.tour).collect();
            for tour in &tours {
                if is_improvement(best.as_ref(), tour) {
                    debug!(iteration = iteration + 1, cost = tour.cost, "new best tour");
                    best = Some(tour.clone());
                }
            }

            pheromone.update(config.evaporation, config.deposit, &tours);

            let best_cost = best.as_ref().map_or(f64::INFINITY, |t| t.cost);
            distance_history.push(best_cost);
            info!("Iteration {} | Best distance: {:.2}", iteration + 1, best_cost);
        }

        // `validate` guarantees at least one ant and one iteration.
        debug_assert!(best.is_some());
        let best = best.ok_or_else(|| SolverError::Config("no tour was built".into()))?;

        Ok(AcoResult {
            best,
            iterations: config.iterations,
            distance_history,
            pheromone,
            dead_ends,
        })
    }
}

/// The first tour always becomes the incumbent; later ones must be strictly shorter.
fn is_improvement(best: Option<&Tour>, candidate: &Tour) -> bool {
    match best {
        None => true,
        Some(b) => candidate.cost < b.cost,
    }
}

// ============================================================================
// Tests
// ============================================================================
