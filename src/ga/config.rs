//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use crate::error::{SolverError, SolverResult};

/// Configuration for the budget-selection Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_stochopt::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 30);
/// assert_eq!(config.max_generations, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_stochopt::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(50)
///     .with_crossover_rate(0.7)
///     .with_mutation_rate(0.02)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of chromosomes kept after every survival step.
    pub population_size: usize,

    /// Per-parent probability of joining this generation's crossover pool (0.0–1.0).
    pub crossover_rate: f64,

    /// Fraction of all population genes flipped per generation (0.0–1.0).
    ///
    /// The flip count is `round(mutation_rate * population_size * genes)`.
    pub mutation_rate: f64,

    /// Number of generations to run. There is no early stopping.
    pub max_generations: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 30,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            max_generations: 100,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Out-of-range values are rejected by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`SolverError::Config`] describing the first invalid parameter.
    pub fn validate(&self) -> SolverResult<()> {
        if self.population_size == 0 {
            return Err(SolverError::Config(
                "population_size must be at least 1".into(),
            ));
        }
        if self.max_generations == 0 {
            return Err(SolverError::Config(
                "max_generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(SolverError::Config(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(SolverError::Config(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}
