//! ACO configuration.

use crate::error::{SolverError, SolverResult};

/// Configuration for the Ant Colony tour optimizer.
///
/// # Examples
///
/// ```
/// use u_stochopt::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_ant_count(20)
///     .with_iterations(50)
///     .with_evaporation(0.1)
///     .with_beta(3.0)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AcoConfig {
    /// Pheromone deposit constant `Q`. Each ant adds `Q / cost` per edge.
    pub deposit: f64,

    /// Evaporation rate `rho` in `[0, 1)`.
    pub evaporation: f64,

    /// Ants (tours constructed) per iteration.
    pub ant_count: usize,

    /// Number of iterations. There is no early stopping.
    pub iterations: usize,

    /// Pheromone influence exponent.
    pub alpha: f64,

    /// Heuristic (inverse distance) influence exponent.
    pub beta: f64,

    /// Value every pheromone cell starts at.
    pub initial_pheromone: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            deposit: 100.0,
            evaporation: 0.05,
            ant_count: 17,
            iterations: 35,
            alpha: 1.0,
            beta: 2.0,
            initial_pheromone: 1.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_deposit(mut self, q: f64) -> Self {
        self.deposit = q;
        self
    }

    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    pub fn with_ant_count(mut self, n: usize) -> Self {
        self.ant_count = n;
        self
    }

    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SolverResult<()> {
        if self.ant_count == 0 {
            return Err(SolverError::Config("ant_count must be at least 1".into()));
        }
        if self.iterations == 0 {
            return Err(SolverError::Config("iterations must be at least 1".into()));
        }
        if !(0.0..1.0).contains(&self.evaporation) {
            return Err(SolverError::Config(format!(
                "evaporation must be in [0, 1), got {}",
                self.evaporation
            )));
        }
        if !(self.deposit.is_finite() && self.deposit > 0.0) {
            return Err(SolverError::Config(format!(
                "deposit must be positive and finite, got {}",
                self.deposit
            )));
        }
        if !(self.alpha.is_finite() && self.alpha >= 0.0) {
            return Err(SolverError::Config(format!(
                "alpha must be non-negative and finite, got {}",
                self.alpha
            )));
        }
        if !(self.beta.is_finite() && self.beta >= 0.0) {
            return Err(SolverError::Config(format!(
                "beta must be non-negative and finite, got {}",
                self.beta
            )));
        }
        if !(self.initial_pheromone.is_finite() && self.initial_pheromone > 0.0) {
            return Err(SolverError::Config(format!(
                "initial_pheromone must be positive and finite, got {}",
                self.initial_pheromone
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert!((config.deposit - 100.0).abs() < 1e-10);
        assert!((config.evaporation - 0.05).abs() < 1e-10);
        assert_eq!(config.ant_count, 17);
        assert_eq!(config.iterations, 35);
        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 2.0).abs() < 1e-10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_counts() {
        assert!(AcoConfig::default().with_ant_count(0).validate().is_err());
        assert!(AcoConfig::default().with_iterations(0).validate().is_err());
    }

    #[test]
    fn test_validate_evaporation_half_open() {
        assert!(AcoConfig::default().with_evaporation(0.0).validate().is_ok());
        assert!(AcoConfig::default().with_evaporation(0.999).validate().is_ok());
        assert!(AcoConfig::default().with_evaporation(1.0).validate().is_err());
        assert!(AcoConfig::default().with_evaporation(-0.1).validate().is_err());
    }

    #[test]
    fn test_validate_deposit_and_exponents() {
        assert!(AcoConfig::default().with_deposit(0.0).validate().is_err());
        assert!(AcoConfig::default().with_deposit(f64::INFINITY).validate().is_err());
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::NAN).validate().is_err());
        assert!(AcoConfig::default().with_alpha(0.0).with_beta(0.0).validate().is_ok());
    }

    #[test]
    fn test_validate_initial_pheromone() {
        let config = AcoConfig::default().with_initial_pheromone(0.0);
        assert!(matches!(config.validate(), Err(SolverError::Config(_))));
    }
}
