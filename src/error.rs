//! Error type shared by both solvers.

use thiserror::Error;

/// Errors reported before or during a solver run.
///
/// Configuration and problem data are checked up front, so a run either
/// fails before its first iteration or completes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    /// Roulette-wheel weights could not be normalized.
    #[error("Selection Error: total fitness {0} cannot be normalized")]
    DegenerateFitness(f64),
}

pub type SolverResult<T> = Result<T, SolverError>;
