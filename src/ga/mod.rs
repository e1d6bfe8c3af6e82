//! Genetic Algorithm for budget-constrained item selection.
//!
//! Picks a subset of a priced catalog whose total comes as close as possible
//! to a budget without exceeding it. Candidates are bit vectors
//! ([`Chromosome`]); over-budget candidates are penalized rather than
//! repaired.
//!
//! # Key Types
//!
//! - [`KnapsackProblem`]: Item catalog and budget, objective evaluation
//! - [`GaConfig`]: Population size, operator rates, generation count
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best selection plus per-generation history
//!
//! # Submodules
//!
//! - [`operators`]: Crossover pool, single-point crossover, bit-flip mutation
//! - [`selection`]: Roulette-wheel parent selection
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use runner::{survive, GaResult, GaRunner};
pub use types::{fitness, Chromosome, Item, KnapsackProblem, Objective, BASE_PENALTY};
