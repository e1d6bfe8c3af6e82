//! Stochastic solvers for two combinatorial problems.
//!
//! - **Genetic Algorithm (GA)**: picks a subset of priced items whose total
//!   spends a budget as fully as possible without exceeding it. Roulette-wheel
//!   selection, single-point crossover, elitist survival and bit-flip
//!   mutation over binary chromosomes.
//! - **Ant Colony Optimization (ACO)**: finds a short closed tour through a
//!   fixed set of locations, starting and ending at location 0. Pheromone-
//!   and distance-weighted tour construction with evaporation and
//!   cost-proportional reinforcement.
//!
//! Both solvers are single-threaded and run for a fixed number of
//! generations/iterations. Every random draw goes through an explicit
//! [`rand::Rng`], so a seeded run is reproducible.
//!
//! # Architecture
//!
//! The two solvers share nothing but the error type ([`SolverError`]) and
//! RNG construction ([`random`]). Problem data is validated when it is built
//! and configuration is validated before the first iteration, so a run
//! either fails up front or completes. [`presets`] and [`report`] provide
//! sample instances and console summaries for the `u-stochopt` binary.

pub mod aco;
pub mod error;
pub mod ga;
pub mod presets;
pub mod random;
pub mod report;

pub use error::{SolverError, SolverResult};
