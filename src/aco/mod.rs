//! Ant Colony Optimization for closed tours.
//!
//! Finds a short round trip that starts at location 0 (the nest), visits
//! every other location exactly once and returns. Each iteration a fixed
//! number of ants build tours by pheromone- and distance-weighted random
//! walks; the pheromone matrix then evaporates and is reinforced along every
//! ant's tour in proportion to `Q / cost`.
//!
//! # Key Types
//!
//! - [`DistanceMatrix`], [`TourProblem`]: validated problem data
//! - [`PheromoneMatrix`]: directional trail levels
//! - [`AcoConfig`]: Q, rho, ant count, iterations, alpha, beta
//! - [`AcoRunner`] / [`AcoResult`]: the iteration loop and its outcome
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod config;
pub mod construction;
mod pheromone;
mod runner;
mod types;

pub use config::AcoConfig;
pub use construction::Ant;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
pub use types::{DistanceMatrix, Tour, TourProblem, NEST};
