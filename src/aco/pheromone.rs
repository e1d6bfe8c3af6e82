//! Pheromone trail bookkeeping.
//!
//! The matrix is directional: depositing on `(u, v)` leaves `(v, u)`
//! untouched. Values only shrink by evaporation and only grow by
//! deposits, so they stay non-negative.

use super::types::Tour;

/// N×N pheromone levels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PheromoneMatrix {
    n: usize,
    data: Vec<f64>,
}

impl PheromoneMatrix {
    /// Matrix with every cell set to `initial`.
    pub fn new(n: usize, initial: f64) -> Self {
        Self {
            n,
            data: vec![initial; n * n],
        }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Row-major view of all cells.
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Multiplies every cell by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho));
        let keep = 1.0 - rho;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to every directed edge of `path`.
    pub fn deposit(&mut self, path: &[usize], amount: f64) {
        debug_assert!(amount >= 0.0);
        for w in path.windows(2) {
            self.data[w[0] * self.n + w[1]] += amount;
        }
    }

    /// One full update: evaporation, then `q / cost` along every tour.
    ///
    /// Tours with a non-positive or non-finite cost deposit nothing.
    pub fn update(&mut self, rho: f64, q: f64, tours: &[Tour]) {
        self.evaporate(rho);
        for tour in tours {
            if tour.cost.is_finite() && tour.cost > 0.0 {
                self.deposit(&tour.path, q / tour.cost);
            }
        }
    }
}
