//! Fitness-proportionate parent selection.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1 (roulette wheel)
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{SolverError, SolverResult};
use rand::Rng;

/// Roulette-wheel selection over `fitness` values (higher = better).
///
/// Builds the cumulative share of each value in the total, draws
/// `r ∈ [0, 1)` and returns the first index whose cumulative share is
/// `>= r`.
///
/// # Errors
/// [`SolverError::DegenerateFitness`] if the total is zero, negative or not
/// finite. [`fitness`](super::fitness) never produces such values, so this
/// only fires on corrupted input.
///
/// # Complexity
/// O(n) per selection (linear scan)
pub fn roulette_wheel<R: Rng>(fitness: &[f64], rng: &mut R) -> SolverResult<usize> {
    let total: f64 = fitness.iter().sum();
    if fitness.is_empty() || !total.is_finite() || total <= 0.0 {
        return Err(SolverError::DegenerateFitness(total));
    }

    let r: f64 = rng.random();
    let mut cumulative = 0.0;
    for (i, &f) in fitness.iter().enumerate() {
        cumulative += f / total;
        if cumulative >= r {
            return Ok(i);
        }
    }

    Ok(fitness.len() - 1) // floating-point fallback
}

/// Draws `count` parent indices with replacement.
pub fn select_parents<R: Rng>(
    fitness: &[f64],
    count: usize,
    rng: &mut R,
) -> SolverResult<Vec<usize>> {
    (0..count).map(|_| roulette_wheel(fitness, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_roulette_favors_fitter() {
        let fitness = [0.01, 0.02, 1.0, 0.05];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[roulette_wheel(&fitness, &mut rng).unwrap()] += 1;
        }
        assert!(
            counts[2] > 8000,
            "expected index 2 to dominate, got {counts:?}"
        );
    }

    #[test]
    fn test_roulette_proportional_shares() {
        let fitness = [1.0, 3.0];
        let mut rng = create_rng(7);

        let n = 20000;
        let hits = (0..n)
            .filter(|_| roulette_wheel(&fitness, &mut rng).unwrap() == 1)
            .count();
        let share = hits as f64 / n as f64;
        assert!((share - 0.75).abs() < 0.02, "share {share}");
    }

    #[test]
    fn test_single_candidate() {
        let mut rng = create_rng(42);
        assert_eq!(roulette_wheel(&[0.3], &mut rng).unwrap(), 0);
    }

    #[test]
    fn test_zero_total_fails() {
        let mut rng = create_rng(42);
        let err = roulette_wheel(&[0.0, 0.0], &mut rng).unwrap_err();
        assert_eq!(err, SolverError::DegenerateFitness(0.0));
    }

    #[test]
    fn test_nan_total_fails() {
        let mut rng = create_rng(42);
        assert!(roulette_wheel(&[f64::NAN, 1.0], &mut rng).is_err());
    }

    #[test]
    fn test_empty_fails() {
        let mut rng = create_rng(42);
        assert!(roulette_wheel(&[], &mut rng).is_err());
    }

    #[test]
    fn test_select_parents_count() {
        let mut rng = create_rng(1);
        let parents = select_parents(&[0.5, 0.25, 0.25], 9, &mut rng).unwrap();
        assert_eq!(parents.len(), 9);
        assert!(parents.iter().all(|&i| i < 3));
    }
}
