//! Probabilistic tour construction.
//!
//! An ant starts at the nest and repeatedly moves to an unvisited location
//! chosen with probability proportional to its desirability
//! `tau(i, j)^alpha * (1 / d(i, j))^beta`, then returns to the nest.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use super::pheromone::PheromoneMatrix;
use super::types::{DistanceMatrix, Tour, NEST};
use rand::Rng;

/// Unnormalized transition weight for an edge.
///
/// A zero distance yields `+inf` (the edge dominates); an undefined product
/// such as `0 * inf` counts as zero.
pub fn desirability(pheromone: f64, distance: f64, alpha: f64, beta: f64) -> f64 {
    let w = pheromone.powf(alpha) * (1.0 / distance).powf(beta);
    if w.is_nan() {
        0.0
    } else {
        w
    }
}

/// Outcome of one transition draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub location: usize,
    /// Every candidate had zero weight and the draw fell back to uniform.
    pub dead_end: bool,
}

/// Samples the next location among `candidates` given their `weights`.
///
/// Infinite weights win outright (uniform among them). When no candidate
/// has positive weight the draw is uniform over all candidates and
/// [`Step::dead_end`] is set.
///
/// # Panics
/// Panics if `candidates` is empty or the slices differ in length.
pub fn sample_next<R: Rng>(candidates: &[usize], weights: &[f64], rng: &mut R) -> Step {
    assert!(!candidates.is_empty(), "no candidate locations left");
    assert_eq!(candidates.len(), weights.len());

    let max = weights.iter().copied().fold(0.0, f64::max);

    if max == f64::INFINITY {
        let dominant: Vec<usize> = candidates
            .iter()
            .zip(weights)
            .filter(|(_, &w)| w == f64::INFINITY)
            .map(|(&c, _)| c)
            .collect();
        return Step {
            location: dominant[rng.random_range(0..dominant.len())],
            dead_end: false,
        };
    }

    if max <= 0.0 {
        return Step {
            location: candidates[rng.random_range(0..candidates.len())],
            dead_end: true,
        };
    }

    // Scaling by the maximum keeps the sum finite.
    let total: f64 = weights.iter().map(|w| w / max).sum();
    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = candidates[0];
    for (&c, &w) in candidates.iter().zip(weights) {
        if w <= 0.0 {
            continue;
        }
        last_positive = c;
        cumulative += w / max;
        if cumulative > threshold {
            return Step {
                location: c,
                dead_end: false,
            };
        }
    }

    Step {
        location: last_positive, // floating-point fallback
        dead_end: false,
    }
}

/// One ant's walk for a single iteration.
#[derive(Debug, Clone)]
pub struct Ant {
    pub tour: Tour,
    /// Number of steps that fell back to a uniform draw.
    pub dead_ends: usize,
}

impl Ant {
    /// Builds a closed tour from the nest under the given pheromone snapshot.
    pub fn walk<R: Rng>(
        distances: &DistanceMatrix,
        pheromone: &PheromoneMatrix,
        alpha: f64,
        beta: f64,
        rng: &mut R,
    ) -> Self {
        let n = distances.len();
        let mut path = Vec::with_capacity(n + 1);
        let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != NEST).collect();
        let mut weights = Vec::with_capacity(n);
        let mut dead_ends = 0;

        path.push(NEST);
        let mut current = NEST;
        while !unvisited.is_empty() {
            weights.clear();
            weights.extend(unvisited.iter().map(|&c| {
                desirability(pheromone.get(current, c), distances.get(current, c), alpha, beta)
            }));

            let step = sample_next(&unvisited, &weights, rng);
            if step.dead_end {
                dead_ends += 1;
            }

            // Order of `unvisited` is irrelevant after the draw.
            if let Some(pos) = unvisited.iter().position(|&c| c == step.location) {
                unvisited.swap_remove(pos);
            }
            path.push(step.location);
            current = step.location;
        }
        path.push(NEST);

        Ant {
            tour: Tour::new(path, distances),
            dead_ends,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    fn line(n: usize) -> DistanceMatrix {
        let rows = (0..n)
            .map(|i| (0..n).map(|j| (i as f64 - j as f64).abs()).collect())
            .collect();
        DistanceMatrix::new(rows).unwrap()
    }

    #[test]
    fn test_desirability_formula() {
        assert!((desirability(2.0, 4.0, 1.0, 2.0) - 2.0 / 16.0).abs() < 1e-15);
        assert_eq!(desirability(1.0, f64::INFINITY, 1.0, 2.0), 0.0);
        assert_eq!(desirability(1.0, 0.0, 1.0, 2.0), f64::INFINITY);
        assert_eq!(desirability(0.0, 0.0, 1.0, 2.0), 0.0);
    }

    #[test]
    fn test_sample_proportional() {
        let mut rng = create_rng(42);
        let n = 20000;
        let hits = (0..n)
            .filter(|_| sample_next(&[3, 7], &[1.0, 3.0], &mut rng).location == 7)
            .count();
        let share = hits as f64 / n as f64;
        assert!((share - 0.75).abs() < 0.02, "share {share}");
    }

    #[test]
    fn test_sample_never_picks_zero_weight() {
        let mut rng = create_rng(1);
        for _ in 0..1000 {
            let step = sample_next(&[1, 2, 3], &[0.0, 5.0, 0.0], &mut rng);
            assert_eq!(step.location, 2);
            assert!(!step.dead_end);
        }
    }

    #[test]
    fn test_sample_infinite_weight_dominates() {
        let mut rng = create_rng(1);
        for _ in 0..100 {
            let step = sample_next(&[1, 2, 3], &[1e300, f64::INFINITY, 2.0], &mut rng);
            assert_eq!(step.location, 2);
        }
    }

    #[test]
    fn test_sample_dead_end_is_uniform() {
        let mut rng = create_rng(5);
        let mut counts = [0u32; 3];
        for _ in 0..3000 {
            let step = sample_next(&[0, 1, 2], &[0.0, 0.0, 0.0], &mut rng);
            assert!(step.dead_end);
            counts[step.location] += 1;
        }
        assert!(counts.iter().all(|&c| c > 800), "counts {counts:?}");
    }

    #[test]
    fn test_walk_prefers_short_edges() {
        // On a line, strong beta makes the ant walk outward in order.
        let d = line(5);
        let p = PheromoneMatrix::new(5, 1.0);
        let mut rng = create_rng(3);
        let ant = Ant::walk(&d, &p, 1.0, 30.0, &mut rng);
        assert_eq!(ant.tour.path, vec![0, 1, 2, 3, 4, 0]);
        assert_eq!(ant.tour.cost, 8.0);
        assert_eq!(ant.dead_ends, 0);
    }

    #[test]
    fn test_walk_unreachable_uses_fallback() {
        let inf = f64::INFINITY;
        let d = DistanceMatrix::new(vec![
            vec![0.0, inf, inf],
            vec![inf, 0.0, inf],
            vec![inf, inf, 0.0],
        ])
        .unwrap();
        let p = PheromoneMatrix::new(3, 1.0);
        let mut rng = create_rng(8);
        let ant = Ant::walk(&d, &p, 1.0, 2.0, &mut rng);
        assert!(ant.tour.is_valid(3));
        assert_eq!(ant.dead_ends, 2);
        assert_eq!(ant.tour.cost, inf);
    }

    proptest! {
        #[test]
        fn prop_walk_is_hamiltonian(
            n in 2usize..12,
            seed in any::<u64>(),
            alpha in 0.0f64..3.0,
            beta in 0.0f64..5.0,
        ) {
            let mut rng = create_rng(seed);
            let mut rows = vec![vec![0.0; n]; n];
            for i in 0..n {
                for j in (i + 1)..n {
                    let d = rng.random_range(0.5..100.0);
                    rows[i][j] = d;
                    rows[j][i] = d;
                }
            }
            let d = DistanceMatrix::new(rows).unwrap();
            let p = PheromoneMatrix::new(n, 1.0);
            let ant = Ant::walk(&d, &p, alpha, beta, &mut rng);
            prop_assert!(ant.tour.is_valid(n), "invalid tour {:?}", ant.tour.path);
            prop_assert_eq!(ant.tour.path.len(), n + 1);
        }
    }
}
