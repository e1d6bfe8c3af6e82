//! Binary-chromosome variation operators.
//!
//! # Crossover
//!
//! - [`crossover_candidates`]: Bernoulli pick of the parents that recombine
//! - [`single_point_crossover`]: one child per pair, head from the first
//!   parent and tail from the second
//!
//! # Mutation
//!
//! - [`bit_flip_mutation`]: a fixed number of uniformly random bit flips
//!   spread over the whole population
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*

use super::types::Chromosome;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Indices in `0..slots` that take part in crossover.
///
/// Each slot joins independently with probability `rate`, so the result may
/// be empty or odd-sized. Indices are returned in increasing order.
pub fn crossover_candidates<R: Rng>(slots: usize, rate: f64, rng: &mut R) -> Vec<usize> {
    (0..slots)
        .filter(|_| rng.random::<f64>() < rate)
        .collect()
}

/// Child made of `head[..cut]` followed by `tail[cut..]`.
///
/// # Panics
/// Panics if the parents differ in length or `cut > len`.
pub fn crossover_at(head: &Chromosome, tail: &Chromosome, cut: usize) -> Chromosome {
    assert_eq!(head.len(), tail.len(), "parents must have equal length");
    let mut genes = Vec::with_capacity(head.len());
    genes.extend_from_slice(&head.genes()[..cut]);
    genes.extend_from_slice(&tail.genes()[cut..]);
    Chromosome::new(genes)
}

/// Single-point crossover with a cut drawn uniformly from `1..len`.
///
/// With fewer than two genes there is no interior cut point and the child
/// is a copy of `head`.
pub fn single_point_crossover<R: Rng>(
    head: &Chromosome,
    tail: &Chromosome,
    rng: &mut R,
) -> Chromosome {
    let n = head.len();
    if n < 2 {
        return head.clone();
    }
    let cut = rng.random_range(1..n);
    crossover_at(head, tail, cut)
}

/// Recombines the candidate parents pairwise: `(c0, c1), (c2, c3), ...`.
///
/// An odd trailing candidate has no partner and produces nothing, so the
/// result has `candidates.len() / 2` children.
pub fn recombine<R: Rng>(
    parents: &[Chromosome],
    candidates: &[usize],
    rng: &mut R,
) -> Vec<Chromosome> {
    candidates
        .chunks_exact(2)
        .map(|pair| single_point_crossover(&parents[pair[0]], &parents[pair[1]], rng))
        .collect()
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Number of flips for a population: `round(rate * population * genes)`.
pub fn mutation_count(rate: f64, population: usize, genes: usize) -> usize {
    (rate * population as f64 * genes as f64).round() as usize
}

/// Flips [`mutation_count`] uniformly random `(chromosome, gene)` cells.
///
/// Cells are drawn with replacement; flipping the same cell twice restores
/// it. Returns the number of flips performed.
pub fn bit_flip_mutation<R: Rng>(
    population: &mut [Chromosome],
    rate: f64,
    rng: &mut R,
) -> usize {
    let genes = population.first().map_or(0, Chromosome::len);
    if population.is_empty() || genes == 0 {
        return 0;
    }

    let flips = mutation_count(rate, population.len(), genes);
    for _ in 0..flips {
        let idx = rng.random_range(0..population.len());
        let gene = rng.random_range(0..genes);
        population[idx].flip(gene);
    }
    flips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;
    use rand::Rng;

    fn ones(n: usize) -> Chromosome {
        Chromosome::new(vec![true; n])
    }

    fn zeros(n: usize) -> Chromosome {
        Chromosome::new(vec![false; n])
    }

    #[test]
    fn test_crossover_at_layout() {
        let child = crossover_at(&ones(5), &zeros(5), 2);
        assert_eq!(child, Chromosome::from_bits(&[1, 1, 0, 0, 0]));
    }

    #[test]
    fn test_single_point_keeps_both_parents_represented() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let child = single_point_crossover(&ones(8), &zeros(8), &mut rng);
            assert_eq!(child.len(), 8);
            // cut in 1..8: first gene from head, last gene from tail
            assert!(child.genes()[0]);
            assert!(!child.genes()[7]);
        }
    }

    #[test]
    fn test_single_gene_crossover_copies_head() {
        let mut rng = create_rng(42);
        let child = single_point_crossover(&ones(1), &zeros(1), &mut rng);
        assert_eq!(child, ones(1));
    }

    #[test]
    fn test_candidates_rate_bounds() {
        let mut rng = create_rng(42);
        assert!(crossover_candidates(20, 0.0, &mut rng).is_empty());
        assert_eq!(
            crossover_candidates(20, 1.0, &mut rng),
            (0..20).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_recombine_pairs_sequentially() {
        let mut rng = create_rng(3);
        let parents = vec![ones(4), zeros(4), ones(4), zeros(4), ones(4)];
        assert_eq!(recombine(&parents, &[0, 1, 2, 3, 4], &mut rng).len(), 2);
        assert_eq!(recombine(&parents, &[4], &mut rng).len(), 0);
        assert_eq!(recombine(&parents, &[], &mut rng).len(), 0);
    }

    #[test]
    fn test_mutation_count_rounding() {
        assert_eq!(mutation_count(0.01, 30, 18), 5); // 5.4
        assert_eq!(mutation_count(0.0, 30, 18), 0);
        assert_eq!(mutation_count(1.0, 3, 4), 12);
    }

    #[test]
    fn test_bit_flip_full_rate_changes_population() {
        let mut rng = create_rng(9);
        let mut population = vec![zeros(6); 4];
        let flips = bit_flip_mutation(&mut population, 0.5, &mut rng);
        assert_eq!(flips, 12);
        assert!(population.iter().any(|c| c.selected().next().is_some()));
        assert!(population.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn test_bit_flip_zero_rate_is_noop() {
        let mut rng = create_rng(9);
        let mut population = vec![ones(3); 5];
        assert_eq!(bit_flip_mutation(&mut population, 0.0, &mut rng), 0);
        assert!(population.iter().all(|c| *c == ones(3)));
    }

    proptest! {
        #[test]
        fn prop_crossover_layout(
            p1 in proptest::collection::vec(any::<bool>(), 2..40),
            seed in any::<u64>(),
            cut_seed in any::<usize>(),
        ) {
            let d = p1.len();
            let mut rng = create_rng(seed);
            let p2: Vec<bool> = (0..d).map(|_| rng.random_bool(0.5)).collect();
            let cut = 1 + cut_seed % (d - 1);
            let a = Chromosome::new(p1.clone());
            let b = Chromosome::new(p2.clone());
            let child = crossover_at(&a, &b, cut);
            prop_assert_eq!(child.len(), d);
            prop_assert_eq!(&child.genes()[..cut], &p1[..cut]);
            prop_assert_eq!(&child.genes()[cut..], &p2[cut..]);
        }
    }
}
