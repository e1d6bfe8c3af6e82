//! Problem data and candidate representation for the budget-selection GA.
//!
//! A [`KnapsackProblem`] is a fixed catalog of priced [`Item`]s and a budget.
//! Each [`Chromosome`] is one bit per catalog entry; a set bit buys the item.
//! The search minimizes the unspent remainder, so an exact spend is optimal.

use crate::error::{SolverError, SolverResult};
use rand::Rng;

/// Lower bound on the objective assigned to over-budget selections.
pub const BASE_PENALTY: f64 = 1e9;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    pub price: u64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// A binary selection vector over the catalog.
///
/// `genes[i] == true` means item `i` is bought. The length always equals the
/// catalog size of the problem that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    genes: Vec<bool>,
}

impl Chromosome {
    pub fn new(genes: Vec<bool>) -> Self {
        Self { genes }
    }

    /// Builds a chromosome from 0/1 values; any non-zero value counts as set.
    pub fn from_bits(bits: &[u8]) -> Self {
        Self {
            genes: bits.iter().map(|&b| b != 0).collect(),
        }
    }

    /// Uniformly random bits.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            genes: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Inverts gene `index`.
    pub fn flip(&mut self, index: usize) {
        self.genes[index] = !self.genes[index];
    }

    /// Indices of the selected items, in catalog order.
    pub fn selected(&self) -> impl Iterator<Item = usize> + '_ {
        self.genes
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }
}

/// Objective value of a chromosome. Lower is better.
///
/// Over-budget selections are not repaired; they are tagged
/// [`Objective::Penalized`] and scored with a constant that exceeds every
/// feasible remainder, which keeps them out of the surviving population
/// whenever a feasible alternative exists.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Within budget; `remainder` is the unspent amount.
    Feasible { remainder: u64 },
    /// Over budget; scored with the problem's penalty.
    Penalized { penalty: f64 },
}

impl Objective {
    /// The scalar value used for fitness.
    pub fn value(self) -> f64 {
        match self {
            Objective::Feasible { remainder } => remainder as f64,
            Objective::Penalized { penalty } => penalty,
        }
    }

    pub fn is_feasible(self) -> bool {
        matches!(self, Objective::Feasible { .. })
    }
}

/// Maps an objective value to a fitness in `(0, 1]`.
///
/// Strictly decreasing in `objective`; exactly `1.0` for a perfect spend.
pub fn fitness(objective: f64) -> f64 {
    1.0 / (1.0 + objective)
}

/// A priced catalog plus the budget to spend.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    items: Vec<Item>,
    budget: u64,
}

impl KnapsackProblem {
    /// Creates a problem, rejecting an empty catalog.
    pub fn new(items: Vec<Item>, budget: u64) -> SolverResult<Self> {
        if items.is_empty() {
            return Err(SolverError::Validation(
                "item catalog must not be empty".into(),
            ));
        }
        Ok(Self { items, budget })
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Number of genes per chromosome.
    pub fn dimension(&self) -> usize {
        self.items.len()
    }

    /// Objective value assigned to every over-budget selection.
    ///
    /// Doubling keeps the value strictly above `budget` after the `u64` to
    /// `f64` conversion, where a `+ 1` would round away past 2^53.
    pub fn penalty(&self) -> f64 {
        BASE_PENALTY.max(2.0 * self.budget as f64 + 1.0)
    }

    /// Sum of the prices of the selected items.
    pub fn total_price(&self, chromosome: &Chromosome) -> u64 {
        debug_assert_eq!(chromosome.len(), self.dimension());
        chromosome
            .selected()
            .map(|i| self.items[i].price)
            .fold(0u64, u64::saturating_add)
    }

    pub fn objective(&self, chromosome: &Chromosome) -> Objective {
        let total = self.total_price(chromosome);
        if total <= self.budget {
            Objective::Feasible {
                remainder: self.budget - total,
            }
        } else {
            Objective::Penalized {
                penalty: self.penalty(),
            }
        }
    }

    /// Shorthand for `fitness(self.objective(c).value())`.
    pub fn fitness(&self, chromosome: &Chromosome) -> f64 {
        fitness(self.objective(chromosome).value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn two_items() -> KnapsackProblem {
        KnapsackProblem::new(vec![Item::new("A", 100), Item::new("B", 50)], 100).unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = KnapsackProblem::new(vec![], 10).unwrap_err();
        assert!(matches!(err, SolverError::Validation(_)));
    }

    #[test]
    fn test_exact_spend_is_optimal() {
        let problem = two_items();
        let c = Chromosome::from_bits(&[1, 0]);
        assert_eq!(problem.objective(&c), Objective::Feasible { remainder: 0 });
        assert!((problem.fitness(&c) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_over_budget_is_penalized() {
        let problem = two_items();
        let c = Chromosome::from_bits(&[1, 1]);
        let obj = problem.objective(&c);
        assert!(!obj.is_feasible());
        assert_eq!(obj.value(), BASE_PENALTY);
    }

    #[test]
    fn test_empty_selection_leaves_whole_budget() {
        let problem = two_items();
        let c = Chromosome::from_bits(&[0, 0]);
        assert_eq!(problem.objective(&c).value(), 100.0);
    }

    #[test]
    fn test_penalty_exceeds_huge_budget() {
        let problem = KnapsackProblem::new(vec![Item::new("x", 1)], 5_000_000_000).unwrap();
        assert!(problem.penalty() > problem.budget() as f64);
    }

    #[test]
    fn test_penalty_beats_empty_selection_past_f64_precision() {
        for budget in [1u64 << 53, (1u64 << 53) + 1, u64::MAX - 1] {
            let items = vec![Item::new("big", budget), Item::new("one", 1)];
            let problem = KnapsackProblem::new(items, budget).unwrap();
            assert!(problem.penalty() > budget as f64, "budget {budget}");

            let empty = Chromosome::from_bits(&[0, 0]);
            let over = Chromosome::from_bits(&[1, 1]);
            assert!(problem.objective(&empty).is_feasible());
            assert!(!problem.objective(&over).is_feasible());
            assert!(
                problem.fitness(&over) < problem.fitness(&empty),
                "budget {budget}"
            );
        }
    }

    #[test]
    fn test_selected_indices() {
        let c = Chromosome::from_bits(&[0, 1, 1, 0, 1]);
        assert_eq!(c.selected().collect::<Vec<_>>(), vec![1, 2, 4]);
    }

    proptest! {
        #[test]
        fn prop_feasible_remainder_and_penalty_dominance(
            prices in proptest::collection::vec(0u64..10_000, 1..12),
            budget in prop_oneof![0u64..50_000, any::<u64>()],
            seed in any::<u64>(),
        ) {
            let items = prices.iter().enumerate()
                .map(|(i, &p)| Item::new(format!("item{i}"), p))
                .collect();
            let problem = KnapsackProblem::new(items, budget).unwrap();
            let mut rng = crate::random::create_rng(seed);
            let c = Chromosome::random(problem.dimension(), &mut rng);
            let total = problem.total_price(&c);
            let obj = problem.objective(&c);
            if total <= budget {
                prop_assert_eq!(obj.value(), (budget - total) as f64);
                prop_assert!(obj.value() >= 0.0);
            } else {
                prop_assert_eq!(obj.value(), problem.penalty());
                prop_assert!(problem.penalty() > budget as f64);
            }
        }

        #[test]
        fn prop_fitness_strictly_decreasing(a in 0.0f64..1e6, delta in 1e-3f64..1e6) {
            let b = a + delta;
            prop_assert!(fitness(a) > fitness(b));
            prop_assert!(fitness(a) <= 1.0 && fitness(b) > 0.0);
        }
    }
}
