//! Human-readable summaries of solver results.

use crate::aco::{Tour, TourProblem};
use crate::ga::{Chromosome, KnapsackProblem};
use std::fmt;

/// Formats an integer with `,` between thousands groups.
pub fn group_thousands(value: i128) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Selected items, spend, budget and remainder for one chromosome.
pub struct KnapsackReport<'a> {
    problem: &'a KnapsackProblem,
    selection: &'a Chromosome,
    currency: &'a str,
}

impl<'a> KnapsackReport<'a> {
    pub fn new(problem: &'a KnapsackProblem, selection: &'a Chromosome) -> Self {
        Self {
            problem,
            selection,
            currency: "",
        }
    }

    /// Prefix printed before every amount, e.g. `"Rp"`.
    pub fn with_currency(mut self, currency: &'a str) -> Self {
        self.currency = currency;
        self
    }

    pub fn total(&self) -> u64 {
        self.problem.total_price(self.selection)
    }

    /// Budget minus spend; negative only for an over-budget selection.
    pub fn remainder(&self) -> i128 {
        self.problem.budget() as i128 - self.total() as i128
    }

    fn amount(&self, value: i128) -> String {
        if self.currency.is_empty() {
            group_thousands(value)
        } else {
            format!("{} {}", self.currency, group_thousands(value))
        }
    }
}

impl fmt::Display for KnapsackReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== SELECTED ITEMS ===")?;
        for i in self.selection.selected() {
            let item = &self.problem.items()[i];
            writeln!(
                f,
                "- {:<25} : {:>12}",
                item.name,
                self.amount(item.price as i128)
            )?;
        }
        writeln!(f, "{}", "-".repeat(45))?;
        writeln!(f, "Total spend  : {}", self.amount(self.total() as i128))?;
        writeln!(f, "Budget       : {}", self.amount(self.problem.budget() as i128))?;
        write!(f, "Remainder    : {}", self.amount(self.remainder()))
    }
}

/// Ordered location names of a tour and its total distance.
pub struct TourReport<'a> {
    problem: &'a TourProblem,
    tour: &'a Tour,
    unit: &'a str,
}

impl<'a> TourReport<'a> {
    pub fn new(problem: &'a TourProblem, tour: &'a Tour) -> Self {
        Self {
            problem,
            tour,
            unit: "",
        }
    }

    /// Suffix printed after the distance, e.g. `"km"`.
    pub fn with_unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }
}

impl fmt::Display for TourReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== BEST TOUR ===")?;
        for (step, name) in self.problem.route_names(self.tour).enumerate() {
            writeln!(f, "{:>3}. {}", step, name)?;
        }
        writeln!(f)?;
        write!(f, "Total distance: {:.2}", self.tour.cost)?;
        if !self.unit.is_empty() {
            write!(f, " {}", self.unit)?;
        }
        Ok(())
    }
}
