//! Problem data for the tour optimizer.
//!
//! Locations are indices `0..n`; index 0 is the nest every tour starts
//! from and returns to.

use crate::error::{SolverError, SolverResult};

/// Index of the start/end location.
pub const NEST: usize = 0;

/// Validated symmetric distance table.
///
/// Entries are non-negative, the diagonal is zero and `+inf` marks an
/// unreachable pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from rows.
    ///
    /// # Errors
    /// [`SolverError::Validation`] if there are fewer than two locations,
    /// the rows are not square, an entry is negative or NaN, the diagonal
    /// is non-zero, or the table is not symmetric.
    pub fn new(rows: Vec<Vec<f64>>) -> SolverResult<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(SolverError::Validation(format!(
                "distance matrix needs at least 2 locations, got {n}"
            )));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(SolverError::Validation(format!(
                    "distance matrix row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            data.extend(row);
        }

        for i in 0..n {
            if data[i * n + i] != 0.0 {
                return Err(SolverError::Validation(format!(
                    "distance[{i}][{i}] must be 0, got {}",
                    data[i * n + i]
                )));
            }
            for j in 0..n {
                let d = data[i * n + j];
                if d.is_nan() || d < 0.0 {
                    return Err(SolverError::Validation(format!(
                        "distance[{i}][{j}] must be non-negative, got {d}"
                    )));
                }
                if d != data[j * n + i] {
                    return Err(SolverError::Validation(format!(
                        "distance matrix is not symmetric at ({i}, {j})"
                    )));
                }
            }
        }

        Ok(Self { n, data })
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Always `false`; a valid matrix has at least two locations.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.n + to]
    }

    /// Sum of edge lengths along `path`.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

/// Named locations plus their distance table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourProblem {
    names: Vec<String>,
    distances: DistanceMatrix,
}

impl TourProblem {
    /// # Errors
    /// [`SolverError::Validation`] if the name count differs from the matrix size.
    pub fn new(names: Vec<String>, distances: DistanceMatrix) -> SolverResult<Self> {
        if names.len() != distances.len() {
            return Err(SolverError::Validation(format!(
                "{} location names for a {}x{} distance matrix",
                names.len(),
                distances.len(),
                distances.len()
            )));
        }
        Ok(Self { names, distances })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Location names along `tour`, including the return to the nest.
    pub fn route_names<'a>(&'a self, tour: &'a Tour) -> impl Iterator<Item = &'a str> + 'a {
        tour.path.iter().map(move |&i| self.names[i].as_str())
    }
}

/// A closed tour through every location, starting and ending at [`NEST`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// `n + 1` location indices.
    pub path: Vec<usize>,
    /// Total length of the `n` edges in `path`.
    pub cost: f64,
}

impl Tour {
    pub fn new(path: Vec<usize>, distances: &DistanceMatrix) -> Self {
        let cost = distances.path_cost(&path);
        Self { path, cost }
    }

    /// Directed edges `(from, to)` in travel order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Whether this is a Hamiltonian cycle through the nest over `n` locations.
    pub fn is_valid(&self, n: usize) -> bool {
        if self.path.len() != n + 1
            || self.path.first() != Some(&NEST)
            || self.path.last() != Some(&NEST)
        {
            return false;
        }
        let mut seen = vec![false; n];
        for &loc in &self.path[..n] {
            if loc >= n || seen[loc] {
                return false;
            }
            seen[loc] = true;
        }
        true
    }
}
