//! Closed tour over a complete graph.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A closed tour and its total weight.
///
/// `path` lists `N + 1` vertex indices: every vertex of an `N`-vertex graph
/// once, followed by the starting vertex again.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::new(vec![0, 2, 1, 3, 0], 73);
/// assert_eq!(tour.num_vertices(), 4);
/// assert_eq!(tour.start(), Some(0));
/// assert!(tour.is_hamiltonian_circuit(4));
/// assert_eq!(tour.to_string(), "0 -> 2 -> 1 -> 3 -> 0 (length 73)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tour {
    /// Vertices in visit order, first == last.
    pub path: Vec<usize>,
    /// Sum of edge weights along `path`, closing edge included.
    pub length: u64,
}

impl Tour {
    /// Creates a tour from a closed path and its length.
    pub fn new(path: Vec<usize>, length: u64) -> Self {
        Self { path, length }
    }

    /// Number of distinct vertices visited.
    pub fn num_vertices(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The starting (and ending) vertex.
    pub fn start(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Iterates the directed edges `(from, to)` of the tour.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.path.windows(2).map(|w| (w[0], w[1]))
    }

    /// Checks that the path is a Hamiltonian circuit over `n` vertices:
    /// `n + 1` entries, closed, and a permutation of `0..n` before closing.
    pub fn is_hamiltonian_circuit(&self, n: usize) -> bool {
        if n == 0 || self.path.len() != n + 1 || self.path.first() != self.path.last() {
            return false;
        }
        let mut seen = vec![false; n];
        for &v in &self.path[..n] {
            if v >= n || seen[v] {
                return false;
            }
            seen[v] = true;
        }
        true
    }

    /// The same circuit walked in the opposite direction.
    ///
    /// The length is carried over unchanged, which only holds for
    /// symmetric matrices.
    pub fn reversed(&self) -> Self {
        let mut path = self.path.clone();
        path.reverse();
        Self {
            path,
            length: self.length,
        }
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.path.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, " (length {})", self.length)
    }
}
