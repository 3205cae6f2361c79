//! Repeated nearest-neighbor construction.
//!
//! Runs [`nearest_neighbor_tour`] from every vertex and keeps the shortest
//! tour. The best tour is a fold over the per-start results with a
//! "shorter wins, earlier start breaks ties" reducer, so sequential and
//! parallel runs agree exactly.
//!
//! # Complexity
//!
//! O(n³) where n = number of vertices.

use log::{debug, info, warn};

use super::nearest_neighbor::nearest_neighbor_tour;
use crate::config::TourConfig;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Builds the best nearest-neighbor tour over all starting vertices.
///
/// Holds the matrix by reference for its lifetime; the matrix is never
/// modified.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::TourBuilder;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 29, 20, 21],
///     vec![29, 0, 15, 17],
///     vec![20, 15, 0, 28],
///     vec![21, 17, 28, 0],
/// ])
/// .expect("valid matrix");
///
/// let best = TourBuilder::new(&dm).build_best_tour().expect("complete graph");
/// assert_eq!(best.length, 73);
/// assert_eq!(best.path, vec![0, 2, 1, 3, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct TourBuilder<'a> {
    distances: &'a DistanceMatrix,
    config: TourConfig,
}

impl<'a> TourBuilder<'a> {
    /// Creates a sequential builder over `distances`.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self {
            distances,
            config: TourConfig::default(),
        }
    }

    /// Replaces the execution settings.
    pub fn with_config(mut self, config: TourConfig) -> Self {
        self.config = config;
        self
    }

    /// The distance matrix this builder reads.
    pub fn distances(&self) -> &DistanceMatrix {
        self.distances
    }

    /// Returns the shortest tour found across all starting vertices.
    ///
    /// A start whose tour length overflows `u64` can never be the shortest
    /// and is skipped; [`Error::WeightOverflow`] is returned only when every
    /// start overflows. Any other error is returned as is.
    pub fn build_best_tour(&self) -> Result<Tour> {
        let (start, best) = self
            .run(|| self.best_sequential(), |n| self.best_parallel(n))?
            .ok_or(Error::WeightOverflow)?;
        info!(
            "best tour length {} from start {start} over {} vertices",
            best.length,
            self.distances.size()
        );
        Ok(best)
    }

    /// Returns the nearest-neighbor tour of every starting vertex, in start order.
    ///
    /// Fails with [`Error::WeightOverflow`] if any start's tour overflows.
    pub fn tours_by_start(&self) -> Result<Vec<Tour>> {
        self.run(|| self.all_sequential(), |n| self.all_parallel(n))
    }

    fn run<T: Send>(
        &self,
        sequential: impl FnOnce() -> Result<T>,
        parallel: impl FnOnce(usize) -> Result<T> + Send,
    ) -> Result<T> {
        if !self.config.parallel {
            return sequential();
        }
        if !cfg!(feature = "parallel") {
            warn!("parallel execution requested without the `parallel` feature; running sequentially");
            return sequential();
        }

        let n = self.distances.size();
        match self.config.num_threads {
            Some(threads) => in_pool(threads, || parallel(n)),
            None => parallel(n),
        }
    }

    fn start_tour(&self, start: usize) -> Result<(usize, Tour)> {
        let tour = nearest_neighbor_tour(self.distances, start)?;
        debug!("start {start}: length {}", tour.length);
        Ok((start, tour))
    }

    /// Like `start_tour`, with an overflowing tour mapped to `None`.
    fn candidate(&self, start: usize) -> Result<Candidate> {
        match self.start_tour(start) {
            Ok(found) => Ok(Some(found)),
            Err(Error::WeightOverflow) => {
                debug!("start {start}: length overflows u64, skipped");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    fn best_sequential(&self) -> Result<Candidate> {
        (0..self.distances.size()).try_fold(None, |best, start| {
            Ok(shorter(best, self.candidate(start)?))
        })
    }

    fn all_sequential(&self) -> Result<Vec<Tour>> {
        (0..self.distances.size())
            .map(|start| self.start_tour(start).map(|(_, t)| t))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn best_parallel(&self, n: usize) -> Result<Candidate> {
        use rayon::prelude::*;

        (0..n)
            .into_par_iter()
            .map(|start| self.candidate(start))
            .try_reduce(|| None, |a, b| Ok(shorter(a, b)))
    }

    #[cfg(feature = "parallel")]
    fn all_parallel(&self, n: usize) -> Result<Vec<Tour>> {
        use rayon::prelude::*;

        (0..n)
            .into_par_iter()
            .map(|start| self.start_tour(start).map(|(_, t)| t))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn best_parallel(&self, _n: usize) -> Result<Candidate> {
        self.best_sequential()
    }

    #[cfg(not(feature = "parallel"))]
    fn all_parallel(&self, _n: usize) -> Result<Vec<Tour>> {
        self.all_sequential()
    }
}

/// A start's tour, or `None` when its length does not fit into `u64`.
type Candidate = Option<(usize, Tour)>;

/// Runs the repeated nearest-neighbor heuristic sequentially.
///
/// Shorthand for `TourBuilder::new(distances).build_best_tour()`.
pub fn repeated_nearest_neighbor(distances: &DistanceMatrix) -> Result<Tour> {
    TourBuilder::new(distances).build_best_tour()
}

/// Keeps the strictly shorter tour; equal lengths go to the lower start.
/// `None` (no tour, or an overflowing one) loses to any tour.
///
/// Associative and commutative over candidates with distinct starts, with
/// `None` as identity, so any reduction order yields the same winner.
fn shorter(a: Candidate, b: Candidate) -> Candidate {
    match (a, b) {
        (Some(a), Some(b)) => {
            if (b.1.length, b.0) < (a.1.length, a.0) {
                Some(b)
            } else {
                Some(a)
            }
        }
        (a, None) => a,
        (None, b) => b,
    }
}

#[cfg(feature = "parallel")]
fn in_pool<T: Send>(threads: usize, op: impl FnOnce() -> Result<T> + Send) -> Result<T> {
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;
    pool.install(op)
}

#[cfg(not(feature = "parallel"))]
fn in_pool<T: Send>(_threads: usize, op: impl FnOnce() -> Result<T> + Send) -> Result<T> {
    op()
}
