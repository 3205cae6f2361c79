//! Nearest-neighbor tour construction from a single start.
//!
//! Starting from a given vertex, repeatedly step to the closest unvisited
//! vertex, then close the cycle back to the start.
//!
//! # Complexity
//!
//! O(n²) where n = number of vertices.

use log::trace;

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::models::Tour;

/// Builds a closed tour greedily from `start`.
///
/// Ties between equally distant vertices go to the lowest index. For a
/// single-vertex matrix the tour is `[start, start]` with length
/// `get(start, start)`.
///
/// # Errors
///
/// * [`Error::VertexOutOfRange`] if `start` is not a vertex of `distances`
/// * [`Error::WeightOverflow`] if the tour length exceeds `u64`
/// * [`Error::NoUnvisitedVertex`] if construction runs out of vertices early
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::constructive::nearest_neighbor_tour;
///
/// let dm = DistanceMatrix::from_rows(&[
///     vec![0, 29, 20, 21],
///     vec![29, 0, 15, 17],
///     vec![20, 15, 0, 28],
///     vec![21, 17, 28, 0],
/// ])
/// .expect("valid matrix");
///
/// let tour = nearest_neighbor_tour(&dm, 0).expect("complete graph");
/// assert_eq!(tour.path, vec![0, 2, 1, 3, 0]);
/// assert_eq!(tour.length, 73);
/// ```
pub fn nearest_neighbor_tour(distances: &DistanceMatrix, start: usize) -> Result<Tour> {
    let n = distances.size();
    if start >= n {
        return Err(Error::VertexOutOfRange {
            vertex: start,
            size: n,
        });
    }

    let mut visited = vec![false; n];
    let mut path = Vec::with_capacity(n + 1);
    let mut length: u64 = 0;
    let mut current = start;

    path.push(start);
    visited[start] = true;

    for step in 1..n {
        let (next, d) = distances
            .nearest_unvisited(current, &visited)
            .ok_or(Error::NoUnvisitedVertex { step, current })?;
        trace!("start {start}: step {step} {current} -> {next} ({d})");

        path.push(next);
        visited[next] = true;
        length = length.checked_add(d).ok_or(Error::WeightOverflow)?;
        current = next;
    }

    length = length
        .checked_add(distances.get(current, start))
        .ok_or(Error::WeightOverflow)?;
    path.push(start);

    Ok(Tour::new(path, length))
}
