//! Constructive heuristics for closed tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor tour from one start, O(n²)
//! - [`TourBuilder`] / [`repeated_nearest_neighbor`] — Nearest neighbor from every start, best tour kept, O(n³)

mod nearest_neighbor;
mod repeated;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use repeated::{repeated_nearest_neighbor, TourBuilder};
