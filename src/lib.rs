//! # u-tour
//!
//! Traveling salesman tours on a complete weighted graph using the repeated
//! nearest-neighbor heuristic: a greedy nearest-neighbor tour is built from
//! every starting vertex and the shortest one is returned.
//!
//! ## Modules
//!
//! - [`distance`] — Validated integer distance matrix
//! - [`models`] — The [`Tour`](models::Tour) result type
//! - [`constructive`] — Nearest-neighbor and repeated nearest-neighbor construction
//! - [`config`] — Sequential/parallel execution settings
//! - [`error`] — Error type
//!
//! ## Example
//!
//! ```
//! use u_tour::{DistanceMatrix, TourBuilder};
//!
//! let dm = DistanceMatrix::from_rows(&[
//!     vec![0, 29, 20, 21],
//!     vec![29, 0, 15, 17],
//!     vec![20, 15, 0, 28],
//!     vec![21, 17, 28, 0],
//! ])?;
//! let best = TourBuilder::new(&dm).build_best_tour()?;
//! assert_eq!(best.length, 73);
//! # Ok::<(), u_tour::Error>(())
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod models;

pub use config::TourConfig;
pub use constructive::{nearest_neighbor_tour, repeated_nearest_neighbor, TourBuilder};
pub use distance::DistanceMatrix;
pub use error::{Error, Result};
pub use models::Tour;
