//! Result types for tour construction.

mod tour;

pub use tour::Tour;
