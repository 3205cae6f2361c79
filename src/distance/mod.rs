//! Distance matrices.
//!
//! Provides the dense, validated weight matrix that tour construction reads.

mod matrix;

pub use matrix::DistanceMatrix;
