//! # Matrix Module
//!
//! Integer vectors and matrices plus the handful of operations the cipher
//! needs. Entries of permutation matrices and one-hot columns are 0 or 1, so
//! all arithmetic here is exact.

pub mod ops;

/// Represents a mathematical vector using a `Vec<i64>`.
pub type Vector = Vec<i64>;
/// Represents a mathematical matrix using a `Vec<Vec<i64>>`.
pub type Matrix = Vec<Vec<i64>>;

pub use ops::{identity_matrix, matrix_mul, matrix_vector_mul, transpose};
