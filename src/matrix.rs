//! Dense square matrix storage for distance and cost matrices.

use std::ops::Index;

use serde::Serialize;

/// Dense `n × n` matrix of `f64`, stored row-major in a flat vector.
///
/// Used for both the L1 distance matrix and the accumulated cost matrices.
/// Cost matrices may hold `+inf` in cells masked out by a band window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SquareMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Create an `n × n` matrix filled with zeros.
    pub(crate) fn zeros(n: usize) -> Self {
        Self {
            n,
            data: vec![0.0; n * n],
        }
    }

    /// Return the side length `n`.
    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Return the value at cell `(i, j)`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n` or `j >= n`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n, "row index {i} out of bounds for matrix of size {}", self.n);
        assert!(j < self.n, "column index {j} out of bounds for matrix of size {}", self.n);
        self.data[i * self.n + j]
    }

    /// Set the value at cell `(i, j)`.
    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        debug_assert!(i < self.n && j < self.n);
        self.data[i * self.n + j] = value;
    }

    /// Return row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.n, "row index {i} out of bounds for matrix of size {}", self.n);
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Return the sum of all cells.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Return the flat row-major cell storage.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.data[i * self.n + j]
    }
}
