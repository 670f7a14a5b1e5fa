// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A shape-checked 2D scalar grid for mesh and image artists.

extern crate alloc;

use alloc::vec::Vec;

use crate::error::Error;

/// A row-major `rows x cols` grid of f64 samples.
///
/// Construction validates that the flat buffer length matches the shape, so
/// downstream geometry generation never has to re-check.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Grid {
    /// Creates a grid, validating `data.len() == rows * cols`.
    pub fn new(rows: usize, cols: usize, data: impl Into<Vec<f64>>) -> Result<Self, Error> {
        let data = data.into();
        let expected = rows * cols;
        if data.len() != expected {
            return Err(Error::DimensionMismatch {
                what: "grid data",
                expected,
                got: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Number of rows (the y extent).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (the x extent).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid has no cells.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The sample at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// The flat row-major sample buffer.
    pub fn values(&self) -> &[f64] {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn rejects_wrong_length() {
        let err = Grid::new(2, 3, [1.0, 2.0]).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                what: "grid data",
                expected: 6,
                got: 2,
            }
        );
    }

    #[test]
    fn indexes_row_major() {
        let g = Grid::new(2, 3, [0.0, 1.0, 2.0, 10.0, 11.0, 12.0]).unwrap();
        assert_eq!(g.get(0, 2), 2.0);
        assert_eq!(g.get(1, 0), 10.0);
    }
}
