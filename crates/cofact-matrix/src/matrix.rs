//! Square integer matrices stored in row-major order.
//!
//! The matrix is an immutable value: every operation that "changes" a
//! matrix (minor extraction in particular) allocates a new one. Entries
//! are `i64`; workloads are expected to keep entries small enough that a
//! full cofactor expansion stays in range.

use std::ops::Index;

use thiserror::Error;

/// Errors raised while constructing or slicing a matrix.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    /// A row or column index fell outside the matrix bounds.
    #[error("index ({row}, {col}) out of range for {size}x{size} matrix")]
    OutOfRange {
        /// Requested row index.
        row: usize,
        /// Requested column index.
        col: usize,
        /// Side length of the matrix.
        size: usize,
    },

    /// The input grid was not square.
    #[error("expected a square matrix, got {rows} rows and {cols} columns")]
    NotSquare {
        /// Number of rows supplied.
        rows: usize,
        /// Number of columns in the offending row.
        cols: usize,
    },

    /// The input grid had no entries.
    #[error("matrix must have at least one row and one column")]
    Empty,
}

/// An immutable square matrix of signed integers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Matrix {
    /// Entries in row-major order, `size * size` of them.
    data: Vec<i64>,
    /// Side length.
    size: usize,
}

impl Matrix {
    /// Creates a matrix from a grid of rows.
    ///
    /// # Errors
    /// Returns [`MatrixError::Empty`] for an empty grid and
    /// [`MatrixError::NotSquare`] if any row length differs from the
    /// number of rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        for row in &rows {
            if row.len() != size {
                return Err(MatrixError::NotSquare {
                    rows: size,
                    cols: row.len(),
                });
            }
        }
        let data: Vec<i64> = rows.into_iter().flatten().collect();
        Ok(Self { data, size })
    }

    /// Creates a matrix from row-major entries and a side length.
    ///
    /// # Errors
    /// Returns [`MatrixError::Empty`] when `size == 0` and
    /// [`MatrixError::NotSquare`] when `data.len() != size * size`.
    pub fn from_row_major(data: Vec<i64>, size: usize) -> Result<Self, MatrixError> {
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if data.len() != size * size {
            return Err(MatrixError::NotSquare {
                rows: size,
                cols: data.len() / size,
            });
        }
        Ok(Self { data, size })
    }

    /// Returns the side length of the matrix.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the entry at (row, col), if in range.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<i64> {
        if row < self.size && col < self.size {
            Some(self.data[row * self.size + col])
        } else {
            None
        }
    }

    /// Returns a slice of the specified row.
    ///
    /// # Panics
    /// Panics if `row >= self.size()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[i64] {
        let start = row * self.size;
        &self.data[start..start + self.size]
    }

    /// Returns the row-major entries.
    #[must_use]
    pub fn entries(&self) -> &[i64] {
        &self.data
    }

    /// Extracts the minor obtained by deleting `row` and `col`.
    ///
    /// Surviving entries keep their relative row and column order. The
    /// result is a freshly allocated (n-1)x(n-1) matrix owned by the
    /// caller.
    ///
    /// # Errors
    /// Returns [`MatrixError::OutOfRange`] if either index is `>= n`,
    /// and [`MatrixError::Empty`] for a 1x1 matrix, whose minor would
    /// have no entries.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self, MatrixError> {
        let n = self.size;
        if row >= n || col >= n {
            return Err(MatrixError::OutOfRange { row, col, size: n });
        }
        if n < 2 {
            return Err(MatrixError::Empty);
        }

        let mut data = Vec::with_capacity((n - 1) * (n - 1));
        for r in 0..n {
            if r == row {
                continue;
            }
            for c in 0..n {
                if c == col {
                    continue;
                }
                data.push(self.data[r * n + c]);
            }
        }
        Ok(Self { data, size: n - 1 })
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = i64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.size + col]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.size(), 2);
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 2);
        assert_eq!(m[(1, 0)], 3);
        assert_eq!(m[(1, 1)], 4);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert_eq!(Matrix::from_rows(vec![]), Err(MatrixError::Empty));
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let result = Matrix::from_rows(vec![vec![1, 2], vec![3]]);
        assert_eq!(result, Err(MatrixError::NotSquare { rows: 2, cols: 1 }));
    }

    #[test]
    fn test_from_rows_rejects_rectangular() {
        let result = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert_eq!(result, Err(MatrixError::NotSquare { rows: 2, cols: 3 }));
    }

    #[test]
    fn test_from_row_major() {
        let m = Matrix::from_row_major(vec![1, 2, 3, 4], 2).unwrap();
        assert_eq!(m[(1, 0)], 3);

        assert!(Matrix::from_row_major(vec![1, 2, 3], 2).is_err());
        assert_eq!(Matrix::from_row_major(vec![], 0), Err(MatrixError::Empty));
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.get(1, 1), Some(4));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_minor_deletes_row_and_col() {
        let m = Matrix::from_rows(vec![
            vec![1, 2, 3],
            vec![4, 5, 6],
            vec![7, 8, 9],
        ])
        .unwrap();

        let minor = m.minor(0, 1).unwrap();
        assert_eq!(minor.size(), 2);
        assert_eq!(minor[(0, 0)], 4);
        assert_eq!(minor[(0, 1)], 6);
        assert_eq!(minor[(1, 0)], 7);
        assert_eq!(minor[(1, 1)], 9);
    }

    #[test]
    fn test_minor_out_of_range() {
        let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(
            m.minor(2, 0),
            Err(MatrixError::OutOfRange {
                row: 2,
                col: 0,
                size: 2
            })
        );
        assert_eq!(
            m.minor(0, 5),
            Err(MatrixError::OutOfRange {
                row: 0,
                col: 5,
                size: 2
            })
        );
    }

    #[test]
    fn test_minor_of_unit_matrix_rejected() {
        let m = Matrix::from_rows(vec![vec![7]]).unwrap();
        assert_eq!(m.minor(0, 0), Err(MatrixError::Empty));
    }

    #[test]
    fn test_minor_reinsertion_reconstructs_original() {
        // Deleting (r, c) and splicing the removed row and column back in
        // must reproduce the parent matrix exactly.
        let m = Matrix::from_rows(vec![
            vec![6, 1, 1],
            vec![4, -2, 5],
            vec![2, 8, 7],
        ])
        .unwrap();
        let (r, c) = (1, 2);
        let minor = m.minor(r, c).unwrap();

        let n = m.size();
        let mut rebuilt = vec![vec![0i64; n]; n];
        for row in 0..n {
            for col in 0..n {
                rebuilt[row][col] = if row == r || col == c {
                    m[(row, col)]
                } else {
                    let mr = if row < r { row } else { row - 1 };
                    let mc = if col < c { col } else { col - 1 };
                    minor[(mr, mc)]
                };
            }
        }
        assert_eq!(Matrix::from_rows(rebuilt).unwrap(), m);
    }
}
