//! Content-derived cache keys for matrices.

use std::fmt::Write;

use cofact_matrix::Matrix;

/// A deterministic, collision-free encoding of a matrix's contents.
///
/// The key carries the side length, a `,` after every entry, and a `;`
/// after every row, so two matrices can only share a key when they have
/// the same dimensions and the same value in every position. Mere value
/// concatenation would let `[1, 23]` and `[12, 3]` collide; the
/// delimiters rule that out.
///
/// Encoding is a single O(n²) pass and never recurses; it runs on every
/// memoized call, so it stays allocation-light.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatrixKey(String);

impl MatrixKey {
    /// Encodes a matrix into its cache key.
    #[must_use]
    pub fn new(matrix: &Matrix) -> Self {
        let n = matrix.size();
        // ~4 bytes per entry covers the small-range reference workload
        // without reallocation.
        let mut encoded = String::with_capacity(n * n * 4 + 8);
        let _ = write!(encoded, "{n}:");
        for row in 0..n {
            for &value in matrix.row(row) {
                let _ = write!(encoded, "{value},");
            }
            encoded.push(';');
        }
        Self(encoded)
    }

    /// Returns the encoded form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Matrix> for MatrixKey {
    fn from(matrix: &Matrix) -> Self {
        Self::new(matrix)
    }
}
