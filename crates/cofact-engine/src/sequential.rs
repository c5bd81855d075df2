//! Sequential Laplace expansion, plain and memoized.
//!
//! This is the base algorithm every other strategy bottoms out to:
//! expansion along row 0 with alternating cofactor signs. The expansion
//! row is fixed rather than chosen adaptively so that all strategies
//! walk the same sub-matrix tree and share cache entries.

use cofact_matrix::Matrix;

use crate::cache::DetCache;
use crate::error::EngineError;
use crate::key::MatrixKey;

/// Returns the cofactor sign for expansion column `col`: `+1` for even
/// columns, `-1` for odd ones.
#[must_use]
pub fn cofactor_sign(col: usize) -> i64 {
    if col % 2 == 0 {
        1
    } else {
        -1
    }
}

/// Closed form for a 2x2 determinant.
pub(crate) fn det2(matrix: &Matrix) -> i64 {
    matrix[(0, 0)] * matrix[(1, 1)] - matrix[(0, 1)] * matrix[(1, 0)]
}

/// Computes the determinant by recursive cofactor expansion along row 0.
///
/// Base cases: a 1x1 matrix returns its sole entry, a 2x2 matrix returns
/// `ad - bc`. For n >= 3:
///
/// ```text
/// det(M) = sum over j of M[0][j] * sign(j) * det(minor(M, 0, j))
/// ```
///
/// # Errors
/// Propagates [`EngineError::Matrix`] if minor extraction fails.
pub fn determinant(matrix: &Matrix) -> Result<i64, EngineError> {
    let n = matrix.size();
    if n == 1 {
        return Ok(matrix[(0, 0)]);
    }
    if n == 2 {
        return Ok(det2(matrix));
    }

    let mut det = 0i64;
    for col in 0..n {
        let minor = matrix.minor(0, col)?;
        det += matrix[(0, col)] * cofactor_sign(col) * determinant(&minor)?;
    }
    Ok(det)
}

/// Memoized variant of [`determinant`].
///
/// The cache is consulted before anything else and populated after each
/// n >= 3 expansion; recursive calls go through the cache as well, so a
/// warm cache short-circuits whole sub-trees. The 1x1 and 2x2 closed
/// forms are cheaper than the lookup and are not stored.
///
/// # Errors
/// Propagates [`EngineError::Matrix`] if minor extraction fails.
pub fn determinant_cached(matrix: &Matrix, cache: &DetCache) -> Result<i64, EngineError> {
    let key = MatrixKey::new(matrix);
    if let Some(det) = cache.get(&key) {
        return Ok(det);
    }

    let n = matrix.size();
    if n == 1 {
        return Ok(matrix[(0, 0)]);
    }
    if n == 2 {
        return Ok(det2(matrix));
    }

    let mut det = 0i64;
    for col in 0..n {
        let minor = matrix.minor(0, col)?;
        det += matrix[(0, col)] * cofactor_sign(col) * determinant_cached(&minor, cache)?;
    }

    cache.insert(key, det);
    Ok(det)
}
