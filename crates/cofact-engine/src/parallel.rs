//! Thread-pool fan-out: one task per top-row column.
//!
//! Each task computes its full cofactor term with the sequential engine;
//! there is no nested fan-out inside a task. The caller blocks until all
//! column terms are in and sums them.

use rayon::prelude::*;
use rayon::ThreadPool;

use cofact_matrix::Matrix;

use crate::cache::DetCache;
use crate::error::EngineError;
use crate::sequential::{cofactor_sign, det2, determinant, determinant_cached};

/// Computes the determinant with one pool task per top-row column.
///
/// For n <= 2 the closed forms short-circuit without touching the pool.
/// Column terms are collected in column order; if any task fails, that
/// single error reaches the caller and no partial sum escapes.
///
/// # Errors
/// Propagates [`EngineError::Matrix`] if minor extraction fails in any
/// task.
pub fn determinant_parallel(matrix: &Matrix, pool: &ThreadPool) -> Result<i64, EngineError> {
    let n = matrix.size();
    if n == 1 {
        return Ok(matrix[(0, 0)]);
    }
    if n == 2 {
        return Ok(det2(matrix));
    }

    let terms = pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|col| {
                let minor = matrix.minor(0, col)?;
                Ok(matrix[(0, col)] * cofactor_sign(col) * determinant(&minor)?)
            })
            .collect::<Result<Vec<i64>, EngineError>>()
    })?;

    Ok(terms.iter().sum())
}

/// Like [`determinant_parallel`], but each task runs the memoized
/// sequential engine against the shared cache.
///
/// # Errors
/// Propagates [`EngineError::Matrix`] if minor extraction fails in any
/// task.
pub fn determinant_parallel_cached(
    matrix: &Matrix,
    pool: &ThreadPool,
    cache: &DetCache,
) -> Result<i64, EngineError> {
    let n = matrix.size();
    if n == 1 {
        return Ok(matrix[(0, 0)]);
    }
    if n == 2 {
        return Ok(det2(matrix));
    }

    let terms = pool.install(|| {
        (0..n)
            .into_par_iter()
            .map(|col| {
                let minor = matrix.minor(0, col)?;
                Ok(matrix[(0, col)] * cofactor_sign(col) * determinant_cached(&minor, cache)?)
            })
            .collect::<Result<Vec<i64>, EngineError>>()
    })?;

    Ok(terms.iter().sum())
}
