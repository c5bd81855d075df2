//! Depth-bounded recursive task fan-out.
//!
//! Fanning out a task per column at *every* level of the recursion
//! creates a task count that grows combinatorially with matrix size and
//! exhausts the pool's queue. This strategy spawns tasks only while the
//! recursion depth is below a cutoff; deeper calls run the memoized
//! sequential engine inline, trading parallelism breadth for a bounded
//! number of outstanding tasks.

use std::sync::mpsc;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::ThreadPool;

use cofact_matrix::Matrix;

use crate::cache::DetCache;
use crate::error::EngineError;
use crate::key::MatrixKey;
use crate::sequential::{cofactor_sign, det2, determinant_cached};

/// Computes the determinant with recursive task fan-out down to
/// `max_depth`.
///
/// Per call, in order: a cache hit resolves immediately; n <= 2 resolves
/// with the closed form; at or beyond `max_depth` the memoized
/// sequential engine runs inline; otherwise one task per column recurses
/// at depth + 1, and the call resolves once all n column terms are in,
/// writing the sum to the cache first.
///
/// `max_depth = 0` degenerates to the memoized sequential engine.
///
/// # Errors
/// Propagates [`EngineError::Matrix`] if minor extraction fails in any
/// branch.
pub fn determinant_bounded(
    matrix: &Matrix,
    pool: &ThreadPool,
    max_depth: usize,
    cache: &DetCache,
) -> Result<i64, EngineError> {
    pool.install(|| bounded_expansion(matrix, 0, max_depth, cache))
}

fn bounded_expansion(
    matrix: &Matrix,
    depth: usize,
    max_depth: usize,
    cache: &DetCache,
) -> Result<i64, EngineError> {
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

    if depth >= max_depth {
        return determinant_cached(matrix, cache);
    }

    let terms = (0..n)
        .into_par_iter()
        .map(|col| {
            let minor = matrix.minor(0, col)?;
            let sub = bounded_expansion(&minor, depth + 1, max_depth, cache)?;
            Ok(matrix[(0, col)] * cofactor_sign(col) * sub)
        })
        .collect::<Result<Vec<i64>, EngineError>>()?;

    let det = terms.iter().sum();
    cache.insert(key, det);
    Ok(det)
}

/// A handle to one in-flight spawned determinant computation.
///
/// The computation owns its matrix and produces exactly one result or
/// one failure, delivered through [`DetHandle::wait`].
#[derive(Debug)]
pub struct DetHandle {
    receiver: mpsc::Receiver<Result<i64, EngineError>>,
}

impl DetHandle {
    /// Blocks until the spawned computation resolves.
    ///
    /// # Errors
    /// Returns the computation's own error, or
    /// [`EngineError::TaskFailure`] if the worker died without sending a
    /// result.
    pub fn wait(self) -> Result<i64, EngineError> {
        self.receiver.recv().unwrap_or_else(|_| {
            Err(EngineError::TaskFailure(
                "worker exited without producing a result".to_string(),
            ))
        })
    }
}

/// Spawns a depth-bounded computation on the pool and returns a handle.
///
/// The caller keeps the current thread free and collects the result
/// later via [`DetHandle::wait`]. The spawned task takes ownership of
/// the matrix and shares the cache through its `Arc`.
pub fn spawn_determinant_bounded(
    matrix: Matrix,
    pool: &ThreadPool,
    max_depth: usize,
    cache: Arc<DetCache>,
) -> DetHandle {
    let (sender, receiver) = mpsc::channel();
    pool.spawn(move || {
        let result = bounded_expansion(&matrix, 0, max_depth, &cache);
        // The receiver may have been dropped; nothing to do then.
        let _ = sender.send(result);
    });
    DetHandle { receiver }
}
