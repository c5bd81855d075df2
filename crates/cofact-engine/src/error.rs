//! Errors surfaced by the determinant engines.

use thiserror::Error;

use cofact_matrix::MatrixError;

/// Errors that can occur while computing a determinant.
///
/// Every failure path reaches the strategy caller; nothing is retried
/// or logged-and-swallowed inside the engines.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A matrix operation (minor extraction, construction) failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    /// A spawned computation terminated without producing a result.
    #[error("worker task failed: {0}")]
    TaskFailure(String),

    /// The configured worker pool could not be built.
    #[error("failed to build thread pool: {0}")]
    PoolBuild(String),
}
