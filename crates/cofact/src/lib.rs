//! # Cofact
//!
//! Exact determinants of square integer matrices by Laplace (cofactor)
//! expansion, with three interchangeable execution strategies:
//!
//! - **Sequential**: recursive expansion along row 0, plain or memoized
//! - **Pool fan-out**: one worker task per top-row column
//! - **Depth-bounded**: recursive task fan-out capped at a configured
//!   depth, memoized sequential below the cutoff
//!
//! Cofactor expansion is exponential in the matrix size; the parallel
//! fan-out and the shared memoization cache are its only mitigations,
//! which is the point of this workload.
//!
//! ## Quick Start
//!
//! ```
//! use cofact::prelude::*;
//!
//! let m = Matrix::from_rows(vec![
//!     vec![6, 1, 1],
//!     vec![4, -2, 5],
//!     vec![2, 8, 7],
//! ])?;
//!
//! let pool = EngineConfig::default().build_pool()?;
//! let cache = DetCache::new();
//!
//! assert_eq!(determinant(&m)?, -306);
//! assert_eq!(determinant_parallel(&m, &pool)?, -306);
//! assert_eq!(determinant_bounded(&m, &pool, 2, &cache)?, -306);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use cofact_engine as engine;
pub use cofact_matrix as matrix;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use cofact_engine::{
        cofactor_sign, determinant, determinant_bounded, determinant_cached,
        determinant_parallel, determinant_parallel_cached, spawn_determinant_bounded, DetCache,
        DetHandle, EngineConfig, EngineError, MatrixKey,
    };
    pub use cofact_matrix::{random_matrix, read_matrix, write_matrix, IoError, Matrix, MatrixError};
}
