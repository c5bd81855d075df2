//! Worker-pool and fan-out configuration.

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::EngineError;

/// Configuration for the parallel determinant strategies.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Worker threads in the pool; 0 selects the available hardware
    /// parallelism.
    pub num_threads: usize,
    /// Recursion depth up to which the bounded strategy spawns tasks.
    pub max_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            num_threads: 0,
            max_depth: 4,
        }
    }
}

impl EngineConfig {
    /// Builds a rayon pool sized per this configuration.
    ///
    /// # Errors
    /// Returns [`EngineError::PoolBuild`] if the pool cannot be created.
    pub fn build_pool(&self) -> Result<ThreadPool, EngineError> {
        ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()
            .map_err(|e| EngineError::PoolBuild(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.num_threads, 0);
        assert_eq!(config.max_depth, 4);
    }

    #[test]
    fn test_build_pool_with_explicit_size() {
        let config = EngineConfig {
            num_threads: 3,
            ..EngineConfig::default()
        };
        let pool = config.build_pool().unwrap();
        assert_eq!(pool.current_num_threads(), 3);
    }
}
