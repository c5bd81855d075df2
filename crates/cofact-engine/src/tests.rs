//! Integration tests for cofact-engine.

#[cfg(test)]
mod integration_tests {
    use std::sync::Arc;

    use cofact_matrix::Matrix;

    use crate::bounded::{determinant_bounded, spawn_determinant_bounded};
    use crate::cache::DetCache;
    use crate::config::EngineConfig;
    use crate::parallel::{determinant_parallel, determinant_parallel_cached};
    use crate::sequential::{determinant, determinant_cached};

    fn matrix(rows: Vec<Vec<i64>>) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    fn reference_5x5() -> Matrix {
        matrix(vec![
            vec![2, -1, 0, 3, 1],
            vec![4, 0, 2, -2, 5],
            vec![1, 3, -1, 0, 2],
            vec![0, 2, 4, 1, -3],
            vec![3, -2, 1, 5, 0],
        ])
    }

    #[test]
    fn test_every_strategy_agrees_on_5x5() {
        let pool = EngineConfig::default().build_pool().unwrap();
        let m = reference_5x5();
        let reference = determinant(&m).unwrap();

        assert_eq!(determinant_parallel(&m, &pool).unwrap(), reference);

        for max_depth in 0..=3 {
            let cache = DetCache::new();
            assert_eq!(
                determinant_bounded(&m, &pool, max_depth, &cache).unwrap(),
                reference
            );
        }

        let cache = DetCache::new();
        assert_eq!(determinant_cached(&m, &cache).unwrap(), reference);
        assert_eq!(
            determinant_parallel_cached(&m, &pool, &cache).unwrap(),
            reference
        );
    }

    #[test]
    fn test_strategies_share_one_cache_safely() {
        // Warm the cache with one strategy, then let the others consume
        // and extend it; answers must not drift.
        let pool = EngineConfig::default().build_pool().unwrap();
        let cache = DetCache::new();
        let m = reference_5x5();
        let reference = determinant(&m).unwrap();

        assert_eq!(determinant_cached(&m, &cache).unwrap(), reference);
        assert_eq!(
            determinant_parallel_cached(&m, &pool, &cache).unwrap(),
            reference
        );
        assert_eq!(determinant_bounded(&m, &pool, 2, &cache).unwrap(), reference);
    }

    #[test]
    fn test_concurrent_bounded_callers_agree() {
        // Many simultaneous callers race on the same cold cache; every
        // outcome of the benign check-then-store race must produce the
        // sequential answer.
        let pool = EngineConfig::default().build_pool().unwrap();
        let cache = Arc::new(DetCache::new());
        let m = reference_5x5();
        let reference = determinant(&m).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| spawn_determinant_bounded(m.clone(), &pool, 2, Arc::clone(&cache)))
            .collect();

        for handle in handles {
            assert_eq!(handle.wait().unwrap(), reference);
        }
    }

    #[test]
    fn test_cold_and_warm_runs_match() {
        let pool = EngineConfig::default().build_pool().unwrap();
        let cache = DetCache::new();
        let m = reference_5x5();

        let cold = determinant_bounded(&m, &pool, 2, &cache).unwrap();
        let warm = determinant_bounded(&m, &pool, 2, &cache).unwrap();
        assert_eq!(cold, warm);

        cache.clear();
        let cold_again = determinant_bounded(&m, &pool, 2, &cache).unwrap();
        assert_eq!(cold_again, cold);
    }
}
