//! Strategy timing comparison on a generated workload.
//!
//! Generates a matrix (persisting it to a text file so runs are
//! inspectable), then times each strategy cold and warm.
//!
//! Run with: cargo run --release --example timings

use std::sync::Arc;
use std::time::Instant;

use cofact::prelude::*;

const SIZE: usize = 9;
const SEED: u64 = 42;
const MAX_DEPTH: usize = 4;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filename = format!("matrix{SIZE}.txt");
    let generated = random_matrix(SIZE, -10..=10, SEED)?;
    write_matrix(&generated, &filename)?;
    let m = read_matrix(&filename)?;
    println!("workload: {SIZE}x{SIZE} matrix, entries -10..=10, seed {SEED}");
    println!("persisted to {filename}\n");

    let pool = EngineConfig::default().build_pool()?;
    let cache = Arc::new(DetCache::new());

    let start = Instant::now();
    let sequential = determinant(&m)?;
    report("sequential", sequential, start);

    cache.clear();
    let start = Instant::now();
    let cached_cold = determinant_cached(&m, &cache)?;
    report("sequential cached (cold)", cached_cold, start);

    let start = Instant::now();
    let cached_warm = determinant_cached(&m, &cache)?;
    report("sequential cached (warm)", cached_warm, start);

    let start = Instant::now();
    let pooled = determinant_parallel(&m, &pool)?;
    report("pool fan-out", pooled, start);

    cache.clear();
    let start = Instant::now();
    let bounded = determinant_bounded(&m, &pool, MAX_DEPTH, &cache)?;
    report(&format!("bounded (max_depth {MAX_DEPTH}, cold)"), bounded, start);

    cache.clear();
    let start = Instant::now();
    let handle = spawn_determinant_bounded(m.clone(), &pool, MAX_DEPTH, Arc::clone(&cache));
    let spawned = handle.wait()?;
    report("bounded (spawned handle)", spawned, start);

    assert_eq!(sequential, pooled);
    assert_eq!(sequential, bounded);
    assert_eq!(sequential, spawned);
    println!("\nall strategies agree: det = {sequential}");
    println!("cache entries after bounded run: {}", cache.len());

    Ok(())
}

fn report(label: &str, determinant: i64, start: Instant) {
    println!(
        "{label:<32} det = {determinant:>12}  in {:>8.2?}",
        start.elapsed()
    );
}
