//! Workload generation and plain-text matrix persistence.
//!
//! The on-disk format is one row per line with space-separated decimal
//! integers. Generation is seeded so timed runs are repeatable.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::num::ParseIntError;
use std::ops::RangeInclusive;
use std::path::Path;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use crate::matrix::{Matrix, MatrixError};

/// Errors raised while reading or writing matrix files.
#[derive(Debug, Error)]
pub enum IoError {
    /// Underlying file operation failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// A token on the given (1-based) line was not a valid integer.
    #[error("line {line}: invalid integer entry: {source}")]
    Parse {
        /// 1-based line number in the file.
        line: usize,
        /// The underlying parse failure.
        source: ParseIntError,
    },

    /// The parsed grid was not a non-empty square matrix.
    #[error(transparent)]
    Shape(#[from] MatrixError),
}

/// Generates a random square matrix with entries drawn uniformly from
/// `entries`.
///
/// The RNG is seeded, so the same `(size, entries, seed)` triple always
/// produces the same matrix.
///
/// # Errors
/// Returns [`MatrixError::Empty`] when `size == 0`.
pub fn random_matrix(
    size: usize,
    entries: RangeInclusive<i64>,
    seed: u64,
) -> Result<Matrix, MatrixError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data: Vec<i64> = (0..size * size)
        .map(|_| rng.gen_range(entries.clone()))
        .collect();
    Matrix::from_row_major(data, size)
}

/// Writes a matrix to a text file, one row per line.
///
/// # Errors
/// Returns [`IoError::Io`] if the file cannot be created or written.
pub fn write_matrix(matrix: &Matrix, path: impl AsRef<Path>) -> Result<(), IoError> {
    let mut writer = BufWriter::new(File::create(path)?);
    for row in 0..matrix.size() {
        let line: Vec<String> = matrix.row(row).iter().map(ToString::to_string).collect();
        writeln!(writer, "{}", line.join(" "))?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads a matrix from a text file written by [`write_matrix`].
///
/// Blank lines are skipped.
///
/// # Errors
/// Returns [`IoError::Io`] on file failures, [`IoError::Parse`] for a
/// malformed entry, and [`IoError::Shape`] when the grid is empty or
/// not square.
pub fn read_matrix(path: impl AsRef<Path>) -> Result<Matrix, IoError> {
    let reader = BufReader::new(File::open(path)?);
    let mut rows = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|token| {
                token
                    .parse::<i64>()
                    .map_err(|source| IoError::Parse {
                        line: idx + 1,
                        source,
                    })
            })
            .collect::<Result<Vec<i64>, IoError>>()?;
        rows.push(row);
    }
    Ok(Matrix::from_rows(rows)?)
}
