//! # cofact-matrix
//!
//! Square integer matrices for cofactor-expansion workloads.
//!
//! This crate provides:
//! - An immutable row-major [`Matrix`] of `i64` entries
//! - Minor extraction (delete one row and one column)
//! - Random workload generation with a seeded RNG
//! - Plain-text persistence (one row per line, space-separated)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod io;
pub mod matrix;

pub use io::{random_matrix, read_matrix, write_matrix, IoError};
pub use matrix::{Matrix, MatrixError};
