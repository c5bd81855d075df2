//! Property-based tests for the determinant strategies.
