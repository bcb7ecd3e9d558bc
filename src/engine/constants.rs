//! Engine-wide defaults and limits

/// Elements generated when no input values are given
pub const DEFAULT_ARRAY_SIZE: usize = 8;

/// Value range for randomly generated arrays
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 100;

/// Upper bound on matrix rows and columns, keeps the visualization legible
pub const MAX_MATRIX_DIM: usize = 10;

/// Value range for randomly filled matrices
pub const MATRIX_RANDOM_MIN: i64 = 10;
pub const MATRIX_RANDOM_MAX: i64 = 99;

/// Maximum stack depth before push reports overflow
pub const STACK_CAPACITY: usize = 10;

/// Radicand used by the Sqrt(x) visualizer when none is supplied
pub const DEFAULT_SQRT_TARGET: i64 = 16;
