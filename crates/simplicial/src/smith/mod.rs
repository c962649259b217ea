//! Integer matrix diagonalization (Smith-normal-form style).
//!
//! Purpose
//! - Reduce an arbitrary integer matrix `A` (m×n) to a diagonal `D = L·A·R`
//!   using only integer row/column operations, so `L` and `R` stay unimodular.
//! - Feed the homology assembly with the invariant factors of each boundary map.
//!
//! Design
//! - Reduction is a pure function of the input matrix. All mutable state lives
//!   in a private `Workspace` that is created per call and dropped afterwards.
//! - The stage index is an explicit loop variable; each pass plans its swaps and
//!   eliminations into a pending list of `ElemOp`s and flushes it.
//! - Transforms are only accumulated when the caller asks for them.
//! - Arithmetic is checked and runs on `i128`; the result is narrowed back to
//!   `i64`. Anything that does not fit fails with `ReduceError::Overflow`.
//!
//! Conventions
//! - Pivot: first entry (row-major) of minimal nonzero |value| in the trailing block.
//! - Quotients round toward −∞, remainders take the sign of the pivot.
//! - Output diagonal entries are non-negative; nonzero entries form a
//!   divisibility chain `d_1 | d_2 | …` (checked by `has_divisibility_chain`).

mod ops;
mod reduce;
mod types;

pub use reduce::{diagonalize, diagonalize_with_transforms};
pub use types::{Diagonalization, IntMatrix, ReduceError};

pub(crate) use types::ElemOp;

/// True if every off-diagonal entry is zero.
pub fn is_diagonal(a: &IntMatrix) -> bool {
    (0..a.nrows()).all(|i| (0..a.ncols()).all(|j| i == j || a[(i, j)] == 0))
}

/// Nonzero entries of the main diagonal, in order.
pub fn diagonal_entries(a: &IntMatrix) -> Vec<i64> {
    (0..a.nrows().min(a.ncols()))
        .map(|k| a[(k, k)])
        .filter(|&v| v != 0)
        .collect()
}

/// Rank of a diagonal matrix (count of nonzero diagonal entries).
pub fn rank(a: &IntMatrix) -> usize {
    diagonal_entries(a).len()
}

/// True if the nonzero diagonal entries satisfy `d_k | d_{k+1}`.
pub fn has_divisibility_chain(a: &IntMatrix) -> bool {
    diagonal_entries(a)
        .windows(2)
        .all(|w| w[1].wrapping_rem(w[0]) == 0)
}
