//! Matrix alias, elementary operations, and the reducer's result type.
//!
//! - `IntMatrix`: dense integer matrix (`nalgebra::DMatrix<i64>`).
//! - `ElemOp`: one elementary integer row/column operation.
//! - `Diagonalization`: diagonal form plus the unimodular transforms.
//! - `ReduceError`: the reduction left the representable range.

use std::fmt;

use nalgebra::DMatrix;

/// Dense integer matrix. Boundary matrices stay small, so dense is fine.
pub type IntMatrix = DMatrix<i64>;

/// Elementary integer row/column operations.
///
/// Every variant is invertible over the integers, so any sequence of them
/// keeps the accumulated transforms unimodular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ElemOp {
    /// row[i] += c * row[j]  (i != j)
    RowAdd { i: usize, j: usize, c: i128 },
    /// col[i] += c * col[j]  (i != j)
    ColAdd { i: usize, j: usize, c: i128 },
    /// row[i] *= -1
    RowNeg { i: usize },
    /// col[i] *= -1
    ColNeg { i: usize },
    RowSwap { i: usize, j: usize },
    ColSwap { i: usize, j: usize },
}

impl ElemOp {
    /// True if applying the op leaves every matrix unchanged.
    #[inline]
    pub(crate) fn is_noop(&self) -> bool {
        match *self {
            ElemOp::RowAdd { c, .. } | ElemOp::ColAdd { c, .. } => c == 0,
            ElemOp::RowSwap { i, j } | ElemOp::ColSwap { i, j } => i == j,
            ElemOp::RowNeg { .. } | ElemOp::ColNeg { .. } => false,
        }
    }
}

/// Result of `diagonalize_with_transforms`.
///
/// Invariants:
/// - `left * original * right == diagonal`.
/// - `left` (m×m) and `right` (n×n) have determinant ±1.
/// - `diagonal` is zero off the main diagonal and non-negative on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagonalization {
    pub diagonal: IntMatrix,
    pub left: IntMatrix,
    pub right: IntMatrix,
}

impl Diagonalization {
    /// Nonzero diagonal entries in stage order.
    pub fn invariant_factors(&self) -> Vec<i64> {
        super::diagonal_entries(&self.diagonal)
    }

    /// Number of nonzero diagonal entries.
    #[inline]
    pub fn rank(&self) -> usize {
        super::rank(&self.diagonal)
    }
}

/// Errors surfaced by the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReduceError {
    /// An intermediate value or an entry of the result does not fit the
    /// working integer range (e.g. the normal form of `[i64::MIN]` is 2^63).
    Overflow,
}

impl fmt::Display for ReduceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReduceError::Overflow => write!(f, "integer overflow during matrix reduction"),
        }
    }
}

impl std::error::Error for ReduceError {}
