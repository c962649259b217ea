//! Scratch workspace that applies elementary operations.
//!
//! The workspace owns a private copy of the matrix being reduced and, when
//! requested, the two transform accumulators. Invariant after every applied op:
//! `left · original · right == current`.
//!
//! Entries are widened to `i128` and every add/mul/negate is checked, so the
//! reduction never panics or wraps; `finish` narrows back to `i64`.

use nalgebra::DMatrix;

use super::types::{ElemOp, IntMatrix, ReduceError};

/// Working precision of the reducer.
pub(crate) type WideMatrix = DMatrix<i128>;

/// A (matrix, left, right) triple in `i64`.
pub(crate) type Narrowed = (IntMatrix, Option<(IntMatrix, IntMatrix)>);

/// Working state for one reduction. Never shared; dropped when the reduction ends.
#[derive(Clone, Debug)]
pub(crate) struct Workspace {
    pub(crate) a: WideMatrix,
    transforms: Option<(WideMatrix, WideMatrix)>,
    pending: Vec<ElemOp>,
}

impl Workspace {
    pub(crate) fn new(a: &IntMatrix, track_transforms: bool) -> Self {
        let transforms = track_transforms.then(|| {
            (
                WideMatrix::identity(a.nrows(), a.nrows()),
                WideMatrix::identity(a.ncols(), a.ncols()),
            )
        });
        Self {
            a: a.map(i128::from),
            transforms,
            pending: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn at(&self, i: usize, j: usize) -> i128 {
        self.a[(i, j)]
    }

    /// Queue an op; it takes effect on the next `flush`.
    #[inline]
    pub(crate) fn push(&mut self, op: ElemOp) {
        if !op.is_noop() {
            self.pending.push(op);
        }
    }

    /// Apply all queued ops in order.
    pub(crate) fn flush(&mut self) -> Result<(), ReduceError> {
        let pending = std::mem::take(&mut self.pending);
        for op in pending {
            self.apply(op)?;
        }
        Ok(())
    }

    /// Apply one op to the matrix and the matching transform.
    pub(crate) fn apply(&mut self, op: ElemOp) -> Result<(), ReduceError> {
        match op {
            ElemOp::RowAdd { i, j, c } => {
                add_row(&mut self.a, i, j, c)?;
                if let Some((left, _)) = self.transforms.as_mut() {
                    add_row(left, i, j, c)?;
                }
            }
            ElemOp::ColAdd { i, j, c } => {
                add_col(&mut self.a, i, j, c)?;
                if let Some((_, right)) = self.transforms.as_mut() {
                    add_col(right, i, j, c)?;
                }
            }
            ElemOp::RowNeg { i } => {
                neg_row(&mut self.a, i)?;
                if let Some((left, _)) = self.transforms.as_mut() {
                    neg_row(left, i)?;
                }
            }
            ElemOp::ColNeg { i } => {
                neg_col(&mut self.a, i)?;
                if let Some((_, right)) = self.transforms.as_mut() {
                    neg_col(right, i)?;
                }
            }
            ElemOp::RowSwap { i, j } => {
                self.a.swap_rows(i, j);
                if let Some((left, _)) = self.transforms.as_mut() {
                    left.swap_rows(i, j);
                }
            }
            ElemOp::ColSwap { i, j } => {
                self.a.swap_columns(i, j);
                if let Some((_, right)) = self.transforms.as_mut() {
                    right.swap_columns(i, j);
                }
            }
        }
        Ok(())
    }

    /// Consume the workspace: `(current, Some((left, right)))` if tracked.
    pub(crate) fn finish(self) -> Result<Narrowed, ReduceError> {
        debug_assert!(self.pending.is_empty(), "unflushed ops at finish");
        let transforms = match self.transforms {
            Some((left, right)) => Some((narrow(&left)?, narrow(&right)?)),
            None => None,
        };
        Ok((narrow(&self.a)?, transforms))
    }
}

fn narrow(m: &WideMatrix) -> Result<IntMatrix, ReduceError> {
    // column-major on both sides
    let entries = m
        .iter()
        .map(|&x| i64::try_from(x).map_err(|_| ReduceError::Overflow))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(IntMatrix::from_vec(m.nrows(), m.ncols(), entries))
}

/// `x + c * y`, checked.
#[inline]
fn add_scaled(x: i128, c: i128, y: i128) -> Result<i128, ReduceError> {
    c.checked_mul(y)
        .and_then(|t| x.checked_add(t))
        .ok_or(ReduceError::Overflow)
}

fn add_row(m: &mut WideMatrix, i: usize, j: usize, c: i128) -> Result<(), ReduceError> {
    debug_assert_ne!(i, j);
    for k in 0..m.ncols() {
        m[(i, k)] = add_scaled(m[(i, k)], c, m[(j, k)])?;
    }
    Ok(())
}

fn add_col(m: &mut WideMatrix, i: usize, j: usize, c: i128) -> Result<(), ReduceError> {
    debug_assert_ne!(i, j);
    for k in 0..m.nrows() {
        m[(k, i)] = add_scaled(m[(k, i)], c, m[(k, j)])?;
    }
    Ok(())
}

fn neg_row(m: &mut WideMatrix, i: usize) -> Result<(), ReduceError> {
    for k in 0..m.ncols() {
        m[(i, k)] = m[(i, k)].checked_neg().ok_or(ReduceError::Overflow)?;
    }
    Ok(())
}

fn neg_col(m: &mut WideMatrix, i: usize) -> Result<(), ReduceError> {
    for k in 0..m.nrows() {
        m[(k, i)] = m[(k, i)].checked_neg().ok_or(ReduceError::Overflow)?;
    }
    Ok(())
}
