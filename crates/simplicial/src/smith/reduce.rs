//! Stage loop of the diagonalization.
//!
//! Stage `s` works on the trailing block `A[s.., s..]`:
//! 1. pick the entry of minimal nonzero |value| and swap it to `(s, s)`;
//! 2. reduce column `s` below and row `s` right of the pivot with floor quotients;
//! 3. if row/column `s` are not clear yet, go back to 1 (the pivot shrank);
//! 4. if some trailing entry is not a multiple of the pivot, add its row into
//!    row `s` and go back to 1;
//! 5. otherwise make the pivot positive and move on to `s + 1`.
//!
//! Every retry strictly decreases the pivot magnitude, so the loop ends.

use super::ops::{Narrowed, WideMatrix, Workspace};
use super::types::{Diagonalization, ElemOp, IntMatrix, ReduceError};

/// Diagonal form of `a`. Pure: `a` is only read.
///
/// Fails with `ReduceError::Overflow` only when a value leaves the `i128`
/// working range or the result does not fit `i64` (e.g. `[i64::MIN]`).
pub fn diagonalize(a: &IntMatrix) -> Result<IntMatrix, ReduceError> {
    Ok(reduce(a, false)?.0)
}

/// Diagonal form of `a` together with unimodular `left`/`right` transforms
/// such that `left * a * right == diagonal`.
pub fn diagonalize_with_transforms(a: &IntMatrix) -> Result<Diagonalization, ReduceError> {
    let (diagonal, Some((left, right))) = reduce(a, true)? else {
        unreachable!("workspace built with tracking returns transforms");
    };
    Ok(Diagonalization {
        diagonal,
        left,
        right,
    })
}

fn reduce(a: &IntMatrix, track_transforms: bool) -> Result<Narrowed, ReduceError> {
    let mut ws = Workspace::new(a, track_transforms);
    let stages = a.nrows().min(a.ncols());
    let mut passes = 0usize;
    let mut s = 0;
    while s < stages {
        passes += 1;
        let Some((pi, pj)) = min_pivot(&ws.a, s) else {
            // trailing block is zero
            break;
        };
        ws.push(ElemOp::RowSwap { i: s, j: pi });
        ws.push(ElemOp::ColSwap { i: s, j: pj });
        ws.flush()?;

        let pivot = ws.at(s, s);
        for i in (s + 1)..ws.a.nrows() {
            let v = ws.at(i, s);
            if v != 0 {
                ws.push(ElemOp::RowAdd {
                    i,
                    j: s,
                    c: neg_floor_div(v, pivot)?,
                });
            }
        }
        ws.flush()?;
        for j in (s + 1)..ws.a.ncols() {
            let v = ws.at(s, j);
            if v != 0 {
                ws.push(ElemOp::ColAdd {
                    i: j,
                    j: s,
                    c: neg_floor_div(v, pivot)?,
                });
            }
        }
        ws.flush()?;

        if !is_cleared_at(&ws.a, s) {
            continue;
        }
        if let Some(i) = first_indivisible_row(&ws.a, s) {
            ws.apply(ElemOp::RowAdd { i: s, j: i, c: 1 })?;
            continue;
        }
        if ws.at(s, s) < 0 {
            ws.apply(ElemOp::RowNeg { i: s })?;
        }
        s += 1;
    }
    tracing::trace!(rows = a.nrows(), cols = a.ncols(), passes, "diagonalized");
    ws.finish()
}

/// Quotient rounded toward negative infinity (`b != 0`); `None` on overflow.
#[inline]
pub(crate) fn floor_div(a: i128, b: i128) -> Option<i128> {
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    // |b| >= 2 whenever r != 0, so q - 1 cannot overflow
    Some(if r != 0 && ((r < 0) != (b < 0)) { q - 1 } else { q })
}

/// Elimination coefficient `-floor(v / pivot)`.
fn neg_floor_div(v: i128, pivot: i128) -> Result<i128, ReduceError> {
    floor_div(v, pivot)
        .and_then(i128::checked_neg)
        .ok_or(ReduceError::Overflow)
}

/// Position of the first entry with minimal nonzero |value| in `a[s.., s..]`
/// (row-major scan), or `None` if the block is zero.
fn min_pivot(a: &WideMatrix, s: usize) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize, u128)> = None;
    for i in s..a.nrows() {
        for j in s..a.ncols() {
            let v = a[(i, j)].unsigned_abs();
            if v != 0 && best.is_none_or(|(_, _, b)| v < b) {
                best = Some((i, j, v));
            }
        }
    }
    best.map(|(i, j, _)| (i, j))
}

/// Row `s` and column `s` are zero past the diagonal.
fn is_cleared_at(a: &WideMatrix, s: usize) -> bool {
    ((s + 1)..a.nrows()).all(|i| a[(i, s)] == 0) && ((s + 1)..a.ncols()).all(|j| a[(s, j)] == 0)
}

/// First row `i > s` holding an entry (past column `s`) not divisible by the pivot.
fn first_indivisible_row(a: &WideMatrix, s: usize) -> Option<usize> {
    let pivot = a[(s, s)];
    ((s + 1)..a.nrows())
        .find(|&i| ((s + 1)..a.ncols()).any(|j| a[(i, j)].wrapping_rem(pivot) != 0))
}
