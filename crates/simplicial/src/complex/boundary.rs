//! Boundary operators ∂_q : C_q → C_{q-1} as integer matrices.
//!
//! Rows are indexed by the (q−1)-simplices and columns by the q-simplices, both
//! in the complex's storage order. The column of `v` holds `(-1)^i` at the row
//! of the face obtained by deleting the `i`-th vertex of `v`.

use std::collections::HashMap;

use crate::smith::{self, diagonalize, IntMatrix, ReduceError};

use super::simplex::Simplex;
use super::types::ComplexError;

/// A materialized boundary operator and its diagonal form.
#[derive(Clone, Debug)]
pub(crate) struct BoundaryOperator {
    pub(crate) matrix: IntMatrix,
    pub(crate) diagonal: IntMatrix,
}

/// Borrowed view of ∂_q. The zero map (q = 0 or q > max_dim) is never materialized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundaryMap<'a> {
    Zero { rows: usize, cols: usize },
    Dense(&'a IntMatrix),
}

impl BoundaryMap<'_> {
    #[inline]
    pub fn rows(&self) -> usize {
        match self {
            BoundaryMap::Zero { rows, .. } => *rows,
            BoundaryMap::Dense(m) => m.nrows(),
        }
    }

    #[inline]
    pub fn cols(&self) -> usize {
        match self {
            BoundaryMap::Zero { cols, .. } => *cols,
            BoundaryMap::Dense(m) => m.ncols(),
        }
    }

    #[inline]
    pub fn is_zero_map(&self) -> bool {
        match self {
            BoundaryMap::Zero { .. } => true,
            BoundaryMap::Dense(m) => m.iter().all(|&x| x == 0),
        }
    }

    /// Rank of the map (reduces a copy when not already diagonal).
    pub fn rank(&self) -> Result<usize, ReduceError> {
        Ok(match self {
            BoundaryMap::Zero { .. } => 0,
            BoundaryMap::Dense(m) if smith::is_diagonal(m) => smith::rank(m),
            BoundaryMap::Dense(m) => smith::rank(&diagonalize(m)?),
        })
    }

    pub fn to_dense(&self) -> IntMatrix {
        match self {
            BoundaryMap::Zero { rows, cols } => IntMatrix::zeros(*rows, *cols),
            BoundaryMap::Dense(m) => (*m).clone(),
        }
    }
}

/// Matrix of ∂ from `cells` (q-simplices) to `faces` ((q−1)-simplices).
///
/// Fails with `MissingFace` if some facet of a cell is not in `faces`.
pub fn boundary_matrix(faces: &[Simplex], cells: &[Simplex]) -> Result<IntMatrix, ComplexError> {
    let index: HashMap<&Simplex, usize> = faces.iter().enumerate().map(|(k, s)| (s, k)).collect();
    let mut a = IntMatrix::zeros(faces.len(), cells.len());
    for (col, cell) in cells.iter().enumerate() {
        for (face, sign) in cell.boundary() {
            let Some(&row) = index.get(&face) else {
                return Err(ComplexError::MissingFace {
                    simplex: cell.clone(),
                    face,
                });
            };
            a[(row, col)] = sign;
        }
    }
    Ok(a)
}

/// Build and diagonalize ∂_q for q in 1..=max_dim; slot 0 is the zero map.
pub(crate) fn build_operators(
    by_dim: &[Vec<Simplex>],
) -> Result<Vec<Option<BoundaryOperator>>, ComplexError> {
    let mut out = Vec::with_capacity(by_dim.len());
    out.push(None);
    for q in 1..by_dim.len() {
        let matrix = boundary_matrix(&by_dim[q - 1], &by_dim[q])?;
        let diagonal =
            diagonalize(&matrix).map_err(|source| ComplexError::Reduce { q, source })?;
        tracing::debug!(
            q,
            rows = matrix.nrows(),
            cols = matrix.ncols(),
            rank = smith::rank(&diagonal),
            "boundary operator"
        );
        out.push(Some(BoundaryOperator { matrix, diagonal }));
    }
    Ok(out)
}
