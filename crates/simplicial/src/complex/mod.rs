//! Finite simplicial complexes and their integral homology.
//!
//! Purpose
//! - Group canonical simplices by dimension, build every boundary operator,
//!   diagonalize it, and assemble cycle ranks, boundary images, homology
//!   groups, and Betti numbers once at construction.
//!
//! Design
//! - `Complex` is immutable after construction; every query is a read of the
//!   precomputed tables. Out-of-range dimensions answer with zero values.
//! - Closure under faces is checked while indexing faces for the boundary
//!   matrices (`ComplexError::MissingFace`). `Complex::closure` adds missing
//!   faces instead.
//! - There is no dimension −1: the empty simplex is never stored, and the
//!   codomain of ∂_0 is reported as rank 0.
//!
//! Code cross-refs: `crate::smith::diagonalize`, `crate::homology::HomologyTables`.

mod boundary;
mod simplex;
mod types;

pub use boundary::{boundary_matrix, BoundaryMap};
pub use simplex::Simplex;
pub use types::{ComplexCfg, ComplexError, Vertex};

use std::collections::{BTreeSet, HashSet};

use crate::homology::{Decomposition, HomologyTables};
use crate::smith::IntMatrix;
use boundary::{build_operators, BoundaryOperator};

/// A simplicial complex with all homological invariants precomputed.
#[derive(Clone, Debug)]
pub struct Complex {
    /// `by_dim[q]` lists the q-simplices in storage order.
    by_dim: Vec<Vec<Simplex>>,
    /// `operators[q]` is `None` for the zero map (q = 0).
    operators: Vec<Option<BoundaryOperator>>,
    tables: HomologyTables,
}

impl Complex {
    /// Build from vertex lists. The input must be closed under faces.
    pub fn new<I, S>(simplices: I) -> Result<Self, ComplexError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = Vertex>,
    {
        Self::with_cfg(simplices, ComplexCfg::default())
    }

    /// Build from vertex lists after adding every face of every input simplex.
    pub fn closure<I, S>(simplices: I) -> Result<Self, ComplexError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = Vertex>,
    {
        Self::with_cfg(
            simplices,
            ComplexCfg {
                close_under_faces: true,
            },
        )
    }

    pub fn with_cfg<I, S>(simplices: I, cfg: ComplexCfg) -> Result<Self, ComplexError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = Vertex>,
    {
        let parsed = simplices
            .into_iter()
            .map(Simplex::new)
            .collect::<Result<Vec<_>, _>>()?;
        if cfg.close_under_faces {
            Self::from_simplices(close_under_faces(&parsed))
        } else {
            Self::from_simplices(parsed)
        }
    }

    /// Build from canonical simplices. Duplicates are dropped (first one wins);
    /// storage order within a dimension follows the input order.
    pub fn from_simplices<I: IntoIterator<Item = Simplex>>(
        simplices: I,
    ) -> Result<Self, ComplexError> {
        let mut seen: HashSet<Simplex> = HashSet::new();
        let mut by_dim: Vec<Vec<Simplex>> = vec![Vec::new()];
        for s in simplices {
            if seen.contains(&s) {
                continue;
            }
            seen.insert(s.clone());
            let q = s.dim();
            if by_dim.len() <= q {
                by_dim.resize_with(q + 1, Vec::new);
            }
            by_dim[q].push(s);
        }

        let operators = build_operators(&by_dim)?;
        let chain_ranks: Vec<usize> = by_dim.iter().map(Vec::len).collect();
        let diagonals: Vec<Option<&IntMatrix>> = operators
            .iter()
            .map(|op| op.as_ref().map(|op| &op.diagonal))
            .collect();
        let tables = HomologyTables::assemble(&chain_ranks, &diagonals);
        tracing::info!(
            max_dim = tables.max_dim(),
            simplices = seen.len(),
            betti = ?tables.betti_numbers(),
            "complex built"
        );
        Ok(Self {
            by_dim,
            operators,
            tables,
        })
    }

    /// Highest simplex dimension (0 for the empty complex).
    #[inline]
    pub fn max_dim(&self) -> usize {
        self.by_dim.len() - 1
    }

    /// `Some(q)` selects `[q]`; `None` selects `0..=max_dim`.
    pub fn dims(&self, q: Option<usize>) -> Vec<usize> {
        match q {
            Some(q) => vec![q],
            None => (0..=self.max_dim()).collect(),
        }
    }

    /// q-simplices in storage order (empty out of range).
    pub fn simplices(&self, q: usize) -> &[Simplex] {
        self.by_dim.get(q).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn num_simplices(&self) -> usize {
        self.by_dim.iter().map(Vec::len).sum()
    }

    /// Rank of the chain group C_q.
    pub fn chain_rank(&self, q: usize) -> usize {
        self.tables.chain_rank(q)
    }

    pub fn chain_ranks(&self) -> &[usize] {
        self.tables.chain_ranks()
    }

    /// ∂_q : C_q → C_{q-1} in the simplex bases.
    pub fn boundary_matrix(&self, q: usize) -> BoundaryMap<'_> {
        match self.operator(q) {
            Some(op) => BoundaryMap::Dense(&op.matrix),
            None => self.zero_map(q),
        }
    }

    /// Diagonal form of ∂_q.
    pub fn diagonal_form(&self, q: usize) -> BoundaryMap<'_> {
        match self.operator(q) {
            Some(op) => BoundaryMap::Dense(&op.diagonal),
            None => self.zero_map(q),
        }
    }

    /// Rank of the cycle group Z_q = ker ∂_q.
    pub fn cycle_rank(&self, q: usize) -> usize {
        self.tables.cycle_rank(q)
    }

    pub fn cycle_ranks(&self) -> &[usize] {
        self.tables.cycle_ranks()
    }

    /// Decomposition of B_q = im ∂_q.
    pub fn boundary_image(&self, q: usize) -> &Decomposition {
        self.tables.boundary_image(q)
    }

    /// Decomposition of H_q.
    pub fn homology(&self, q: usize) -> &Decomposition {
        self.tables.homology(q)
    }

    pub fn betti(&self, q: usize) -> usize {
        self.tables.betti(q)
    }

    pub fn betti_numbers(&self) -> &[usize] {
        self.tables.betti_numbers()
    }

    pub fn euler_characteristic(&self) -> i64 {
        self.tables.euler_characteristic()
    }

    pub fn betti_euler_characteristic(&self) -> i64 {
        self.tables.betti_euler_characteristic()
    }

    pub fn tables(&self) -> &HomologyTables {
        &self.tables
    }

    fn operator(&self, q: usize) -> Option<&BoundaryOperator> {
        self.operators.get(q).and_then(Option::as_ref)
    }

    fn zero_map(&self, q: usize) -> BoundaryMap<'_> {
        let rows = q.checked_sub(1).map_or(0, |p| self.chain_rank(p));
        BoundaryMap::Zero {
            rows,
            cols: self.chain_rank(q),
        }
    }
}

/// All faces of all inputs, ordered by (dimension, vertices).
fn close_under_faces(simplices: &[Simplex]) -> Vec<Simplex> {
    let mut all: BTreeSet<(usize, Simplex)> = BTreeSet::new();
    for s in simplices {
        if all.contains(&(s.dim(), s.clone())) {
            continue;
        }
        all.extend(s.all_faces().into_iter().map(|f| (f.dim(), f)));
    }
    all.into_iter().map(|(_, s)| s).collect()
}
