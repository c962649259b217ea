//! Canonical simplices (sorted, duplicate-free vertex lists).

use std::collections::BTreeSet;
use std::fmt;

use super::types::{ComplexError, Vertex};

/// A nonempty, sorted, duplicate-free list of vertices.
///
/// Invariants:
/// - `vertices` is strictly increasing and has length ≥ 1.
/// - `dim() == vertices.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Simplex {
    vertices: Vec<Vertex>,
}

impl Simplex {
    /// Canonicalize by sorting. Fails on an empty list or a repeated vertex.
    pub fn new<I: IntoIterator<Item = Vertex>>(vertices: I) -> Result<Self, ComplexError> {
        let mut vertices: Vec<Vertex> = vertices.into_iter().collect();
        if vertices.is_empty() {
            return Err(ComplexError::EmptySimplex);
        }
        vertices.sort_unstable();
        if let Some(w) = vertices.windows(2).find(|w| w[0] == w[1]) {
            return Err(ComplexError::RepeatedVertex { vertex: w[0] });
        }
        Ok(Self { vertices })
    }

    /// Caller guarantees the canonical form.
    pub(crate) fn from_sorted(vertices: Vec<Vertex>) -> Self {
        debug_assert!(!vertices.is_empty());
        debug_assert!(vertices.windows(2).all(|w| w[0] < w[1]));
        Self { vertices }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.vertices.len() - 1
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Facet obtained by deleting the `i`-th vertex; `None` for a vertex
    /// simplex or an out-of-range index.
    pub fn face(&self, i: usize) -> Option<Simplex> {
        if self.vertices.len() < 2 || i >= self.vertices.len() {
            return None;
        }
        let mut vertices = self.vertices.clone();
        vertices.remove(i);
        Some(Self { vertices })
    }

    /// Codimension-one faces in deletion order (empty for a vertex).
    pub fn faces(&self) -> impl Iterator<Item = Simplex> + '_ {
        (0..self.vertices.len()).filter_map(|i| self.face(i))
    }

    /// Signed facets: deleting vertex `i` carries sign `(-1)^i`.
    pub fn boundary(&self) -> impl Iterator<Item = (Simplex, i64)> + '_ {
        self.faces()
            .enumerate()
            .map(|(i, f)| (f, if i % 2 == 0 { 1 } else { -1 }))
    }

    /// Every nonempty face, `self` included.
    pub fn all_faces(&self) -> BTreeSet<Simplex> {
        let mut out = BTreeSet::new();
        let mut frontier = vec![self.clone()];
        while let Some(s) = frontier.pop() {
            if out.contains(&s) {
                continue;
            }
            frontier.extend(s.faces());
            out.insert(s);
        }
        out
    }
}

impl fmt::Display for Simplex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (k, v) in self.vertices.iter().enumerate() {
            if k > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}
