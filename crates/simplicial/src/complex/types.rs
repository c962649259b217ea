//! Vertex labels, construction config, and the error type.

use std::fmt;

use super::simplex::Simplex;
use crate::smith::ReduceError;

/// Vertex label.
pub type Vertex = u32;

/// Complex construction options.
#[derive(Clone, Copy, Debug, Default)]
pub struct ComplexCfg {
    /// Add every face of every input simplex before building. When false the
    /// input must already be closed under faces, otherwise construction fails
    /// with `ComplexError::MissingFace`.
    pub close_under_faces: bool,
}

/// Errors surfaced while building a complex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComplexError {
    /// A simplex with no vertices was supplied.
    EmptySimplex,
    /// A simplex lists the same vertex twice.
    RepeatedVertex { vertex: Vertex },
    /// `face` is a facet of `simplex` but is not part of the complex.
    MissingFace { simplex: Simplex, face: Simplex },
    /// Diagonalizing ∂_q failed.
    Reduce { q: usize, source: ReduceError },
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplexError::EmptySimplex => write!(f, "simplex has no vertices"),
            ComplexError::RepeatedVertex { vertex } => {
                write!(f, "vertex {vertex} appears more than once in a simplex")
            }
            ComplexError::MissingFace { simplex, face } => write!(
                f,
                "incomplete complex: face {face} of simplex {simplex} is missing"
            ),
            ComplexError::Reduce { q, source } => write!(f, "boundary operator d[{q}]: {source}"),
        }
    }
}

impl std::error::Error for ComplexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComplexError::Reduce { source, .. } => Some(source),
            _ => None,
        }
    }
}
