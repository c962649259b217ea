//! Integral simplicial homology.
//!
//! Pipeline: simplices → `complex::Complex` groups them by dimension →
//! `complex::boundary_matrix` builds ∂_q → `smith::diagonalize` reduces it →
//! `homology::HomologyTables` derives Z_q, B_q, H_q, and β_q.
//! Everything is computed once when the complex is built; queries are reads.
//!
//! API Policy
//! - Queries return structured values (ranks, matrices, `Decomposition`s).
//!   Rendering lives in the `cli` crate.

pub mod api;
pub mod complex;
pub mod homology;
pub mod sample;
pub mod smith;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::{Complex, ComplexError, Simplex};
pub use homology::Decomposition;
pub use smith::IntMatrix;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::complex::{BoundaryMap, Complex, ComplexCfg, ComplexError, Simplex, Vertex};
    pub use crate::homology::{Decomposition, HomologyTables, FREE};
    pub use crate::smith::{
        diagonalize, diagonalize_with_transforms, Diagonalization, IntMatrix, ReduceError,
    };
}
