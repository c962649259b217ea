//! Curated re-exports for experiments and bindings.
//!
//! Prefer these paths in downstream code; module layout may move underneath.

// Matrix reduction
pub use crate::smith::{
    diagonal_entries, diagonalize, diagonalize_with_transforms, has_divisibility_chain,
    is_diagonal, rank as diagonal_rank, Diagonalization, IntMatrix, ReduceError,
};
// Complexes and boundary operators
pub use crate::complex::{
    boundary_matrix, BoundaryMap, Complex, ComplexCfg, ComplexError, Simplex, Vertex,
};
// Homology
pub use crate::homology::{Decomposition, HomologyTables, FREE};
// Generators
pub use crate::sample::{
    clique_complex, random_int_matrix, sphere, CliqueParams, SampleError,
};

/// Betti numbers of the complex spanned by `simplices` after closing it under faces.
pub fn betti_numbers_of_closure<I, S>(simplices: I) -> Result<Vec<usize>, ComplexError>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = Vertex>,
{
    Ok(Complex::closure(simplices)?.betti_numbers().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn betti_of_closed_triangle_and_circle() {
        assert_eq!(betti_numbers_of_closure(vec![vec![0, 1, 2]]).unwrap(), vec![1, 0, 0]);
        assert_eq!(
            betti_numbers_of_closure(vec![vec![0, 1], vec![1, 2], vec![0, 2]]).unwrap(),
            vec![1, 1]
        );
    }

    #[test]
    fn repeated_vertex_surfaces_as_error() {
        assert_eq!(
            betti_numbers_of_closure(vec![vec![0, 0]]),
            Err(ComplexError::RepeatedVertex { vertex: 0 })
        );
    }
}
