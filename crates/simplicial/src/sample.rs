//! Seeded generators for matrices and complexes (tests, benches, CLI demos).
//!
//! - `random_int_matrix`: uniform entries in `[-bound, bound]`.
//! - `clique_complex`: flag complex of an Erdős–Rényi graph, truncated at `max_dim`.
//! - `sphere`: boundary of the standard (n+1)-simplex, a triangulated n-sphere.
//!
//! All generators return canonical simplices closed under faces, so
//! `Complex::from_simplices` cannot fail on their output.

use std::fmt;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::complex::{Simplex, Vertex};
use crate::smith::IntMatrix;

/// Error type for generator parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    InvalidParams { reason: String },
}

impl SampleError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for SampleError {}

/// Dense `rows × cols` matrix with entries drawn uniformly from `[-bound, bound]`.
pub fn random_int_matrix(rows: usize, cols: usize, bound: i64, seed: u64) -> IntMatrix {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = bound.saturating_abs();
    IntMatrix::from_fn(rows, cols, |_, _| rng.gen_range(-bound..=bound))
}

/// Parameters for random flag complexes.
#[derive(Clone, Copy, Debug)]
pub struct CliqueParams {
    pub vertices: usize,
    /// Independent probability of each edge, in [0, 1].
    pub edge_prob: f64,
    /// Cliques with more than `max_dim + 1` vertices are dropped.
    pub max_dim: usize,
}

impl Default for CliqueParams {
    fn default() -> Self {
        Self {
            vertices: 8,
            edge_prob: 0.5,
            max_dim: 3,
        }
    }
}

impl CliqueParams {
    fn validate(&self) -> Result<(), SampleError> {
        if !(0.0..=1.0).contains(&self.edge_prob) {
            return Err(SampleError::invalid("edge_prob must lie in [0, 1]"));
        }
        if Vertex::try_from(self.vertices).is_err() {
            return Err(SampleError::invalid("too many vertices for u32 labels"));
        }
        Ok(())
    }
}

/// Simplices of the clique complex of a G(n, p) graph, ascending by dimension.
pub fn clique_complex(params: CliqueParams, seed: u64) -> Result<Vec<Simplex>, SampleError> {
    params.validate()?;
    let n = params.vertices;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut adj = vec![vec![false; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let e = rng.gen_bool(params.edge_prob);
            adj[i][j] = e;
            adj[j][i] = e;
        }
    }

    // Cliques are grown by appending a larger vertex adjacent to all members.
    let mut layer: Vec<Vec<usize>> = (0..n).map(|v| vec![v]).collect();
    let mut out: Vec<Simplex> = Vec::new();
    for _ in 0..=params.max_dim {
        if layer.is_empty() {
            break;
        }
        let mut next = Vec::new();
        for clique in &layer {
            let last = clique[clique.len() - 1];
            for v in (last + 1)..n {
                if clique.iter().all(|&u| adj[u][v]) {
                    let mut grown = clique.clone();
                    grown.push(v);
                    next.push(grown);
                }
            }
        }
        out.extend(layer.iter().map(|c| to_simplex(c)));
        layer = next;
    }
    Ok(out)
}

/// Boundary of the (n+1)-simplex on vertices `0..=n+1`.
pub fn sphere(n: usize) -> Vec<Simplex> {
    let vertices = n + 2;
    let mut out = Vec::new();
    // every nonempty subset except the full vertex set, by size
    let mut layer: Vec<Vec<usize>> = (0..vertices).map(|v| vec![v]).collect();
    while !layer.is_empty() && layer[0].len() < vertices {
        out.extend(layer.iter().map(|c| to_simplex(c)));
        layer = layer
            .iter()
            .flat_map(|c| {
                let last = c[c.len() - 1];
                ((last + 1)..vertices).map(move |v| {
                    let mut grown = c.clone();
                    grown.push(v);
                    grown
                })
            })
            .collect();
    }
    out
}

fn to_simplex(vertices: &[usize]) -> Simplex {
    Simplex::from_sorted(vertices.iter().map(|&v| v as Vertex).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::Complex;
    use proptest::prelude::*;

    #[test]
    fn random_matrix_is_seeded_and_bounded() {
        let a = random_int_matrix(4, 5, 3, 42);
        let b = random_int_matrix(4, 5, 3, 42);
        assert_eq!(a, b);
        assert_eq!(a.shape(), (4, 5));
        assert!(a.iter().all(|x| x.abs() <= 3));
        let wide = random_int_matrix(2, 2, i64::MIN, 1);
        assert!(wide.iter().all(|&x| x != i64::MIN));
    }

    #[test]
    fn sphere_counts_match_binomials() {
        // S^2 as the tetrahedron boundary: 4 vertices, 6 edges, 4 triangles.
        let s2 = sphere(2);
        let c = Complex::from_simplices(s2).unwrap();
        assert_eq!(c.chain_ranks(), &[4, 6, 4]);
        // S^0: two points.
        let s0 = Complex::from_simplices(sphere(0)).unwrap();
        assert_eq!(s0.chain_ranks(), &[2]);
    }

    #[test]
    fn clique_complex_extremes() {
        let empty = CliqueParams {
            vertices: 5,
            edge_prob: 0.0,
            max_dim: 3,
        };
        let c = Complex::from_simplices(clique_complex(empty, 1).unwrap()).unwrap();
        assert_eq!(c.betti_numbers(), &[5]);

        let full = CliqueParams {
            vertices: 5,
            edge_prob: 1.0,
            max_dim: 2,
        };
        let c = Complex::from_simplices(clique_complex(full, 1).unwrap()).unwrap();
        // 2-skeleton of the 4-simplex
        assert_eq!(c.chain_ranks(), &[5, 10, 10]);
        assert_eq!(c.betti_numbers(), &[1, 0, 4]);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad = CliqueParams {
            edge_prob: 1.5,
            ..CliqueParams::default()
        };
        assert!(matches!(
            clique_complex(bad, 0),
            Err(SampleError::InvalidParams { .. })
        ));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn euler_identity_on_clique_complexes(
            vertices in 0usize..8,
            edge_prob in 0.0f64..=1.0,
            max_dim in 0usize..4,
            seed in any::<u64>(),
        ) {
            let params = CliqueParams { vertices, edge_prob, max_dim };
            let c = Complex::from_simplices(clique_complex(params, seed).unwrap()).unwrap();
            prop_assert_eq!(c.euler_characteristic(), c.betti_euler_characteristic());
            // β_0 counts components, at least one for a nonempty complex
            prop_assert_eq!(c.betti(0) > 0, vertices > 0);
        }
    }
}
