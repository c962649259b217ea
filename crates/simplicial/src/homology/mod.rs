//! Homology assembly from diagonalized boundary operators.
//!
//! Given the chain ranks `c_q` and the diagonal form of every ∂_q:
//! - `B_q` (image of ∂_q): unit diagonal entries are free, others torsion.
//! - `Z_q = c_q − rank B_q`, with `Z_0 = c_0`.
//! - `H_q = Z^(Z_q − rank B_{q+1}) ⊕ torsion(B_{q+1})`, `β_q` its free rank.
//!
//! `B_q` and `Z_q` are filled first (ascending), then `H_q` and `β_q`, since
//! `H_q` reads `B_{q+1}`. `B_{max_dim+1}` is trivial.

mod decomposition;

pub use decomposition::{Decomposition, FREE};

pub(crate) use decomposition::TRIVIAL;

use crate::smith::{self, IntMatrix};

/// Derived invariants for dimensions `0..=max_dim`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomologyTables {
    chain: Vec<usize>,
    cycles: Vec<usize>,
    /// One extra trailing entry for `B_{max_dim+1}`.
    images: Vec<Decomposition>,
    groups: Vec<Decomposition>,
    betti: Vec<usize>,
}

impl HomologyTables {
    /// Assemble all tables.
    ///
    /// `chain_ranks[q]` is the number of q-simplices; `diagonals[q]` is the
    /// diagonal form of ∂_q, or `None` for the zero map. `chain_ranks` fixes
    /// `max_dim`; a missing or surplus diagonal is ignored (treated as zero).
    pub(crate) fn assemble(chain_ranks: &[usize], diagonals: &[Option<&IntMatrix>]) -> Self {
        let top = chain_ranks.len();

        let mut images: Vec<Decomposition> = (0..top)
            .map(|q| diagonals.get(q).copied().flatten())
            .map(|d| match d {
                Some(d) => Decomposition::from_invariant_factors(smith::diagonal_entries(d)),
                None => Decomposition::trivial(),
            })
            .collect();
        if let Some(b0) = images.first_mut() {
            *b0 = Decomposition::trivial();
        }
        images.push(Decomposition::trivial());

        let cycles: Vec<usize> = (0..top)
            .map(|q| {
                if q == 0 {
                    chain_ranks[0]
                } else {
                    chain_ranks[q].saturating_sub(images[q].total())
                }
            })
            .collect();

        let groups: Vec<Decomposition> = (0..top)
            .map(|q| {
                let next = &images[q + 1];
                let mut h = Decomposition::with_free(cycles[q].saturating_sub(next.total()));
                for (e, m) in next.torsion() {
                    h.add_torsion(e, m);
                }
                h
            })
            .collect();
        let betti = groups.iter().map(Decomposition::free_rank).collect();

        Self {
            chain: chain_ranks.to_vec(),
            cycles,
            images,
            groups,
            betti,
        }
    }

    pub fn max_dim(&self) -> usize {
        self.chain.len().saturating_sub(1)
    }

    pub fn chain_rank(&self, q: usize) -> usize {
        self.chain.get(q).copied().unwrap_or(0)
    }

    pub fn cycle_rank(&self, q: usize) -> usize {
        self.cycles.get(q).copied().unwrap_or(0)
    }

    pub fn boundary_image(&self, q: usize) -> &Decomposition {
        self.images.get(q).unwrap_or(&TRIVIAL)
    }

    pub fn homology(&self, q: usize) -> &Decomposition {
        self.groups.get(q).unwrap_or(&TRIVIAL)
    }

    pub fn betti(&self, q: usize) -> usize {
        self.betti.get(q).copied().unwrap_or(0)
    }

    pub fn betti_numbers(&self) -> &[usize] {
        &self.betti
    }

    pub fn chain_ranks(&self) -> &[usize] {
        &self.chain
    }

    pub fn cycle_ranks(&self) -> &[usize] {
        &self.cycles
    }

    /// Σ (−1)^q c_q.
    pub fn euler_characteristic(&self) -> i64 {
        alternating_sum(&self.chain)
    }

    /// Σ (−1)^q β_q. Equals `euler_characteristic` for every complex.
    pub fn betti_euler_characteristic(&self) -> i64 {
        alternating_sum(&self.betti)
    }
}

fn alternating_sum(xs: &[usize]) -> i64 {
    xs.iter()
        .enumerate()
        .map(|(q, &x)| if q % 2 == 0 { x as i64 } else { -(x as i64) })
        .sum()
}

#[cfg(test)]
mod tests;
