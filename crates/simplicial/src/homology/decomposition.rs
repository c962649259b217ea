//! Finitely generated abelian groups as `order → multiplicity` tables.
//!
//! Order 0 is the free part (a copy of Z); an order `e > 1` is a cyclic summand
//! Z/e (in a homology group) or eZ (in a boundary image).

use std::collections::BTreeMap;

/// Order used for free summands.
pub const FREE: u64 = 0;

/// `free` copies of Z plus `torsion[e]` summands of order `e`.
///
/// Invariants:
/// - every key of `torsion` is > 1 and every stored multiplicity is > 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Decomposition {
    free: usize,
    torsion: BTreeMap<u64, usize>,
}

/// The trivial group.
pub(crate) static TRIVIAL: Decomposition = Decomposition::trivial();

impl Decomposition {
    pub const fn trivial() -> Self {
        Self {
            free: 0,
            torsion: BTreeMap::new(),
        }
    }

    /// Image decomposition from the diagonal entries of a diagonal form:
    /// `|a| = 1` counts as free, any other nonzero `a` as order `|a|`.
    pub fn from_invariant_factors<I: IntoIterator<Item = i64>>(factors: I) -> Self {
        let mut d = Self::trivial();
        for a in factors {
            match a.unsigned_abs() {
                0 => {}
                1 => d.free += 1,
                e => *d.torsion.entry(e).or_insert(0) += 1,
            }
        }
        d
    }

    pub(crate) fn with_free(free: usize) -> Self {
        Self {
            free,
            torsion: BTreeMap::new(),
        }
    }

    pub(crate) fn add_torsion(&mut self, order: u64, count: usize) {
        if order > 1 && count > 0 {
            *self.torsion.entry(order).or_insert(0) += count;
        }
    }

    #[inline]
    pub fn free_rank(&self) -> usize {
        self.free
    }

    /// Multiplicity of `order` (`FREE` for the free part).
    pub fn multiplicity(&self, order: u64) -> usize {
        if order == FREE {
            self.free
        } else {
            self.torsion.get(&order).copied().unwrap_or(0)
        }
    }

    /// Torsion summands as `(order, multiplicity)`, ascending by order.
    pub fn torsion(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        self.torsion.iter().map(|(&e, &m)| (e, m))
    }

    /// All entries, free part first: `(FREE, free_rank)`, then torsion.
    pub fn iter(&self) -> impl Iterator<Item = (u64, usize)> + '_ {
        std::iter::once((FREE, self.free)).chain(self.torsion())
    }

    /// Total number of cyclic summands (free and torsion).
    pub fn total(&self) -> usize {
        self.free + self.torsion.values().sum::<usize>()
    }

    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.total() == 0
    }

    #[inline]
    pub fn has_torsion(&self) -> bool {
        !self.torsion.is_empty()
    }
}
