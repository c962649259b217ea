//! Text and JSON reports for a computed complex.
//!
//! Text notation: `C[q] = Z³`, `d[q]: Z³ -> Z²` followed by the diagonal form,
//! `Z[q]: …`, `B[q]: Z² ⊕ (2Z)`, `H[q]: Z ⊕ Z/2`, `b[q]: n`.

use serde::Serialize;
use simplicial::complex::{BoundaryMap, Complex};
use simplicial::homology::Decomposition;
use simplicial::IntMatrix;

const RING: &str = "Z";

/// Summand `Z` (order 0) or a cyclic summand of the given order.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Summand {
    pub order: u64,
    pub multiplicity: usize,
}

#[derive(Debug, Serialize)]
pub struct MapReport {
    pub rows: usize,
    pub cols: usize,
    pub diagonal: Vec<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct DimReport {
    pub q: usize,
    pub chain_rank: usize,
    pub boundary: MapReport,
    pub cycle_rank: usize,
    pub boundary_image: Vec<Summand>,
    pub homology: Vec<Summand>,
    pub betti: usize,
}

#[derive(Debug, Serialize)]
pub struct ComplexReport {
    pub max_dim: usize,
    pub num_simplices: usize,
    pub euler_characteristic: i64,
    pub dims: Vec<DimReport>,
}

impl ComplexReport {
    pub fn new(c: &Complex, dim: Option<usize>) -> Self {
        let dims = c
            .dims(dim)
            .into_iter()
            .map(|q| {
                let d = c.diagonal_form(q);
                DimReport {
                    q,
                    chain_rank: c.chain_rank(q),
                    boundary: MapReport {
                        rows: d.rows(),
                        cols: d.cols(),
                        diagonal: rows_of(&d.to_dense()),
                    },
                    cycle_rank: c.cycle_rank(q),
                    boundary_image: summands(c.boundary_image(q)),
                    homology: summands(c.homology(q)),
                    betti: c.betti(q),
                }
            })
            .collect();
        Self {
            max_dim: c.max_dim(),
            num_simplices: c.num_simplices(),
            euler_characteristic: c.euler_characteristic(),
            dims,
        }
    }
}

fn summands(d: &Decomposition) -> Vec<Summand> {
    d.iter()
        .filter(|&(_, m)| m > 0)
        .map(|(order, multiplicity)| Summand {
            order,
            multiplicity,
        })
        .collect()
}

pub fn rows_of(m: &IntMatrix) -> Vec<Vec<i64>> {
    m.row_iter().map(|r| r.iter().copied().collect()).collect()
}

/// `rank` copies of the cyclic group of `order` (0 = the ring itself).
/// `quotient` selects `Z/e` over `eZ` for torsion summands.
pub fn ring(rank: usize, order: u64, quotient: bool) -> String {
    let base = match (order, quotient) {
        (0, _) => RING.to_string(),
        (e, true) => format!("{RING}/{e}"),
        (e, false) => format!("{e}{RING}"),
    };
    match rank {
        0 => "0".to_string(),
        1 => base,
        r if order == 0 => format!("{base}{}", superscript(r)),
        r => format!("({base}){}", superscript(r)),
    }
}

fn superscript(n: usize) -> String {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
    n.to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10).map(|d| DIGITS[d as usize]))
        .collect()
}

fn group(d: &Decomposition, quotient: bool) -> String {
    let terms: Vec<String> = d
        .iter()
        .filter(|&(_, m)| m > 0)
        .map(|(e, m)| ring(m, e, quotient))
        .collect();
    if terms.is_empty() {
        "0".to_string()
    } else {
        terms.join(" ⊕ ")
    }
}

fn matrix_lines(map: &BoundaryMap<'_>) -> Vec<String> {
    match map {
        BoundaryMap::Zero { .. } => vec!["0".to_string()],
        BoundaryMap::Dense(m) if m.nrows() == 0 || m.ncols() == 0 => vec!["[]".to_string()],
        BoundaryMap::Dense(m) => {
            let width = m.iter().map(|x| x.to_string().len()).max().unwrap_or(1);
            m.row_iter()
                .map(|r| {
                    let cells: Vec<String> =
                        r.iter().map(|x| format!("{x:>width$}")).collect();
                    format!("[{}]", cells.join(" "))
                })
                .collect()
        }
    }
}

/// Sectioned text report over the selected dimensions.
pub fn text_report(c: &Complex, dim: Option<usize>) -> String {
    let dims = c.dims(dim);
    let chain = |q: usize| ring(c.chain_rank(q), 0, false);
    let mut lines = Vec::new();
    for &q in &dims {
        lines.push(format!("C[{q}] = {}", chain(q)));
    }
    for &q in &dims {
        let below = q.checked_sub(1).map_or_else(|| "0".to_string(), chain);
        lines.push(format!("d[{q}]: {} -> {below}", chain(q)));
        lines.extend(matrix_lines(&c.diagonal_form(q)));
    }
    for &q in &dims {
        lines.push(format!("Z[{q}]: {}", ring(c.cycle_rank(q), 0, false)));
    }
    for &q in &dims {
        lines.push(format!("B[{q}]: {}", group(c.boundary_image(q), false)));
    }
    for &q in &dims {
        lines.push(format!("H[{q}]: {}", group(c.homology(q), true)));
    }
    for &q in &dims {
        lines.push(format!("b[{q}]: {}", c.betti(q)));
    }
    lines.join("\n")
}
