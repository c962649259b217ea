use super::*;
use crate::complex::{Complex, Vertex};
use crate::sample::sphere;
use nalgebra::dmatrix;

fn closure(tops: &[&[Vertex]]) -> Complex {
    Complex::closure(tops.iter().map(|t| t.to_vec())).unwrap()
}

fn euler_identity(c: &Complex) {
    assert_eq!(c.euler_characteristic(), c.betti_euler_characteristic());
}

#[test]
fn decomposition_counts_units_as_free() {
    let d = Decomposition::from_invariant_factors([1, -1, 2, 0, 6, 2]);
    assert_eq!(d.free_rank(), 2);
    assert_eq!(d.multiplicity(FREE), 2);
    assert_eq!(d.multiplicity(2), 2);
    assert_eq!(d.multiplicity(6), 1);
    assert_eq!(d.multiplicity(3), 0);
    assert_eq!(d.total(), 5);
    assert!(d.has_torsion());
    assert_eq!(d.iter().collect::<Vec<_>>(), vec![(0, 2), (2, 2), (6, 1)]);
    assert!(Decomposition::trivial().is_trivial());
}

#[test]
fn assemble_treats_missing_diagonals_as_zero_maps() {
    let d1 = dmatrix![2i64];
    let short = HomologyTables::assemble(&[1, 1, 1], &[None, Some(&d1)]);
    assert_eq!(short.cycle_ranks(), &[1, 0, 1]);
    assert_eq!(short.betti_numbers(), &[0, 0, 1]);
    assert_eq!(short.homology(0).multiplicity(2), 1);

    let d9 = dmatrix![1i64];
    let long = HomologyTables::assemble(&[1], &[None, Some(&d9)]);
    assert_eq!(long.max_dim(), 0);
    assert_eq!(long.betti_numbers(), &[1]);
}

#[test]
fn assemble_from_synthetic_diagonals() {
    // c = (1, 1, 1); ∂_1 = 0, ∂_2 = (2)
    let d1 = dmatrix![0i64];
    let d2 = dmatrix![2i64];
    let t = HomologyTables::assemble(&[1, 1, 1], &[None, Some(&d1), Some(&d2)]);
    assert_eq!(t.cycle_ranks(), &[1, 1, 0]);
    assert_eq!(t.boundary_image(2).multiplicity(2), 1);
    assert_eq!(t.homology(1).free_rank(), 0);
    assert_eq!(t.homology(1).multiplicity(2), 1);
    assert_eq!(t.betti_numbers(), &[1, 0, 0]);
    assert!(t.boundary_image(3).is_trivial());
    assert!(t.boundary_image(0).is_trivial());
}

#[test]
fn filled_triangle_is_contractible() {
    let c = Complex::new(vec![
        vec![0],
        vec![1],
        vec![2],
        vec![0, 1],
        vec![0, 2],
        vec![1, 2],
        vec![0, 1, 2],
    ])
    .unwrap();
    assert_eq!(c.betti_numbers(), &[1, 0, 0]);
    assert_eq!(c.cycle_ranks(), &[3, 1, 0]);
    assert_eq!(c.boundary_image(1).free_rank(), 2);
    assert_eq!(c.boundary_image(2).free_rank(), 1);
    euler_identity(&c);
}

#[test]
fn hollow_triangle_is_a_circle() {
    let c = Complex::new(vec![
        vec![0],
        vec![1],
        vec![2],
        vec![0, 1],
        vec![0, 2],
        vec![1, 2],
    ])
    .unwrap();
    assert_eq!(c.betti_numbers(), &[1, 1]);
    assert_eq!(c.cycle_rank(1), 1);
    assert!(!c.homology(1).has_torsion());
    euler_identity(&c);
}

#[test]
fn tetrahedron_boundary_is_a_two_sphere() {
    let c = closure(&[&[0, 1, 2], &[0, 1, 3], &[0, 2, 3], &[1, 2, 3]]);
    assert_eq!(c.chain_ranks(), &[4, 6, 4]);
    assert_eq!(c.betti_numbers(), &[1, 0, 1]);
    assert_eq!(c.euler_characteristic(), 2);
    euler_identity(&c);
}

#[test]
fn two_points() {
    let c = Complex::new(vec![vec![0], vec![1]]).unwrap();
    assert_eq!(c.max_dim(), 0);
    assert_eq!(c.betti(0), 2);
    assert_eq!(c.betti(1), 0);
    assert_eq!(c.betti(2), 0);
    euler_identity(&c);
}

#[test]
fn projective_plane_has_two_torsion() {
    let c = closure(&[
        &[1, 2, 3],
        &[1, 3, 4],
        &[1, 4, 5],
        &[1, 5, 6],
        &[1, 2, 6],
        &[2, 3, 5],
        &[2, 4, 5],
        &[2, 4, 6],
        &[3, 4, 6],
        &[3, 5, 6],
    ]);
    assert_eq!(c.chain_ranks(), &[6, 15, 10]);
    assert_eq!(c.betti_numbers(), &[1, 0, 0]);
    let h1 = c.homology(1);
    assert_eq!(h1.free_rank(), 0);
    assert_eq!(h1.torsion().collect::<Vec<_>>(), vec![(2, 1)]);
    assert_eq!(c.boundary_image(2).free_rank(), 9);
    assert_eq!(c.boundary_image(2).multiplicity(2), 1);
    assert!(c.homology(2).is_trivial());
    euler_identity(&c);
}

#[test]
fn seven_vertex_torus() {
    let tops: Vec<Vec<Vertex>> = (0..7u32)
        .flat_map(|i| [vec![i, (i + 1) % 7, (i + 3) % 7], vec![i, (i + 2) % 7, (i + 3) % 7]])
        .collect();
    let c = Complex::closure(tops).unwrap();
    assert_eq!(c.chain_ranks(), &[7, 21, 14]);
    assert_eq!(c.betti_numbers(), &[1, 2, 1]);
    assert!((0..=2).all(|q| !c.homology(q).has_torsion()));
    euler_identity(&c);
}

#[test]
fn spheres_have_two_nonzero_betti_numbers() {
    for n in 1..=4 {
        let c = Complex::from_simplices(sphere(n)).unwrap();
        let mut expected = vec![0; n + 1];
        expected[0] += 1;
        expected[n] += 1;
        assert_eq!(c.betti_numbers(), expected.as_slice(), "S^{n}");
        euler_identity(&c);
    }
}

#[test]
fn diagonal_forms_are_divisibility_chains() {
    let c = closure(&[&[1, 2, 3], &[1, 3, 4], &[1, 4, 5], &[1, 5, 6], &[1, 2, 6]]);
    for q in c.dims(None) {
        let d = c.diagonal_form(q).to_dense();
        assert!(crate::smith::is_diagonal(&d));
        assert!(crate::smith::has_divisibility_chain(&d));
    }
}
