//! Betti numbers and torsion for a few standard triangulations.
//!
//! Run: `cargo run -p simplicial --example spheres`

use simplicial::complex::Complex;
use simplicial::sample::sphere;

fn main() {
    for n in 0..=4 {
        let c = Complex::from_simplices(sphere(n)).expect("sphere is closed under faces");
        println!(
            "S^{n}: chain ranks {:?}, betti {:?}, euler {}",
            c.chain_ranks(),
            c.betti_numbers(),
            c.euler_characteristic()
        );
    }

    // Minimal 6-vertex real projective plane: H_1 = Z/2.
    let rp2: Vec<Vec<u32>> = vec![
        vec![1, 2, 3],
        vec![1, 3, 4],
        vec![1, 4, 5],
        vec![1, 5, 6],
        vec![1, 2, 6],
        vec![2, 3, 5],
        vec![2, 4, 5],
        vec![2, 4, 6],
        vec![3, 4, 6],
        vec![3, 5, 6],
    ];
    let c = Complex::closure(rp2).expect("valid simplices");
    for q in c.dims(None) {
        let torsion: Vec<(u64, usize)> = c.homology(q).torsion().collect();
        println!("RP^2 H_{q}: free {}, torsion {:?}", c.betti(q), torsion);
    }
}
