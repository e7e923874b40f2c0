//! Witness graph of a noisy circle.
//!
//! Samples points on a unit circle with Gaussian noise, selects max-min
//! landmarks, and prints the witness 1-skeleton at a few cutoffs. The
//! circle's single loop should survive as a sparse cycle through the
//! landmarks once the cutoff admits enough edges.

use lazy_witness::{
    EuclideanSpace, LazyWitnessBuilder, LazyWitnessParams, MaxMinSelector,
};
use ndarray::Array2;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

fn main() {
    let n_points = 400;
    let n_landmarks = 20;
    let noise_std = 0.05;
    let seed = 42;

    println!("lazy-witness demo: noisy circle");
    println!("  N = {} points, n = {} landmarks, noise = {}", n_points, n_landmarks, noise_std);
    println!();

    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, noise_std).expect("valid noise distribution");

    let mut values = Vec::with_capacity(n_points * 2);
    for _ in 0..n_points {
        let theta: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
        values.push(theta.cos() + noise.sample(&mut rng));
        values.push(theta.sin() + noise.sample(&mut rng));
    }
    let space = EuclideanSpace::new(
        Array2::from_shape_vec((n_points, 2), values).expect("shape matches sample count"),
    );

    let selection = MaxMinSelector::new(&space)
        .select(n_landmarks, &mut rng)
        .expect("valid landmark count");

    println!("Landmark covering radii (max-min value at each pick):");
    for (i, radius) in selection.radii.iter().enumerate().skip(1) {
        println!("  pick {:2}: {:.4}", i, radius);
    }
    println!();

    for max_distance in [0.05, 0.1, 0.2, f64::INFINITY] {
        let params = LazyWitnessParams {
            nu: 2,
            max_distance,
            ..LazyWitnessParams::default()
        };
        let graph = LazyWitnessBuilder::new(&space, &selection.landmarks, params)
            .expect("valid construction parameters")
            .build()
            .expect("metric is finite and nonnegative");

        let max_weight = graph
            .edges()
            .map(|(_, _, w)| w)
            .fold(0.0_f64, f64::max);

        println!(
            "max_distance = {:>8.3}: {:3} edges on {} vertices (max weight {:.4})",
            max_distance,
            graph.edge_count(),
            graph.vertex_count(),
            max_weight
        );
    }
}
