//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const SEED: u64 = 42;

/// Fixed vectors reused across tests.
pub fn module_vectors() -> Vec<Vec<f64>> {
    vec![vec![1.0, 0.0], vec![0.0, 1.0], vec![3.0, 4.0]]
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// Vector of `len` values drawn from `[0, scale)`.
pub fn random_vector(rng: &mut impl Rng, len: usize, scale: f64) -> Vec<f64> {
    (0..len).map(|_| rng.gen::<f64>() * scale).collect()
}

/// `rows` vectors of `cols` values in `(-scale, scale)`, none of them zero.
pub fn random_batch(rng: &mut impl Rng, rows: usize, cols: usize, scale: f64) -> Vec<Vec<f64>> {
    (0..rows)
        .map(|_| {
            let mut row: Vec<f64> = (0..cols).map(|_| rng.gen_range(-scale..scale)).collect();
            if row.iter().all(|&x| x == 0.0) {
                row[0] = 1.0;
            }
            row
        })
        .collect()
}

pub fn length(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

pub fn assert_batches_close(left: &[Vec<f64>], right: &[Vec<f64>]) {
    assert_eq!(left.len(), right.len(), "row count differs");
    for (l, r) in left.iter().zip(right) {
        assert_eq!(l.len(), r.len(), "row length differs");
        for (a, b) in l.iter().zip(r) {
            assert_relative_eq!(*a, *b, epsilon = 1e-12, max_relative = 1e-9);
        }
    }
}
