use rand::{Rng, SeedableRng, rngs::StdRng};

/// Lengths worth covering in every transform test, including the empty sequence
pub const LENGTHS: [usize; 6] = [0, 1, 2, 7, 64, 1000];

pub fn random_ints(len: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1000..=1000)).collect()
}

pub fn random_floats(len: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(-1000.0..1000.0)).collect()
}

pub fn random_ascii(len: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len).map(|_| char::from(rng.gen_range(b' '..=b'~'))).collect()
}

/// Elements of a large, cloneable type for comparing copying and mutating transforms
pub fn large_records(len: usize) -> Vec<Vec<u64>> {
    (0..len as u64).map(|i| vec![i; 256]).collect()
}
