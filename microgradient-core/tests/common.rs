use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Installs `env_logger` once so `RUST_LOG=trace cargo test` shows engine logs.
#[allow(dead_code)]
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generator with a fixed seed so randomized tests are reproducible.
#[allow(dead_code)]
pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(0x5eed)
}

/// Deterministic pairs of operand values in `[-5, 5)`, never exactly zero.
#[allow(dead_code)]
pub fn sample_pairs(count: usize) -> Vec<(f64, f64)> {
    let mut rng = seeded_rng();
    (0..count)
        .map(|_| {
            let a: f64 = rng.gen_range(-5.0..5.0);
            let b: f64 = rng.gen_range(-5.0..5.0);
            (nonzero(a), nonzero(b))
        })
        .collect()
}

fn nonzero(x: f64) -> f64 {
    if x == 0.0 {
        0.5
    } else {
        x
    }
}
