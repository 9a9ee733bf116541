//! Gaussian noise injection.
//!
//! Each row receives an independent draw; there is no serial correlation
//! across time steps, so generated series are trend-plus-i.i.d.-noise
//! approximations rather than autoregressive simulations.

use rand::Rng;

/// Sample a Gaussian via the Box-Muller transform.
///
/// A `std_dev` of exactly `0.0` returns `mean` while still consuming two
/// uniform draws, so disabling noise does not shift the RNG stream.
pub fn gaussian(rng: &mut impl Rng, mean: f64, std_dev: f64) -> f64 {
    let u1: f64 = rng.gen::<f64>().max(1e-10); // Avoid log(0)
    let u2: f64 = rng.gen::<f64>();
    let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
    mean + z * std_dev
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_std_dev_returns_mean_exactly() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(gaussian(&mut rng, 1.0, 0.0), 1.0);
        }
    }

    #[test]
    fn sample_mean_converges() {
        let mut rng = StdRng::seed_from_u64(42);
        let n = 20_000;
        let sum: f64 = (0..n).map(|_| gaussian(&mut rng, 5.0, 2.0)).sum();
        let mean = sum / n as f64;
        assert!((mean - 5.0).abs() < 0.1, "sample mean {mean}");
    }

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = StdRng::seed_from_u64(123);
        let mut b = StdRng::seed_from_u64(123);
        for _ in 0..16 {
            assert_eq!(gaussian(&mut a, 0.0, 1.0), gaussian(&mut b, 0.0, 1.0));
        }
    }
}
