use rand::Rng;

/// Xavier (Glorot) initialization: samples uniformly from [-1, 1] and scales
/// by `sqrt(1 / n_inputs)`.
///
/// `n_inputs` is the fan-in of the node the weight belongs to.  The generator
/// is passed in so a seeded `StdRng` gives reproducible networks.
pub fn xavier_init<R: Rng + ?Sized>(rng: &mut R, n_inputs: usize) -> f64 {
    let scale = (1.0 / n_inputs as f64).sqrt();
    rng.gen_range(-1.0_f64..=1.0) * scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn samples_stay_within_scaled_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for n_inputs in [1, 4, 16, 100] {
            let bound = (1.0 / n_inputs as f64).sqrt();
            for _ in 0..500 {
                let w = xavier_init(&mut rng, n_inputs);
                assert!(w.abs() <= bound, "{w} outside ±{bound}");
            }
        }
    }

    #[test]
    fn same_seed_same_weights() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let wa: Vec<f64> = (0..8).map(|_| xavier_init(&mut a, 4)).collect();
        let wb: Vec<f64> = (0..8).map(|_| xavier_init(&mut b, 4)).collect();
        assert_eq!(wa, wb);
    }
}
