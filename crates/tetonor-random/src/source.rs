use rand::RngExt as _;
use rand_pcg::Pcg64;

/// A source of uniformly distributed floats in `[0, 1)`.
///
/// Implementors must be deterministic for a given internal state.
pub trait RandomSource {
    /// Returns the next float in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R> RandomSource for &mut R
where
    R: RandomSource + ?Sized,
{
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

impl RandomSource for Pcg64 {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;

    #[test]
    fn test_pcg_is_reproducible() {
        let mut a = Pcg64::seed_from_u64(7);
        let mut b = Pcg64::seed_from_u64(7);
        for _ in 0..100 {
            let x = a.next_f64();
            assert!((0.0..1.0).contains(&x));
            assert_eq!(x.to_bits(), b.next_f64().to_bits());
        }
    }
}
