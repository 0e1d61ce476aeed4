use crate::RandomSource;

/// Mulberry32 pseudo-random generator.
///
/// A 32-bit state generator with no shared global state: two instances created
/// from the same seed always produce the same sequence.
///
/// # Examples
///
/// ```
/// use tetonor_random::{Mulberry32, RandomSource as _};
///
/// let mut a = Mulberry32::new(42);
/// let mut b = Mulberry32::new(42);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Creates a generator from a seed.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns the next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl RandomSource for Mulberry32 {
    fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_f64(), 0.266_429_208_684_712_65);
        assert_eq!(rng.next_f64(), 0.000_329_745_700_582_861_9);
        assert_eq!(rng.next_f64(), 0.223_272_027_447_819_7);

        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_f64(), 0.601_103_751_920_163_6);
        assert_eq!(rng.next_f64(), 0.448_290_558_997_541_67);
        assert_eq!(rng.next_f64(), 0.852_465_793_490_409_9);
    }

    #[test]
    fn test_extreme_seeds() {
        assert_eq!(Mulberry32::new(0xFFFF_FFFF).next_f64(), 0.896_422_614_110_633_7);
        assert_eq!(Mulberry32::new(0xDEAD_BEEF).next_f64(), 0.941_369_614_098_221_1);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut a = Mulberry32::new(7);
        let mut b = Mulberry32::new(7);
        let first = a.next_u32();
        let _ = a.next_u32();
        assert_eq!(b.next_u32(), first);
    }

    #[test]
    fn test_output_range() {
        let mut rng = Mulberry32::new(99);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }
}
