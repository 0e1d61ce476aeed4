use crate::RandomSource;

/// Hashes a string into a non-negative seed.
///
/// Rolling `hash * 31 + code` over UTF-16 code units with 32-bit wrap-around,
/// then the absolute value of the signed result.
///
/// # Examples
///
/// ```
/// use tetonor_random::hash_string;
///
/// assert_eq!(hash_string(""), 0);
/// assert_eq!(hash_string("ab"), 97 * 31 + 98);
/// ```
#[must_use]
pub fn hash_string(s: &str) -> u32 {
    let hash = s.encode_utf16().fold(0_i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    hash.unsigned_abs()
}

/// Draws an integer from the inclusive range `min..=max`.
///
/// # Panics
///
/// Panics if `min > max`.
#[must_use]
pub fn seeded_random_int<R>(min: u32, max: u32, rng: &mut R) -> u32
where
    R: RandomSource + ?Sized,
{
    assert!(min <= max, "empty range {min}..={max}");
    let span = f64::from(max - min) + 1.0;
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let offset = (rng.next_f64() * span).floor() as u32;
    min + offset.min(max - min)
}

/// Shuffles a slice in place (Fisher–Yates, from the back).
pub fn shuffle_in_place<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    for i in (1..items.len()).rev() {
        #[expect(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            clippy::cast_precision_loss
        )]
        let j = ((rng.next_f64() * (i + 1) as f64).floor() as usize).min(i);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items`, leaving the input untouched.
///
/// # Examples
///
/// ```
/// use tetonor_random::{Mulberry32, seeded_shuffle};
///
/// let items = [1, 2, 3, 4, 5];
/// let a = seeded_shuffle(&items, &mut Mulberry32::new(1));
/// let b = seeded_shuffle(&items, &mut Mulberry32::new(1));
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn seeded_shuffle<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut result = items.to_vec();
    shuffle_in_place(&mut result, rng);
    result
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::Mulberry32;

    /// Replays a fixed list of floats.
    struct Script(Vec<f64>);

    impl RandomSource for Script {
        fn next_f64(&mut self) -> f64 {
            self.0.remove(0)
        }
    }

    #[test]
    fn test_hash_string_wraps_and_is_non_negative() {
        assert_eq!(hash_string("a"), 97);
        let long = "tetonor-daily-2025-01-01".repeat(8);
        assert_eq!(hash_string(&long), hash_string(&long));
        assert_ne!(
            hash_string("tetonor-daily-2025-01-01"),
            hash_string("tetonor-daily-2025-01-02")
        );
    }

    #[test]
    fn test_random_int_maps_unit_interval() {
        let mut script = Script(vec![0.0, 0.999_999, 0.5]);
        assert_eq!(seeded_random_int(1, 9, &mut script), 1);
        assert_eq!(seeded_random_int(1, 9, &mut script), 9);
        assert_eq!(seeded_random_int(7, 8, &mut script), 8);
    }

    #[test]
    fn test_shuffle_with_zero_draws_rotates_first() {
        // j == 0 at every step: [a, b, c] -> swap(2, 0) -> swap(1, 0)
        let mut script = Script(vec![0.0, 0.0]);
        assert_eq!(seeded_shuffle(&['a', 'b', 'c'], &mut script), vec!['b', 'c', 'a']);
    }

    #[test]
    fn test_shuffle_is_order_sensitive() {
        let a = seeded_shuffle(&[1, 2, 3, 4, 5, 6], &mut Mulberry32::new(3));
        let b = seeded_shuffle(&[6, 5, 4, 3, 2, 1], &mut Mulberry32::new(3));
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn test_random_int_in_range(seed in any::<u32>(), min in 0_u32..100, width in 0_u32..100) {
            let mut rng = Mulberry32::new(seed);
            let max = min + width;
            for _ in 0..16 {
                let n = seeded_random_int(min, max, &mut rng);
                prop_assert!((min..=max).contains(&n));
            }
        }

        #[test]
        fn test_shuffle_is_permutation(seed in any::<u32>(), items in proptest::collection::vec(0_u8..10, 0..32)) {
            let mut shuffled = seeded_shuffle(&items, &mut Mulberry32::new(seed));
            let mut sorted = items.clone();
            shuffled.sort_unstable();
            sorted.sort_unstable();
            prop_assert_eq!(shuffled, sorted);
        }
    }
}
