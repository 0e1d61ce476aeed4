//! Hiding strip values from the player.

use tetonor_core::{Difficulty, NumberPair, Slot};
use tetonor_random::{RandomSource, seeded_random_int, shuffle_in_place};

/// How hidden slots are spread over the strip.
///
/// Every layout hides `min(count, 2 * pairs)` slots in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum BlankLayout {
    /// Hide at most one slot per pair until every pair has one hidden.
    OnePerPair,
    /// Hide uniformly random slots; pairs may lose zero, one or both values.
    Scattered,
    /// Hide both slots of a pair before moving to the next pair.
    WholePairs,
}

impl From<Difficulty> for BlankLayout {
    fn from(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::OnePerPair,
            Difficulty::Moderate => Self::Scattered,
            Difficulty::Difficult => Self::WholePairs,
        }
    }
}

/// Hides `blank_count` uniformly chosen value slots of `pairs`.
///
/// All `2 * pairs.len()` slots are shuffled and the first
/// `min(blank_count, 2 * pairs.len())` are hidden, moving each true value
/// into the pair's shadow field.
///
/// # Examples
///
/// ```
/// use tetonor_core::{NumberPair, PairId};
/// use tetonor_generator::apply_blanks_to_strip;
/// use tetonor_random::Mulberry32;
///
/// let pairs = vec![
///     NumberPair::new(PairId::new(1), 3, 7),
///     NumberPair::new(PairId::new(2), 2, 26),
/// ];
/// let strip = apply_blanks_to_strip(pairs, 3, &mut Mulberry32::new(9));
/// assert_eq!(strip.iter().map(NumberPair::hidden_count).sum::<usize>(), 3);
/// assert_eq!(strip[0].true_values(), Some((3, 7)));
/// ```
pub fn apply_blanks_to_strip<R>(
    pairs: Vec<NumberPair>,
    blank_count: usize,
    rng: &mut R,
) -> Vec<NumberPair>
where
    R: RandomSource + ?Sized,
{
    apply_blanks(pairs, blank_count, BlankLayout::Scattered, rng)
}

/// Hides `blank_count` value slots of `pairs` following `layout`.
pub fn apply_blanks<R>(
    mut pairs: Vec<NumberPair>,
    blank_count: usize,
    layout: BlankLayout,
    rng: &mut R,
) -> Vec<NumberPair>
where
    R: RandomSource + ?Sized,
{
    let order = match layout {
        BlankLayout::Scattered => scattered_order(pairs.len(), rng),
        BlankLayout::OnePerPair => one_per_pair_order(pairs.len(), rng),
        BlankLayout::WholePairs => whole_pairs_order(pairs.len(), rng),
    };
    for (index, slot) in order.into_iter().take(blank_count) {
        pairs[index].hide(slot);
    }
    pairs
}

fn all_slots(pair_count: usize) -> Vec<(usize, Slot)> {
    (0..pair_count)
        .flat_map(|index| Slot::BOTH.map(|slot| (index, slot)))
        .collect()
}

fn random_slot<R>(rng: &mut R) -> Slot
where
    R: RandomSource + ?Sized,
{
    if seeded_random_int(0, 1, rng) == 0 {
        Slot::First
    } else {
        Slot::Second
    }
}

fn shuffled_indices<R>(pair_count: usize, rng: &mut R) -> Vec<usize>
where
    R: RandomSource + ?Sized,
{
    let mut indices = (0..pair_count).collect::<Vec<_>>();
    shuffle_in_place(&mut indices, rng);
    indices
}

fn scattered_order<R>(pair_count: usize, rng: &mut R) -> Vec<(usize, Slot)>
where
    R: RandomSource + ?Sized,
{
    let mut slots = all_slots(pair_count);
    shuffle_in_place(&mut slots, rng);
    slots
}

fn one_per_pair_order<R>(pair_count: usize, rng: &mut R) -> Vec<(usize, Slot)>
where
    R: RandomSource + ?Sized,
{
    let first_pass = shuffled_indices(pair_count, rng)
        .into_iter()
        .map(|index| (index, random_slot(rng)))
        .collect::<Vec<_>>();
    let second_pass = first_pass
        .iter()
        .map(|&(index, slot)| (index, slot.other()))
        .collect::<Vec<_>>();
    first_pass.into_iter().chain(second_pass).collect()
}

fn whole_pairs_order<R>(pair_count: usize, rng: &mut R) -> Vec<(usize, Slot)>
where
    R: RandomSource + ?Sized,
{
    shuffled_indices(pair_count, rng)
        .into_iter()
        .flat_map(|index| {
            let slot = random_slot(rng);
            [(index, slot), (index, slot.other())]
        })
        .collect()
}
