//! Subsampling, shuffling, and train/validation splitting.
//!
//! The RNG is injected rather than ambient so the whole run shares one
//! seeded generator and tests can assert exact split membership.

use rand::seq::SliceRandom;
use rand::Rng;

/// Train/validation fractions, each in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SplitFractions {
    pub train: f64,
    pub validation: f64,
}

/// A partition of entries into the two output splits.
#[derive(Clone, Debug, PartialEq)]
pub struct SplitSets<T> {
    pub train: Vec<T>,
    pub validation: Vec<T>,
}

/// Keep every `use_every`-th entry, preserving the original order.
pub fn subsample<T>(entries: Vec<T>, use_every: usize) -> Vec<T> {
    if use_every <= 1 {
        return entries;
    }
    entries.into_iter().step_by(use_every).collect()
}

/// Number of train and validation entries for `total` candidates.
///
/// `train = ceil(f_train * total)`; validation gets `ceil(f_valid * total)`
/// clamped to the remainder, so the two counts never overlap and never
/// exceed `total`.
pub fn split_counts(total: usize, fractions: SplitFractions) -> (usize, usize) {
    let train = ((fractions.train * total as f64).ceil() as usize).min(total);
    let validation = ((fractions.validation * total as f64).ceil() as usize).min(total - train);
    (train, validation)
}

/// Shuffle entries with the supplied RNG and slice off the two splits.
///
/// Entries beyond `train + validation` are discarded.
pub fn shuffle_split<T, R: Rng + ?Sized>(
    mut entries: Vec<T>,
    fractions: SplitFractions,
    rng: &mut R,
) -> SplitSets<T> {
    entries.shuffle(rng);

    let (train_count, validation_count) = split_counts(entries.len(), fractions);
    let mut rest = entries.split_off(train_count);
    rest.truncate(validation_count);

    SplitSets {
        train: entries,
        validation: rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const FRACTIONS: SplitFractions = SplitFractions {
        train: 0.3,
        validation: 0.1,
    };

    #[test]
    fn subsample_keeps_every_nth_entry_in_order() {
        let entries: Vec<u32> = (0..7).collect();
        assert_eq!(subsample(entries.clone(), 2), vec![0, 2, 4, 6]);
        assert_eq!(subsample(entries.clone(), 1), entries);
    }

    #[test]
    fn subsample_stride_beyond_length_keeps_one_entry() {
        let entries: Vec<u32> = (0..5).collect();
        assert_eq!(subsample(entries, 119), vec![0]);
    }

    #[test]
    fn split_counts_use_ceiling_and_never_overlap() {
        assert_eq!(split_counts(10, FRACTIONS), (3, 1));
        assert_eq!(split_counts(1, FRACTIONS), (1, 0));
        assert_eq!(split_counts(0, FRACTIONS), (0, 0));

        let all_train = SplitFractions {
            train: 1.0,
            validation: 1.0,
        };
        assert_eq!(split_counts(10, all_train), (10, 0));
    }

    #[test]
    fn shuffle_split_is_a_partition() {
        let entries: Vec<u32> = (0..20).collect();
        let mut rng = StdRng::seed_from_u64(7);
        let sets = shuffle_split(entries, FRACTIONS, &mut rng);

        assert_eq!(sets.train.len(), 6);
        assert_eq!(sets.validation.len(), 2);

        let train: HashSet<u32> = sets.train.iter().copied().collect();
        let validation: HashSet<u32> = sets.validation.iter().copied().collect();
        assert!(train.is_disjoint(&validation));
        assert_eq!(train.len() + validation.len(), 8);
    }

    #[test]
    fn identical_seed_gives_identical_membership_and_order() {
        let entries: Vec<u32> = (0..50).collect();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let sets_a = shuffle_split(entries.clone(), FRACTIONS, &mut rng_a);
        let sets_b = shuffle_split(entries, FRACTIONS, &mut rng_b);

        assert_eq!(sets_a, sets_b);
    }

    #[test]
    fn single_entry_still_respects_no_overlap() {
        let mut rng = StdRng::seed_from_u64(1);
        let sets = shuffle_split(vec![0u32], FRACTIONS, &mut rng);
        assert_eq!(sets.train, vec![0]);
        assert!(sets.validation.is_empty());
    }
}
