//! The data contract between producers and renderers
//!
//! - [`element`] — elements, slots, and the injectable id generator.
//! - [`step`] — 1D steps, highlight roles, and the emit-time-copy recorder.
//! - [`grid`] — 2D steps for matrix operations.
//!
//! Plus the snapshot helpers producers share: random array generation, the
//! silent pre-sort used before binary search, and compaction of a padded
//! snapshot down to its live elements.

pub mod element;
pub mod grid;
pub mod step;

pub use element::{Element, IdGen, Slot};
pub use grid::{Grid, GridHighlights, GridRecorder, GridStep};
pub use step::{Highlights, Step, StepMetadata, StepRecorder};

use rand::Rng;

/// Generate `size` fresh elements with values uniformly sampled from `[min, max]`
pub fn generate_random_array(
    size: usize,
    min: i64,
    max: i64,
    ids: &mut IdGen,
    rng: &mut impl Rng,
) -> Vec<Element> {
    (0..size).map(|_| ids.element(rng.gen_range(min..=max))).collect()
}

/// Sort a snapshot ascending by value without emitting steps
///
/// Non-null elements keep their ids and are stably reordered; placeholders
/// are pushed to the end. Used to silently prepare an array for binary
/// search, whose sortedness precondition is the caller's responsibility.
pub fn get_sorted_array(snapshot: &[Slot]) -> Vec<Slot> {
    let mut elements: Vec<Element> = snapshot.iter().copied().flatten().collect();
    elements.sort_by_key(|e| e.value);
    let mut sorted: Vec<Slot> = elements.into_iter().map(Some).collect();
    sorted.resize(snapshot.len(), None);
    sorted
}

/// The compacted view: non-null elements of a snapshot, in order
pub fn compact(snapshot: &[Slot]) -> Vec<Element> {
    snapshot.iter().copied().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_array_respects_bounds_and_mints_unique_ids() {
        let mut ids = IdGen::new();
        let mut rng = StdRng::seed_from_u64(7);
        let elements = generate_random_array(20, 1, 100, &mut ids, &mut rng);
        assert_eq!(elements.len(), 20);
        assert!(elements.iter().all(|e| (1..=100).contains(&e.value)));
        let mut seen: Vec<u64> = elements.iter().map(|e| e.id).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn sorted_array_keeps_length_and_pushes_nulls_to_the_end() {
        let mut ids = IdGen::new();
        let snapshot = vec![
            Some(ids.element(5)),
            None,
            Some(ids.element(2)),
            Some(ids.element(9)),
            None,
        ];
        let sorted = get_sorted_array(&snapshot);
        assert_eq!(sorted.len(), 5);
        let values: Vec<i64> = sorted.iter().copied().flatten().map(|e| e.value).collect();
        assert_eq!(values, vec![2, 5, 9]);
        assert!(sorted[3].is_none() && sorted[4].is_none());
    }

    #[test]
    fn sorting_is_stable_across_equal_values() {
        let mut ids = IdGen::new();
        let first = ids.element(4);
        let second = ids.element(4);
        let snapshot = vec![Some(first), Some(second)];
        let sorted = get_sorted_array(&snapshot);
        assert_eq!(sorted[0].map(|e| e.id), Some(first.id));
        assert_eq!(sorted[1].map(|e| e.id), Some(second.id));
    }
}
