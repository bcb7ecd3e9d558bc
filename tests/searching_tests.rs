// Integration tests for the searching step producers

use algotty::model::{Element, IdGen, Slot, Step};
use algotty::searching::{binary, linear, problems};

fn dense(values: &[i64]) -> Vec<Slot> {
    let mut ids = IdGen::new();
    values.iter().map(|&v| Some(ids.element(v))).collect()
}

fn elements(values: &[i64]) -> Vec<Element> {
    let mut ids = IdGen::new();
    values.iter().map(|&v| ids.element(v)).collect()
}

fn success_indices(steps: &[Step]) -> Vec<usize> {
    steps.last().expect("producer emitted no steps").highlights.success.clone()
}

#[test]
fn linear_search_finds_the_target_and_stops() {
    let snapshot = dense(&[4, 8, 15, 16]);
    let steps = linear::steps(&snapshot, 15);

    assert_eq!(steps.first().unwrap().description, "Starting Linear Search. Target: 15.");
    assert_eq!(steps.last().unwrap().description, "Target 15 found at index 2.");
    assert_eq!(success_indices(&steps), vec![2]);

    // Early exit: index 3 is never probed
    assert!(!steps.iter().any(|s| s.highlights.pointer == Some(3)));
}

#[test]
fn linear_search_skips_empty_slots() {
    let mut ids = IdGen::new();
    let snapshot = vec![Some(ids.element(4)), None, Some(ids.element(7))];
    let steps = linear::steps(&snapshot, 7);

    // One probe per occupied slot, never one for the placeholder
    let probed: Vec<usize> = steps.iter().filter_map(|s| s.highlights.pointer).collect();
    assert_eq!(probed, vec![0, 2]);
    assert_eq!(success_indices(&steps), vec![2]);
}

#[test]
fn linear_search_miss_ends_in_a_not_found_step() {
    let steps = linear::steps(&dense(&[1, 2, 3]), 9);
    assert_eq!(
        steps.last().unwrap().description,
        "Target 9 not found in the array. Search concluded."
    );
    assert!(steps.last().unwrap().highlights.success.is_empty());
}

#[test]
fn binary_search_finds_every_element() {
    let snapshot = dense(&[1, 3, 5, 7, 9]);
    for (i, value) in [1, 3, 5, 7, 9].into_iter().enumerate() {
        let steps = binary::steps(&snapshot, value);
        assert_eq!(success_indices(&steps), vec![i], "failed for target {}", value);
    }
}

#[test]
fn binary_search_narrates_the_halving() {
    let steps = binary::steps(&dense(&[1, 3, 5, 7, 9]), 7);
    assert_eq!(
        steps.first().unwrap().description,
        "Starting Binary Search. Target: 7. Search range is from index 0 to 4."
    );
    assert!(steps
        .iter()
        .any(|s| s.description == "Value at mid (5) < target (7). Discarding left half. New start is 3."));
    assert_eq!(
        steps.last().unwrap().description,
        "Target 7 found at index 3 (original index 3)."
    );
}

#[test]
fn binary_search_reports_original_indices_of_a_padded_snapshot() {
    let mut ids = IdGen::new();
    let snapshot = vec![
        None,
        Some(ids.element(1)),
        Some(ids.element(3)),
        None,
        Some(ids.element(5)),
    ];
    let steps = binary::steps(&snapshot, 5);
    assert_eq!(success_indices(&steps), vec![4]);
    assert_eq!(
        steps.last().unwrap().description,
        "Target 5 found at index 2 (original index 4)."
    );
}

#[test]
fn binary_search_marks_the_discarded_half_eliminated() {
    let steps = binary::steps(&dense(&[1, 3, 5, 7, 9]), 9);
    // After discarding the left half, indices 0..=2 are out of the range
    let narrowed = steps
        .iter()
        .find(|s| s.description.contains("Discarding left half"))
        .expect("expected a narrowing step");
    assert_eq!(narrowed.highlights.eliminated, vec![0, 1, 2]);
    assert_eq!(narrowed.highlights.start, Some(3));
    assert_eq!(narrowed.highlights.end, Some(4));
}

#[test]
fn binary_search_miss_concludes_without_success() {
    let steps = binary::steps(&dense(&[1, 3, 5, 7, 9]), 4);
    assert_eq!(
        steps.last().unwrap().description,
        "Target 4 not found in the array. Search concluded."
    );
    assert!(steps.last().unwrap().highlights.success.is_empty());
}

#[test]
fn binary_search_handles_an_empty_snapshot() {
    let steps = binary::steps(&[None, None], 3);
    assert_eq!(steps.len(), 2);
    assert_eq!(
        steps.last().unwrap().description,
        "Target 3 not found in the array. Search concluded."
    );
}

#[test]
fn first_occurrence_keeps_searching_left_after_a_match() {
    let steps = problems::first_occurrence(&elements(&[1, 2, 2, 2, 3, 4, 5]), 2);
    assert_eq!(success_indices(&steps), vec![1]);
    assert_eq!(
        steps.last().unwrap().description,
        "First occurrence of 2 found at index 1!"
    );
    // The first match at mid=3 is recorded before narrowing continues
    assert!(steps
        .iter()
        .any(|s| s.description.contains("Found target 2 at index 3")));
}

#[test]
fn last_occurrence_keeps_searching_right_after_a_match() {
    let steps = problems::last_occurrence(&elements(&[1, 2, 2, 2, 3, 4, 5]), 2);
    assert_eq!(success_indices(&steps), vec![3]);
    assert_eq!(
        steps.last().unwrap().description,
        "Last occurrence of 2 found at index 3!"
    );
}

#[test]
fn occurrence_searches_report_misses() {
    let steps = problems::first_occurrence(&elements(&[1, 3, 5]), 2);
    assert_eq!(steps.last().unwrap().description, "Target 2 not found in the array.");
}

#[test]
fn peak_element_climbs_to_the_summit() {
    let steps = problems::peak_element(&elements(&[1, 3, 5, 4, 2]));
    assert_eq!(success_indices(&steps), vec![2]);
    assert_eq!(
        steps.last().unwrap().description,
        "Peak element found at index 2 with value 5!"
    );
}

#[test]
fn peak_element_rejects_an_empty_array() {
    let steps = problems::peak_element(&[]);
    assert_eq!(
        steps.last().unwrap().description,
        "Error: Cannot search for a peak in an empty array."
    );
}

#[test]
fn rotated_search_picks_the_sorted_half() {
    let steps = problems::search_rotated(&elements(&[4, 5, 6, 7, 0, 1, 2]), 0);
    assert_eq!(success_indices(&steps), vec![4]);
    assert_eq!(steps.last().unwrap().description, "Target 0 found at index 4!");
    assert!(steps
        .iter()
        .any(|s| s.description.contains("is sorted but target 0 is not in range")));
}

#[test]
fn rotated_search_reports_misses() {
    let steps = problems::search_rotated(&elements(&[4, 5, 6, 7, 0, 1, 2]), 3);
    assert_eq!(
        steps.last().unwrap().description,
        "Target 3 not found in the rotated array."
    );
}

#[test]
fn find_min_locates_the_rotation_point() {
    let steps = problems::find_min_rotated(&elements(&[4, 5, 6, 7, 0, 1, 2]));
    assert_eq!(success_indices(&steps), vec![4]);
    assert_eq!(
        steps.last().unwrap().description,
        "Minimum element found at index 4 with value 0!"
    );
}

#[test]
fn find_min_on_an_unrotated_array_returns_the_first_index() {
    let steps = problems::find_min_rotated(&elements(&[1, 2, 3, 4]));
    assert_eq!(success_indices(&steps), vec![0]);
}

#[test]
fn sqrt_finds_exact_roots() {
    let steps = problems::sqrt_steps(&elements(&[16]), 16);
    assert_eq!(
        steps.last().unwrap().description,
        "Square root of 16 is 4! (4² = 16 <= 16)"
    );
}

#[test]
fn sqrt_floors_inexact_roots() {
    let steps = problems::sqrt_steps(&elements(&[8]), 8);
    assert_eq!(
        steps.last().unwrap().description,
        "Square root of 8 is 2! (2² = 4 <= 8)"
    );
}

#[test]
fn sqrt_handles_large_radicands_without_overflow() {
    let steps = problems::sqrt_steps(&elements(&[1]), 10_000_000_000);
    assert_eq!(
        steps.last().unwrap().description,
        "Square root of 10000000000 is 100000! (100000² = 10000000000 <= 10000000000)"
    );

    // The extreme radicand still resolves to the largest representable root
    let steps = problems::sqrt_steps(&elements(&[1]), i64::MAX);
    assert!(steps
        .last()
        .unwrap()
        .description
        .starts_with(&format!("Square root of {} is 3037000499!", i64::MAX)));
}

#[test]
fn sqrt_of_a_negative_number_is_a_single_error_step() {
    let steps = problems::sqrt_steps(&elements(&[4]), -4);
    assert_eq!(steps.len(), 1);
    assert_eq!(
        steps[0].description,
        "Error: Cannot take the square root of negative number -4."
    );
}

#[test]
fn step_indices_are_sequential_across_producers() {
    let snapshot = dense(&[1, 3, 5, 7]);
    for steps in [binary::steps(&snapshot, 5), linear::steps(&snapshot, 5)] {
        for (i, step) in steps.iter().enumerate() {
            assert_eq!(step.step_index, i);
        }
    }
}
