// Integration tests for the sorting step producers

use algotty::model::{Element, IdGen, Step};
use algotty::sorting::{bubble, insertion, merge, quick, selection};

fn elements(values: &[i64]) -> Vec<Element> {
    let mut ids = IdGen::new();
    values.iter().map(|&v| ids.element(v)).collect()
}

fn final_values(steps: &[Step]) -> Vec<i64> {
    steps
        .last()
        .expect("producer emitted no steps")
        .array
        .iter()
        .flatten()
        .map(|e| e.value)
        .collect()
}

fn assert_indices_sequential(steps: &[Step]) {
    for (i, step) in steps.iter().enumerate() {
        assert_eq!(step.step_index, i, "step_index out of order at {}", i);
    }
}

#[test]
fn every_sort_produces_an_ascending_final_snapshot() {
    let input = [9, 3, 7, 1, 8, 2, 5];
    let producers: [fn(&[Element]) -> Vec<Step>; 5] = [
        bubble::steps,
        selection::steps,
        insertion::steps,
        merge::steps,
        quick::steps,
    ];
    for producer in producers {
        let steps = producer(&elements(&input));
        assert_eq!(final_values(&steps), vec![1, 2, 3, 5, 7, 8, 9]);
        assert_indices_sequential(&steps);
    }
}

#[test]
fn bubble_sort_records_each_swap() {
    let steps = bubble::steps(&elements(&[3, 1, 2]));

    // [3,1,2] needs exactly two swaps: 3<->1 and 3<->2
    let swap_steps: Vec<&Step> = steps
        .iter()
        .filter(|s| s.description.starts_with("Swapped"))
        .collect();
    assert_eq!(swap_steps.len(), 2);
    assert_eq!(swap_steps[0].description, "Swapped 1 and 3");
    assert_eq!(swap_steps[1].description, "Swapped 2 and 3");

    // Swap steps mark both positions as success and show the post-swap state
    let after_first: Vec<i64> = swap_steps[0].array.iter().flatten().map(|e| e.value).collect();
    assert_eq!(after_first, vec![1, 3, 2]);
    assert_eq!(swap_steps[0].highlights.success, vec![0, 1]);

    assert_eq!(
        steps.last().unwrap().description,
        "Bubble Sort complete! Array is sorted in ascending order."
    );
}

#[test]
fn bubble_sort_counts_all_comparisons_on_reversed_input() {
    let steps = bubble::steps(&elements(&[5, 4, 3, 2, 1]));
    let metadata = steps.last().unwrap().metadata.expect("sort steps carry metadata");
    // Reversed input defeats early termination: 4+3+2+1 comparisons
    assert_eq!(metadata.comparisons, 10);
    assert_eq!(metadata.swaps, 10);
}

#[test]
fn bubble_sort_terminates_early_on_sorted_input() {
    let steps = bubble::steps(&elements(&[1, 2, 3]));
    assert!(steps
        .iter()
        .any(|s| s.description == "No swaps in this pass - array is sorted!"));
    let metadata = steps.last().unwrap().metadata.unwrap();
    assert_eq!(metadata.comparisons, 2);
    assert_eq!(metadata.swaps, 0);
    assert_eq!(metadata.pass, 1);
}

#[test]
fn trivial_inputs_yield_only_start_and_terminal_steps() {
    for input in [&[][..], &[42][..]] {
        let steps = bubble::steps(&elements(input));
        assert_eq!(steps.len(), 2);
        let metadata = steps.last().unwrap().metadata.unwrap();
        assert_eq!(metadata.comparisons, 0);
        assert_eq!(metadata.swaps, 0);
    }
}

#[test]
fn comparison_counters_never_decrease() {
    let steps = selection::steps(&elements(&[4, 2, 7, 1, 3]));
    let mut previous = 0;
    for step in &steps {
        let metadata = step.metadata.expect("sort steps carry metadata");
        assert!(metadata.comparisons >= previous);
        previous = metadata.comparisons;
    }
}

#[test]
fn selection_sort_reports_found_minimums() {
    let steps = selection::steps(&elements(&[3, 1, 2]));
    assert!(steps
        .iter()
        .any(|s| s.description == "New minimum found: 1 at position 1"));
    assert!(steps
        .iter()
        .any(|s| s.description.starts_with("Swapped")));
    assert_eq!(final_values(&steps), vec![1, 2, 3]);
}

#[test]
fn insertion_sort_is_stable() {
    // Two equal values with distinct ids must keep their relative order
    let input = elements(&[2, 2, 1]);
    let first_two_id = input[0].id;
    let second_two_id = input[1].id;

    let steps = insertion::steps(&input);
    let last: Vec<Element> = steps.last().unwrap().array.iter().copied().flatten().collect();
    assert_eq!(last.iter().map(|e| e.value).collect::<Vec<_>>(), vec![1, 2, 2]);
    assert_eq!(last[1].id, first_two_id);
    assert_eq!(last[2].id, second_two_id);
}

#[test]
fn merge_sort_is_stable() {
    let input = elements(&[3, 1, 3, 2]);
    let first_three_id = input[0].id;
    let second_three_id = input[2].id;

    let steps = merge::steps(&input);
    let last: Vec<Element> = steps.last().unwrap().array.iter().copied().flatten().collect();
    assert_eq!(last.iter().map(|e| e.value).collect::<Vec<_>>(), vec![1, 2, 3, 3]);
    assert_eq!(last[2].id, first_three_id);
    assert_eq!(last[3].id, second_three_id);
}

#[test]
fn merge_sort_narrates_divide_and_merge_phases() {
    let steps = merge::steps(&elements(&[4, 1, 3, 2]));
    assert_eq!(
        steps.first().unwrap().description,
        "Starting Merge Sort on array [4, 1, 3, 2]"
    );
    assert!(steps
        .iter()
        .any(|s| s.description == "Dividing array from index 0 to 3 into two halves."));
    assert!(steps
        .iter()
        .any(|s| s.description == "Merging sorted subarrays: left=[1, 4], right=[2, 3]"));
    assert!(steps
        .iter()
        .any(|s| s.description == "Merged subarrays into: [1, 2, 3, 4]"));
}

#[test]
fn quick_sort_places_pivots_with_success_highlights() {
    let steps = quick::steps(&elements(&[3, 6, 2, 5]));
    // Last element of the full range is the first pivot
    assert!(steps.iter().any(|s| s.description == "Selecting pivot: 5"));

    let placed: Vec<&Step> = steps
        .iter()
        .filter(|s| s.description.starts_with("Placed pivot"))
        .collect();
    assert!(!placed.is_empty());
    for step in placed {
        assert_eq!(step.highlights.success.len(), 1);
    }
    assert_eq!(final_values(&steps), vec![2, 3, 5, 6]);
}

#[test]
fn recorded_steps_are_unchanged_by_later_mutation() {
    let steps = bubble::steps(&elements(&[2, 1]));
    // The start step must still show the unsorted input even though the
    // working buffer was mutated afterwards
    let start: Vec<i64> = steps[0].array.iter().flatten().map(|e| e.value).collect();
    assert_eq!(start, vec![2, 1]);
    assert_eq!(final_values(&steps), vec![1, 2]);
}

#[test]
fn sort_runs_are_deterministic() {
    let first = quick::steps(&elements(&[8, 3, 5, 1]));
    let second = quick::steps(&elements(&[8, 3, 5, 1]));
    assert_eq!(first, second);
}

#[test]
fn terminal_step_marks_every_position_sorted() {
    let steps = insertion::steps(&elements(&[4, 2, 3]));
    let last = steps.last().unwrap();
    assert_eq!(last.highlights.success, vec![0, 1, 2]);
}
