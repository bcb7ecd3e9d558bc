//! Bubble sort
//!
//! Adjacent compare-then-swap passes with the early-termination optimization:
//! a pass with zero swaps emits an explicit "array is sorted" step before the
//! terminal step.

use crate::model::{Element, Highlights, Step, StepMetadata, StepRecorder};

use super::fully_sorted;

pub fn steps(elements: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut arr = elements.to_vec();
    let n = arr.len();
    let mut comparisons = 0;
    let mut swaps = 0;
    let mut pass = 0;

    rec.record_dense_with(
        &arr,
        Highlights {
            unsorted: (0..n).collect(),
            ..Highlights::default()
        },
        format!("Starting Bubble Sort with {} elements.", n),
        StepMetadata { comparisons, swaps, pass },
    );

    for i in 0..n.saturating_sub(1) {
        pass += 1;
        let mut swapped = false;

        for j in 0..n - i - 1 {
            comparisons += 1;
            rec.record_dense_with(
                &arr,
                Highlights {
                    primary: vec![j],
                    secondary: vec![j + 1],
                    ..Highlights::default()
                },
                format!("Comparing {} with {}", arr[j].value, arr[j + 1].value),
                StepMetadata { comparisons, swaps, pass },
            );

            if arr[j].value > arr[j + 1].value {
                arr.swap(j, j + 1);
                swaps += 1;
                swapped = true;
                rec.record_dense_with(
                    &arr,
                    Highlights {
                        success: vec![j, j + 1],
                        ..Highlights::default()
                    },
                    format!("Swapped {} and {}", arr[j].value, arr[j + 1].value),
                    StepMetadata { comparisons, swaps, pass },
                );
            }
        }

        if !swapped {
            rec.record_dense_with(
                &arr,
                fully_sorted(n),
                "No swaps in this pass - array is sorted!",
                StepMetadata { comparisons, swaps, pass },
            );
            break;
        }
    }

    rec.record_dense_with(
        &arr,
        fully_sorted(n),
        "Bubble Sort complete! Array is sorted in ascending order.",
        StepMetadata { comparisons, swaps, pass },
    );
    rec.finish()
}
