//! Selection sort
//!
//! Scans the unsorted suffix tracking a running minimum, swapping at most
//! once per outer pass. A step is emitted each time a new minimum is found.

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
        format!("Starting Selection Sort with {} elements.", n),
        StepMetadata { comparisons, swaps, pass },
    );

    for i in 0..n.saturating_sub(1) {
        pass += 1;
        let mut min_index = i;

        rec.record_dense_with(
            &arr,
            Highlights {
                primary: vec![i],
                sorted: (0..i).collect(),
                ..Highlights::default()
            },
            format!(
                "Starting pass {}: looking for minimum element from position {}",
                pass, i
            ),
            StepMetadata { comparisons, swaps, pass },
        );

        for j in i + 1..n {
            comparisons += 1;
            rec.record_dense_with(
                &arr,
                Highlights {
                    primary: vec![min_index],
                    secondary: vec![j],
                    ..Highlights::default()
                },
                format!("Comparing {} with {}", arr[min_index].value, arr[j].value),
                StepMetadata { comparisons, swaps, pass },
            );

            if arr[j].value < arr[min_index].value {
                min_index = j;
                rec.record_dense_with(
                    &arr,
                    Highlights {
                        primary: vec![min_index],
                        ..Highlights::default()
                    },
                    format!(
                        "New minimum found: {} at position {}",
                        arr[min_index].value, min_index
                    ),
                    StepMetadata { comparisons, swaps, pass },
                );
            }
        }

        if min_index != i {
            arr.swap(i, min_index);
            swaps += 1;
            rec.record_dense_with(
                &arr,
                Highlights {
                    success: vec![i, min_index],
                    ..Highlights::default()
                },
                format!("Swapped {} with {}", arr[i].value, arr[min_index].value),
                StepMetadata { comparisons, swaps, pass },
            );
        } else {
            rec.record_dense_with(
                &arr,
                Highlights {
                    success: vec![i],
                    ..Highlights::default()
                },
                format!(
                    "No swap needed - {} is already in correct position",
                    arr[i].value
                ),
                StepMetadata { comparisons, swaps, pass },
            );
        }
    }

    rec.record_dense_with(
        &arr,
        fully_sorted(n),
        "Selection Sort complete! Array is sorted in ascending order.",
        StepMetadata { comparisons, swaps, pass },
    );
    rec.finish()
}
