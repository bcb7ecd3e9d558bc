//! Insertion sort
//!
//! Grows a sorted prefix one element at a time, shifting larger prefix
//! elements rightward with a step per shift before the insertion step.

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
        format!("Starting Insertion Sort with {} elements", n),
        StepMetadata { comparisons, swaps, pass },
    );

    for i in 1..n {
        pass += 1;
        let key = arr[i];
        let mut j = i;

        rec.record_dense_with(
            &arr,
            Highlights {
                primary: vec![i],
                sorted: (0..i).collect(),
                ..Highlights::default()
            },
            format!("Considering element {} at position {}", key.value, i),
            StepMetadata { comparisons, swaps, pass },
        );

        while j > 0 && arr[j - 1].value > key.value {
            comparisons += 1;
            rec.record_dense_with(
                &arr,
                Highlights {
                    primary: vec![i],
                    secondary: vec![j - 1],
                    ..Highlights::default()
                },
                format!(
                    "Comparing {} > {} - shifting {} right",
                    arr[j - 1].value,
                    key.value,
                    arr[j - 1].value
                ),
                StepMetadata { comparisons, swaps, pass },
            );

            arr[j] = arr[j - 1];
            j -= 1;

            rec.record_dense_with(
                &arr,
                Highlights {
                    primary: vec![i],
                    secondary: vec![j + 1],
                    ..Highlights::default()
                },
                format!("Shifted {} to position {}", arr[j + 1].value, j + 1),
                StepMetadata { comparisons, swaps, pass },
            );
        }

        arr[j] = key;
        swaps += 1;

        rec.record_dense_with(
            &arr,
            Highlights {
                success: vec![j],
                ..Highlights::default()
            },
            format!("Inserted {} at position {}", key.value, j),
            StepMetadata { comparisons, swaps, pass },
        );
    }

    rec.record_dense_with(
        &arr,
        fully_sorted(n),
        "Insertion Sort complete! Array is now sorted in ascending order",
        StepMetadata { comparisons, swaps, pass },
    );
    rec.finish()
}
