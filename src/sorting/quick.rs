//! Quick sort
//!
//! Lomuto partition with the last element as pivot. Emits a pivot-selection
//! step, a comparison step per scanned element, a swap step only when the
//! positions actually differ, and a pivot-placed step with `success` on the
//! pivot's resting index. Ranges are inclusive `[low, high]`.

use crate::model::{Element, Highlights, Step, StepRecorder};

use super::{fully_sorted, join_values};

pub fn steps(elements: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut arr = elements.to_vec();
    let n = arr.len();

    rec.record_dense(
        &arr,
        Highlights::none(),
        format!("Starting Quick Sort on array [{}]", join_values(&arr)),
    );

    if n > 1 {
        sort_range(&mut arr, 0, n - 1, &mut rec);
    }

    rec.record_dense(
        &arr,
        fully_sorted(n),
        "Quick Sort complete! Array is sorted in ascending order.",
    );
    rec.finish()
}

fn sort_range(arr: &mut [Element], low: usize, high: usize, rec: &mut StepRecorder) {
    if low >= high {
        return;
    }

    rec.record_dense(
        arr,
        Highlights::none(),
        format!(
            "Quick sorting subarray from index {} to {}: [{}]",
            low,
            high,
            join_values(&arr[low..=high])
        ),
    );

    let pivot_index = partition(arr, low, high, rec);

    if pivot_index > low {
        sort_range(arr, low, pivot_index - 1, rec);
    }
    if pivot_index < high {
        sort_range(arr, pivot_index + 1, high, rec);
    }
}

fn partition(arr: &mut [Element], low: usize, high: usize, rec: &mut StepRecorder) -> usize {
    let pivot = arr[high];

    rec.record_dense(
        arr,
        Highlights {
            primary: vec![high],
            ..Highlights::default()
        },
        format!("Selecting pivot: {}", pivot.value),
    );

    // Boundary of the <= pivot region; the next small element lands here
    let mut i = low;
    for j in low..high {
        rec.record_dense(
            arr,
            Highlights {
                primary: vec![j],
                secondary: vec![high],
                ..Highlights::default()
            },
            format!("Comparing {} with pivot {}", arr[j].value, pivot.value),
        );

        if arr[j].value <= pivot.value {
            if i != j {
                arr.swap(i, j);
                rec.record_dense(
                    arr,
                    Highlights {
                        success: vec![i, j],
                        ..Highlights::default()
                    },
                    format!("Swapped {} and {}.", arr[i].value, arr[j].value),
                );
            }
            i += 1;
        }
    }

    arr.swap(i, high);
    rec.record_dense(
        arr,
        Highlights {
            success: vec![i],
            ..Highlights::default()
        },
        format!("Placed pivot {} at final position {}.", pivot.value, i),
    );

    i
}
