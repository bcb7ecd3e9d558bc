//! Merge sort
//!
//! Recursive divide at the midpoint over an explicit shared working buffer.
//! Each merge compares the temporary halves, writes the merged run back into
//! the buffer at its offset, and emits `success` over the merged range.
//! Ranges are half-open `[start, end)`.

use crate::model::{Element, Highlights, Step, StepRecorder};

use super::{fully_sorted, join_values};

pub fn steps(elements: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let mut arr = elements.to_vec();
    let n = arr.len();

    rec.record_dense(
        &arr,
        Highlights::none(),
        format!("Starting Merge Sort on array [{}]", join_values(&arr)),
    );

    if n > 1 {
        sort_range(&mut arr, 0, n, &mut rec);
    }

    rec.record_dense(
        &arr,
        fully_sorted(n),
        "Merge Sort complete! Array is sorted in ascending order.",
    );
    rec.finish()
}

fn sort_range(arr: &mut [Element], start: usize, end: usize, rec: &mut StepRecorder) {
    if end - start <= 1 {
        return;
    }
    let mid = (start + end) / 2;

    rec.record_dense(
        arr,
        Highlights::none(),
        format!(
            "Dividing array from index {} to {} into two halves.",
            start,
            end - 1
        ),
    );

    sort_range(arr, start, mid, rec);
    sort_range(arr, mid, end, rec);

    let left = arr[start..mid].to_vec();
    let right = arr[mid..end].to_vec();

    rec.record_dense(
        arr,
        Highlights::none(),
        format!(
            "Merging sorted subarrays: left=[{}], right=[{}]",
            join_values(&left),
            join_values(&right)
        ),
    );

    merge(arr, &left, &right, start, rec);
}

fn merge(
    arr: &mut [Element],
    left: &[Element],
    right: &[Element],
    offset: usize,
    rec: &mut StepRecorder,
) {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        rec.record_dense(
            arr,
            Highlights {
                primary: vec![offset + i],
                secondary: vec![offset + left.len() + j],
                ..Highlights::default()
            },
            format!(
                "Comparing left ({}) with right ({})",
                left[i].value, right[j].value
            ),
        );

        // <= keeps equal elements in encounter order, so the sort is stable
        if left[i].value <= right[j].value {
            merged.push(left[i]);
            i += 1;
        } else {
            merged.push(right[j]);
            j += 1;
        }
    }
    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);

    for (k, element) in merged.iter().enumerate() {
        arr[offset + k] = *element;
    }

    rec.record_dense(
        arr,
        Highlights {
            success: (offset..offset + merged.len()).collect(),
            ..Highlights::default()
        },
        format!("Merged subarrays into: [{}]", join_values(&merged)),
    );
}
