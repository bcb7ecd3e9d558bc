//! Binary search over a padded snapshot
//!
//! PRECONDITION: the non-null elements are ascending by value. The producer
//! does not validate this in release builds; sorting beforehand (see
//! [`crate::model::get_sorted_array`]) is the caller's responsibility, and an
//! unsorted input yields an unreliable result rather than an error. A
//! `debug_assert!` catches violations during development.
//!
//! The search runs on the compacted view, but every reported position is
//! translated back to its index in the original (possibly padded) snapshot
//! through a table built once at the start. Positions outside the active
//! range are tagged `eliminated`.

use crate::model::{Highlights, Slot, Step, StepRecorder};

pub fn steps(snapshot: &[Slot], target: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    let mut values: Vec<i64> = Vec::new();
    let mut original: Vec<usize> = Vec::new();
    for (i, slot) in snapshot.iter().enumerate() {
        if let Some(element) = slot {
            values.push(element.value);
            original.push(i);
        }
    }
    debug_assert!(
        values.windows(2).all(|w| w[0] <= w[1]),
        "binary search requires ascending input"
    );

    if values.is_empty() {
        rec.record(
            snapshot,
            Highlights::none(),
            format!("Starting Binary Search. Target: {}. The array is empty.", target),
        );
        rec.record(
            snapshot,
            Highlights::none(),
            format!("Target {} not found in the array. Search concluded.", target),
        );
        return rec.finish();
    }

    let mut start: i64 = 0;
    let mut end: i64 = values.len() as i64 - 1;

    rec.record(
        snapshot,
        range_pointers(&original, start, end),
        format!(
            "Starting Binary Search. Target: {}. Search range is from index {} to {}.",
            target, start, end
        ),
    );

    while start <= end {
        let mid = start + (end - start) / 2;
        let m = mid as usize;

        let mut highlights = range_pointers(&original, start, end);
        highlights.mid = Some(original[m]);
        rec.record(
            snapshot,
            highlights,
            format!(
                "Calculated mid = floor(({} + {}) / 2) = {}. Comparing target with value at mid: {}.",
                start, end, mid, values[m]
            ),
        );

        if values[m] == target {
            rec.record(
                snapshot,
                Highlights {
                    success: vec![original[m]],
                    ..Highlights::default()
                },
                format!(
                    "Target {} found at index {} (original index {}).",
                    target, mid, original[m]
                ),
            );
            return rec.finish();
        }

        let description = if values[m] < target {
            start = mid + 1;
            format!(
                "Value at mid ({}) < target ({}). Discarding left half. New start is {}.",
                values[m], target, start
            )
        } else {
            end = mid - 1;
            format!(
                "Value at mid ({}) > target ({}). Discarding right half. New end is {}.",
                values[m], target, end
            )
        };
        rec.record(snapshot, range_pointers(&original, start, end), description);
    }

    rec.record(
        snapshot,
        Highlights::none(),
        format!("Target {} not found in the array. Search concluded.", target),
    );
    rec.finish()
}

/// Start/end pointers at their original indices, with everything outside
/// `[start, end]` marked eliminated. Pointers are dropped once out of range.
fn range_pointers(original: &[usize], start: i64, end: i64) -> Highlights {
    let len = original.len() as i64;
    let mut highlights = Highlights::default();
    if (0..len).contains(&start) {
        highlights.start = Some(original[start as usize]);
    }
    if (0..len).contains(&end) {
        highlights.end = Some(original[end as usize]);
    }
    highlights.eliminated = original
        .iter()
        .enumerate()
        .filter(|(k, _)| (*k as i64) < start || (*k as i64) > end)
        .map(|(_, &index)| index)
        .collect();
    highlights
}
