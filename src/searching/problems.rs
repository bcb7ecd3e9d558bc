//! Binary-search problem variants
//!
//! Six classic problems replayed with the same pointer semantics as plain
//! binary search: first/last occurrence in a sorted array with duplicates,
//! peak element in a mountain array, search and minimum in a rotated sorted
//! array, and integer square root. These operate on purpose-built dense
//! arrays, so reported positions are compacted-view indices, not
//! original-snapshot indices.

use crate::model::{Element, Highlights, Step, StepRecorder};

/// First occurrence of `target` in a sorted array with duplicates
///
/// On a match, records the candidate and keeps narrowing into the left half.
pub fn first_occurrence(elements: &[Element], target: i64) -> Vec<Step> {
    occurrence(elements, target, Side::First)
}

/// Last occurrence of `target` in a sorted array with duplicates
pub fn last_occurrence(elements: &[Element], target: i64) -> Vec<Step> {
    occurrence(elements, target, Side::Last)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Last,
}

fn occurrence(elements: &[Element], target: i64, side: Side) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let values: Vec<i64> = elements.iter().map(|e| e.value).collect();
    let mut left: i64 = 0;
    let mut right: i64 = values.len() as i64 - 1;
    let mut result: Option<usize> = None;
    let which = match side {
        Side::First => "first",
        Side::Last => "last",
    };

    rec.record_dense(
        elements,
        bounds(left, right, values.len()),
        format!(
            "Starting {} occurrence search for target {}. Initial range: [{}, {}]",
            which, target, left, right
        ),
    );

    while left <= right {
        let mid = (left + right) / 2;
        let m = mid as usize;

        let mut probe = bounds(left, right, values.len());
        probe.mid = Some(m);
        rec.record_dense(
            elements,
            probe.clone(),
            format!("Checking middle element at index {} (value: {})", m, values[m]),
        );

        if values[m] == target {
            result = Some(m);
            let mut found = probe;
            found.success = vec![m];
            let (half, next) = match side {
                Side::First => ("left", "first"),
                Side::Last => ("right", "last"),
            };
            rec.record_dense(
                elements,
                found,
                format!(
                    "Found target {} at index {}. Checking if this is the {} occurrence by searching {} half.",
                    target, m, next, half
                ),
            );
            match side {
                Side::First => right = mid - 1,
                Side::Last => left = mid + 1,
            }
        } else if values[m] < target {
            rec.record_dense(
                elements,
                probe,
                format!(
                    "Target {} is greater than {}. Searching right half.",
                    target, values[m]
                ),
            );
            left = mid + 1;
        } else {
            rec.record_dense(
                elements,
                probe,
                format!(
                    "Target {} is less than {}. Searching left half.",
                    target, values[m]
                ),
            );
            right = mid - 1;
        }
    }

    match result {
        Some(index) => {
            let which = match side {
                Side::First => "First",
                Side::Last => "Last",
            };
            rec.record_dense(
                elements,
                Highlights {
                    success: vec![index],
                    ..Highlights::default()
                },
                format!("{} occurrence of {} found at index {}!", which, target, index),
            );
        }
        None => {
            rec.record_dense(
                elements,
                Highlights::none(),
                format!("Target {} not found in the array.", target),
            );
        }
    }

    rec.finish()
}

/// Peak element in a mountain array (strictly increasing then decreasing)
pub fn peak_element(elements: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let values: Vec<i64> = elements.iter().map(|e| e.value).collect();
    let mut left = 0usize;
    let mut right = values.len().saturating_sub(1);

    rec.record_dense(
        elements,
        bounds(left as i64, right as i64, values.len()),
        format!(
            "Starting peak element search in mountain array. Initial range: [{}, {}]",
            left, right
        ),
    );

    if values.is_empty() {
        rec.record_dense(
            elements,
            Highlights::none(),
            "Error: Cannot search for a peak in an empty array.",
        );
        return rec.finish();
    }

    while left < right {
        let mid = (left + right) / 2;

        let mut probe = bounds(left as i64, right as i64, values.len());
        probe.mid = Some(mid);
        rec.record_dense(
            elements,
            probe.clone(),
            format!("Checking middle element at index {} (value: {})", mid, values[mid]),
        );

        if values[mid] > values[mid + 1] {
            rec.record_dense(
                elements,
                probe,
                format!(
                    "Element at {} ({}) > element at {} ({}). Peak is in left half.",
                    mid,
                    values[mid],
                    mid + 1,
                    values[mid + 1]
                ),
            );
            right = mid;
        } else {
            rec.record_dense(
                elements,
                probe,
                format!(
                    "Element at {} ({}) < element at {} ({}). Peak is in right half.",
                    mid,
                    values[mid],
                    mid + 1,
                    values[mid + 1]
                ),
            );
            left = mid + 1;
        }
    }

    rec.record_dense(
        elements,
        Highlights {
            success: vec![left],
            ..Highlights::default()
        },
        format!("Peak element found at index {} with value {}!", left, values[left]),
    );
    rec.finish()
}

/// Search for `target` in a rotated sorted array (no duplicates)
///
/// At each probe, whichever half is internally sorted is checked for the
/// target's value range to decide the narrowing direction.
pub fn search_rotated(elements: &[Element], target: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let values: Vec<i64> = elements.iter().map(|e| e.value).collect();
    let mut left: i64 = 0;
    let mut right: i64 = values.len() as i64 - 1;

    rec.record_dense(
        elements,
        bounds(left, right, values.len()),
        format!(
            "Starting search for target {} in rotated sorted array. Initial range: [{}, {}]",
            target, left, right
        ),
    );

    while left <= right {
        let mid = (left + right) / 2;
        let m = mid as usize;

        let mut probe = bounds(left, right, values.len());
        probe.mid = Some(m);
        rec.record_dense(
            elements,
            probe.clone(),
            format!("Checking middle element at index {} (value: {})", m, values[m]),
        );

        if values[m] == target {
            rec.record_dense(
                elements,
                Highlights {
                    success: vec![m],
                    ..Highlights::default()
                },
                format!("Target {} found at index {}!", target, m),
            );
            return rec.finish();
        }

        if values[left as usize] <= values[m] {
            // Left half is sorted
            if target >= values[left as usize] && target < values[m] {
                rec.record_dense(
                    elements,
                    probe,
                    format!(
                        "Left half [{}, {}] is sorted and target {} is in its value range. Searching left half.",
                        left,
                        mid - 1,
                        target
                    ),
                );
                right = mid - 1;
            } else {
                rec.record_dense(
                    elements,
                    probe,
                    format!(
                        "Left half is sorted but target {} is not in range. Searching right half.",
                        target
                    ),
                );
                left = mid + 1;
            }
        } else {
            // Right half is sorted
            if target > values[m] && target <= values[right as usize] {
                rec.record_dense(
                    elements,
                    probe,
                    format!(
                        "Right half [{}, {}] is sorted and target {} is in its value range. Searching right half.",
                        mid + 1,
                        right,
                        target
                    ),
                );
                left = mid + 1;
            } else {
                rec.record_dense(
                    elements,
                    probe,
                    format!(
                        "Right half is sorted but target {} is not in range. Searching left half.",
                        target
                    ),
                );
                right = mid - 1;
            }
        }
    }

    rec.record_dense(
        elements,
        Highlights::none(),
        format!("Target {} not found in the rotated array.", target),
    );
    rec.finish()
}

/// Minimum element in a rotated sorted array
pub fn find_min_rotated(elements: &[Element]) -> Vec<Step> {
    let mut rec = StepRecorder::new();
    let values: Vec<i64> = elements.iter().map(|e| e.value).collect();
    let mut left = 0usize;
    let mut right = values.len().saturating_sub(1);

    rec.record_dense(
        elements,
        bounds(left as i64, right as i64, values.len()),
        format!(
            "Starting minimum element search in rotated sorted array. Initial range: [{}, {}]",
            left, right
        ),
    );

    if values.is_empty() {
        rec.record_dense(
            elements,
            Highlights::none(),
            "Error: Cannot search for a minimum in an empty array.",
        );
        return rec.finish();
    }

    while left < right {
        let mid = (left + right) / 2;

        let mut probe = bounds(left as i64, right as i64, values.len());
        probe.mid = Some(mid);
        rec.record_dense(
            elements,
            probe.clone(),
            format!("Checking middle element at index {} (value: {})", mid, values[mid]),
        );

        if values[mid] > values[right] {
            rec.record_dense(
                elements,
                probe,
                format!(
                    "Element at {} ({}) > element at {} ({}). Minimum is in right half.",
                    mid, values[mid], right, values[right]
                ),
            );
            left = mid + 1;
        } else {
            rec.record_dense(
                elements,
                probe,
                format!(
                    "Element at {} ({}) <= element at {} ({}). Minimum is in left half (including mid).",
                    mid, values[mid], right, values[right]
                ),
            );
            right = mid;
        }
    }

    rec.record_dense(
        elements,
        Highlights {
            success: vec![left],
            ..Highlights::default()
        },
        format!("Minimum element found at index {} with value {}!", left, values[left]),
    );
    rec.finish()
}

/// Integer square root of `x` by binary search over `[0, x]`
///
/// Finds the largest `mid` with `mid * mid <= x`, tracking the best candidate
/// across iterations. The snapshot is display-only; pointer highlights refer
/// to the numeric search range, not array positions, so only the terminal
/// step carries a highlight.
pub fn sqrt_steps(elements: &[Element], x: i64) -> Vec<Step> {
    let mut rec = StepRecorder::new();

    if x < 0 {
        rec.record_dense(
            elements,
            Highlights::none(),
            format!("Error: Cannot take the square root of negative number {}.", x),
        );
        return rec.finish();
    }

    // 3_037_000_499 is the integer sqrt of i64::MAX; any larger mid would
    // overflow mid * mid
    let mut left: i64 = 0;
    let mut right: i64 = x.min(3_037_000_499);
    let mut result: i64 = 0;

    rec.record_dense(
        elements,
        Highlights::none(),
        format!(
            "Finding square root of {} using binary search. Initial range: [{}, {}]",
            x, left, right
        ),
    );

    while left <= right {
        let mid = (left + right) / 2;

        rec.record_dense(
            elements,
            Highlights::none(),
            format!("Checking if {}² = {} <= {}", mid, mid * mid, x),
        );

        if mid * mid <= x {
            result = mid;
            rec.record_dense(
                elements,
                Highlights::none(),
                format!(
                    "{}² = {} <= {}. This could be the answer. Checking right half for better approximation.",
                    mid,
                    mid * mid,
                    x
                ),
            );
            left = mid + 1;
        } else {
            rec.record_dense(
                elements,
                Highlights::none(),
                format!("{}² = {} > {}. Square root must be in left half.", mid, mid * mid, x),
            );
            right = mid - 1;
        }
    }

    rec.record_dense(
        elements,
        Highlights::none(),
        format!(
            "Square root of {} is {}! ({}² = {} <= {})",
            x,
            result,
            result,
            result * result,
            x
        ),
    );
    rec.finish()
}

/// Pointer highlights for a compacted-index range, dropped once out of range
fn bounds(left: i64, right: i64, len: usize) -> Highlights {
    let len = len as i64;
    let mut highlights = Highlights::default();
    if (0..len).contains(&left) {
        highlights.start = Some(left as usize);
    }
    if (0..len).contains(&right) {
        highlights.end = Some(right as usize);
    }
    highlights
}
